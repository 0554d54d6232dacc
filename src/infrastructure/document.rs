//! JSON document codec for the post store
//!
//! The document is an object keyed by title, each value repeating the
//! title alongside the content:
//!
//! ```json
//! {
//!     "Hello": {
//!         "title": "Hello",
//!         "content": "World"
//!     }
//! }
//! ```

use crate::domain::{Post, PostStore};
use crate::error::{PostError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};
use std::path::Path;

/// Serialize the whole store as a pretty-printed JSON object
pub fn encode(store: &PostStore) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);

    let mut document = Map::new();
    for post in store.iter() {
        document.insert(post.title.clone(), serde_json::to_value(post)?);
    }
    document.serialize(&mut ser)?;

    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Parse a document into a store. `path` is only used for error reporting.
pub fn decode(text: &str, path: &Path) -> Result<PostStore> {
    let invalid = |reason: String| PostError::InvalidDocument {
        path: path.to_path_buf(),
        reason,
    };

    let root: Value = serde_json::from_str(text)?;
    let Value::Object(entries) = root else {
        return Err(invalid("top-level value is not an object".to_string()));
    };

    let mut store = PostStore::new();
    for (key, value) in entries {
        let post: Post = serde_json::from_value(value)
            .map_err(|e| invalid(format!("entry '{}': {}", key, e)))?;
        if post.title != key {
            return Err(invalid(format!(
                "entry '{}' has mismatched title '{}'",
                key, post.title
            )));
        }
        store.push_loaded(post);
    }

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> &'static Path {
        Path::new("posts.json")
    }

    #[test]
    fn test_encode_empty_store() {
        let text = encode(&PostStore::new()).unwrap();
        assert_eq!(text, "{}");
    }

    #[test]
    fn test_encode_layout() {
        let mut store = PostStore::new();
        store.create("Hello", "World").unwrap();
        let text = encode(&store).unwrap();
        assert_eq!(
            text,
            "{\n    \"Hello\": {\n        \"title\": \"Hello\",\n        \"content\": \"World\"\n    }\n}"
        );
    }

    #[test]
    fn test_round_trip_keeps_order_and_content() {
        let mut store = PostStore::new();
        store.create("zeta", "last letter").unwrap();
        store.create("alpha", "first letter").unwrap();
        store.create("Ünïcode", "naïve café").unwrap();
        store.update("alpha", "").unwrap();

        let decoded = decode(&encode(&store).unwrap(), path()).unwrap();
        assert_eq!(decoded, store);
        assert_eq!(decoded.list_all(), vec!["zeta", "alpha", "Ünïcode"]);
    }

    #[test]
    fn test_decode_malformed_json() {
        let err = decode("{ not json", path()).unwrap_err();
        assert!(matches!(err, PostError::Json(_)));
    }

    #[test]
    fn test_decode_non_object_root() {
        let err = decode("[1, 2]", path()).unwrap_err();
        assert!(matches!(err, PostError::InvalidDocument { .. }));
    }

    #[test]
    fn test_decode_missing_field() {
        let err = decode(r#"{"A": {"title": "A"}}"#, path()).unwrap_err();
        match err {
            PostError::InvalidDocument { reason, .. } => assert!(reason.contains("content")),
            other => panic!("Expected InvalidDocument, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_key_title_mismatch() {
        let err = decode(r#"{"A": {"title": "B", "content": "x"}}"#, path()).unwrap_err();
        match err {
            PostError::InvalidDocument { reason, .. } => assert!(reason.contains("mismatched")),
            other => panic!("Expected InvalidDocument, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_repeated_key_keeps_last() {
        let text = r#"{
            "A": {"title": "A", "content": "1"},
            "A": {"title": "A", "content": "2"}
        }"#;
        let store = decode(text, path()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.read("A").unwrap().content, "2");
    }

    #[test]
    fn test_decode_many_entries_in_order() {
        let mut store = PostStore::new();
        for i in (0..2000).rev() {
            store.create(&format!("post {}", i), "body").unwrap();
        }

        let decoded = decode(&encode(&store).unwrap(), path()).unwrap();

        assert_eq!(decoded.len(), 2000);
        assert_eq!(decoded.list_all().first(), Some(&"post 1999"));
        assert_eq!(decoded.list_all().last(), Some(&"post 0"));
    }
}
