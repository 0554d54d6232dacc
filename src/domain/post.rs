//! Post value type

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single titled post. The title is its only identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub content: String,
}

impl Post {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Post {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Case-insensitive substring match against title or content.
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Title: {}\nContent: {}", self.title, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let post = Post::new("Hello", "World");
        assert_eq!(post.to_string(), "Title: Hello\nContent: World");
    }

    #[test]
    fn test_matches_title_or_content() {
        let post = Post::new("Groceries", "Buy MILK and eggs");
        assert!(post.matches_lowercase("milk"));
        assert!(post.matches_lowercase("grocer"));
        assert!(!post.matches_lowercase("bread"));
    }

    #[test]
    fn test_serde_field_names() {
        let post = Post::new("T", "C");
        let json = serde_json::to_string(&post).unwrap();
        assert_eq!(json, r#"{"title":"T","content":"C"}"#);
    }
}
