//! In-memory post store
//!
//! Posts are kept in insertion order and looked up by a linear scan over
//! their titles. Titles are unique and matched exactly (case-sensitive).

use super::Post;
use crate::error::{PostError, Result};

/// Keyed collection of posts, title → post
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    /// Create an empty store
    pub fn new() -> Self {
        PostStore::default()
    }

    /// Create a new post.
    ///
    /// Rejects empty or whitespace-only titles and content, and titles that
    /// are already present. The store is untouched on rejection.
    pub fn create(&mut self, title: &str, content: &str) -> Result<()> {
        if title.trim().is_empty() || content.trim().is_empty() {
            return Err(PostError::EmptyField);
        }
        if self.contains(title) {
            return Err(PostError::DuplicateTitle(title.to_string()));
        }
        self.posts.push(Post::new(title, content));
        Ok(())
    }

    /// Look up a post by exact title
    pub fn read(&self, title: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.title == title)
    }

    /// Replace the content of an existing post.
    ///
    /// Unlike `create`, the new content is not validated and may be empty.
    pub fn update(&mut self, title: &str, new_content: &str) -> Result<()> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.title == title)
            .ok_or_else(|| PostError::NotFound(title.to_string()))?;
        post.content = new_content.to_string();
        Ok(())
    }

    /// Remove a post, returning it
    pub fn delete(&mut self, title: &str) -> Result<Post> {
        let idx = self
            .position(title)
            .ok_or_else(|| PostError::NotFound(title.to_string()))?;
        Ok(self.posts.remove(idx))
    }

    /// Posts whose title or content contains `keyword`, ignoring case
    pub fn search(&self, keyword: &str) -> Vec<&Post> {
        let needle = keyword.to_lowercase();
        self.posts
            .iter()
            .filter(|p| p.matches_lowercase(&needle))
            .collect()
    }

    /// All titles in store order
    pub fn list_all(&self) -> Vec<&str> {
        self.posts.iter().map(|p| p.title.as_str()).collect()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.position(title).is_some()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter()
    }

    /// Append a post read back from disk. Titles come from the keys of one
    /// JSON object, so they are already unique.
    pub(crate) fn push_loaded(&mut self, post: Post) {
        self.posts.push(post);
    }

    fn position(&self, title: &str) -> Option<usize> {
        self.posts.iter().position(|p| p.title == title)
    }
}
