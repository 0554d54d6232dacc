//! Post management use cases

use crate::domain::{Post, PostStore};
use crate::error::{PostError, Result};
use crate::infrastructure::{JsonFileRepository, LoadOutcome, PostRepository};
use std::path::{Path, PathBuf};

/// What a load found at the document path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// The store was replaced with the document's posts
    Loaded(PathBuf),
    /// No document yet; the store was left as it was
    Missing(PathBuf),
}

/// Service owning the in-memory store and mirroring it to a repository.
///
/// Mutations apply to memory first and are then saved in full. A failed save
/// keeps the in-memory change; memory and disk differ until the next
/// successful save.
pub struct PostService<R: PostRepository = JsonFileRepository> {
    store: PostStore,
    repository: R,
}

impl<R: PostRepository> PostService<R> {
    /// Create a service with an empty store
    pub fn new(repository: R) -> Self {
        PostService {
            store: PostStore::new(),
            repository,
        }
    }

    /// Create a service and load the document once.
    ///
    /// Load failures do not prevent startup: the store stays empty and the
    /// error is handed back next to the service.
    pub fn open(repository: R) -> (Self, Option<PostError>) {
        let mut service = Self::new(repository);
        let err = service.load(None).err();
        (service, err)
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    /// Replace the store with the document's contents.
    ///
    /// A missing document or any error leaves the current store untouched.
    pub fn load(&mut self, folder: Option<&Path>) -> Result<LoadStatus> {
        let path = self.repository.path(folder);
        match self.repository.load(folder)? {
            LoadOutcome::Loaded(store) => {
                self.store = store;
                Ok(LoadStatus::Loaded(path))
            }
            LoadOutcome::Missing => Ok(LoadStatus::Missing(path)),
        }
    }

    /// Write the whole store
    pub fn save(&self, folder: Option<&Path>) -> Result<PathBuf> {
        self.repository.save(&self.store, folder)
    }

    /// Create a post; returns the path it was saved to
    pub fn create(&mut self, title: &str, content: &str) -> Result<PathBuf> {
        self.create_in(title, content, None)
    }

    /// Create a post and save to `folder` (or the configured folder)
    pub fn create_in(
        &mut self,
        title: &str,
        content: &str,
        folder: Option<&Path>,
    ) -> Result<PathBuf> {
        self.store.create(title, content)?;
        log::debug!("Created post '{}'", title);
        self.save(folder)
    }

    pub fn read(&self, title: &str) -> Option<&Post> {
        self.store.read(title)
    }

    pub fn update(&mut self, title: &str, new_content: &str) -> Result<PathBuf> {
        self.update_in(title, new_content, None)
    }

    pub fn update_in(
        &mut self,
        title: &str,
        new_content: &str,
        folder: Option<&Path>,
    ) -> Result<PathBuf> {
        self.store.update(title, new_content)?;
        log::debug!("Updated post '{}'", title);
        self.save(folder)
    }

    pub fn delete(&mut self, title: &str) -> Result<PathBuf> {
        self.delete_in(title, None)
    }

    pub fn delete_in(&mut self, title: &str, folder: Option<&Path>) -> Result<PathBuf> {
        self.store.delete(title)?;
        log::debug!("Deleted post '{}'", title);
        self.save(folder)
    }

    pub fn search(&self, keyword: &str) -> Vec<&Post> {
        self.store.search(keyword)
    }

    pub fn list_all(&self) -> Vec<&str> {
        self.store.list_all()
    }
}
