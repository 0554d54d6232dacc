//! File system repository

use crate::domain::PostStore;
use crate::error::{PostError, Result};
use crate::infrastructure::{document, Config};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of reading the posts document
#[derive(Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The document existed and was parsed
    Loaded(PostStore),
    /// No document at the path yet
    Missing,
}

/// Abstract repository for post persistence.
///
/// Every method takes an optional folder that replaces the configured one
/// for that call only.
pub trait PostRepository {
    /// Location of the posts document
    fn path(&self, folder: Option<&Path>) -> PathBuf;

    /// Write the whole store, replacing any existing document
    fn save(&self, store: &PostStore, folder: Option<&Path>) -> Result<PathBuf>;

    /// Read the document back
    fn load(&self, folder: Option<&Path>) -> Result<LoadOutcome>;
}

/// JSON file implementation of PostRepository
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    pub folder: PathBuf,
    pub file_name: String,
}

impl JsonFileRepository {
    /// Create a repository storing `file_name` inside `folder`
    pub fn new(folder: PathBuf, file_name: impl Into<String>) -> Self {
        JsonFileRepository {
            folder,
            file_name: file_name.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.folder.clone(), config.file_name.clone())
    }
}

impl Default for JsonFileRepository {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl PostRepository for JsonFileRepository {
    fn path(&self, folder: Option<&Path>) -> PathBuf {
        folder.unwrap_or(self.folder.as_path()).join(&self.file_name)
    }

    fn save(&self, store: &PostStore, folder: Option<&Path>) -> Result<PathBuf> {
        let path = self.path(folder);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        // Plain overwrite; a crash mid-write can truncate the file.
        fs::write(&path, document::encode(store)?)?;
        log::info!("Posts saved to '{}' ({} posts)", path.display(), store.len());
        Ok(path)
    }

    fn load(&self, folder: Option<&Path>) -> Result<LoadOutcome> {
        let path = self.path(folder);

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No posts found at '{}'", path.display());
                return Ok(LoadOutcome::Missing);
            }
            Err(e) => return Err(PostError::Io(e)),
        };

        let store = document::decode(&text, &path)?;
        log::info!("Posts loaded from '{}' ({} posts)", path.display(), store.len());
        Ok(LoadOutcome::Loaded(store))
    }
}
