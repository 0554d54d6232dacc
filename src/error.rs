//! Error types for postbook

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for postbook
#[derive(Debug, Error)]
pub enum PostError {
    #[error("Title and content cannot be empty.")]
    EmptyField,

    #[error("A post with the title '{0}' already exists.")]
    DuplicateTitle(String),

    #[error("No post found with the title '{0}'.")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid posts document {}: {}", .path.display(), .reason)]
    InvalidDocument { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl PostError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PostError::NotFound(_) => 2,
            PostError::EmptyField | PostError::DuplicateTitle(_) => 3,
            _ => 1,
        }
    }

    /// True for failures while reading or writing the posts document
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            PostError::Io(_) | PostError::Json(_) | PostError::InvalidDocument { .. }
        )
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PostError::NotFound(title) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Titles are matched exactly (case-sensitive)\n\
                    • Run 'postbook list' to see every title\n\
                    • Run 'postbook search {}' for a case-insensitive match",
                    self, title
                )
            }
            PostError::DuplicateTitle(_) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Pick a different title\n\
                    • Use 'postbook update <title> <content>' to change the existing post",
                    self
                )
            }
            PostError::InvalidDocument { path, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Fix or remove {} and try again\n\
                    • Point at another folder with --folder or POSTBOOK_FOLDER",
                    self,
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PostError
pub type Result<T> = std::result::Result<T, PostError>;
