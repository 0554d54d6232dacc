//! Configuration management

use crate::error::{PostError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Folder holding the posts document when nothing else is configured
pub const DEFAULT_FOLDER: &str = "saved_posts";

/// File name of the posts document inside the folder
pub const DEFAULT_FILE: &str = "posts.json";

/// Optional config file looked up in the working directory
pub const CONFIG_FILE: &str = "postbook.toml";

/// Environment variable overriding the storage folder
pub const FOLDER_ENV: &str = "POSTBOOK_FOLDER";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub folder: PathBuf,
    pub file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            folder: PathBuf::from(DEFAULT_FOLDER),
            file_name: DEFAULT_FILE.to_string(),
        }
    }
}

impl Config {
    /// Resolve the effective config.
    ///
    /// Precedence: explicit folder > POSTBOOK_FOLDER > postbook.toml in `dir` > defaults.
    pub fn resolve(dir: &Path, folder_override: Option<&Path>) -> Result<Self> {
        let mut config = Self::load_from_dir(dir)?;

        if let Some(folder) = folder_override {
            config.folder = folder.to_path_buf();
        } else if let Ok(folder) = std::env::var(FOLDER_ENV) {
            if folder.trim().is_empty() {
                return Err(PostError::Config(format!("{} is set but empty", FOLDER_ENV)));
            }
            config.folder = PathBuf::from(folder);
        }

        config.validate()?;
        Ok(config)
    }

    /// Defaults with an explicit folder applied, used when resolving fails
    pub fn fallback(folder_override: Option<&Path>) -> Self {
        let mut config = Config::default();
        if let Some(folder) = folder_override {
            config.folder = folder.to_path_buf();
        }
        config
    }

    /// Load config from postbook.toml in the given directory, or defaults if absent
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(PostError::Io(e)),
        };

        log::debug!("Reading config from {}", config_path.display());
        Ok(toml::from_str(&contents)?)
    }

    fn validate(&self) -> Result<()> {
        let mut components = Path::new(&self.file_name).components();
        let plain = matches!(components.next(), Some(Component::Normal(_)))
            && components.next().is_none();
        if self.file_name.trim().is_empty() || !plain {
            return Err(PostError::Config(format!(
                "file_name must be a plain file name, got '{}'",
                self.file_name
            )));
        }
        Ok(())
    }
}
