//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "postbook")]
#[command(about = "Terminal post manager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Folder holding posts.json (default: saved_posts)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub folder: Option<PathBuf>,

    /// Without a subcommand the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new post
    Create { title: String, content: String },

    /// Print a post
    Read { title: String },

    /// Replace the content of a post
    Update { title: String, content: String },

    /// Delete a post
    Delete { title: String },

    /// Find posts whose title or content contains a keyword (case-insensitive)
    Search { keyword: String },

    /// List all post titles
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_is_interactive() {
        let cli = Cli::try_parse_from(["postbook"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.folder.is_none());
    }

    #[test]
    fn test_folder_after_subcommand() {
        let cli = Cli::try_parse_from(["postbook", "list", "--folder", "notes"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List)));
        assert_eq!(cli.folder, Some(PathBuf::from("notes")));
    }

    #[test]
    fn test_create_requires_content() {
        assert!(Cli::try_parse_from(["postbook", "create", "title"]).is_err());
    }
}
