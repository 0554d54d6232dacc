//! CLI layer - Command-line interface

pub mod commands;
pub mod menu;
pub mod output;

pub use commands::{Cli, Commands};
pub use menu::{run_menu, MenuChoice};
pub use output::{format_search_results, format_title_list};
