//! Interactive menu loop
//!
//! Reads one line per prompt from any `BufRead` and writes to any `Write`,
//! so the loop can be driven from tests as well as from a terminal.

use crate::application::{LoadStatus, PostService};
use crate::cli::output::{
    created_message, deleted_message, format_search_results, format_title_list, updated_message,
};
use crate::error::{PostError, Result};
use crate::infrastructure::PostRepository;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

const MENU: &str = "\nPost Manager\n\
1. Create Post\n\
2. Read Post\n\
3. Update Post\n\
4. Delete Post\n\
5. Search Posts\n\
6. Show All Posts\n\
7. Exit";

/// Menu entries, selected by number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    Read,
    Update,
    Delete,
    Search,
    ShowAll,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Create),
            "2" => Ok(MenuChoice::Read),
            "3" => Ok(MenuChoice::Update),
            "4" => Ok(MenuChoice::Delete),
            "5" => Ok(MenuChoice::Search),
            "6" => Ok(MenuChoice::ShowAll),
            "7" => Ok(MenuChoice::Exit),
            other => Err(format!("Invalid menu option: '{}'", other)),
        }
    }
}

/// Load the document once, then run the menu until Exit or end of input.
///
/// Only failures writing to `output` or reading `input` end the loop early;
/// post and storage errors are printed and the loop continues.
pub fn run_menu<R, I, O>(service: &mut PostService<R>, input: I, output: O) -> io::Result<()>
where
    R: PostRepository,
    I: BufRead,
    O: Write,
{
    let mut session = Session { input, output };

    match service.load(None) {
        Ok(LoadStatus::Loaded(path)) => {
            writeln!(session.output, "Posts loaded from '{}'.", path.display())?
        }
        Ok(LoadStatus::Missing(path)) => {
            writeln!(session.output, "No posts found at '{}'.", path.display())?
        }
        Err(e) => {
            log::debug!("Load failed: {}", e);
            writeln!(session.output, "Error loading posts: {}", e)?
        }
    }

    loop {
        writeln!(session.output, "{}", MENU)?;
        let Some(line) = session.prompt("Choose an option (1-7): ")? else {
            break;
        };

        let choice = match line.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(e) => {
                log::debug!("{}", e);
                writeln!(session.output, "Invalid option. Please try again.")?;
                continue;
            }
        };

        if !session.dispatch(service, choice)? {
            break;
        }
    }

    writeln!(session.output, "Exiting Post Manager. Goodbye!")?;
    session.output.flush()
}

struct Session<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Session<I, O> {
    /// Print a prompt and read one trimmed line; None at end of input
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Handle one menu choice. Returns false when the loop should stop.
    fn dispatch<R: PostRepository>(
        &mut self,
        service: &mut PostService<R>,
        choice: MenuChoice,
    ) -> io::Result<bool> {
        match choice {
            MenuChoice::Create => {
                let Some(title) = self.prompt("Enter the post title: ")? else {
                    return Ok(false);
                };
                let Some(content) = self.prompt("Enter the post content: ")? else {
                    return Ok(false);
                };
                let result = service.create(&title, &content);
                self.report(result, &created_message(&title))?;
            }
            MenuChoice::Read => {
                let Some(title) = self.prompt("Enter the title of the post to read: ")? else {
                    return Ok(false);
                };
                match service.read(&title) {
                    Some(post) => writeln!(self.output, "{}", post)?,
                    None => writeln!(self.output, "{}", PostError::NotFound(title.clone()))?,
                }
            }
            MenuChoice::Update => {
                let Some(title) = self.prompt("Enter the title of the post to update: ")? else {
                    return Ok(false);
                };
                if service.read(&title).is_none() {
                    writeln!(self.output, "{}", PostError::NotFound(title))?;
                    return Ok(true);
                }
                let prompt = format!("Enter new content for '{}': ", title);
                let Some(content) = self.prompt(&prompt)? else {
                    return Ok(false);
                };
                let result = service.update(&title, &content);
                self.report(result, &updated_message(&title))?;
            }
            MenuChoice::Delete => {
                let Some(title) = self.prompt("Enter the title of the post to delete: ")? else {
                    return Ok(false);
                };
                let result = service.delete(&title);
                self.report(result, &deleted_message(&title))?;
            }
            MenuChoice::Search => {
                let Some(keyword) = self.prompt("Enter a keyword to search: ")? else {
                    return Ok(false);
                };
                let hits = service.search(&keyword);
                write_block(&mut self.output, &format_search_results(&keyword, &hits))?;
            }
            MenuChoice::ShowAll => {
                let titles = service.list_all();
                write_block(&mut self.output, &format_title_list(&titles))?;
            }
            MenuChoice::Exit => return Ok(false),
        }

        Ok(true)
    }

    /// Print the outcome of a mutating operation.
    ///
    /// A storage failure means the change was applied in memory but not saved.
    fn report(&mut self, result: Result<PathBuf>, success: &str) -> io::Result<()> {
        match result {
            Ok(path) => {
                writeln!(self.output, "{}", success)?;
                writeln!(self.output, "Posts saved to '{}'.", path.display())
            }
            Err(e) if e.is_storage() => {
                log::debug!("Save failed: {}", e);
                writeln!(self.output, "{}", success)?;
                writeln!(self.output, "Error saving posts: {}", e)
            }
            Err(e) => writeln!(self.output, "{}", e),
        }
    }
}

/// Write text that may or may not already end in a newline
fn write_block<O: Write>(output: &mut O, text: &str) -> io::Result<()> {
    if text.ends_with('\n') {
        write!(output, "{}", text)
    } else {
        writeln!(output, "{}", text)
    }
}
