use clap::Parser;
use postbook::application::PostService;
use postbook::cli::output::{created_message, deleted_message, updated_message};
use postbook::cli::{format_search_results, format_title_list, run_menu, Cli, Commands};
use postbook::error::{PostError, Result};
use postbook::infrastructure::{Config, JsonFileRepository};
use std::io;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let folder = cli.folder.as_deref();

    match cli.command {
        None => {
            // Interactive: config and load problems are reported and the menu still starts
            let config = Config::resolve(Path::new("."), folder).unwrap_or_else(|e| {
                log::debug!("Config failed: {}", e);
                println!("Error loading posts: {}", e);
                Config::fallback(folder)
            });
            log::debug!("Using {:?}", config);

            let mut service = PostService::new(JsonFileRepository::from_config(&config));
            let stdin = io::stdin();
            run_menu(&mut service, stdin.lock(), io::stdout())?;
            Ok(())
        }
        Some(command) => {
            let config = Config::resolve(Path::new("."), folder)?;
            log::debug!("Using {:?}", config);

            // Scripted: refuse to work on top of a document that failed to load,
            // the next save would overwrite it
            let repository = JsonFileRepository::from_config(&config);
            let (mut service, load_error) = PostService::open(repository);
            if let Some(e) = load_error {
                return Err(e);
            }
            run_command(&mut service, command)
        }
    }
}

fn run_command(service: &mut PostService, command: Commands) -> Result<()> {
    match command {
        Commands::Create { title, content } => {
            let path = service.create(&title, &content)?;
            println!("{}", created_message(&title));
            print_saved(&path);
        }
        Commands::Read { title } => {
            let post = service
                .read(&title)
                .ok_or_else(|| PostError::NotFound(title.clone()))?;
            println!("{}", post);
        }
        Commands::Update { title, content } => {
            let path = service.update(&title, &content)?;
            println!("{}", updated_message(&title));
            print_saved(&path);
        }
        Commands::Delete { title } => {
            let path = service.delete(&title)?;
            println!("{}", deleted_message(&title));
            print_saved(&path);
        }
        Commands::Search { keyword } => {
            let hits = service.search(&keyword);
            print!("{}", with_newline(format_search_results(&keyword, &hits)));
        }
        Commands::List => {
            print!("{}", with_newline(format_title_list(&service.list_all())));
        }
    }
    Ok(())
}

fn print_saved(path: &Path) {
    println!("Posts saved to '{}'.", path.display());
}

fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
