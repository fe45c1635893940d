use clap::Parser;
use directories::ProjectDirs;
use notez::api::{NoteUpdate, NotezApi};
use notez::config::NotezConfig;
use notez::error::{NotezError, Result};
use notez::logging::init_logging;
use std::path::{Path, PathBuf};
use tracing::debug;

mod cli;
use cli::args::{Cli, Commands};
use cli::print::{print_messages, print_notes_with_content, print_titles, print_titles_with_ids};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_dir = resolve_config_dir(&cli)?;
    let config = NotezConfig::load(&config_dir)?;

    init_logging(&config.log_level, cli.verbose);
    if !config.color {
        colored::control::set_override(false);
    }
    debug!(config_dir = %config_dir.display(), "configuration loaded");

    match cli.command {
        Some(Commands::Demo { json }) => handle_demo(json),
        Some(Commands::Config { key, value }) => handle_config(config, &config_dir, key, value),
        None => handle_demo(false),
    }
}

fn resolve_config_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.config {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "notez", "notez")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            NotezError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "could not determine config directory",
            ))
        })
}

fn handle_demo(json: bool) -> Result<()> {
    let mut api = NotezApi::in_memory();

    println!("=== Notes App Demo ===\n");

    println!("Adding notes...");
    let shopping = api.create_note("Shopping List", "Milk, Bread, Eggs")?;
    let meeting = api.create_note("Meeting Notes", "Discuss project timeline")?;
    let ideas = api.create_note("Ideas", "Build a notes app")?;
    print_messages(&shopping.messages);
    print_messages(&meeting.messages);
    print_messages(&ideas.messages);
    println!();

    println!("All notes:");
    print_notes_with_content(&api.list_notes()?.listed_notes);
    println!();

    println!("Searching for notes with 'note' in title:");
    print_titles(&api.search_notes("note")?.listed_notes);
    println!();

    let shopping_id = first_id(&shopping)?;
    println!("Updating note {}...", shopping_id);
    let update = NoteUpdate::new(
        Some("Updated Shopping List".to_string()),
        Some("Milk, Bread, Eggs, Butter".to_string()),
    );
    let updated = api.update_note(shopping_id, &update)?;
    print_messages(&updated.messages);
    println!();

    let meeting_id = first_id(&meeting)?;
    println!("Deleting note {}...", meeting_id);
    let deleted = api.delete_notes(&[meeting_id])?;
    println!("Note deleted: {}", !deleted.affected_notes.is_empty());
    println!();

    let count = api.count_notes()?.count.unwrap_or_default();
    println!("Final notes count: {}", count);
    let remaining = api.list_notes()?.listed_notes;
    if json {
        println!("{}", serde_json::to_string_pretty(&remaining)?);
    } else {
        println!("Remaining notes:");
        print_titles_with_ids(&remaining);
    }

    Ok(())
}

fn first_id(result: &notez::api::CmdResult) -> Result<notez::NoteId> {
    result
        .affected_notes
        .first()
        .and_then(|note| note.id())
        .ok_or_else(|| NotezError::InvalidArgument("command returned no stored note".into()))
}

fn handle_config(
    mut config: NotezConfig,
    config_dir: &Path,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) => {
            println!("log-level = {}", config.log_level);
            println!("color = {}", config.color);
        }
        (Some("log-level"), None) => println!("log-level = {}", config.log_level),
        (Some("color"), None) => println!("color = {}", config.color),
        (Some("log-level"), Some(v)) => {
            config.set_log_level(&v)?;
            config.save(config_dir)?;
            println!("log-level = {}", config.log_level);
        }
        (Some("color"), Some(v)) => {
            config.set_color(&v)?;
            config.save(config_dir)?;
            println!("color = {}", config.color);
        }
        (Some(other), _) => {
            return Err(NotezError::InvalidArgument(format!(
                "Unknown config key: {}",
                other
            )));
        }
    }
    Ok(())
}
