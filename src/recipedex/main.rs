use clap::Parser;
use colored::*;
use console::Term;
use directories::ProjectDirs;
use recipedex::api::{CmdMessage, MessageLevel, RecipedexApi};
use recipedex::config::RecipedexConfig;
use recipedex::error::{RecipedexError, Result};
use recipedex::model::Field;
use recipedex::store::fs::FileStore;
use recipedex::ui::render::render_lines;
use recipedex::view::SortKey;
use std::path::PathBuf;
use std::str::FromStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_context()?;

    match cli.command {
        Some(Commands::Add {
            name,
            category,
            link,
        }) => handle_add(&mut api, &name, &category, &link),
        Some(Commands::List { category, sort }) => {
            handle_list(&mut api, category.as_deref(), sort.as_deref())
        }
        Some(Commands::Edit {
            index,
            field,
            value,
        }) => handle_edit(&mut api, index, &field, &value),
        Some(Commands::Delete { index, yes }) => handle_delete(&mut api, index, yes),
        Some(Commands::Categories) => handle_categories(&api),
        None => handle_list(&mut api, None, None),
    }
}

fn init_context() -> Result<RecipedexApi<FileStore>> {
    let data_dir = data_dir();
    let config = RecipedexConfig::load(&data_dir)?;
    let store = FileStore::new(data_dir);
    RecipedexApi::with_debounce(store, config.debounce())
}

// RECIPEDEX_HOME overrides the platform data dir (used by the e2e tests).
fn data_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("RECIPEDEX_HOME") {
        return PathBuf::from(home);
    }
    let proj_dirs = ProjectDirs::from("com", "recipedex", "recipedex")
        .expect("Could not determine data dir");
    proj_dirs.data_dir().to_path_buf()
}

fn handle_add(api: &mut RecipedexApi<FileStore>, name: &str, category: &str, link: &str) -> Result<()> {
    let result = api.add(name, category, link)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    api: &mut RecipedexApi<FileStore>,
    category: Option<&str>,
    sort: Option<&str>,
) -> Result<()> {
    let sort = sort
        .map(|s| SortKey::from_str(s).map_err(RecipedexError::Api))
        .transpose()?;
    let result = api.list(category, sort)?;
    for line in render_lines(&result.cards) {
        println!("{}", line);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(api: &mut RecipedexApi<FileStore>, index: usize, field: &str, value: &str) -> Result<()> {
    let field = Field::from_str(field).map_err(RecipedexError::Api)?;
    let result = api.edit(index, field, value)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut RecipedexApi<FileStore>, index: usize, yes: bool) -> Result<()> {
    let message = api.delete_message(index)?;

    let confirmed = if yes {
        true
    } else {
        println!("{}", message.yellow());
        let term = Term::stdout();
        term.write_str("Delete? [y/N] ").map_err(RecipedexError::Io)?;
        let answer = term.read_line().map_err(RecipedexError::Io)?;
        answer.trim().eq_ignore_ascii_case("y")
    };

    let result = if confirmed {
        api.confirm_delete()?
    } else {
        api.cancel_delete()
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_categories(api: &RecipedexApi<FileStore>) -> Result<()> {
    let result = api.categories();
    if result.categories.is_empty() {
        println!("No categories yet.");
    }
    for category in &result.categories {
        println!("{}", category);
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
