mod app;
mod commands;
mod render;
#[cfg(feature = "tui")]
mod tui;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "flashdeck", about = "Flashcard category browser and review TUI", version)]
struct Cli {
    /// Config file (default: <config dir>/flashdeck/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON deck file to use instead of the built-in categories
    #[arg(long, global = true)]
    deck: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// List all categories
    List,

    /// Show the categories matching a query (name or department)
    Search {
        /// Search query
        query: String,
    },

    /// Show a category and its flashcards
    Show {
        /// Category name (case-insensitive prefix match)
        category: String,
    },

    /// Launch interactive TUI
    #[cfg(feature = "tui")]
    Tui,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    let app = app::App::new(cli.config.as_deref(), cli.deck.as_deref())?;

    match cli.command {
        None => {
            // No subcommand → launch TUI
            #[cfg(feature = "tui")]
            {
                tui::run(app)?;
            }
            #[cfg(not(feature = "tui"))]
            {
                eprintln!("TUI not available (built without 'tui' feature). Use a subcommand.");
                eprintln!("Run with --help for usage.");
                std::process::exit(1);
            }
        }
        Some(Command::List) => {
            commands::list::run(&app, &cli.format, use_color)?;
        }
        Some(Command::Search { query }) => {
            commands::search::run(&app, &query, &cli.format, use_color)?;
        }
        Some(Command::Show { category }) => {
            commands::show::run(&app, &category, &cli.format, use_color)?;
        }
        #[cfg(feature = "tui")]
        Some(Command::Tui) => {
            tui::run(app)?;
        }
    }

    Ok(())
}
