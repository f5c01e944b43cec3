use anyhow::Result;
use clap::{Parser, Subcommand};
use niwa::catalog::Catalog;
use niwa::config::progress::UserProgress;
use niwa::garden::GardenState;
use niwa::mnemonic::MnemonicStore;
use niwa::review::ReviewHistory;
use niwa::{App, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "niwa")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show learning statistics
    Stats,
    /// Delete saved data
    Reset {
        /// Reset lesson progress
        #[arg(long)]
        progress: bool,
        /// Reset review history
        #[arg(long)]
        history: bool,
        /// Reset garden customizations
        #[arg(long)]
        garden: bool,
        /// Reset everything, including saved mnemonics
        #[arg(long)]
        all: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "niwa=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Stats) => print_stats()?,
        Some(Commands::Reset { progress, history, garden, all }) => {
            reset(progress, history, garden, all)?
        }
        None => {
            // Launch TUI
            let config = Config::load()?;
            let mut app = App::new(config)?;
            app.run().await?;
        }
    }

    Ok(())
}

fn print_stats() -> Result<()> {
    let catalog = Catalog::builtin();
    let progress = UserProgress::load()?;
    let history = ReviewHistory::load()?;

    let completed = catalog.completed_kanji(&progress);
    println!("Kanji learned: {} of {}", completed.len(), catalog.total_kanji());
    println!("Review attempts: {}", history.total_attempts());

    let quizzed: Vec<_> = completed
        .iter()
        .filter_map(|k| history.accuracy(k.character).map(|a| (k.character, a)))
        .collect();
    if !quizzed.is_empty() {
        let average: f32 = quizzed.iter().map(|(_, a)| a).sum::<f32>() / quizzed.len() as f32;
        println!("Average accuracy: {:.0}%", average * 100.0);

        if let Some((character, accuracy)) =
            quizzed.iter().min_by(|a, b| a.1.total_cmp(&b.1))
        {
            println!("Weakest kanji: {} ({:.0}% correct)", character, accuracy * 100.0);
        }
    }

    Ok(())
}

fn reset(progress: bool, history: bool, garden: bool, all: bool) -> Result<()> {
    if !(progress || history || garden || all) {
        println!("Nothing selected. Pass --progress, --history, --garden, or --all.");
        return Ok(());
    }

    if progress || all {
        remove_file(&UserProgress::progress_path()?, "progress")?;
    }
    if history || all {
        remove_file(&ReviewHistory::history_path()?, "review history")?;
    }
    if garden || all {
        remove_file(&GardenState::garden_path()?, "garden")?;
    }
    if all {
        remove_file(&MnemonicStore::store_path()?, "mnemonics")?;
    }

    Ok(())
}

fn remove_file(path: &std::path::Path, what: &str) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => println!("Reset {what}."),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            println!("No saved {what} to reset.");
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
