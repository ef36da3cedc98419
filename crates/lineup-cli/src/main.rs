use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lineup_client::ClassifierClient;
use lineup_core::gallery;
use lineup_core::DisplayState;

mod controller;

use controller::Controller;

#[derive(Parser)]
#[command(name = "lineup", about = "Sports-person classifier client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify an image against the known subjects
    Classify {
        /// Path to the image file
        image: PathBuf,
        /// Print the resulting display state as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the known subjects and their portraits
    Gallery,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { image, json } => {
            let client = ClassifierClient::from_env()?;
            let mut controller = Controller::new(client);
            let state = controller.submit(&image).await;
            if json {
                println!("{}", serde_json::to_string_pretty(state)?);
            } else {
                render(state);
            }
        }
        Commands::Gallery => {
            for subject in gallery::KNOWN_SUBJECTS {
                println!("{subject:<20} {}", gallery::gallery_portrait(subject));
            }
        }
    }

    Ok(())
}

fn render(state: &DisplayState) {
    match state {
        DisplayState::Idle => {}
        DisplayState::Error { message } => eprintln!("{message}"),
        DisplayState::Matched(display) => {
            println!("Best Match: {}", display.identity);
            println!("Portrait:   {}", display.portrait);
            println!();
            println!("{:<20} {:>6}", "Player", "Score");
            for row in &display.rows {
                println!("{:<20} {:>6}", row.subject, row.score);
            }
        }
    }
}
