// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "recycle-camera")]
#[command(about = "Capture core for the recycling-identification camera")]
#[command(version)]
#[command(subcommand_required = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the capture lifecycle once against the virtual camera
    Demo {
        /// Classification endpoint (default: configured endpoint)
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// Classify an image file
    Classify {
        /// Path to the image file
        #[arg(short, long)]
        image: PathBuf,

        /// Classification endpoint (default: configured endpoint)
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// Render a category card
    Card {
        /// Image reference for the card
        #[arg(short, long)]
        image: String,

        /// Category name
        #[arg(short, long)]
        name: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=recycle_camera=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { endpoint } => cli::run_demo(endpoint),
        Commands::Classify { image, endpoint } => cli::classify_file(image, endpoint),
        Commands::Card { image, name } => cli::show_card(image, name),
    }
}
