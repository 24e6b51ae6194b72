// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod trace;
pub mod tui;

#[derive(Parser)]
#[command(name = "prim")]
#[command(about = "Step-by-step Prim MST simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a full run as a step-by-step console trace
    Trace {
        /// Emit step events as JSON lines instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// Step through the build interactively in the terminal
    Tui,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Trace { json: false }) {
        Commands::Trace { json } => trace::run(json),
        Commands::Tui => tui::run(),
    }
}
