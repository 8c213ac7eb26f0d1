// ABOUTME: CLI argument parsing and command routing for lotus
//
// Provides command-line interface for:
// - Launching the booking TUI (tui, default)
// - Printing the studio's service catalog (services)

pub mod services;

use clap::{Parser, Subcommand, ValueEnum};

/// Wellness studio booking client
#[derive(Parser)]
#[command(name = "lotus")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for commands
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (default if no command given)
    Tui,

    /// List the studio's bookable services
    Services,
}
