use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "kick-throttle")]
#[command(about = "Cooldown checks for VPN admin kick actions")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// SQLite database file (defaults to the configured database.path)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
