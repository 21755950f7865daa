use crate::{group_commands::GroupCommands, user_commands::UserCommands};

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Per-admin user kick throttle
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Per gateway/group kick throttle
    Group {
        #[command(subcommand)]
        action: GroupCommands,
    },

    /// Create the database and provision admins and groups
    Init {
        /// TOML file listing [[admins]] and [[groups]] to provision
        #[arg(long)]
        seed: Option<PathBuf>,
    },
}
