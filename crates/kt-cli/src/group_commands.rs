use kt_core::{DEFAULT_GATEWAY, DEFAULT_GROUP};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum GroupCommands {
    /// Check and claim a group kick on a gateway
    Check {
        /// Gateway identifier
        #[arg(long, default_value = DEFAULT_GATEWAY)]
        gateway: String,
        /// Group name
        #[arg(long, default_value = DEFAULT_GROUP)]
        group: String,
        /// Cooldown in minutes (defaults to throttle.group_kick_threshold_minutes)
        #[arg(long)]
        threshold: Option<i64>,
    },
}
