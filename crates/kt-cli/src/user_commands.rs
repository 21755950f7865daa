use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Check whether an admin may kick a user now
    Check {
        /// Admin username
        #[arg(long)]
        admin: String,
        /// Cooldown in seconds (defaults to throttle.user_kick_threshold_secs)
        #[arg(long)]
        threshold: Option<i64>,
    },
    /// Record a user kick by an admin
    Record {
        /// Admin username
        #[arg(long)]
        admin: String,
        /// Kick time as Unix seconds (defaults to now)
        #[arg(long, allow_hyphen_values = true)]
        at: Option<i64>,
    },
}
