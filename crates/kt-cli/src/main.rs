//! kick-throttle - cooldown checks for VPN admin kick actions
//!
//! # Examples
//!
//! ```bash
//! # Create the database and seed admins and gateway groups
//! kick-throttle init --seed seed.toml
//!
//! # May alice kick another user now? (exit 0 = yes, 1 = wait)
//! kick-throttle user check --admin alice
//!
//! # Record a user kick by alice
//! kick-throttle user record --admin alice
//!
//! # Check and claim a group kick on gw-1
//! kick-throttle group check --gateway gw-1 --group contractors --pretty
//! ```

use kt_cli::{Cli, EXIT_ERROR};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match kt_cli::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
