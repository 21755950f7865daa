use crate::{
    Cli, CliError, Outcome, Result, commands::Commands, group_commands::GroupCommands, logger,
    user_commands::UserCommands,
};

use kt_config::{Config, SeedFile, ThrottleConfig};
use kt_core::{AdminRecord, Clock, Cooldown, GroupThrottleRecord, SystemClock, TimestampStore};
use kt_db::{DatabaseConnector, ProvisionSummary, SqliteTimestampStore};
use kt_throttle::{GroupKickThrottle, UserKickThrottle};

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use log::info;
use sqlx::SqlitePool;

/// Load configuration, open the database, run one command and print its
/// outcome. Returns the process exit code for a completed command.
pub async fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = match config.log_file_path()? {
        Some(path) => {
            if let Some(log_dir) = path.parent() {
                std::fs::create_dir_all(log_dir).map_err(|e| CliError::Directory {
                    path: log_dir.to_path_buf(),
                    source: e,
                })?;
            }
            Some(path)
        }
        None => None,
    };

    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting kick-throttle v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path: PathBuf = match cli.db {
        Some(path) => path,
        None => config.database_path()?,
    };
    info!("Opening database: {}", database_path.display());

    let pool = DatabaseConnector::new(&database_path).connect().await?;
    let store: Arc<dyn TimestampStore> = Arc::new(SqliteTimestampStore::new(pool.clone()));

    let outcome = execute(
        cli.command,
        &pool,
        store,
        Arc::new(SystemClock),
        &config.throttle,
    )
    .await;
    pool.close().await;
    let outcome = outcome?;

    let value = outcome.to_json();
    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{}", output);

    Ok(outcome.exit_code())
}

/// Dispatch a parsed command against an open database.
pub async fn execute(
    command: Commands,
    pool: &SqlitePool,
    store: Arc<dyn TimestampStore>,
    clock: Arc<dyn Clock>,
    defaults: &ThrottleConfig,
) -> Result<Outcome> {
    match command {
        Commands::User { action } => {
            let throttle = UserKickThrottle::with_clock(store, clock.clone());

            match action {
                UserCommands::Check { admin, threshold } => {
                    let threshold = Cooldown::from_secs(
                        threshold.unwrap_or(defaults.user_kick_threshold_secs),
                    )?;
                    let decision = throttle.check(&admin, threshold).await?;
                    Ok(Outcome::UserDecision { admin, decision })
                }
                UserCommands::Record { admin, at } => {
                    let at = at.unwrap_or_else(|| clock.now());
                    throttle.record(&admin, at).await?;
                    Ok(Outcome::Recorded { admin, at })
                }
            }
        }

        Commands::Group { action } => {
            let throttle = GroupKickThrottle::with_clock(store, clock);

            match action {
                GroupCommands::Check {
                    gateway,
                    group,
                    threshold,
                } => {
                    let threshold = Cooldown::from_minutes(
                        threshold.unwrap_or(defaults.group_kick_threshold_minutes),
                    )?;
                    let decision = throttle.check_and_record(&gateway, &group, threshold).await?;
                    Ok(Outcome::GroupDecision {
                        gateway,
                        group,
                        decision,
                    })
                }
            }
        }

        Commands::Init { seed } => {
            let Some(seed_path) = seed else {
                info!("Database ready, nothing to provision");
                return Ok(Outcome::Provisioned(ProvisionSummary::default()));
            };

            let seed = SeedFile::load(&seed_path)?;
            let admins: Vec<AdminRecord> = seed
                .admins
                .into_iter()
                .map(|admin| AdminRecord::new(admin.username, admin.hash))
                .collect();
            let groups: Vec<GroupThrottleRecord> = seed
                .groups
                .into_iter()
                .map(|group| GroupThrottleRecord::new(group.gateway, group.group))
                .collect();

            let summary = kt_db::provision(pool, &admins, &groups).await?;
            Ok(Outcome::Provisioned(summary))
        }
    }
}
