use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, LoggingConfig, ThrottleConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub throttle: ThrottleConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for KT_CONFIG_DIR env var, else use ./.kick-throttle/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply KT_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: KT_CONFIG_DIR env var > ./.kick-throttle/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.throttle.validate()?;

        // Database file must stay inside the config dir
        let db_path = Path::new(&self.database.path);
        if self.database.path.trim().is_empty()
            || db_path.is_absolute()
            || self.database.path.contains("..")
        {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if let Some(file) = &self.logging.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::config("logging.file must not be empty"));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get the log file path, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };

        let config_dir = Self::config_dir()?;
        Ok(Some(config_dir.join(&self.logging.dir).join(file)))
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  database: {}", self.database.path);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  throttle: user={}s, group={}m",
            self.throttle.user_kick_threshold_secs, self.throttle.group_kick_threshold_minutes
        );
    }

    fn apply_env_overrides(&mut self) {
        // Database
        Self::apply_env_string("KT_DATABASE_PATH", &mut self.database.path);

        // Logging
        Self::apply_env_parse("KT_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("KT_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_string("KT_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("KT_LOG_FILE", &mut self.logging.file);

        // Throttle
        Self::apply_env_parse(
            "KT_USER_KICK_THRESHOLD_SECS",
            &mut self.throttle.user_kick_threshold_secs,
        );
        Self::apply_env_parse(
            "KT_GROUP_KICK_THRESHOLD_MINUTES",
            &mut self.throttle.group_kick_threshold_minutes,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
