use crate::{ConfigError, ConfigErrorResult};

use std::path::Path;

use serde::Deserialize;

/// Admins and gateway groups to provision, read from a TOML file:
///
/// ```toml
/// [[admins]]
/// username = "alice"
/// hash = "$argon2id$..."
///
/// [[groups]]
/// gateway = "gw-1"
/// group = "contractors"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedFile {
    pub admins: Vec<SeedAdmin>,
    pub groups: Vec<SeedGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedAdmin {
    pub username: String,
    pub hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedGroup {
    pub gateway: String,
    pub group: String,
}

impl SeedFile {
    pub fn load(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let seed: SeedFile = toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })?;

        seed.validate()?;
        Ok(seed)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (index, admin) in self.admins.iter().enumerate() {
            if admin.username.trim().is_empty() {
                return Err(ConfigError::seed(format!(
                    "admins[{}].username must not be empty",
                    index
                )));
            }
        }

        for (index, group) in self.groups.iter().enumerate() {
            if group.gateway.trim().is_empty() || group.group.trim().is_empty() {
                return Err(ConfigError::seed(format!(
                    "groups[{}] needs both gateway and group",
                    index
                )));
            }
        }

        Ok(())
    }
}
