//! Seeding of known admins and gateway/group pairs.
//!
//! Every row starts at [`kt_core::NEVER_KICKED`], so each key is immediately
//! eligible and already tracked before its first check. Re-running
//! provisioning is harmless: existing rows and their timestamps are kept.

use crate::{AdminRepository, DbError, GroupThrottleRepository, Result};

use kt_core::{AdminRecord, ErrorLocation, GroupThrottleRecord, ThrottleKey};

use std::panic::Location;

use log::info;
use sqlx::SqlitePool;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProvisionSummary {
    pub admins_created: usize,
    pub groups_created: usize,
}

pub async fn provision(
    pool: &SqlitePool,
    admins: &[AdminRecord],
    groups: &[GroupThrottleRecord],
) -> Result<ProvisionSummary> {
    for admin in admins {
        validate_key(&ThrottleKey::admin(&admin.username))?;
    }
    for group in groups {
        validate_key(&group.key())?;
    }

    let mut summary = ProvisionSummary::default();
    let mut tx = pool.begin().await?;

    for admin in admins {
        if AdminRepository::create_if_absent(&mut *tx, admin).await? {
            summary.admins_created += 1;
        }
    }

    for group in groups {
        if GroupThrottleRepository::create_if_absent(&mut *tx, group).await? {
            summary.groups_created += 1;
        }
    }

    tx.commit().await?;

    info!(
        "Provisioned {} of {} admins and {} of {} gateway groups",
        summary.admins_created,
        admins.len(),
        summary.groups_created,
        groups.len()
    );

    Ok(summary)
}

fn validate_key(key: &ThrottleKey) -> Result<()> {
    key.validate().map_err(|e| DbError::InvalidRecord {
        message: format!("cannot provision {}: {}", key, e),
        location: ErrorLocation::from(Location::caller()),
    })
}
