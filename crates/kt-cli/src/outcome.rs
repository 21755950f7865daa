use crate::{EXIT_DENIED, EXIT_PERMITTED};

use kt_core::ThrottleDecision;
use kt_db::ProvisionSummary;

use std::process::ExitCode;

use serde_json::{Value, json};

/// Result of one command, printed as JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    UserDecision {
        admin: String,
        decision: ThrottleDecision,
    },
    GroupDecision {
        gateway: String,
        group: String,
        decision: ThrottleDecision,
    },
    Recorded {
        admin: String,
        at: i64,
    },
    Provisioned(ProvisionSummary),
}

impl Outcome {
    pub fn to_json(&self) -> Value {
        match self {
            Outcome::UserDecision { admin, decision } => json!({
                "admin": admin,
                "permitted": decision.is_permitted(),
                "wait_seconds": decision.wait_seconds(),
            }),
            Outcome::GroupDecision {
                gateway,
                group,
                decision,
            } => json!({
                "gateway": gateway,
                "group": group,
                "permitted": decision.is_permitted(),
                "wait_seconds": decision.wait_seconds(),
            }),
            Outcome::Recorded { admin, at } => json!({
                "admin": admin,
                "recorded_at": at,
            }),
            Outcome::Provisioned(summary) => json!({
                "admins_created": summary.admins_created,
                "groups_created": summary.groups_created,
            }),
        }
    }

    /// 0 for anything but a denied decision, which is 1.
    pub fn exit_status(&self) -> u8 {
        match self {
            Outcome::UserDecision { decision, .. } | Outcome::GroupDecision { decision, .. }
                if !decision.is_permitted() =>
            {
                EXIT_DENIED
            }
            _ => EXIT_PERMITTED,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}
