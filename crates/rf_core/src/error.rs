use std::time::Duration;

use thiserror::Error;

/// Why a deployment attempt was refused or abandoned.
///
/// None of these are fatal: every variant leaves the scheduler ready for the
/// next attempt. `Busy` and `OnCooldown` are transient; `UnknownTeam` is a
/// caller error; `ProvisionFailed` consumes the cooldown anyway so a broken
/// transport template cannot be hammered with rapid retries.
#[derive(Error, Debug)]
pub enum DeployError {
    #[error("another deployment attempt is already in flight")]
    Busy,

    #[error("unknown team id: {0}")]
    UnknownTeam(String),

    #[error("round is not active")]
    RoundNotActive,

    #[error("deployment on cooldown for another {remaining:?}")]
    OnCooldown { remaining: Duration },

    #[error("failed to provision transport area {template}: {reason}")]
    ProvisionFailed { template: String, reason: String },
}

impl DeployError {
    /// Transient failures may be retried later without operator action.
    pub fn is_transient(&self) -> bool {
        matches!(self, DeployError::Busy | DeployError::OnCooldown { .. })
    }
}

/// Errors surfaced while loading or registering team definitions.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("invalid team {team}: {reason}")]
    Invalid { team: String, reason: String },

    #[error("failed to parse team definitions: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type DeployResult<T> = std::result::Result<T, DeployError>;
