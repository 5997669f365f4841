pub mod canteen;
pub mod session;
pub mod user;

use canteen_core::errors::{CanteenError, CanteenResult};

/// Result of a store mutation that targets a record by id.
///
/// Storage failures are reported separately through `eyre::Result`; this only
/// says whether the target existed and whether the change was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum UpdateOutcome {
    Updated,
    NotFound,
    /// The canteen already carries the maximum number of menu images.
    LimitReached,
    /// A record with the same id is already present.
    Duplicate,
}

impl UpdateOutcome {
    pub fn is_updated(self) -> bool {
        matches!(self, UpdateOutcome::Updated)
    }

    /// Maps a miss or a rejection to the matching `CanteenError`, naming `target` in the message.
    pub fn into_result(self, target: &str) -> CanteenResult<()> {
        match self {
            UpdateOutcome::Updated => Ok(()),
            UpdateOutcome::NotFound => Err(CanteenError::NotFound(format!("{} not found", target))),
            UpdateOutcome::LimitReached => Err(CanteenError::LimitReached(format!(
                "{} already has the maximum number of menu images",
                target
            ))),
            UpdateOutcome::Duplicate => Err(CanteenError::Validation(format!(
                "{} already exists",
                target
            ))),
        }
    }
}
