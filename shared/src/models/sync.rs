//! Sync Report Model

use serde::{Deserialize, Serialize};

/// Outcome of one synchronization run
///
/// Record-level failures collect into `errors` instead of aborting the run
/// (partial-success semantics).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncReport {
    pub created: u32,
    pub updated: u32,
    pub errors: Vec<String>,
}

impl SyncReport {
    pub fn processed(&self) -> u32 {
        self.created + self.updated
    }
}
