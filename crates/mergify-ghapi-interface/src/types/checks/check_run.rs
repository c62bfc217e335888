use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::GhCheckPullRequest;
use crate::types::common::{GhApplication, GhRepository, GhUser};

/// GitHub Check run action.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhCheckRunAction {
    /// Created.
    #[default]
    Created,
    /// Completed.
    Completed,
    /// Re-requested.
    Rerequested,
    /// Requested action.
    RequestedAction,
}

impl Display for GhCheckRunAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&serde_plain::to_string(&self).unwrap())
    }
}

/// GitHub Check run.
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq, Clone)]
pub struct GhCheckRun {
    /// ID.
    pub id: u64,
    /// Name
    pub name: String,
    /// Head commit SHA.
    pub head_sha: String,
    /// External ID, set by the application owning the run.
    #[serde(default)]
    pub external_id: Option<String>,
    /// Pull requests.
    pub pull_requests: Vec<GhCheckPullRequest>,
    /// Application.
    pub app: GhApplication,
}

/// GitHub Check run event.
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq, Clone)]
pub struct GhCheckRunEvent {
    /// Action.
    pub action: GhCheckRunAction,
    /// Check run.
    pub check_run: GhCheckRun,
    /// Repository.
    pub repository: GhRepository,
    /// Sender.
    pub sender: GhUser,
}
