use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::GhCheckPullRequest;
use crate::types::common::{GhApplication, GhRepository, GhUser};

/// GitHub Check suite action.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhCheckSuiteAction {
    /// Completed.
    #[default]
    Completed,
    /// Requested.
    Requested,
    /// Re-requested.
    Rerequested,
}

impl Display for GhCheckSuiteAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&serde_plain::to_string(&self).unwrap())
    }
}

/// GitHub Check suite.
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq, Clone)]
pub struct GhCheckSuite {
    /// ID.
    pub id: u64,
    /// Head commit SHA.
    pub head_sha: String,
    /// External ID, set by the application owning the suite.
    #[serde(default)]
    pub external_id: Option<String>,
    /// Pull requests.
    pub pull_requests: Vec<GhCheckPullRequest>,
    /// Application.
    pub app: GhApplication,
}

/// GitHub Check suite event.
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq, Clone)]
pub struct GhCheckSuiteEvent {
    /// Action.
    pub action: GhCheckSuiteAction,
    /// Check suite.
    pub check_suite: GhCheckSuite,
    /// Repository.
    pub repository: GhRepository,
    /// Sender.
    pub sender: GhUser,
}
