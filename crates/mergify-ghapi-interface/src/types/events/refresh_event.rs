use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::types::{
    common::{GhRepository, GhUser},
    pulls::GhPullRequest,
};

/// Refresh event action.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhRefreshAction {
    /// Requested by a user.
    #[default]
    User,
    /// Requested by the bot itself.
    Internal,
}

impl Display for GhRefreshAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&serde_plain::to_string(&self).unwrap())
    }
}

/// Refresh event, synthesized by the bot to re-evaluate pull requests.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhRefreshEvent {
    /// Action.
    pub action: GhRefreshAction,
    /// Full reference to refresh, `None` to refresh every open pull request.
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    /// Repository.
    pub repository: GhRepository,
    /// Pull request.
    pub pull_request: Option<GhPullRequest>,
    /// Sender.
    pub sender: GhUser,
}
