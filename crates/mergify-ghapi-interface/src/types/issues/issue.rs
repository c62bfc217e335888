use serde::{Deserialize, Serialize};

use crate::types::common::GhUser;

/// GitHub Issue.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Default, Clone)]
pub struct GhIssue {
    /// Number.
    pub number: u64,
    /// Title.
    pub title: String,
    /// User.
    pub user: GhUser,
}
