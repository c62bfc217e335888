use serde::{Deserialize, Serialize};

use super::{GhIssue, GhIssueComment, GhIssueCommentAction};
use crate::types::common::{GhRepository, GhUser};

/// GitHub Issue comment event.
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq, Clone)]
pub struct GhIssueCommentEvent {
    /// Action.
    pub action: GhIssueCommentAction,
    /// Issue.
    pub issue: GhIssue,
    /// Comment.
    pub comment: GhIssueComment,
    /// Repository.
    pub repository: GhRepository,
    /// Sender.
    pub sender: GhUser,
}
