//! Event types.

use std::convert::TryFrom;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GhEventTypeError {
    /// Unsupported event.
    #[error("Unsupported event: {}", event)]
    UnsupportedEvent { event: String },
}

/// Event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhEventType {
    /// Check run event.
    CheckRun,
    /// Check suite event.
    CheckSuite,
    /// Issue comment event.
    IssueComment,
    /// Member event.
    Member,
    /// Membership event.
    Membership,
    /// Organization event.
    Organization,
    /// Pull request event.
    PullRequest,
    /// Pull request review event.
    PullRequestReview,
    /// Pull request review comment event.
    PullRequestReviewComment,
    /// Push event.
    Push,
    /// Refresh event, internal to the bot.
    Refresh,
    /// Status event.
    Status,
    /// Team event.
    Team,
    /// Team add event.
    TeamAdd,
}

impl GhEventType {
    /// Convert event type to static str.
    pub fn to_str(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for GhEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

impl TryFrom<&str> for GhEventType {
    type Error = GhEventTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "check_run" => Ok(Self::CheckRun),
            "check_suite" => Ok(Self::CheckSuite),
            "issue_comment" => Ok(Self::IssueComment),
            "member" => Ok(Self::Member),
            "membership" => Ok(Self::Membership),
            "organization" => Ok(Self::Organization),
            "pull_request" => Ok(Self::PullRequest),
            "pull_request_review" => Ok(Self::PullRequestReview),
            "pull_request_review_comment" => Ok(Self::PullRequestReviewComment),
            "push" => Ok(Self::Push),
            "refresh" => Ok(Self::Refresh),
            "status" => Ok(Self::Status),
            "team" => Ok(Self::Team),
            "team_add" => Ok(Self::TeamAdd),
            name => Err(GhEventTypeError::UnsupportedEvent {
                event: name.to_owned(),
            }),
        }
    }
}

impl From<GhEventType> for &'static str {
    fn from(event_type: GhEventType) -> Self {
        match event_type {
            GhEventType::CheckRun => "check_run",
            GhEventType::CheckSuite => "check_suite",
            GhEventType::IssueComment => "issue_comment",
            GhEventType::Member => "member",
            GhEventType::Membership => "membership",
            GhEventType::Organization => "organization",
            GhEventType::PullRequest => "pull_request",
            GhEventType::PullRequestReview => "pull_request_review",
            GhEventType::PullRequestReviewComment => "pull_request_review_comment",
            GhEventType::Push => "push",
            GhEventType::Refresh => "refresh",
            GhEventType::Status => "status",
            GhEventType::Team => "team",
            GhEventType::TeamAdd => "team_add",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GhEventType;

    #[test]
    fn event_as_str() {
        assert_eq!(GhEventType::Push.to_str(), "push");
        assert_eq!(GhEventType::PullRequest.to_str(), "pull_request");
        assert_eq!(GhEventType::TeamAdd.to_str(), "team_add");
    }

    #[test]
    fn event_from_str() {
        assert!(matches!(
            GhEventType::try_from("check_suite"),
            Ok(GhEventType::CheckSuite)
        ));
        assert!(GhEventType::try_from("deployment").is_err());
    }
}
