use std::convert::TryFrom;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use super::{
    GhEventType, GhMemberEvent, GhMembershipEvent, GhOrganizationEvent, GhPushEvent,
    GhRefreshEvent, GhStatusEvent, GhTeamAddEvent, GhTeamEvent,
};
use crate::types::{
    checks::{GhCheckRunEvent, GhCheckSuiteEvent},
    common::GhUser,
    issues::GhIssueCommentEvent,
    pulls::{GhPullRequestEvent, GhPullRequestReviewCommentEvent, GhPullRequestReviewEvent},
};

/// GitHub event error.
#[derive(Debug, Error)]
pub enum GhEventError {
    /// Payload does not match the event type schema.
    #[error("Invalid payload for event {event_type}: {source}")]
    InvalidPayload {
        event_type: String,
        source: serde_json::Error,
    },
}

/// Payload retained for event types the bot does not know about.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhUnknownEvent {
    /// Sender.
    pub sender: GhUser,
}

/// GitHub event, tagged by the webhook event type header.
#[derive(Debug, Clone, PartialEq)]
pub enum GhEvent {
    /// Check run event.
    CheckRun(GhCheckRunEvent),
    /// Check suite event.
    CheckSuite(GhCheckSuiteEvent),
    /// Issue comment event.
    IssueComment(GhIssueCommentEvent),
    /// Member event.
    Member(GhMemberEvent),
    /// Membership event.
    Membership(GhMembershipEvent),
    /// Organization event.
    Organization(GhOrganizationEvent),
    /// Pull request event.
    PullRequest(GhPullRequestEvent),
    /// Pull request review event.
    PullRequestReview(GhPullRequestReviewEvent),
    /// Pull request review comment event.
    PullRequestReviewComment(GhPullRequestReviewCommentEvent),
    /// Push event.
    Push(GhPushEvent),
    /// Refresh event.
    Refresh(GhRefreshEvent),
    /// Status event.
    Status(GhStatusEvent),
    /// Team event.
    Team(GhTeamEvent),
    /// Team add event.
    TeamAdd(GhTeamAddEvent),
    /// Any other event type.
    Unknown {
        /// Raw event type name.
        event_type: String,
        /// Payload.
        payload: GhUnknownEvent,
    },
}

impl GhEvent {
    /// Parse an event from its type header and JSON body.
    ///
    /// Unsupported event types still parse, into [`GhEvent::Unknown`]: the
    /// classifier decides what to do with them, not the transport.
    pub fn from_json(event_type: &str, body: &str) -> Result<Self, GhEventError> {
        match GhEventType::try_from(event_type) {
            Ok(GhEventType::CheckRun) => Ok(Self::CheckRun(parse(event_type, body)?)),
            Ok(GhEventType::CheckSuite) => Ok(Self::CheckSuite(parse(event_type, body)?)),
            Ok(GhEventType::IssueComment) => Ok(Self::IssueComment(parse(event_type, body)?)),
            Ok(GhEventType::Member) => Ok(Self::Member(parse(event_type, body)?)),
            Ok(GhEventType::Membership) => Ok(Self::Membership(parse(event_type, body)?)),
            Ok(GhEventType::Organization) => Ok(Self::Organization(parse(event_type, body)?)),
            Ok(GhEventType::PullRequest) => Ok(Self::PullRequest(parse(event_type, body)?)),
            Ok(GhEventType::PullRequestReview) => {
                Ok(Self::PullRequestReview(parse(event_type, body)?))
            }
            Ok(GhEventType::PullRequestReviewComment) => {
                Ok(Self::PullRequestReviewComment(parse(event_type, body)?))
            }
            Ok(GhEventType::Push) => Ok(Self::Push(parse(event_type, body)?)),
            Ok(GhEventType::Refresh) => Ok(Self::Refresh(parse(event_type, body)?)),
            Ok(GhEventType::Status) => Ok(Self::Status(parse(event_type, body)?)),
            Ok(GhEventType::Team) => Ok(Self::Team(parse(event_type, body)?)),
            Ok(GhEventType::TeamAdd) => Ok(Self::TeamAdd(parse(event_type, body)?)),
            Err(_) => Ok(Self::Unknown {
                event_type: event_type.into(),
                payload: parse(event_type, body)?,
            }),
        }
    }

    /// Event type name, as received on the wire.
    pub fn event_type_name(&self) -> &str {
        match self {
            Self::CheckRun(_) => GhEventType::CheckRun.to_str(),
            Self::CheckSuite(_) => GhEventType::CheckSuite.to_str(),
            Self::IssueComment(_) => GhEventType::IssueComment.to_str(),
            Self::Member(_) => GhEventType::Member.to_str(),
            Self::Membership(_) => GhEventType::Membership.to_str(),
            Self::Organization(_) => GhEventType::Organization.to_str(),
            Self::PullRequest(_) => GhEventType::PullRequest.to_str(),
            Self::PullRequestReview(_) => GhEventType::PullRequestReview.to_str(),
            Self::PullRequestReviewComment(_) => GhEventType::PullRequestReviewComment.to_str(),
            Self::Push(_) => GhEventType::Push.to_str(),
            Self::Refresh(_) => GhEventType::Refresh.to_str(),
            Self::Status(_) => GhEventType::Status.to_str(),
            Self::Team(_) => GhEventType::Team.to_str(),
            Self::TeamAdd(_) => GhEventType::TeamAdd.to_str(),
            Self::Unknown { event_type, .. } => event_type,
        }
    }

    /// Event sender.
    pub fn sender(&self) -> &GhUser {
        match self {
            Self::CheckRun(e) => &e.sender,
            Self::CheckSuite(e) => &e.sender,
            Self::IssueComment(e) => &e.sender,
            Self::Member(e) => &e.sender,
            Self::Membership(e) => &e.sender,
            Self::Organization(e) => &e.sender,
            Self::PullRequest(e) => &e.sender,
            Self::PullRequestReview(e) => &e.sender,
            Self::PullRequestReviewComment(e) => &e.sender,
            Self::Push(e) => &e.sender,
            Self::Refresh(e) => &e.sender,
            Self::Status(e) => &e.sender,
            Self::Team(e) => &e.sender,
            Self::TeamAdd(e) => &e.sender,
            Self::Unknown { payload, .. } => &payload.sender,
        }
    }
}

fn parse<T: DeserializeOwned>(event_type: &str, body: &str) -> Result<T, GhEventError> {
    serde_json::from_str(body).map_err(|e| GhEventError::InvalidPayload {
        event_type: event_type.into(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::GhEvent;

    #[test]
    fn parse_push_event() {
        let body = r#"{
            "ref": "refs/heads/main",
            "repository": {
                "name": "test",
                "full_name": "me/test",
                "owner": {"login": "me"},
                "archived": false
            },
            "sender": {"login": "me"}
        }"#;

        let event = GhEvent::from_json("push", body).unwrap();
        assert_eq!(event.event_type_name(), "push");
        assert_eq!(event.sender().login, "me");
    }

    #[test]
    fn parse_unknown_event() {
        let event = GhEvent::from_json("deployment", r#"{"sender": {"login": "me"}}"#).unwrap();
        assert_eq!(event.event_type_name(), "deployment");
        assert_eq!(event.sender().login, "me");
    }

    #[test]
    fn parse_invalid_payload() {
        assert!(GhEvent::from_json("push", r#"{"ref": 42}"#).is_err());
    }
}
