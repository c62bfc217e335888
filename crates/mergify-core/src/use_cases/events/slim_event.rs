use mergify_ghapi_interface::types::{GhCheckPullRequest, GhEvent, GhIssueComment, GhUser};
use serde::{Deserialize, Serialize};

/// Minimal projection of a check suite or run.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct SlimCheck {
    /// Head commit SHA.
    pub head_sha: String,
    /// Referenced pull requests.
    pub pull_requests: Vec<GhCheckPullRequest>,
}

/// Reduced event projection kept on the work queue.
///
/// Only what the worker needs to re-derive the affected pull requests
/// survives: full payloads are never persisted. Created once per dispatched
/// event.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct SlimEvent {
    /// Sender.
    pub sender: GhUser,
    /// Commit SHA, for status events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    /// Action, for pull request and refresh events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Full reference, for push and refresh events.
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Comment, for the command runner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<GhIssueComment>,
    /// Check suite summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_suite: Option<SlimCheck>,
    /// Check run summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_run: Option<SlimCheck>,
}

impl SlimEvent {
    /// Project an event down to its minimal subset.
    pub fn from_event(event: &GhEvent) -> Self {
        let mut slim = Self {
            sender: event.sender().clone(),
            ..Default::default()
        };

        match event {
            GhEvent::Status(event) => {
                // To get the pull request from the commit SHA later.
                slim.sha = Some(event.sha.clone());
            }
            GhEvent::Refresh(event) => {
                // To get the pull request from the SHA or the branch name.
                slim.action = Some(event.action.to_string());
                slim.reference = event.reference.clone();
            }
            GhEvent::Push(event) => {
                slim.reference = Some(event.reference.clone());
            }
            GhEvent::CheckSuite(event) => {
                slim.check_suite = Some(SlimCheck {
                    head_sha: event.check_suite.head_sha.clone(),
                    pull_requests: event.check_suite.pull_requests.clone(),
                });
            }
            GhEvent::CheckRun(event) => {
                slim.check_run = Some(SlimCheck {
                    head_sha: event.check_run.head_sha.clone(),
                    pull_requests: event.check_run.pull_requests.clone(),
                });
            }
            GhEvent::PullRequest(event) => {
                slim.action = Some(event.action.to_string());
            }
            GhEvent::IssueComment(event) => {
                // For the command runner.
                slim.comment = Some(event.comment.clone());
            }
            _ => (),
        }

        slim
    }
}

#[cfg(test)]
mod tests {
    use mergify_ghapi_interface::types::{
        GhEvent, GhIssueCommentEvent, GhPullRequestAction, GhPullRequestEvent, GhPushEvent,
        GhStatusEvent, GhUser,
    };
    use pretty_assertions::assert_eq;

    use super::SlimEvent;

    fn json_keys(slim: &SlimEvent) -> Vec<String> {
        let value = serde_json::to_value(slim).unwrap();
        value
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect::<Vec<_>>()
    }

    #[test]
    fn pull_request_keeps_action_and_sender_only() {
        let slim = SlimEvent::from_event(&GhEvent::PullRequest(GhPullRequestEvent {
            action: GhPullRequestAction::Opened,
            sender: GhUser { login: "me".into() },
            ..Default::default()
        }));

        assert_eq!(slim.action.as_deref(), Some("opened"));
        assert_eq!(json_keys(&slim), vec!["action", "sender"]);
    }

    #[test]
    fn push_keeps_the_reference() {
        let slim = SlimEvent::from_event(&GhEvent::Push(GhPushEvent {
            reference: "refs/heads/feature-x".into(),
            ..Default::default()
        }));

        assert_eq!(slim.reference.as_deref(), Some("refs/heads/feature-x"));
        assert_eq!(json_keys(&slim), vec!["ref", "sender"]);
    }

    #[test]
    fn status_keeps_the_sha() {
        let slim = SlimEvent::from_event(&GhEvent::Status(GhStatusEvent {
            sha: "abcdef".into(),
            ..Default::default()
        }));

        assert_eq!(slim.sha.as_deref(), Some("abcdef"));
        assert_eq!(json_keys(&slim), vec!["sender", "sha"]);
    }

    #[test]
    fn issue_comment_keeps_the_comment() {
        let slim = SlimEvent::from_event(&GhEvent::IssueComment(GhIssueCommentEvent {
            ..Default::default()
        }));

        assert!(slim.comment.is_some());
        assert_eq!(json_keys(&slim), vec!["comment", "sender"]);
    }

    #[test]
    fn other_events_keep_the_sender_only() {
        let slim = SlimEvent::from_event(&GhEvent::Unknown {
            event_type: "deployment".into(),
            payload: Default::default(),
        });

        assert_eq!(json_keys(&slim), vec!["sender"]);
    }
}
