//! Event metrics.

use lazy_static::lazy_static;
use mergify_ghapi_interface::types::{GhEvent, GhPullRequestAction};
use prometheus::{register_int_counter_vec, IntCounterVec};

/// Logins under which the bot merges pull requests.
pub(crate) const BOT_LOGINS: [&str; 2] = ["mergify[bot]", "mergify-test[bot]"];

lazy_static! {
    static ref GITHUB_EVENTS: IntCounterVec = register_int_counter_vec!(
        "github_events",
        "Number of GitHub events received, by type and action.",
        &["event_type", "action", "by_mergify"]
    )
    .unwrap();
}

/// Count one received event.
pub(crate) fn meter_event(event: &GhEvent) {
    let mut action = String::new();
    let mut by_mergify = false;

    if let GhEvent::PullRequest(event) = event {
        action = event.action.to_string();

        if event.action == GhPullRequestAction::Closed
            && event.pull_request.merged == Some(true)
        {
            if let Some(merged_by) = &event.pull_request.merged_by {
                by_mergify = BOT_LOGINS.contains(&merged_by.login.as_str());
            }
        }
    }

    GITHUB_EVENTS
        .with_label_values(&[
            event.event_type_name(),
            &action,
            if by_mergify { "true" } else { "" },
        ])
        .inc();
}
