mod pull_request;
mod pull_request_action;
mod pull_request_event;
mod pull_request_state;
mod reviews;

pub use pull_request::{GhPullRequest, GhPullRequestShort};
pub use pull_request_action::GhPullRequestAction;
pub use pull_request_event::GhPullRequestEvent;
pub use pull_request_state::GhPullRequestState;
pub use reviews::{
    GhPullRequestReviewCommentEvent, GhPullRequestReviewEvent, GhReviewAction,
    GhReviewCommentAction,
};
