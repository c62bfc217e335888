pub(crate) mod dispatch_event;
pub(crate) mod extract_pull_numbers;
pub(crate) mod resolve_pulls_from_sha;
pub(crate) mod send_refresh;
pub(crate) mod slim_event;

pub use dispatch_event::{
    DispatchEventInterface, EventDecision, IgnoredEvent, USER_CREATED_CHECKS,
};
pub use extract_pull_numbers::ExtractPullNumbersInterface;
pub use resolve_pulls_from_sha::{ResolvePullsFromShaInterface, SHA_EXPIRATION};
pub use send_refresh::SendRefreshInterface;
pub use slim_event::{SlimCheck, SlimEvent};

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    dispatch_event::MockDispatchEventInterface,
    extract_pull_numbers::MockExtractPullNumbersInterface,
    resolve_pulls_from_sha::MockResolvePullsFromShaInterface, send_refresh::MockSendRefreshInterface,
};
