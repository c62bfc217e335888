mod check_pull_request;
mod check_run;
mod check_suite;

pub use check_pull_request::{GhCheckBase, GhCheckPullRequest, GhRepositoryReference};
pub use check_run::{GhCheckRun, GhCheckRunAction, GhCheckRunEvent};
pub use check_suite::{GhCheckSuite, GhCheckSuiteAction, GhCheckSuiteEvent};
