//! Policy rules.

mod errors;
mod filter;
mod legacy;
mod matcher;
mod snapshot;
mod user_config;

pub use errors::RulesError;
pub use filter::{evaluate_condition, evaluate_tree};
pub use legacy::LegacyConfigMerger;
pub use matcher::{match_rules, RuleMatch};
pub use snapshot::PullRequestSnapshot;
pub use user_config::UserConfiguration;
