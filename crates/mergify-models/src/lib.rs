mod branch_rule;
mod condition;
mod condition_tree;
mod legacy;
mod pull_request_rule;

pub use branch_rule::{
    deep_merge, BranchRule, MergeMethod, MergeStrategy, Protection, RebaseFallback,
    RequiredPullRequestReviews, RequiredStatusChecks, Restrictions,
};
pub use condition::{Condition, ConditionField, ConditionOperator, ConditionValue, ParseError};
pub use condition_tree::ConditionTree;
pub use legacy::{LegacyBlock, LegacyRules};
pub use pull_request_rule::PullRequestRule;
