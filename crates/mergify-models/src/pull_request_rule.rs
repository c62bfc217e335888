use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ConditionTree;

/// A named, ordered list of conditions plus an action directive.
///
/// Everything in the rule mapping besides `name` and `conditions` is the
/// action directive and is kept verbatim: the worker interprets it, this
/// layer only merges it between matching rules.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PullRequestRule {
    /// Rule name.
    pub name: String,
    /// Conditions, all of which must match.
    pub conditions: Vec<ConditionTree>,
    /// Action directive.
    #[serde(flatten)]
    pub actions: BTreeMap<String, serde_yaml::Value>,
}
