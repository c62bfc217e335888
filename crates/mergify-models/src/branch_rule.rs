use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Required status checks protection block.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RequiredStatusChecks {
    /// Require the branch to be up to date before merging.
    pub strict: bool,
    /// Status contexts that must pass.
    pub contexts: Vec<String>,
}

/// Required reviews protection block.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RequiredPullRequestReviews {
    /// Dismiss stale reviews on new commits.
    pub dismiss_stale_reviews: bool,
    /// Require a code owner review.
    pub require_code_owner_reviews: bool,
    /// Needed approving review count, between 1 and 6.
    pub required_approving_review_count: u32,
}

/// Push restrictions protection block.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Restrictions {
    /// Allowed teams.
    pub teams: Vec<String>,
    /// Allowed users.
    pub users: Vec<String>,
}

/// Branch protection settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Protection {
    /// Required status checks.
    pub required_status_checks: Option<RequiredStatusChecks>,
    /// Required reviews.
    pub required_pull_request_reviews: Option<RequiredPullRequestReviews>,
    /// Push restrictions.
    pub restrictions: Option<Restrictions>,
    /// Enforce rules for administrators too.
    pub enforce_admins: Option<bool>,
}

/// Merge method.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MergeMethod {
    /// Rebase and merge.
    Rebase,
    /// Merge commit.
    Merge,
    /// Squash and merge.
    Squash,
}

/// Fallback when a rebase merge is not possible.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RebaseFallback {
    /// Fall back to a merge commit.
    Merge,
    /// Fall back to a squash.
    Squash,
    /// Do not merge at all.
    None,
}

/// Merge strategy block.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MergeStrategy {
    /// Merge method.
    pub method: MergeMethod,
    /// Rebase fallback.
    pub rebase_fallback: RebaseFallback,
}

/// The fully merged, schema-complete configuration for one branch.
///
/// Every field is required: the value only exists after the default rule,
/// the legacy `default` block and the branch override have been merged, so
/// a missing key at this point is a configuration error.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BranchRule {
    /// Branch protection settings.
    pub protection: Protection,
    /// Label enabling automation when present, `None` for always on.
    pub enabling_label: Option<String>,
    /// Label disabling automation when present.
    pub disabling_label: String,
    /// File paths whose modification suspends automation.
    pub disabling_files: Vec<String>,
    /// Merge strategy.
    pub merge_strategy: MergeStrategy,
    /// Backport target branch per label.
    pub automated_backport_labels: Option<BTreeMap<String, String>>,
}

impl BranchRule {
    /// Field-level checks that the schema alone cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(reviews) = &self.protection.required_pull_request_reviews {
            if !(1..=6).contains(&reviews.required_approving_review_count) {
                return Err(format!(
                    "required_approving_review_count must be between 1 and 6, got {}",
                    reviews.required_approving_review_count
                ));
            }
        }
        Ok(())
    }
}

/// Merge `overrides` into `base`, recursively for mappings.
///
/// Non-mapping values, lists included, are replaced wholesale, never
/// concatenated.
pub fn deep_merge(base: &mut serde_yaml::Value, overrides: &serde_yaml::Value) {
    use serde_yaml::Value;

    match (base, overrides) {
        (Value::Mapping(base_map), Value::Mapping(overrides_map)) => {
            for (key, value) in overrides_map {
                match base_map.get_mut(key) {
                    Some(slot) if slot.is_mapping() && value.is_mapping() => {
                        deep_merge(slot, value);
                    }
                    _ => {
                        base_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (base, overrides) => *base = overrides.clone(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{deep_merge, BranchRule};

    #[test]
    fn deep_merge_merges_mappings_recursively() {
        let mut base: serde_yaml::Value =
            serde_yaml::from_str("{a: 1, b: {x: 1}}").unwrap();
        let overrides: serde_yaml::Value = serde_yaml::from_str("{b: {y: 2}}").unwrap();

        deep_merge(&mut base, &overrides);

        let expected: serde_yaml::Value =
            serde_yaml::from_str("{a: 1, b: {x: 1, y: 2}}").unwrap();
        assert_eq!(base, expected);
    }

    #[test]
    fn deep_merge_replaces_lists_wholesale() {
        let mut base: serde_yaml::Value = serde_yaml::from_str("{a: [1, 2]}").unwrap();
        let overrides: serde_yaml::Value = serde_yaml::from_str("{a: [3]}").unwrap();

        deep_merge(&mut base, &overrides);

        let expected: serde_yaml::Value = serde_yaml::from_str("{a: [3]}").unwrap();
        assert_eq!(base, expected);
    }

    #[test]
    fn deep_merge_overwrites_scalars() {
        let mut base: serde_yaml::Value = serde_yaml::from_str("{a: 1, b: {x: 1}}").unwrap();
        let overrides: serde_yaml::Value = serde_yaml::from_str("{a: 2, b: 3}").unwrap();

        deep_merge(&mut base, &overrides);

        let expected: serde_yaml::Value = serde_yaml::from_str("{a: 2, b: 3}").unwrap();
        assert_eq!(base, expected);
    }

    #[test]
    fn schema_requires_every_field() {
        let error = serde_yaml::from_str::<BranchRule>("protection: {}").unwrap_err();
        assert!(error.to_string().contains("missing field"));
    }

    #[test]
    fn review_count_range_is_validated() {
        let rule: BranchRule = serde_yaml::from_str(
            r"
protection:
  required_status_checks: null
  required_pull_request_reviews:
    dismiss_stale_reviews: true
    require_code_owner_reviews: false
    required_approving_review_count: 7
  restrictions: null
  enforce_admins: null
enabling_label: null
disabling_label: no-mergify
disabling_files: []
merge_strategy:
  method: merge
  rebase_fallback: squash
automated_backport_labels: null
",
        )
        .unwrap();

        assert!(rule.validate().is_err());
    }
}
