//! Legacy per-branch configuration.

use mergify_config::Config;
use mergify_models::{deep_merge, BranchRule, LegacyBlock, LegacyRules};
use regex::Regex;
use tracing::info;

use super::RulesError;

/// Schema-complete rule template the user configuration is merged over.
const DEFAULT_RULE: &str = include_str!("default_rule.yml");

/// Resolves the effective [`BranchRule`] of a branch from a legacy
/// configuration.
///
/// Built once at startup; the compiled-in default rule is parsed in the
/// constructor and reused for every resolution.
pub struct LegacyConfigMerger {
    default_rule: serde_yaml::Value,
    configuration_path: String,
}

impl LegacyConfigMerger {
    pub fn new(config: &Config) -> Result<Self, RulesError> {
        let default_rule =
            serde_yaml::from_str(DEFAULT_RULE).map_err(|e| RulesError::InvalidRules {
                detail: format!("invalid default rule: {e}"),
            })?;

        Ok(Self {
            default_rule,
            configuration_path: config.configuration_path.clone(),
        })
    }

    /// Resolve the effective rule for `branch`, `None` when automation is
    /// disabled on it.
    ///
    /// Branch patterns are tried in lexicographic order; a `^`-prefixed
    /// pattern is a regex over the branch name, anything else an exact
    /// literal; the first match wins. The merged result must satisfy the
    /// complete schema, and always lists the configuration file itself in
    /// `disabling_files` so that editing the configuration suspends
    /// automation until it is validated again.
    pub fn branch_rule(
        &self,
        rules: Option<&LegacyRules>,
        branch: &str,
    ) -> Result<Option<BranchRule>, RulesError> {
        let rules = match rules {
            Some(rules) => rules,
            None => return Ok(None),
        };

        let merged = match self.build_branch_rule(rules, branch)? {
            Some(merged) => merged,
            None => return Ok(None),
        };

        let mut rule: BranchRule =
            serde_yaml::from_value(merged).map_err(|e| RulesError::InvalidRules {
                detail: e.to_string(),
            })?;
        rule.validate()
            .map_err(|detail| RulesError::InvalidRules { detail })?;

        if !rule.disabling_files.contains(&self.configuration_path) {
            rule.disabling_files.push(self.configuration_path.clone());
        }

        info!(branch = %branch, message = "Fetched branch rule");
        Ok(Some(rule))
    }

    fn build_branch_rule(
        &self,
        rules: &LegacyRules,
        branch: &str,
    ) -> Result<Option<serde_yaml::Value>, RulesError> {
        for (pattern, block) in &rules.branches {
            if !Self::pattern_matches(pattern, branch)? {
                continue;
            }

            return match block {
                LegacyBlock::Disabled | LegacyBlock::Unset => Ok(None),
                LegacyBlock::Overrides(overrides) => {
                    let mut rule = self.default_rule.clone();
                    if let LegacyBlock::Overrides(default) = &rules.default {
                        deep_merge(&mut rule, &serde_yaml::Value::Mapping(default.clone()));
                    }
                    deep_merge(&mut rule, &serde_yaml::Value::Mapping(overrides.clone()));
                    Ok(Some(rule))
                }
            };
        }

        // No branch pattern matched, the default block alone applies.
        match &rules.default {
            LegacyBlock::Disabled => Ok(None),
            LegacyBlock::Unset => Ok(Some(self.default_rule.clone())),
            LegacyBlock::Overrides(default) => {
                let mut rule = self.default_rule.clone();
                deep_merge(&mut rule, &serde_yaml::Value::Mapping(default.clone()));
                Ok(Some(rule))
            }
        }
    }

    fn pattern_matches(pattern: &str, branch: &str) -> Result<bool, RulesError> {
        if pattern.starts_with('^') {
            let regex = Regex::new(pattern).map_err(|e| RulesError::InvalidRules {
                detail: format!("invalid branch pattern '{pattern}': {e}"),
            })?;
            Ok(regex.is_match(branch))
        } else {
            Ok(pattern == branch)
        }
    }
}

#[cfg(test)]
mod tests {
    use mergify_config::Config;
    use mergify_models::{LegacyRules, MergeMethod};
    use pretty_assertions::assert_eq;

    use super::LegacyConfigMerger;

    fn merger() -> LegacyConfigMerger {
        LegacyConfigMerger::new(&Config::from_env_no_version()).unwrap()
    }

    fn legacy(yaml: &str) -> LegacyRules {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn no_rules_section_disables() {
        assert!(merger().branch_rule(None, "main").unwrap().is_none());
    }

    #[test]
    fn no_match_falls_back_to_default_block() {
        let rules = legacy(
            r"
default:
  merge_strategy:
    method: squash
branches:
  dev:
    disabling_label: wip
",
        );

        let rule = merger().branch_rule(Some(&rules), "main").unwrap().unwrap();
        assert_eq!(rule.merge_strategy.method, MergeMethod::Squash);
        assert_eq!(rule.disabling_label, "no-mergify");
    }

    #[test]
    fn branch_override_merges_over_default_block() {
        let rules = legacy(
            r"
default:
  merge_strategy:
    method: squash
  disabling_label: wip
branches:
  main:
    protection:
      required_status_checks:
        contexts: [ci/build]
",
        );

        let rule = merger().branch_rule(Some(&rules), "main").unwrap().unwrap();

        // Deep merge: sibling keys from every layer survive.
        assert_eq!(rule.merge_strategy.method, MergeMethod::Squash);
        assert_eq!(rule.disabling_label, "wip");
        let checks = rule.protection.required_status_checks.unwrap();
        assert!(checks.strict);
        assert_eq!(checks.contexts, vec!["ci/build"]);
    }

    #[test]
    fn null_branch_block_disables() {
        let rules = legacy("branches: {main: null}");
        assert!(merger().branch_rule(Some(&rules), "main").unwrap().is_none());
    }

    #[test]
    fn null_default_block_disables_unmatched_branches() {
        let rules = legacy("default: null");
        assert!(merger().branch_rule(Some(&rules), "main").unwrap().is_none());
    }

    #[test]
    fn regex_patterns_match_and_literals_compare() {
        let rules = legacy(
            r"
branches:
  ^stable/.*:
    merge_strategy:
      method: rebase
  main:
    merge_strategy:
      method: squash
",
        );
        let merger = merger();

        let rule = merger
            .branch_rule(Some(&rules), "stable/1.0")
            .unwrap()
            .unwrap();
        assert_eq!(rule.merge_strategy.method, MergeMethod::Rebase);

        let rule = merger.branch_rule(Some(&rules), "main").unwrap().unwrap();
        assert_eq!(rule.merge_strategy.method, MergeMethod::Squash);

        let rule = merger.branch_rule(Some(&rules), "dev").unwrap().unwrap();
        assert_eq!(rule.merge_strategy.method, MergeMethod::Merge);
    }

    #[test]
    fn first_pattern_in_lexicographic_order_wins() {
        let rules = legacy(
            r"
branches:
  ^ma.*:
    merge_strategy:
      method: rebase
  main:
    merge_strategy:
      method: squash
",
        );

        // "^ma.*" sorts before "main".
        let rule = merger().branch_rule(Some(&rules), "main").unwrap().unwrap();
        assert_eq!(rule.merge_strategy.method, MergeMethod::Rebase);
    }

    #[test]
    fn disabling_files_always_contain_the_configuration_file() {
        let merger = merger();

        let rules = legacy("branches: {main: {disabling_files: [Makefile]}}");
        let rule = merger.branch_rule(Some(&rules), "main").unwrap().unwrap();
        assert_eq!(rule.disabling_files, vec!["Makefile", ".mergify.yml"]);

        // Already listed: not duplicated.
        let rules = legacy("branches: {main: {disabling_files: [.mergify.yml]}}");
        let rule = merger.branch_rule(Some(&rules), "main").unwrap().unwrap();
        assert_eq!(
            rule.disabling_files
                .iter()
                .filter(|f| *f == ".mergify.yml")
                .count(),
            1
        );
    }

    #[test]
    fn merged_rule_must_satisfy_the_schema() {
        let rules = legacy(
            r"
branches:
  main:
    merge_strategy:
      method: fast-forward
",
        );

        assert!(merger().branch_rule(Some(&rules), "main").is_err());
    }

    #[test]
    fn invalid_branch_pattern_is_reported() {
        let rules = legacy("branches: {'^(': {disabling_label: wip}}");
        assert!(merger().branch_rule(Some(&rules), "main").is_err());
    }
}
