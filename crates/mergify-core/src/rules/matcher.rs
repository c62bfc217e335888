//! Rule matching.

use std::collections::BTreeMap;

use mergify_models::{ConditionTree, PullRequestRule};

use super::{filter::evaluate_tree, PullRequestSnapshot};
use crate::Result;

/// Outcome of matching a rule list against one pull request snapshot.
#[derive(Debug, Default)]
pub struct RuleMatch<'a> {
    /// Rules whose conditions all matched, in declaration order.
    pub matching_rules: Vec<&'a PullRequestRule>,
    /// Rules that did not match, with their first unsatisfied condition.
    pub next_rules: Vec<(&'a PullRequestRule, &'a ConditionTree)>,
    /// Action directives of the matching rules, shallow-merged in
    /// declaration order: a later-declared rule wins on key conflicts.
    pub directive: BTreeMap<String, serde_yaml::Value>,
}

impl RuleMatch<'_> {
    /// Conditions that must still match for `feature` to be enabled.
    ///
    /// Reported to the user to explain what would need to change for a
    /// non-matching rule referencing the feature to activate.
    pub fn next_conditions_for(&self, feature: &str) -> Vec<&ConditionTree> {
        self.next_rules
            .iter()
            .filter(|(rule, _)| rule.actions.contains_key(feature))
            .map(|(_, condition)| *condition)
            .collect()
    }
}

/// Match every rule against the snapshot and merge the directives.
///
/// Matching is exhaustive over the list: a full match never pre-empts the
/// rules after it. Within a rule, evaluation stops at the first unsatisfied
/// condition.
pub fn match_rules<'a>(
    rules: &'a [PullRequestRule],
    snapshot: &PullRequestSnapshot,
) -> Result<RuleMatch<'a>> {
    let mut outcome = RuleMatch::default();

    for rule in rules {
        let mut unsatisfied = None;
        for condition in &rule.conditions {
            if !evaluate_tree(condition, snapshot)? {
                unsatisfied = Some(condition);
                break;
            }
        }

        match unsatisfied {
            Some(condition) => outcome.next_rules.push((rule, condition)),
            None => {
                outcome.matching_rules.push(rule);
                for (key, value) in &rule.actions {
                    outcome.directive.insert(key.clone(), value.clone());
                }
            }
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use mergify_models::PullRequestRule;
    use pretty_assertions::assert_eq;

    use super::match_rules;
    use crate::rules::PullRequestSnapshot;

    fn rules(yaml: &str) -> Vec<PullRequestRule> {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn snapshot() -> PullRequestSnapshot {
        PullRequestSnapshot {
            base: "main".into(),
            labels: vec!["bug".into()],
            ..Default::default()
        }
    }

    #[test]
    fn later_matching_rule_wins_on_key_conflicts() {
        let rules = rules(
            r"
- name: A
  conditions: [base=main]
  x: 1
- name: B
  conditions: [base=main]
  x: 2
",
        );

        let outcome = match_rules(&rules, &snapshot()).unwrap();

        assert_eq!(
            outcome
                .matching_rules
                .iter()
                .map(|r| r.name.as_str())
                .collect::<Vec<_>>(),
            vec!["A", "B"]
        );
        assert!(outcome.next_rules.is_empty());
        assert_eq!(outcome.directive["x"], serde_yaml::Value::from(2));
    }

    #[test]
    fn directive_never_contains_clerical_fields() {
        let rules = rules(
            r"
- name: A
  conditions: [base=main]
  merge: {method: squash}
",
        );

        let outcome = match_rules(&rules, &snapshot()).unwrap();
        assert!(!outcome.directive.contains_key("name"));
        assert!(!outcome.directive.contains_key("conditions"));
        assert!(outcome.directive.contains_key("merge"));
    }

    #[test]
    fn empty_match_yields_empty_directive() {
        let rules = rules(
            r"
- name: A
  conditions: [base=dev]
  x: 1
",
        );

        let outcome = match_rules(&rules, &snapshot()).unwrap();
        assert!(outcome.matching_rules.is_empty());
        assert!(outcome.directive.is_empty());
    }

    #[test]
    fn first_unsatisfied_condition_is_recorded() {
        let rules = rules(
            r"
- name: A
  conditions: [base=main, label=enhancement, label=bug]
  x: 1
",
        );

        let outcome = match_rules(&rules, &snapshot()).unwrap();

        assert_eq!(outcome.next_rules.len(), 1);
        let (rule, condition) = outcome.next_rules[0];
        assert_eq!(rule.name, "A");
        assert_eq!(condition.to_string(), "label=enhancement");
    }

    #[test]
    fn next_conditions_for_feature() {
        let rules = rules(
            r"
- name: A
  conditions: [base=dev]
  automerge: true
- name: B
  conditions: [label=enhancement]
  backport: {branches: [stable]}
- name: C
  conditions: [base=main]
  automerge: false
",
        );

        let outcome = match_rules(&rules, &snapshot()).unwrap();

        let unmet = outcome.next_conditions_for("automerge");
        assert_eq!(unmet.len(), 1);
        assert_eq!(unmet[0].to_string(), "base=dev");
        assert!(outcome.next_conditions_for("delete_head_branch").is_empty());
    }

    #[test]
    fn matching_is_deterministic() {
        let rules = rules(
            r"
- name: A
  conditions: [base=main, '#files<5']
  x: 1
",
        );

        let first = match_rules(&rules, &snapshot()).unwrap();
        let second = match_rules(&rules, &snapshot()).unwrap();
        assert_eq!(first.directive, second.directive);
        assert_eq!(first.matching_rules, second.matching_rules);
    }
}
