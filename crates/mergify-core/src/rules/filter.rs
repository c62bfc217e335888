//! Predicate evaluation.

use mergify_models::{Condition, ConditionOperator, ConditionTree, ConditionValue};
use regex::Regex;

use super::{snapshot::Attribute, PullRequestSnapshot};
use crate::{DomainError, Result};

/// Evaluate a condition tree against a pull request snapshot.
///
/// `and`/`or` combinators short-circuit left to right.
pub fn evaluate_tree(tree: &ConditionTree, snapshot: &PullRequestSnapshot) -> Result<bool> {
    match tree {
        ConditionTree::Condition(condition) => evaluate_condition(condition, snapshot),
        ConditionTree::And(children) => {
            for child in children {
                if !evaluate_tree(child, snapshot)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        ConditionTree::Or(children) => {
            for child in children {
                if evaluate_tree(child, snapshot)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
    }
}

/// Evaluate one leaf condition against a pull request snapshot.
pub fn evaluate_condition(condition: &Condition, snapshot: &PullRequestSnapshot) -> Result<bool> {
    let attribute = snapshot.attribute(condition.field);

    let result = if condition.count {
        compare_cardinality(attribute, condition)?
    } else {
        compare_content(attribute, condition)?
    };

    Ok(result != condition.negate)
}

fn compare_cardinality(attribute: Attribute<'_>, condition: &Condition) -> Result<bool> {
    let expected = match &condition.value {
        ConditionValue::Integer(value) => *value,
        other => {
            return Err(DomainError::UnsupportedCondition {
                detail: format!("cardinality comparison needs an integer, got '{other}'"),
            })
        }
    };

    let cardinality = match attribute {
        Attribute::List(values) => values.len() as i64,
        Attribute::Scalar(_) | Attribute::Bool(_) => 1,
        Attribute::OptionalScalar(value) => i64::from(value.is_some()),
    };

    match condition.operator {
        ConditionOperator::Equal => Ok(cardinality == expected),
        ConditionOperator::NotEqual => Ok(cardinality != expected),
        ConditionOperator::GreaterThanOrEqual => Ok(cardinality >= expected),
        ConditionOperator::LessThanOrEqual => Ok(cardinality <= expected),
        ConditionOperator::LessThan => Ok(cardinality < expected),
        ConditionOperator::GreaterThan => Ok(cardinality > expected),
        ConditionOperator::RegexMatch => Err(DomainError::UnsupportedCondition {
            detail: format!("'{}' cannot regex-match a cardinality", condition.field),
        }),
    }
}

fn compare_content(attribute: Attribute<'_>, condition: &Condition) -> Result<bool> {
    match attribute {
        Attribute::Bool(actual) => match &condition.value {
            ConditionValue::Bool(expected) => Ok(actual == *expected),
            other => Err(DomainError::UnsupportedCondition {
                detail: format!("'{}' compares with a boolean, got '{other}'", condition.field),
            }),
        },
        Attribute::List(values) => {
            let expected = expected_text(condition)?;
            match condition.operator {
                // Equality on a list means membership.
                ConditionOperator::Equal => Ok(values.iter().any(|v| v == expected)),
                ConditionOperator::NotEqual => Ok(!values.iter().any(|v| v == expected)),
                ConditionOperator::RegexMatch => {
                    let regex = Regex::new(expected)?;
                    Ok(values.iter().any(|v| regex.is_match(v)))
                }
                operator => Err(DomainError::UnsupportedCondition {
                    detail: format!("'{}' does not support '{operator}'", condition.field),
                }),
            }
        }
        Attribute::Scalar(actual) => {
            compare_scalar(actual, condition.operator, expected_text(condition)?)
        }
        Attribute::OptionalScalar(Some(actual)) => {
            compare_scalar(actual, condition.operator, expected_text(condition)?)
        }
        Attribute::OptionalScalar(None) => {
            expected_text(condition)?;
            Ok(condition.operator == ConditionOperator::NotEqual)
        }
    }
}

fn expected_text(condition: &Condition) -> Result<&str> {
    match &condition.value {
        ConditionValue::String(value) => Ok(value.as_str()),
        other => Err(DomainError::UnsupportedCondition {
            detail: format!("'{}' compares with a string, got '{other}'", condition.field),
        }),
    }
}

fn compare_scalar(actual: &str, operator: ConditionOperator, expected: &str) -> Result<bool> {
    match operator {
        ConditionOperator::Equal => Ok(actual == expected),
        ConditionOperator::NotEqual => Ok(actual != expected),
        // Search semantics, not full match.
        ConditionOperator::RegexMatch => Ok(Regex::new(expected)?.is_match(actual)),
        ConditionOperator::GreaterThanOrEqual => Ok(actual >= expected),
        ConditionOperator::LessThanOrEqual => Ok(actual <= expected),
        ConditionOperator::LessThan => Ok(actual < expected),
        ConditionOperator::GreaterThan => Ok(actual > expected),
    }
}
