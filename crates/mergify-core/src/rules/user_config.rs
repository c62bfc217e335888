//! User configuration.

use mergify_models::{LegacyRules, PullRequestRule};

use super::RulesError;

/// Parsed `.mergify.yml` content.
///
/// Exactly one of the two shapes is accepted: the legacy `rules:` section or
/// the current `pull_request_rules:` list. Validation is eager: every rule,
/// condition clause and schema field is checked at load time, never when a
/// decision is needed.
#[derive(Debug, Clone, PartialEq)]
pub enum UserConfiguration {
    /// Legacy per-branch schema; `rules: null` disables automation entirely.
    Legacy {
        /// Rules section.
        rules: Option<LegacyRules>,
    },
    /// Current rule-list schema.
    Current {
        /// Ordered rule list.
        pull_request_rules: Vec<PullRequestRule>,
    },
}

impl UserConfiguration {
    /// Parse and validate a configuration file content.
    pub fn from_yaml(content: &str) -> Result<Self, RulesError> {
        let document: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(Self::invalid_yaml)?;

        let mapping = document.as_mapping().ok_or_else(|| RulesError::InvalidRules {
            detail: "configuration must be a mapping".into(),
        })?;

        for key in mapping.keys() {
            match key.as_str() {
                Some("rules") | Some("pull_request_rules") => (),
                Some(other) => {
                    return Err(RulesError::InvalidRules {
                        detail: format!("unknown key '{other}'"),
                    })
                }
                None => {
                    return Err(RulesError::InvalidRules {
                        detail: "configuration keys must be strings".into(),
                    })
                }
            }
        }

        let rules = document.get("rules");
        let pull_request_rules = document.get("pull_request_rules");

        match (rules, pull_request_rules) {
            (Some(_), Some(_)) => Err(RulesError::InvalidRules {
                detail: "'rules' and 'pull_request_rules' are mutually exclusive".into(),
            }),
            (None, None) => Err(RulesError::InvalidRules {
                detail: "expected a 'rules' or 'pull_request_rules' key".into(),
            }),
            (Some(serde_yaml::Value::Null), None) => Ok(Self::Legacy { rules: None }),
            (Some(rules), None) => Ok(Self::Legacy {
                rules: Some(
                    serde_yaml::from_value(rules.clone()).map_err(|e| {
                        RulesError::InvalidRules {
                            detail: e.to_string(),
                        }
                    })?,
                ),
            }),
            (None, Some(rules)) => Ok(Self::Current {
                pull_request_rules: serde_yaml::from_value(rules.clone()).map_err(|e| {
                    RulesError::InvalidRules {
                        detail: e.to_string(),
                    }
                })?,
            }),
        }
    }

    fn invalid_yaml(error: serde_yaml::Error) -> RulesError {
        // Report the position when the underlying parser exposes one.
        let detail = match error.location() {
            Some(location) => format!("position ({}:{})", location.line(), location.column()),
            None => error.to_string(),
        };
        RulesError::InvalidRules { detail }
    }
}
