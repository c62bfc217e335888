use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// One block of the legacy configuration.
///
/// A block that is explicitly `null` disables automation, which is not the
/// same thing as the key being absent, so the usual `Option` does not fit.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LegacyBlock {
    /// Key absent.
    #[default]
    Unset,
    /// Key explicitly set to `null`: automation disabled.
    Disabled,
    /// Partial rule overrides, merged over the default rule.
    Overrides(serde_yaml::Mapping),
}

impl<'de> Deserialize<'de> for LegacyBlock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<serde_yaml::Mapping>::deserialize(deserializer)? {
            None => Self::Disabled,
            Some(overrides) => Self::Overrides(overrides),
        })
    }
}

/// Legacy `rules:` configuration section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LegacyRules {
    /// Default rule overrides, applied to every branch.
    #[serde(default)]
    pub default: LegacyBlock,
    /// Per-branch overrides; a `^`-prefixed key is a regex over the branch
    /// name, anything else is a literal.
    #[serde(default)]
    pub branches: BTreeMap<String, LegacyBlock>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{LegacyBlock, LegacyRules};

    #[test]
    fn absent_null_and_mapping_blocks_are_distinct() {
        let rules: LegacyRules = serde_yaml::from_str(
            r"
branches:
  master: null
  stable/1.0:
    merge_strategy:
      method: squash
",
        )
        .unwrap();

        assert_eq!(rules.default, LegacyBlock::Unset);
        assert_eq!(rules.branches["master"], LegacyBlock::Disabled);
        assert!(matches!(
            rules.branches["stable/1.0"],
            LegacyBlock::Overrides(_)
        ));
    }

    #[test]
    fn explicit_null_default_disables() {
        let rules: LegacyRules = serde_yaml::from_str("default: null").unwrap();
        assert_eq!(rules.default, LegacyBlock::Disabled);
    }
}
