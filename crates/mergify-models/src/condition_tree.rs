use std::{fmt::Display, str::FromStr};

use serde::{
    de::{self, MapAccess, SeqAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::Condition;

/// A condition, or a boolean combinator over sub-trees.
///
/// In YAML, a leaf is a plain string in the condition grammar and a
/// combinator is a mapping with exactly one `and`/`or` key:
///
/// ```yaml
/// conditions:
///   - base=main
///   - or:
///       - label=hotfix
///       - author=release-bot
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionTree {
    /// Leaf condition.
    Condition(Condition),
    /// Every sub-tree must match.
    And(Vec<ConditionTree>),
    /// At least one sub-tree must match.
    Or(Vec<ConditionTree>),
}

impl Display for ConditionTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn join(f: &mut std::fmt::Formatter<'_>, trees: &[ConditionTree]) -> std::fmt::Result {
            for (index, tree) in trees.iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{tree}")?;
            }
            Ok(())
        }

        match self {
            Self::Condition(condition) => write!(f, "{condition}"),
            Self::And(trees) => {
                f.write_str("and [")?;
                join(f, trees)?;
                f.write_str("]")
            }
            Self::Or(trees) => {
                f.write_str("or [")?;
                join(f, trees)?;
                f.write_str("]")
            }
        }
    }
}

impl<'de> Deserialize<'de> for ConditionTree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TreeVisitor;

        impl<'de> Visitor<'de> for TreeVisitor {
            type Value = ConditionTree;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a condition string or a single-key and/or mapping")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Condition::from_str(value)
                    .map(ConditionTree::Condition)
                    .map_err(|e| {
                        E::custom(format_args!("Invalid condition '{value}'. {}", e.message))
                    })
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                struct Children(Vec<ConditionTree>);

                impl<'de> Deserialize<'de> for Children {
                    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                    where
                        D: Deserializer<'de>,
                    {
                        struct ChildrenVisitor;

                        impl<'de> Visitor<'de> for ChildrenVisitor {
                            type Value = Children;

                            fn expecting(
                                &self,
                                f: &mut std::fmt::Formatter<'_>,
                            ) -> std::fmt::Result {
                                f.write_str("a list of conditions")
                            }

                            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
                            where
                                A: SeqAccess<'de>,
                            {
                                let mut children = Vec::new();
                                while let Some(child) = seq.next_element()? {
                                    children.push(child);
                                }
                                Ok(Children(children))
                            }
                        }

                        deserializer.deserialize_seq(ChildrenVisitor)
                    }
                }

                let (key, Children(children)) = map
                    .next_entry::<String, Children>()?
                    .ok_or_else(|| de::Error::custom("expected a single and/or key"))?;

                if map.next_key::<String>()?.is_some() {
                    return Err(de::Error::custom(
                        "a combinator takes exactly one and/or key",
                    ));
                }

                match key.as_str() {
                    "and" => Ok(ConditionTree::And(children)),
                    "or" => Ok(ConditionTree::Or(children)),
                    other => Err(de::Error::custom(format_args!(
                        "unknown combinator '{other}', expected and/or"
                    ))),
                }
            }
        }

        deserializer.deserialize_any(TreeVisitor)
    }
}

impl Serialize for ConditionTree {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Condition(condition) => serializer.serialize_str(&condition.to_string()),
            Self::And(children) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("and", children)?;
                map.end()
            }
            Self::Or(children) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("or", children)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::ConditionTree;

    #[test]
    fn deserialize_leaf() {
        let tree: ConditionTree = serde_yaml::from_str("base=main").unwrap();
        assert!(matches!(tree, ConditionTree::Condition(_)));
    }

    #[test]
    fn deserialize_combinator() {
        let tree: ConditionTree = serde_yaml::from_str(
            r"
or:
  - label=hotfix
  - and:
      - base=main
      - locked
",
        )
        .unwrap();

        match tree {
            ConditionTree::Or(children) => {
                assert_eq!(children.len(), 2);
                assert!(matches!(children[1], ConditionTree::And(_)));
            }
            other => panic!("expected an or combinator, got {other:?}"),
        }
    }

    #[test]
    fn invalid_leaf_reports_parser_message() {
        let error = serde_yaml::from_str::<ConditionTree>("frobnicate=1").unwrap_err();
        assert!(error.to_string().contains("Invalid condition 'frobnicate=1'"));
    }

    #[test]
    fn combinator_takes_exactly_one_key() {
        let error = serde_yaml::from_str::<ConditionTree>(
            r"
and: [base=main]
or: [label=bug]
",
        )
        .unwrap_err();
        assert!(error.to_string().contains("exactly one"));
    }

    #[test]
    fn unknown_combinator_is_rejected() {
        assert!(serde_yaml::from_str::<ConditionTree>("xor: [base=main]").is_err());
    }

    #[test]
    fn serialize_round_trip() {
        let tree: ConditionTree = serde_yaml::from_str("or: [label=hotfix, base=main]").unwrap();
        let text = serde_yaml::to_string(&tree).unwrap();
        let back: ConditionTree = serde_yaml::from_str(&text).unwrap();
        assert_eq!(tree, back);
    }
}
