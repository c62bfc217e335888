use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Condition parse error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid condition '{text}' at position {position}: {message}")]
pub struct ParseError {
    /// Full clause being parsed.
    pub text: String,
    /// Offset of the offending character.
    pub position: usize,
    /// Human-readable detail.
    pub message: String,
}

impl ParseError {
    fn new(text: &str, position: usize, message: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            position,
            message: message.into(),
        }
    }
}

/// Pull request attribute a condition applies to.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionField {
    /// Head branch name.
    Head,
    /// Base branch name.
    Base,
    /// Author login.
    Author,
    /// Merge actor login.
    MergedBy,
    /// Body text.
    Body,
    /// Assignee logins.
    Assignee,
    /// Label names.
    Label,
    /// Locked state.
    Locked,
    /// Title text.
    Title,
    /// Modified file paths.
    Files,
    /// Milestone title.
    Milestone,
    /// Requested reviewer logins.
    ReviewRequested,
    /// Logins of approving reviewers.
    ReviewApprovedBy,
    /// Logins of dismissed reviewers.
    ReviewDismissedBy,
    /// Logins of reviewers requesting changes.
    ReviewChangesRequestedBy,
    /// Logins of commenting reviewers.
    ReviewCommentedBy,
    /// Successful status contexts.
    StatusSuccess,
    /// Pending status contexts.
    StatusPending,
    /// Failed status contexts.
    StatusFailure,
}

impl ConditionField {
    /// Condition name, as written in the policy language.
    pub fn name(self) -> String {
        serde_plain::to_string(&self).unwrap()
    }

    /// Value grammar attached to the field.
    fn value_kind(self) -> ValueKind {
        match self {
            Self::Head | Self::Base => ValueKind::Branch,
            Self::Author
            | Self::MergedBy
            | Self::Assignee
            | Self::ReviewRequested
            | Self::ReviewApprovedBy
            | Self::ReviewDismissedBy
            | Self::ReviewChangesRequestedBy
            | Self::ReviewCommentedBy => ValueKind::Login,
            Self::Body | Self::Label | Self::Title | Self::Files => ValueKind::Text,
            Self::Milestone | Self::StatusSuccess | Self::StatusPending | Self::StatusFailure => {
                ValueKind::Token
            }
            Self::Locked => ValueKind::Token,
        }
    }
}

impl Display for ConditionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

/// Per-field value grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    /// Git branch name: no `~ ^ : [ ] \` nor whitespace.
    Branch,
    /// GitHub login: no space nor `/`.
    Login,
    /// Free text, quotable.
    Text,
    /// Plain token without whitespace.
    Token,
}

/// Condition operator.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub enum ConditionOperator {
    /// `=` (also written `:` or `==`).
    #[serde(rename = "=")]
    Equal,
    /// `!=` (also written `≠`).
    #[serde(rename = "!=")]
    NotEqual,
    /// `~=`, regex search.
    #[serde(rename = "~=")]
    RegexMatch,
    /// `>=` (also written `≥`).
    #[serde(rename = ">=")]
    GreaterThanOrEqual,
    /// `<=` (also written `≤`).
    #[serde(rename = "<=")]
    LessThanOrEqual,
    /// `<`.
    #[serde(rename = "<")]
    LessThan,
    /// `>`.
    #[serde(rename = ">")]
    GreaterThan,
}

impl Display for ConditionOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&serde_plain::to_string(&self).unwrap())
    }
}

/// Condition value.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ConditionValue {
    /// String value.
    String(String),
    /// Integer value, from count-prefixed conditions.
    Integer(i64),
    /// Boolean value, from the implicit `locked` form.
    Bool(bool),
}

impl Display for ConditionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) if s.chars().any(char::is_whitespace) => {
                write!(f, "\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
            }
            Self::String(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// One leaf predicate of the policy language.
///
/// Parsed from a single clause such as `base=main`, `-label="needs review"`
/// or `#files>2`. `:` is a synonym of `=`; the Unicode operators `≠ ≥ ≤`
/// normalize to their ASCII counterparts; a leading `#` compares cardinality
/// instead of content.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Condition {
    /// Negate the result.
    pub negate: bool,
    /// Compare the attribute cardinality instead of its content.
    pub count: bool,
    /// Attribute to look at.
    pub field: ConditionField,
    /// Operator.
    pub operator: ConditionOperator,
    /// Value to compare with.
    pub value: ConditionValue,
}

impl FromStr for Condition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::new(s).parse()
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negate {
            f.write_str("-")?;
        }
        if self.count {
            f.write_str("#")?;
        }

        if self.field == ConditionField::Locked && self.value == ConditionValue::Bool(true) {
            return f.write_str("locked");
        }

        write!(f, "{}{}{}", self.field, self.operator, self.value)
    }
}

/// Hand-written scanner for the condition grammar.
struct Parser<'a> {
    text: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    fn parse(mut self) -> Result<Condition, ParseError> {
        self.skip_spaces();

        let negate = match self.peek() {
            Some('-') | Some('¬') => {
                self.advance();
                true
            }
            Some('+') => {
                self.advance();
                false
            }
            _ => false,
        };

        let count = match self.peek() {
            Some('#') => {
                self.advance();
                true
            }
            _ => false,
        };

        let field = self.parse_field()?;
        self.skip_spaces();

        if field == ConditionField::Locked {
            // `locked` takes no operator nor value.
            if self.peek().is_some() {
                return Err(self.error("'locked' takes no operator nor value"));
            }
            return Ok(Condition {
                negate,
                count,
                field,
                operator: ConditionOperator::Equal,
                value: ConditionValue::Bool(true),
            });
        }

        let operator = self.parse_operator()?;
        self.skip_spaces();
        let value = self.parse_value(field, count)?;
        self.skip_spaces();

        if self.peek().is_some() {
            return Err(self.error("unexpected trailing characters"));
        }

        Ok(Condition {
            negate,
            count,
            field,
            operator,
            value,
        })
    }

    fn parse_field(&mut self) -> Result<ConditionField, ParseError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '-') {
            self.advance();
        }

        let name: String = self.chars[start..self.pos].iter().collect();
        if name.is_empty() {
            return Err(self.error("expected a field name"));
        }

        serde_plain::from_str(&name)
            .map_err(|_| ParseError::new(self.text, start, format!("unknown field '{name}'")))
    }

    fn parse_operator(&mut self) -> Result<ConditionOperator, ParseError> {
        let two: String = self.chars[self.pos..self.chars.len().min(self.pos + 2)]
            .iter()
            .collect();

        let (operator, width) = match two.as_str() {
            "==" => (ConditionOperator::Equal, 2),
            "!=" => (ConditionOperator::NotEqual, 2),
            "~=" => (ConditionOperator::RegexMatch, 2),
            ">=" => (ConditionOperator::GreaterThanOrEqual, 2),
            "<=" => (ConditionOperator::LessThanOrEqual, 2),
            _ => match self.peek() {
                Some(':') | Some('=') => (ConditionOperator::Equal, 1),
                Some('≠') => (ConditionOperator::NotEqual, 1),
                Some('≥') => (ConditionOperator::GreaterThanOrEqual, 1),
                Some('≤') => (ConditionOperator::LessThanOrEqual, 1),
                Some('<') => (ConditionOperator::LessThan, 1),
                Some('>') => (ConditionOperator::GreaterThan, 1),
                _ => return Err(self.error("expected an operator")),
            },
        };

        self.pos += width;
        Ok(operator)
    }

    fn parse_value(
        &mut self,
        field: ConditionField,
        count: bool,
    ) -> Result<ConditionValue, ParseError> {
        let kind = field.value_kind();
        let raw = if kind == ValueKind::Text && self.peek() == Some('"') {
            self.parse_quoted()?
        } else {
            self.parse_token(kind)?
        };

        if count {
            let start = self.pos - raw.chars().count();
            return raw.parse().map(ConditionValue::Integer).map_err(|_| {
                ParseError::new(self.text, start, format!("expected an integer, got '{raw}'"))
            });
        }

        Ok(ConditionValue::String(raw))
    }

    fn parse_quoted(&mut self) -> Result<String, ParseError> {
        self.advance();

        let mut value = String::new();
        loop {
            match self.peek() {
                Some('"') => {
                    self.advance();
                    return Ok(value);
                }
                Some('\\') => {
                    self.advance();
                    match self.peek() {
                        Some(c) => {
                            value.push(c);
                            self.advance();
                        }
                        None => return Err(self.error("unterminated escape sequence")),
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
                None => return Err(self.error("unterminated quoted value")),
            }
        }
    }

    fn parse_token(&mut self, kind: ValueKind) -> Result<String, ParseError> {
        let forbidden: &[char] = match kind {
            ValueKind::Branch => &['~', '^', ':', '[', ']', '\\'],
            ValueKind::Login => &['/'],
            ValueKind::Text | ValueKind::Token => &[],
        };

        let start = self.pos;
        let mut value = String::new();
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                break;
            }
            if forbidden.contains(&c) {
                return Err(self.error(format!("forbidden character '{c}' in value")));
            }
            value.push(c);
            self.advance();
        }

        if value.is_empty() {
            return Err(ParseError::new(self.text, start, "expected a value"));
        }
        Ok(value)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn skip_spaces(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(self.text, self.pos, message)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::{Condition, ConditionField, ConditionOperator, ConditionValue};

    fn parse(s: &str) -> Condition {
        Condition::from_str(s).unwrap()
    }

    #[test]
    fn colon_and_equal_are_synonyms() {
        assert_eq!(parse("base:main"), parse("base=main"));
        assert_eq!(parse("base==main"), parse("base=main"));
        assert_eq!(parse("base=main").operator, ConditionOperator::Equal);
    }

    #[test]
    fn negation_markers() {
        assert_eq!(parse("label=foo"), parse("+label=foo"));
        assert!(!parse("label=foo").negate);
        assert!(parse("-label=foo").negate);
        assert!(parse("¬label=foo").negate);
    }

    #[test]
    fn unicode_operators_normalize() {
        assert_eq!(parse("base≠main"), parse("base!=main"));
        assert_eq!(parse("#files≥2"), parse("#files>=2"));
        assert_eq!(parse("#files≤2"), parse("#files<=2"));
    }

    #[test]
    fn count_prefix_coerces_to_integer() {
        let condition = parse("#files>2");
        assert!(condition.count);
        assert_eq!(condition.field, ConditionField::Files);
        assert_eq!(condition.operator, ConditionOperator::GreaterThan);
        assert_eq!(condition.value, ConditionValue::Integer(2));
    }

    #[test]
    fn count_prefix_rejects_non_integer() {
        assert!(Condition::from_str("#files>abc").is_err());
    }

    #[test]
    fn quoted_value_keeps_whitespace() {
        let condition = parse(r#"-label="needs review""#);
        assert!(condition.negate);
        assert_eq!(
            condition.value,
            ConditionValue::String("needs review".into())
        );
    }

    #[test]
    fn quoted_value_supports_escapes() {
        let condition = parse(r#"title~="a \"quoted\" word""#);
        assert_eq!(
            condition.value,
            ConditionValue::String(r#"a "quoted" word"#.into())
        );
    }

    #[test]
    fn locked_is_implicit_equal_true() {
        let condition = parse("locked");
        assert_eq!(condition.field, ConditionField::Locked);
        assert_eq!(condition.operator, ConditionOperator::Equal);
        assert_eq!(condition.value, ConditionValue::Bool(true));

        assert!(parse("-locked").negate);
        assert!(Condition::from_str("locked=true").is_err());
    }

    #[test]
    fn regex_operator() {
        let condition = parse("title~=^feat");
        assert_eq!(condition.operator, ConditionOperator::RegexMatch);
        assert_eq!(condition.value, ConditionValue::String("^feat".into()));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let error = Condition::from_str("unknown=1").unwrap_err();
        assert!(error.message.contains("unknown field"));
        assert_eq!(error.text, "unknown=1");
    }

    #[test]
    fn missing_operator_is_rejected() {
        assert!(Condition::from_str("base").is_err());
        assert!(Condition::from_str("base main").is_err());
    }

    #[test]
    fn branch_value_charset() {
        assert!(Condition::from_str(r"base=main^x").is_err());
        assert!(Condition::from_str("author=a/b").is_err());
        assert!(parse("files=src/main.rs").value == ConditionValue::String("src/main.rs".into()));
    }

    #[test]
    fn every_field_parses() {
        for clause in [
            "head=feature",
            "base=main",
            "author=me",
            "merged-by=me",
            "body~=WIP",
            "assignee=me",
            "label=bug",
            "locked",
            "title~=^fix",
            "files=README.md",
            "milestone=v1",
            "review-requested=me",
            "review-approved-by=me",
            "review-dismissed-by=me",
            "review-changes-requested-by=me",
            "review-commented-by=me",
            "status-success=ci/build",
            "status-pending=ci/build",
            "status-failure=ci/build",
        ] {
            Condition::from_str(clause).unwrap();
        }
    }

    #[test]
    fn display_round_trip() {
        for clause in [
            "base=main",
            "-label=\"needs review\"",
            "#files>2",
            "locked",
            "-locked",
            "status-success=ci/build",
            "title~=^fix",
        ] {
            let parsed = parse(clause);
            assert_eq!(parse(&parsed.to_string()), parsed, "clause: {clause}");
            assert_eq!(parsed.to_string(), clause);
        }

        // Synonym operators re-serialize to their canonical form.
        assert_eq!(parse("base:main").to_string(), "base=main");
        assert_eq!(parse("base≠main").to_string(), "base!=main");
    }
}
