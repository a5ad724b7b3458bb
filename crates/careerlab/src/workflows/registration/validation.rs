use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::domain::{FieldValue, FormRecord};

/// Declarative constraint evaluated against one field. Rules run in the
/// order they were declared and stop at the first failure, so a field only
/// ever surfaces one message at a time.
#[derive(Debug, Clone)]
pub enum Rule {
    Required,
    MinLength(usize),
    Pattern {
        expression: &'static Regex,
        message: &'static str,
    },
    Matches {
        other: &'static str,
        message: &'static str,
    },
    Password,
}

/// Ordered rule list bound to a single field.
#[derive(Debug, Clone)]
pub struct FieldRules {
    pub field: &'static str,
    rules: Vec<Rule>,
}

impl FieldRules {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            rules: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.rules.push(Rule::Required);
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.rules.push(Rule::MinLength(length));
        self
    }

    pub fn pattern(mut self, expression: &'static Regex, message: &'static str) -> Self {
        self.rules.push(Rule::Pattern {
            expression,
            message,
        });
        self
    }

    pub fn matches(mut self, other: &'static str, message: &'static str) -> Self {
        self.rules.push(Rule::Matches { other, message });
        self
    }

    pub fn password(mut self) -> Self {
        self.rules.push(Rule::Password);
        self
    }
}

/// Field name to first failing message. Empty means the record passed.
/// Always returned as data; validation never panics or throws.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    errors: BTreeMap<String, String>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn message(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(field.to_string(), message.into());
    }
}

/// Validate a record against a rule set. Pure over the current record: no
/// mutation, no side effects, stable output for identical input.
pub fn validate(record: &FormRecord, rules: &[FieldRules]) -> ValidationReport {
    let mut report = ValidationReport::default();

    for field_rules in rules {
        let value = record.get(field_rules.field);
        for rule in &field_rules.rules {
            if let Some(message) = apply_rule(rule, value, record) {
                report.reject(field_rules.field, message);
                break;
            }
        }
    }

    report
}

fn apply_rule(rule: &Rule, value: Option<&FieldValue>, record: &FormRecord) -> Option<String> {
    match rule {
        Rule::Required => match value {
            None => Some("This field is required".to_string()),
            Some(value) if value.is_blank() => Some("This field is required".to_string()),
            Some(_) => None,
        },
        Rule::MinLength(length) => {
            let rendered = rendered_or_empty(value);
            if rendered.chars().count() < *length {
                Some(format!("Must be at least {length} characters"))
            } else {
                None
            }
        }
        Rule::Pattern {
            expression,
            message,
        } => {
            let rendered = rendered_or_empty(value);
            if expression.is_match(&rendered) {
                None
            } else {
                Some((*message).to_string())
            }
        }
        Rule::Matches { other, message } => {
            let rendered = rendered_or_empty(value);
            let counterpart = rendered_or_empty(record.get(*other));
            if rendered == counterpart {
                None
            } else {
                Some((*message).to_string())
            }
        }
        Rule::Password => password_failure(&rendered_or_empty(value)),
    }
}

fn rendered_or_empty(value: Option<&FieldValue>) -> String {
    value
        .and_then(FieldValue::rendered)
        .map(|rendered| rendered.into_owned())
        .unwrap_or_default()
}

/// Complexity checks in display order: length, then uppercase, lowercase,
/// digit. The first miss is the one the user sees.
fn password_failure(password: &str) -> Option<String> {
    if password.chars().count() < 8 {
        return Some("Password must be at least 8 characters".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Password needs an uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Password needs a lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password needs a digit".to_string());
    }
    None
}

pub fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
    })
}

pub fn year_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{4}$").expect("year pattern compiles"))
}

pub fn website_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^https?://\S+$").expect("website pattern compiles"))
}
