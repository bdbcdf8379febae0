// --- File: crates/slotbridge_common/src/validation.rs ---
//! A small declarative validation engine.
//!
//! A [`RuleSet`] is an ordered list of `(field, message, predicate)` rules.
//! Every rule is evaluated, so the caller gets the complete list of failures
//! instead of the first one.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// One failed rule: which property and what was wrong with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub property_name: String,
    pub error_message: String,
}

impl FieldError {
    pub fn new(property_name: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            error_message: error_message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property_name, self.error_message)
    }
}

/// A non-empty collection of [`FieldError`]s, in rule order.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("One or more validation errors occurred.")]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn single(property_name: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self(vec![FieldError::new(property_name, error_message)])
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if any failure carries exactly this message.
    pub fn contains_message(&self, message: &str) -> bool {
        self.0.iter().any(|e| e.error_message == message)
    }

    /// `Field: message` lines, for logs.
    pub fn summary(&self) -> String {
        self.0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

struct Rule<T> {
    field: &'static str,
    message: &'static str,
    check: Predicate<T>,
}

/// Ordered rules over a value of type `T`.
pub struct RuleSet<T> {
    rules: Vec<Rule<T>>,
}

impl<T> Default for RuleSet<T> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<T> RuleSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule. `check` returns `true` when the value is acceptable.
    pub fn rule<F>(mut self, field: &'static str, message: &'static str, check: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule {
            field,
            message,
            check: Box::new(check),
        });
        self
    }

    /// Runs every rule and returns the failures in rule order.
    pub fn check(&self, value: &T) -> Vec<FieldError> {
        self.rules
            .iter()
            .filter(|rule| !(rule.check)(value))
            .map(|rule| FieldError::new(rule.field, rule.message))
            .collect()
    }

    pub fn validate(&self, value: &T) -> Result<(), ValidationErrors> {
        let errors = ValidationErrors(self.check(value));
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Not empty and not only whitespace.
pub fn is_not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}
