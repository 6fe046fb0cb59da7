//! Runtime constraint validation for populated boundary objects. All
//! constraints of an object are evaluated before the result is surfaced, so
//! a failed validation reports every violated field, not just the first.

use crate::utils::error::{NullboundError, Result};
use serde::Serialize;
use std::fmt;

/// Runtime-enforced constraint kinds, matching the required tag family of
/// [`crate::domain::boundary::Tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Constraint {
    NotNull,
    NotEmpty,
    NotBlank,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::NotNull => write!(f, "NotNull"),
            Constraint::NotEmpty => write!(f, "NotEmpty"),
            Constraint::NotBlank => write!(f, "NotBlank"),
        }
    }
}

/// One violated constraint. `field` is a dotted path for nested objects,
/// e.g. `created_by.name`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ConstraintViolation {
    pub field: String,
    pub constraint: Constraint,
    pub message: String,
}

/// The full set of violations found in one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConstraintViolations {
    violations: Vec<ConstraintViolation>,
}

impl ConstraintViolations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: ConstraintViolation) {
        self.violations.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConstraintViolation> {
        self.violations.iter()
    }

    /// Ok when empty, otherwise the whole set as a terminal error.
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(NullboundError::ConstraintError(self))
        }
    }
}

impl IntoIterator for ConstraintViolations {
    type Item = ConstraintViolation;
    type IntoIter = std::vec::IntoIter<ConstraintViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl fmt::Display for ConstraintViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Evaluation order is unspecified; render sorted.
        let mut sorted = self.violations.clone();
        sorted.sort();
        let rendered: Vec<String> = sorted
            .iter()
            .map(|v| format!("{} ({}): {}", v.field, v.constraint, v.message))
            .collect();
        write!(f, "{}", rendered.join("; "))
    }
}

/// Validation pass over a populated object, accumulating every violated
/// constraint into one set.
pub trait Validate {
    fn validate(&self) -> ConstraintViolations;
}

pub fn require<T>(violations: &mut ConstraintViolations, field: &str, value: &Option<T>) {
    if value.is_none() {
        violations.push(ConstraintViolation {
            field: field.to_string(),
            constraint: Constraint::NotNull,
            message: "must hold a value".to_string(),
        });
    }
}

pub fn require_non_empty(violations: &mut ConstraintViolations, field: &str, value: &Option<String>) {
    if !value.as_ref().is_some_and(|s| !s.is_empty()) {
        violations.push(ConstraintViolation {
            field: field.to_string(),
            constraint: Constraint::NotEmpty,
            message: "must hold a non-empty value".to_string(),
        });
    }
}

pub fn require_non_blank(violations: &mut ConstraintViolations, field: &str, value: &Option<String>) {
    if !value.as_ref().is_some_and(|s| !s.trim().is_empty()) {
        violations.push(ConstraintViolation {
            field: field.to_string(),
            constraint: Constraint::NotBlank,
            message: "must hold a non-blank value".to_string(),
        });
    }
}

/// Validate a nested optional object, prefixing its violations with the
/// enclosing field name. An absent nested object is not itself a violation.
pub fn validate_nested<T: Validate>(
    violations: &mut ConstraintViolations,
    field: &str,
    value: &Option<T>,
) {
    if let Some(inner) = value {
        for violation in inner.validate() {
            violations.push(ConstraintViolation {
                field: format!("{}.{}", field, violation.field),
                ..violation
            });
        }
    }
}
