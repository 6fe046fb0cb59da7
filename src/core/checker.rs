//! Boundary invariant checker: every declared field of every type carrying
//! the boundary capability must be tagged with exactly one of the
//! runtime-required family or the nullable qualifier. The pass checks all
//! fields before reporting, so one run surfaces every offending field.

use crate::config::DiscoveryConfig;
use crate::core::registry::BoundaryRegistry;
use crate::domain::boundary::{FieldSpec, TypeSpec, BOUNDARY};
use crate::domain::nullness::scope_contains;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Neither family present: nullability must be declared explicitly.
    Ambiguous,
    /// Both families present: one of the two must be removed.
    Contradictory,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Violation {
    pub type_name: String,
    pub field: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::Ambiguous => write!(
                f,
                "{}.{}: no nullability tag, annotate as required or nullable",
                self.type_name, self.field
            ),
            ViolationKind::Contradictory => write!(
                f,
                "{}.{}: tagged both required and nullable, remove one",
                self.type_name, self.field
            ),
        }
    }
}

/// Outcome of one checker pass. Violations are sorted so the report does not
/// depend on registration order.
#[derive(Debug, Default, Serialize)]
pub struct CheckReport {
    checked_types: usize,
    checked_fields: usize,
    violations: Vec<Violation>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn checked_types(&self) -> usize {
        self.checked_types
    }

    pub fn checked_fields(&self) -> usize {
        self.checked_fields
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "checked {} types, {} fields: ",
            self.checked_types, self.checked_fields
        )?;
        if self.is_clean() {
            write!(f, "all fields explicitly tagged")
        } else {
            writeln!(f, "{} violation(s)", self.violations.len())?;
            for violation in &self.violations {
                writeln!(f, "  {}", violation)?;
            }
            Ok(())
        }
    }
}

fn either_or(required: bool, nullable: bool) -> bool {
    required ^ nullable
}

pub struct BoundaryChecker<'a> {
    registry: &'a BoundaryRegistry,
    config: DiscoveryConfig,
}

impl<'a> BoundaryChecker<'a> {
    pub fn new(registry: &'a BoundaryRegistry, config: DiscoveryConfig) -> Self {
        Self { registry, config }
    }

    /// Single synchronous pass over every boundary type in scope.
    pub fn check(&self) -> CheckReport {
        let mut report = CheckReport::default();

        for spec in self
            .registry
            .subtypes_of(BOUNDARY, self.config.expand_supertypes)
        {
            if !self.in_scope(spec) {
                tracing::debug!(type_name = %spec.full_name(), "skipping type outside scope");
                continue;
            }

            tracing::debug!(type_name = %spec.full_name(), "checking boundary type");
            report.checked_types += 1;

            for field in spec.fields {
                report.checked_fields += 1;
                if let Some(violation) = check_field(spec, field) {
                    tracing::warn!(%violation, "boundary invariant violated");
                    report.violations.push(violation);
                }
            }
        }

        report.violations.sort();
        report
    }

    fn in_scope(&self, spec: &TypeSpec) -> bool {
        let included = self
            .config
            .scopes
            .iter()
            .any(|scope| scope_contains(scope, spec.module_path));
        let excluded = self
            .config
            .excluded_scopes
            .iter()
            .any(|scope| scope_contains(scope, spec.module_path))
            || self
                .config
                .excluded_types
                .iter()
                .any(|name| *name == spec.full_name());
        included && !excluded
    }
}

fn check_field(spec: &TypeSpec, field: &FieldSpec) -> Option<Violation> {
    let required = field.requires_value();
    let nullable = field.allows_absent();
    if either_or(required, nullable) {
        return None;
    }

    let kind = if required {
        ViolationKind::Contradictory
    } else {
        ViolationKind::Ambiguous
    };
    Some(Violation {
        type_name: spec.full_name(),
        field: field.name.to_string(),
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_either_or() {
        assert!(!either_or(true, true));
        assert!(either_or(false, true));
        assert!(either_or(true, false));
        assert!(!either_or(false, false));
    }

    #[test]
    fn test_check_field_kinds() {
        use crate::domain::boundary::{FieldSpec, Tag};

        let spec = TypeSpec {
            name: "Fixture",
            module_path: "fixtures",
            implements: &[BOUNDARY],
            fields: &[],
        };

        let ok = FieldSpec {
            name: "ok",
            tags: &[Tag::NotEmpty],
        };
        assert!(check_field(&spec, &ok).is_none());

        let both = FieldSpec {
            name: "both",
            tags: &[Tag::NotNull, Tag::Nullable],
        };
        assert_eq!(
            check_field(&spec, &both).map(|v| v.kind),
            Some(ViolationKind::Contradictory)
        );

        let neither = FieldSpec {
            name: "neither",
            tags: &[],
        };
        assert_eq!(
            check_field(&spec, &neither).map(|v| v.kind),
            Some(ViolationKind::Ambiguous)
        );
    }
}
