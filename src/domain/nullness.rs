//! Nullability metadata inspired by Kotlin and Spring: everything is assumed
//! to require a value by default, and the rare locations that may legitimately
//! be absent are marked [`Nullness::Nullable`] explicitly. Keeping the
//! nullable marks rare and the non-null default implicit is what keeps the
//! marks visible; annotating every required location would drown them out.
//!
//! A [`ScopeDefault`] declared on a module establishes the non-null
//! presumption for every location of the covered categories inside that
//! module. Nested modules inherit the enclosing declaration unless they
//! declare their own. An explicit nullable mark on a location always takes
//! precedence over any scope default.
//!
//! Rules for overriding methods inside a non-null scope, for tools that
//! check subtype contracts:
//!
//! - parameter narrowing (`Nullable` in the supertype, `NonNull` in the
//!   override) is always allowed; the override accepts less than the
//!   contract demands of callers.
//! - parameter widening (`NonNull` to `Nullable`) requires the explicit
//!   nullable mark on the overriding parameter; scope defaults never widen
//!   an inherited contract.
//! - return widening (`NonNull` to `Nullable`) also requires the explicit
//!   mark; nullable returns are not inherited, and an unmarked override in
//!   a covered scope resolves back to `NonNull`.
//! - return narrowing (`Nullable` to `NonNull`) is always allowed.
//!
//! These rules are advisory for analysis tooling; nothing in this crate
//! executes them.

/// Location categories a scope default can cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Field,
    Return,
    Parameter,
}

/// Effective nullability of a single location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nullness {
    /// The location must hold a value.
    NonNull,
    /// The location may legitimately be absent.
    Nullable,
    /// No explicit mark and no covering scope default.
    Unknown,
}

/// Scope-level non-null presumption. The three variants differ only in which
/// location categories they cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeDefault {
    /// Fields only.
    NonNullFields,
    /// Method returns and parameters only.
    NonNullApi,
    /// Fields, returns and parameters.
    NonNullScope,
}

impl ScopeDefault {
    pub fn covers(self, target: Target) -> bool {
        match self {
            ScopeDefault::NonNullFields => matches!(target, Target::Field),
            ScopeDefault::NonNullApi => matches!(target, Target::Return | Target::Parameter),
            ScopeDefault::NonNullScope => true,
        }
    }
}

impl Nullness {
    /// Resolve the effective nullability of a location: an explicit mark
    /// always wins, otherwise a covering scope default presumes non-null.
    pub fn resolve(
        explicit: Option<Nullness>,
        default: Option<ScopeDefault>,
        target: Target,
    ) -> Nullness {
        if let Some(explicit) = explicit {
            return explicit;
        }
        match default {
            Some(default) if default.covers(target) => Nullness::NonNull,
            _ => Nullness::Unknown,
        }
    }
}

/// True if `module_path` is `scope` itself or nested anywhere below it.
pub fn scope_contains(scope: &str, module_path: &str) -> bool {
    module_path == scope
        || (module_path.starts_with(scope) && module_path[scope.len()..].starts_with("::"))
}

/// Scope defaults declared per module path. Lookup resolves to the innermost
/// enclosing declaration, so nested modules inherit from their parents until
/// they declare a default of their own.
#[derive(Debug, Default)]
pub struct ScopeMap {
    defaults: Vec<(String, ScopeDefault)>,
}

impl ScopeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, scope: impl Into<String>, default: ScopeDefault) -> &mut Self {
        self.defaults.push((scope.into(), default));
        self
    }

    pub fn default_for(&self, module_path: &str) -> Option<ScopeDefault> {
        self.defaults
            .iter()
            .filter(|(scope, _)| scope_contains(scope, module_path))
            .max_by_key(|(scope, _)| scope.len())
            .map(|(_, default)| *default)
    }
}
