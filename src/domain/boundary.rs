//! The boundary capability and per-field tag metadata.
//!
//! Data objects at the edges of the system have their fields filled with
//! input data at runtime (deserialization, reflection-style binding), so the
//! values cannot be verified at compile time to satisfy nullability
//! expectations. A type opts into the capability by implementing
//! [`Boundary`], and every one of its declared fields must then be tagged
//! either as runtime-required ([`Tag::NotNull`] or a synonym) or as
//! explicitly nullable ([`Tag::Nullable`]). The checker in
//! [`crate::core::checker`] audits that invariant.

use crate::domain::nullness::Nullness;

/// Name of the root boundary capability in a [`crate::BoundaryRegistry`].
pub const BOUNDARY: &str = "Boundary";

/// Field-level nullability tag.
///
/// `NotNull`, `NotEmpty` and `NotBlank` form the runtime-required family;
/// they correspond to constraints enforced by the validation pass after a
/// boundary object is populated. `Nullable` is the explicit opt-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    NotNull,
    NotEmpty,
    NotBlank,
    Nullable,
}

impl Tag {
    /// True for the runtime-required family.
    pub fn requires_value(self) -> bool {
        !matches!(self, Tag::Nullable)
    }

    pub fn nullness(self) -> Nullness {
        if self.requires_value() {
            Nullness::NonNull
        } else {
            Nullness::Nullable
        }
    }
}

/// One directly declared field of a boundary type.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub tags: &'static [Tag],
}

impl FieldSpec {
    /// Membership in the runtime-required tag family.
    pub fn requires_value(&self) -> bool {
        self.tags.iter().any(|tag| tag.requires_value())
    }

    /// Membership in the nullable qualifier.
    pub fn allows_absent(&self) -> bool {
        self.tags.contains(&Tag::Nullable)
    }
}

/// Metadata record for one concrete type: where it lives, which capabilities
/// it declares directly, and its directly declared fields. Inherited fields
/// belong to the declaring type's record, not to this one.
#[derive(Debug, Clone)]
pub struct TypeSpec {
    pub name: &'static str,
    pub module_path: &'static str,
    pub implements: &'static [&'static str],
    pub fields: &'static [FieldSpec],
}

impl TypeSpec {
    pub fn full_name(&self) -> String {
        format!("{}::{}", self.module_path, self.name)
    }
}

/// Marker capability for boundary data types. Carries no behavior beyond
/// handing out the type's metadata record for registration.
pub trait Boundary {
    fn spec() -> TypeSpec;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_family_membership() {
        for tag in [Tag::NotNull, Tag::NotEmpty, Tag::NotBlank] {
            assert!(tag.requires_value());
            assert_eq!(tag.nullness(), Nullness::NonNull);
        }
        assert!(!Tag::Nullable.requires_value());
        assert_eq!(Tag::Nullable.nullness(), Nullness::Nullable);
    }

    #[test]
    fn test_field_spec_memberships_are_independent() {
        let required = FieldSpec {
            name: "id",
            tags: &[Tag::NotNull, Tag::NotEmpty],
        };
        assert!(required.requires_value());
        assert!(!required.allows_absent());

        let both = FieldSpec {
            name: "odd",
            tags: &[Tag::NotNull, Tag::Nullable],
        };
        assert!(both.requires_value());
        assert!(both.allows_absent());

        let untagged = FieldSpec {
            name: "plain",
            tags: &[],
        };
        assert!(!untagged.requires_value());
        assert!(!untagged.allows_absent());
    }
}
