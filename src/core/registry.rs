//! Explicit registry of boundary types. Open-ended runtime type discovery is
//! not available here, so types are registered once at startup and the
//! capability graph (which marker extends which) is declared alongside them.
//! Lookup then answers the same question a classpath scan would: which
//! registered types carry a given capability.

use crate::domain::boundary::{Boundary, TypeSpec};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct BoundaryRegistry {
    /// Capability name to the capabilities it directly extends.
    extends: HashMap<&'static str, Vec<&'static str>>,
    types: Vec<TypeSpec>,
}

impl BoundaryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a capability and the capabilities it extends. The root
    /// capability is declared with an empty `extends` list.
    pub fn capability(&mut self, name: &'static str, extends: &'static [&'static str]) -> &mut Self {
        self.extends.entry(name).or_default().extend(extends);
        self
    }

    pub fn register<T: Boundary>(&mut self) -> &mut Self {
        self.types.push(T::spec());
        self
    }

    /// Registration order is an implementation detail; callers must not rely
    /// on the order of the returned slice.
    pub fn types(&self) -> &[TypeSpec] {
        &self.types
    }

    /// All registered types carrying `capability`: declared directly, or,
    /// when `expand_supertypes` is set, reachable through the capability
    /// graph from one of the type's direct declarations.
    pub fn subtypes_of(&self, capability: &str, expand_supertypes: bool) -> Vec<&TypeSpec> {
        self.types
            .iter()
            .filter(|spec| {
                spec.implements
                    .iter()
                    .any(|declared| self.reaches(declared, capability, expand_supertypes))
            })
            .collect()
    }

    fn reaches(&self, from: &str, to: &str, expand: bool) -> bool {
        if from == to {
            return true;
        }
        if !expand {
            return false;
        }

        let mut visited: Vec<&str> = vec![from];
        let mut stack: Vec<&str> = vec![from];
        while let Some(current) = stack.pop() {
            if let Some(parents) = self.extends.get(current) {
                for &parent in parents {
                    if parent == to {
                        return true;
                    }
                    if !visited.contains(&parent) {
                        visited.push(parent);
                        stack.push(parent);
                    }
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::boundary::{FieldSpec, Tag, BOUNDARY};

    struct Direct;
    impl Boundary for Direct {
        fn spec() -> TypeSpec {
            TypeSpec {
                name: "Direct",
                module_path: module_path!(),
                implements: &[BOUNDARY],
                fields: &[FieldSpec {
                    name: "value",
                    tags: &[Tag::NotNull],
                }],
            }
        }
    }

    struct Indirect;
    impl Boundary for Indirect {
        fn spec() -> TypeSpec {
            TypeSpec {
                name: "Indirect",
                module_path: module_path!(),
                implements: &["Payload"],
                fields: &[],
            }
        }
    }

    fn registry() -> BoundaryRegistry {
        let mut registry = BoundaryRegistry::new();
        registry.capability(BOUNDARY, &[]);
        registry.capability("Payload", &[BOUNDARY]);
        registry.register::<Direct>();
        registry.register::<Indirect>();
        registry
    }

    #[test]
    fn test_direct_declaration_is_always_found() {
        let registry = registry();
        let found = registry.subtypes_of(BOUNDARY, false);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Direct");
    }

    #[test]
    fn test_expanded_lookup_walks_capability_graph() {
        let registry = registry();
        let mut names: Vec<&str> = registry
            .subtypes_of(BOUNDARY, true)
            .into_iter()
            .map(|spec| spec.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["Direct", "Indirect"]);
    }

    #[test]
    fn test_unknown_capability_matches_nothing() {
        let registry = registry();
        assert!(registry.subtypes_of("Other", true).is_empty());
    }

    struct Cyclic;
    impl Boundary for Cyclic {
        fn spec() -> TypeSpec {
            TypeSpec {
                name: "Cyclic",
                module_path: module_path!(),
                implements: &["A"],
                fields: &[],
            }
        }
    }

    #[test]
    fn test_cyclic_capability_graph_terminates() {
        let mut registry = BoundaryRegistry::new();
        registry.capability("A", &["B"]);
        registry.capability("B", &["A"]);
        registry.register::<Cyclic>();

        assert!(registry.subtypes_of(BOUNDARY, true).is_empty());
        assert_eq!(registry.subtypes_of("B", true).len(), 1);
    }
}
