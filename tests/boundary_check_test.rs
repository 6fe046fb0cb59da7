use nullbound::core::checker::ViolationKind;
use nullbound::xml;
use nullbound::{Boundary, BoundaryChecker, BoundaryRegistry, DiscoveryConfig, FieldSpec, Tag, TypeSpec, BOUNDARY};

mod fixtures {
    pub mod clean {
        use nullbound::{Boundary, FieldSpec, Tag, TypeSpec, BOUNDARY};

        pub struct Order;

        impl Boundary for Order {
            fn spec() -> TypeSpec {
                TypeSpec {
                    name: "Order",
                    module_path: module_path!(),
                    implements: &[BOUNDARY],
                    fields: &[
                        FieldSpec {
                            name: "order_id",
                            tags: &[Tag::NotBlank],
                        },
                        FieldSpec {
                            name: "note",
                            tags: &[Tag::Nullable],
                        },
                    ],
                }
            }
        }
    }

    pub mod dirty {
        use nullbound::{Boundary, FieldSpec, Tag, TypeSpec, BOUNDARY};

        pub struct MixedBag;

        impl Boundary for MixedBag {
            fn spec() -> TypeSpec {
                TypeSpec {
                    name: "MixedBag",
                    module_path: module_path!(),
                    implements: &[BOUNDARY],
                    fields: &[
                        FieldSpec {
                            name: "good",
                            tags: &[Tag::NotNull],
                        },
                        FieldSpec {
                            name: "both",
                            tags: &[Tag::NotNull, Tag::Nullable],
                        },
                        FieldSpec {
                            name: "neither",
                            tags: &[],
                        },
                    ],
                }
            }
        }
    }
}

struct Payload;

impl Boundary for Payload {
    fn spec() -> TypeSpec {
        TypeSpec {
            name: "Payload",
            module_path: module_path!(),
            implements: &["Envelope"],
            fields: &[FieldSpec {
                name: "body",
                tags: &[Tag::NotNull],
            }],
        }
    }
}

fn fixture_registry() -> BoundaryRegistry {
    let mut registry = BoundaryRegistry::new();
    registry.capability(BOUNDARY, &[]);
    registry.register::<fixtures::clean::Order>();
    registry.register::<fixtures::dirty::MixedBag>();
    registry
}

fn scan_all() -> DiscoveryConfig {
    DiscoveryConfig::for_scope("boundary_check_test")
}

#[test]
fn test_xml_registry_is_fully_tagged() {
    let registry = xml::xml_registry();
    let checker = BoundaryChecker::new(&registry, DiscoveryConfig::for_scope("nullbound"));
    let report = checker.check();

    assert!(report.is_clean(), "unexpected violations: {}", report);
    assert_eq!(report.checked_types(), 2);
    assert_eq!(report.checked_fields(), 8);
}

#[test]
fn test_contradictory_and_ambiguous_fields_are_flagged() {
    let registry = fixture_registry();
    let report = BoundaryChecker::new(&registry, scan_all()).check();

    assert_eq!(report.violations().len(), 2);

    let both = &report.violations()[0];
    assert_eq!(both.type_name, "boundary_check_test::fixtures::dirty::MixedBag");
    assert_eq!(both.field, "both");
    assert_eq!(both.kind, ViolationKind::Contradictory);

    let neither = &report.violations()[1];
    assert_eq!(neither.field, "neither");
    assert_eq!(neither.kind, ViolationKind::Ambiguous);
}

#[test]
fn test_all_fields_are_checked_before_reporting() {
    let registry = fixture_registry();
    let report = BoundaryChecker::new(&registry, scan_all()).check();

    // Both offending fields of MixedBag show up in a single pass, and the
    // clean Order fields are still counted.
    assert_eq!(report.checked_types(), 2);
    assert_eq!(report.checked_fields(), 5);
    assert_eq!(report.violations().len(), 2);
}

#[test]
fn test_excluded_scope_is_skipped() {
    let registry = fixture_registry();
    let mut config = scan_all();
    config
        .excluded_scopes
        .push("boundary_check_test::fixtures::dirty".to_string());

    let report = BoundaryChecker::new(&registry, config).check();
    assert!(report.is_clean());
    assert_eq!(report.checked_types(), 1);
}

#[test]
fn test_excluded_type_is_skipped() {
    let registry = fixture_registry();
    let mut config = scan_all();
    config
        .excluded_types
        .push("boundary_check_test::fixtures::dirty::MixedBag".to_string());

    let report = BoundaryChecker::new(&registry, config).check();
    assert!(report.is_clean());
    assert_eq!(report.checked_types(), 1);
}

#[test]
fn test_scope_prefix_limits_discovery() {
    let registry = fixture_registry();
    let config = DiscoveryConfig::for_scope("boundary_check_test::fixtures::clean");

    let report = BoundaryChecker::new(&registry, config).check();
    assert!(report.is_clean());
    assert_eq!(report.checked_types(), 1);
    assert_eq!(report.checked_fields(), 2);
}

#[test]
fn test_expand_supertypes_controls_inherited_membership() {
    let mut registry = BoundaryRegistry::new();
    registry.capability(BOUNDARY, &[]);
    registry.capability("Envelope", &[BOUNDARY]);
    registry.register::<Payload>();

    let expanded = BoundaryChecker::new(&registry, scan_all()).check();
    assert_eq!(expanded.checked_types(), 1);

    let mut direct_only = scan_all();
    direct_only.expand_supertypes = false;
    let direct = BoundaryChecker::new(&registry, direct_only).check();
    assert_eq!(direct.checked_types(), 0);
}

#[test]
fn test_report_serializes_to_json() {
    let registry = fixture_registry();
    let report = BoundaryChecker::new(&registry, scan_all()).check();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["violations"].as_array().unwrap().len(), 2);
    assert_eq!(json["violations"][0]["kind"], "contradictory");
    assert_eq!(json["checked_fields"], 5);
}
