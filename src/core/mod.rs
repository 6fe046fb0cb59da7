pub mod checker;
pub mod registry;

pub use crate::domain::boundary::{Boundary, FieldSpec, Tag, TypeSpec, BOUNDARY};
pub use crate::utils::error::Result;
pub use checker::{BoundaryChecker, CheckReport, Violation, ViolationKind};
pub use registry::BoundaryRegistry;
