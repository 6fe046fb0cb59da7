pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod xml;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::DiscoveryConfig;
pub use crate::core::{checker::BoundaryChecker, checker::CheckReport, registry::BoundaryRegistry};
pub use domain::boundary::{Boundary, FieldSpec, Tag, TypeSpec, BOUNDARY};
pub use utils::constraint::{ConstraintViolations, Validate};
pub use utils::error::{NullboundError, Result};
