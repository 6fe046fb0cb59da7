#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{NullboundError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Discovery options for a checker pass: which module scopes to scan, what
/// to leave out, and whether capability membership inherited through the
/// capability graph counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    pub scopes: Vec<String>,

    #[serde(default)]
    pub excluded_scopes: Vec<String>,

    #[serde(default)]
    pub excluded_types: Vec<String>,

    #[serde(default = "default_expand_supertypes")]
    pub expand_supertypes: bool,
}

fn default_expand_supertypes() -> bool {
    true
}

impl DiscoveryConfig {
    pub fn for_scope(scope: impl Into<String>) -> Self {
        Self {
            scopes: vec![scope.into()],
            excluded_scopes: Vec::new(),
            excluded_types: Vec::new(),
            expand_supertypes: true,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NullboundError::IoError)?;
        toml::from_str(&content).map_err(|e| NullboundError::ConfigError {
            message: format!("failed to parse {}: {}", path.as_ref().display(), e),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.scopes.is_empty() {
            return Err(NullboundError::ConfigError {
                message: "at least one scope is required".to_string(),
            });
        }

        let prefixes = self
            .scopes
            .iter()
            .chain(&self.excluded_scopes)
            .chain(&self.excluded_types);
        for prefix in prefixes {
            if prefix.trim().is_empty() {
                return Err(NullboundError::ConfigError {
                    message: "scope and type prefixes cannot be blank".to_string(),
                });
            }
        }

        Ok(())
    }
}
