use crate::config::DiscoveryConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "nullbound")]
#[command(about = "Audit boundary types for explicit nullability tagging")]
pub struct CliConfig {
    /// Module scope prefixes to scan
    #[arg(long = "scope", value_delimiter = ',')]
    pub scopes: Vec<String>,

    /// Module scope prefixes to skip
    #[arg(long = "excluded-scope", value_delimiter = ',')]
    pub excluded_scopes: Vec<String>,

    /// Fully qualified type names to skip
    #[arg(long = "excluded-type", value_delimiter = ',')]
    pub excluded_types: Vec<String>,

    /// Only count capabilities declared directly on a type
    #[arg(long)]
    pub no_expand_supertypes: bool,

    /// Load discovery options from a TOML file
    #[arg(long)]
    pub config: Option<String>,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Discovery options from the config file, with command-line arguments
    /// layered on top. Without either, the whole crate namespace is scanned.
    pub fn discovery(&self) -> Result<DiscoveryConfig> {
        let mut discovery = match &self.config {
            Some(path) => DiscoveryConfig::from_file(path)?,
            None => DiscoveryConfig::for_scope(env!("CARGO_PKG_NAME")),
        };

        if !self.scopes.is_empty() {
            discovery.scopes = self.scopes.clone();
        }
        discovery
            .excluded_scopes
            .extend(self.excluded_scopes.iter().cloned());
        discovery
            .excluded_types
            .extend(self.excluded_types.iter().cloned());
        if self.no_expand_supertypes {
            discovery.expand_supertypes = false;
        }

        Ok(discovery)
    }
}
