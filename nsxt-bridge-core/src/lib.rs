//! nsxt-bridge Core
//!
//! Maps Terraform resource and data source identifiers onto tokens consumed
//! by an infrastructure-as-code bridging framework, and assembles the
//! provider descriptor that carries those mappings.
//!
//! ## Module Structure
//!
//! - `naming` - snake_case identifier to PascalCase entity conversion
//! - `token` - namespaced tokens for resources and data sources
//! - `mapping` - insertion-ordered mapping tables
//! - `provider_info` - the provider descriptor and its builder
//! - `autonaming` - generated defaults for resource `name` fields
//! - `upstream` - Terraform schema dumps and coverage reports
//! - `version` - Go module path helpers
//! - `config` - pre-configure hooks

pub mod autonaming;
pub mod config;
pub mod error;
pub mod mapping;
pub mod naming;
pub mod provider_info;
pub mod token;
pub mod upstream;
pub mod version;

// Re-export main types
pub use error::{MappingError, MappingResult};
pub use mapping::{DataSourceInfo, MappingTable, ResourceInfo, SchemaInfo};
pub use provider_info::{ProviderInfo, ProviderInfoBuilder};
pub use token::{Token, TokenKind};
pub use upstream::{CoverageReport, SchemaError, UpstreamSchema};
