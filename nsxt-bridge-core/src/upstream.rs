//! Upstream Terraform provider schema
//!
//! Reads the JSON emitted by `terraform providers schema -json` and compares
//! it against the mapping tables of a provider descriptor.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::provider_info::ProviderInfo;

/// Errors that can occur when loading an upstream schema
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Failed to read schema file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse schema: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Provider '{0}' not found in schema")]
    ProviderNotFound(String),
}

/// Top-level document of `terraform providers schema -json`
#[derive(Debug, Deserialize)]
struct SchemaDocument {
    #[serde(default)]
    provider_schemas: BTreeMap<String, UpstreamSchema>,
}

/// Schemas exported by a single upstream provider
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamSchema {
    #[serde(default)]
    pub resource_schemas: BTreeMap<String, EntitySchema>,
    #[serde(default)]
    pub data_source_schemas: BTreeMap<String, EntitySchema>,
}

/// Schema of one resource or data source
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntitySchema {
    #[serde(default)]
    pub block: Block,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub attributes: BTreeMap<String, Attribute>,
}

/// Attribute of a block
///
/// `attr_type` is kept as raw JSON because Terraform encodes collection
/// types as nested arrays (e.g., `["list", "string"]`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Attribute {
    #[serde(rename = "type", default)]
    pub attr_type: serde_json::Value,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub computed: bool,
}

impl Attribute {
    /// Settable by the user (optional or required)
    pub fn is_input(&self) -> bool {
        self.optional || self.required
    }
}

impl UpstreamSchema {
    /// Parse a schema document and pick the provider named `name`
    ///
    /// Provider addresses look like `registry.terraform.io/vmware/nsxt`; the
    /// last path component is matched. A document holding exactly one
    /// provider is accepted regardless of its address.
    pub fn from_json(json: &str, name: &str) -> Result<Self, SchemaError> {
        let mut doc: SchemaDocument = serde_json::from_str(json)?;

        let address = doc
            .provider_schemas
            .keys()
            .find(|addr| addr.rsplit('/').next() == Some(name))
            .cloned();

        match address {
            Some(addr) => Ok(doc.provider_schemas.remove(&addr).unwrap_or_default()),
            None if doc.provider_schemas.len() == 1 => doc
                .provider_schemas
                .into_values()
                .next()
                .ok_or_else(|| SchemaError::ProviderNotFound(name.to_string())),
            None => Err(SchemaError::ProviderNotFound(name.to_string())),
        }
    }

    pub fn from_file(path: &Path, name: &str) -> Result<Self, SchemaError> {
        let json = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json, name)
    }
}

/// Differences between a descriptor's tables and the upstream schema
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageReport {
    /// Upstream resources with no mapping
    pub unmapped_resources: Vec<String>,
    /// Upstream data sources with no mapping
    pub unmapped_data_sources: Vec<String>,
    /// Mapped resources the upstream provider does not define
    pub unknown_resources: Vec<String>,
    /// Mapped data sources the upstream provider does not define
    pub unknown_data_sources: Vec<String>,
}

impl CoverageReport {
    pub fn compute(info: &ProviderInfo, upstream: &UpstreamSchema) -> Self {
        let unmapped_resources = upstream
            .resource_schemas
            .keys()
            .filter(|id| !info.resources().contains(id))
            .cloned()
            .collect();
        let unmapped_data_sources = upstream
            .data_source_schemas
            .keys()
            .filter(|id| !info.data_sources().contains(id))
            .cloned()
            .collect();
        let unknown_resources = info
            .resources()
            .identifiers()
            .filter(|id| !upstream.resource_schemas.contains_key(*id))
            .map(String::from)
            .collect();
        let unknown_data_sources = info
            .data_sources()
            .identifiers()
            .filter(|id| !upstream.data_source_schemas.contains_key(*id))
            .map(String::from)
            .collect();

        let report = Self {
            unmapped_resources,
            unmapped_data_sources,
            unknown_resources,
            unknown_data_sources,
        };
        for id in report
            .unmapped_resources
            .iter()
            .chain(&report.unmapped_data_sources)
        {
            log::warn!("{} has no token mapping", id);
        }
        report
    }

    pub fn is_complete(&self) -> bool {
        self.unmapped_resources.is_empty()
            && self.unmapped_data_sources.is_empty()
            && self.unknown_resources.is_empty()
            && self.unknown_data_sources.is_empty()
    }
}
