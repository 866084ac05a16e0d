//! Auto-naming of resource `name` fields

use serde::Serialize;

use crate::mapping::{MappingTable, ResourceInfo, SchemaInfo};
use crate::upstream::UpstreamSchema;

/// Field that receives a generated default
pub const NAME_FIELD: &str = "name";

/// How generated names are built
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoNameOptions {
    /// Maximum length of a generated name
    pub max_length: usize,
    /// Separator between the logical name and the random suffix
    pub separator: String,
}

impl AutoNameOptions {
    pub fn new(max_length: usize, separator: impl Into<String>) -> Self {
        Self {
            max_length,
            separator: separator.into(),
        }
    }
}

/// Attach `options` to the `name` field of every resource whose upstream
/// schema has an input (optional or required) `name` attribute, whatever
/// its type.
///
/// Resources that already override `name` are left alone. Returns the number
/// of resources updated.
pub fn apply(
    resources: &mut MappingTable<ResourceInfo>,
    upstream: &UpstreamSchema,
    options: &AutoNameOptions,
) -> usize {
    let mut updated = 0;
    for (identifier, schema) in &upstream.resource_schemas {
        let Some(attr) = schema.block.attributes.get(NAME_FIELD) else {
            continue;
        };
        if !attr.is_input() {
            continue;
        }
        let Some(info) = resources.get_mut(identifier) else {
            continue;
        };
        if info.fields.contains_key(NAME_FIELD) {
            continue;
        }
        info.fields.insert(
            NAME_FIELD.to_string(),
            SchemaInfo {
                auto_name: Some(options.clone()),
            },
        );
        updated += 1;
    }
    log::debug!("auto-naming applied to {} resources", updated);
    updated
}
