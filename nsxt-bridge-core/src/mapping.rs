//! Mapping tables from Terraform identifiers to bridge tokens
//!
//! Tables keep insertion order so the emitted descriptor lists entries in the
//! same order as the source tables. Entries are fixed once a table is built;
//! only per-field overrides (see [`crate::autonaming`]) are added later.

use std::collections::{BTreeMap, HashSet};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::autonaming::AutoNameOptions;
use crate::error::{MappingError, MappingResult};
use crate::token::{Token, make_data_source, make_resource};

/// Per-field override attached to a resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaInfo {
    /// Generate a default value for this field from the resource name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_name: Option<AutoNameOptions>,
}

/// Mapping for a single resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceInfo {
    pub tok: Token,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, SchemaInfo>,
}

impl ResourceInfo {
    pub fn new(tok: Token) -> Self {
        Self {
            tok,
            fields: BTreeMap::new(),
        }
    }
}

/// Mapping for a single data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataSourceInfo {
    pub tok: Token,
}

/// Insertion-ordered table keyed by Terraform identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTable<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for MappingTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> MappingTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(identifier, info)` pairs, rejecting duplicates
    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, T)>,
    ) -> MappingResult<Self> {
        let mut seen = HashSet::new();
        let mut table = Self::new();
        for (identifier, info) in entries {
            if !seen.insert(identifier.clone()) {
                return Err(MappingError::duplicate(identifier));
            }
            table.entries.push((identifier, info));
        }
        Ok(table)
    }

    pub fn get(&self, identifier: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(key, _)| key == identifier)
            .map(|(_, info)| info)
    }

    pub(crate) fn get_mut(&mut self, identifier: &str) -> Option<&mut T> {
        self.entries
            .iter_mut()
            .find(|(key, _)| key == identifier)
            .map(|(_, info)| info)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.get(identifier).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(key, info)| (key.as_str(), info))
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MappingTable<ResourceInfo> {
    /// Map every identifier to a resource token in `module`
    pub fn resources(package: &str, module: &str, identifiers: &[&str]) -> MappingResult<Self> {
        let entries = identifiers
            .iter()
            .map(|id| {
                make_resource(package, module, id).map(|tok| (id.to_string(), ResourceInfo::new(tok)))
            })
            .collect::<MappingResult<Vec<_>>>()?;
        let table = Self::from_entries(entries)?;
        log::debug!("mapped {} resources into {}:{}", table.len(), package, module);
        Ok(table)
    }
}

impl MappingTable<DataSourceInfo> {
    /// Map every identifier to a data source token in `module`
    pub fn data_sources(package: &str, module: &str, identifiers: &[&str]) -> MappingResult<Self> {
        let entries = identifiers
            .iter()
            .map(|id| {
                make_data_source(package, module, id)
                    .map(|tok| (id.to_string(), DataSourceInfo { tok }))
            })
            .collect::<MappingResult<Vec<_>>>()?;
        let table = Self::from_entries(entries)?;
        log::debug!("mapped {} data sources into {}:{}", table.len(), package, module);
        Ok(table)
    }
}

impl<T: Serialize> Serialize for MappingTable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, info) in &self.entries {
            map.serialize_entry(key, info)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::DEFAULT_MODULE;

    #[test]
    fn test_resources_table() {
        let table = MappingTable::resources(
            "nsxt",
            DEFAULT_MODULE,
            &["nsxt_logical_switch", "nsxt_ip_block_subnet"],
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.get("nsxt_logical_switch").unwrap().tok.to_string(),
            "nsxt:index/logicalSwitch:LogicalSwitch"
        );
        assert!(table.get("nsxt_unknown").is_none());
    }

    #[test]
    fn test_data_sources_table() {
        let table =
            MappingTable::data_sources("nsxt", DEFAULT_MODULE, &["nsxt_policy_vm"]).unwrap();
        assert_eq!(table.get("nsxt_policy_vm").unwrap().tok.entity, "getPolicyVm");
    }

    #[test]
    fn test_table_keeps_insertion_order() {
        let ids = ["nsxt_zeta", "nsxt_alpha", "nsxt_mid"];
        let table = MappingTable::resources("nsxt", DEFAULT_MODULE, &ids).unwrap();
        let keys: Vec<&str> = table.identifiers().collect();
        assert_eq!(keys, ids);
    }

    #[test]
    fn test_table_rejects_duplicates() {
        let result = MappingTable::resources(
            "nsxt",
            DEFAULT_MODULE,
            &["nsxt_ip_set", "nsxt_ip_pool", "nsxt_ip_set"],
        );
        assert_eq!(result, Err(MappingError::duplicate("nsxt_ip_set")));
    }

    #[test]
    fn test_table_fails_on_malformed_entry() {
        let result =
            MappingTable::data_sources("nsxt", DEFAULT_MODULE, &["nsxt_ip_pool", "nsxt"]);
        assert_eq!(result, Err(MappingError::malformed("nsxt")));
    }

    #[test]
    fn test_table_serializes_in_order() {
        let table =
            MappingTable::resources("nsxt", DEFAULT_MODULE, &["nsxt_vm_tags", "nsxt_ip_set"])
                .unwrap();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(
            json,
            r#"{"nsxt_vm_tags":{"tok":"nsxt:index/vmTags:VmTags"},"nsxt_ip_set":{"tok":"nsxt:index/ipSet:IpSet"}}"#
        );
    }
}
