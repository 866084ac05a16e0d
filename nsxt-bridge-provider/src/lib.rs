//! nsxt-bridge NSX-T Provider
//!
//! Descriptor for bridging the VMware NSX-T Terraform provider.
//!
//! ## Module Structure
//!
//! - `resources` - Terraform resource identifiers
//! - `data_sources` - Terraform data source identifiers

pub mod data_sources;
pub mod resources;

use std::collections::BTreeMap;

use nsxt_bridge_core::config::AcceptAll;
use nsxt_bridge_core::provider_info::{
    CSharpInfo, GolangInfo, JavaInfo, JavaScriptInfo, PythonInfo,
};
use nsxt_bridge_core::version::go_import_base_path;
use nsxt_bridge_core::{MappingResult, ProviderInfo};

pub use data_sources::DATA_SOURCES;
pub use resources::RESOURCES;

/// Provider short name and token namespace
pub const PROVIDER_NAME: &str = "nsxt";

/// Owner of the bridged package repository
pub const PUBLISHER: &str = "SCC-Hyperscale-fr";

/// Organization publishing the upstream Terraform provider
pub const UPSTREAM_ORG: &str = "vmware";

/// Version stamped into the descriptor unless overridden
///
/// Release builds set `NSXT_PROVIDER_VERSION`; otherwise the crate version
/// is used.
pub const DEFAULT_VERSION: &str = match option_env!("NSXT_PROVIDER_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Maximum length of auto-generated resource names
pub const AUTONAME_MAX_LENGTH: usize = 255;

/// Separator used in auto-generated resource names
pub const AUTONAME_SEPARATOR: &str = "-";

fn string_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Build the NSX-T provider descriptor for `version`
pub fn provider_info(version: &str) -> MappingResult<ProviderInfo> {
    let repository = format!("https://github.com/{}/pulumi-{}", PUBLISHER, PROVIDER_NAME);

    ProviderInfo::builder(PROVIDER_NAME)
        .display_name("Nsxt")
        .publisher(PUBLISHER)
        .logo_url(format!(
            "https://raw.githubusercontent.com/{}/pulumi-{}/main/docs/{}.png",
            PUBLISHER, PROVIDER_NAME, PROVIDER_NAME
        ))
        .plugin_download_url(format!(
            "github://api.github.com/{}/pulumi-{}",
            PUBLISHER, PROVIDER_NAME
        ))
        .description("A Pulumi package for creating and managing Nsxt resources")
        .keywords(&["pulumi", PROVIDER_NAME, "category/network"])
        .license("Apache-2.0")
        .homepage(repository.clone())
        .repository(repository)
        .version(version)
        .github_org(UPSTREAM_ORG)
        .resources(RESOURCES)
        .data_sources(DATA_SOURCES)
        .javascript(JavaScriptInfo {
            package_name: format!("@{}/{}", PUBLISHER, PROVIDER_NAME),
            dependencies: string_map(&[("@pulumi/pulumi", "^3.0.0")]),
            dev_dependencies: string_map(&[("@types/node", "^10.0.0"), ("@types/mime", "^2.0.0")]),
        })
        .python(PythonInfo {
            package_name: format!("hyperscale_pulumi_{}", PROVIDER_NAME),
            requires: string_map(&[("pulumi", ">=3.0.0,<4.0.0")]),
        })
        .golang(GolangInfo {
            import_base_path: go_import_base_path(PUBLISHER, PROVIDER_NAME, version)?,
            generate_resource_container_types: true,
        })
        .csharp(CSharpInfo {
            root_namespace: PUBLISHER.to_string(),
            package_references: string_map(&[("Pulumi", "3.*")]),
        })
        .java(JavaInfo {
            base_package: "com.hyperscale".to_string(),
        })
        .autonaming(AUTONAME_MAX_LENGTH, AUTONAME_SEPARATOR)
        .pre_configure(AcceptAll)
        .build()
}
