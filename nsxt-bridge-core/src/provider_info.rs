//! Provider descriptor handed to the bridging framework
//!
//! A [`ProviderInfo`] bundles the mapping tables with package metadata and
//! per-language packaging options. It is assembled once at startup through
//! [`ProviderInfoBuilder`] and serialized as JSON.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::autonaming::{self, AutoNameOptions};
use crate::config::{AcceptAll, ConfigError, ConfigVars, PreConfigure};
use crate::error::MappingResult;
use crate::mapping::{DataSourceInfo, MappingTable, ResourceInfo, SchemaInfo};
use crate::naming::display_name;
use crate::token::{DEFAULT_MODULE, Token};
use crate::upstream::UpstreamSchema;

/// Publisher used when none is set on the builder
pub const DEFAULT_PUBLISHER: &str = "Pulumi";

/// Node.js package options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JavaScriptInfo {
    pub package_name: String,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
}

/// Python package options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PythonInfo {
    pub package_name: String,
    pub requires: BTreeMap<String, String>,
}

/// Go module options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GolangInfo {
    pub import_base_path: String,
    pub generate_resource_container_types: bool,
}

/// .NET package options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CSharpInfo {
    pub root_namespace: String,
    pub package_references: BTreeMap<String, String>,
}

/// Java package options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JavaInfo {
    pub base_package: String,
}

/// Fully populated provider descriptor
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfo {
    pub name: String,
    pub display_name: String,
    pub publisher: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_download_url: Option<String>,
    pub description: String,
    pub keywords: Vec<String>,
    pub license: String,
    pub homepage: String,
    pub repository: String,
    pub version: String,
    pub github_org: String,
    pub config: BTreeMap<String, SchemaInfo>,
    resources: MappingTable<ResourceInfo>,
    data_sources: MappingTable<DataSourceInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub javascript: Option<JavaScriptInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python: Option<PythonInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub golang: Option<GolangInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csharp: Option<CSharpInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java: Option<JavaInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autonaming: Option<AutoNameOptions>,
    #[serde(skip)]
    pub pre_configure: Arc<dyn PreConfigure>,
}

impl ProviderInfo {
    pub fn builder(name: impl Into<String>) -> ProviderInfoBuilder {
        ProviderInfoBuilder::new(name)
    }

    pub fn resources(&self) -> &MappingTable<ResourceInfo> {
        &self.resources
    }

    pub fn data_sources(&self) -> &MappingTable<DataSourceInfo> {
        &self.data_sources
    }

    pub fn resource_token(&self, identifier: &str) -> Option<&Token> {
        self.resources.get(identifier).map(|info| &info.tok)
    }

    pub fn data_source_token(&self, identifier: &str) -> Option<&Token> {
        self.data_sources.get(identifier).map(|info| &info.tok)
    }

    /// Record auto-naming options for resource `name` fields
    ///
    /// Options take effect once [`ProviderInfo::apply_autonaming`] is called
    /// with the upstream schema.
    pub fn set_autonaming(&mut self, max_length: usize, separator: impl Into<String>) {
        self.autonaming = Some(AutoNameOptions::new(max_length, separator));
    }

    /// Attach the recorded auto-naming options to resources that have a
    /// settable `name` attribute upstream. Returns the number updated.
    pub fn apply_autonaming(&mut self, upstream: &UpstreamSchema) -> usize {
        match &self.autonaming {
            Some(options) => autonaming::apply(&mut self.resources, upstream, options),
            None => 0,
        }
    }

    /// Run the configured pre-configure hook
    pub fn pre_configure(&self, vars: &ConfigVars) -> Result<(), ConfigError> {
        self.pre_configure.pre_configure(vars)
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Builder for [`ProviderInfo`]
///
/// Tables are only mapped in [`ProviderInfoBuilder::build`], so a malformed
/// identifier surfaces there.
#[derive(Debug)]
pub struct ProviderInfoBuilder {
    name: String,
    display_name: Option<String>,
    publisher: String,
    logo_url: Option<String>,
    plugin_download_url: Option<String>,
    description: String,
    keywords: Vec<String>,
    license: String,
    homepage: String,
    repository: String,
    version: String,
    github_org: String,
    module: String,
    config: BTreeMap<String, SchemaInfo>,
    resources: Vec<String>,
    data_sources: Vec<String>,
    javascript: Option<JavaScriptInfo>,
    python: Option<PythonInfo>,
    golang: Option<GolangInfo>,
    csharp: Option<CSharpInfo>,
    java: Option<JavaInfo>,
    autonaming: Option<AutoNameOptions>,
    pre_configure: Arc<dyn PreConfigure>,
}

impl ProviderInfoBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            publisher: DEFAULT_PUBLISHER.to_string(),
            logo_url: None,
            plugin_download_url: None,
            description: String::new(),
            keywords: Vec::new(),
            license: String::new(),
            homepage: String::new(),
            repository: String::new(),
            version: String::new(),
            github_org: String::new(),
            module: DEFAULT_MODULE.to_string(),
            config: BTreeMap::new(),
            resources: Vec::new(),
            data_sources: Vec::new(),
            javascript: None,
            python: None,
            golang: None,
            csharp: None,
            java: None,
            autonaming: None,
            pre_configure: Arc::new(AcceptAll),
        }
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = publisher.into();
        self
    }

    pub fn logo_url(mut self, url: impl Into<String>) -> Self {
        self.logo_url = Some(url.into());
        self
    }

    pub fn plugin_download_url(mut self, url: impl Into<String>) -> Self {
        self.plugin_download_url = Some(url.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    pub fn homepage(mut self, homepage: impl Into<String>) -> Self {
        self.homepage = homepage.into();
        self
    }

    pub fn repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = repository.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn github_org(mut self, org: impl Into<String>) -> Self {
        self.github_org = org.into();
        self
    }

    /// Module that every token is placed in (default: `index`)
    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    pub fn config(mut self, key: impl Into<String>, info: SchemaInfo) -> Self {
        self.config.insert(key.into(), info);
        self
    }

    /// Terraform resource identifiers, in table order
    pub fn resources(mut self, identifiers: &[&str]) -> Self {
        self.resources = identifiers.iter().map(|id| id.to_string()).collect();
        self
    }

    /// Terraform data source identifiers, in table order
    pub fn data_sources(mut self, identifiers: &[&str]) -> Self {
        self.data_sources = identifiers.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn javascript(mut self, info: JavaScriptInfo) -> Self {
        self.javascript = Some(info);
        self
    }

    pub fn python(mut self, info: PythonInfo) -> Self {
        self.python = Some(info);
        self
    }

    pub fn golang(mut self, info: GolangInfo) -> Self {
        self.golang = Some(info);
        self
    }

    pub fn csharp(mut self, info: CSharpInfo) -> Self {
        self.csharp = Some(info);
        self
    }

    pub fn java(mut self, info: JavaInfo) -> Self {
        self.java = Some(info);
        self
    }

    pub fn autonaming(mut self, max_length: usize, separator: impl Into<String>) -> Self {
        self.autonaming = Some(AutoNameOptions::new(max_length, separator));
        self
    }

    pub fn pre_configure(mut self, hook: impl PreConfigure + 'static) -> Self {
        self.pre_configure = Arc::new(hook);
        self
    }

    /// Map both tables and assemble the descriptor
    pub fn build(self) -> MappingResult<ProviderInfo> {
        let resource_ids: Vec<&str> = self.resources.iter().map(String::as_str).collect();
        let data_source_ids: Vec<&str> = self.data_sources.iter().map(String::as_str).collect();
        let resources = MappingTable::resources(&self.name, &self.module, &resource_ids)?;
        let data_sources = MappingTable::data_sources(&self.name, &self.module, &data_source_ids)?;

        log::info!(
            "built {} provider descriptor: {} resources, {} data sources",
            self.name,
            resources.len(),
            data_sources.len()
        );

        Ok(ProviderInfo {
            display_name: self.display_name.unwrap_or_else(|| display_name(&self.name)),
            name: self.name,
            publisher: self.publisher,
            logo_url: self.logo_url,
            plugin_download_url: self.plugin_download_url,
            description: self.description,
            keywords: self.keywords,
            license: self.license,
            homepage: self.homepage,
            repository: self.repository,
            version: self.version,
            github_org: self.github_org,
            config: self.config,
            resources,
            data_sources,
            javascript: self.javascript,
            python: self.python,
            golang: self.golang,
            csharp: self.csharp,
            java: self.java,
            autonaming: self.autonaming,
            pre_configure: self.pre_configure,
        })
    }
}
