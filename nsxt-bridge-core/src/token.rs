//! Token - Namespaced names handed to the bridging framework
//!
//! A token is `<package>:<module>/<member>:<entity>`, where `member` is the
//! entity with its first letter lowercased:
//!
//! - resource `nsxt_logical_switch` -> `nsxt:index/logicalSwitch:LogicalSwitch`
//! - data source `nsxt_logical_switch` -> `nsxt:index/getLogicalSwitch:getLogicalSwitch`

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::MappingResult;
use crate::naming::{convert_name, lower_first};

/// Verb prepended to data source entity names
pub const DATA_SOURCE_VERB: &str = "get";

/// Default module for providers that do not split their tokens into modules
pub const DEFAULT_MODULE: &str = "index";

/// Kind of upstream entity a token was generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Resource,
    DataSource,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Resource => write!(f, "resource"),
            TokenKind::DataSource => write!(f, "data source"),
        }
    }
}

/// Namespace/module/entity triple
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub package: String,
    pub module: String,
    pub entity: String,
    pub kind: TokenKind,
}

impl Token {
    /// Token for an already-converted resource entity name
    pub fn resource(
        package: impl Into<String>,
        module: impl Into<String>,
        entity: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            module: module.into(),
            entity: entity.into(),
            kind: TokenKind::Resource,
        }
    }

    /// Token for an already-converted data source entity name (verb included)
    pub fn data_source(
        package: impl Into<String>,
        module: impl Into<String>,
        entity: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            module: module.into(),
            entity: entity.into(),
            kind: TokenKind::DataSource,
        }
    }

    /// Module component including the member, e.g. `index/logicalSwitch`
    pub fn module_member(&self) -> String {
        format!("{}/{}", self.module, lower_first(&self.entity))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.package, self.module_member(), self.entity)
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Build a resource token from a Terraform identifier
pub fn make_resource(package: &str, module: &str, identifier: &str) -> MappingResult<Token> {
    let entity = convert_name(identifier)?;
    Ok(Token::resource(package, module, entity))
}

/// Build a data source token from a Terraform identifier
pub fn make_data_source(package: &str, module: &str, identifier: &str) -> MappingResult<Token> {
    let entity = convert_name(identifier)?;
    Ok(Token::data_source(
        package,
        module,
        format!("{}{}", DATA_SOURCE_VERB, entity),
    ))
}
