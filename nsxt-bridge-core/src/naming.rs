//! Case conversion from Terraform identifiers to token components
//!
//! Terraform uses prefixed snake_case (e.g., `nsxt_logical_switch`)
//! Bridge tokens use PascalCase entity names (e.g., `LogicalSwitch`)
//!
//! The provider prefix is stripped before conversion: everything up to and
//! including the first `_` is the namespace, not part of the entity name.

use heck::ToUpperCamelCase;

use crate::error::{MappingError, MappingResult};

/// Separator between words in a Terraform identifier
pub const SEPARATOR: char = '_';

/// Convert snake_case to PascalCase
/// e.g., "ip_block_subnet" -> "IpBlockSubnet"
///
/// Empty segments are dropped, so consecutive separators collapse. Only the
/// first character of a segment changes: "l4" -> "L4", "IDs" -> "IDs".
/// Segments starting with a digit pass through unchanged.
pub fn to_pascal_case(s: &str) -> String {
    s.split(SEPARATOR).map(capitalize_first).collect()
}

/// Capitalize first letter of a string
/// e.g., "switch" -> "Switch"
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase first letter of a string
/// e.g., "LogicalSwitch" -> "logicalSwitch"
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Strip the provider prefix from an identifier and convert the rest
/// e.g., "nsxt_logical_switch" -> "LogicalSwitch"
pub fn convert_name(identifier: &str) -> MappingResult<String> {
    let rest = match identifier.find(SEPARATOR) {
        Some(idx) if idx > 0 && idx < identifier.len() - 1 => &identifier[idx + 1..],
        _ => return Err(MappingError::malformed(identifier)),
    };

    let entity = to_pascal_case(rest);
    // "nsxt__" passes the bounds check but leaves nothing to name
    if entity.is_empty() {
        return Err(MappingError::malformed(identifier));
    }
    Ok(entity)
}

/// Default display name for a provider short name
/// e.g., "nsxt" -> "Nsxt"
pub fn display_name(name: &str) -> String {
    name.to_upper_camel_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("logical_switch"), "LogicalSwitch");
        assert_eq!(to_pascal_case("ip_block_subnet"), "IpBlockSubnet");
        assert_eq!(to_pascal_case("vm_tags"), "VmTags");
        assert_eq!(to_pascal_case("status"), "Status");
    }

    #[test]
    fn test_to_pascal_case_digits() {
        assert_eq!(to_pascal_case("l4_port_set_ns_service"), "L4PortSetNsService");
        assert_eq!(to_pascal_case("logical_tier0_router"), "LogicalTier0Router");
        assert_eq!(to_pascal_case("dhcp_v4_static_binding"), "DhcpV4StaticBinding");
        assert_eq!(to_pascal_case("ipv6_dad_profile"), "Ipv6DadProfile");
        assert_eq!(to_pascal_case("route_42"), "Route42");
        assert_eq!(to_pascal_case("2fa_profile"), "2faProfile");
    }

    #[test]
    fn test_to_pascal_case_drops_empty_segments() {
        assert_eq!(to_pascal_case("ip__block"), "IpBlock");
        assert_eq!(to_pascal_case("_ip_block_"), "IpBlock");
        assert_eq!(to_pascal_case("a_b"), "AB");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_pascal_case_preserves_remaining_case() {
        assert_eq!(to_pascal_case("vm_IDs"), "VmIDs");
        assert_eq!(to_pascal_case("lb_hTTP_monitor"), "LbHTTPMonitor");
    }

    #[test]
    fn test_convert_name() {
        assert_eq!(convert_name("nsxt_logical_switch").unwrap(), "LogicalSwitch");
        assert_eq!(convert_name("nsxt_ip_block_subnet").unwrap(), "IpBlockSubnet");
        assert_eq!(
            convert_name("nsxt_l4_port_set_ns_service").unwrap(),
            "L4PortSetNsService"
        );
        assert_eq!(convert_name("x_y").unwrap(), "Y");
    }

    #[test]
    fn test_convert_name_is_deterministic() {
        let first = convert_name("nsxt_policy_tier1_gateway").unwrap();
        let second = convert_name("nsxt_policy_tier1_gateway").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_convert_name_rejects_missing_separator() {
        assert_eq!(
            convert_name("nsxt"),
            Err(MappingError::malformed("nsxt"))
        );
        assert!(convert_name("").is_err());
    }

    #[test]
    fn test_convert_name_rejects_empty_prefix() {
        assert_eq!(convert_name("_foo"), Err(MappingError::malformed("_foo")));
        assert!(convert_name("_").is_err());
    }

    #[test]
    fn test_convert_name_rejects_empty_suffix() {
        assert_eq!(convert_name("nsxt_"), Err(MappingError::malformed("nsxt_")));
    }

    #[test]
    fn test_convert_name_rejects_only_separators_after_prefix() {
        assert_eq!(
            convert_name("nsxt__"),
            Err(MappingError::malformed("nsxt__"))
        );
    }

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("LogicalSwitch"), "logicalSwitch");
        assert_eq!(lower_first("L4PortSetNsService"), "l4PortSetNsService");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("nsxt"), "Nsxt");
    }
}
