//! Provider version helpers for Go module paths

use crate::error::{MappingError, MappingResult};

/// Major version suffix for a Go module path
///
/// Go modules at major version 0 or 1 carry no suffix; later versions are
/// imported under `/vN`. Accepts a leading `v` and partial versions such as
/// `2` or `2.1`.
pub fn module_major_version(version: &str) -> MappingResult<String> {
    let trimmed = version.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
    let major = trimmed
        .split(['.', '-', '+'])
        .next()
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<u64>().ok())
        .ok_or_else(|| MappingError::invalid_version(version))?;

    // Remaining core components must be numeric too
    let core = trimmed.split(['-', '+']).next().unwrap_or_default();
    if core.split('.').count() > 3 || core.split('.').any(|p| p.parse::<u64>().is_err()) {
        return Err(MappingError::invalid_version(version));
    }

    if major > 1 {
        Ok(format!("v{}", major))
    } else {
        Ok(String::new())
    }
}

/// Import base path of the generated Go SDK
/// e.g., ("SCC-Hyperscale-fr", "nsxt", "2.0.0") ->
/// "github.com/SCC-Hyperscale-fr/pulumi-nsxt/sdk/v2/go/nsxt"
pub fn go_import_base_path(owner: &str, name: &str, version: &str) -> MappingResult<String> {
    let root = format!("github.com/{}/pulumi-{}/sdk/", owner, name);
    let major = module_major_version(version)?;
    Ok(join_path(&[&root, &major, "go", name]))
}

/// Join path components with `/`, skipping empty ones
fn join_path(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim_matches('/'))
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_major_version() {
        assert_eq!(module_major_version("0.1.0").unwrap(), "");
        assert_eq!(module_major_version("1.9.3").unwrap(), "");
        assert_eq!(module_major_version("2.0.0").unwrap(), "v2");
        assert_eq!(module_major_version("v3.4.5").unwrap(), "v3");
        assert_eq!(module_major_version("12").unwrap(), "v12");
        assert_eq!(module_major_version("4.1").unwrap(), "v4");
        assert_eq!(module_major_version("2.0.0-alpha.1+build5").unwrap(), "v2");
    }

    #[test]
    fn test_module_major_version_invalid() {
        for version in ["", "v", "banana", "x.1.0", "1.a.0", "1.2.3.4"] {
            assert_eq!(
                module_major_version(version),
                Err(MappingError::invalid_version(version)),
                "version {:?}",
                version
            );
        }
    }

    #[test]
    fn test_go_import_base_path() {
        assert_eq!(
            go_import_base_path("SCC-Hyperscale-fr", "nsxt", "0.1.0").unwrap(),
            "github.com/SCC-Hyperscale-fr/pulumi-nsxt/sdk/go/nsxt"
        );
        assert_eq!(
            go_import_base_path("SCC-Hyperscale-fr", "nsxt", "2.3.0").unwrap(),
            "github.com/SCC-Hyperscale-fr/pulumi-nsxt/sdk/v2/go/nsxt"
        );
    }
}
