//! nsxt-tfgen
//!
//! Emits the NSX-T bridge provider descriptor and checks its mapping tables
//! against the upstream Terraform schema.
//!
//! Usage:
//!   # Write the descriptor consumed by the bridging framework
//!   nsxt-tfgen schema --output provider.json
//!
//!   # Same, with auto-named `name` fields taken from the upstream schema
//!   nsxt-tfgen schema --schema schema.json --output provider.json
//!
//!   # Compare against the upstream provider schema
//!   terraform providers schema -json > schema.json
//!   nsxt-tfgen check --schema schema.json

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use nsxt_bridge_core::{CoverageReport, ProviderInfo, UpstreamSchema};
use nsxt_bridge_provider::{DEFAULT_VERSION, PROVIDER_NAME, provider_info};

#[derive(Parser)]
#[command(name = "nsxt-tfgen")]
#[command(about = "Generate the NSX-T bridge provider descriptor", long_about = None)]
struct Cli {
    /// Provider version stamped into the descriptor
    ///
    /// Every subcommand builds the full descriptor, `tokens` included, so an
    /// invalid version makes any of them fail.
    #[arg(long, global = true, default_value = DEFAULT_VERSION)]
    provider_version: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the provider descriptor as JSON
    Schema {
        /// Output file (writes to stdout if not specified)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,

        /// Output of `terraform providers schema -json`; when given, resources
        /// with an input `name` attribute get auto-naming in the descriptor
        #[arg(long)]
        schema: Option<PathBuf>,
    },
    /// List identifier to token mappings
    Tokens {
        /// Which table to list
        #[arg(long, value_enum, default_value_t = TableKind::All)]
        kind: TableKind,
    },
    /// Check mapping coverage against a Terraform schema dump
    Check {
        /// Output of `terraform providers schema -json`
        #[arg(long)]
        schema: PathBuf,

        /// Also report which resources receive auto-named `name` fields
        #[arg(long)]
        autonaming: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TableKind {
    Resources,
    DataSources,
    All,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Schema {
            output,
            compact,
            schema,
        } => run_schema(
            &cli.provider_version,
            schema.as_deref(),
            output.as_deref(),
            compact,
        ),
        Commands::Tokens { kind } => run_tokens(&cli.provider_version, kind),
        Commands::Check { schema, autonaming } => {
            run_check(&cli.provider_version, &schema, autonaming)
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_info(version: &str) -> Result<ProviderInfo> {
    log::debug!("building descriptor for version {}", version);
    provider_info(version).context("Failed to build provider descriptor")
}

fn run_schema(
    version: &str,
    schema: Option<&Path>,
    output: Option<&Path>,
    compact: bool,
) -> Result<()> {
    let mut info = build_info(version)?;
    if let Some(path) = schema {
        let upstream = load_upstream(path)?;
        let updated = info.apply_autonaming(&upstream);
        log::info!("auto-named {} resources from {}", updated, path.display());
    }
    let json = info
        .to_json(!compact)
        .context("Failed to serialize provider descriptor")?;

    if let Some(path) = output {
        fs::write(path, format!("{}\n", json))
            .with_context(|| format!("Failed to write to: {}", path.display()))?;
        eprintln!("{} {}", "Generated:".green(), path.display());
    } else {
        println!("{}", json);
    }
    Ok(())
}

fn load_upstream(path: &Path) -> Result<UpstreamSchema> {
    UpstreamSchema::from_file(path, PROVIDER_NAME)
        .with_context(|| format!("Failed to load upstream schema: {}", path.display()))
}

fn run_tokens(version: &str, kind: TableKind) -> Result<()> {
    let info = build_info(version)?;
    let stdout = io::stdout();
    write_tokens(&info, kind, &mut stdout.lock())
}

fn write_tokens(info: &ProviderInfo, kind: TableKind, out: &mut impl Write) -> Result<()> {
    if matches!(kind, TableKind::Resources | TableKind::All) {
        for (id, res) in info.resources().iter() {
            writeln!(out, "{} -> {}", id, res.tok)?;
        }
    }
    if matches!(kind, TableKind::DataSources | TableKind::All) {
        for (id, ds) in info.data_sources().iter() {
            writeln!(out, "{} -> {}", id, ds.tok)?;
        }
    }
    Ok(())
}

fn run_check(version: &str, schema: &Path, autonaming: bool) -> Result<()> {
    let mut info = build_info(version)?;
    let upstream = load_upstream(schema)?;

    let stdout = io::stdout();
    let complete = write_check(&mut info, &upstream, autonaming, &mut stdout.lock())?;
    if !complete {
        anyhow::bail!("mapping tables do not match the upstream schema");
    }
    Ok(())
}

/// Print the coverage report; returns whether the tables are complete
fn write_check(
    info: &mut ProviderInfo,
    upstream: &UpstreamSchema,
    autonaming: bool,
    out: &mut impl Write,
) -> Result<bool> {
    let report = CoverageReport::compute(info, upstream);

    let sections = [
        ("Unmapped resources", &report.unmapped_resources),
        ("Unmapped data sources", &report.unmapped_data_sources),
        ("Unknown resources", &report.unknown_resources),
        ("Unknown data sources", &report.unknown_data_sources),
    ];
    for (title, ids) in sections {
        if ids.is_empty() {
            continue;
        }
        writeln!(out, "{} ({}):", title.yellow().bold(), ids.len())?;
        for id in ids {
            writeln!(out, "  {}", id)?;
        }
    }

    if autonaming {
        let updated = info.apply_autonaming(upstream);
        writeln!(out, "Auto-named resources: {}", updated)?;
    }

    if report.is_complete() {
        writeln!(
            out,
            "{}",
            format!(
                "All {} resources and {} data sources are mapped.",
                info.resources().len(),
                info.data_sources().len()
            )
            .green()
        )?;
    }
    Ok(report.is_complete())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream_for(info: &ProviderInfo) -> UpstreamSchema {
        let mut upstream = UpstreamSchema::default();
        for id in info.resources().identifiers() {
            upstream
                .resource_schemas
                .insert(id.to_string(), Default::default());
        }
        for id in info.data_sources().identifiers() {
            upstream
                .data_source_schemas
                .insert(id.to_string(), Default::default());
        }
        upstream
    }

    #[test]
    fn test_write_tokens_resources() {
        colored::control::set_override(false);
        let info = build_info("0.1.0").unwrap();
        let mut out = Vec::new();
        write_tokens(&info, TableKind::Resources, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), info.resources().len());
        assert_eq!(
            text.lines().next(),
            Some("nsxt_dhcp_relay_profile -> nsxt:index/dhcpRelayProfile:DhcpRelayProfile")
        );
        assert!(!text.contains(":get"));
    }

    #[test]
    fn test_write_tokens_all() {
        let info = build_info("0.1.0").unwrap();
        let mut out = Vec::new();
        write_tokens(&info, TableKind::All, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text.lines().count(),
            info.resources().len() + info.data_sources().len()
        );
        assert!(text.contains("nsxt_provider_info -> nsxt:index/getProviderInfo:getProviderInfo"));
    }

    #[test]
    fn test_write_check_complete() {
        colored::control::set_override(false);
        let mut info = build_info("0.1.0").unwrap();
        let upstream = upstream_for(&info);
        let mut out = Vec::new();

        let complete = write_check(&mut info, &upstream, false, &mut out).unwrap();

        assert!(complete);
        assert!(String::from_utf8(out).unwrap().contains("are mapped"));
    }

    #[test]
    fn test_write_check_reports_gaps() {
        colored::control::set_override(false);
        let mut info = build_info("0.1.0").unwrap();
        let mut upstream = upstream_for(&info);
        upstream.resource_schemas.remove("nsxt_ip_set");
        upstream
            .data_source_schemas
            .insert("nsxt_policy_new_thing".to_string(), Default::default());
        let mut out = Vec::new();

        let complete = write_check(&mut info, &upstream, false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(!complete);
        assert!(text.contains("Unmapped data sources (1):\n  nsxt_policy_new_thing"));
        assert!(text.contains("Unknown resources (1):\n  nsxt_ip_set"));
    }

    #[test]
    fn test_run_schema_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("provider.json");

        run_schema("1.2.0", None, Some(&path), true).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["version"], "1.2.0");
        assert_eq!(
            value["resources"]["nsxt_logical_switch"]["tok"],
            "nsxt:index/logicalSwitch:LogicalSwitch"
        );
        assert_eq!(
            value["golang"]["importBasePath"],
            "github.com/SCC-Hyperscale-fr/pulumi-nsxt/sdk/go/nsxt"
        );
    }

    #[test]
    fn test_run_schema_invalid_version() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_schema("not-a-version", None, Some(&dir.path().join("p.json")), false)
            .unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid provider version"));
    }

    #[test]
    fn test_run_schema_applies_autonaming() {
        let dir = tempfile::tempdir().unwrap();
        let schema_path = dir.path().join("schema.json");
        fs::write(
            &schema_path,
            r#"{"provider_schemas": {"registry.terraform.io/vmware/nsxt": {
                "resource_schemas": {
                    "nsxt_ip_set": {"block": {"attributes": {
                        "name": {"type": "string", "optional": true}
                    }}},
                    "nsxt_vm_tags": {"block": {"attributes": {
                        "name": {"type": "string", "computed": true}
                    }}}
                }
            }}}"#,
        )
        .unwrap();
        let path = dir.path().join("provider.json");

        run_schema("0.1.0", Some(&schema_path), Some(&path), false).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let auto_name = &value["resources"]["nsxt_ip_set"]["fields"]["name"]["autoName"];
        assert_eq!(auto_name["maxLength"], 255);
        assert_eq!(auto_name["separator"], "-");
        assert!(value["resources"]["nsxt_vm_tags"].get("fields").is_none());
        assert!(value["resources"]["nsxt_logical_switch"].get("fields").is_none());
    }

    #[test]
    fn test_run_schema_without_upstream_has_no_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("provider.json");

        run_schema("0.1.0", None, Some(&path), true).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(value["resources"]["nsxt_ip_set"].get("fields").is_none());
        assert_eq!(value["autonaming"]["maxLength"], 255);
    }

    #[test]
    fn test_run_schema_missing_upstream_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_schema("0.1.0", Some(&dir.path().join("missing.json")), None, false)
            .unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to load upstream schema"));
    }

    #[test]
    fn test_tokens_fails_on_invalid_version() {
        let err = run_tokens("not-a-version", TableKind::All).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid provider version"));
    }

    #[test]
    fn test_run_check_with_schema_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        fs::write(
            &path,
            r#"{"provider_schemas": {"registry.terraform.io/vmware/nsxt": {
                "resource_schemas": {"nsxt_ip_set": {}}
            }}}"#,
        )
        .unwrap();

        // Almost every mapped entry is unknown to this schema
        assert!(run_check("0.1.0", &path, true).is_err());
    }

    #[test]
    fn test_run_check_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_check("0.1.0", &dir.path().join("missing.json"), false).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to load upstream schema"));
    }
}
