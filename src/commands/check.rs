//! `tramnet check` - validate a network snapshot
//!
//! Reports blank or repeated line ids, unknown stops, asymmetric or
//! non-adjacent times and implausibly long hops, then loads the snapshot
//! leniently and verifies that the recorded times came out symmetric.
//! Any issue makes the command exit with a data error.

use tramnet_core::config::NetworkConfig;
use tramnet_core::error::{Result, TramError};
use tramnet_core::network::TransitNetwork;

use super::CommandContext;
use crate::cli::OutputFormat;

/// Execute the check command
pub fn execute(ctx: &CommandContext, max_km: Option<f64>) -> Result<()> {
    let config = ctx.config()?;
    let snapshot = ctx.load_snapshot(&config)?;
    let max_km = max_km.unwrap_or(config.max_hop_km);

    let mut issues: Vec<String> = snapshot
        .validate(max_km)
        .iter()
        .map(ToString::to_string)
        .collect();

    // Strict loading would stop at the first issue; the report wants them all
    let lenient = NetworkConfig {
        strict: false,
        ..config
    };
    let network = TransitNetwork::from_snapshot(&snapshot, &lenient)?;
    issues.extend(
        network
            .check_symmetry()
            .into_iter()
            .map(|(a, b)| format!("loaded time {a} -> {b} differs from {b} -> {a}")),
    );

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "stops": snapshot.stops.len(),
                "lines": snapshot.lines.len(),
                "max_hop_km": max_km,
                "issues": issues,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if issues.is_empty() {
                if !ctx.cli.quiet {
                    println!(
                        "Snapshot is consistent ({} stops, {} lines)",
                        snapshot.stops.len(),
                        snapshot.lines.len()
                    );
                }
            } else {
                println!("Found {} issue(s):", issues.len());
                for issue in &issues {
                    println!("  {}", issue);
                }
            }
        }
    }

    match issues.first() {
        Some(first) => Err(TramError::InvalidSnapshot {
            count: issues.len(),
            first: first.clone(),
        }),
        None => Ok(()),
    }
}
