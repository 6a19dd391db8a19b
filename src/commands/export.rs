//! `tramnet export` - write the loaded network as a snapshot

use std::path::Path;

use tramnet_core::error::Result;

use super::CommandContext;
use crate::cli::OutputFormat;

/// Execute the export command
pub fn execute(ctx: &CommandContext, path: &Path) -> Result<()> {
    let (network, _) = ctx.load_network()?;
    let snapshot = network.to_snapshot();
    snapshot.save(path)?;

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "status": "ok",
                "path": path.display().to_string(),
                "stops": snapshot.stops.len(),
                "lines": snapshot.lines.len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!(
                    "Exported {} stops and {} lines to {}",
                    snapshot.stops.len(),
                    snapshot.lines.len(),
                    path.display()
                );
            }
        }
    }

    Ok(())
}
