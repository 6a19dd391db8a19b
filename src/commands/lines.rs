//! `tramnet lines` - list lines and their stops

use tramnet_core::error::Result;

use super::CommandContext;
use crate::cli::OutputFormat;

/// Execute the lines command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let (network, _) = ctx.load_network()?;
    let ids = network.all_lines();

    match ctx.cli.format {
        OutputFormat::Json => {
            let mut lines = Vec::with_capacity(ids.len());
            for id in &ids {
                lines.push(serde_json::json!({
                    "id": id,
                    "stops": network.line_stops(id)?,
                }));
            }
            println!("{}", serde_json::to_string_pretty(&lines)?);
        }
        OutputFormat::Human => {
            for id in &ids {
                let stops = network.line_stops(id)?;
                println!("{}: {}", id, stops.join(" - "));
            }
        }
    }

    Ok(())
}
