//! `tramnet stops` - list registered stops

use tramnet_core::error::Result;

use super::CommandContext;
use crate::cli::OutputFormat;

/// Execute the stops command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let (network, _) = ctx.load_network()?;
    let names = network.all_stops();

    match ctx.cli.format {
        OutputFormat::Json => {
            let mut stops = Vec::with_capacity(names.len());
            for name in &names {
                let position = network.stop_position(name)?;
                stops.push(serde_json::json!({
                    "name": name,
                    "lat": position.lat,
                    "lon": position.lon,
                    "lines": network.stop_lines(name)?,
                }));
            }
            println!("{}", serde_json::to_string_pretty(&stops)?);
        }
        OutputFormat::Human => {
            for name in &names {
                if ctx.cli.verbose {
                    println!("{}  [{}]", name, network.stop_lines(name)?.join(", "));
                } else {
                    println!("{}", name);
                }
            }
            if !ctx.cli.quiet {
                eprintln!("{} stop(s)", names.len());
            }
        }
    }

    Ok(())
}
