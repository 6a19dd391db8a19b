//! `tramnet route` - cheapest route between two stops

use tramnet_core::error::Result;
use tramnet_core::network::RouteMetric;

use super::CommandContext;
use crate::cli::OutputFormat;

/// Execute the route command
pub fn execute(ctx: &CommandContext, from: &str, to: &str, by: RouteMetric) -> Result<()> {
    let (network, _) = ctx.load_network()?;
    let route = network.route(from, to, by)?;

    tracing::debug!(elapsed = ?ctx.start.elapsed(), hops = route.hops(), "route_found");

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&route)?);
        }
        OutputFormat::Human => {
            println!("{}", route);
        }
    }

    Ok(())
}
