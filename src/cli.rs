//! CLI argument parsing for tramnet
//!
//! Global flags: --network, --config, --format, --quiet, --verbose,
//! --log-level, --log-json, --strict

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use tramnet_core::format::OutputFormat;
use tramnet_core::network::RouteMetric;

/// Tramnet - query a tram network snapshot
#[derive(Parser, Debug)]
#[command(name = "tramnet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Network snapshot JSON
    #[arg(long, global = true, env = "TRAMNET_NETWORK")]
    pub network: Option<PathBuf>,

    /// Configuration file (defaults to ./tramnet.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug-level logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter, e.g. `debug` or `tramnet_core::graph=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Reject inconsistent snapshots instead of skipping bad records
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer a query, e.g. `lines via Centralstationen`
    Query {
        /// Query text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List registered stops
    Stops,

    /// List lines and their stops
    Lines,

    /// Cheapest route between two stops
    Route {
        /// Origin stop
        from: String,

        /// Destination stop
        to: String,

        /// What to minimise: time, hops, or distance
        #[arg(long, value_parser = parse_route_metric, default_value = "time")]
        by: RouteMetric,
    },

    /// Validate the snapshot
    Check {
        /// Longest plausible hop in kilometres (overrides config)
        #[arg(long)]
        max_km: Option<f64>,
    },

    /// Write the loaded network back out as a snapshot
    Export {
        /// Destination file
        path: PathBuf,
    },
}

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse route metric from string
pub fn parse_route_metric(s: &str) -> std::result::Result<RouteMetric, String> {
    s.parse::<RouteMetric>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_words_are_collected() {
        let cli = Cli::try_parse_from([
            "tramnet",
            "--network",
            "net.json",
            "query",
            "lines",
            "via",
            "Hagen",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Query { text }) => assert_eq!(text.join(" "), "lines via Hagen"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_route_metric_flag() {
        let cli = Cli::try_parse_from(["tramnet", "route", "A", "B", "--by", "hops"]).unwrap();
        match cli.command {
            Some(Commands::Route { by, .. }) => assert_eq!(by, RouteMetric::Hops),
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(Cli::try_parse_from(["tramnet", "route", "A", "B", "--by", "speed"]).is_err());
    }

    #[test]
    fn test_format_flag() {
        let cli = Cli::try_parse_from(["tramnet", "--format", "json", "stops"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(Cli::try_parse_from(["tramnet", "--format", "records", "stops"]).is_err());
    }
}
