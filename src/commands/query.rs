//! `tramnet query` - answer a free-text query
//!
//! An unrecognized query is a usage error (exit 2); a query the network
//! cannot answer keeps its domain error (exit 3).

use tramnet_core::error::{Result, TramError};
use tramnet_core::query::{QueryInterpreter, QueryOutcome};

use super::CommandContext;
use crate::cli::OutputFormat;

/// Execute the query command
pub fn execute(ctx: &CommandContext, text: &str) -> Result<()> {
    let (network, config) = ctx.load_network()?;

    let answer = match QueryInterpreter::new(&network).interpret(text) {
        QueryOutcome::Answer(answer) => answer,
        QueryOutcome::Unrecognized => return Err(TramError::InvalidQuery(text.trim().to_string())),
        QueryOutcome::Failed(err) => return Err(err.into_inner()),
    };

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "query": text.trim(),
                "answer": answer,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", answer.render(config.distance_precision));
        }
    }

    Ok(())
}
