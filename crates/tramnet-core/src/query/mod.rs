//! Fixed-grammar query interpreter
//!
//! Four query shapes are recognized (case-insensitive):
//! - `lines via <stop>`
//! - `lines between <stop> and <stop>`
//! - `time between <stop> and <stop> on line <line>`
//! - `distance between <stop> and <stop>`
//!
//! Interpreting never fails outright. Text that fits no shape is
//! [`QueryOutcome::Unrecognized`]; a parsed query the network cannot answer
//! is [`QueryOutcome::Failed`] with the original error kind.

pub mod parse;

use serde::Serialize;

use crate::error::{QueryError, Result};
use crate::format::format_km;
use crate::graph::{WeightedGraph, WeightedOps};
use crate::network::TransitNetwork;

pub use parse::Query;

/// Successful answer to a query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum QueryAnswer {
    /// Line identifiers in numeric order
    Lines(Vec<String>),
    /// Travel time in minutes
    Minutes(u32),
    /// Great-circle distance in kilometres
    Kilometers(f64),
}

impl QueryAnswer {
    /// Human rendering; distances use `precision` decimals.
    pub fn render(&self, precision: usize) -> String {
        match self {
            QueryAnswer::Lines(ids) => ids.join(", "),
            QueryAnswer::Minutes(minutes) => format!("{minutes} min"),
            QueryAnswer::Kilometers(km) => format_km(*km, precision),
        }
    }
}

/// Result of interpreting free query text
#[derive(Debug)]
pub enum QueryOutcome {
    Answer(QueryAnswer),
    /// The text matches none of the query shapes
    Unrecognized,
    /// The query parsed but the network could not answer it
    Failed(QueryError),
}

impl QueryOutcome {
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, QueryOutcome::Unrecognized)
    }

    pub fn answer(&self) -> Option<&QueryAnswer> {
        match self {
            QueryOutcome::Answer(answer) => Some(answer),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&QueryError> {
        match self {
            QueryOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Maps query text onto [`TransitNetwork`] operations
pub struct QueryInterpreter<'a, G = WeightedGraph<String, u32>> {
    network: &'a TransitNetwork<G>,
}

impl<'a, G> QueryInterpreter<'a, G>
where
    G: WeightedOps<Vertex = String, Weight = u32>,
{
    pub fn new(network: &'a TransitNetwork<G>) -> Self {
        Self { network }
    }

    #[tracing::instrument(skip(self))]
    pub fn interpret(&self, text: &str) -> QueryOutcome {
        let Some(query) = Query::parse(text) else {
            tracing::debug!("query_unrecognized");
            return QueryOutcome::Unrecognized;
        };
        match self.execute(&query) {
            Ok(answer) => QueryOutcome::Answer(answer),
            Err(err) => {
                tracing::debug!(kind = %err.kind(), error = %err, "query_failed");
                QueryOutcome::Failed(err.into())
            }
        }
    }

    /// Run an already parsed query.
    pub fn execute(&self, query: &Query) -> Result<QueryAnswer> {
        let network = self.network;
        match query {
            Query::LinesVia { stop } => network.lines_via_stop(stop).map(QueryAnswer::Lines),
            Query::LinesBetween { from, to } => {
                network.lines_between_stops(from, to).map(QueryAnswer::Lines)
            }
            Query::TimeBetween { from, to, line } => network
                .time_between_stops(line, from, to)
                .map(QueryAnswer::Minutes),
            Query::DistanceBetween { from, to } => {
                network.geo_distance(from, to).map(QueryAnswer::Kilometers)
            }
        }
    }
}

/// Interpret `text` against `network` in one call.
pub fn answer_query<G>(network: &TransitNetwork<G>, text: &str) -> QueryOutcome
where
    G: WeightedOps<Vertex = String, Weight = u32>,
{
    QueryInterpreter::new(network).interpret(text)
}
