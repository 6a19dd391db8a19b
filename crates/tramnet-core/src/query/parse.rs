use serde::Serialize;

const LINES_VIA: &str = "lines via ";
const LINES_BETWEEN: &str = "lines between ";
const TIME_BETWEEN: &str = "time between ";
const DISTANCE_BETWEEN: &str = "distance between ";
const AND: &str = " and ";
const ON_LINE: &str = " on line ";

/// One of the four recognized query shapes.
///
/// Stop names and line ids are stored lower-cased, the way the text was
/// normalized before matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Query {
    /// `lines via <stop>`
    LinesVia { stop: String },
    /// `lines between <stop> and <stop>`
    LinesBetween { from: String, to: String },
    /// `time between <stop> and <stop> on line <line>`
    TimeBetween {
        from: String,
        to: String,
        line: String,
    },
    /// `distance between <stop> and <stop>`
    DistanceBetween { from: String, to: String },
}

impl Query {
    /// Match `text` against the query grammar, `None` if it fits no shape.
    pub fn parse(text: &str) -> Option<Query> {
        let text = text.trim().to_lowercase();

        if let Some(stop) = text.strip_prefix(LINES_VIA) {
            return Some(Query::LinesVia {
                stop: non_empty(stop)?,
            });
        }
        if let Some(body) = text.strip_prefix(LINES_BETWEEN) {
            let (from, to) = split_pair(body)?;
            return Some(Query::LinesBetween { from, to });
        }
        if let Some(body) = text.strip_prefix(TIME_BETWEEN) {
            let (pair, line) = body.rsplit_once(ON_LINE)?;
            let line = non_empty(line)?;
            if line.contains(char::is_whitespace) {
                return None;
            }
            let (from, to) = split_pair(pair)?;
            return Some(Query::TimeBetween { from, to, line });
        }
        if let Some(body) = text.strip_prefix(DISTANCE_BETWEEN) {
            let (from, to) = split_pair(body)?;
            return Some(Query::DistanceBetween { from, to });
        }
        None
    }
}

/// Split `<stop> and <stop>` on the first ` and `.
fn split_pair(body: &str) -> Option<(String, String)> {
    let (from, to) = body.split_once(AND)?;
    Some((non_empty(from)?, non_empty(to)?))
}

fn non_empty(part: &str) -> Option<String> {
    let part = part.trim();
    (!part.is_empty()).then(|| part.to_string())
}
