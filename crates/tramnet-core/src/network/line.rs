use std::cmp::Ordering;

use crate::network::stop::normalize_name;

/// Order line identifiers by their numeric value where they have one.
///
/// Numeric identifiers come first in numeric order (`2` before `10`), then
/// the rest case-insensitively.
pub fn compare_line_ids(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<u64>(), b.trim().parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => normalize_name(a)
            .cmp(&normalize_name(b))
            .then_with(|| a.cmp(b)),
    }
}

/// Sort line identifiers with [`compare_line_ids`].
pub fn sort_line_ids(ids: &mut [String]) {
    ids.sort_by(|a, b| compare_line_ids(a, b));
}

/// A line and its ordered stop sequence. Stops are held by name only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TramLine {
    id: String,
    stops: Vec<String>,
}

impl TramLine {
    pub fn new<I, S>(id: impl Into<String>, stops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into().trim().to_string(),
            stops: stops
                .into_iter()
                .map(|s| s.into().trim().to_string())
                .collect(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn key(&self) -> String {
        normalize_name(&self.id)
    }

    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    /// Normalized stop keys in line order
    pub fn stop_keys(&self) -> impl Iterator<Item = String> + '_ {
        self.stops.iter().map(|s| normalize_name(s))
    }

    /// First position of a stop on this line
    pub fn position_of(&self, stop: &str) -> Option<usize> {
        let key = normalize_name(stop);
        self.stop_keys().position(|s| s == key)
    }

    pub fn contains(&self, stop: &str) -> bool {
        self.position_of(stop).is_some()
    }

    /// Consecutive stop pairs (as normalized keys) in travel order
    pub fn hops(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.stops
            .windows(2)
            .map(|pair| (normalize_name(&pair[0]), normalize_name(&pair[1])))
    }

    /// Whether `a` and `b` are consecutive on this line, in either order
    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        let (a, b) = (normalize_name(a), normalize_name(b));
        self.hops()
            .any(|(x, y)| (x == a && y == b) || (x == b && y == a))
    }
}
