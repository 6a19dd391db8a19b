use std::collections::BTreeSet;

use geo::{HaversineDistance, Point};
use serde::{Deserialize, Serialize};

/// Lookup key for a stop or line name: trimmed and lower-cased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Geographic position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

impl Position {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn to_point(self) -> Point {
        Point::new(self.lon, self.lat)
    }

    /// Great-circle distance in kilometres (haversine)
    pub fn distance_km(self, other: Position) -> f64 {
        self.to_point().haversine_distance(&other.to_point()) / 1000.0
    }
}

/// A named stop. The name is kept as given for display; lookups go
/// through [`normalize_name`].
#[derive(Debug, Clone, PartialEq)]
pub struct TramStop {
    name: String,
    position: Position,
    lines: BTreeSet<String>,
}

impl TramStop {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into().trim().to_string(),
            position: Position::new(lat, lon),
            lines: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Line identifiers serving this stop, in storage order (not numeric).
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(String::as_str)
    }

    pub fn serves(&self, line: &str) -> bool {
        self.lines.contains(line.trim())
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.insert(line.into().trim().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Centralstationen "), "centralstationen");
        assert_eq!(normalize_name("Järntorget"), "järntorget");
    }

    #[test]
    fn test_add_line_is_idempotent() {
        let mut stop = TramStop::new("Hagen", 57.67, 11.9);
        stop.add_line("11");
        stop.add_line(" 11");
        assert_eq!(stop.lines().collect::<Vec<_>>(), vec!["11"]);
        assert!(stop.serves("11"));
    }

    #[test]
    fn test_name_keeps_casing() {
        let stop = TramStop::new(" Centralstationen ", 57.70, 11.97);
        assert_eq!(stop.name(), "Centralstationen");
        assert_eq!(stop.key(), "centralstationen");
    }

    #[test]
    fn test_distance_km() {
        // 0.019 degrees of latitude is about 2.1 km
        let a = Position::new(57.7087, 11.9729);
        let b = Position::new(57.6897, 11.9730);
        let km = a.distance_km(b);
        assert!((km - 2.11).abs() < 0.05, "got {km}");
        assert_eq!(a.distance_km(a), 0.0);
    }
}
