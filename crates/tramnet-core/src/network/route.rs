use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TramError;

/// What a route minimises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteMetric {
    /// Transition times in minutes (default weight for untimed hops)
    #[default]
    Time,
    /// Number of hops
    Hops,
    /// Great-circle distance in metres
    Distance,
}

impl RouteMetric {
    /// Unit of [`Route::cost`] under this metric
    pub fn unit(&self) -> &'static str {
        match self {
            RouteMetric::Time => "min",
            RouteMetric::Hops => "hops",
            RouteMetric::Distance => "m",
        }
    }
}

impl FromStr for RouteMetric {
    type Err = TramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "time" => Ok(RouteMetric::Time),
            "hops" => Ok(RouteMetric::Hops),
            "distance" => Ok(RouteMetric::Distance),
            other => Err(TramError::invalid_value(
                "route metric (expected: time, hops, or distance)",
                other,
            )),
        }
    }
}

impl fmt::Display for RouteMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteMetric::Time => write!(f, "time"),
            RouteMetric::Hops => write!(f, "hops"),
            RouteMetric::Distance => write!(f, "distance"),
        }
    }
}

/// Cheapest stop sequence between two stops
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub metric: RouteMetric,
    pub cost: u64,
    /// Display names from origin to destination inclusive
    pub stops: Vec<String>,
}

impl Route {
    pub fn hops(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {})",
            self.stops.join(" -> "),
            self.cost,
            self.metric.unit()
        )
    }
}
