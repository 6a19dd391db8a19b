//! Transit network domain model
//!
//! A [`TransitNetwork`] composes a weighted graph (vertices are normalized
//! stop names, weights are minutes) with a stop registry and a line
//! registry. Names are matched case-insensitively and displayed with the
//! casing they were registered with.

pub mod line;
pub mod route;
pub mod snapshot;
pub mod stop;

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::time::Instant;

use crate::config::{NetworkConfig, NetworkSource};
use crate::error::{Result, TramError};
use crate::graph::{shortest_path, WeightedGraph, WeightedOps};
use crate::{bail_invalid, bail_not_found, trace_time};

pub use line::{compare_line_ids, sort_line_ids, TramLine};
pub use route::{Route, RouteMetric};
pub use snapshot::{NetworkSnapshot, SnapshotIssue};
pub use stop::{normalize_name, Position, TramStop};

/// Latitude and longitude ranges: `((min_lat, max_lat), (min_lon, max_lon))`
pub type BoundingBox = ((f64, f64), (f64, f64));

/// Stops, lines and transition times over a weighted graph.
#[derive(Debug, Clone)]
pub struct TransitNetwork<G = WeightedGraph<String, u32>> {
    graph: G,
    stops: HashMap<String, TramStop>,
    lines: HashMap<String, TramLine>,
    /// Directed pairs with a recorded transition time. Other edges only
    /// carry the default weight.
    timed: HashSet<(String, String)>,
    default_weight: u32,
}

impl Default for TransitNetwork<WeightedGraph<String, u32>> {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitNetwork<WeightedGraph<String, u32>> {
    pub fn new() -> Self {
        Self::with_graph(WeightedGraph::new())
    }

    pub fn with_config(config: &NetworkConfig) -> Self {
        let mut network = Self::new();
        network.default_weight = config.default_weight;
        network
    }

    /// Build a network from a snapshot.
    ///
    /// With `config.strict` a blank or repeated line id, an unknown stop, an
    /// asymmetric time or a time between non-adjacent stops rejects the whole
    /// snapshot. Otherwise the offending records are logged and skipped.
    #[tracing::instrument(skip_all, fields(stops = snapshot.stops.len(), lines = snapshot.lines.len()))]
    pub fn from_snapshot(snapshot: &NetworkSnapshot, config: &NetworkConfig) -> Result<Self> {
        let start = Instant::now();

        if config.strict {
            let mut issues = snapshot.bad_line_ids();
            issues.extend(snapshot.unknown_stops());
            issues.extend(snapshot.asymmetric_times());
            issues.extend(snapshot.non_adjacent_times());
            if let Some(first) = issues.first() {
                return Err(TramError::InvalidSnapshot {
                    count: issues.len(),
                    first: first.to_string(),
                });
            }
        } else {
            for issue in snapshot.unknown_stops() {
                tracing::warn!(%issue, "snapshot_issue");
            }
        }

        let mut network = Self::with_config(config);
        for (name, position) in &snapshot.stops {
            network.add_stop(TramStop::new(name.as_str(), position.lat, position.lon));
        }
        for (id, stops) in &snapshot.lines {
            let line = TramLine::new(id.as_str(), stops.iter().map(String::as_str));
            if let Err(err) = network.add_line(line) {
                tracing::warn!(line = %id, error = %err, "line_skipped");
            }
        }
        for (from, targets) in &snapshot.times {
            for (to, minutes) in targets {
                network.load_time(from, to, *minutes);
            }
        }

        trace_time!(start, "network_built", timed = network.timed.len());
        Ok(network)
    }

    /// Load the snapshot a [`NetworkSource`] points at and build the network.
    pub fn from_source(source: &NetworkSource, config: &NetworkConfig) -> Result<Self> {
        match source {
            NetworkSource::Path(path) => {
                Self::from_snapshot(&NetworkSnapshot::load(path)?, config)
            }
            NetworkSource::Snapshot(snapshot) => Self::from_snapshot(snapshot, config),
        }
    }

    /// Record one snapshot time, keeping the first value seen for a pair.
    fn load_time(&mut self, from: &str, to: &str, minutes: u32) {
        if let Some(existing) = self.transition_time(from, to) {
            if existing != minutes {
                tracing::warn!(from, to, existing, minutes, "conflicting_time_skipped");
            }
            return;
        }
        if let Err(err) = self.set_transition_time(from, to, minutes) {
            tracing::warn!(from, to, error = %err, "time_skipped");
        }
    }
}

impl<G> TransitNetwork<G>
where
    G: WeightedOps<Vertex = String, Weight = u32>,
{
    /// Wrap an existing graph. Stops and lines still have to be registered.
    pub fn with_graph(graph: G) -> Self {
        Self {
            graph,
            stops: HashMap::new(),
            lines: HashMap::new(),
            timed: HashSet::new(),
            default_weight: 1,
        }
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn default_weight(&self) -> u32 {
        self.default_weight
    }

    /// Register a stop and its vertex.
    ///
    /// Already registered lines that list the stop are added to its line set.
    /// Registering the same name again replaces the position and keeps the
    /// union of lines.
    pub fn add_stop(&mut self, mut stop: TramStop) {
        let key = stop.key();
        for line in self.lines.values().filter(|line| line.contains(&key)) {
            stop.add_line(line.id());
        }
        if let Some(previous) = self.stops.get(&key) {
            for line in previous.lines() {
                stop.add_line(line);
            }
        }
        tracing::debug!(stop = stop.name(), "stop_registered");
        self.graph.add_vertex(key.clone());
        self.stops.insert(key, stop);
    }

    /// Register a line and connect its consecutive stops in both directions.
    ///
    /// New edges get the default weight until a transition time is set.
    pub fn add_line(&mut self, line: TramLine) -> Result<()> {
        let key = line.key();
        if key.is_empty() {
            bail_invalid!("line id", "(empty)");
        }
        if self.lines.contains_key(&key) {
            bail_invalid!("line id (already registered)", line.id());
        }

        for stop in line.stop_keys() {
            self.graph.add_vertex(stop.clone());
            if let Some(registered) = self.stops.get_mut(&stop) {
                registered.add_line(line.id());
            }
        }
        for (a, b) in line.hops() {
            self.connect(&a, &b)?;
            self.connect(&b, &a)?;
        }

        tracing::debug!(line = line.id(), stops = line.stops().len(), "line_registered");
        self.lines.insert(key, line);
        Ok(())
    }

    fn connect(&mut self, from: &str, to: &str) -> Result<()> {
        let (from, to) = (from.to_string(), to.to_string());
        self.graph.add_edge(from.clone(), to.clone());
        if self.graph.get_weight(&from, &to).is_none() {
            self.graph.set_weight(&from, &to, self.default_weight)?;
        }
        Ok(())
    }

    /// Set the travel time between two stops in both directions.
    ///
    /// Fails with `NoSuchEdge` unless the stops are consecutive on some
    /// registered line.
    pub fn set_transition_time(&mut self, a: &str, b: &str, minutes: u32) -> Result<()> {
        let (ka, kb) = (normalize_name(a), normalize_name(b));
        if !self.graph.contains_edge(&ka, &kb) || !self.graph.contains_edge(&kb, &ka) {
            return Err(TramError::no_such_edge(a.trim(), b.trim()));
        }
        self.graph.set_weight(&ka, &kb, minutes)?;
        self.graph.set_weight(&kb, &ka, minutes)?;
        self.timed.insert((ka.clone(), kb.clone()));
        self.timed.insert((kb, ka));
        Ok(())
    }

    /// Recorded travel time from `a` to `b`. Default weights do not count.
    pub fn transition_time(&self, a: &str, b: &str) -> Option<u32> {
        let pair = (normalize_name(a), normalize_name(b));
        if !self.timed.contains(&pair) {
            return None;
        }
        self.graph.get_weight(&pair.0, &pair.1)
    }

    pub fn stop(&self, name: &str) -> Option<&TramStop> {
        self.stops.get(&normalize_name(name))
    }

    pub fn line(&self, id: &str) -> Option<&TramLine> {
        self.lines.get(&normalize_name(id))
    }

    fn require_stop(&self, name: &str) -> Result<&TramStop> {
        match self.stop(name) {
            Some(stop) => Ok(stop),
            None => bail_not_found!("stop", name.trim()),
        }
    }

    fn require_line(&self, id: &str) -> Result<&TramLine> {
        match self.line(id) {
            Some(line) => Ok(line),
            None => bail_not_found!("line", id.trim()),
        }
    }

    /// Registered stop names, sorted case-insensitively.
    pub fn all_stops(&self) -> Vec<String> {
        let mut names: Vec<&TramStop> = self.stops.values().collect();
        names.sort_by_key(|stop| stop.key());
        names.into_iter().map(|stop| stop.name().to_string()).collect()
    }

    /// Registered line ids in numeric order.
    pub fn all_lines(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.lines.values().map(|l| l.id().to_string()).collect();
        sort_line_ids(&mut ids);
        ids
    }

    pub fn stop_position(&self, name: &str) -> Result<Position> {
        Ok(self.require_stop(name)?.position())
    }

    pub fn line_stops(&self, id: &str) -> Result<&[String]> {
        Ok(self.require_line(id)?.stops())
    }

    /// Lines serving `stop`, in numeric order.
    ///
    /// An unknown stop is an error rather than an empty list.
    pub fn lines_via_stop(&self, stop: &str) -> Result<Vec<String>> {
        let mut ids: Vec<String> = self
            .require_stop(stop)?
            .lines()
            .map(str::to_string)
            .collect();
        sort_line_ids(&mut ids);
        Ok(ids)
    }

    /// Same as [`lines_via_stop`](Self::lines_via_stop).
    pub fn stop_lines(&self, stop: &str) -> Result<Vec<String>> {
        self.lines_via_stop(stop)
    }

    /// Lines on which `a` and `b` are consecutive stops, in numeric order.
    pub fn lines_between_stops(&self, a: &str, b: &str) -> Result<Vec<String>> {
        self.require_stop(a)?;
        self.require_stop(b)?;
        let mut ids: Vec<String> = self
            .lines
            .values()
            .filter(|line| line.are_adjacent(a, b))
            .map(|line| line.id().to_string())
            .collect();
        sort_line_ids(&mut ids);
        Ok(ids)
    }

    /// Minutes from `a` to `b` along `line`, summing every hop in between.
    pub fn time_between_stops(&self, line: &str, a: &str, b: &str) -> Result<u32> {
        let tram_line = self.require_line(line)?;
        let Some(from) = tram_line.position_of(a) else {
            bail_not_found!(&format!("stop on line {}", tram_line.id()), a.trim());
        };
        let Some(to) = tram_line.position_of(b) else {
            bail_not_found!(&format!("stop on line {}", tram_line.id()), b.trim());
        };
        if from == to {
            return Ok(0);
        }

        let (lo, hi) = (from.min(to), from.max(to));
        let stops = &tram_line.stops()[lo..=hi];
        let mut total = 0u32;
        for pair in stops.windows(2) {
            let minutes = self.transition_time(&pair[0], &pair[1]).ok_or_else(|| {
                TramError::MissingTransition {
                    line: tram_line.id().to_string(),
                    from: pair[0].clone(),
                    to: pair[1].clone(),
                }
            })?;
            total = total.saturating_add(minutes);
        }
        Ok(total)
    }

    /// Great-circle distance in kilometres. The same stop is 0 km from itself.
    pub fn geo_distance(&self, a: &str, b: &str) -> Result<f64> {
        let from = self.require_stop(a)?;
        let to = self.require_stop(b)?;
        if from.key() == to.key() {
            return Ok(0.0);
        }
        Ok(from.position().distance_km(to.position()))
    }

    /// Bounding box of all registered stops, `None` when there are none.
    pub fn extreme_positions(&self) -> Option<BoundingBox> {
        let mut positions = self.stops.values().map(TramStop::position);
        let first = positions.next()?;
        let init = ((first.lat, first.lat), (first.lon, first.lon));
        Some(positions.fold(init, |((lat_lo, lat_hi), (lon_lo, lon_hi)), p| {
            (
                (lat_lo.min(p.lat), lat_hi.max(p.lat)),
                (lon_lo.min(p.lon), lon_hi.max(p.lon)),
            )
        }))
    }

    /// Recorded pairs whose reverse time is missing or different.
    pub fn check_symmetry(&self) -> Vec<(String, String)> {
        let mut broken: Vec<(String, String)> = self
            .timed
            .iter()
            .filter(|(a, b)| self.transition_time(b, a) != self.transition_time(a, b))
            .map(|(a, b)| (self.display_name(a), self.display_name(b)))
            .collect();
        broken.sort();
        broken
    }

    /// Stops listed by some line but never registered.
    pub fn unregistered_stops(&self) -> Vec<String> {
        let names: BTreeSet<String> = self
            .lines
            .values()
            .flat_map(|line| line.stops().iter())
            .filter(|name| self.stop(name).is_none())
            .cloned()
            .collect();
        names.into_iter().collect()
    }

    /// Cheapest route between two stops under `metric`.
    pub fn route(&self, a: &str, b: &str, metric: RouteMetric) -> Result<Route> {
        let (ka, kb) = (normalize_name(a), normalize_name(b));
        for (key, name) in [(&ka, a), (&kb, b)] {
            if !self.graph.contains_vertex(key) {
                bail_not_found!("stop", name.trim());
            }
        }

        let found = match metric {
            RouteMetric::Time => shortest_path(&self.graph, &ka, &kb, |u, v| {
                u64::from(self.graph.get_weight(u, v).unwrap_or(self.default_weight))
            }),
            RouteMetric::Hops => shortest_path(&self.graph, &ka, &kb, |_, _| 1u64),
            RouteMetric::Distance => {
                shortest_path(&self.graph, &ka, &kb, |u, v| self.hop_metres(u, v))
            }
        };

        let (cost, path) = found.map_err(|err| match err {
            TramError::Unreachable { .. } => TramError::Unreachable {
                from: self.display_name(&ka),
                to: self.display_name(&kb),
            },
            other => other,
        })?;

        Ok(Route {
            metric,
            cost,
            stops: path.iter().map(|key| self.display_name(key)).collect(),
        })
    }

    /// Rounded metres between two stops; 0 if either has no position.
    fn hop_metres(&self, from: &str, to: &str) -> u64 {
        match (self.stops.get(from), self.stops.get(to)) {
            (Some(a), Some(b)) => (a.position().distance_km(b.position()) * 1000.0).round() as u64,
            _ => 0,
        }
    }

    /// Registered casing of a stop key, falling back to how a line spells it.
    fn display_name(&self, key: &str) -> String {
        if let Some(stop) = self.stops.get(key) {
            return stop.name().to_string();
        }
        self.lines
            .values()
            .flat_map(|line| line.stops().iter())
            .find(|name| normalize_name(name) == key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Produce the persisted form of this network.
    pub fn to_snapshot(&self) -> NetworkSnapshot {
        let stops = self
            .stops
            .values()
            .map(|stop| (stop.name().to_string(), stop.position()))
            .collect();

        let lines = self
            .lines
            .values()
            .map(|line| (line.id().to_string(), line.stops().to_vec()))
            .collect();

        let mut times: BTreeMap<String, BTreeMap<String, u32>> = BTreeMap::new();
        for (a, b) in &self.timed {
            if let Some(minutes) = self.graph.get_weight(a, b) {
                times
                    .entry(self.display_name(a))
                    .or_default()
                    .insert(self.display_name(b), minutes);
            }
        }

        NetworkSnapshot {
            stops,
            lines,
            times,
        }
    }
}

#[cfg(test)]
mod tests;
