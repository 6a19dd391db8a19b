//! Persisted network snapshot
//!
//! The JSON shape produced by the timetable loader:
//!
//! ```json
//! {
//!   "stops": { "<stopName>": { "lat": 57.7, "lon": 11.9 } },
//!   "lines": { "<lineId>": ["<stopName>", "<stopName>"] },
//!   "times": { "<stopName>": { "<otherStopName>": 3 } }
//! }
//! ```

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::network::stop::{normalize_name, Position};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    #[serde(default)]
    pub stops: BTreeMap<String, Position>,
    #[serde(default)]
    pub lines: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub times: BTreeMap<String, BTreeMap<String, u32>>,
}

/// A consistency problem found in a snapshot
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotIssue {
    /// A line lists a stop that has no entry in `stops`
    UnknownStop { line: String, stop: String },
    /// A blank line id, or one equal to an earlier id ignoring case
    BadLineId {
        line: String,
        duplicate_of: Option<String>,
    },
    /// `a -> b` is recorded but `b -> a` is missing or different
    AsymmetricTime {
        from: String,
        to: String,
        forward: u32,
        backward: Option<u32>,
    },
    /// A time is recorded for stops that are not consecutive on any line
    NonAdjacentTime { from: String, to: String },
    /// Consecutive stops further apart than the plausibility limit
    ImplausibleHop {
        line: String,
        from: String,
        to: String,
        km: f64,
    },
}

impl fmt::Display for SnapshotIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotIssue::UnknownStop { line, stop } => {
                write!(f, "line {line} lists unknown stop {stop}")
            }
            SnapshotIssue::BadLineId {
                line,
                duplicate_of: Some(first),
            } => write!(f, "line id {line} duplicates {first}"),
            SnapshotIssue::BadLineId {
                line,
                duplicate_of: None,
            } => write!(f, "line id {line:?} is blank"),
            SnapshotIssue::AsymmetricTime {
                from,
                to,
                forward,
                backward: Some(backward),
            } => write!(
                f,
                "time {from} -> {to} is {forward} but {to} -> {from} is {backward}"
            ),
            SnapshotIssue::AsymmetricTime {
                from,
                to,
                forward,
                backward: None,
            } => write!(
                f,
                "time {from} -> {to} is {forward} but {to} -> {from} is missing"
            ),
            SnapshotIssue::NonAdjacentTime { from, to } => {
                write!(f, "time recorded for non-adjacent stops {from} and {to}")
            }
            SnapshotIssue::ImplausibleHop { line, from, to, km } => {
                write!(f, "line {line}: {from} -> {to} is {km:.2} km apart")
            }
        }
    }
}

impl NetworkSnapshot {
    /// Read a snapshot from a JSON file
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let snapshot: NetworkSnapshot = serde_json::from_reader(reader)?;
        tracing::debug!(
            stops = snapshot.stops.len(),
            lines = snapshot.lines.len(),
            "snapshot_loaded"
        );
        Ok(snapshot)
    }

    /// Write the snapshot as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// Stops referenced by lines but missing from `stops`
    pub fn unknown_stops(&self) -> Vec<SnapshotIssue> {
        let known: HashSet<String> = self.stops.keys().map(|s| normalize_name(s)).collect();
        self.lines
            .iter()
            .flat_map(|(line, stops)| {
                stops
                    .iter()
                    .filter(|stop| !known.contains(&normalize_name(stop)))
                    .map(|stop| SnapshotIssue::UnknownStop {
                        line: line.clone(),
                        stop: stop.clone(),
                    })
            })
            .collect()
    }

    /// Line ids the loader skips: blank ones and case-insensitive repeats.
    /// The first id in key order wins.
    pub fn bad_line_ids(&self) -> Vec<SnapshotIssue> {
        let mut seen: HashMap<String, &String> = HashMap::new();
        let mut issues = Vec::new();
        for line in self.lines.keys() {
            let key = normalize_name(line);
            if key.is_empty() {
                issues.push(SnapshotIssue::BadLineId {
                    line: line.clone(),
                    duplicate_of: None,
                });
            } else if let Some(first) = seen.get(&key) {
                issues.push(SnapshotIssue::BadLineId {
                    line: line.clone(),
                    duplicate_of: Some((*first).clone()),
                });
            } else {
                seen.insert(key, line);
            }
        }
        issues
    }

    /// Recorded times whose reverse direction is missing or differs
    pub fn asymmetric_times(&self) -> Vec<SnapshotIssue> {
        let times = self.normalized_times();
        let mut issues = Vec::new();
        for (from, targets) in &self.times {
            for (to, forward) in targets {
                let backward = times
                    .get(&(normalize_name(to), normalize_name(from)))
                    .copied();
                if backward != Some(*forward) {
                    issues.push(SnapshotIssue::AsymmetricTime {
                        from: from.clone(),
                        to: to.clone(),
                        forward: *forward,
                        backward,
                    });
                }
            }
        }
        issues
    }

    /// Recorded times between stops that are not consecutive on any line
    pub fn non_adjacent_times(&self) -> Vec<SnapshotIssue> {
        let adjacent: HashSet<(String, String)> = self
            .lines
            .values()
            .flat_map(|stops| {
                stops.windows(2).flat_map(|pair| {
                    let (a, b) = (normalize_name(&pair[0]), normalize_name(&pair[1]));
                    [(a.clone(), b.clone()), (b, a)]
                })
            })
            .collect();

        self.times
            .iter()
            .flat_map(|(from, targets)| targets.keys().map(move |to| (from, to)))
            .filter(|(from, to)| !adjacent.contains(&(normalize_name(from), normalize_name(to))))
            .map(|(from, to)| SnapshotIssue::NonAdjacentTime {
                from: from.clone(),
                to: to.clone(),
            })
            .collect()
    }

    /// Consecutive stops further apart than `max_km`
    pub fn implausible_hops(&self, max_km: f64) -> Vec<SnapshotIssue> {
        let positions: HashMap<String, Position> = self
            .stops
            .iter()
            .map(|(name, position)| (normalize_name(name), *position))
            .collect();

        let mut issues = Vec::new();
        for (line, stops) in &self.lines {
            for pair in stops.windows(2) {
                let (Some(a), Some(b)) = (
                    positions.get(&normalize_name(&pair[0])),
                    positions.get(&normalize_name(&pair[1])),
                ) else {
                    continue;
                };
                let km = a.distance_km(*b);
                if km > max_km {
                    issues.push(SnapshotIssue::ImplausibleHop {
                        line: line.clone(),
                        from: pair[0].clone(),
                        to: pair[1].clone(),
                        km,
                    });
                }
            }
        }
        issues
    }

    /// Every issue, grouped by kind
    pub fn validate(&self, max_hop_km: f64) -> Vec<SnapshotIssue> {
        let mut issues = self.bad_line_ids();
        issues.extend(self.unknown_stops());
        issues.extend(self.asymmetric_times());
        issues.extend(self.non_adjacent_times());
        issues.extend(self.implausible_hops(max_hop_km));
        issues
    }

    /// Times keyed by normalized stop names. The first entry in key order
    /// wins when several spellings name the same pair.
    fn normalized_times(&self) -> HashMap<(String, String), u32> {
        let mut times = HashMap::new();
        for (from, targets) in &self.times {
            for (to, minutes) in targets {
                times
                    .entry((normalize_name(from), normalize_name(to)))
                    .or_insert(*minutes);
            }
        }
        times
    }
}
