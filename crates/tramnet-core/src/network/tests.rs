use super::*;
use crate::error::ErrorKind;
use crate::graph::{GraphOps, WeightedOps};

const LINE_11: [&str; 6] = [
    "Centralstationen",
    "Brunnsparken",
    "Järntorget",
    "Stigbergstorget",
    "Vagnhallen Majorna",
    "Hagen",
];

fn gothenburg() -> TransitNetwork {
    let mut network = TransitNetwork::new();
    for (name, lat, lon) in [
        ("Centralstationen", 57.7087, 11.9729),
        ("Brunnsparken", 57.7069, 11.9683),
        ("Järntorget", 57.6996, 11.9525),
        ("Stigbergstorget", 57.6986, 11.9356),
        ("Vagnhallen Majorna", 57.6935, 11.9214),
        ("Hagen", 57.6890, 11.9075),
        ("Chalmers", 57.6897, 11.9730),
        ("Tingvallsvägen", 57.7431, 12.0320),
    ] {
        network.add_stop(TramStop::new(name, lat, lon));
    }

    network.add_line(TramLine::new("11", LINE_11)).unwrap();
    for other in ["1", "2", "3", "4", "7", "9", "10", "13"] {
        network
            .add_line(TramLine::new(other, ["Brunnsparken", "Centralstationen"]))
            .unwrap();
    }

    for (pair, minutes) in LINE_11.windows(2).zip([2, 5, 6, 7, 6]) {
        network
            .set_transition_time(pair[0], pair[1], minutes)
            .unwrap();
    }
    network
}

#[test]
fn test_time_between_on_line_11() {
    let network = gothenburg();
    assert_eq!(
        network
            .time_between_stops("11", "Centralstationen", "Hagen")
            .unwrap(),
        26
    );
    assert_eq!(
        network
            .time_between_stops("11", "hagen", "CENTRALSTATIONEN")
            .unwrap(),
        26
    );
    assert_eq!(
        network
            .time_between_stops("11", "Järntorget", "Vagnhallen Majorna")
            .unwrap(),
        13
    );
}

#[test]
fn test_time_between_same_stop_is_zero() {
    let network = gothenburg();
    assert_eq!(network.time_between_stops("11", "Hagen", "hagen").unwrap(), 0);
}

#[test]
fn test_time_between_failures() {
    let network = gothenburg();

    let err = network.time_between_stops("99", "Hagen", "Järntorget").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = network
        .time_between_stops("11", "Hagen", "Chalmers")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_time_between_reports_missing_transition() {
    let mut network = TransitNetwork::new();
    network
        .add_line(TramLine::new("5", ["A", "B", "C"]))
        .unwrap();
    network.set_transition_time("A", "B", 3).unwrap();

    let err = network.time_between_stops("5", "A", "C").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingTransition);
    assert!(err.to_string().contains("B and C"), "got {err}");
}

#[test]
fn test_lines_via_centralstationen() {
    let network = gothenburg();
    assert_eq!(
        network.lines_via_stop("centralstationen").unwrap(),
        vec!["1", "2", "3", "4", "7", "9", "10", "11", "13"]
    );
}

#[test]
fn test_lines_via_unknown_stop_fails() {
    let network = gothenburg();
    let err = network.lines_via_stop("Centralstation").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_lines_via_stop_registered_after_line() {
    let mut network = TransitNetwork::new();
    network.add_line(TramLine::new("6", ["Kortedala", "Aprilgatan"])).unwrap();
    network.add_stop(TramStop::new("Kortedala", 57.75, 12.03));
    assert_eq!(network.lines_via_stop("kortedala").unwrap(), vec!["6"]);
}

#[test]
fn test_lines_between_requires_adjacency() {
    let network = gothenburg();
    assert_eq!(
        network
            .lines_between_stops("Brunnsparken", "Centralstationen")
            .unwrap(),
        vec!["1", "2", "3", "4", "7", "9", "10", "11", "13"]
    );
    assert_eq!(
        network
            .lines_between_stops("Järntorget", "BRUNNSPARKEN")
            .unwrap(),
        vec!["11"]
    );
    // Both on line 11, but not consecutive
    assert!(network
        .lines_between_stops("Centralstationen", "Hagen")
        .unwrap()
        .is_empty());
}

#[test]
fn test_lines_between_unknown_stop_fails() {
    let network = gothenburg();
    let err = network
        .lines_between_stops("Hagen", "Nowhere")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_set_transition_time_needs_adjacent_stops() {
    let mut network = gothenburg();
    let err = network
        .set_transition_time("Centralstationen", "Hagen", 4)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoSuchEdge);
    assert_eq!(network.transition_time("Centralstationen", "Hagen"), None);
}

#[test]
fn test_transition_times_are_symmetric() {
    let network = gothenburg();
    for pair in LINE_11.windows(2) {
        let forward = network.transition_time(pair[0], pair[1]);
        assert!(forward.is_some());
        assert_eq!(forward, network.transition_time(pair[1], pair[0]));
    }
    assert!(network.check_symmetry().is_empty());
}

#[test]
fn test_default_weight_is_not_a_recorded_time() {
    let network = gothenburg();
    // Line 1 edges exist with the default weight only
    assert!(network
        .graph()
        .contains_edge(&"centralstationen".to_string(), &"brunnsparken".to_string()));
    let mut untimed = TransitNetwork::new();
    untimed.add_line(TramLine::new("8", ["X", "Y"])).unwrap();
    assert_eq!(
        untimed.graph().get_weight(&"x".to_string(), &"y".to_string()),
        Some(1)
    );
    assert_eq!(untimed.transition_time("X", "Y"), None);
}

#[test]
fn test_add_line_rejects_duplicates() {
    let mut network = gothenburg();
    let err = network
        .add_line(TramLine::new("11", ["Hagen", "Chalmers"]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidQuery);
    assert!(network.add_line(TramLine::new(" ", ["A"])).is_err());
}

#[test]
fn test_geo_distance() {
    let network = gothenburg();
    let km = network.geo_distance("Centralstationen", "Chalmers").unwrap();
    assert!((km - 2.11).abs() < 0.05, "got {km}");
    assert_eq!(
        network
            .geo_distance("Centralstationen", "centralSTATIONEN")
            .unwrap(),
        0.0
    );
    assert_eq!(
        network.geo_distance("Hagen", "Atlantis").unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn test_registry_listings() {
    let network = gothenburg();
    assert_eq!(network.all_stops().len(), 8);
    assert_eq!(network.all_stops()[0], "Brunnsparken");
    assert_eq!(
        network.all_lines(),
        vec!["1", "2", "3", "4", "7", "9", "10", "11", "13"]
    );
    assert_eq!(network.line_stops("11").unwrap().len(), 6);
    assert_eq!(
        network.stop_position("hagen").unwrap(),
        Position::new(57.6890, 11.9075)
    );
    assert!(network.stop("Nowhere").is_none());
    assert!(network.unregistered_stops().is_empty());
}

#[test]
fn test_extreme_positions() {
    assert!(TransitNetwork::new().extreme_positions().is_none());

    let ((lat_lo, lat_hi), (lon_lo, lon_hi)) = gothenburg().extreme_positions().unwrap();
    assert_eq!((lat_lo, lat_hi), (57.6890, 57.7431));
    assert_eq!((lon_lo, lon_hi), (11.9075, 12.0320));
}

#[test]
fn test_route_by_time_and_hops() {
    let network = gothenburg();

    let route = network
        .route("centralstationen", "Hagen", RouteMetric::Time)
        .unwrap();
    assert_eq!(route.cost, 26);
    assert_eq!(route.stops.first().map(String::as_str), Some("Centralstationen"));
    assert_eq!(route.stops.last().map(String::as_str), Some("Hagen"));

    let hops = network
        .route("Centralstationen", "Hagen", RouteMetric::Hops)
        .unwrap();
    assert_eq!(hops.cost, 5);
    assert_eq!(hops.hops(), 5);
}

#[test]
fn test_route_by_distance_uses_metres() {
    let network = gothenburg();
    let route = network
        .route("Centralstationen", "Brunnsparken", RouteMetric::Distance)
        .unwrap();
    let expected = network
        .geo_distance("Centralstationen", "Brunnsparken")
        .unwrap();
    assert_eq!(route.cost, (expected * 1000.0).round() as u64);
}

#[test]
fn test_route_failures() {
    let network = gothenburg();
    let err = network
        .route("Hagen", "Chalmers", RouteMetric::Time)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unreachable);
    assert_eq!(err.to_string(), "Chalmers is not reachable from Hagen");

    let err = network
        .route("Hagen", "Nowhere", RouteMetric::Time)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_route_to_self() {
    let route = gothenburg()
        .route("Hagen", "HAGEN", RouteMetric::Time)
        .unwrap();
    assert_eq!(route.cost, 0);
    assert_eq!(route.stops, vec!["Hagen"]);
}

#[test]
fn test_snapshot_round_trip_preserves_answers() {
    let network = gothenburg();
    let snapshot = network.to_snapshot();
    assert_eq!(snapshot.stops.len(), 8);
    assert_eq!(snapshot.times["Centralstationen"]["Brunnsparken"], 2);
    assert_eq!(snapshot.times["Brunnsparken"]["Centralstationen"], 2);

    let rebuilt = TransitNetwork::from_snapshot(&snapshot, &NetworkConfig::default()).unwrap();
    assert_eq!(
        rebuilt
            .time_between_stops("11", "Centralstationen", "Hagen")
            .unwrap(),
        26
    );
    assert_eq!(rebuilt.all_lines(), network.all_lines());
}

fn inconsistent_snapshot() -> NetworkSnapshot {
    serde_json::from_str(
        r#"{
            "stops": {
                "A": { "lat": 57.70, "lon": 11.97 },
                "B": { "lat": 57.71, "lon": 11.98 },
                "C": { "lat": 57.72, "lon": 11.99 }
            },
            "lines": { "1": ["A", "B", "C", "Ghost"] },
            "times": {
                "A": { "B": 2, "C": 9 },
                "B": { "A": 3, "C": 4 },
                "C": { "B": 4 }
            }
        }"#,
    )
    .unwrap()
}

#[test]
fn test_lenient_snapshot_skips_bad_records() {
    let network =
        TransitNetwork::from_snapshot(&inconsistent_snapshot(), &NetworkConfig::default())
            .unwrap();

    // First value seen wins for the conflicting pair
    assert_eq!(network.transition_time("A", "B"), Some(2));
    assert_eq!(network.transition_time("B", "A"), Some(2));
    assert_eq!(network.transition_time("A", "C"), None);
    assert_eq!(network.time_between_stops("1", "A", "C").unwrap(), 6);
    assert_eq!(network.unregistered_stops(), vec!["Ghost"]);
}

#[test]
fn test_strict_snapshot_is_rejected() {
    let config = NetworkConfig {
        strict: true,
        ..Default::default()
    };
    let err = TransitNetwork::from_snapshot(&inconsistent_snapshot(), &config).unwrap_err();
    assert!(matches!(err, TramError::InvalidSnapshot { count, .. } if count >= 3));
}

fn case_clash_snapshot() -> NetworkSnapshot {
    serde_json::from_str(
        r#"{
            "stops": {
                "Hagen": { "lat": 57.6890, "lon": 11.9075 },
                "Järntorget": { "lat": 57.6996, "lon": 11.9525 }
            },
            "lines": {
                "Röd": ["Hagen", "Järntorget"],
                "röd": ["Järntorget", "Hagen"],
                "": ["Hagen"]
            },
            "times": {
                "Hagen": { "Järntorget": 5 },
                "järntorget": { "hagen": 5 }
            }
        }"#,
    )
    .unwrap()
}

#[test]
fn test_lenient_snapshot_skips_bad_line_ids() {
    let network =
        TransitNetwork::from_snapshot(&case_clash_snapshot(), &NetworkConfig::default()).unwrap();

    assert_eq!(network.all_lines(), vec!["Röd"]);
    assert_eq!(network.line_stops("RÖD").unwrap(), ["Hagen", "Järntorget"]);
    assert_eq!(
        network.time_between_stops("röd", "Järntorget", "Hagen").unwrap(),
        5
    );
}

#[test]
fn test_strict_snapshot_reports_bad_line_ids() {
    let config = NetworkConfig {
        strict: true,
        ..Default::default()
    };
    let err = TransitNetwork::from_snapshot(&case_clash_snapshot(), &config).unwrap_err();
    match err {
        TramError::InvalidSnapshot { count, first } => {
            assert_eq!(count, 2);
            assert!(first.contains("is blank"), "got {first}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_strict_snapshot_matches_times_case_insensitively() {
    let mut snapshot = case_clash_snapshot();
    snapshot.lines.retain(|id, _| id == "Röd");
    let config = NetworkConfig {
        strict: true,
        ..Default::default()
    };

    let network = TransitNetwork::from_snapshot(&snapshot, &config).unwrap();
    assert_eq!(network.transition_time("hagen", "JÄRNTORGET"), Some(5));
}

#[test]
fn test_config_default_weight_applies_to_new_edges() {
    let config = NetworkConfig {
        default_weight: 4,
        ..Default::default()
    };
    let mut network = TransitNetwork::with_config(&config);
    network.add_line(TramLine::new("1", ["A", "B", "C"])).unwrap();
    network.set_transition_time("A", "B", 1).unwrap();

    let route = network.route("A", "C", RouteMetric::Time).unwrap();
    assert_eq!(route.cost, 5);
}

#[test]
fn test_from_source_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tramnetwork.json");
    gothenburg().to_snapshot().save(&path).unwrap();

    let network =
        TransitNetwork::from_source(&NetworkSource::Path(path), &NetworkConfig::default())
            .unwrap();
    assert_eq!(network.lines_via_stop("Hagen").unwrap(), vec!["11"]);

    let missing = TransitNetwork::from_source(
        &NetworkSource::Path(dir.path().join("missing.json")),
        &NetworkConfig::default(),
    );
    assert!(matches!(missing, Err(TramError::Io(_))));
}
