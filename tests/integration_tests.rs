use geonav::api::{
    JsonFilePlaceSource, MarkerFormatter, NavigationSession, OutputFormat, StaticPlaceSource,
    StaticPositionSource, UnavailablePlaceSource,
};
use geonav::{AppConfig, ConfigurationManager, DestinationOrigin, ExternalPlace, GeoCoordinate, PositionFix};
use std::fs;

const TIMES_SQUARE: GeoCoordinate = GeoCoordinate::new(40.7580, -73.9855);

#[test]
fn test_offline_session_uses_fallback_points() {
    let mut session = NavigationSession::new(
        AppConfig::default(),
        Box::new(StaticPositionSource::from_fix(PositionFix::new(TIMES_SQUARE).with_accuracy(12.0))),
        Box::new(UnavailablePlaceSource::new("network down")),
    )
    .unwrap();

    let pass = session.navigate().unwrap();
    assert_eq!(pass.destinations.origin(), DestinationOrigin::Fallback);

    let labels: Vec<&str> = pass.markers.iter().map(|m| m.label.as_str()).collect();
    assert_eq!(labels[0], "North\n100m");
    assert!(labels[1].starts_with("East\n"));
    assert_eq!(labels[2], "South\n100m");
    assert!(labels[4].starts_with("Northeast\n"));
}

#[test]
fn test_session_with_saved_search_response() {
    let path = std::env::temp_dir().join(format!("geonav_it_places_{}.json", std::process::id()));
    let venues: Vec<String> = (0..7)
        .map(|i| {
            format!(
                r#"{{ "name": "Venue {}", "location": {{ "lat": {}, "lng": -73.9855 }} }}"#,
                i,
                40.7580 + 0.0005 * (i + 1) as f64
            )
        })
        .collect();
    fs::write(&path, format!(r#"{{ "response": {{ "venues": [{}] }} }}"#, venues.join(","))).unwrap();

    let mut session = NavigationSession::new(
        AppConfig::default(),
        Box::new(StaticPositionSource::new(TIMES_SQUARE)),
        Box::new(JsonFilePlaceSource::new(&path)),
    )
    .unwrap();

    let pass = session.navigate().unwrap();
    let names: Vec<&str> = pass.destinations.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["Venue 0", "Venue 1", "Venue 2", "Venue 3", "Venue 4"]);

    let _ = fs::remove_file(path);
}

#[test]
fn test_configured_query_reaches_place_source() {
    let mut manager = ConfigurationManager::new();
    manager.set_credentials("client", "secret");
    manager.set_search_radius(500.0).unwrap();
    manager.set_result_limit(30).unwrap();

    let places = vec![ExternalPlace::new("Bryant Park", GeoCoordinate::new(40.7536, -73.9832))];
    let session_config = manager.into_config();
    let mut session = NavigationSession::new(
        session_config,
        Box::new(StaticPositionSource::new(TIMES_SQUARE)),
        Box::new(StaticPlaceSource::new(places)),
    )
    .unwrap();

    let query = session.query_for(TIMES_SQUARE);
    assert_eq!(query.radius_m, 500.0);
    assert_eq!(query.limit, 30);
    assert!(query.to_url().contains("&client_id=client&client_secret=secret&"));

    let pass = session.navigate().unwrap();
    assert_eq!(pass.destinations.len(), 1);

    let rendered = MarkerFormatter::new(TIMES_SQUARE)
        .with_format(OutputFormat::JsonPretty)
        .render(&pass.markers)
        .unwrap();
    assert!(rendered.contains("\"Bryant Park\""));
    assert!(rendered.contains("\"color\": \"#FF0000\""));
}

fn geonav(args: &[&str]) -> String {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_geonav"))
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_cli_marker_prints_north_marker() {
    let stdout = geonav(&["marker", "40.7580", "-73.9855"]);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("User position: lat=40.758000"));
    assert!(lines[1].starts_with("[0] North Marker 111m @ 0°"), "got {}", lines[1]);
    assert!(lines[1].contains("lat=40.759000"));
}

#[test]
fn test_cli_places_lists_every_nearby_venue() {
    let path = std::env::temp_dir().join(format!("geonav_cli_places_{}.json", std::process::id()));
    let venues: Vec<String> = (0..8)
        .map(|i| {
            format!(
                r#"{{ "name": "Stop {}", "location": {{ "lat": {}, "lng": -73.9855 }} }}"#,
                i,
                40.7580 + 0.0005 * (i + 1) as f64
            )
        })
        .collect();
    fs::write(&path, format!(r#"{{ "response": {{ "venues": [{}] }} }}"#, venues.join(","))).unwrap();

    let stdout = geonav(&["places", "40.7580", "-73.9855", "--places", path.to_str().unwrap(), "--format", "json"]);
    let markers: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let names: Vec<&str> = markers
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["destination"]["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 8);
    assert_eq!(names[0], "Stop 0");
    assert_eq!(names[7], "Stop 7");

    let _ = fs::remove_file(path);
}
