#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtp() -> Command {
    cargo_bin_cmd!("rtripplan")
}

/// A two-day planning response as the service returns it.
pub const SAMPLE_RESPONSE: &str = r#"{
  "route": {
    "geometry": {
      "type": "LineString",
      "coordinates": [[-122.431297, 37.773972], [-121.8947, 36.6002], [-118.2437, 34.0522]]
    },
    "steps": []
  },
  "stops": [
    { "type": "pickup", "eta": "2024-01-01T09:00:00", "lat": 34.0522, "lon": -118.2437, "duration_hours": 1.0 },
    { "type": "fuel", "eta": "2024-01-01T15:00:00", "lat": null, "lon": null, "duration_hours": 0.5 },
    { "type": "dropoff", "eta": "2024-01-02T10:00:00", "lat": 36.1699, "lon": -115.1398, "duration_hours": 1.0 }
  ],
  "eld_days": [
    {
      "date": "2024-01-01",
      "segments": [
        { "start": "2024-01-01T00:00:00", "end": "2024-01-01T08:00:00", "status": "OFF", "note": "" },
        { "start": "2024-01-01T08:00:00", "end": "2024-01-01T09:00:00", "status": "ON", "note": "Pickup" },
        { "start": "2024-01-01T09:00:00", "end": "2024-01-01T17:00:00", "status": "D", "note": "Drive to Barstow" },
        { "start": "2024-01-01T17:00:00", "end": "2024-01-02T00:00:00", "status": "SB", "note": "" }
      ]
    },
    {
      "date": "2024-01-02",
      "segments": [
        { "start": "2024-01-02T00:00:00", "end": "2024-01-02T06:00:00", "status": "SB", "note": "" },
        { "start": "2024-01-02T06:00:00", "end": "2024-01-02T10:00:00", "status": "D", "note": "Drive to Las Vegas" },
        { "start": "2024-01-02T10:00:00", "end": "2024-01-02T11:00:00", "status": "ON", "note": "Dropoff" },
        { "start": "2024-01-02T11:00:00", "end": "2024-01-03T00:00:00", "status": "OFF", "note": "" }
      ]
    }
  ],
  "summary": { "distance_miles": 650.0, "duration_hours": 26.5 }
}"#;

/// Same shape, but the second segment of the only day carries a status
/// the catalog does not know.
pub const BAD_STATUS_RESPONSE: &str = r#"{
  "route": { "geometry": null, "steps": [] },
  "stops": [],
  "eld_days": [
    {
      "date": "2024-03-05",
      "segments": [
        { "start": "2024-03-05T00:00:00", "end": "2024-03-05T06:00:00", "status": "OFF", "note": "" },
        { "start": "2024-03-05T06:00:00", "end": "2024-03-05T10:00:00", "status": "XX", "note": "" },
        { "start": "2024-03-05T10:00:00", "end": "2024-03-05T18:00:00", "status": "D", "note": "" }
      ]
    }
  ],
  "summary": { "distance_miles": 120.0, "duration_hours": 4.0 }
}"#;

/// Write a fixture response into the system temp dir and return its path.
pub fn write_fixture(name: &str, contents: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtripplan.json", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, contents).expect("failed to write fixture");
    p
}

/// Create a fresh output directory path inside the system temp dir.
pub fn temp_out_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtripplan_out", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_dir_all(&p).ok();
    p
}

/// Create a temporary output file path and ensure it does not exist.
pub fn temp_out_file(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
