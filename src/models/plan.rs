//! Wire types for the planning service request/response.
//! Field names mirror the service JSON one to one.

use super::segment::SegmentRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct PlanRequest {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub current_cycle_hours_used: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
}

/// Stop categories the planner can schedule along the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopKind {
    Pickup,
    Break,
    Rest,
    Fuel,
    Dropoff,
}

impl StopKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopKind::Pickup => "pickup",
            StopKind::Break => "break",
            StopKind::Rest => "rest",
            StopKind::Fuel => "fuel",
            StopKind::Dropoff => "dropoff",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stop {
    #[serde(rename = "type")]
    pub kind: StopKind,
    pub eta: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub duration_hours: f64,
}

/// GeoJSON-style line geometry. Coordinates come as `[lon, lat]` pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub geometry: Option<RouteGeometry>,
    #[serde(default)]
    pub steps: Vec<serde_json::Value>,
}

/// One calendar day of the returned ELD log. Segments are expected in
/// chronological order; the layout engine tolerates violations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EldDayRecord {
    pub date: String,
    pub segments: Vec<SegmentRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripSummary {
    pub distance_miles: f64,
    pub duration_hours: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub route: Route,
    pub stops: Vec<Stop>,
    pub eld_days: Vec<EldDayRecord>,
    pub summary: TripSummary,
}
