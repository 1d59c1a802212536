use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Geographic point in decimal degrees.
///
/// Stored as the two-element array `[lat, lng]`, the same shape used by
/// snapshots written from the browser version of the app.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Parse `"lat,lng"` (spaces allowed around the comma).
    pub fn parse(s: &str) -> AppResult<Self> {
        let caps = coordinate_re()
            .captures(s.trim())
            .ok_or_else(|| AppError::InvalidCoordinate(s.to_string()))?;

        let lat: f64 = caps["lat"]
            .parse()
            .map_err(|_| AppError::InvalidCoordinate(s.to_string()))?;
        let lng: f64 = caps["lng"]
            .parse()
            .map_err(|_| AppError::InvalidCoordinate(s.to_string()))?;

        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(AppError::InvalidCoordinate(format!(
                "{} (latitude must be within ±90, longitude within ±180)",
                s
            )));
        }

        Ok(Self { lat, lng })
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(v: [f64; 2]) -> Self {
        Self { lat: v[0], lng: v[1] }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.lat, c.lng]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5},{:.5}", self.lat, self.lng)
    }
}

fn coordinate_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<lat>[+-]?\d+(?:\.\d+)?)\s*,\s*(?P<lng>[+-]?\d+(?:\.\d+)?)$")
            .expect("coordinate regex is valid")
    })
}
