use super::{coordinate::Coordinate, workout_kind::WorkoutKind};
use crate::utils::formatting::round1;
use chrono::{DateTime, Local};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// One logged session, pinned to the map location it was created from.
///
/// Fields are private: a workout is never modified after construction, and
/// the derived metric (pace or speed) is computed exactly once here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    id: String,
    date: String,
    coords: Coordinate,
    distance: f64, // km
    duration: f64, // min
    #[serde(flatten)]
    details: WorkoutDetails,
}

/// Variant part of a workout, persisted with an explicit `"type"` tag so a
/// reload rebuilds the right variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutDetails {
    Running {
        cadence: f64, // steps/min
        #[serde(deserialize_with = "number_or_string")]
        pace: f64, // min/km
    },
    Cycling {
        #[serde(rename = "elevGain", alias = "elev_gain")]
        elev_gain: f64, // m, any sign
        #[serde(deserialize_with = "number_or_string")]
        speed: f64, // km/hr
    },
}

impl Workout {
    pub fn running(
        id: impl Into<String>,
        created: DateTime<Local>,
        coords: Coordinate,
        distance: f64,
        duration: f64,
        cadence: f64,
    ) -> Self {
        Self {
            id: id.into(),
            date: date_label(created),
            coords,
            distance,
            duration,
            details: WorkoutDetails::Running {
                cadence,
                pace: round1(duration / distance),
            },
        }
    }

    pub fn cycling(
        id: impl Into<String>,
        created: DateTime<Local>,
        coords: Coordinate,
        distance: f64,
        duration: f64,
        elev_gain: f64,
    ) -> Self {
        Self {
            id: id.into(),
            date: date_label(created),
            coords,
            distance,
            duration,
            details: WorkoutDetails::Cycling {
                elev_gain,
                speed: round1(distance / duration),
            },
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Month-and-day label captured at creation, e.g. `October 16`.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn coords(&self) -> Coordinate {
        self.coords
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn details(&self) -> &WorkoutDetails {
        &self.details
    }

    pub fn kind(&self) -> WorkoutKind {
        match self.details {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    /// Pace for running, speed for cycling.
    pub fn metric(&self) -> f64 {
        match self.details {
            WorkoutDetails::Running { pace, .. } => pace,
            WorkoutDetails::Cycling { speed, .. } => speed,
        }
    }

    /// Cadence for running, elevation gain for cycling.
    pub fn quantity(&self) -> f64 {
        match self.details {
            WorkoutDetails::Running { cadence, .. } => cadence,
            WorkoutDetails::Cycling { elev_gain, .. } => elev_gain,
        }
    }

    /// `"<icon> <type> on <date>"`
    pub fn description(&self) -> String {
        let kind = self.kind();
        format!("{} {} on {}", kind.icon(), kind.as_str(), self.date)
    }
}

/// Time-based id: the last 10 digits of the creation instant in milliseconds.
pub fn id_from_time(created: DateTime<Local>) -> String {
    let millis = created.timestamp_millis().to_string();
    let start = millis.len().saturating_sub(10);
    millis[start..].to_string()
}

fn date_label(created: DateTime<Local>) -> String {
    created.format("%B %-d").to_string()
}

/// Older snapshots stored the derived metric as a preformatted string ("4.6").
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid number '{}'", s))),
    }
}
