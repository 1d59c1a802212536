//! Unified application error type.
//! All modules (core, storage, map, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Platform
    // ---------------------------
    #[error("Can't find location.")]
    GeolocationUnavailable,

    #[error("The map is not loaded yet: no location available")]
    MapNotReady,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid coordinate: {0} (expected LAT,LNG)")]
    InvalidCoordinate(String),

    #[error("Invalid workout type: {0} (use 'running' or 'cycling')")]
    InvalidWorkoutType(String),

    // ---------------------------
    // Form / logic errors
    // ---------------------------
    #[error("{0}")]
    Validation(String),

    #[error("No map location selected: click on the map first")]
    FormHidden,

    #[error("No workout with id {0}")]
    WorkoutNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
