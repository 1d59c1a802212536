use crate::errors::{AppError, AppResult};
use crate::models::WorkoutKind;
use crate::utils::formatting::round1;

pub const RUNNING_INVALID: &str = "All inputs must be positive numbers.";
pub const CYCLING_INVALID: &str = "All inputs must be positive numbers, except elevation gain.";

/// Raw form values, exactly as typed.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub kind: String,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

/// Form values that passed validation for their workout type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidForm {
    Running {
        distance: f64,
        duration: f64,
        cadence: f64,
    },
    Cycling {
        distance: f64,
        duration: f64,
        elev_gain: f64,
    },
}

/// Numeric coercion of a form field: blank is 0, anything unparsable is NaN.
///
/// Unsigned `0x`/`0o`/`0b` integer literals are read in their radix, as a
/// browser form would. Unlike the browser, `inf`/`infinity` in any case parse
/// as infinite; validation rejects them either way.
pub fn coerce(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    let radix = match s.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u128::from_str_radix(&s[2..], radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

fn all_positive(values: &[f64]) -> bool {
    values.iter().all(|v| *v > 0.0)
}

pub fn validate(input: &FormInput) -> AppResult<ValidForm> {
    let kind = WorkoutKind::from_code(&input.kind)
        .ok_or_else(|| AppError::InvalidWorkoutType(input.kind.clone()))?;

    let distance = coerce(&input.distance);
    let duration = coerce(&input.duration);

    match kind {
        WorkoutKind::Running => {
            let cadence = coerce(&input.cadence);
            let values = [distance, duration, cadence];
            // the stored pace must be a finite number too
            if !all_finite(&values)
                || !all_positive(&values)
                || !round1(duration / distance).is_finite()
            {
                return Err(AppError::Validation(RUNNING_INVALID.into()));
            }
            Ok(ValidForm::Running {
                distance,
                duration,
                cadence,
            })
        }
        WorkoutKind::Cycling => {
            let elev_gain = coerce(&input.elevation);
            // elevation gain may be zero or negative
            if !all_finite(&[distance, duration, elev_gain])
                || !all_positive(&[distance, duration])
                || !round1(distance / duration).is_finite()
            {
                return Err(AppError::Validation(CYCLING_INVALID.into()));
            }
            Ok(ValidForm::Cycling {
                distance,
                duration,
                elev_gain,
            })
        }
    }
}
