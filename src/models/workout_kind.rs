use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase, `r`/`c` shortcuts)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "running" | "run" | "r" => Some(WorkoutKind::Running),
            "cycling" | "cycle" | "c" => Some(WorkoutKind::Cycling),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃‍♂️",
            WorkoutKind::Cycling => "🚴‍♂️",
        }
    }

    /// Unit of the derived metric (pace or speed).
    pub fn movement_unit(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "min/km",
            WorkoutKind::Cycling => "km/hr",
        }
    }

    /// Icon and unit of the type-specific quantity (cadence or elevation gain).
    pub fn quantity_icon(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "🦶",
            WorkoutKind::Cycling => "⛰",
        }
    }

    pub fn quantity_unit(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "spm",
            WorkoutKind::Cycling => "m",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_case_insensitive() {
        assert_eq!(WorkoutKind::from_code("Running"), Some(WorkoutKind::Running));
        assert_eq!(WorkoutKind::from_code(" C "), Some(WorkoutKind::Cycling));
        assert_eq!(WorkoutKind::from_code("swimming"), None);
    }
}
