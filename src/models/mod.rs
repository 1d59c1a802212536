pub mod coordinate;
pub mod workout;
pub mod workout_kind;

pub use coordinate::Coordinate;
pub use workout::{Workout, WorkoutDetails};
pub use workout_kind::WorkoutKind;
