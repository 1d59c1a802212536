//! Map adapter. The controller only needs "show a point", "center on a point"
//! and "forget all points"; click notification comes in as an `AppEvent`.

mod geojson;

pub use geojson::GeoJsonMap;

use crate::models::{Coordinate, Workout};

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub workout_id: String,
    pub coords: Coordinate,
    pub popup: String,
    pub class_name: String,
}

impl Marker {
    pub fn for_workout(w: &Workout) -> Self {
        Self {
            workout_id: w.id().to_string(),
            coords: w.coords(),
            popup: w.description(),
            class_name: format!("{}-popup", w.kind().as_str()),
        }
    }
}

pub trait MapView {
    fn set_view(&mut self, center: Coordinate, zoom: u8, animate: bool);
    fn add_marker(&mut self, marker: Marker);
    fn clear_markers(&mut self);

    fn center(&self) -> Coordinate;
    fn zoom(&self) -> u8;
    fn markers(&self) -> &[Marker];
}
