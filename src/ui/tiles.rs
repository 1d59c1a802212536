//! Workout list tiles: one per workout, in list order.

use crate::models::{Workout, WorkoutKind};
use crate::utils::formatting::{bold, num, one_decimal};
use crate::utils::table::{Column, Table};

#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub workout_id: String,
    pub kind: WorkoutKind,
    pub heading: String,
    pub distance: String,
    pub duration: String,
    pub metric: String,
    pub quantity: String,
}

impl Tile {
    pub fn from_workout(w: &Workout) -> Self {
        let kind = w.kind();
        Self {
            workout_id: w.id().to_string(),
            kind,
            heading: format!("{} on {}", kind.title(), w.date()),
            distance: format!("{} {} km", kind.icon(), num(w.distance())),
            duration: format!("⏱ {} min", num(w.duration())),
            metric: format!("⚡️ {} {}", one_decimal(w.metric()), kind.movement_unit()),
            quantity: format!(
                "{} {} {}",
                kind.quantity_icon(),
                num(w.quantity()),
                kind.quantity_unit()
            ),
        }
    }
}

#[derive(Debug, Default)]
pub struct TileBoard {
    tiles: Vec<Tile>,
}

impl TileBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_tile(&mut self, w: &Workout) {
        self.tiles.push(Tile::from_workout(w));
    }

    /// Drop the most recent tile (creation rolled back).
    pub fn pop(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn render(&self) -> String {
        let mut table = Table::new(vec![
            Column::new("ID", 11),
            Column::new("WORKOUT", 22),
            Column::new("DISTANCE", 12),
            Column::new("DURATION", 12),
            Column::new("PACE/SPEED", 16),
            Column::new("CAD/ELEV", 12),
        ]);

        for t in &self.tiles {
            table.add_row(vec![
                t.workout_id.clone(),
                t.heading.clone(),
                t.distance.clone(),
                t.duration.clone(),
                t.metric.clone(),
                t.quantity.clone(),
            ]);
        }

        format!("{}\n{}", bold("Workouts"), table.render())
    }
}
