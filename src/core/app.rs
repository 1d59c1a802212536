//! Application controller.
//!
//! `App` owns the workout list (the single source of truth), the creation
//! form state, the store, the map and the tile board. Every user action
//! arrives as an `AppEvent` and is routed to one handler; handlers either
//! complete fully or leave the state untouched and return the error.

use super::validate::{FormInput, ValidForm, validate};
use crate::errors::{AppError, AppResult};
use crate::map::{MapView, Marker};
use crate::models::workout::id_from_time;
use crate::models::{Coordinate, Workout, WorkoutKind};
use crate::storage::WorkoutStore;
use crate::ui::tiles::TileBoard;
use chrono::Local;

pub const DEFAULT_ZOOM: u8 = 13;

/// Which type-specific input the form currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Cadence,
    Elevation,
}

impl FormField {
    pub fn for_kind(kind: WorkoutKind) -> Self {
        match kind {
            WorkoutKind::Running => FormField::Cadence,
            WorkoutKind::Cycling => FormField::Elevation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormState {
    Hidden,
    AwaitingInput { pending: Coordinate },
    Submitting { pending: Coordinate },
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    MapClicked(Coordinate),
    TypeChanged(WorkoutKind),
    FormSubmitted(FormInput),
    TileClicked(String),
    DeleteAll,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    FormOpened(Coordinate),
    FieldShown(FormField),
    Created(String),
    Centered(Coordinate),
    Cleared(usize),
}

pub struct App<S, M> {
    workouts: Vec<Workout>,
    form: FormState,
    field: FormField,
    store: S,
    map: Option<M>,
    tiles: TileBoard,
    home: Option<Coordinate>,
    zoom: u8,
}

impl<S: WorkoutStore, M: MapView> App<S, M> {
    pub fn new(store: S, zoom: u8) -> Self {
        Self {
            workouts: Vec::new(),
            form: FormState::Hidden,
            field: FormField::Cadence,
            store,
            map: None,
            tiles: TileBoard::new(),
            home: None,
            zoom,
        }
    }

    /// Attach the map once the current position is known. Its initial
    /// center becomes the home view restored by a bulk delete.
    pub fn load_map(&mut self, mut map: M) {
        let home = map.center();
        map.set_view(home, self.zoom, false);
        map.clear_markers();
        for w in &self.workouts {
            map.add_marker(Marker::for_workout(w));
        }
        tracing::info!(%home, zoom = self.zoom, markers = self.workouts.len(), "map loaded");
        self.home = Some(home);
        self.map = Some(map);
    }

    /// Replace the list with the stored snapshot and render it.
    pub fn load_snapshot(&mut self) {
        self.workouts = self.store.load_all();
        self.tiles.clear();
        if let Some(map) = self.map.as_mut() {
            map.clear_markers();
        }
        for w in &self.workouts {
            self.tiles.render_tile(w);
            if let Some(map) = self.map.as_mut() {
                map.add_marker(Marker::for_workout(w));
            }
        }
        tracing::debug!(count = self.workouts.len(), "snapshot rendered");
    }

    pub fn dispatch(&mut self, event: AppEvent) -> AppResult<Outcome> {
        tracing::trace!(?event, "dispatch");
        match event {
            AppEvent::MapClicked(at) => self.on_map_click(at),
            AppEvent::TypeChanged(kind) => Ok(self.on_type_change(kind)),
            AppEvent::FormSubmitted(input) => self.on_submit(&input),
            AppEvent::TileClicked(id) => self.on_tile_click(&id),
            AppEvent::DeleteAll => self.on_delete_all(),
        }
    }

    fn on_map_click(&mut self, at: Coordinate) -> AppResult<Outcome> {
        if self.map.is_none() {
            return Err(AppError::MapNotReady);
        }
        self.form = FormState::AwaitingInput { pending: at };
        Ok(Outcome::FormOpened(at))
    }

    fn on_type_change(&mut self, kind: WorkoutKind) -> Outcome {
        self.field = FormField::for_kind(kind);
        Outcome::FieldShown(self.field)
    }

    fn on_submit(&mut self, input: &FormInput) -> AppResult<Outcome> {
        let pending = match self.form {
            FormState::AwaitingInput { pending } => pending,
            _ => return Err(AppError::FormHidden),
        };
        self.form = FormState::Submitting { pending };

        let valid = match validate(input) {
            Ok(v) => v,
            Err(e) => {
                self.form = FormState::AwaitingInput { pending };
                return Err(e);
            }
        };

        let created = Local::now();
        let id = self.next_id(&id_from_time(created));
        let workout = match valid {
            ValidForm::Running {
                distance,
                duration,
                cadence,
            } => Workout::running(id, created, pending, distance, duration, cadence),
            ValidForm::Cycling {
                distance,
                duration,
                elev_gain,
            } => Workout::cycling(id, created, pending, distance, duration, elev_gain),
        };

        let marker = Marker::for_workout(&workout);
        self.tiles.render_tile(&workout);
        self.workouts.push(workout);

        if let Err(e) = self.store.save_all(&self.workouts) {
            // keep list, tiles and slot in step
            self.workouts.pop();
            self.tiles.pop();
            self.form = FormState::AwaitingInput { pending };
            return Err(e);
        }

        if let Some(map) = self.map.as_mut() {
            map.add_marker(marker.clone());
        }
        self.form = FormState::Hidden;

        tracing::info!(id = %marker.workout_id, popup = %marker.popup, "workout created");
        Ok(Outcome::Created(marker.workout_id))
    }

    fn on_tile_click(&mut self, id: &str) -> AppResult<Outcome> {
        let coords = self
            .workouts
            .iter()
            .find(|w| w.id() == id)
            .map(Workout::coords)
            .ok_or_else(|| AppError::WorkoutNotFound(id.to_string()))?;

        let map = self.map.as_mut().ok_or(AppError::MapNotReady)?;
        map.set_view(coords, self.zoom, true);
        Ok(Outcome::Centered(coords))
    }

    fn on_delete_all(&mut self) -> AppResult<Outcome> {
        self.store.clear()?;

        let removed = self.workouts.len();
        self.workouts.clear();
        self.tiles.clear();
        self.form = FormState::Hidden;
        if let Some(map) = self.map.as_mut() {
            map.clear_markers();
            if let Some(home) = self.home {
                map.set_view(home, self.zoom, false);
            }
        }

        tracing::info!(removed, "all workouts deleted");
        Ok(Outcome::Cleared(removed))
    }

    /// Time-based ids can collide when two workouts land in the same
    /// millisecond; bump until free.
    fn next_id(&self, base: &str) -> String {
        let mut n: u64 = base.parse().unwrap_or(0);
        loop {
            let id = format!("{:010}", n % 10_000_000_000);
            if !self.workouts.iter().any(|w| w.id() == id) {
                return id;
            }
            n += 1;
        }
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn form(&self) -> FormState {
        self.form
    }

    pub fn field(&self) -> FormField {
        self.field
    }

    pub fn map(&self) -> Option<&M> {
        self.map.as_ref()
    }

    pub fn tiles(&self) -> &TileBoard {
        &self.tiles
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }
}
