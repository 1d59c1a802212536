//! Snapshot persistence: the whole workout list lives in one named slot and
//! is always written or read as a unit.

mod json_file;

pub use json_file::JsonFileStore;

use crate::errors::AppResult;
use crate::models::Workout;
use serde_json::Value;
use std::cell::RefCell;

pub trait WorkoutStore {
    /// Read the snapshot. Absent or unreadable data yields an empty list.
    fn load_all(&self) -> Vec<Workout>;

    /// Overwrite the slot with the full list.
    fn save_all(&self, workouts: &[Workout]) -> AppResult<()>;

    /// Remove the slot entirely.
    fn clear(&self) -> AppResult<()>;
}

/// Decode a raw snapshot. A document that is not a JSON array counts as
/// "no prior workouts"; entries that cannot be decoded are dropped.
pub fn decode_snapshot(raw: &str) -> Vec<Workout> {
    let entries: Vec<Value> = match serde_json::from_str(raw) {
        Ok(Value::Array(entries)) => entries,
        Ok(other) => {
            tracing::debug!(kind = ?json_kind(&other), "snapshot is not an array; ignoring");
            return Vec::new();
        }
        Err(e) => {
            tracing::debug!(error = %e, "snapshot is not valid JSON; ignoring");
            return Vec::new();
        }
    };

    let total = entries.len();
    let workouts: Vec<Workout> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, v)| match serde_json::from_value::<Workout>(v) {
            Ok(w) => Some(w),
            Err(e) => {
                tracing::warn!(index = i, error = %e, "skipping undecodable workout");
                None
            }
        })
        .collect();

    tracing::debug!(total, loaded = workouts.len(), "snapshot decoded");
    workouts
}

pub fn encode_snapshot(workouts: &[Workout]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(workouts)?)
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// In-process slot for exercising the controller without touching disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: &str) -> Self {
        Self {
            slot: RefCell::new(Some(raw.to_string())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl WorkoutStore for MemoryStore {
    fn load_all(&self) -> Vec<Workout> {
        self.slot
            .borrow()
            .as_deref()
            .map(decode_snapshot)
            .unwrap_or_default()
    }

    fn save_all(&self, workouts: &[Workout]) -> AppResult<()> {
        *self.slot.borrow_mut() = Some(encode_snapshot(workouts)?);
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;
    use chrono::Local;

    fn sample() -> Vec<Workout> {
        let now = Local::now();
        vec![
            Workout::running("1", now, Coordinate::new(51.5, -0.1), 5.2, 24.0, 178.0),
            Workout::cycling("2", now, Coordinate::new(51.6, -0.2), 20.0, 60.0, -5.0),
        ]
    }

    #[test]
    fn snapshot_round_trip_keeps_fields_and_variants() {
        let store = MemoryStore::new();
        let list = sample();
        store.save_all(&list).unwrap();
        assert_eq!(store.load_all(), list);
    }

    #[test]
    fn huge_but_valid_metrics_survive_reload() {
        let now = Local::now();
        let list = vec![
            Workout::cycling("big", now, Coordinate::new(0.0, 0.0), 1e300, 1.0, 0.0),
            Workout::running("slow", now, Coordinate::new(0.0, 0.0), 1e-300, 1.0, 170.0),
        ];
        let store = MemoryStore::new();
        store.save_all(&list).unwrap();

        let raw = store.raw().unwrap();
        assert!(!raw.contains("null"));
        assert_eq!(store.load_all(), list);
    }

    #[test]
    fn absent_or_garbage_slot_loads_empty() {
        assert!(MemoryStore::new().load_all().is_empty());
        assert!(MemoryStore::with_raw("not json").load_all().is_empty());
        assert!(MemoryStore::with_raw("null").load_all().is_empty());
        assert!(MemoryStore::with_raw("{\"a\":1}").load_all().is_empty());
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let good = serde_json::to_value(&sample()[0]).unwrap();
        let raw = serde_json::json!([good, {"type": "swimming"}, 42]).to_string();
        let loaded = MemoryStore::with_raw(&raw).load_all();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id(), "1");
    }

    #[test]
    fn clear_removes_slot() {
        let store = MemoryStore::new();
        store.save_all(&sample()).unwrap();
        store.clear().unwrap();
        assert!(store.raw().is_none());
        assert!(store.load_all().is_empty());
    }
}
