use super::{WorkoutStore, decode_snapshot, encode_snapshot};
use crate::errors::AppResult;
use crate::models::Workout;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A JSON file acting as the single storage slot.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "workouts.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl WorkoutStore for JsonFileStore {
    fn load_all(&self) -> Vec<Workout> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => decode_snapshot(&raw),
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "no snapshot to load");
                Vec::new()
            }
        }
    }

    fn save_all(&self, workouts: &[Workout]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // write aside, then swap in: the slot is never half-written
        let tmp = self.tmp_path();
        fs::write(&tmp, encode_snapshot(workouts)?)?;
        fs::rename(&tmp, &self.path)?;

        tracing::info!(path = %self.path.display(), count = workouts.len(), "snapshot saved");
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "snapshot removed");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;
    use chrono::Local;

    #[test]
    fn save_overwrites_whole_slot() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("workouts.json"));
        let now = Local::now();

        let a = Workout::running("a", now, Coordinate::new(1.0, 1.0), 3.0, 15.0, 170.0);
        let b = Workout::cycling("b", now, Coordinate::new(2.0, 2.0), 30.0, 90.0, 250.0);

        store.save_all(&[a.clone(), b.clone()]).unwrap();
        store.save_all(std::slice::from_ref(&b)).unwrap();

        assert_eq!(store.load_all(), vec![b]);
        assert!(!store.tmp_path().exists());
    }

    #[test]
    fn missing_file_loads_empty_and_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("workouts.json"));
        assert!(store.load_all().is_empty());
        store.clear().unwrap();
        store.clear().unwrap();
    }

    #[test]
    fn corrupted_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workouts.json");
        fs::write(&path, "[{").unwrap();
        assert!(JsonFileStore::new(&path).load_all().is_empty());
    }
}
