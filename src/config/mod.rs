use crate::core::app::DEFAULT_ZOOM;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON file holding the workout snapshot
    #[serde(default = "default_storage")]
    pub storage: String,
    /// GeoJSON file the map is rendered to
    #[serde(default = "default_map_file")]
    pub map_file: String,
    #[serde(default = "default_zoom")]
    pub zoom_level: u8,
    /// Current position as "lat,lng"; used when no --location is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

fn default_storage() -> String {
    Config::storage_file().to_string_lossy().to_string()
}
fn default_map_file() -> String {
    Config::config_dir()
        .join("map.geojson")
        .to_string_lossy()
        .to_string()
}
fn default_zoom() -> u8 {
    DEFAULT_ZOOM
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: default_storage(),
            map_file: default_map_file(),
            zoom_level: default_zoom(),
            location: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rmapty")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rmapty")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rmapty.conf")
    }

    /// Return the default path of the workout snapshot
    pub fn storage_file() -> PathBuf {
        Self::config_dir().join("workouts.json")
    }

    pub fn storage_path(&self) -> PathBuf {
        expand_tilde(&self.storage)
    }

    pub fn map_path(&self) -> PathBuf {
        expand_tilde(&self.map_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            Self::from_yaml(&content)
        } else {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Initialize configuration and storage files
    pub fn init_all(custom_storage: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        // Storage name: user provided or default
        let storage_path = match custom_storage {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::storage_file(),
        };

        let config = Config {
            storage: storage_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            fs::write(Self::config_file(), serde_yaml::to_string(&config)?)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create an empty snapshot if not exists
        if !storage_path.exists() {
            if let Some(parent) = storage_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&storage_path, "[]")?;
        }

        println!("✅ Storage:     {:?}", storage_path);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg = Config::from_yaml("location: \"51.5,-0.09\"\n").unwrap();
        assert_eq!(cfg.zoom_level, 13);
        assert_eq!(cfg.location.as_deref(), Some("51.5,-0.09"));
        assert!(cfg.storage.ends_with("workouts.json"));
    }

    #[test]
    fn yaml_round_trip() {
        let cfg = Config {
            storage: "/tmp/w.json".into(),
            map_file: "/tmp/m.geojson".into(),
            zoom_level: 11,
            location: None,
        };
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        assert!(!yaml.contains("location"));
        let back = Config::from_yaml(&yaml).unwrap();
        assert_eq!(back.zoom_level, 11);
        assert_eq!(back.storage, "/tmp/w.json");
    }

    #[test]
    fn bad_yaml_is_a_config_error() {
        assert!(matches!(
            Config::from_yaml("zoom_level: [nope"),
            Err(AppError::Config(_))
        ));
    }
}
