use super::{MapView, Marker};
use crate::errors::AppResult;
use crate::models::Coordinate;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;

/// Map rendered as a GeoJSON `FeatureCollection`, one point per marker.
///
/// The current view (center + zoom) travels as a `view` foreign member so a
/// viewer can restore it.
#[derive(Debug, Clone)]
pub struct GeoJsonMap {
    center: Coordinate,
    zoom: u8,
    animated: bool,
    markers: Vec<Marker>,
}

impl GeoJsonMap {
    pub fn new(center: Coordinate, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            animated: false,
            markers: Vec::new(),
        }
    }

    /// Whether the last view change asked for a pan animation.
    pub fn animated(&self) -> bool {
        self.animated
    }

    pub fn to_geojson(&self) -> Value {
        let features: Vec<Value> = self
            .markers
            .iter()
            .map(|m| {
                json!({
                    "type": "Feature",
                    // GeoJSON positions are [lng, lat]
                    "geometry": { "type": "Point", "coordinates": [m.coords.lng, m.coords.lat] },
                    "properties": {
                        "id": m.workout_id,
                        "popup": m.popup,
                        "className": m.class_name,
                    }
                })
            })
            .collect();

        json!({
            "type": "FeatureCollection",
            "view": {
                "center": [self.center.lat, self.center.lng],
                "zoom": self.zoom,
            },
            "features": features,
        })
    }

    pub fn write(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&self.to_geojson())?)?;
        tracing::info!(path = %path.display(), markers = self.markers.len(), "map written");
        Ok(())
    }

    /// OpenStreetMap link showing the current view.
    pub fn permalink(&self) -> String {
        format!(
            "https://www.openstreetmap.org/?mlat={lat:.5}&mlon={lng:.5}#map={z}/{lat:.5}/{lng:.5}",
            lat = self.center.lat,
            lng = self.center.lng,
            z = self.zoom
        )
    }
}

impl MapView for GeoJsonMap {
    fn set_view(&mut self, center: Coordinate, zoom: u8, animate: bool) {
        tracing::debug!(%center, zoom, animate, "map view changed");
        self.center = center;
        self.zoom = zoom;
        self.animated = animate;
    }

    fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    fn clear_markers(&mut self) {
        self.markers.clear();
    }

    fn center(&self) -> Coordinate {
        self.center
    }

    fn zoom(&self) -> u8 {
        self.zoom
    }

    fn markers(&self) -> &[Marker] {
        &self.markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(id: &str, lat: f64, lng: f64) -> Marker {
        Marker {
            workout_id: id.into(),
            coords: Coordinate::new(lat, lng),
            popup: "🚴‍♂️ cycling on May 3".into(),
            class_name: "cycling-popup".into(),
        }
    }

    #[test]
    fn geojson_uses_lng_lat_order() {
        let mut map = GeoJsonMap::new(Coordinate::new(51.505, -0.09), 13);
        map.add_marker(marker("1", 51.505, -0.09));

        let v = map.to_geojson();
        assert_eq!(v["type"], "FeatureCollection");
        assert_eq!(v["features"][0]["geometry"]["coordinates"], json!([-0.09, 51.505]));
        assert_eq!(v["features"][0]["properties"]["className"], "cycling-popup");
        assert_eq!(v["view"]["zoom"], 13);
    }

    #[test]
    fn permalink_points_at_center() {
        let map = GeoJsonMap::new(Coordinate::new(45.0, 9.0), 13);
        assert_eq!(
            map.permalink(),
            "https://www.openstreetmap.org/?mlat=45.00000&mlon=9.00000#map=13/45.00000/9.00000"
        );
    }

    #[test]
    fn write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.geojson");
        let mut map = GeoJsonMap::new(Coordinate::new(0.0, 0.0), 13);
        map.add_marker(marker("9", 1.0, 2.0));
        map.write(&path).unwrap();

        let back: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back["features"].as_array().unwrap().len(), 1);
    }
}
