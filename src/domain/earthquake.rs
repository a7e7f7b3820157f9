use crate::domain::{Coordinate, Severity};
use crate::geo::haversine_distance_km;
use chrono::NaiveDateTime;

const TIMESTAMP_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

#[derive(Clone, Debug, PartialEq)]
pub struct EarthquakeRecord {
    pub id: String,
    pub title: String,
    pub magnitude: f64,
    pub depth_km: f64,
    pub timestamp: String,
    pub coordinates: Option<Coordinate>,
    pub epicenter_name: Option<String>,
    pub closest_city: Option<ClosestCity>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClosestCity {
    pub name: String,
    pub distance_meters: f64,
}

impl ClosestCity {
    pub fn distance_km_rounded(&self) -> i64 {
        (self.distance_meters / 1000.0).round() as i64
    }
}

impl EarthquakeRecord {
    pub fn severity(&self) -> Severity {
        Severity::of(self.magnitude)
    }

    /// Parses the timestamp as reported by the Kandilli feed (local Turkish time, no offset).
    pub fn occurred_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT).ok()
    }

    /// Great-circle distance from `location` to the epicenter, rounded to whole kilometers.
    pub fn distance_from_km(&self, location: &Coordinate) -> Option<i64> {
        self.coordinates
            .map(|epicenter| haversine_distance_km(location, &epicenter).round() as i64)
    }
}

#[cfg(test)]
pub fn record(id: &str, magnitude: f64) -> EarthquakeRecord {
    EarthquakeRecord {
        id: id.to_string(),
        title: format!("Quake {}", id),
        magnitude,
        depth_km: 7.0,
        timestamp: "2025.03.07 19:13:41".to_string(),
        coordinates: Some(Coordinate::new(38.42, 27.14)),
        epicenter_name: None,
        closest_city: None,
    }
}
