use serde::Deserialize;
use serde_json::Value;

// API: https://api.orhanaydogdu.com.tr/deprem/data/get?earthquake_id=<id>
#[derive(Debug, Deserialize)]
pub struct DetailResponse {
    pub result: Option<EarthquakeGet>,
}

#[derive(Debug, Deserialize)]
pub struct EarthquakeGet {
    pub title: String,
    pub mag: f64,
    pub depth: f64,
    pub date: String,
    pub geojson: Option<GeoJson>,
    pub location_properties: Option<LocationProperties>,
}

#[derive(Debug, Deserialize)]
pub struct GeoJson {
    // Kept loose so a malformed position only invalidates the geometry, not the whole record
    pub coordinates: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct LocationProperties {
    #[serde(rename = "epiCenter")]
    pub epi_center: Option<EpiCenter>,
    #[serde(rename = "closestCity")]
    pub closest_city: Option<ClosestCity>,
}

#[derive(Debug, Deserialize)]
pub struct EpiCenter {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ClosestCity {
    pub name: Option<String>,
    pub distance: Option<f64>,
}
