use crate::domain::{ClosestCity, Coordinate, EarthquakeRecord};
use crate::kandilli::domain::EarthquakeGet;
use serde_json::Value;

pub fn map_earthquake(id: &str, earthquake: EarthquakeGet) -> EarthquakeRecord {
    let coordinates = earthquake.geojson.and_then(|geojson| geojson.coordinates).as_ref().and_then(map_position);
    let (epicenter_name, closest_city) = match earthquake.location_properties {
        Some(properties) => (
            properties.epi_center.and_then(|epi_center| epi_center.name),
            properties.closest_city.and_then(|city| match (city.name, city.distance) {
                (Some(name), Some(distance_meters)) => Some(ClosestCity { name, distance_meters }),
                _ => None,
            }),
        ),
        None => (None, None),
    };

    EarthquakeRecord {
        id: id.to_string(),
        title: earthquake.title,
        magnitude: earthquake.mag,
        depth_km: earthquake.depth,
        timestamp: earthquake.date,
        coordinates,
        epicenter_name,
        closest_city,
    }
}

/// Maps a GeoJSON position, which must be exactly `[longitude, latitude]`.
fn map_position(position: &Value) -> Option<Coordinate> {
    match position.as_array()?.as_slice() {
        [longitude, latitude] => Coordinate::from_lon_lat(longitude.as_f64()?, latitude.as_f64()?),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kandilli::domain::DetailResponse;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn map_earthquake_maps_all_fields() -> Result<(), serde_json::Error> {
        let response = serde_json::from_str::<DetailResponse>(include_str!("../../tests/resources/earthquake_detail_response.json"))?;

        let record = map_earthquake("cGQn1XlZ4NdUa", response.result.expect("result should be present"));

        assert_eq!(
            record,
            EarthquakeRecord {
                id: "cGQn1XlZ4NdUa".to_string(),
                title: "ULA (MUGLA)".to_string(),
                magnitude: 4.1,
                depth_km: 8.4,
                timestamp: "2024.04.25 09:41:12".to_string(),
                coordinates: Some(Coordinate::new(37.1103, 28.4172)),
                epicenter_name: Some("Ula".to_string()),
                closest_city: Some(ClosestCity {
                    name: "Muğla".to_string(),
                    distance_meters: 14251.06,
                }),
            }
        );

        Ok(())
    }

    #[test]
    fn map_earthquake_without_optional_properties() -> Result<(), serde_json::Error> {
        let earthquake = serde_json::from_value::<EarthquakeGet>(json!({
            "title": "AKDENIZ",
            "mag": 3.2,
            "depth": 10.0,
            "date": "2024.04.25 10:00:00"
        }))?;

        let record = map_earthquake("X", earthquake);

        assert_eq!(record.coordinates, None);
        assert_eq!(record.epicenter_name, None);
        assert_eq!(record.closest_city, None);

        Ok(())
    }

    #[rstest]
    #[case(json!([28.4, 37.1]), Some(Coordinate::new(37.1, 28.4)))]
    #[case(json!([28.4]), None)]
    #[case(json!([28.4, 37.1, 5.0]), None)]
    #[case(json!(["28.4", "37.1"]), None)]
    #[case(json!({ "lon": 28.4, "lat": 37.1 }), None)]
    #[case(json!([37.1, 128.4]), None)]
    fn map_position_requires_a_longitude_latitude_pair(#[case] position: Value, #[case] expected: Option<Coordinate>) {
        assert_eq!(map_position(&position), expected);
    }
}
