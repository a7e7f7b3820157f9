#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate { latitude, longitude }
    }

    /// Builds a coordinate from a GeoJSON position, which is ordered `[longitude, latitude]`.
    pub fn from_lon_lat(longitude: f64, latitude: f64) -> Option<Self> {
        let valid = latitude.is_finite() && longitude.is_finite() && (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude);
        valid.then_some(Coordinate { latitude, longitude })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn from_lon_lat_swaps_the_geojson_order() {
        assert_eq!(Coordinate::from_lon_lat(27.14, 38.42), Some(Coordinate::new(38.42, 27.14)));
    }

    #[rstest]
    #[case(0.0, 90.5)]
    #[case(180.5, 0.0)]
    #[case(f64::NAN, 0.0)]
    #[case(0.0, f64::INFINITY)]
    fn from_lon_lat_rejects_invalid_positions(#[case] longitude: f64, #[case] latitude: f64) {
        assert_eq!(Coordinate::from_lon_lat(longitude, latitude), None);
    }
}
