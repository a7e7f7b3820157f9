use crate::domain::Coordinate;
use std::f64::consts::PI;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Great-circle distance between two coordinates in kilometers.
pub fn haversine_distance_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let d_lat = to_radians(b.latitude - a.latitude);
    let d_lon = to_radians(b.longitude - a.longitude);

    let h = (d_lat / 2.0).sin().powi(2) + to_radians(a.latitude).cos() * to_radians(b.latitude).cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push h marginally outside [0, 1] for antipodal points
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const ANKARA: Coordinate = Coordinate {
        latitude: 39.9255,
        longitude: 32.8662,
    };
    const ISTANBUL: Coordinate = Coordinate {
        latitude: 41.0370,
        longitude: 28.9856,
    };

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(180.0, PI)]
    #[case(-90.0, -PI / 2.0)]
    fn to_radians_converts_degrees(#[case] degrees: f64, #[case] expected: f64) {
        assert!((to_radians(degrees) - expected).abs() < 1e-12);
    }

    #[rstest]
    #[case(ANKARA)]
    #[case(ISTANBUL)]
    #[case(Coordinate::new(-90.0, 180.0))]
    fn distance_to_itself_is_zero(#[case] point: Coordinate) {
        assert_eq!(haversine_distance_km(&point, &point), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let there = haversine_distance_km(&ANKARA, &ISTANBUL);
        let back = haversine_distance_km(&ISTANBUL, &ANKARA);

        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn distance_between_ankara_and_istanbul() {
        let distance = haversine_distance_km(&ANKARA, &ISTANBUL);

        assert!((345.0..355.0).contains(&distance), "got {}", distance);
    }

    #[test]
    fn distance_between_antipodes_is_half_the_circumference() {
        let distance = haversine_distance_km(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 180.0));

        assert!((distance - PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }
}
