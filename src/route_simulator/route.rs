use crate::domain::Coordinate;
use rand::Rng;

pub const DEFAULT_POINT_COUNT: usize = 8;

/// Maximum perturbation in degrees applied to each intermediate point.
pub const JITTER_DEGREES: f64 = 0.0025;

/// Fabricates a plausible looking path from `origin` to `destination`.
///
/// The result holds `point_count + 1` coordinates: the exact endpoints with linearly interpolated
/// points in between, each shifted by a uniform random offset of at most [`JITTER_DEGREES`].
/// This is a visual approximation only, not a route over any road network.
pub fn simulate_route(origin: Option<Coordinate>, destination: Option<Coordinate>, point_count: usize) -> Vec<Coordinate> {
    simulate_route_with(&mut rand::thread_rng(), origin, destination, point_count)
}

pub fn simulate_route_with<R: Rng>(
    rng: &mut R,
    origin: Option<Coordinate>,
    destination: Option<Coordinate>,
    point_count: usize,
) -> Vec<Coordinate> {
    let (Some(origin), Some(destination)) = (origin, destination) else {
        return Vec::new();
    };

    let point_count = point_count.max(1);
    let mut route = Vec::with_capacity(point_count + 1);
    route.push(origin);

    for i in 1..point_count {
        let ratio = i as f64 / point_count as f64;
        route.push(Coordinate {
            latitude: origin.latitude + (destination.latitude - origin.latitude) * ratio + rng.gen_range(-JITTER_DEGREES..=JITTER_DEGREES),
            longitude: origin.longitude + (destination.longitude - origin.longitude) * ratio + rng.gen_range(-JITTER_DEGREES..=JITTER_DEGREES),
        });
    }

    route.push(destination);
    route
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    const ORIGIN: Coordinate = Coordinate {
        latitude: 39.92,
        longitude: 32.85,
    };
    const DESTINATION: Coordinate = Coordinate {
        latitude: 39.9255,
        longitude: 32.8662,
    };

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(DEFAULT_POINT_COUNT)]
    #[case(50)]
    fn route_has_exact_endpoints_and_point_count(#[case] point_count: usize) {
        let route = simulate_route(Some(ORIGIN), Some(DESTINATION), point_count);

        assert_eq!(route.len(), point_count + 1);
        assert_eq!(route.first(), Some(&ORIGIN));
        assert_eq!(route.last(), Some(&DESTINATION));
    }

    #[test]
    fn zero_point_count_still_connects_both_endpoints() {
        assert_eq!(simulate_route(Some(ORIGIN), Some(DESTINATION), 0), vec![ORIGIN, DESTINATION]);
    }

    #[test]
    fn missing_endpoint_returns_an_empty_route() {
        assert!(simulate_route(None, Some(DESTINATION), DEFAULT_POINT_COUNT).is_empty());
        assert!(simulate_route(Some(ORIGIN), None, DEFAULT_POINT_COUNT).is_empty());
        assert!(simulate_route(None, None, DEFAULT_POINT_COUNT).is_empty());
    }

    #[test]
    fn intermediate_points_stay_within_the_jitter_bound() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let route = simulate_route_with(&mut rng, Some(ORIGIN), Some(DESTINATION), DEFAULT_POINT_COUNT);

            for (i, point) in route.iter().enumerate() {
                let ratio = i as f64 / DEFAULT_POINT_COUNT as f64;
                let latitude = ORIGIN.latitude + (DESTINATION.latitude - ORIGIN.latitude) * ratio;
                let longitude = ORIGIN.longitude + (DESTINATION.longitude - ORIGIN.longitude) * ratio;

                assert!((point.latitude - latitude).abs() <= JITTER_DEGREES + 1e-12);
                assert!((point.longitude - longitude).abs() <= JITTER_DEGREES + 1e-12);
            }
        }
    }

    #[test]
    fn seeded_routes_are_reproducible() {
        let first = simulate_route_with(&mut StdRng::seed_from_u64(42), Some(ORIGIN), Some(DESTINATION), DEFAULT_POINT_COUNT);
        let second = simulate_route_with(&mut StdRng::seed_from_u64(42), Some(ORIGIN), Some(DESTINATION), DEFAULT_POINT_COUNT);

        assert_eq!(first, second);
    }
}
