use crate::domain::Coordinate;
use crate::geo::haversine_distance_km;

#[derive(Clone, Debug, PartialEq)]
pub struct MeetingPoint {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub coordinate: Coordinate,
    pub capacity_persons: u32,
}

impl MeetingPoint {
    fn new(id: u32, name: &str, description: &str, coordinate: Coordinate, capacity_persons: u32) -> Self {
        MeetingPoint {
            id,
            name: name.to_string(),
            description: description.to_string(),
            coordinate,
            capacity_persons,
        }
    }
}

/// The predefined assembly areas shown on the map.
pub fn emergency_meeting_points() -> Vec<MeetingPoint> {
    vec![
        MeetingPoint::new(
            1,
            "Şehir Parkı Toplanma Alanı",
            "Geniş açık alan, temel ilk yardım ünitesi mevcut",
            Coordinate::new(39.9255, 32.8662),
            5000,
        ),
        MeetingPoint::new(
            2,
            "Merkez Stadyumu",
            "Geniş açık alan, su ve tuvalet imkanları mevcut",
            Coordinate::new(41.0370, 28.9856),
            10000,
        ),
        MeetingPoint::new(
            3,
            "Okul Bahçesi Toplanma Alanı",
            "Orta büyüklükte alan, yakında sağlık ocağı mevcut",
            Coordinate::new(38.4237, 27.1428),
            3000,
        ),
        MeetingPoint::new(
            4,
            "Belediye Meydanı Toplanma Alanı",
            "Şehir merkezinde kolay ulaşılabilir alan",
            Coordinate::new(36.8969, 30.7133),
            7500,
        ),
    ]
}

/// Returns the meeting points ordered by straight-line distance from `location`, nearest first.
pub fn nearest_meeting_points(points: &[MeetingPoint], location: &Coordinate) -> Vec<(MeetingPoint, f64)> {
    let mut by_distance = points
        .iter()
        .map(|point| (point.clone(), haversine_distance_km(location, &point.coordinate)))
        .collect::<Vec<_>>();
    by_distance.sort_by(|(_, a), (_, b)| a.total_cmp(b));
    by_distance
}
