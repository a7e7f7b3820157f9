use crate::domain::{Coordinate, EarthquakeRecord, FeedKind, MeetingPoint};

#[derive(Debug)]
pub enum Event {
    FetchStarted {
        feed: FeedKind,
        generation: u64,
    },
    FetchCompleted {
        feed: FeedKind,
        generation: u64,
        result: Result<Vec<EarthquakeRecord>, String>,
    },
    MagnitudeFilterChanged(f64),
    UserLocated(Coordinate),
    MeetingPointSelected(MeetingPoint),
    RouteCleared,
}
