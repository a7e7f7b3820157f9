mod coordinate;
mod direction_step;
mod earthquake;
pub mod events;
mod feed_kind;
mod magnitude_filter;
mod meeting_point;
mod severity;

pub use coordinate::Coordinate;
pub use direction_step::DirectionStep;
#[cfg(test)]
pub use earthquake::record;
pub use earthquake::{ClosestCity, EarthquakeRecord};
pub use feed_kind::FeedKind;
pub use magnitude_filter::MagnitudeFilter;
pub use meeting_point::{MeetingPoint, emergency_meeting_points, nearest_meeting_points};
pub use severity::{Severity, marker_size};
