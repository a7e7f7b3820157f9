mod earthquake_get;
mod status_response;

pub use earthquake_get::{DetailResponse, EarthquakeGet};
pub use status_response::StatusResponse;
