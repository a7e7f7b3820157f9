mod directions;
mod route;

pub use directions::simulate_directions;
pub use route::{DEFAULT_POINT_COUNT, simulate_route};
