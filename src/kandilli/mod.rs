mod client;
mod domain;
mod fetcher;
mod map_earthquake;

pub use client::new_client;
pub use fetcher::fetch_recent_earthquakes;
