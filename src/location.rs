use crate::domain::Coordinate;
use async_trait::async_trait;

/// Source of the user's current position.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Returns `None` when the position is unavailable, e.g. permission was denied.
    async fn current_location(&self) -> Option<Coordinate>;
}

/// A fixed position read from configuration.
#[derive(Debug)]
pub struct ConfiguredLocation {
    location: Coordinate,
}

impl ConfiguredLocation {
    pub fn new(location: Coordinate) -> Self {
        ConfiguredLocation { location }
    }
}

#[async_trait]
impl LocationProvider for ConfiguredLocation {
    async fn current_location(&self) -> Option<Coordinate> {
        Some(self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn configured_location_returns_the_configured_coordinate() {
        let provider: Box<dyn LocationProvider> = Box::new(ConfiguredLocation::new(Coordinate::new(41.0, 29.0)));

        assert_eq!(provider.current_location().await, Some(Coordinate::new(41.0, 29.0)));
    }
}
