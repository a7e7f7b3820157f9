use crate::domain::Coordinate;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        if !(inner.latitude >= -90.0 && inner.latitude <= 90.0) {
            return Err(Error::custom(format!("invalid latitude: {}, must be between -90 and 90", inner.latitude)));
        }

        if !(inner.longitude >= -180.0 && inner.longitude <= 180.0) {
            return Err(Error::custom(format!("invalid longitude: {}, must be between -180 and 180", inner.longitude)));
        }

        Ok(Coordinate::new(inner.latitude, inner.longitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn deserialize_a_valid_coordinate() -> Result<(), serde_json::Error> {
        let coordinate = serde_json::from_str::<Coordinate>(r#"{ "latitude": 39.9255, "longitude": 32.8662 }"#)?;

        assert_eq!(coordinate, Coordinate::new(39.9255, 32.8662));
        Ok(())
    }

    #[rstest]
    #[case(r#"{ "latitude": 91.0, "longitude": 0.0 }"#, "invalid latitude: 91, must be between -90 and 90")]
    #[case(r#"{ "latitude": 0.0, "longitude": -180.5 }"#, "invalid longitude: -180.5, must be between -180 and 180")]
    fn deserialize_rejects_out_of_range_values(#[case] json: &str, #[case] message: &str) {
        let error = serde_json::from_str::<Coordinate>(json).unwrap_err();

        assert!(error.to_string().starts_with(message), "unexpected error: {}", error);
    }
}
