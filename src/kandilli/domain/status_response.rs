use serde::Deserialize;

pub const EARTHQUAKE_KEY_PREFIX: &str = "data/earthquake/";

// API: https://api.orhanaydogdu.com.tr/deprem/status
#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    #[serde(rename = "nopeRedis")]
    pub nope_redis: NopeRedis,
}

#[derive(Debug, Deserialize)]
pub struct NopeRedis {
    pub keys: Vec<String>,
}

impl StatusResponse {
    /// Earthquake identifiers in index order, with the key prefix stripped.
    pub fn earthquake_ids(&self) -> impl Iterator<Item = &str> {
        self.nope_redis.keys.iter().filter_map(|key| key.strip_prefix(EARTHQUAKE_KEY_PREFIX))
    }
}
