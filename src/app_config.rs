use crate::domain::{Coordinate, FeedKind};
use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    api: Api,
    list: Feed,
    map: Feed,
    #[serde(default)]
    filter: Filter,
    location: Coordinate,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("DEPREM").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    pub fn feed(&self, feed: FeedKind) -> &Feed {
        match feed {
            FeedKind::List => &self.list,
            FeedKind::Map => &self.map,
        }
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn location(&self) -> &Coordinate {
        &self.location
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    store_buffer_size: usize,
}

impl Core {
    pub fn store_buffer_size(&self) -> usize {
        self.store_buffer_size
    }
}

#[derive(Debug, Deserialize)]
pub struct Api {
    base_url: String,
    user_agent: String,
    #[serde(with = "humantime_serde")]
    connect_timeout: Duration,
}

impl Api {
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }
}

#[derive(Debug, Deserialize)]
pub struct Feed {
    max_count: usize,
    #[serde(default, with = "humantime_serde")]
    timeout: Option<Duration>,
}

impl Feed {
    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Per detail request timeout, `None` leaves it to the client.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Filter {
    min_magnitude: f64,
}

impl Filter {
    pub fn min_magnitude(&self) -> f64 {
        self.min_magnitude
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core { store_buffer_size: 8 },
                api: Api {
                    base_url: "https://api.orhanaydogdu.com.tr/deprem/".to_string(),
                    user_agent: "deprem".to_string(),
                    connect_timeout: Duration::from_secs(1),
                },
                list: Feed {
                    max_count: 50,
                    timeout: None,
                },
                map: Feed {
                    max_count: 25,
                    timeout: Some(Duration::from_secs(5)),
                },
                filter: Filter::default(),
                location: Coordinate::new(39.1667, 35.6667),
            },
        }
    }

    pub fn base_url(mut self, url: String) -> Self {
        self.config.api.base_url = url;
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.config.api.user_agent = user_agent.to_string();
        self
    }

    pub fn max_count(mut self, feed: FeedKind, max_count: usize) -> Self {
        match feed {
            FeedKind::List => self.config.list.max_count = max_count,
            FeedKind::Map => self.config.map.max_count = max_count,
        }
        self
    }

    pub fn timeout(mut self, feed: FeedKind, timeout: Option<Duration>) -> Self {
        match feed {
            FeedKind::List => self.config.list.timeout = timeout,
            FeedKind::Map => self.config.map.timeout = timeout,
        }
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
