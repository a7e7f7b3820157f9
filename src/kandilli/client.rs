use crate::app_config::AppConfig;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;

pub fn new_client(config: &AppConfig) -> Result<Client, ClientError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    let user_agent = HeaderValue::from_str(config.api().user_agent())?;
    let client = Client::builder()
        .user_agent(user_agent)
        .default_headers(headers)
        .connect_timeout(config.api().connect_timeout())
        .build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Kandilli client set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
}
