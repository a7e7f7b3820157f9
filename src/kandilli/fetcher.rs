use crate::app_config::AppConfig;
use crate::domain::{EarthquakeRecord, FeedKind};
use crate::kandilli::domain::{DetailResponse, EarthquakeGet, StatusResponse};
use crate::kandilli::map_earthquake::map_earthquake;
use futures::future::join_all;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Retrieves up to the configured number of recent earthquakes for `feed`, in index order.
///
/// Only a failing index request is an error. Every detail request settles before this returns and
/// records whose request failed, timed out or came back without a result are left out. Records for
/// the map feed are additionally required to have a valid epicenter.
#[instrument(skip(client, config))]
pub async fn fetch_recent_earthquakes(client: &Client, config: &AppConfig, feed: FeedKind) -> Result<Vec<EarthquakeRecord>, FetchError> {
    let base_url = config.api().base_url();
    let settings = config.feed(feed);

    info!("🌍 Retrieving earthquake index...");
    let status = fetch_status(client, base_url).await?;
    let ids = status.earthquake_ids().take(settings.max_count()).collect::<Vec<_>>();
    info!("🌍 Retrieving earthquake index... OK, {} selected", ids.len());

    let details = join_all(ids.iter().map(|id| fetch_detail(client, base_url, id, settings.timeout()))).await;

    let records = ids
        .iter()
        .zip(details)
        .filter_map(|(id, detail)| detail.map(|earthquake| map_earthquake(id, earthquake)))
        .collect::<Vec<_>>();
    let retrieved = records.len();

    let records = match feed {
        FeedKind::List => records,
        FeedKind::Map => records.into_iter().filter(|record| record.coordinates.is_some()).collect(),
    };
    if records.len() < retrieved {
        debug!("Dropped {} earthquake(s) without a valid epicenter", retrieved - records.len());
    }

    info!("🌍 Retrieved {} of {} earthquake(s)", records.len(), ids.len());
    Ok(records)
}

#[instrument(skip(client))]
async fn fetch_status(client: &Client, base_url: &str) -> Result<StatusResponse, FetchError> {
    let body = client
        .get(format!("{}/status", base_url))
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    Ok(serde_json::from_str::<StatusResponse>(&body)?)
}

async fn fetch_detail(client: &Client, base_url: &str, id: &str, timeout: Option<Duration>) -> Option<EarthquakeGet> {
    match try_fetch_detail(client, base_url, id, timeout).await {
        Ok(earthquake) => Some(earthquake),
        Err(e) => {
            warn!(earthquake_id = id, "⚠️ Skipping earthquake '{}': {}", id, e);
            None
        }
    }
}

async fn try_fetch_detail(client: &Client, base_url: &str, id: &str, timeout: Option<Duration>) -> Result<EarthquakeGet, DetailError> {
    let mut request = client.get(format!("{}/data/get", base_url)).query(&[("earthquake_id", id)]);
    if let Some(timeout) = timeout {
        request = request.timeout(timeout);
    }

    let response = request.send().await?.error_for_status()?.json::<DetailResponse>().await?;
    response.result.ok_or(DetailError::MissingResult)
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("earthquake index request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("earthquake index has an unexpected format: {0}")]
    Schema(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
enum DetailError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("response has no result")]
    MissingResult,
}
