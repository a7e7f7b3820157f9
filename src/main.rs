use crate::app_config::AppConfig;
use crate::domain::events::Event;
use crate::domain::{FeedKind, emergency_meeting_points, nearest_meeting_points};
use crate::location::{ConfiguredLocation, LocationProvider};
use crate::store::{FetchGenerations, Store};
use crate::store_listener::store_listener;
use reqwest::Client;
use tokio::sync::mpsc;
use tokio::sync::mpsc::Sender;
use tokio::sync::mpsc::error::SendError;
use tokio::task;
use tracing::{error, info, instrument, warn};

mod app_config;
mod coordinate_deserializer;
mod domain;
mod filter;
mod geo;
mod kandilli;
mod location;
mod route_simulator;
mod store;
mod store_listener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let client = kandilli::new_client(&config)?;

    let (tx, rx) = mpsc::channel::<Event>(config.core().store_buffer_size());
    let mut store = Store::new(rx);
    let notifier_rx = store.notifier();

    let listener_handle = task::spawn(async move {
        store_listener(notifier_rx).await;
    });
    info!("✅  Initialized store listener");

    let store_handle = task::spawn(async move {
        store.listen().await;
    });
    info!("✅  Initialized store");

    if config.filter().min_magnitude() > 0.0 {
        tx.send(Event::MagnitudeFilterChanged(config.filter().min_magnitude())).await?;
    }

    let generations = FetchGenerations::default();
    let location_provider = ConfiguredLocation::new(*config.location());

    // The map screen waits for the location and both feeds together
    let (location, list_result, map_result) = tokio::join!(
        location_provider.current_location(),
        refresh(&client, &config, &generations, &tx, FeedKind::List),
        refresh(&client, &config, &generations, &tx, FeedKind::Map),
    );
    list_result?;
    map_result?;

    if let Some(location) = location {
        tx.send(Event::UserLocated(location)).await?;

        let nearest = nearest_meeting_points(&emergency_meeting_points(), &location).into_iter().next();
        if let Some((meeting_point, distance)) = nearest {
            info!("🧭 Nearest meeting point is '{}', {:.1} km away", meeting_point.name, distance);
            tx.send(Event::MeetingPointSelected(meeting_point)).await?;
        }
    } else {
        warn!("⚠️ User location unavailable, no route to a meeting point");
        tx.send(Event::RouteCleared).await?;
    }

    drop(tx);
    store_handle.await?;
    listener_handle.await?;

    info!("🔥 {} is done", env!("CARGO_PKG_NAME"));
    Ok(())
}

/// Fetches `feed` under a fresh generation and hands the outcome to the store.
///
/// This is also the manual retry after a failed fetch: calling it again starts a newer generation,
/// so the store drops whatever an earlier, still running fetch of the same feed returns.
#[instrument(skip(client, config, generations, tx))]
async fn refresh(client: &Client, config: &AppConfig, generations: &FetchGenerations, tx: &Sender<Event>, feed: FeedKind) -> Result<(), SendError<Event>> {
    let generation = generations.next(feed);
    tx.send(Event::FetchStarted { feed, generation }).await?;

    let result = kandilli::fetch_recent_earthquakes(client, config, feed).await.map_err(|e| {
        error!("❌ Could not retrieve earthquakes for the {}: {}", feed, e);
        e.to_string()
    });

    tx.send(Event::FetchCompleted { feed, generation, result }).await
}
