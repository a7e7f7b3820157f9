use crate::domain::events::Event;
use crate::domain::{Coordinate, DirectionStep, EarthquakeRecord, FeedKind, MagnitudeFilter, MeetingPoint};
use crate::filter::{EmptyState, empty_state, filtered};
use crate::route_simulator::{DEFAULT_POINT_COUNT, simulate_directions, simulate_route};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc::Receiver;
use tokio::sync::watch;
use tokio::sync::watch::{Receiver as WatchReceiver, Sender as WatchSender};
use tracing::{debug, info, instrument, warn};

pub type StoreSnapshot = ScreenState;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Failed(String),
    Loaded,
}

#[derive(Clone, Debug, Default)]
pub struct FeedState {
    generation: u64,
    status: FetchStatus,
    records: Vec<EarthquakeRecord>,
}

impl FeedState {
    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn records(&self) -> &[EarthquakeRecord] {
        &self.records
    }
}

/// Everything the list and map screens render, owned by the [`Store`].
#[derive(Clone, Debug, Default)]
pub struct ScreenState {
    list: FeedState,
    map: FeedState,
    filter: MagnitudeFilter,
    user_location: Option<Coordinate>,
    selected_meeting_point: Option<MeetingPoint>,
    route: Vec<Coordinate>,
    directions: Vec<DirectionStep>,
}

impl ScreenState {
    pub fn feed(&self, feed: FeedKind) -> &FeedState {
        match feed {
            FeedKind::List => &self.list,
            FeedKind::Map => &self.map,
        }
    }

    fn feed_mut(&mut self, feed: FeedKind) -> &mut FeedState {
        match feed {
            FeedKind::List => &mut self.list,
            FeedKind::Map => &mut self.map,
        }
    }

    pub fn filter(&self) -> &MagnitudeFilter {
        &self.filter
    }

    /// The list records that pass the magnitude filter.
    pub fn displayed(&self) -> Vec<EarthquakeRecord> {
        filtered(&self.list.records, &self.filter)
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        empty_state(&self.list.records, &self.displayed())
    }

    pub fn user_location(&self) -> Option<&Coordinate> {
        self.user_location.as_ref()
    }

    pub fn selected_meeting_point(&self) -> Option<&MeetingPoint> {
        self.selected_meeting_point.as_ref()
    }

    pub fn route(&self) -> &[Coordinate] {
        &self.route
    }

    pub fn directions(&self) -> &[DirectionStep] {
        &self.directions
    }

    fn update_route(&mut self) {
        match (&self.user_location, &self.selected_meeting_point) {
            (Some(user_location), Some(meeting_point)) => {
                self.route = simulate_route(Some(*user_location), Some(meeting_point.coordinate), DEFAULT_POINT_COUNT);
                self.directions = simulate_directions(&meeting_point.name);
            }
            _ => {
                self.route.clear();
                self.directions.clear();
            }
        }
    }
}

/// Hands out fetch generations. A completed fetch is only applied when no newer fetch of the same
/// feed has been started since.
#[derive(Debug, Default)]
pub struct FetchGenerations {
    list: AtomicU64,
    map: AtomicU64,
}

impl FetchGenerations {
    pub fn next(&self, feed: FeedKind) -> u64 {
        let counter = match feed {
            FeedKind::List => &self.list,
            FeedKind::Map => &self.map,
        };
        counter.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[derive(Debug)]
pub struct Store {
    state: ScreenState,
    rx: Receiver<Event>,
    notifier_tx: WatchSender<StoreSnapshot>,
    notifier_rx: WatchReceiver<StoreSnapshot>,
}

impl Store {
    pub fn new(rx: Receiver<Event>) -> Self {
        let state = ScreenState::default();
        let (notifier_tx, notifier_rx) = watch::channel::<StoreSnapshot>(state.clone());

        Store {
            state,
            rx,
            notifier_tx,
            notifier_rx,
        }
    }

    pub fn notifier(&self) -> WatchReceiver<StoreSnapshot> {
        self.notifier_rx.clone()
    }

    #[cfg(test)]
    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    #[instrument(skip(self))]
    pub async fn listen(&mut self) {
        while let Some(event) = self.rx.recv().await {
            debug!("🔵 Received event: {:?}", event);
            if self.apply(event) {
                self.notifier_tx.send(self.state.clone()).unwrap_or_default();
            }
        }
    }

    /// Applies `event` to the state, returns whether anything changed.
    fn apply(&mut self, event: Event) -> bool {
        match event {
            Event::FetchStarted { feed, generation } => {
                let feed_state = self.state.feed_mut(feed);
                if generation <= feed_state.generation {
                    warn!(%feed, generation, "⚠️ Ignoring outdated {} fetch start", feed);
                    return false;
                }

                feed_state.generation = generation;
                feed_state.status = FetchStatus::Loading;
                true
            }
            Event::FetchCompleted { feed, generation, result } => {
                let feed_state = self.state.feed_mut(feed);
                if generation != feed_state.generation {
                    #[rustfmt::skip]
                    warn!(%feed, generation, latest = feed_state.generation, "⚠️ Discarding stale {} fetch result", feed);
                    return false;
                }

                match result {
                    Ok(records) => {
                        info!(%feed, "🔵 Storing {} earthquake(s)", records.len());
                        feed_state.records = records;
                        feed_state.status = FetchStatus::Loaded;
                    }
                    Err(error) => {
                        feed_state.records.clear();
                        feed_state.status = FetchStatus::Failed(error);
                    }
                }
                true
            }
            Event::MagnitudeFilterChanged(threshold) => {
                self.state.filter = MagnitudeFilter::at_least(threshold);
                info!("🔵 Filter set to '{}'", self.state.filter.label());
                true
            }
            Event::UserLocated(location) => {
                self.state.user_location = Some(location);
                self.state.update_route();
                true
            }
            Event::MeetingPointSelected(meeting_point) => {
                info!("🔵 Selected meeting point '{}'", meeting_point.name);
                self.state.selected_meeting_point = Some(meeting_point);
                self.state.update_route();
                true
            }
            Event::RouteCleared => {
                self.state.selected_meeting_point = None;
                self.state.update_route();
                true
            }
        }
    }
}
