use crate::domain::{EarthquakeRecord, FeedKind, marker_size};
use crate::filter::EmptyState;
use crate::store::{FetchStatus, StoreSnapshot};
use tokio::sync::watch::Receiver;
use tracing::{info, instrument};

#[instrument(skip_all)]
pub async fn store_listener(mut rx: Receiver<StoreSnapshot>) {
    while rx.changed().await.is_ok() {
        let snapshot: StoreSnapshot = rx.borrow_and_update().clone();
        for line in render(&snapshot) {
            info!("{}", line);
        }
    }
}

/// Renders the snapshot as the lines the list and map screens would show.
pub fn render(snapshot: &StoreSnapshot) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("📋 Son Depremler, {}", snapshot.filter().label()));
    match snapshot.feed(FeedKind::List).status() {
        FetchStatus::Idle => {}
        FetchStatus::Loading => lines.push("Deprem verileri yükleniyor...".to_string()),
        FetchStatus::Failed(error) => lines.push(format!("Deprem verileri yüklenirken bir hata oluştu: {} [Tekrar Dene]", error)),
        FetchStatus::Loaded => match snapshot.empty_state() {
            Some(EmptyState::NoData) => lines.push("Deprem verisi bulunamadı".to_string()),
            Some(EmptyState::NoMatches) => lines.push("Filtreye uygun deprem bulunamadı".to_string()),
            None => lines.extend(snapshot.displayed().iter().map(|record| render_list_item(record, snapshot))),
        },
    }

    let map = snapshot.feed(FeedKind::Map);
    if let FetchStatus::Loaded = map.status() {
        lines.push(format!("🗺️ Deprem Haritası, {} deprem", map.records().len()));
        lines.extend(map.records().iter().filter_map(render_marker));
    }

    if let Some(meeting_point) = snapshot.selected_meeting_point() {
        lines.push(format!(
            "🧭 {} ({} kişi), rota {} noktadan oluşuyor",
            meeting_point.name,
            meeting_point.capacity_persons,
            snapshot.route().len()
        ));
        lines.extend(snapshot.directions().iter().map(|step| format!("{}. {}", step.step_number, step.instruction_text)));
    }

    lines
}

fn render_list_item(record: &EarthquakeRecord, snapshot: &StoreSnapshot) -> String {
    let date = record
        .occurred_at()
        .map(|occurred_at| occurred_at.format("%d.%m.%Y %H:%M:%S").to_string())
        .unwrap_or_else(|| record.timestamp.clone());

    let mut item = format!(
        "{} | {} Şiddetinde | Derinlik: {} km | Tarih: {}",
        record.title, record.magnitude, record.depth_km, date
    );
    if let Some(epicenter_name) = &record.epicenter_name {
        item.push_str(&format!(" | Merkez Üssü: {}", epicenter_name));
    }
    if let Some(city) = &record.closest_city {
        item.push_str(&format!(" | En Yakın Şehir: {} ({} km)", city.name, city.distance_km_rounded()));
    }
    if let Some(distance) = snapshot.user_location().and_then(|location| record.distance_from_km(location)) {
        item.push_str(&format!(" | Uzaklık: {} km", distance));
    }
    item
}

fn render_marker(record: &EarthquakeRecord) -> Option<String> {
    let coordinates = record.coordinates?;
    Some(format!(
        "📍 {} at {:.4},{:.4} size {} color {}",
        record.title,
        coordinates.latitude,
        coordinates.longitude,
        marker_size(record.magnitude),
        record.severity().color()
    ))
}
