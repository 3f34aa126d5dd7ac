use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use super::equipment_event::EquipmentEvent;

/// A railcar journey from a release to the matching placement.
///
/// Open while `destination_city_id` and `end_utc` are unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub equipment_id: String,
    pub origin_city_id: i32,
    pub destination_city_id: Option<i32>,
    pub start_utc: DateTime<Utc>,
    pub end_utc: Option<DateTime<Utc>>,
    pub total_trip_hours: f64,
}

impl Trip {
    pub fn open(release: &EquipmentEvent) -> Self {
        Self {
            equipment_id: release.equipment_id.clone(),
            origin_city_id: release.city_id,
            destination_city_id: None,
            start_utc: release.event_time,
            end_utc: None,
            total_trip_hours: 0.0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.destination_city_id.is_none() && self.end_utc.is_none()
    }

    pub fn complete(&mut self, placement: &EquipmentEvent) {
        let elapsed = placement.event_time - self.start_utc;
        self.destination_city_id = Some(placement.city_id);
        self.end_utc = Some(placement.event_time);
        self.total_trip_hours = elapsed.num_milliseconds() as f64 / 3_600_000.0;
    }
}

/// Row shape returned by the trips query, city names joined in.
#[derive(Debug, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRecord {
    pub id: i64,
    pub equipment_id: String,
    pub origin_city_id: i32,
    pub origin_city_name: String,
    pub destination_city_id: Option<i32>,
    pub destination_city_name: Option<String>,
    pub start_utc: DateTime<Utc>,
    pub end_utc: Option<DateTime<Utc>>,
    pub total_trip_hours: f64,
}
