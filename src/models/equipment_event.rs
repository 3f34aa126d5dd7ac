use chrono::{DateTime, Utc};
use serde::Serialize;

use super::event_code::EventCode;

/// One observed state change for a railcar, normalized to UTC.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentEvent {
    pub equipment_id: String,
    pub event_code: EventCode,
    pub event_time: DateTime<Utc>,
    pub city_id: i32,
}

/// Row shape returned by the events query.
#[derive(Debug, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentEventRecord {
    pub id: i64,
    pub equipment_id: String,
    pub event_code: String,
    pub event_time: DateTime<Utc>,
    pub city_id: i32,
    pub city_name: String,
}
