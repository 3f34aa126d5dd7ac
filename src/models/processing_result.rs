use serde::Serialize;

use super::equipment_event::EquipmentEvent;
use super::trip::Trip;

/// Response for one processed upload.
///
/// `equipment_events` carries the parsed events whenever any were produced,
/// including when trips were built, so callers can see what was stored.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileProcessingResult {
    pub message: String,
    pub trip_count: usize,
    pub trips: Vec<Trip>,
    pub equipment_events: Vec<EquipmentEvent>,
}
