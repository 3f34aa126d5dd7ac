use tracing::{debug, warn};

use crate::models::equipment_event::EquipmentEvent;
use crate::models::event_code::EventCode;
use crate::models::trip::Trip;

/// Reconstruct trips from events in the order given.
///
/// Every release opens a new trip, even when the same equipment already has
/// one open. A placement closes the earliest-created open trip for its
/// equipment, or is dropped if there is none. Trips stay in creation order.
pub fn build_trips(events: &[EquipmentEvent]) -> Vec<Trip> {
    events.iter().fold(Vec::new(), apply_event)
}

/// Single reducer step: `(trips so far, event) -> trips`.
pub fn apply_event(mut trips: Vec<Trip>, event: &EquipmentEvent) -> Vec<Trip> {
    match event.event_code {
        EventCode::Released => {
            debug!(
                "Created new trip for equipment {} from city {}",
                event.equipment_id, event.city_id
            );
            trips.push(Trip::open(event));
        }
        EventCode::Placed => {
            let open = trips
                .iter_mut()
                .find(|t| t.equipment_id == event.equipment_id && t.is_open());
            match open {
                Some(trip) => {
                    trip.complete(event);
                    debug!(
                        "Completed trip for equipment {} to city {}",
                        event.equipment_id, event.city_id
                    );
                }
                None => warn!(
                    "Placed event for equipment {} has no corresponding release event",
                    event.equipment_id
                ),
            }
        }
        EventCode::Arrived | EventCode::Departed => {}
    }
    trips
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 16, 0, 0).unwrap()
    }

    fn event(id: &str, code: EventCode, hours: i64, city_id: i32) -> EquipmentEvent {
        EquipmentEvent {
            equipment_id: id.to_string(),
            event_code: code,
            event_time: base() + Duration::hours(hours),
            city_id,
        }
    }

    #[test]
    fn test_release_then_place_completes_trip() {
        let trips = build_trips(&[
            event("EQ1", EventCode::Released, 0, 1),
            event("EQ1", EventCode::Placed, 1, 21),
        ]);

        assert_eq!(trips.len(), 1);
        let trip = &trips[0];
        assert_eq!(trip.origin_city_id, 1);
        assert_eq!(trip.destination_city_id, Some(21));
        assert_eq!(trip.start_utc, base());
        assert_eq!(trip.end_utc, Some(base() + Duration::hours(1)));
        assert_eq!(trip.total_trip_hours, 1.0);
        assert!(!trip.is_open());
    }

    #[test]
    fn test_fractional_hours() {
        let mut placed = event("EQ1", EventCode::Placed, 2, 21);
        placed.event_time += Duration::minutes(30);
        let trips = build_trips(&[event("EQ1", EventCode::Released, 0, 1), placed]);
        assert_eq!(trips[0].total_trip_hours, 2.5);
    }

    #[test]
    fn test_unmatched_release_stays_open() {
        let trips = build_trips(&[event("EQ1", EventCode::Released, 0, 1)]);
        assert_eq!(trips.len(), 1);
        assert!(trips[0].is_open());
        assert_eq!(trips[0].destination_city_id, None);
        assert_eq!(trips[0].end_utc, None);
        assert_eq!(trips[0].total_trip_hours, 0.0);
    }

    #[test]
    fn test_placement_without_release_is_dropped() {
        let trips = build_trips(&[
            event("EQ1", EventCode::Placed, 0, 21),
            event("EQ2", EventCode::Released, 1, 1),
            event("EQ1", EventCode::Placed, 2, 21),
        ]);
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].equipment_id, "EQ2");
        assert!(trips[0].is_open());
    }

    #[test]
    fn test_duplicate_release_opens_second_trip() {
        let trips = build_trips(&[
            event("EQ1", EventCode::Released, 0, 1),
            event("EQ1", EventCode::Released, 1, 6),
        ]);
        assert_eq!(trips.len(), 2);
        assert!(trips.iter().all(Trip::is_open));
        assert_eq!(trips[1].origin_city_id, 6);
    }

    #[test]
    fn test_placements_match_fifo() {
        let trips = build_trips(&[
            event("EQ1", EventCode::Released, 0, 1),
            event("EQ1", EventCode::Released, 1, 6),
            event("EQ1", EventCode::Placed, 3, 21),
            event("EQ1", EventCode::Placed, 5, 49),
        ]);
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].destination_city_id, Some(21));
        assert_eq!(trips[0].total_trip_hours, 3.0);
        assert_eq!(trips[1].destination_city_id, Some(49));
        assert_eq!(trips[1].total_trip_hours, 4.0);
    }

    #[test]
    fn test_interleaved_release_place_release_place() {
        let trips = build_trips(&[
            event("EQ1", EventCode::Released, 0, 1),
            event("EQ1", EventCode::Placed, 1, 21),
            event("EQ1", EventCode::Released, 2, 21),
            event("EQ1", EventCode::Placed, 4, 1),
        ]);
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].end_utc, Some(base() + Duration::hours(1)));
        assert_eq!(trips[0].destination_city_id, Some(21));
        assert_eq!(trips[1].origin_city_id, 21);
        assert_eq!(trips[1].destination_city_id, Some(1));
        assert_eq!(trips[1].total_trip_hours, 2.0);
    }

    #[test]
    fn test_third_placement_after_two_completed_is_dropped() {
        let trips = build_trips(&[
            event("EQ1", EventCode::Released, 0, 1),
            event("EQ1", EventCode::Released, 1, 6),
            event("EQ1", EventCode::Placed, 2, 21),
            event("EQ1", EventCode::Placed, 3, 49),
            event("EQ1", EventCode::Placed, 4, 30),
        ]);
        assert_eq!(trips[0].destination_city_id, Some(21));
        assert_eq!(trips[1].destination_city_id, Some(49));
    }

    #[test]
    fn test_equipment_units_are_independent() {
        let trips = build_trips(&[
            event("EQ1", EventCode::Released, 0, 1),
            event("EQ2", EventCode::Released, 1, 6),
            event("EQ2", EventCode::Placed, 2, 21),
        ]);
        assert_eq!(trips[0].equipment_id, "EQ1");
        assert!(trips[0].is_open());
        assert_eq!(trips[1].equipment_id, "EQ2");
        assert_eq!(trips[1].destination_city_id, Some(21));
    }

    #[test]
    fn test_non_actionable_codes_are_ignored() {
        let trips = build_trips(&[
            event("EQ1", EventCode::Departed, 0, 1),
            event("EQ1", EventCode::Released, 1, 1),
            event("EQ1", EventCode::Arrived, 2, 6),
        ]);
        assert_eq!(trips.len(), 1);
        assert!(trips[0].is_open());
    }

    #[test]
    fn test_order_as_given_not_by_time() {
        // Placement timestamped before the release still closes it
        let trips = build_trips(&[
            event("EQ1", EventCode::Released, 5, 1),
            event("EQ1", EventCode::Placed, 3, 21),
        ]);
        assert_eq!(trips[0].destination_city_id, Some(21));
        assert_eq!(trips[0].total_trip_hours, -2.0);
    }

    #[test]
    fn test_replay_step_by_step_matches_build() {
        let events = vec![
            event("EQ1", EventCode::Released, 0, 1),
            event("EQ1", EventCode::Placed, 1, 21),
        ];
        let after_first = apply_event(Vec::new(), &events[0]);
        assert_eq!(after_first.len(), 1);
        assert!(after_first[0].is_open());
        let after_second = apply_event(after_first, &events[1]);
        assert_eq!(after_second, build_trips(&events));
    }

    #[test]
    fn test_empty_input() {
        assert!(build_trips(&[]).is_empty());
    }
}
