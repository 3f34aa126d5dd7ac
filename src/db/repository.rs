use anyhow::Result;
use sqlx::{Postgres, Transaction};
use tracing::info;
use uuid::Uuid;

use super::{queries, DbPool};
use crate::models::city::City;
use crate::models::equipment_event::{EquipmentEvent, EquipmentEventRecord};
use crate::models::event_code::EventCodeDefinition;
use crate::models::trip::{Trip, TripRecord};

pub async fn load_cities(pool: &DbPool) -> Result<Vec<City>> {
    let cities = sqlx::query_as::<_, City>(queries::SELECT_ALL_CITIES)
        .fetch_all(pool)
        .await?;
    Ok(cities)
}

pub async fn load_event_codes(pool: &DbPool) -> Result<Vec<EventCodeDefinition>> {
    let codes = sqlx::query_as::<_, EventCodeDefinition>(queries::SELECT_EVENT_CODES)
        .fetch_all(pool)
        .await?;
    Ok(codes)
}

pub async fn insert_events(
    tx: &mut Transaction<'_, Postgres>,
    upload_id: Uuid,
    events: &[EquipmentEvent],
) -> Result<()> {
    for event in events {
        sqlx::query(queries::INSERT_EQUIPMENT_EVENT)
            .bind(&event.equipment_id)
            .bind(event.event_code.as_str())
            .bind(event.event_time)
            .bind(event.city_id)
            .bind(upload_id)
            .execute(&mut **tx)
            .await?;
    }
    info!("Stored {} equipment events for upload {}", events.len(), upload_id);
    Ok(())
}

pub async fn insert_trips(
    tx: &mut Transaction<'_, Postgres>,
    upload_id: Uuid,
    trips: &[Trip],
) -> Result<()> {
    for trip in trips {
        sqlx::query(queries::INSERT_TRIP)
            .bind(&trip.equipment_id)
            .bind(trip.origin_city_id)
            .bind(trip.destination_city_id)
            .bind(trip.start_utc)
            .bind(trip.end_utc)
            .bind(trip.total_trip_hours)
            .bind(upload_id)
            .execute(&mut **tx)
            .await?;
    }
    info!("Stored {} trips for upload {}", trips.len(), upload_id);
    Ok(())
}

pub async fn fetch_events_for_equipment(
    pool: &DbPool,
    equipment_id: &str,
) -> Result<Vec<EquipmentEventRecord>> {
    let events = sqlx::query_as::<_, EquipmentEventRecord>(queries::SELECT_EVENTS_FOR_EQUIPMENT)
        .bind(equipment_id)
        .fetch_all(pool)
        .await?;
    Ok(events)
}

pub async fn fetch_all_trips(pool: &DbPool) -> Result<Vec<TripRecord>> {
    let trips = sqlx::query_as::<_, TripRecord>(queries::SELECT_ALL_TRIPS)
        .fetch_all(pool)
        .await?;
    Ok(trips)
}
