pub const SELECT_ALL_CITIES: &str = r#"
SELECT id, city_name, time_zone FROM canadian_cities ORDER BY id;
"#;

pub const SELECT_EVENT_CODES: &str = r#"
SELECT id, event_code, event_description, long_description FROM event_code_definitions ORDER BY id;
"#;

pub const INSERT_EQUIPMENT_EVENT: &str = r#"
INSERT INTO equipment_events (equipment_id, event_code, event_time, city_id, upload_id)
VALUES ($1, $2, $3, $4, $5);
"#;

pub const INSERT_TRIP: &str = r#"
INSERT INTO trips (equipment_id, origin_city_id, destination_city_id, start_utc, end_utc, total_trip_hours, upload_id)
VALUES ($1, $2, $3, $4, $5, $6, $7);
"#;

pub const SELECT_EVENTS_FOR_EQUIPMENT: &str = r#"
SELECT e.id, e.equipment_id, e.event_code, e.event_time, e.city_id, c.city_name
FROM equipment_events e
JOIN canadian_cities c ON c.id = e.city_id
WHERE e.equipment_id = $1
ORDER BY e.event_time ASC, e.id ASC;
"#;

pub const SELECT_ALL_TRIPS: &str = r#"
SELECT t.id,
       t.equipment_id,
       t.origin_city_id,
       o.city_name AS origin_city_name,
       t.destination_city_id,
       d.city_name AS destination_city_name,
       t.start_utc,
       t.end_utc,
       t.total_trip_hours
FROM trips t
JOIN canadian_cities o ON o.id = t.origin_city_id
LEFT JOIN canadian_cities d ON d.id = t.destination_city_id
ORDER BY t.start_utc ASC, t.id ASC;
"#;
