use chrono::{NaiveDate, NaiveDateTime};
use csv::ByteRecord;
use std::borrow::Cow;
use std::io::Read;
use tracing::{debug, info, warn};

use crate::error::{ProcessingError, Result};
use crate::models::city::CityLookup;
use crate::models::equipment_event::EquipmentEvent;
use crate::models::event_code::EventCode;
use crate::processor::timezone::{local_to_utc, resolve_time_zone};

const MINIMUM_CSV_COLUMNS: usize = 4;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%d %B %Y %H:%M:%S",
    "%B %d, %Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d %B %Y", "%B %d, %Y"];

/// Parse an uploaded event file into UTC-normalized equipment events.
///
/// The first line is a header and is only checked for being non-blank.
/// Each data line is `equipmentId,eventCode,localEventTime,cityId[,...]`;
/// lines that fail validation are logged and dropped, and the surviving
/// events keep their file order.
pub fn parse_events<R: Read>(input: R, cities: &impl CityLookup) -> Result<Vec<EquipmentEvent>> {
    if cities.is_empty() {
        warn!("No reference cities available, skipping event parsing");
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(input);

    let mut record = ByteRecord::new();

    // Leading empty lines are skipped by the reader, so a header that does
    // not start on line 1 means the first line was blank.
    let has_header = read_record(&mut reader, &mut record)?
        && record.position().map_or(false, |p| p.line() == 1)
        && !is_blank(&record);
    if !has_header {
        return Err(ProcessingError::invalid_format(
            "CSV file is empty or missing header.",
        ));
    }

    let mut events = Vec::new();
    let mut skipped = 0usize;

    while read_record(&mut reader, &mut record)? {
        // Header occupies line 1 of the file
        let line_number = record.position().map_or(0, |p| p.line() + 1);

        if is_blank(&record) {
            continue;
        }

        match parse_line(&record, line_number, cities)? {
            Some(event) => events.push(event),
            None => skipped += 1,
        }
    }

    info!("Parsed {} events ({} lines skipped)", events.len(), skipped);
    Ok(events)
}

fn read_record<R: Read>(reader: &mut csv::Reader<R>, record: &mut ByteRecord) -> Result<bool> {
    reader
        .read_byte_record(record)
        .map_err(|err| ProcessingError::Io(err.into()))
}

fn is_blank(record: &ByteRecord) -> bool {
    record.len() == 1 && record[0].iter().all(u8::is_ascii_whitespace)
}

fn field(record: &ByteRecord, index: usize) -> Cow<'_, str> {
    String::from_utf8_lossy(&record[index])
}

/// `Ok(None)` means the line is invalid and should be dropped; `Err` aborts the batch.
fn parse_line(
    record: &ByteRecord,
    line_number: u64,
    cities: &impl CityLookup,
) -> Result<Option<EquipmentEvent>> {
    if record.len() < MINIMUM_CSV_COLUMNS {
        warn!(
            "Line {}: Insufficient columns. Expected {}, found {}",
            line_number,
            MINIMUM_CSV_COLUMNS,
            record.len()
        );
        return Ok(None);
    }

    // Only the first four fields are decoded; anything after them is ignored
    let equipment_id = field(record, 0);
    let event_code_str = field(record, 1);
    let event_time_str = field(record, 2);
    let city_id_str = field(record, 3);
    let (equipment_id, event_code_str, event_time_str, city_id_str) = (
        equipment_id.trim(),
        event_code_str.trim(),
        event_time_str.trim(),
        city_id_str.trim(),
    );

    if equipment_id.is_empty() {
        debug!("Line {}: Missing equipment id", line_number);
        return Ok(None);
    }

    let event_code = match EventCode::parse(event_code_str) {
        Some(code) if code.is_actionable() => code,
        _ => {
            debug!("Line {}: Invalid event code '{}'", line_number, event_code_str);
            return Ok(None);
        }
    };

    let event_local = match parse_local_datetime(event_time_str) {
        Some(t) => t,
        None => {
            debug!("Line {}: Invalid date/time '{}'", line_number, event_time_str);
            return Ok(None);
        }
    };

    let city_id = match city_id_str.parse::<i32>() {
        Ok(id) => id,
        Err(_) => {
            debug!("Line {}: Invalid city ID '{}'", line_number, city_id_str);
            return Ok(None);
        }
    };

    let city = match cities.city(city_id) {
        Some(c) => c,
        None => {
            debug!("Line {}: City ID {} not found", line_number, city_id);
            return Ok(None);
        }
    };

    let tz = resolve_time_zone(&city.time_zone).ok_or_else(|| ProcessingError::UnknownTimeZone {
        city_id,
        time_zone: city.time_zone.clone(),
    })?;

    let event_time = match local_to_utc(event_local, tz) {
        Some(t) => t,
        None => {
            debug!(
                "Line {}: Local time {} does not exist in {}",
                line_number, event_local, city.time_zone
            );
            return Ok(None);
        }
    };

    Ok(Some(EquipmentEvent {
        equipment_id: equipment_id.to_string(),
        event_code,
        event_time,
        city_id,
    }))
}

/// Parse a wall-clock timestamp with no offset. Date-only values mean midnight.
pub fn parse_local_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
