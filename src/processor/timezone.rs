use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Windows zone names as stored in the seed city table, mapped to the
/// Canadian zone that carries the same rules.
const WINDOWS_ZONES: &[(&str, Tz)] = &[
    ("Pacific Standard Time", Tz::America__Vancouver),
    ("Mountain Standard Time", Tz::America__Edmonton),
    ("Canada Central Standard Time", Tz::America__Regina),
    ("Central Standard Time", Tz::America__Winnipeg),
    ("Eastern Standard Time", Tz::America__Toronto),
    ("Atlantic Standard Time", Tz::America__Halifax),
    ("Newfoundland Standard Time", Tz::America__St_Johns),
    ("UTC", Tz::UTC),
];

/// Resolve an IANA id (`America/Toronto`) or a Windows id
/// (`Eastern Standard Time`) to a tz database zone.
pub fn resolve_time_zone(id: &str) -> Option<Tz> {
    let id = id.trim();
    if let Ok(tz) = id.parse::<Tz>() {
        return Some(tz);
    }
    WINDOWS_ZONES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(id))
        .map(|(_, tz)| *tz)
}

/// Interpret `local` as wall-clock time in `tz` and convert it to UTC.
///
/// A time repeated by a fall-back transition is read as standard time.
/// A time skipped by a spring-forward transition does not exist and yields `None`.
pub fn local_to_utc(local: NaiveDateTime, tz: Tz) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(_, standard) => Some(standard.with_timezone(&Utc)),
        LocalResult::None => None,
    }
}
