use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Railcar status codes from the event dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCode {
    #[serde(rename = "W")]
    Released,
    #[serde(rename = "A")]
    Arrived,
    #[serde(rename = "D")]
    Departed,
    #[serde(rename = "Z")]
    Placed,
}

impl EventCode {
    /// Case-insensitive match on the single-letter code.
    pub fn parse(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "W" => Some(Self::Released),
            "A" => Some(Self::Arrived),
            "D" => Some(Self::Departed),
            "Z" => Some(Self::Placed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Released => "W",
            Self::Arrived => "A",
            Self::Departed => "D",
            Self::Placed => "Z",
        }
    }

    /// Only releases and placements open or close trips.
    pub fn is_actionable(&self) -> bool {
        matches!(self, Self::Released | Self::Placed)
    }
}

impl fmt::Display for EventCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCodeDefinition {
    pub id: i32,
    pub event_code: String,
    pub event_description: String,
    pub long_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(EventCode::parse("w"), Some(EventCode::Released));
        assert_eq!(EventCode::parse("Z"), Some(EventCode::Placed));
        assert_eq!(EventCode::parse("a"), Some(EventCode::Arrived));
        assert_eq!(EventCode::parse("X"), None);
        assert_eq!(EventCode::parse(""), None);
        assert_eq!(EventCode::parse("WZ"), None);
    }

    #[test]
    fn test_only_release_and_place_are_actionable() {
        assert!(EventCode::Released.is_actionable());
        assert!(EventCode::Placed.is_actionable());
        assert!(!EventCode::Arrived.is_actionable());
        assert!(!EventCode::Departed.is_actionable());
    }

    #[test]
    fn test_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&EventCode::Placed).unwrap(), "\"Z\"");
        assert_eq!(EventCode::Departed.to_string(), "D");
    }
}
