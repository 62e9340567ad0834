use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A past lab event.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct EventEntryDto {
    pub date: NaiveDate,
    /// Wall-clock time, formatted as HH:MM
    #[schema(value_type = String, example = "10:00")]
    #[serde(with = "hour_minute")]
    pub time: NaiveTime,
    pub description: String,
}

impl EventEntryDto {
    /// Line shown in the recent events list, e.g. "2024-05-01 10:00: Power outage".
    pub fn display_line(&self) -> String {
        format!(
            "{} {}: {}",
            self.date.format("%Y-%m-%d"),
            self.time.format("%H:%M"),
            self.description
        )
    }
}

/// Metadata of an attached image. The bytes never leave the browser.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub content_type: Option<String>,
    pub size_bytes: Option<u64>,
}

/// Event form submission.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LogEventRequest {
    pub date: NaiveDate,
    #[schema(value_type = String, example = "14:30")]
    #[serde(with = "hour_minute")]
    pub time: NaiveTime,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<ImageAttachment>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct EventAcknowledgement {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecentEventsView {
    pub events: Vec<EventEntryDto>,
}

/// `HH:MM` on the wire; seconds are accepted on input and dropped on output.
mod hour_minute {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display_line() {
        let event = EventEntryDto {
            date: NaiveDate::from_ymd_opt(2024, 4, 15).unwrap(),
            time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            description: "New feed supplier onboarded".to_string(),
        };
        assert_eq!(
            event.display_line(),
            "2024-04-15 14:30: New feed supplier onboarded"
        );
    }

    #[test]
    fn test_log_request_accepts_seconds_and_missing_fields() {
        let request: LogEventRequest =
            serde_json::from_str(r#"{"date":"2024-06-01","time":"08:05:30"}"#).unwrap();
        assert_eq!(request.time, NaiveTime::from_hms_opt(8, 5, 30).unwrap());
        assert!(request.description.is_empty());
        assert!(request.image.is_none());

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["time"], "08:05");
    }
}
