use chrono::{NaiveDate, NaiveTime};
use common::{EventAcknowledgement, EventEntryDto, LogEventRequest};
use tracing::info;

pub const EVENT_LOGGED_MESSAGE: &str = "Event logged successfully!";

/// Fixed list shown under "Recent Events". Submissions never appear here.
pub fn recent_events() -> Vec<EventEntryDto> {
    [
        ((2024, 5, 1), (10, 0), "Power outage affected tanks 1-5"),
        ((2024, 4, 15), (14, 30), "New feed supplier onboarded"),
        ((2024, 3, 22), (9, 15), "Maintenance performed on filtration system"),
    ]
    .into_iter()
    .filter_map(|((y, m, d), (hour, minute), description)| {
        Some(EventEntryDto {
            date: NaiveDate::from_ymd_opt(y, m, d)?,
            time: NaiveTime::from_hms_opt(hour, minute, 0)?,
            description: description.to_string(),
        })
    })
    .collect()
}

/// Acknowledges a submission. Nothing is validated and nothing is stored.
pub fn log_event(request: &LogEventRequest) -> EventAcknowledgement {
    info!(
        date = %request.date,
        time = %request.time,
        description_len = request.description.len(),
        image = request.image.as_ref().map(|i| i.file_name.as_str()),
        "Event submitted; discarding"
    );
    EventAcknowledgement {
        message: EVENT_LOGGED_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::ImageAttachment;

    #[test]
    fn test_recent_events_are_fixed() {
        let lines: Vec<String> = recent_events().iter().map(|e| e.display_line()).collect();
        assert_eq!(
            lines,
            vec![
                "2024-05-01 10:00: Power outage affected tanks 1-5",
                "2024-04-15 14:30: New feed supplier onboarded",
                "2024-03-22 09:15: Maintenance performed on filtration system",
            ]
        );
    }

    #[test]
    fn test_empty_description_is_acknowledged_and_list_unchanged() {
        let before = recent_events();
        let request = LogEventRequest {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            description: String::new(),
            image: Some(ImageAttachment {
                file_name: "tank7.png".to_string(),
                content_type: Some("image/png".to_string()),
                size_bytes: Some(2048),
            }),
        };

        let ack = log_event(&request);

        assert_eq!(ack.message, EVENT_LOGGED_MESSAGE);
        assert_eq!(recent_events(), before);
    }
}
