use serde::{Deserialize, Serialize};

/// Calendar event as served by the FamCal API.
///
/// `start_time` and `end_time` are kept as raw text; the client displays
/// them verbatim and never parses or shifts them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
}

impl Event {
    /// Identifier coerced to text, used as the list row key.
    pub fn key(&self) -> String {
        self.id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_decodes_from_api_json() {
        let body = r#"[{"id":1,"title":"Standup","start_time":"09:00"}]"#;
        let events: Vec<Event> = serde_json::from_str(body).unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, 1);
        assert_eq!(events[0].title, "Standup");
        assert_eq!(events[0].start_time, "09:00");
        assert_eq!(events[0].description, None);
        assert_eq!(events[0].end_time, None);
    }

    #[test]
    fn test_event_keeps_extra_fields_it_serves() {
        let body = r#"{
            "id": 7,
            "title": "School run",
            "description": "Pick up from gate B",
            "start_time": "2024-05-01T08:15:00",
            "end_time": "2024-05-01T08:45:00"
        }"#;
        let event: Event = serde_json::from_str(body).unwrap();

        assert_eq!(event.key(), "7");
        assert_eq!(event.description.as_deref(), Some("Pick up from gate B"));
        assert_eq!(event.end_time.as_deref(), Some("2024-05-01T08:45:00"));
    }

    #[test]
    fn test_event_round_trips_unchanged() {
        let event = Event {
            id: 42,
            title: "Dentist".to_string(),
            description: None,
            start_time: "14:30".to_string(),
            end_time: Some("15:00".to_string()),
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
