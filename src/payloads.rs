use serde::Serialize;
use serde_json::{Map, Value};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{Event, Update};

/// Body of a `/track` or `/import` call.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TrackPayload {
    pub(crate) event: String,
    pub(crate) properties: Map<String, Value>,
}

impl TrackPayload {
    pub(crate) fn new(token: &str, distinct_id: &str, event_name: &str, event: &Event) -> Self {
        let mut properties = event.properties.clone();
        // Identity fields go in last so they win over caller-supplied keys.
        properties.insert("distinct_id".to_owned(), Value::from(distinct_id));
        if let Some(timestamp) = event.timestamp {
            properties.insert("time".to_owned(), Value::from(unix_seconds(timestamp)));
        }
        properties.insert("token".to_owned(), Value::from(token));
        TrackPayload {
            event: event_name.to_owned(),
            properties,
        }
    }
}

/// Body of an `/engage` call: a flat object keyed by the operation verb.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub(crate) struct EngagePayload {
    pub(crate) fields: Map<String, Value>,
}

impl EngagePayload {
    pub(crate) fn new(token: &str, distinct_id: &str, update: &Update) -> Self {
        let mut fields = Map::new();
        fields.insert(
            update.operation.clone(),
            Value::Object(update.properties.clone()),
        );
        fields.insert("$distinct_id".to_owned(), Value::from(distinct_id));
        fields.insert("$token".to_owned(), Value::from(token));
        EngagePayload { fields }
    }
}

fn unix_seconds(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs() as i64,
        Err(earlier) => -(earlier.duration().as_secs() as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const TOKEN: &str = "e3bc4100330c35722740fb8c6f5abddc";

    fn encode<P: Serialize>(payload: &P) -> String {
        serde_json::to_string(payload).unwrap()
    }

    #[test]
    fn track_payload_injects_identity() {
        let mut properties = Map::new();
        properties.insert("Referred By".to_owned(), "Friend".into());
        let event = Event {
            timestamp: None,
            properties,
        };
        let payload = TrackPayload::new(TOKEN, "13793", "Signed Up", &event);
        assert_eq!(
            encode(&payload),
            r#"{"event":"Signed Up","properties":{"Referred By":"Friend","distinct_id":"13793","token":"e3bc4100330c35722740fb8c6f5abddc"}}"#
        );
    }

    #[test]
    fn track_payload_time_field_is_epoch_seconds() {
        let mut properties = Map::new();
        properties.insert("Referred By".to_owned(), "Friend".into());
        let event = Event {
            timestamp: Some(UNIX_EPOCH + Duration::from_secs(1600000000)),
            properties,
        };
        let payload = TrackPayload::new(TOKEN, "13793", "Signed Up", &event);
        assert_eq!(
            encode(&payload),
            r#"{"event":"Signed Up","properties":{"Referred By":"Friend","distinct_id":"13793","time":1600000000,"token":"e3bc4100330c35722740fb8c6f5abddc"}}"#
        );
    }

    #[test]
    fn track_payload_without_timestamp_has_no_time_field() {
        let payload = TrackPayload::new(TOKEN, "13793", "Signed Up", &Event::default());
        assert!(!payload.properties.contains_key("time"));
    }

    #[test]
    fn injected_fields_win_over_caller_properties() {
        let mut properties = Map::new();
        properties.insert("token".to_owned(), "spoofed".into());
        properties.insert("distinct_id".to_owned(), "spoofed".into());
        let event = Event {
            timestamp: None,
            properties,
        };
        let payload = TrackPayload::new(TOKEN, "13793", "Signed Up", &event);
        assert_eq!(payload.properties["token"], TOKEN);
        assert_eq!(payload.properties["distinct_id"], "13793");
    }

    #[test]
    fn engage_payload_uses_operation_verbatim() {
        let mut properties = Map::new();
        properties.insert("Address".to_owned(), "1313 Mockingbird Lane".into());
        properties.insert("Birthday".to_owned(), "1948-01-01".into());
        let update = Update {
            operation: "$set".to_owned(),
            properties,
        };
        let payload = EngagePayload::new(TOKEN, "13793", &update);
        assert_eq!(
            encode(&payload),
            r#"{"$distinct_id":"13793","$set":{"Address":"1313 Mockingbird Lane","Birthday":"1948-01-01"},"$token":"e3bc4100330c35722740fb8c6f5abddc"}"#
        );
    }

    #[test]
    fn unix_seconds_counts_backwards_before_the_epoch() {
        assert_eq!(unix_seconds(UNIX_EPOCH), 0);
        assert_eq!(unix_seconds(UNIX_EPOCH + Duration::from_secs(1)), 1);
        assert_eq!(unix_seconds(UNIX_EPOCH - Duration::from_secs(1)), -1);
    }
}
