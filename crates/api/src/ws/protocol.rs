//! JSON wire format for the notification gateway.
//!
//! Every frame in either direction is a text message of the form
//! `{"event": <name>, "data": <payload>}`.

use axum::extract::ws::Message;
use serde::{Deserialize, Serialize};
use uwrap_core::types::DbId;

pub const SUBSCRIBE_PROJECT: &str = "subscribe:project";
pub const UNSUBSCRIBE_PROJECT: &str = "unsubscribe:project";
pub const ERROR_EVENT: &str = "error";

/// Inbound frames a client may send.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ClientMessage {
    #[serde(rename = "subscribe:project")]
    SubscribeProject(WireId),
    #[serde(rename = "unsubscribe:project")]
    UnsubscribeProject(WireId),
}

impl ClientMessage {
    /// Parse a text frame.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// An entity id that clients may send either as a JSON number or a numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawId")]
pub struct WireId(pub DbId);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(DbId),
    Text(String),
}

impl TryFrom<RawId> for WireId {
    type Error = String;

    fn try_from(raw: RawId) -> Result<Self, Self::Error> {
        match raw {
            RawId::Number(id) => Ok(WireId(id)),
            RawId::Text(s) => s
                .trim()
                .parse()
                .map(WireId)
                .map_err(|_| format!("'{s}' is not a valid id")),
        }
    }
}

/// Reply to a subscribe or unsubscribe frame.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionAck {
    pub status: &'static str,
    #[serde(rename = "projectId")]
    pub project_id: DbId,
}

impl SubscriptionAck {
    pub fn subscribed(project_id: DbId) -> Self {
        Self {
            status: "subscribed",
            project_id,
        }
    }

    pub fn unsubscribed(project_id: DbId) -> Self {
        Self {
            status: "unsubscribed",
            project_id,
        }
    }
}

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    event: &'a str,
    data: &'a T,
}

/// Build an outbound text frame for `event` carrying `data`.
pub fn frame<T: Serialize>(event: &str, data: &T) -> Result<Message, serde_json::Error> {
    let text = serde_json::to_string(&Envelope { event, data })?;
    Ok(Message::Text(text.into()))
}

/// Build an outbound text frame from an already-serialized JSON payload.
pub fn event_frame(event: &str, data: &serde_json::Value) -> Message {
    let text = serde_json::json!({ "event": event, "data": data }).to_string();
    Message::Text(text.into())
}

/// Build an `error` frame with a human-readable message.
pub fn error_frame(message: &str) -> Message {
    event_frame(ERROR_EVENT, &serde_json::json!({ "message": message }))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn subscribe_accepts_numeric_id() {
        let msg = ClientMessage::parse(r#"{"event":"subscribe:project","data":12}"#).unwrap();
        assert_eq!(msg, ClientMessage::SubscribeProject(WireId(12)));
    }

    #[test]
    fn unsubscribe_accepts_string_id() {
        let msg = ClientMessage::parse(r#"{"event":"unsubscribe:project","data":"34"}"#).unwrap();
        assert_eq!(msg, ClientMessage::UnsubscribeProject(WireId(34)));
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        assert_matches!(
            ClientMessage::parse(r#"{"event":"subscribe:project","data":"abc"}"#),
            Err(_)
        );
    }

    #[test]
    fn unknown_event_is_rejected() {
        assert_matches!(ClientMessage::parse(r#"{"event":"join","data":1}"#), Err(_));
    }

    #[test]
    fn ack_uses_project_id_key() {
        let msg = frame(SUBSCRIBE_PROJECT, &SubscriptionAck::subscribed(5)).unwrap();
        let Message::Text(text) = msg else {
            panic!("expected text frame");
        };
        let value: serde_json::Value = serde_json::from_str(text.as_str()).unwrap();
        assert_eq!(value["event"], "subscribe:project");
        assert_eq!(value["data"]["status"], "subscribed");
        assert_eq!(value["data"]["projectId"], 5);
    }
}
