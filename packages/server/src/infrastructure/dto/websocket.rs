//! Wire events exchanged over the persistent WebSocket connection.
//!
//! Every frame is a JSON object tagged by its `event` field, e.g.
//! `{"event":"editor-update","room":"r1","value":"print(1)"}`. Chat message
//! payloads are uninterpreted JSON values and travel through unchanged.

use serde::{Deserialize, Serialize};

/// Events a client sends to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum ClientEvent {
    /// Join (and lazily create) the named room.
    JoinRoom { room: String },
    /// Replace the room's code buffer with the full latest text.
    EditorUpdate { room: String, value: String },
    /// Replace the room's selected language.
    LanguageUpdate { room: String, language: String },
    /// Append an opaque chat payload to the room transcript.
    ChatMessage {
        room: String,
        message: serde_json::Value,
    },
}

/// Events the server sends to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// Sent to the first member of a room: the session starts blank.
    EditorInitialization { room: String },
    /// The latest code buffer, on update fan-out or join snapshot.
    EditorUpdateReturn { room: String, value: String },
    /// The latest selected language, on update fan-out or join snapshot.
    LanguageUpdateReturn { room: String, language: String },
    /// The full transcript so far, on join snapshot only.
    ChatHistory {
        room: String,
        messages: Vec<serde_json::Value>,
    },
    /// One chat message, fanned out to the whole room including the sender.
    ChatMessageReturn {
        room: String,
        message: serde_json::Value,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_events_use_kebab_case_tags() {
        let event = ClientEvent::JoinRoom {
            room: "r1".to_string(),
        };

        let json = serde_json::to_string(&event).unwrap();

        assert_eq!(json, r#"{"event":"join-room","room":"r1"}"#);
    }

    #[test]
    fn editor_update_round_trips() {
        let json = r#"{"event":"editor-update","room":"r1","value":"print(1)"}"#;

        let event: ClientEvent = serde_json::from_str(json).unwrap();

        assert_eq!(
            event,
            ClientEvent::EditorUpdate {
                room: "r1".to_string(),
                value: "print(1)".to_string(),
            }
        );
    }

    #[test]
    fn chat_message_payload_stays_opaque() {
        let json = r#"{"event":"chat-message","room":"r1","message":{"user":"alice","text":"hi"}}"#;

        let event: ClientEvent = serde_json::from_str(json).unwrap();

        match event {
            ClientEvent::ChatMessage { room, message } => {
                assert_eq!(room, "r1");
                assert_eq!(message, serde_json::json!({"user":"alice","text":"hi"}));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn frame_with_missing_field_does_not_parse() {
        // `value` is required for editor-update; the gateway drops frames
        // that fail to parse.
        let json = r#"{"event":"editor-update","room":"r1"}"#;

        assert!(serde_json::from_str::<ClientEvent>(json).is_err());
    }

    #[test]
    fn frame_with_unknown_event_does_not_parse() {
        let json = r#"{"event":"self-destruct","room":"r1"}"#;

        assert!(serde_json::from_str::<ClientEvent>(json).is_err());
    }

    #[test]
    fn server_events_use_kebab_case_tags() {
        let event = ServerEvent::LanguageUpdateReturn {
            room: "r1".to_string(),
            language: "python".to_string(),
        };

        let json = serde_json::to_string(&event).unwrap();

        assert_eq!(
            json,
            r#"{"event":"language-update-return","room":"r1","language":"python"}"#
        );
    }

    #[test]
    fn chat_history_serializes_message_list_in_order() {
        let event = ServerEvent::ChatHistory {
            room: "r1".to_string(),
            messages: vec![serde_json::json!("first"), serde_json::json!("second")],
        };

        let json = serde_json::to_string(&event).unwrap();

        assert_eq!(
            json,
            r#"{"event":"chat-history","room":"r1","messages":["first","second"]}"#
        );
    }
}
