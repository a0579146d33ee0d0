//! Messages pushed to spectators over WebSocket.

use serde::{Deserialize, Serialize};

use crate::domain::GameSnapshot;

/// Server → client message, discriminated by `"type"`.
///
/// ```json
/// {"type":"update","calledNumbers":[17,4],"playersCount":3,"roundStarted":true}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ServerMessage {
    /// Current round and lobby state.
    Update {
        /// Numbers called so far, in draw order.
        called_numbers: Vec<u8>,
        /// Players in the lobby.
        players_count: usize,
        /// Whether a round is running.
        round_started: bool,
    },
}

impl From<&GameSnapshot> for ServerMessage {
    fn from(snapshot: &GameSnapshot) -> Self {
        Self::Update {
            called_numbers: snapshot.called_numbers.clone(),
            players_count: snapshot.players_count,
            round_started: snapshot.round_started,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn update_wire_shape() {
        let snapshot = GameSnapshot {
            called_numbers: vec![17, 4],
            players_count: 3,
            round_started: true,
            round: 1,
            revision: 12,
        };
        let Ok(json) = serde_json::to_value(ServerMessage::from(&snapshot)) else {
            panic!("serialization failed");
        };
        assert_eq!(
            json,
            serde_json::json!({
                "type": "update",
                "calledNumbers": [17, 4],
                "playersCount": 3,
                "roundStarted": true,
            })
        );
    }

    #[test]
    fn update_parses_from_wire() {
        let text = r#"{"type":"update","calledNumbers":[],"playersCount":0,"roundStarted":false}"#;
        let Ok(msg) = serde_json::from_str::<ServerMessage>(text) else {
            panic!("deserialization failed");
        };
        assert_eq!(
            msg,
            ServerMessage::Update {
                called_numbers: vec![],
                players_count: 0,
                round_started: false,
            }
        );
    }
}
