use serde::{Deserialize, Serialize};

use crate::snapshot::Snapshot;
use crate::types::{Color, Coord};

/// Messages the server pushes to a room connection.
///
/// The server also broadcasts a bare `{"type":"players"}` notice when a
/// connection drops; it carries nothing a snapshot does not, so it is left
/// unmodeled and fails decoding like any other unknown payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMsg {
    State(Snapshot),
    Welcome {
        #[serde(default)]
        color: Color,
    },
    Error {
        error: String,
    },
}

/// Actions a client may send. Coordinates ride as lowercase `x`/`y`, unlike
/// the capital-keyed points inside snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientMsg {
    Sync,
    Place { x: Coord, y: Coord },
    Pass,
    Resign,
    RequestScore,
    FinalizeScore,
    ToggleDead { x: Coord, y: Coord },
}

pub fn decode_server(text: &str) -> serde_json::Result<ServerMsg> {
    serde_json::from_str(text)
}

pub fn encode_client(msg: &ClientMsg) -> serde_json::Result<String> {
    serde_json::to_string(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;
    use serde_json::json;

    // Trimmed to a 3x3 grid; the field shapes are what the server emits.
    const STATE_FIXTURE: &str = r#"{
        "type": "state",
        "size": 3,
        "turn": "W",
        "board": [["B","N","N"],["N","W","N"],["N","N","N"]],
        "captured": {"B": 2, "W": 0},
        "lastMove": {"X": 1, "Y": 1},
        "over": false,
        "result": "",
        "scoring": true,
        "dead": [{"X": 0, "Y": 0}],
        "players": [{"color": "B"}, {"color": "W"}]
    }"#;

    #[test]
    fn decodes_state_broadcast() {
        let ServerMsg::State(snapshot) = decode_server(STATE_FIXTURE).unwrap() else {
            panic!("expected a state message");
        };

        assert_eq!(snapshot.size, 3);
        assert_eq!(snapshot.turn, Color::White);
        assert_eq!(snapshot.at((0, 0)), Some(Color::Black));
        assert_eq!(snapshot.at((1, 1)), Some(Color::White));
        assert_eq!(snapshot.captured.black, 2);
        assert_eq!(snapshot.last_move, Some(Point { x: 1, y: 1 }));
        assert!(snapshot.scoring);
        assert_eq!(snapshot.dead, vec![Point { x: 0, y: 0 }]);
        assert_eq!(snapshot.players.len(), 2);
    }

    #[test]
    fn decodes_welcome_and_error() {
        assert_eq!(
            decode_server(r#"{"type":"welcome","color":"B"}"#).unwrap(),
            ServerMsg::Welcome { color: Color::Black }
        );
        assert_eq!(
            decode_server(r#"{"type":"error","error":"occupied"}"#).unwrap(),
            ServerMsg::Error {
                error: "occupied".to_string()
            }
        );
    }

    #[test]
    fn welcome_without_color_means_spectator() {
        assert_eq!(
            decode_server(r#"{"type":"welcome"}"#).unwrap(),
            ServerMsg::Welcome { color: Color::None }
        );
    }

    #[test]
    fn players_notice_is_not_a_server_msg() {
        assert!(decode_server(r#"{"type":"players","players":[]}"#).is_err());
        assert!(decode_server("not json").is_err());
    }

    #[test]
    fn client_msgs_encode_to_tagged_objects() {
        let cases = [
            (ClientMsg::Sync, json!({"type": "sync"})),
            (
                ClientMsg::Place { x: 3, y: 4 },
                json!({"type": "place", "x": 3, "y": 4}),
            ),
            (ClientMsg::Pass, json!({"type": "pass"})),
            (ClientMsg::Resign, json!({"type": "resign"})),
            (ClientMsg::RequestScore, json!({"type": "request-score"})),
            (ClientMsg::FinalizeScore, json!({"type": "finalize-score"})),
            (
                ClientMsg::ToggleDead { x: 0, y: 18 },
                json!({"type": "toggle-dead", "x": 0, "y": 18}),
            ),
        ];

        for (msg, expected) in cases {
            let encoded = encode_client(&msg).unwrap();
            let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
            assert_eq!(value, expected, "wire shape for {msg:?}");
        }
    }
}
