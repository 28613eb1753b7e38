use goban_protocol::Snapshot;

use crate::phase::Phase;

const SCORING_INSTRUCTIONS: &str = "Scoring mode: click stones to mark dead, then Finalize";
const EMPTY_ROSTER: &str = "\u{2014}";

/// Text projection of a snapshot for the sidebar regions. Recomputed from
/// scratch on every state change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarView {
    pub turn: String,
    pub captured_black: String,
    pub captured_white: String,
    pub players: String,
    pub result: String,
}

impl SidebarView {
    pub fn project(snapshot: Option<&Snapshot>) -> Self {
        let Some(snapshot) = snapshot else {
            return Self::placeholder();
        };

        let players = snapshot
            .players
            .iter()
            .map(|player| player.color.letter())
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            turn: snapshot.turn.to_string(),
            captured_black: snapshot.captured.black.to_string(),
            captured_white: snapshot.captured.white.to_string(),
            players: if players.is_empty() {
                EMPTY_ROSTER.to_string()
            } else {
                players
            },
            result: match Phase::of(snapshot) {
                Phase::Over => format!("Result: {}", snapshot.result),
                Phase::Scoring => SCORING_INSTRUCTIONS.to_string(),
                Phase::Normal => String::new(),
            },
        }
    }

    fn placeholder() -> Self {
        Self {
            turn: EMPTY_ROSTER.to_string(),
            captured_black: "0".to_string(),
            captured_white: "0".to_string(),
            players: EMPTY_ROSTER.to_string(),
            result: String::new(),
        }
    }
}
