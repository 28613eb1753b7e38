use serde::{Deserialize, Serialize};

use crate::types::{Captured, Color, Coord2, Player, Point, DEFAULT_BOARD_SIZE};

/// Full game state as broadcast by the server. Replaced wholesale on every
/// `state` message; the client never patches one in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default = "default_size")]
    pub size: usize,
    pub turn: Color,
    /// Intersection marks indexed `[column][row]`.
    pub board: Vec<Vec<Color>>,
    pub captured: Captured,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_move: Option<Point>,
    pub over: bool,
    #[serde(default)]
    pub result: String,
    pub scoring: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dead: Vec<Point>,
    #[serde(default)]
    pub players: Vec<Player>,
}

fn default_size() -> usize {
    DEFAULT_BOARD_SIZE
}

impl Snapshot {
    pub fn in_bounds(&self, (x, y): Coord2) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    /// Mark at an intersection, or `None` when the coordinates fall off the
    /// stored grid.
    pub fn at(&self, (x, y): Coord2) -> Option<Color> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.board.get(x)?.get(y).copied()
    }

    pub fn is_empty_at(&self, cell: Coord2) -> bool {
        matches!(self.at(cell), Some(Color::None))
    }
}
