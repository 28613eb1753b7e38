use core::fmt;
use serde::{Deserialize, Serialize};

/// Single coordinate axis for board columns and rows.
///
/// Signed on purpose: pixel-to-intersection mapping may land outside the
/// board, and callers detect that by range-checking the result.
pub type Coord = i32;

/// Two-dimensional intersection coordinates `(x, y)`, `x` being the column.
pub type Coord2 = (Coord, Coord);

/// Board dimension shipped by the server when a room is created.
pub const DEFAULT_BOARD_SIZE: usize = 19;

/// Stone color as the server speaks it: one letter, with `"N"` doing double
/// duty as "empty intersection" and "no seat" (spectator).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "W")]
    White,
    #[default]
    #[serde(rename = "N")]
    None,
}

impl Color {
    pub const fn letter(self) -> &'static str {
        match self {
            Color::Black => "B",
            Color::White => "W",
            Color::None => "N",
        }
    }

    pub const fn is_stone(self) -> bool {
        !matches!(self, Color::None)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Board point as it appears inside server payloads (`dead`, `lastMove`).
/// The server marshals these with capital keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl From<Coord2> for Point {
    fn from((x, y): Coord2) -> Self {
        Self { x, y }
    }
}

/// Capture tallies keyed by the capturing color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Captured {
    #[serde(rename = "B")]
    pub black: u32,
    #[serde(rename = "W")]
    pub white: u32,
}

/// One seated connection in the room roster.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_round_trips_through_wire_letters() {
        for (color, letter) in [
            (Color::Black, "\"B\""),
            (Color::White, "\"W\""),
            (Color::None, "\"N\""),
        ] {
            assert_eq!(serde_json::to_string(&color).unwrap(), letter);
            assert_eq!(serde_json::from_str::<Color>(letter).unwrap(), color);
        }
    }

    #[test]
    fn unknown_color_letter_is_rejected() {
        assert!(serde_json::from_str::<Color>("\"X\"").is_err());
    }

    #[test]
    fn point_uses_capital_keys() {
        let point = Point { x: 3, y: 15 };
        assert_eq!(
            serde_json::to_value(point).unwrap(),
            serde_json::json!({"X": 3, "Y": 15})
        );
    }

    #[test]
    fn captured_uses_color_letter_keys() {
        let captured: Captured = serde_json::from_str(r#"{"B": 4, "W": 0}"#).unwrap();
        assert_eq!(captured.black, 4);
        assert_eq!(captured.white, 0);
    }
}
