use core::fmt;
use goban_protocol::{decode_server, Color, Coord2, ServerMsg, Snapshot};

use crate::error::{Result, StateError};
use crate::phase::Phase;

/// Link health as shown in the status region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnStatus {
    Connecting,
    Connected(Color),
    Retrying,
    Error(String),
}

impl fmt::Display for ConnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnStatus::Connecting => f.write_str("Connecting..."),
            ConnStatus::Connected(Color::None) => f.write_str("Connected"),
            ConnStatus::Connected(color) => write!(f, "Connected as {color}"),
            ConnStatus::Retrying => f.write_str("Disconnected - retrying..."),
            ConnStatus::Error(text) => write!(f, "Error: {text}"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    NoChange,
    Updated,
}

impl ApplyOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Updated)
    }
}

/// Single source of truth for the authoritative snapshot and the local-only
/// UI state layered on top of it. The snapshot is replaced wholesale on every
/// `state` message; local state survives across snapshots.
#[derive(Clone, Debug)]
pub struct GameStore {
    snapshot: Option<Snapshot>,
    hover: Option<Coord2>,
    my_color: Color,
    connection: ConnStatus,
}

impl Default for GameStore {
    fn default() -> Self {
        Self {
            snapshot: None,
            hover: None,
            my_color: Color::None,
            connection: ConnStatus::Connecting,
        }
    }
}

impl GameStore {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn hover(&self) -> Option<Coord2> {
        self.hover
    }

    pub fn my_color(&self) -> Color {
        self.my_color
    }

    pub fn connection(&self) -> &ConnStatus {
        &self.connection
    }

    pub fn phase(&self) -> Option<Phase> {
        self.snapshot.as_ref().map(Phase::of)
    }

    /// Apply one raw text frame from the server. Payloads that fail to decode
    /// or validate are dropped; the last good snapshot stays displayed.
    pub fn apply_text(&mut self, text: &str) -> ApplyOutcome {
        let applied = decode_server(text)
            .map_err(StateError::from)
            .and_then(|msg| self.apply(msg));

        match applied {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("dropping inbound message: {err}");
                ApplyOutcome::NoChange
            }
        }
    }

    pub fn apply(&mut self, msg: ServerMsg) -> Result<ApplyOutcome> {
        Ok(match msg {
            ServerMsg::State(snapshot) => {
                validate_shape(&snapshot)?;
                self.snapshot = Some(snapshot);
                self.revalidate_hover();
                self.connection = ConnStatus::Connected(self.my_color);
                ApplyOutcome::Updated
            }
            ServerMsg::Welcome { color } => {
                // Seat assignment shows up in the status line with the next
                // state broadcast; nothing on screen changes yet.
                self.my_color = color;
                ApplyOutcome::NoChange
            }
            ServerMsg::Error { error } => {
                self.connection = ConnStatus::Error(error);
                ApplyOutcome::Updated
            }
        })
    }

    /// Move the hover preview. Only empty intersections of the current
    /// snapshot can be hovered, and only during normal play; anything else
    /// clears the preview. Returns whether the hover cell changed.
    pub fn set_hover(&mut self, cell: Option<Coord2>) -> bool {
        let next = cell.filter(|&cell| self.hover_allowed(cell));
        if self.hover == next {
            false
        } else {
            self.hover = next;
            true
        }
    }

    /// The link dropped; the last good snapshot stays on screen while the web
    /// layer retries.
    pub fn connection_lost(&mut self) -> bool {
        if self.connection == ConnStatus::Retrying {
            false
        } else {
            self.connection = ConnStatus::Retrying;
            true
        }
    }

    fn hover_allowed(&self, cell: Coord2) -> bool {
        match &self.snapshot {
            Some(snapshot) => Phase::of(snapshot) == Phase::Normal && snapshot.is_empty_at(cell),
            None => false,
        }
    }

    fn revalidate_hover(&mut self) {
        if let Some(cell) = self.hover {
            if !self.hover_allowed(cell) {
                self.hover = None;
            }
        }
    }
}

fn validate_shape(snapshot: &Snapshot) -> Result<()> {
    let square = snapshot.board.len() == snapshot.size
        && snapshot.board.iter().all(|col| col.len() == snapshot.size);
    if square {
        Ok(())
    } else {
        Err(StateError::InvalidBoardShape)
    }
}
