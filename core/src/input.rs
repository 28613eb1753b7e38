use goban_protocol::{ClientMsg, Snapshot};

use crate::grid::BoardGeometry;
use crate::phase::Phase;

/// Translate a pointer click into an outgoing action, gated by the phase of
/// play. The client never pre-validates legality beyond bounds: occupied
/// intersections, suicide and ko are the server's call, surfaced through the
/// next `state` or `error` message.
pub fn click_action(
    snapshot: Option<&Snapshot>,
    geometry: &BoardGeometry,
    px: f64,
    py: f64,
) -> Option<ClientMsg> {
    let snapshot = snapshot?;
    let cell = geometry.to_cell(px, py);
    if !snapshot.in_bounds(cell) {
        return None;
    }

    let (x, y) = cell;
    match Phase::of(snapshot) {
        Phase::Over => None,
        Phase::Scoring => Some(ClientMsg::ToggleDead { x, y }),
        Phase::Normal => Some(ClientMsg::Place { x, y }),
    }
}

/// First action after every (re)open: the server is the sole source of truth,
/// so a fresh snapshot is requested explicitly rather than assumed.
pub const fn open_action() -> ClientMsg {
    ClientMsg::Sync
}
