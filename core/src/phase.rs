use goban_protocol::Snapshot;

/// Where a game sits in its lifecycle. The wire carries this as two booleans;
/// deriving the variant once keeps every gate and draw step on one model.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Normal,
    Scoring,
    Over,
}

impl Phase {
    /// Finalizing a score leaves the scoring flag set on terminal snapshots,
    /// so `over` always wins.
    pub const fn from_flags(over: bool, scoring: bool) -> Phase {
        match (over, scoring) {
            (true, _) => Phase::Over,
            (false, true) => Phase::Scoring,
            (false, false) => Phase::Normal,
        }
    }

    pub fn of(snapshot: &Snapshot) -> Phase {
        Phase::from_flags(snapshot.over, snapshot.scoring)
    }
}
