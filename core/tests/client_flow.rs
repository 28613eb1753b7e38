use goban_core::{click_action, open_action, ApplyOutcome, BoardGeometry, GameStore, Phase};
use goban_protocol::{Captured, ClientMsg, Color, Player, Point, ServerMsg, Snapshot};

fn empty_snapshot() -> Snapshot {
    Snapshot {
        size: 19,
        turn: Color::Black,
        board: vec![vec![Color::None; 19]; 19],
        captured: Captured::default(),
        last_move: None,
        over: false,
        result: String::new(),
        scoring: false,
        dead: Vec::new(),
        players: vec![Player { color: Color::Black }],
    }
}

fn geo() -> BoardGeometry {
    BoardGeometry::new(800.0, 20.0, 19)
}

#[test]
fn fresh_connect_places_a_stone_without_local_mutation() {
    let mut store = GameStore::new();
    let geo = geo();

    // Opening the link requests the current snapshot explicitly.
    assert_eq!(open_action(), ClientMsg::Sync);

    store
        .apply(ServerMsg::Welcome { color: Color::Black })
        .unwrap();
    assert!(store
        .apply(ServerMsg::State(empty_snapshot()))
        .unwrap()
        .has_update());
    assert_eq!(store.phase(), Some(Phase::Normal));
    assert_eq!(store.connection().to_string(), "Connected as B");

    let (px, py) = geo.to_px((3, 3));
    let action = click_action(store.snapshot(), &geo, px, py);

    assert_eq!(action, Some(ClientMsg::Place { x: 3, y: 3 }));
    // The board stays untouched until the next state broadcast.
    assert_eq!(store.snapshot().unwrap().at((3, 3)), Some(Color::None));
}

#[test]
fn occupied_intersection_still_emits_place() {
    let mut store = GameStore::new();
    let mut snapshot = empty_snapshot();
    snapshot.board[3][3] = Color::White;
    store.apply(ServerMsg::State(snapshot)).unwrap();

    let (px, py) = geo().to_px((3, 3));
    let action = click_action(store.snapshot(), &geo(), px, py);

    assert_eq!(action, Some(ClientMsg::Place { x: 3, y: 3 }));
}

#[test]
fn server_rejection_changes_only_the_status() {
    let mut store = GameStore::new();
    store.apply(ServerMsg::State(empty_snapshot())).unwrap();
    let before = store.snapshot().cloned().unwrap();

    let outcome = store
        .apply(ServerMsg::Error {
            error: "occupied".to_string(),
        })
        .unwrap();

    assert!(outcome.has_update());
    assert_eq!(store.connection().to_string(), "Error: occupied");
    assert_eq!(store.snapshot().unwrap(), &before);
}

#[test]
fn scoring_double_click_emits_two_toggles() {
    let mut store = GameStore::new();
    let mut snapshot = empty_snapshot();
    snapshot.scoring = true;
    snapshot.board[5][5] = Color::Black;
    store.apply(ServerMsg::State(snapshot)).unwrap();

    let (px, py) = geo().to_px((5, 5));
    let first = click_action(store.snapshot(), &geo(), px, py);
    // Toggling is not tracked client-side; the second click re-emits.
    let second = click_action(store.snapshot(), &geo(), px, py);

    assert_eq!(first, Some(ClientMsg::ToggleDead { x: 5, y: 5 }));
    assert_eq!(second, first);
}

#[test]
fn over_suppresses_every_pointer_click() {
    let mut store = GameStore::new();
    let mut snapshot = empty_snapshot();
    snapshot.over = true;
    snapshot.result = "B+2.5".to_string();
    store.apply(ServerMsg::State(snapshot)).unwrap();

    for cell in [(0, 0), (9, 9), (18, 18)] {
        let (px, py) = geo().to_px(cell);
        assert_eq!(click_action(store.snapshot(), &geo(), px, py), None);
    }
}

#[test]
fn finalized_game_keeps_scoring_flag_but_counts_as_over() {
    let mut store = GameStore::new();
    let mut snapshot = empty_snapshot();
    snapshot.over = true;
    snapshot.scoring = true;
    snapshot.result = "W+0.5".to_string();
    store.apply(ServerMsg::State(snapshot)).unwrap();

    assert_eq!(store.phase(), Some(Phase::Over));
    let (px, py) = geo().to_px((2, 2));
    assert_eq!(click_action(store.snapshot(), &geo(), px, py), None);
}

#[test]
fn hover_survives_only_compatible_snapshots() {
    let mut store = GameStore::new();
    store.apply(ServerMsg::State(empty_snapshot())).unwrap();
    assert!(store.set_hover(Some((3, 3))));

    // A snapshot that keeps the cell empty keeps the hover.
    store.apply(ServerMsg::State(empty_snapshot())).unwrap();
    assert_eq!(store.hover(), Some((3, 3)));

    // Entering scoring clears it and blocks new hovers.
    let mut scoring = empty_snapshot();
    scoring.scoring = true;
    scoring.dead.push(Point { x: 2, y: 2 });
    store.apply(ServerMsg::State(scoring)).unwrap();
    assert_eq!(store.hover(), None);
    assert!(!store.set_hover(Some((3, 3))));
}

#[test]
fn bad_payloads_never_reach_the_snapshot() {
    let mut store = GameStore::new();
    store.apply(ServerMsg::State(empty_snapshot())).unwrap();
    let before = store.snapshot().cloned().unwrap();

    let bad = [
        "garbage",
        r#"{"type":"players"}"#,
        r#"{"type":"state","size":2,"turn":"B","board":[["N","N"]],"captured":{"B":0,"W":0},"over":false,"scoring":false}"#,
    ];
    for text in bad {
        assert_eq!(store.apply_text(text), ApplyOutcome::NoChange);
    }

    assert_eq!(store.snapshot().unwrap(), &before);
}

#[test]
fn reconnect_cycle_restores_connected_status() {
    let mut store = GameStore::new();
    store
        .apply(ServerMsg::Welcome { color: Color::White })
        .unwrap();
    store.apply(ServerMsg::State(empty_snapshot())).unwrap();

    assert!(store.connection_lost());
    assert_eq!(store.connection().to_string(), "Disconnected - retrying...");
    // The last good snapshot stays displayed while retrying.
    assert!(store.snapshot().is_some());

    // The reopened link re-syncs and the next state restores the status.
    assert_eq!(open_action(), ClientMsg::Sync);
    store.apply(ServerMsg::State(empty_snapshot())).unwrap();
    assert_eq!(store.connection().to_string(), "Connected as W");
}
