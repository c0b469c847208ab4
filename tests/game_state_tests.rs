//! Game loop tests - locking, scoring, difficulty and game over

use std::time::Duration;

use blockfall::core::{is_valid_position, rotate, Board, GameState, LockEvent, Piece, Shape};
use blockfall::types::{BlockColor, Intent, PieceKind, BASE_FALL_INTERVAL, FALL_INTERVAL_FLOOR};

/// Vertical I piece in column 0, resting on the floor.
fn vertical_i(fall_interval: Duration) -> Piece {
    let mut piece = Piece::with_shape(
        rotate(&Shape::canonical(PieceKind::I)),
        BlockColor::Cyan,
        fall_interval,
    );
    piece.x = 0;
    piece.y = 16;
    piece
}

/// Lay `rows` rows that are full except column 0, drop a vertical I into the
/// gap and let it lock.
fn clear_with_i(game: &mut GameState, rows: usize) -> LockEvent {
    let line = ".#########";
    let layout = vec![line; rows];
    *game.board_mut() = Board::from_rows(&layout, BlockColor::Red);
    let interval = game.base_fall_interval();
    game.replace_active(vertical_i(interval));

    assert!(game.tick(interval));
    game.take_last_event().expect("lock event")
}

fn started(seed: u32) -> GameState {
    let mut game = GameState::new(seed);
    game.start();
    game
}

#[test]
fn test_scores_accumulate_per_row() {
    let mut game = started(42);

    let first = clear_with_i(&mut game, 1);
    assert_eq!((first.rows_cleared, first.points), (1, 100));
    assert_eq!(game.score(), 100);

    let second = clear_with_i(&mut game, 2);
    assert_eq!((second.rows_cleared, second.points), (2, 200));
    assert_eq!(game.score(), 300);
    assert_eq!(game.rows_cleared(), 3);
    assert!(!game.game_over());
}

#[test]
fn test_lock_without_clear_scores_nothing() {
    let mut game = started(42);
    let event = clear_with_i(&mut game, 0);
    assert_eq!(event.points, 0);
    assert_eq!(game.score(), 0);
    assert_eq!(game.board().cell(19, 0), Some(BlockColor::Cyan));
    assert_eq!(game.pieces_locked(), 1);
}

#[test]
fn test_fall_interval_ramps_once_per_band() {
    let mut game = started(7);
    assert_eq!(game.base_fall_interval(), BASE_FALL_INTERVAL);

    // 400, 800: still band 0
    assert!(!clear_with_i(&mut game, 4).sped_up);
    assert!(!clear_with_i(&mut game, 4).sped_up);
    assert_eq!(game.base_fall_interval(), Duration::from_millis(500));

    // 1200 crosses 1000
    assert!(clear_with_i(&mut game, 4).sped_up);
    assert_eq!(game.base_fall_interval(), Duration::from_millis(450));
    assert_eq!(
        game.active().expect("respawned").fall_interval,
        Duration::from_millis(450)
    );

    // 1600 stays in band 1
    assert!(!clear_with_i(&mut game, 4).sped_up);
    assert_eq!(game.base_fall_interval(), Duration::from_millis(450));

    // 2000 crosses 2000
    assert!(clear_with_i(&mut game, 4).sped_up);
    assert_eq!(game.base_fall_interval(), Duration::from_millis(405));
    assert_eq!(game.score(), 2000);
}

#[test]
fn test_fall_interval_never_below_floor() {
    let mut game = started(9);
    for _ in 0..60 {
        clear_with_i(&mut game, 4);
        assert!(game.base_fall_interval() >= FALL_INTERVAL_FLOOR);
    }
    assert_eq!(game.base_fall_interval(), FALL_INTERVAL_FLOOR);
}

#[test]
fn test_game_over_when_spawn_blocked() {
    let mut game = started(3);
    // Every shape covers at least one of these cells at spawn.
    for col in 3..=6 {
        game.board_mut().set_cell(0, col, Some(BlockColor::Blue));
    }
    game.replace_active(vertical_i(BASE_FALL_INTERVAL));

    assert!(game.tick(BASE_FALL_INTERVAL));
    let event = game.take_last_event().expect("lock event");
    assert!(event.topped_out);
    assert!(game.game_over());
    assert!(game.active().is_none());

    // Nothing moves after game over.
    assert!(!game.tick(Duration::from_secs(5)));
    assert!(!game.apply_intent(Intent::MoveLeft));
}

#[test]
fn test_soft_drop_cleared_by_lock() {
    let mut game = started(11);
    assert!(game.apply_intent(Intent::SoftDropStart));
    assert_eq!(game.effective_fall_interval(), Duration::from_millis(50));

    game.replace_active(vertical_i(BASE_FALL_INTERVAL));
    assert!(game.tick(Duration::from_millis(50)));
    assert!(game.take_last_event().is_some());
    assert!(!game.soft_drop());
    assert_eq!(game.effective_fall_interval(), BASE_FALL_INTERVAL);
}

#[test]
fn test_elapsed_time_accumulates_across_ticks() {
    let mut game = started(5);
    let y = game.active().unwrap().y;
    for _ in 0..31 {
        game.tick(Duration::from_millis(16));
    }
    assert_eq!(game.active().unwrap().y, y);
    game.tick(Duration::from_millis(16));
    assert_eq!(game.active().unwrap().y, y + 1);
}

#[test]
fn test_validity_rules() {
    let board = Board::from_rows(&["#........."], BlockColor::Green);

    for kind in PieceKind::ALL {
        let mut shape = Shape::canonical(kind);
        for _ in 0..4 {
            let cols = shape.cols() as i8;
            let rows = shape.rows() as i8;

            // Left and right edges
            assert!(!is_valid_position(&Board::new(), &shape, -1, 5));
            assert!(is_valid_position(&Board::new(), &shape, 10 - cols, 5));
            assert!(!is_valid_position(&Board::new(), &shape, 11 - cols, 5));

            // Floor
            assert!(is_valid_position(&Board::new(), &shape, 3, 20 - rows));
            assert!(!is_valid_position(&Board::new(), &shape, 3, 21 - rows));

            // Above the top is free
            assert!(is_valid_position(&Board::new(), &shape, 3, -rows));
            assert!(is_valid_position(&Board::new(), &shape, 3, -10));

            shape = rotate(&shape);
        }
    }

    let dot = Shape::from_rows(&[&[1]]);
    assert!(!is_valid_position(&board, &dot, 0, 19));
    assert!(is_valid_position(&board, &dot, 1, 19));
    assert!(is_valid_position(&board, &dot, 0, 18));
}

#[test]
fn test_same_seed_same_game() {
    let mut a = started(2024);
    let mut b = started(2024);
    let script = [Intent::MoveLeft, Intent::Rotate, Intent::MoveRight, Intent::SoftDropStart];

    for i in 0..2000 {
        let intent = script[i % script.len()];
        a.apply_intent(intent);
        b.apply_intent(intent);
        a.tick(Duration::from_millis(16));
        b.tick(Duration::from_millis(16));
        assert_eq!(a.snapshot(), b.snapshot());
        if a.game_over() {
            break;
        }
    }
    assert!(a.pieces_locked() > 0);
}
