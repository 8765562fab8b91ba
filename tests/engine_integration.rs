//! End-to-end engine scenarios: scripted openings, FEN import/export, undo
//! and redo, mate detection, and a seeded random playout that checks the
//! engine's invariants hold across long move sequences.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use lychee_xiangqi::board_location::BoardLocation;
use lychee_xiangqi::game_state::game_state::GameState;
use lychee_xiangqi::game_state::xiangqi_rules::STARTING_POSITION_FEN;
use lychee_xiangqi::game_state::xiangqi_types::{Color, PieceKind};

fn all_legal_moves(game: &GameState, color: Color) -> Vec<(BoardLocation, BoardLocation)> {
    let mut moves = Vec::new();
    for ((x, y), piece) in game.board().iter_pieces() {
        if piece.color != color {
            continue;
        }
        for destination in game.get_legal_moves(x, y) {
            moves.push(((x, y), destination));
        }
    }
    moves
}

fn general_count(game: &GameState, color: Color) -> usize {
    game.board()
        .iter_pieces()
        .filter(|(_, piece)| piece.kind == PieceKind::General && piece.color == color)
        .count()
}

#[test]
fn scripted_opening_with_undo_and_redo() {
    let mut game = GameState::new_game();
    assert_eq!(game.export_fen(), STARTING_POSITION_FEN);

    // Red edge soldier advances one rank.
    assert!(game.make_move(0, 6, 0, 5));
    let after_soldier = game.export_fen();
    assert_eq!(
        after_soldier,
        "rnbakabnr/9/1c5c1/p1p1p1p1p/9/P8/2P1P1P1P/1C5C1/9/RNBAKABNR b - - 0 1"
    );

    assert!(game.undo());
    assert_eq!(game.export_fen(), STARTING_POSITION_FEN);
    assert!(game.redo());
    assert_eq!(game.export_fen(), after_soldier);

    // Black replies, completing the first fullmove.
    assert!(game.make_move(0, 3, 0, 4));
    assert_eq!(game.move_count(), 2);
    assert_eq!(game.get_move_history(), vec!["P9+1", "P1+1"]);
}

#[test]
fn fen_export_import_round_trips_mid_game() {
    let mut game = GameState::new_game();
    assert!(game.make_move(7, 7, 4, 7)); // central cannon
    assert!(game.make_move(7, 0, 6, 2)); // black horse
    assert!(game.make_move(7, 9, 6, 7)); // red horse
    let fen = game.export_fen();

    let mut restored = GameState::new_game();
    assert!(restored.import_fen(&fen));
    assert_eq!(restored.export_fen(), fen);
    assert_eq!(restored.turn(), Color::Black);
    assert_eq!(restored.move_count(), 2);
}

#[test]
fn three_chariots_deliver_checkmate() {
    let mut game = GameState::new_game();
    assert!(game.import_fen("3rkr3/9/9/9/9/4r4/9/9/9/4K4 w - - 0 1"));
    assert!(game.is_king_in_check(Color::Red));
    assert!(game.is_checkmate(Color::Red));
    assert!(!game.is_checkmate(Color::Black));
    assert!(all_legal_moves(&game, Color::Red).is_empty());
}

#[test]
fn facing_generals_constrain_both_sides() {
    let mut game = GameState::new_game();
    assert!(game.import_fen("4k4/9/9/9/9/9/9/9/9/4K4 w - - 0 1"));
    // An open file between the generals is already an attack on both.
    assert!(game.is_king_in_check(Color::Red));
    assert!(game.is_king_in_check(Color::Black));
    // Stepping up the shared file keeps the generals exposed.
    assert!(!game.make_move(4, 9, 4, 8));
    // Stepping aside resolves it.
    assert!(game.make_move(4, 9, 3, 9));
    assert!(!game.is_king_in_check(Color::Red));
    assert!(!game.is_king_in_check(Color::Black));
}

#[test]
fn exported_games_replay_identically() {
    let mut game = GameState::new_game();
    let script = [(7, 7, 4, 7), (7, 0, 6, 2), (7, 9, 6, 7), (8, 0, 7, 0)];
    for (fx, fy, tx, ty) in script {
        assert!(game.make_move(fx, fy, tx, ty));
    }
    assert!(game.undo());

    let exported = game.export_game();
    let mut restored = GameState::new_game();
    assert!(restored.import_game(&exported));
    assert_eq!(restored.export_fen(), game.export_fen());
    assert_eq!(restored.current_move_index(), game.current_move_index());
    assert_eq!(restored.move_history().len(), 4);
    assert!(restored.redo());
    assert_eq!(restored.move_history()[3].mover, Color::Black);
}

#[test]
fn seeded_random_playout_preserves_engine_invariants() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut game = GameState::new_game();

    for ply in 0..120 {
        let mover = game.turn();
        let moves = all_legal_moves(&game, mover);
        if moves.is_empty() {
            // Either mate or no safe move left for the side to move.
            assert!(
                game.is_checkmate(mover) || !game.is_king_in_check(mover),
                "terminal position at ply {ply} should be mate or stalemate"
            );
            break;
        }

        let &((fx, fy), (tx, ty)) = moves.choose(&mut rng).unwrap();
        assert!(
            game.make_move(fx, fy, tx, ty),
            "legal move ({fx},{fy})->({tx},{ty}) rejected at ply {ply}"
        );

        // The mover can never leave its own general attacked.
        assert!(!game.is_king_in_check(mover));
        assert_eq!(general_count(&game, Color::Red), 1);
        assert_eq!(general_count(&game, Color::Black), 1);

        // The exported position must survive a round trip at every ply.
        let fen = game.export_fen();
        let mut probe = GameState::new_game();
        assert!(probe.import_fen(&fen), "FEN rejected at ply {ply}: {fen}");
        assert_eq!(probe.export_fen(), fen);
    }

    // The playout above walked forward; the full history must unwind back
    // to the opening position.
    while game.undo() {}
    assert_eq!(game.export_fen(), STARTING_POSITION_FEN);
}
