//! Whole-game behaviour through the public `GameState` API.

use chess_rules::engine::attacks::attacking_square;
use chess_rules::engine::movegen::all_legal_moves;
use chess_rules::engine::notation::CheckMarker;
use chess_rules::{Board, Color, GameState, MoveError, Piece, PieceKind, Square, Terminal};

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

fn game(placement: &str, turn: Color) -> GameState {
    GameState::from_board(Board::from_placement(placement).unwrap(), turn, Color::White)
}

fn play(g: &mut GameState, from: &str, to: &str) -> String {
    g.attempt_move(sq(from), sq(to)).unwrap().notation
}

// =====================================================================
// Opening moves
// =====================================================================

#[test]
fn e2e4_from_the_starting_position() {
    let mut g = GameState::new();
    let e2 = Square::new(6, 4).unwrap();
    let e4 = Square::new(4, 4).unwrap();
    let record = g.attempt_move(e2, e4).unwrap();

    assert_eq!(record.notation, "e2e4");
    assert_eq!(record.marker, CheckMarker::None);
    assert_eq!(g.turn(), Color::Black);
    assert_eq!(g.current_check(), None);
    assert_eq!(g.result(), Terminal::InProgress);
}

#[test]
fn moving_an_opponent_piece_changes_nothing() {
    let mut g = GameState::new();
    let board = *g.board();
    assert_eq!(
        g.attempt_move(sq("b8"), sq("c6")),
        Err(MoveError::NotYourPiece(sq("b8")))
    );
    assert_eq!(*g.board(), board);
    assert_eq!(g.turn(), Color::White);
    assert!(g.history().is_empty());
}

#[test]
fn rejected_moves_never_mutate() {
    let mut g = GameState::new();
    play(&mut g, "e2", "e4");
    play(&mut g, "e7", "e5");

    let board = *g.board();
    let attempts = [
        ("e4", "e5"), // blocked pawn
        ("d1", "d3"), // queen through own pawn
        ("a3", "a4"), // empty square
        ("e5", "e4"), // black piece on white's turn
        ("g1", "g3"), // not a knight jump
    ];
    for (from, to) in attempts {
        assert!(g.attempt_move(sq(from), sq(to)).is_err(), "{from}{to}");
        assert_eq!(*g.board(), board);
        assert_eq!(g.turn(), Color::White);
        assert_eq!(g.history().len(), 2);
    }
}

// =====================================================================
// Terminal positions
// =====================================================================

#[test]
fn scholars_mate_is_won_by_white() {
    let mut g = GameState::new();
    play(&mut g, "e2", "e4");
    play(&mut g, "e7", "e5");
    play(&mut g, "f1", "c4");
    play(&mut g, "b8", "c6");
    play(&mut g, "d1", "h5");
    play(&mut g, "g8", "f6");
    let last = play(&mut g, "h5", "f7");

    assert_eq!(last, "♕h5xf7#");
    assert_eq!(
        g.result(),
        Terminal::Checkmate {
            winner: Color::White
        }
    );
    assert_eq!(g.current_check(), Some(sq("e8")));
    let log: Vec<String> = g.history().iter().map(|r| r.to_string()).collect();
    assert_eq!(
        log,
        [
            "e2e4", "e7e5", "♗f1c4", "♘b8c6", "♕d1h5", "♘g8f6", "♕h5xf7#"
        ]
    );
}

#[test]
fn queen_mate_against_king_on_home_square() {
    // Black king e8 boxed in by its own queen and pawns; the queen swings
    // to h8 and covers the only free squares on the back rank.
    let mut g = game("3qk3/3ppp2/8/8/8/8/8/K6Q", Color::White);
    let last = play(&mut g, "h1", "h8");

    assert_eq!(last, "♕h1h8#");
    assert_eq!(
        g.result(),
        Terminal::Checkmate {
            winner: Color::White
        }
    );
}

#[test]
fn lone_kings_are_never_stalemated_while_a_square_is_free() {
    let mut g = game("4k3/8/8/8/8/8/8/4K3", Color::White);
    assert_eq!(g.result(), Terminal::InProgress);
    play(&mut g, "e1", "e2");
    assert_eq!(g.result(), Terminal::InProgress);
    play(&mut g, "e8", "e7");
    assert_eq!(g.result(), Terminal::InProgress);
}

#[test]
fn king_with_no_safe_square_and_no_check_is_stalemate() {
    let mut g = game("7k/8/5K2/8/8/8/8/6Q1", Color::White);
    let last = play(&mut g, "g1", "g6");

    assert_eq!(last, "♕g1g6");
    assert_eq!(g.result(), Terminal::Stalemate);
    assert_eq!(g.current_check(), None);
    assert!(g.attempt_move(sq("h8"), sq("h7")).is_err());
}

#[test]
fn position_already_stalemated_is_frozen() {
    let g = game("k7/2K5/1Q6/8/8/8/8/8", Color::Black);
    assert_eq!(g.result(), Terminal::Stalemate);
    assert!(g.legal_moves_for_turn().is_empty());
}

// =====================================================================
// Promotion
// =====================================================================

#[test]
fn pawns_promote_to_queens_on_every_file() {
    for file in 0..8u8 {
        let from = Square::new(1, file).unwrap();
        let to = Square::new(0, file).unwrap();
        let mut board = Board::empty();
        board.put(from, Piece::new(PieceKind::Pawn, Color::White));
        board.put(sq("a1"), Piece::new(PieceKind::King, Color::White));
        board.put(sq("h3"), Piece::new(PieceKind::King, Color::Black));

        let mut g = GameState::from_board(board, Color::White, Color::White);
        let record = g.attempt_move(from, to).unwrap();

        assert!(record.notation.contains("=Q"), "{}", record.notation);
        assert_eq!(
            g.board().piece_at(to),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
    }
}

#[test]
fn black_capture_promotion() {
    let mut g = game("7k/8/8/8/8/8/6p1/K6R", Color::Black);
    let last = play(&mut g, "g2", "h1");
    assert_eq!(last, "g2xh1=Q+");
    assert_eq!(
        g.board().piece_at(sq("h1")),
        Some(Piece::new(PieceKind::Queen, Color::Black))
    );
    assert_eq!(g.current_check(), Some(sq("a1")));
}

// =====================================================================
// Whole-game invariants
// =====================================================================

/// Play the first legal move in scan order, alternating with the last one,
/// checking the invariants after every ply.
#[test]
fn invariants_hold_over_a_long_game() {
    let mut g = GameState::new();
    let mut expected_turn = Color::White;

    for ply in 0..120 {
        if g.is_game_over() {
            break;
        }
        let moves = g.legal_moves_for_turn();
        assert!(!moves.is_empty());
        for &(from, to) in &moves {
            let after = g.board().after_move(from, to);
            assert_eq!(attacking_square(g.turn(), &after), None);
        }

        let (from, to) = if ply % 2 == 0 {
            moves[0]
        } else {
            moves[moves.len() - 1]
        };
        let mover = g.turn();
        let record = g.attempt_move(from, to).unwrap();

        assert_eq!(record.color, mover);
        assert_eq!(g.history().len(), ply + 1);
        expected_turn = !expected_turn;
        assert_eq!(g.turn(), expected_turn);
        assert_eq!(attacking_square(mover, g.board()), None);

        let none_left = all_legal_moves(g.board(), g.turn()).is_empty();
        match g.result() {
            Terminal::InProgress => assert!(!none_left),
            Terminal::Checkmate { winner } => {
                assert!(none_left && g.current_check().is_some());
                assert_eq!(winner, mover);
            }
            Terminal::Stalemate => assert!(none_left && g.current_check().is_none()),
        }
    }
}
