use std::io::Cursor;

use tablut::board::THRONE;
use tablut::config::{GameConfig, PlayerKind};
use tablut::game::Game;
use tablut::{AIEngine, Board, Move, Piece, Side, Square};

fn sq(text: &str) -> Square {
    text.parse().unwrap()
}

fn mv(text: &str) -> Move {
    text.parse().unwrap()
}

fn play_all(board: &mut Board, moves: &[&str]) {
    for text in moves {
        board.try_make_move(mv(text)).unwrap();
    }
}

#[test]
fn opening_moves() {
    let board = Board::new();
    let white = board.legal_moves(Side::Defender);
    let black = board.legal_moves(Side::Attacker);
    assert_eq!(white.len(), 56);
    assert_eq!(black.len(), 80);

    for text in ["e6-f", "f5-8"] {
        assert!(white.contains(&mv(text)), "{text} should be a white move");
    }
    for text in ["e7-8", "e8-f"] {
        assert!(!white.contains(&mv(text)), "{text} should not be a white move");
    }
    for text in ["f9-i", "h5-1"] {
        assert!(black.contains(&mv(text)), "{text} should be a black move");
    }
    for text in ["e8-7", "e7-8"] {
        assert!(!black.contains(&mv(text)), "{text} should not be a black move");
    }
}

#[test]
fn undo_unwinds_an_engine_game() {
    let mut board = Board::new();
    let mut engine = AIEngine::with_depth(1);
    let mut history = Vec::new();

    for _ in 0..12 {
        if board.winner().is_some() {
            break;
        }
        history.push((board.encoded(), board.winner(), board.move_count()));
        let mv = engine.choose_move(&board).unwrap();
        board.make_move(mv);
    }

    while let Some((encoded, winner, move_count)) = history.pop() {
        board.undo();
        assert_eq!(board.encoded(), encoded);
        assert_eq!(board.winner(), winner);
        assert_eq!(board.move_count(), move_count);
    }
    assert_eq!(board.encoded(), Board::new().encoded());
}

#[test]
fn king_walks_out() {
    let mut board = Board::new();
    // Clear a path north for the king, then run for the edge
    play_all(&mut board, &["a4-b", "e7-d", "a6-b", "e6-f", "b4-c", "e5-7"]);
    assert_eq!(board.winner(), None);
    play_all(&mut board, &["c4-d", "e7-g"]);
    assert_eq!(board.winner(), None);
    play_all(&mut board, &["d4-c", "g7-9"]);
    assert_eq!(board.winner(), Some(Side::Defender));
    assert_eq!(board.king_position(), Some(sq("g9")));
}

#[test]
fn king_captured_beside_throne() {
    let mut board = Board::empty(Side::Attacker);
    board.put(Piece::King, sq("e6"));
    board.put(Piece::Attacker, sq("d6"));
    board.put(Piece::Attacker, sq("f6"));
    board.put(Piece::Attacker, sq("c7"));
    board.put(Piece::Defender, sq("a1"));
    board.clear_undo();

    // Three sides plus the throne
    board.make_move(mv("c7-e"));
    assert_eq!(board.king_position(), None);
    assert_eq!(board.get(sq("e6")), Piece::Empty);
    assert_eq!(board.get(THRONE), Piece::Empty);
    assert_eq!(board.winner(), Some(Side::Attacker));
}

#[test]
fn move_limit_shuffle() {
    let mut board = Board::new();
    board.set_move_limit(2).unwrap();
    play_all(&mut board, &["h5-6", "e7-f", "h6-5", "f7-g"]);
    assert_eq!(board.winner(), None);
    play_all(&mut board, &["h5-6"]);
    assert_eq!(board.winner(), Some(Side::Defender));
}

#[test]
fn repetition_shuffle() {
    let mut board = Board::new();
    play_all(&mut board, &["h5-6", "e7-f", "h6-5", "f7-e"]);
    assert!(board.repeated_position());
    assert_eq!(board.winner(), Some(Side::Attacker));
}

#[test]
fn engine_leaves_board_alone() {
    let mut board = Board::new();
    play_all(&mut board, &["h5-6", "e7-f"]);
    let before = board.encoded();

    let result = AIEngine::new().choose_move_with_stats(&board);
    assert!(result.best_move.is_some_and(|m| board.is_legal_move(m)));
    assert_eq!(board.encoded(), before);
    assert_eq!(board.move_count(), 2);
}

#[test]
fn engine_game_runs_to_a_result() {
    let config = GameConfig {
        white: PlayerKind::Ai,
        black: PlayerKind::Ai,
        move_limit: Some(8),
        depth: Some(1),
        ..GameConfig::default()
    };
    let mut output = Vec::new();
    let mut game = Game::new(config, &mut output).unwrap();
    let winner = game.run(&mut Cursor::new("")).unwrap();
    let moves = game.board().move_count();
    drop(game);

    assert!(winner.is_some());
    assert!(moves <= 17);

    let transcript = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = transcript.lines().collect();
    assert_eq!(lines.len() as u32, moves + 1);
    assert!(lines[..lines.len() - 1].iter().all(|l| l.starts_with("* ")));
    let last = lines[lines.len() - 1];
    assert!(last == "* White wins." || last == "* Black wins.");
}
