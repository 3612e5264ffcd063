//! Codec Tests
//!
//! Tests for the compact position string: the starting setup, round trips,
//! capture sentinels, and malformed-input rejection.

use parlor_chess::core::board::{Color, PieceKind, Square};
use parlor_chess::core::codec::{START, decode, encode};
use parlor_chess::core::position::Position;
use parlor_chess::game::Game;

fn click(game: &mut Game, square: &str) {
    game.click(Square::from_algebraic(square).unwrap());
}

// ============================================================================
// Starting Position
// ============================================================================

#[test]
fn test_decode_start_counts() {
    let pos = decode(START).unwrap();
    assert_eq!(pos.live_pieces().count(), 32);
    let white = pos.live_pieces().filter(|(_, p)| p.color == Color::White).count();
    let black = pos.live_pieces().filter(|(_, p)| p.color == Color::Black).count();
    assert_eq!(white, 16);
    assert_eq!(black, 16);
}

#[test]
fn test_decode_start_state() {
    let pos = decode(START).unwrap();
    assert_eq!(pos.side_to_move(), Color::White);
    assert!(pos.last_move().is_none());
    assert!(!pos.in_check(Color::White));
    assert!(!pos.in_check(Color::Black));
    assert_eq!(pos.king_square(Color::White), Some(Square::E1));
    assert_eq!(pos.king_square(Color::Black), Some(Square::E8));
}

#[test]
fn test_decode_start_placement() {
    let pos = decode(START).unwrap();
    for file in 0..8 {
        let white_pawn = pos.board().get(Square::from_file_rank(file, 6)).unwrap();
        assert_eq!(pos.piece(white_pawn).kind, PieceKind::Pawn);
        assert_eq!(pos.piece(white_pawn).color, Color::White);
        let black_pawn = pos.board().get(Square::from_file_rank(file, 1)).unwrap();
        assert_eq!(pos.piece(black_pawn).kind, PieceKind::Pawn);
        assert_eq!(pos.piece(black_pawn).color, Color::Black);
    }
    let rook = pos.board().get(Square::A1).unwrap();
    assert_eq!(pos.piece(rook).kind, PieceKind::Rook);
    let queen = pos.board().get(Square::D8).unwrap();
    assert_eq!(pos.piece(queen).kind, PieceKind::Queen);
    assert_eq!(pos.piece(queen).color, Color::Black);
}

#[test]
fn test_startpos_encodes_back_to_start() {
    assert_eq!(encode(&Position::startpos()), START);
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn test_roundtrip_after_moves() {
    let mut game = Game::new();
    click(&mut game, "e2");
    click(&mut game, "e4");
    click(&mut game, "d7");
    click(&mut game, "d5");

    let encoded = game.encode();
    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.side_to_move(), Color::White);
    assert_eq!(decoded.last_move().map(|m| m.to_coords()), Some("d7d5".into()));
    assert_eq!(encode(&decoded), encoded);
}

#[test]
fn test_roundtrip_preserves_occupancy() {
    let mut game = Game::new();
    click(&mut game, "g1");
    click(&mut game, "f3");

    let decoded = decode(&game.encode()).unwrap();
    for index in 0..64u8 {
        let sq = Square(index);
        let live = game.position().board().get(sq).map(|id| {
            let p = game.position().piece(id);
            (p.kind, p.color)
        });
        let reloaded = decoded.board().get(sq).map(|id| {
            let p = decoded.piece(id);
            (p.kind, p.color)
        });
        assert_eq!(live, reloaded, "mismatch on {}", sq);
    }
}

#[test]
fn test_captured_piece_keeps_sentinel() {
    let mut game = Game::new();
    click(&mut game, "e2");
    click(&mut game, "e4");
    click(&mut game, "d7");
    click(&mut game, "d5");
    click(&mut game, "e4");
    click(&mut game, "d5");

    let encoded = game.encode();
    assert!(encoded.contains('='));

    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.pieces().len(), 32);
    assert_eq!(decoded.live_pieces().count(), 31);
}

#[test]
fn test_last_move_encoding() {
    let mut game = Game::new();
    click(&mut game, "e2");
    click(&mut game, "e4");

    let encoded = game.encode();
    // black to move, last move e2 (symbol '0') to e4 (symbol 'K')
    assert!(encoded.starts_with("00K"));
}

// ============================================================================
// Malformed Input
// ============================================================================

#[test]
fn test_decode_too_short() {
    assert!(decode("1").is_err());
    assert!(decode("10").is_err());
}

#[test]
fn test_decode_truncated_tuple() {
    assert!(decode("100b8hem").is_err());
    assert!(decode("100b8heg7g").is_err());
}

#[test]
fn test_decode_unknown_type_letter() {
    assert!(decode("100b8hezK").is_err());
    assert!(decode("100z8he").is_err());
}

#[test]
fn test_decode_bad_square_symbol() {
    assert!(decode("100b!he").is_err());
    assert!(decode("1=+b8he").is_err());
}

#[test]
fn test_decode_doubled_square() {
    assert!(decode("100b8c8he").is_err());
}

#[test]
fn test_decode_missing_king() {
    // white side has no king at all
    assert!(decode("100c7he").is_err());
    // two black kings
    assert!(decode("100b8hehd").is_err());
}

#[test]
fn test_decode_black_to_move() {
    let pos = decode("000b8he").unwrap();
    assert_eq!(pos.side_to_move(), Color::Black);
}
