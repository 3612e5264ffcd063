//! Compact position serialization
//!
//! A position is a flat string over a 65-symbol alphabet:
//! - byte 0: `1` for white to move, anything else for black
//! - bytes 1-2: last-move from/to square symbols, or the literal pair `00`
//!   when no move has been played
//! - then one two-byte tuple per arena piece: a type letter followed by the
//!   piece's square symbol, where `=` marks a captured piece
//!
//! A symbol's alphabet index is its square index (rank*8 + file). Type
//! letters `b`-`g` are white and `h`-`m` are black, ordered King, Queen,
//! Bishop, Knight, Rook, Pawn within each range.

use super::board::{Color, Piece, PieceKind, Square};
use super::moves::Move;
use super::position::Position;

const CHARSET: &[u8; 65] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-+=";

/// Square symbol of a captured piece
const CAPTURED: u8 = b'=';

/// The standard starting setup, white to move, no last move
pub const START: &str = "100mimjmkmlmmmnmomplalhkbkgjcjfidhegWgXgYgZg0g1g2g3f4f+e5e-d6d9c7b8";

impl Position {
    /// Create a position from the standard starting setup
    pub fn startpos() -> Self {
        decode(START).unwrap()
    }
}

/// Serialize a position. Re-encoding a decoded position yields an equivalent
/// position, though piece ordering within the string may differ from the
/// input.
pub fn encode(pos: &Position) -> String {
    let mut out = String::with_capacity(3 + pos.pieces().len() * 2);
    out.push(match pos.side_to_move() {
        Color::White => '1',
        Color::Black => '0',
    });
    match pos.last_move() {
        Some(mv) => {
            out.push(square_symbol(mv.from));
            out.push(square_symbol(mv.to));
        }
        None => out.push_str("00"),
    }
    for piece in pos.pieces() {
        out.push(type_letter(piece.kind, piece.color));
        out.push(match piece.square {
            Some(sq) => square_symbol(sq),
            None => CAPTURED as char,
        });
    }
    out
}

/// Parse a position string. Malformed input (truncated tuple, unknown type
/// letter or square symbol, doubled-up square, missing king) is a fatal
/// decode failure; there is no partial recovery.
pub fn decode(s: &str) -> Result<Position, String> {
    let bytes = s.as_bytes();
    if bytes.len() < 3 {
        return Err(format!("invalid position string: only {} bytes", bytes.len()));
    }

    let side_to_move = if bytes[0] == b'1' {
        Color::White
    } else {
        Color::Black
    };

    let last_move = if bytes[1..3] == *b"00" {
        None
    } else {
        let from = square_from_symbol(bytes[1])
            .ok_or_else(|| bad_symbol(bytes[1], "last-move source"))?;
        let to = square_from_symbol(bytes[2])
            .ok_or_else(|| bad_symbol(bytes[2], "last-move destination"))?;
        Some(Move::new(from, to))
    };

    let tail = &bytes[3..];
    if tail.len() % 2 != 0 {
        return Err("invalid position string: truncated piece tuple".to_string());
    }

    // The format does not carry moved-flags; every decoded piece starts unmoved.
    let mut pieces = Vec::with_capacity(tail.len() / 2);
    for tuple in tail.chunks(2) {
        let (kind, color) = piece_from_letter(tuple[0]).ok_or_else(|| {
            format!(
                "invalid position string: unknown type letter '{}'",
                tuple[0] as char
            )
        })?;
        let square = if tuple[1] == CAPTURED {
            None
        } else {
            Some(square_from_symbol(tuple[1]).ok_or_else(|| bad_symbol(tuple[1], "piece"))?)
        };
        pieces.push(Piece {
            kind,
            color,
            square,
            moved: false,
        });
    }

    Position::from_parts(pieces, side_to_move, last_move)
}

fn bad_symbol(byte: u8, what: &str) -> String {
    format!(
        "invalid position string: bad {} square symbol '{}'",
        what, byte as char
    )
}

fn square_symbol(sq: Square) -> char {
    CHARSET[sq.index()] as char
}

fn square_from_symbol(byte: u8) -> Option<Square> {
    CHARSET[..64]
        .iter()
        .position(|&c| c == byte)
        .map(|i| Square::new(i as u8))
}

fn type_letter(kind: PieceKind, color: Color) -> char {
    let offset = match kind {
        PieceKind::King => 0,
        PieceKind::Queen => 1,
        PieceKind::Bishop => 2,
        PieceKind::Knight => 3,
        PieceKind::Rook => 4,
        PieceKind::Pawn => 5,
    };
    let base = match color {
        Color::White => b'b',
        Color::Black => b'h',
    };
    (base + offset) as char
}

fn piece_from_letter(byte: u8) -> Option<(PieceKind, Color)> {
    let kind = match byte {
        b'b' | b'h' => PieceKind::King,
        b'c' | b'i' => PieceKind::Queen,
        b'd' | b'j' => PieceKind::Bishop,
        b'e' | b'k' => PieceKind::Knight,
        b'f' | b'l' => PieceKind::Rook,
        b'g' | b'm' => PieceKind::Pawn,
        _ => return None,
    };
    let color = if byte <= b'g' {
        Color::White
    } else {
        Color::Black
    };
    Some((kind, color))
}
