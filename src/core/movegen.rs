//! Pseudo-legal move generation
//!
//! Each piece kind yields the destinations consistent with its movement
//! pattern and the current occupancy, without regard to whether the move
//! would leave the mover's own king in check. That filtering lives in the
//! legality layer (`rules`).

use super::board::{Color, Piece, PieceId, PieceKind, Square};
use super::position::Position;

const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Generate the pseudo-legal destinations for one piece.
///
/// A captured piece has no square and generates nothing.
pub fn pseudo_legal(pos: &Position, id: PieceId) -> Vec<Square> {
    let piece = pos.piece(id);
    let Some(from) = piece.square else {
        return Vec::new();
    };
    let mut moves = Vec::new();
    match piece.kind {
        PieceKind::King => king_moves(pos, from, piece, &mut moves),
        PieceKind::Queen => {
            for (df, dr) in ORTHOGONALS.into_iter().chain(DIAGONALS) {
                ray_moves(pos, from, df, dr, piece.color, &mut moves);
            }
        }
        PieceKind::Bishop => {
            for (df, dr) in DIAGONALS {
                ray_moves(pos, from, df, dr, piece.color, &mut moves);
            }
        }
        PieceKind::Rook => {
            for (df, dr) in ORTHOGONALS {
                ray_moves(pos, from, df, dr, piece.color, &mut moves);
            }
        }
        PieceKind::Knight => knight_moves(pos, from, piece.color, &mut moves),
        PieceKind::Pawn => pawn_moves(pos, from, piece, &mut moves),
    }
    moves
}

/// Scan outward in a fixed direction: empty squares are added and the scan
/// continues; the first occupied square is added only if it holds an enemy
/// piece, and always stops the scan.
fn ray_moves(pos: &Position, from: Square, df: i8, dr: i8, color: Color, moves: &mut Vec<Square>) {
    let mut sq = from;
    while let Some(next) = sq.offset(df, dr) {
        match pos.board().get(next) {
            None => moves.push(next),
            Some(id) => {
                if pos.piece(id).color != color {
                    moves.push(next);
                }
                return;
            }
        }
        sq = next;
    }
}

/// True when the square is empty or holds an opposing piece
fn empty_or_enemy(pos: &Position, sq: Square, color: Color) -> bool {
    match pos.board().get(sq) {
        None => true,
        Some(id) => pos.piece(id).color != color,
    }
}

fn king_moves(pos: &Position, from: Square, king: Piece, moves: &mut Vec<Square>) {
    for df in -1..=1 {
        for dr in -1..=1 {
            if df == 0 && dr == 0 {
                continue;
            }
            if let Some(to) = from.offset(df, dr) {
                if empty_or_enemy(pos, to, king.color) {
                    moves.push(to);
                }
            }
        }
    }

    // Castling: unmoved king, own side not currently in check, an unmoved
    // rook on the same-rank corner file, and nothing strictly between them.
    // Whether the crossed squares are attacked is not examined, and neither
    // is the rook's color (see DESIGN.md).
    if king.moved || pos.in_check(king.color) {
        return;
    }
    let rank = from.rank();
    if unmoved_rook_at(pos, Square::from_file_rank(7, rank))
        && files_empty(pos, rank, &[5, 6])
    {
        moves.push(Square::from_file_rank(6, rank));
    }
    if unmoved_rook_at(pos, Square::from_file_rank(0, rank))
        && files_empty(pos, rank, &[1, 2, 3])
    {
        moves.push(Square::from_file_rank(2, rank));
    }
}

fn unmoved_rook_at(pos: &Position, sq: Square) -> bool {
    match pos.board().get(sq) {
        Some(id) => {
            let piece = pos.piece(id);
            piece.kind == PieceKind::Rook && !piece.moved
        }
        None => false,
    }
}

fn files_empty(pos: &Position, rank: u8, files: &[u8]) -> bool {
    files
        .iter()
        .all(|&file| pos.board().get(Square::from_file_rank(file, rank)).is_none())
}

fn knight_moves(pos: &Position, from: Square, color: Color, moves: &mut Vec<Square>) {
    const OFFSETS: [(i8, i8); 8] = [
        (2, 1),
        (2, -1),
        (-2, 1),
        (-2, -1),
        (1, 2),
        (1, -2),
        (-1, 2),
        (-1, -2),
    ];
    for (df, dr) in OFFSETS {
        if let Some(to) = from.offset(df, dr) {
            if empty_or_enemy(pos, to, color) {
                moves.push(to);
            }
        }
    }
}

fn pawn_moves(pos: &Position, from: Square, pawn: Piece, moves: &mut Vec<Square>) {
    let dir = pawn.color.forward();

    if let Some(one) = from.offset(0, dir) {
        if pos.board().get(one).is_none() {
            moves.push(one);
            if !pawn.moved {
                if let Some(two) = from.offset(0, 2 * dir) {
                    if pos.board().get(two).is_none() {
                        moves.push(two);
                    }
                }
            }
        }
    }

    // Diagonals only capture
    for df in [1, -1] {
        if let Some(to) = from.offset(df, dir) {
            if let Some(id) = pos.board().get(to) {
                if pos.piece(id).color != pawn.color {
                    moves.push(to);
                }
            }
        }
    }
}
