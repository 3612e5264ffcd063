//! Game position
//!
//! A `Position` owns the piece arena and the mailbox board, plus the turn
//! flag, the last applied move, and the per-color check flags. It is mutated
//! in place by move application; legality testing works on transient clones
//! (plain structural copies, so a discarded simulation can never alias back
//! into live state).

use super::board::{Board, Color, Piece, PieceId, PieceKind, Square};
use super::moves::Move;
use log::debug;
use std::fmt;

/// Full game state: arena + board + turn + last move + check flags
#[derive(Clone)]
pub struct Position {
    pieces: Vec<Piece>,
    board: Board,
    side_to_move: Color,
    last_move: Option<Move>,
    checks: [bool; 2],
}

impl Position {
    /// Assemble a position from an arena, validating the board invariants:
    /// at most one live piece per square and exactly one live king per side.
    /// Both check flags are evaluated before the position is returned.
    pub fn from_parts(
        pieces: Vec<Piece>,
        side_to_move: Color,
        last_move: Option<Move>,
    ) -> Result<Self, String> {
        let mut board = Board::empty();
        for (i, piece) in pieces.iter().enumerate() {
            if let Some(sq) = piece.square {
                if board.get(sq).is_some() {
                    return Err(format!("invalid position: two pieces on {}", sq));
                }
                board.place(sq, PieceId(i));
            }
        }
        for color in [Color::White, Color::Black] {
            let kings = pieces
                .iter()
                .filter(|p| p.kind == PieceKind::King && p.color == color && !p.is_captured())
                .count();
            if kings != 1 {
                return Err(format!(
                    "invalid position: {} has {} kings, expected 1",
                    color, kings
                ));
            }
        }

        let mut pos = Position {
            pieces,
            board,
            side_to_move,
            last_move,
            checks: [false; 2],
        };
        pos.update_checks();
        Ok(pos)
    }

    /// Look up a piece by handle
    #[inline]
    pub fn piece(&self, id: PieceId) -> Piece {
        self.pieces[id.index()]
    }

    /// The whole arena, captured pieces included
    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Iterate over the pieces still on the board
    pub fn live_pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_captured())
            .map(|(i, p)| (PieceId(i), p))
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Cached check flag for a color; recomputed after every applied move
    #[inline]
    pub fn in_check(&self, color: Color) -> bool {
        self.checks[color.index()]
    }

    /// Square of the color's king, `None` only in abandoned simulations
    /// where the king itself was captured
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.live_pieces()
            .find(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .and_then(|(_, p)| p.square)
    }

    /// Relocate a piece, capturing whatever stood on the destination.
    ///
    /// This is the single routine that touches both a piece's stored square
    /// and the mailbox, for real moves and simulated ones alike. The captured
    /// piece keeps its arena slot and is marked off-board.
    pub(crate) fn relocate(&mut self, id: PieceId, to: Square) {
        if let Some(victim) = self.board.get(to) {
            self.pieces[victim.index()].square = None;
        }
        if let Some(from) = self.pieces[id.index()].square {
            self.board.clear(from);
        }
        self.board.place(to, id);
        let piece = &mut self.pieces[id.index()];
        piece.square = Some(to);
        piece.moved = true;
    }

    /// Apply a confirmed move: castle rook relocation when the king steps
    /// two files, capture, relocation, last-move record, turn flip, and
    /// check-flag recomputation.
    ///
    /// The destination must come from the mover's legal-move list; there is
    /// no rejected-move path here.
    pub fn apply_move(&mut self, id: PieceId, to: Square) {
        let mover = self.piece(id);
        let Some(from) = mover.square else {
            return;
        };

        if mover.kind == PieceKind::King && (to.file() as i8 - from.file() as i8).abs() == 2 {
            let rank = from.rank();
            let (corner, rook_to) = if to.file() > from.file() {
                (Square::from_file_rank(7, rank), Square::from_file_rank(5, rank))
            } else {
                (Square::from_file_rank(0, rank), Square::from_file_rank(3, rank))
            };
            if let Some(rook) = self.board.get(corner) {
                self.relocate(rook, rook_to);
            }
        }

        self.relocate(id, to);
        self.last_move = Some(Move::new(from, to));
        self.side_to_move = self.side_to_move.opposite();
        self.update_checks();
        debug!("applied {}, {} to move", Move::new(from, to), self.side_to_move);
    }

    /// Recompute both check flags from scratch
    pub(crate) fn update_checks(&mut self) {
        let white = self.is_in_check(Color::White);
        let black = self.is_in_check(Color::Black);
        self.checks = [white, black];
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for rank in 0..8 {
            write!(f, "  {} ", 8 - rank)?;
            for file in 0..8 {
                let sq = Square::from_file_rank(file, rank);
                match self.board.get(sq) {
                    Some(id) => write!(f, "{} ", self.piece(id).to_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "    a b c d e f g h")?;
        writeln!(f)?;
        writeln!(f, "  position: {}", super::codec::encode(self))?;
        Ok(())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
