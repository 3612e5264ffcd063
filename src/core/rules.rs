//! Check detection and legality filtering
//!
//! Legality is decided by clone-simulate-discard: each pseudo-legal
//! candidate is replayed on a structural copy of the position through the
//! same relocation routine that real moves use, and kept only if the mover's
//! king ends up safe. One move-application path serves both validation and
//! execution.

use super::board::{Color, PieceId, Square};
use super::movegen::pseudo_legal;
use super::position::Position;

impl Position {
    /// True iff some opposing piece's pseudo-legal set contains the color's
    /// king square. A position without that king (reachable only inside an
    /// abandoned simulation) is not in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king) = self.king_square(color) else {
            return false;
        };
        self.live_pieces()
            .filter(|(_, p)| p.color != color)
            .any(|(id, _)| pseudo_legal(self, id).contains(&king))
    }

    /// The piece's pseudo-legal moves minus those that would leave its own
    /// king in check. Clones preserve moved-flags, so castling and
    /// double-step eligibility survive into the simulation.
    pub fn legal_moves(&self, id: PieceId) -> Vec<Square> {
        let color = self.piece(id).color;
        pseudo_legal(self, id)
            .into_iter()
            .filter(|&to| {
                let mut sim = self.clone();
                sim.relocate(id, to);
                !sim.is_in_check(color)
            })
            .collect()
    }

    /// Whether any piece of the color has at least one legal move; terminal
    /// states are exactly the positions where this is false for the side to
    /// move.
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        self.live_pieces()
            .filter(|(_, p)| p.color == color)
            .any(|(id, _)| !self.legal_moves(id).is_empty())
    }
}
