//! Game controller
//!
//! Owns the live position plus the UI-facing selection state and drives the
//! click state machine: Idle -> Selected -> back to Idle once a move
//! completes or the selection is dropped. Illegal moves are never offered,
//! so there is no rejected-move path; a click either selects, moves, or
//! clears.

use crate::core::codec;
use crate::core::{Color, Move, PieceId, Position, Square};
use log::{debug, info};

/// A chess game session: position, selection state, winner flag
pub struct Game {
    position: Position,
    initial: Position,
    selected: Option<PieceId>,
    available: Vec<Square>,
    winner: Option<Color>,
}

impl Game {
    /// Start a game from the standard setup
    pub fn new() -> Self {
        let position = Position::startpos();
        Game {
            initial: position.clone(),
            position,
            selected: None,
            available: Vec::new(),
            winner: None,
        }
    }

    /// Start a game from an encoded position string
    pub fn from_encoded(s: &str) -> Result<Self, String> {
        let position = codec::decode(s)?;
        Ok(Game {
            initial: position.clone(),
            position,
            selected: None,
            available: Vec::new(),
            winner: None,
        })
    }

    /// Restart from the position this game was seeded with
    pub fn reset(&mut self) {
        self.position = self.initial.clone();
        self.selected = None;
        self.available.clear();
        self.winner = None;
        debug!("game reset");
    }

    /// Handle a click on a board square.
    ///
    /// Clicking a listed destination applies the selected piece's move and
    /// clears the selection; clicking a side-to-move piece with at least one
    /// legal move selects it; anything else drops the selection. The caller
    /// is responsible for translating pointer coordinates into an in-bounds
    /// square before invoking this.
    pub fn click(&mut self, square: Square) {
        if let Some(id) = self.selected {
            if self.available.contains(&square) {
                self.position.apply_move(id, square);
                self.selected = None;
                self.available.clear();

                let side = self.position.side_to_move();
                if self.position.in_check(side) && !self.position.has_any_legal_move(side) {
                    self.winner = Some(side.opposite());
                    info!("{} wins", side.opposite());
                }
                return;
            }
        }

        match self.position.board().get(square) {
            Some(id) if self.position.piece(id).color == self.position.side_to_move() => {
                let moves = self.position.legal_moves(id);
                if moves.is_empty() {
                    self.selected = None;
                    self.available.clear();
                } else {
                    debug!("selected {} with {} moves", square, moves.len());
                    self.selected = Some(id);
                    self.available = moves;
                }
            }
            _ => {
                self.selected = None;
                self.available.clear();
            }
        }
    }

    /// The live position, for the rendering collaborator
    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Currently selected piece, if any
    #[inline]
    pub fn selected(&self) -> Option<PieceId> {
        self.selected
    }

    /// Square of the currently selected piece
    pub fn selected_square(&self) -> Option<Square> {
        self.selected.and_then(|id| self.position.piece(id).square)
    }

    /// Legal destinations of the selected piece (empty when idle)
    #[inline]
    pub fn available_moves(&self) -> &[Square] {
        &self.available
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    #[inline]
    pub fn in_check(&self, color: Color) -> bool {
        self.position.in_check(color)
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.position.last_move()
    }

    /// Winner signal; set when the side to move is checkmated. The
    /// controller keeps accepting clicks afterwards.
    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Encode the current position
    pub fn encode(&self) -> String {
        codec::encode(&self.position)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
