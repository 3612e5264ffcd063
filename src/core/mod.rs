//! Core chess types and rules
//!
//! This module contains the building blocks of the rules engine:
//! - Board, square and piece representation
//! - Pseudo-legal move generation
//! - Check detection and legality filtering
//! - The compact position codec

pub mod board;
pub mod codec;
pub mod movegen;
pub mod moves;
pub mod position;
pub mod rules;

pub use board::{Board, Color, Piece, PieceId, PieceKind, Square};
pub use codec::{START, decode, encode};
pub use movegen::pseudo_legal;
pub use moves::Move;
pub use position::Position;
