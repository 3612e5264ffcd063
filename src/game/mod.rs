//! Game session management

pub mod controller;

pub use controller::Game;
