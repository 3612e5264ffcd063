//! Console front end
//!
//! A line-oriented stand-in for the pointer-driven board surface: each
//! two-character square on stdin is treated as a click, and the board plus
//! status lines are reprinted after every action. All rules decisions stay
//! in the core; this layer only translates input and paints state.

use crate::core::Square;
use crate::game::Game;
use std::io::{self, BufRead};

pub struct Console {
    game: Game,
}

impl Console {
    pub fn new() -> Self {
        Console { game: Game::new() }
    }

    pub fn with_game(game: Game) -> Self {
        Console { game }
    }

    /// Run the input loop until `quit` or end of input.
    pub fn run(&mut self) {
        self.print_state();

        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(_) => break,
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut parts = line.split_whitespace();
            let command = parts.next().unwrap_or("");
            match command {
                "quit" | "q" => break,
                "d" => self.print_state(),
                "new" => {
                    self.game.reset();
                    self.print_state();
                }
                "save" => println!("{}", self.game.encode()),
                "load" => match parts.next() {
                    Some(encoded) => match Game::from_encoded(encoded) {
                        Ok(game) => {
                            self.game = game;
                            self.print_state();
                        }
                        Err(e) => println!("{}", e),
                    },
                    None => println!("usage: load <position>"),
                },
                _ => match Square::from_algebraic(command) {
                    Some(square) => {
                        self.game.click(square);
                        self.print_state();
                    }
                    None => println!("unknown command '{}'", command),
                },
            }
        }
    }

    fn print_state(&self) {
        print!("{}", self.game.position());
        if let Some(mv) = self.game.last_move() {
            println!("  last move: {}", mv);
        }
        if let Some(square) = self.game.selected_square() {
            let moves: Vec<String> = self
                .game
                .available_moves()
                .iter()
                .map(|sq| sq.to_algebraic())
                .collect();
            println!("  selected {}: {}", square, moves.join(" "));
        }
        match self.game.winner() {
            Some(color) => println!("  {} wins", color),
            None => {
                let side = self.game.side_to_move();
                if self.game.in_check(side) {
                    println!("  {} to move, in check", side);
                } else {
                    println!("  {} to move", side);
                }
            }
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
