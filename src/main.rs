//! Parlor Chess - two-player console chess board

use parlor_chess::Game;
use parlor_chess::console::Console;

fn main() {
    env_logger::init();

    println!("Parlor Chess v0.1.0");
    println!("Type a square to click it (e.g. 'e2'), 'd' to display, 'save'/'load' for positions, 'quit' to exit");

    let game = match std::env::args().nth(1) {
        Some(encoded) => match Game::from_encoded(&encoded) {
            Ok(game) => game,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        None => Game::new(),
    };

    let mut console = Console::with_game(game);
    console.run();
}
