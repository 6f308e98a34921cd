use std::env;
use std::process::ExitCode;

use fen2bits::board::{Color, Role};
use fen2bits::fen::Fen;

fn main() -> ExitCode {
    let Some(input) = env::args().nth(1) else {
        eprintln!("usage: fen2bits \"<fen>\"");
        return ExitCode::FAILURE;
    };

    let fen: Fen = match input.parse() {
        Ok(fen) => fen,
        Err(e) => {
            eprintln!("invalid FEN: {e}");
            return ExitCode::FAILURE;
        }
    };

    let placement = fen.placement();
    log::debug!("parsed placement: {placement}");

    for color in Color::ALL {
        for role in Role::ALL {
            println!("{color} {role}: {}", placement.pieces(color, role).value());
        }
        println!();
    }

    println!("White Pieces: {}", placement.white().value());
    println!("Black Pieces: {}", placement.black().value());
    println!("All Pieces: {}", placement.occupied().value());

    ExitCode::SUCCESS
}
