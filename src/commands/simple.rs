//! Simple interactive CLI mode
//!
//! Plays the same engine as the TUI over plain stdin/stdout. Each input
//! line is one guess; the letters are fed through the normal dispatch so
//! this mode exercises exactly the rules the TUI does.

use crate::core::{Feedback, Verdict};
use crate::game::{COLS, Effect, Game, InputEvent, MessageKind};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(mut game: Game, warning: Option<String>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle - Terminal Edition                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter word. You have six tries.\n");
    println!(
        "  {} right letter, right spot",
        " A ".on_truecolor(0x8f, 0xbc, 0x8f).black()
    );
    println!(
        "  {} right letter, wrong spot",
        " A ".on_truecolor(0xd8, 0xa7, 0xb1).black()
    );
    println!(
        "  {} letter not in the word\n",
        " A ".on_truecolor(0x78, 0x7c, 0x7e).black()
    );
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    if let Some(warning) = warning {
        println!("{}\n", warning.yellow());
    }

    loop {
        let row = game.cursor().row;
        let input = get_user_input(&format!("Guess {}/6", row + 1))?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game.apply(InputEvent::Reset);
                println!("\nNew game started!\n");
                continue;
            }
            guess => {
                for letter in guess.chars() {
                    game.apply(InputEvent::Letter(letter));
                }
                let effects = game.apply(InputEvent::Submit);

                let accepted = effects
                    .iter()
                    .any(|e| matches!(e, Effect::RevealTile { .. }));
                if accepted {
                    print_scored_row(&game, row);
                }
                print_messages(&effects);

                if !accepted {
                    // Clear the rejected letters so the next line starts fresh
                    while game.cursor().col > 0 {
                        game.apply(InputEvent::Backspace);
                    }
                    continue;
                }

                if game.status().is_over() {
                    print_history(&game, row);
                    if !ask_play_again(&mut game)? {
                        return Ok(());
                    }
                }
            }
        }
    }
}

fn print_scored_row(game: &Game, row: usize) {
    let Some(guess) = game.board().guess(row) else {
        return;
    };
    let feedback = Feedback::score(&guess, game.secret());

    print!("         ");
    for col in 0..COLS {
        let letter = format!(" {} ", (guess.char_at(col) as char).to_ascii_uppercase());
        let tile = match feedback.verdict_at(col) {
            Verdict::Correct => letter.on_truecolor(0x8f, 0xbc, 0x8f).black().bold(),
            Verdict::Present => letter.on_truecolor(0xd8, 0xa7, 0xb1).black().bold(),
            Verdict::Absent => letter.on_truecolor(0x78, 0x7c, 0x7e).white().bold(),
        };
        print!("{tile} ");
    }
    println!("\n");
}

fn print_messages(effects: &[Effect]) {
    for effect in effects {
        if let Effect::ShowMessage(message) = effect {
            let line = match message.kind {
                MessageKind::Success => message.text.bright_green().bold(),
                MessageKind::Error => message.text.bright_red(),
                MessageKind::Warning => message.text.yellow(),
                MessageKind::Info => message.text.normal(),
            };
            println!("{line}\n");
        }
    }
}

/// Emoji share grid for the finished game
fn print_history(game: &Game, last_row: usize) {
    println!("Your game:");
    for row in 0..=last_row {
        if let Some(guess) = game.board().guess(row) {
            let feedback = Feedback::score(&guess, game.secret());
            println!(
                "  {}. {} {}",
                row + 1,
                guess.text().to_uppercase(),
                feedback.to_emoji()
            );
        }
    }
    println!();
}

fn ask_play_again(game: &mut Game) -> Result<bool, String> {
    match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
        "yes" | "y" => {
            game.apply(InputEvent::Reset);
            println!("\nNew game started!\n");
            Ok(true)
        }
        _ => {
            println!("\nThanks for playing!\n");
            Ok(false)
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
