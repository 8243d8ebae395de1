use std::io::{self, BufRead, Write};

use log::info;
use rand::seq::IndexedRandom;
use rand::rngs::StdRng;

use wordguess_core::config::GameConfig;
use wordguess_core::model::{Category, Difficulty, PredictiveTextModel};
use wordguess_core::session::{GameSession, HintKind};

const CORRECT_MESSAGES: [&str; 5] = [
    "Hehe! Great minds think alike",
    "You guessed it right! You're almost reading my mind",
    "Wow! We're totally in sync",
    "Amazing! You know me so well",
    "Yes! That's exactly what I was thinking",
];

const INCORRECT_MESSAGES: [&str; 4] = [
    "Hmm... I was thinking \"{}\"",
    "Close! I had \"{}\" in mind",
    "Interesting choice! I thought \"{}\"",
    "Not quite! My prediction was \"{}\"",
];

/// Reads one trimmed line, `None` on end of input.
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

fn print_menu(session: &GameSession<StdRng>) {
    let model = session.model();
    println!("Topic: {} ({})", model.category().label(), model.category().description());
    println!("Difficulty: {} ({})", model.difficulty(), model.difficulty().description());
    println!("Commands: :hint first|last|length, :difficulty <easy|medium|hard>,");
    println!("          :category <nature|technology|emotions|food>, :reset, :quit");
}

/// Handles a `:command`. Returns `false` when the game should stop.
fn run_command(session: &mut GameSession<StdRng>, command: &str) -> bool {
    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(":quit"), _) => return false,
        (Some(":reset"), _) => {
            session.reset();
            println!("Score reset.");
        }
        (Some(":difficulty"), Some(value)) => match value.parse::<Difficulty>() {
            Ok(difficulty) => {
                session.set_difficulty(difficulty);
                println!("Difficulty: {difficulty} ({})", difficulty.description());
            }
            Err(e) => println!("{e}"),
        },
        (Some(":category"), Some(value)) => match value.parse::<Category>() {
            Ok(category) => {
                session.set_category(category);
                println!("Topic: {} ({})", category.label(), category.description());
            }
            Err(e) => println!("{e}"),
        },
        (Some(":hint"), Some(kind)) => {
            let kind = match kind {
                "first" => HintKind::FirstLetter,
                "last" => HintKind::LastLetter,
                "length" => HintKind::WordLength,
                other => {
                    println!("Unknown hint '{other}', use first, last or length");
                    return true;
                }
            };
            match session.use_hint(kind) {
                Ok(hint) => println!("Hint {hint} (score: {})", session.score()),
                Err(e) => println!("{e}"),
            }
        }
        _ => println!("Unknown command '{command}'"),
    }
    true
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log level is read from RUST_LOG (ex. RUST_LOG=debug)
    env_logger::init();

    // Settings come from key=value arguments, ex.
    // wordguess-exemple difficulty=hard category=food seed=42
    // or config=game.json to read them from a JSON file
    let config = GameConfig::from_args(std::env::args().skip(1))?;
    info!("starting with {:?}", config);

    let mut feedback_rng = rand::rng();
    let model = PredictiveTextModel::with_rng(config.difficulty, config.category, config.make_rng());
    let mut session = GameSession::new(model);

    println!("Word Prediction Game");
    println!("Type a phrase, I'll predict the next word. Guess what I predicted!");
    print_menu(&session);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let label = if session.awaiting_guess() { "Your guess> " } else { "Your phrase> " };
        let Some(line) = prompt(&mut input, label)? else {
            break;
        };
        if line.is_empty() {
            continue;
        }

        if line.starts_with(':') {
            if !run_command(&mut session, &line) {
                break;
            }
            continue;
        }

        if session.awaiting_guess() {
            match session.guess(&line) {
                Ok(outcome) => {
                    let message = if outcome.correct {
                        CORRECT_MESSAGES.choose(&mut feedback_rng).copied().unwrap_or_default().to_owned()
                    } else {
                        INCORRECT_MESSAGES
                            .choose(&mut feedback_rng)
                            .copied()
                            .unwrap_or_default()
                            .replace("{}", &outcome.prediction)
                    };
                    println!("{message}");
                    println!(
                        "Score: {} / {} rounds ({}% accuracy)",
                        session.score(),
                        session.rounds(),
                        session.accuracy()
                    );
                }
                Err(e) => println!("{e}"),
            }
        } else {
            match session.ask(&line) {
                Ok(_) => println!("I've got my word. What do you think it is?"),
                Err(e) => println!("{e}"),
            }
        }
    }

    println!("Final score: {} / {} rounds", session.score(), session.rounds());
    Ok(())
}
