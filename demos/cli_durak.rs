//! CLI Durak example: seat 0 plays against computer opponents.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use durak::{Action, Card, Game, GameOptions, GameOutcome, GameState, RoundOutcome, Suit, ai};
use tracing_subscriber::EnvFilter;

const HUMAN: usize = 0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    println!("Durak CLI example (type 'q' to quit)");

    let players = prompt_number("Players (2-6): ").unwrap_or(2);
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default()
        .with_players(u8::try_from(players).unwrap_or(u8::MAX))
        .with_seed(seed);

    let mut game = match Game::new(options) {
        Ok(game) => game,
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };
    game.rename(HUMAN, "You");
    for seat in 1..game.players().len() {
        game.rename(seat, format!("Bot {seat}"));
    }

    println!("Trump: {} (bottom card {})", game.trump(), game.trump_card());

    while !game.is_over() {
        let Some(seat) = game.to_act() else {
            break;
        };

        let action = if seat == HUMAN {
            print_table(&game);
            match prompt_action(&game) {
                Some(action) => action,
                None => {
                    println!("Goodbye.");
                    return;
                }
            }
        } else {
            match ai::choose_action(&game) {
                Some((_, action)) => {
                    announce(&game, seat, action);
                    action
                }
                None => break,
            }
        };

        match game.act(seat, action) {
            Ok(Some(result)) => {
                let defender = game.player(result.defender).name().to_string();
                match result.outcome {
                    RoundOutcome::Taken => {
                        println!("{defender} picks up {} card(s).", result.cards.len());
                    }
                    RoundOutcome::Defended => {
                        println!("{defender} beats off the attack. Cards discarded.");
                    }
                }
                println!("Deck: {} card(s) left\n", game.deck().remaining());
            }
            Ok(None) => {}
            Err(err) => println!("Move rejected: {err}"),
        }
    }

    match game.outcome() {
        Some(GameOutcome::Fool(seat)) if seat == HUMAN => println!("You are the fool!"),
        Some(GameOutcome::Fool(seat)) => {
            println!("{} is the fool. You escaped.", game.player(seat).name());
        }
        Some(GameOutcome::Tie) => println!("Everyone ran out together. It's a tie."),
        None => {}
    }
}

fn prompt_action(game: &Game) -> Option<Action> {
    loop {
        let defending = game.state() == GameState::Defend;
        let options = if defending {
            game.valid_defences(HUMAN)
        } else {
            game.valid_attacks(HUMAN)
        };

        println!("{}", format_options(&options));
        let extra = match game.state() {
            GameState::Defend => " [t]ake",
            GameState::PileOn => " [s]top",
            _ => "",
        };
        let input = prompt_line(&format!("Card number{extra}: "));

        match input.as_str() {
            "q" | "quit" => return None,
            "t" | "take" if defending => return Some(Action::Take),
            "s" | "stop" if game.state() == GameState::PileOn => return Some(Action::Stop),
            _ => {}
        }

        match input.parse::<usize>().ok().and_then(|i| options.get(i)) {
            Some(&card) if defending => return Some(Action::Defend(card)),
            Some(&card) => return Some(Action::Attack(card)),
            None => println!("Unknown choice."),
        }
    }
}

fn announce(game: &Game, seat: usize, action: Action) {
    let name = game.player(seat).name();
    match action {
        Action::Attack(card) => println!("{name} attacks with {}", format_card(card)),
        Action::Defend(card) => println!("{name} covers with {}", format_card(card)),
        Action::Take => println!("{name} takes the pile"),
        Action::Stop => println!("{name} stops attacking"),
    }
}

fn print_table(game: &Game) {
    println!(
        "\nRound {} | trump {} | deck {}",
        game.round() + 1,
        game.trump(),
        game.deck().remaining()
    );
    for (seat, player) in game.players().iter().enumerate() {
        let role = if seat == game.attacker() {
            "attacking"
        } else if seat == game.defender() {
            "defending"
        } else {
            ""
        };
        if seat == HUMAN {
            println!("  {player} {role}");
        } else {
            println!("  {}: {} card(s) {role}", player.name(), player.card_count());
        }
    }
    println!("Table: {}", game.table());
}

fn format_options(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "No playable cards.".to_string();
    }
    let parts: Vec<String> = cards
        .iter()
        .enumerate()
        .map(|(i, card)| format!("[{i}]{}", format_card(*card)))
        .collect();
    parts.join(" ")
}

fn format_card(card: Card) -> String {
    let code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    // End of input counts as quitting.
    if matches!(io::stdin().read_line(&mut input), Ok(0) | Err(_)) {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn prompt_number(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input.is_empty() || input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}
