//! CLI blackjack demo.
//!
//! Run with `RUST_LOG=debug` to trace deals and draws.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjrules::{Card, Game, GameOptions, GameStatus, Hand, Suit};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Blackjack CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        print_table(&game);
        println!("{}", format_actions(&game));

        let outcome = match prompt_line("Action: ").as_str() {
            "h" | "hit" if game.can_act() => game.hit().map(|card| {
                println!("You draw {}.", format_card(&card));
            }),
            "s" | "stand" if game.can_act() => game.stand().map(|drawn| {
                for card in drawn {
                    println!("Dealer draws {}.", format_card(&card));
                }
            }),
            "h" | "hit" | "s" | "stand" => {
                println!("The dealer has played; reset to start a new game.");
                Ok(())
            }
            "r" | "reset" => {
                game.reset();
                Ok(())
            }
            "q" | "quit" => {
                println!("Goodbye.");
                return;
            }
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        if let Err(err) = outcome {
            println!("Game error: {err}. Starting a new game.");
            game.reset();
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => "q".to_string(),
        Ok(_) => input.trim().to_lowercase(),
    }
}

fn print_table(game: &Game) {
    let state = game.state();
    println!("\nThere are {} cards left in the deck", state.cards_remaining());

    let dealer = state
        .visible_dealer_cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    match state.visible_dealer_score() {
        Some(score) => println!("\nDealer: {dealer} (score {score})"),
        None => println!("\nDealer: ?? {dealer}"),
    }

    let player = state.player_hand();
    println!("Player: {} (score {})", format_hand(player), player.score());

    match game.status() {
        GameStatus::Decided(result) => println!("\n{}", colorize(&result.to_string(), "33")),
        GameStatus::InProgress(turn) => println!("\n{turn}"),
    }
    println!();
}

fn format_actions(game: &Game) -> String {
    let allowed = game.can_act();
    let parts = [
        format_action("hit", "h", allowed),
        format_action("stand", "s", allowed),
        format_action("reset", "r", true),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
