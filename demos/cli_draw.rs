//! CLI five-card draw example.
//!
//! You sit in seat 0 against two opponents who always check or call and
//! never draw. Set `RUST_LOG=debug` to follow the engine.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use drawrs::{
    Action, Card, Decision, DrawError, Game, GameOptions, RoundState, Suit, TableView,
};

const YOU: u8 = 0;

fn main() {
    env_logger::init();
    println!("Five-card draw CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = match Game::new(GameOptions::default(), &[(YOU, 100), (1, 100), (2, 100)], seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };

    loop {
        match game.post_antes() {
            Ok(sat_out) => {
                for player_id in sat_out {
                    println!("Player {player_id} cannot cover the ante and sits out.");
                }
            }
            Err(err) => println!("Ante error: {err}"),
        }

        if game.state() == RoundState::InitialDeal {
            if let Err(err) = game.deal() {
                println!("Deal error: {err}");
                let _ = game.abort_hand();
            }
        }

        while let Some(decision) = game.awaiting() {
            let keep_going = match decision {
                Decision::Act { player_id: YOU, to_call } => your_action(&game, to_call),
                Decision::Discard { player_id: YOU, max } => your_discard(&game, max),
                Decision::Act { player_id, to_call } => {
                    let action = if to_call == 0 {
                        Action::Check
                    } else {
                        Action::Call
                    };
                    if game.act(player_id, action).is_err() {
                        let _ = game.act(player_id, Action::Fold);
                        println!("Player {player_id} folds.");
                    } else {
                        println!("Player {player_id}: {action:?}");
                    }
                    true
                }
                Decision::Discard { player_id, .. } => {
                    match game.discard(player_id, &[]) {
                        Ok(_) => println!("Player {player_id} stands pat."),
                        Err(err) => println!("Draw error: {err}"),
                    }
                    true
                }
            };
            if !keep_going {
                return;
            }
        }

        if game.state() == RoundState::Showdown {
            match game.showdown() {
                Ok(result) => {
                    print_table(&game.view());
                    if let Some(outcome) = &result.outcome {
                        println!("Winning hand: {}", outcome.category);
                    }
                    for payout in &result.payouts {
                        println!("Player {} wins {}", payout.player_id, payout.amount);
                    }
                }
                Err(err) => println!("Showdown error: {err}"),
            }
        }

        if let Err(err) = game.new_hand() {
            println!("Game over: {err}");
            break;
        }
    }
}

/// Returns `false` when the player quits.
fn your_action(game: &Game, to_call: usize) -> bool {
    print_table(&game.view());
    print_hand(game);

    loop {
        let prompt = if to_call == 0 {
            "Action ([k]check, [b]et N, [f]old): ".to_string()
        } else {
            format!("Action ([c]all {to_call}, [r]aise N, [f]old): ")
        };
        let input = prompt_line(&prompt);
        let mut words = input.split_whitespace();
        let amount = words.nth(1).and_then(|word| word.parse::<usize>().ok());

        let action = match (input.chars().next(), amount) {
            (Some('q'), _) => return false,
            (Some('k'), _) => Action::Check,
            (Some('c'), _) => Action::Call,
            (Some('f'), _) => Action::Fold,
            (Some('b'), Some(amount)) => Action::Bet(amount),
            (Some('r'), Some(amount)) => Action::Raise(amount),
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        match game.act(YOU, action) {
            Ok(_) => return true,
            Err(err) => println!("Action error: {err}"),
        }
    }
}

/// Returns `false` when the player quits.
fn your_discard(game: &Game, max: usize) -> bool {
    print_hand(game);

    loop {
        let input = prompt_line(&format!(
            "Discard up to {max} cards by position (1-5), blank to stand pat: "
        ));
        if input == "q" || input == "quit" {
            return false;
        }

        let Some(indices) = discard_indices(&input) else {
            println!("Please enter card positions from 1 to 5.");
            continue;
        };

        match game.discard(YOU, &indices) {
            Ok(_) => {
                print_hand(game);
                return true;
            }
            Err(DrawError::EmptyDeck) => {
                println!("The deck ran out. The hand is cancelled.");
                let _ = game.abort_hand();
                return true;
            }
            Err(err) => println!("Draw error: {err}"),
        }
    }
}

/// Turns 1-based card positions into hand indices.
fn discard_indices(input: &str) -> Option<Vec<usize>> {
    input
        .split_whitespace()
        .map(|word| word.parse::<usize>().ok()?.checked_sub(1))
        .collect()
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(view: &TableView) {
    println!(
        "\n{:?} | pot {} | bet {}",
        view.state, view.pot, view.current_bet
    );
    for player in &view.players {
        let marker = if view.current_player == Some(player.id) {
            "*"
        } else {
            " "
        };
        let button = if player.is_dealer { "(D)" } else { "   " };
        let status = if player.folded { "folded" } else { "" };
        let cards = player
            .shown
            .as_deref()
            .map(format_cards)
            .unwrap_or_default();
        println!(
            "{marker} Player {} {button} chips {} | in {} {status} {cards}",
            player.id, player.chips, player.committed
        );
    }
    println!();
}

fn print_hand(game: &Game) {
    let cards = game.hand(YOU).unwrap_or_default();
    println!("Your hand: {}", format_cards(&cards));
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards
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

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discard_indices_are_one_based() {
        assert_eq!(discard_indices(""), Some(Vec::new()));
        assert_eq!(discard_indices("1 5"), Some(vec![0, 4]));
        assert_eq!(discard_indices("0"), None);
        assert_eq!(discard_indices("2 x"), None);
    }
}
