//! CLI blackjack front end.

use std::io::{self, Write};

use bjsim::{Card, Chip, Game, GameOptions, GameState, Rank, RoundOutcome, Suit, TableView};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI (type 'q' to quit)");

    let mut game = Game::from_entropy(GameOptions::default());

    loop {
        if game.is_game_over() {
            println!("You are out of money. Game over.");
            break;
        }
        if game.bet() == 0 && !game.available_actions().bet {
            println!(
                "{} left, below the smallest chip. Game over.",
                format_money(game.balance())
            );
            break;
        }

        if !betting(&mut game) {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = game.deal() {
            println!("Deal error: {err}");
            continue;
        }

        while game.state() == GameState::PlayerTurn {
            let view = game.view();
            print_table(&view);
            println!("{}", format_actions(&view));

            let result = match prompt_line("Action: ").as_str() {
                "h" | "hit" => game.hit().map(|_| ()),
                "s" | "stand" => game.stand(),
                "d" | "double" => game.double_down().map(|_| ()),
                "u" | "surrender" => game.surrender().map(|refund| {
                    println!("Refunded {}", format_money(refund));
                }),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        match game.dealer_play() {
            Ok(drawn) => {
                for card in drawn {
                    println!("Dealer draws {}", format_card(&card));
                }
            }
            Err(err) => {
                println!("Dealer error: {err}");
                break;
            }
        }

        match game.showdown() {
            Ok(result) => {
                print_table(&game.view());
                let banner = match result.outcome {
                    RoundOutcome::PlayerBlackjack => "Blackjack!",
                    RoundOutcome::PlayerWin => "You won!",
                    RoundOutcome::PlayerLoss => "You lost!",
                    RoundOutcome::Push => "Push!",
                    RoundOutcome::Surrendered => "Surrendered.",
                };
                println!(
                    "{banner} Payout {} (net {})",
                    format_money(result.payout),
                    format_net(result.net)
                );
            }
            Err(err) => {
                println!("Showdown error: {err}");
                break;
            }
        }
    }
}

/// Collects chips until the player deals. Returns `false` to quit.
fn betting(game: &mut Game) -> bool {
    loop {
        println!(
            "\nBalance: {}  Bet: {}",
            format_money(game.balance()),
            format_money(game.bet())
        );
        let input = prompt_line("Chip [.5/1/5/25/100/500], [c]lear, [d]eal: ");
        let chip = match input.as_str() {
            ".5" | "0.5" => Chip::Half,
            "1" => Chip::One,
            "5" => Chip::Five,
            "25" => Chip::TwentyFive,
            "100" => Chip::OneHundred,
            "500" => Chip::FiveHundred,
            "c" | "clear" => {
                let _ = game.clear_bet();
                continue;
            }
            "d" | "deal" if game.bet() > 0 => return true,
            "d" | "deal" => {
                println!("Place a bet first.");
                continue;
            }
            "q" | "quit" => return false,
            _ => {
                println!("Unknown input.");
                continue;
            }
        };

        if let Err(err) = game.place_chip(chip) {
            println!("Bet error: {err}");
        }
    }
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
    println!("\nDeck: {} cards remaining", view.cards_remaining);

    let dealer = view
        .dealer_cards
        .iter()
        .map(|card| card.as_ref().map_or_else(|| "??".to_string(), format_card))
        .collect::<Vec<_>>()
        .join(" ");
    println!("Dealer: {dealer} (value {})", view.dealer_value);

    let player = view
        .player_cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "You:    {player} (value {}) | bet {} | balance {}",
        view.player_value,
        format_money(view.bet),
        format_money(view.balance)
    );
    println!();
}

fn format_actions(view: &TableView) -> String {
    let actions = view.actions;
    let parts = [
        format_action("hit", "h", actions.hit),
        format_action("stand", "s", actions.stand),
        format_action("double", "d", actions.double_down),
        format_action("surrender", "u", actions.surrender),
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

fn format_money(cents: usize) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

fn format_net(cents: isize) -> String {
    let sign = if cents < 0 { "-" } else { "+" };
    format!("{sign}{}", format_money(cents.unsigned_abs()))
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        Rank::Ace => "A".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        _ => card.value().to_string(),
    };

    format!("{rank}{}", colorize(suit, color_code))
}
