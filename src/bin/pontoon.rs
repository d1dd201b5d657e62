//! Console blackjack front-end.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pontoon::{
    DealError, DecisionSource, FlipError, MAX_PLAYERS, Outcome, Participant, Table, TableView,
};

/// Reads hit decisions from stdin.
struct ConsoleInput;

impl DecisionSource for ConsoleInput {
    fn wants_hit(&mut self, name: &str) -> bool {
        prompt_yes_no(&format!("{name}, do you want to hit? (Y/N): "))
    }
}

/// Renders table events to stdout.
struct ConsoleView;

impl TableView for ConsoleView {
    fn show_hand(&mut self, seat: &Participant) {
        println!("{seat}");
    }

    fn show_bust(&mut self, name: &str) {
        println!("{name} busts!");
    }

    fn show_outcome(&mut self, name: &str, outcome: Outcome) {
        match outcome {
            Outcome::Win => println!("{name} wins."),
            Outcome::Lose => println!("{name} loses."),
            Outcome::Push => println!("{name} pushes."),
        }
    }

    fn show_deal_error(&mut self, error: DealError) {
        println!("{error}");
    }

    fn show_flip_error(&mut self, error: FlipError) {
        println!("{error}");
    }
}

fn main() {
    println!("\n\t*** Welcome to Blackjack ***\n");
    println!("You, and up to {} other players, play against the house.", MAX_PLAYERS - 1);
    println!("The house keeps one card face down until every player has had their turn.");
    println!("On your turn, choose to hit or stand; the goal is to get as close to 21");
    println!("as possible without going over.\n");

    let count = prompt_player_count();

    let mut names = Vec::with_capacity(count);
    for _ in 0..count {
        names.push(prompt_line("Enter player name: "));
    }
    println!();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let mut table = match Table::new(&name_refs, seed) {
        Ok(table) => table,
        Err(error) => {
            println!("{error}");
            return;
        }
    };

    let mut input = ConsoleInput;
    let mut view = ConsoleView;

    loop {
        table.play_round(&mut input, &mut view);

        if !prompt_yes_no("\nDo you want to play again? (Y/N): ") {
            break;
        }
        table.shuffle_up();
        println!();
    }
}

/// Prompts until a player count between 1 and 7 is entered.
fn prompt_player_count() -> usize {
    loop {
        let answer = prompt_line("How many players? (1 - 7): ");
        match answer.parse::<usize>() {
            Ok(count) if (1..=MAX_PLAYERS).contains(&count) => return count,
            _ => {}
        }
    }
}

fn prompt_yes_no(prompt: &str) -> bool {
    let answer = prompt_line(prompt).to_lowercase();
    matches!(answer.as_str(), "y" | "yes")
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}
