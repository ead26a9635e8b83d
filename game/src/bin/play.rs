use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    sync::Arc,
};

use clap::Parser;
use database::{DatabaseConfig, LeaderboardStore, SqliteLeaderboard};
use game::{
    fetch_standings, record_final_score, render_standings, Choice, GameSession, Professor, Roster,
};
use itertools::Itertools;
use regex::Regex;
use types::{Difficulty, Mode};

#[derive(Parser, Debug)]
struct Params {
    /// Name shown on the leaderboard
    #[arg(short, long)]
    name: String,

    #[arg(short, long, default_value = "guess")]
    mode: Mode,

    #[arg(short, long, default_value = "normal")]
    difficulty: Difficulty,

    /// Scraped professors.json
    #[arg(short, long)]
    roster: PathBuf,

    /// Leaderboard database; falls back to DATABASE_URL
    #[arg(long)]
    database_url: Option<String>,
}

enum Command {
    Guess(f64),
    Choose(Choice),
    Leaderboard,
    Restart,
    Quit,
}

fn parse_command(pattern: &Regex, line: &str) -> Option<Command> {
    let caps = pattern.captures(line)?;
    log::debug!("Captured: {caps:?}");
    if let Some(guess) = caps.name("guess") {
        return guess.as_str().parse().ok().map(Command::Guess);
    }
    if let Some(choice) = caps.name("choice") {
        return choice.as_str().parse().ok().map(Command::Choose);
    }
    if caps.name("board").is_some() {
        return Some(Command::Leaderboard);
    }
    if caps.name("restart").is_some() {
        return Some(Command::Restart);
    }
    Some(Command::Quit)
}

fn print_professor(label: &str, professor: &Professor, difficulty: Difficulty) {
    println!("{label}: {professor}");
    for comment in professor.sample_comments(&mut rand::thread_rng(), 3) {
        let grade = comment.visible_grade(difficulty).unwrap_or("N/A");
        println!(
            "  \"{}\" [{}] grade: {grade}",
            comment.comment.as_deref().unwrap_or(""),
            comment.tags.iter().join(", ")
        );
    }
}

fn print_round(session: &GameSession) {
    println!("\nScore: {}", session.score());
    match session.mode() {
        Mode::HigherLower => {
            print_professor("Left", session.left(), session.difficulty());
            println!("  rated {:.1}", session.left().rating);
            print_professor("Right", session.right(), session.difficulty());
            println!("Is the left professor rated (h)igher or (l)ower?");
        }
        Mode::Guess | Mode::Guess10 => {
            print_professor("Professor", session.left(), session.difficulty());
            println!("Guess the rating (1.0 - 5.0):");
        }
    }
}

async fn print_leaderboards(store: Option<&dyn LeaderboardStore>, mode: Mode, player_name: &str) {
    let Some(store) = store else {
        println!("The online leaderboard is not available.");
        return;
    };
    for difficulty in Difficulty::ALL {
        match fetch_standings(store, mode, difficulty, player_name).await {
            Some(page) => println!("\n{}", render_standings(&page)),
            None => println!("\nUnable to load the {difficulty} leaderboard right now."),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Params::parse();
    log::info!("args: {args:?}");

    let roster = Roster::load(&args.roster)?;
    let config = DatabaseConfig::from_cli_or_env_or_yaml(args.database_url.clone(), None);
    let store: Option<Arc<dyn LeaderboardStore>> = match SqliteLeaderboard::connect(&config).await
    {
        Ok(store) => Some(Arc::new(store)),
        Err(err) => {
            log::error!("Playing without a leaderboard: {err}");
            None
        }
    };

    let pattern = Regex::new(
        r"(?i)^\s*(?:(?P<guess>\d(?:\.\d+)?)|(?P<choice>h|higher|l|lower)|(?P<board>b|board|leaderboard)|(?P<restart>r|restart)|(?P<quit>q|quit))\s*$",
    )?;
    let mut session = GameSession::new(roster, args.mode, args.difficulty);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    print_round(&session);
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let outcome = match parse_command(&pattern, &line) {
            Some(Command::Guess(guess)) => session.guess_rating(guess),
            Some(Command::Choose(choice)) => session.choose(choice),
            Some(Command::Restart) => {
                session.restart();
                print_round(&session);
                continue;
            }
            Some(Command::Leaderboard) => {
                print_leaderboards(store.as_deref(), session.mode(), &args.name).await;
                continue;
            }
            Some(Command::Quit) => break,
            None => {
                log::error!("Error parsing input: {line:?}");
                continue;
            }
        };

        match outcome {
            Ok(outcome) if outcome.game_over => {
                println!(
                    "Game over! The rating was {:.1}. Final score: {}",
                    outcome.actual,
                    session.score()
                );
                if let Some(store) = &store {
                    record_final_score(store.as_ref(), &args.name, &session).await;
                }
                println!("(r)estart, (b)oard or (q)uit?");
            }
            Ok(outcome) => {
                println!("+{} (rating was {:.1})", outcome.points, outcome.actual);
                print_round(&session);
            }
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}
