//! Console Go Fish: deals a table of computer players and prints every turn.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, bail};
use clap::Parser;
use gofish::{Game, SkipReason, TurnEvent, TurnOutcome};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(about = "Play a game of Go Fish between computer players")]
struct Args {
    /// Number of players (2-6). Prompted for when omitted.
    #[arg(short, long)]
    players: Option<usize>,

    /// RNG seed. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    info!(seed);

    let num_players = match args.players {
        Some(players) => players,
        None => prompt_player_count()?,
    };

    let mut game = Game::new(num_players, seed).context("could not set up the game")?;

    let names: Vec<String> = game
        .players()
        .iter()
        .map(|player| player.name().to_owned())
        .collect();

    let result = game
        .play_with(|event| println!("{}", describe(&names, event)))
        .context("game aborted")?;

    println!("Game over!");
    for standing in &result.players {
        println!("{}: {} books", standing.name, standing.books);
    }
    if let Some(winner) = result.winner() {
        println!("The winner is {}!", winner.name);
    }

    Ok(())
}

fn prompt_player_count() -> anyhow::Result<usize> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Enter number of players (2-6): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            bail!("no player count given");
        };
        match line?.trim().parse::<usize>() {
            Ok(count) => return Ok(count),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn describe(names: &[String], event: &TurnEvent) -> String {
    match event {
        TurnEvent::Refilled { player, cards } => {
            format!("{} draws {cards} cards", names[*player])
        }
        TurnEvent::Skipped {
            player,
            reason: SkipReason::NoOpponent,
            books,
        } if !books.is_empty() => {
            format!("{} lays down {} book(s)", names[*player], books.len())
        }
        TurnEvent::Skipped { player, reason, .. } => match reason {
            SkipReason::NoOpponent => format!("{} has nobody to ask", names[*player]),
            SkipReason::EmptyHand => format!("{} has no cards to ask with", names[*player]),
        },
        TurnEvent::Asked {
            asker,
            target,
            rank,
            outcome,
        } => {
            let mut line = match outcome {
                TurnOutcome::Catch { cards, .. } => format!(
                    "{} got {cards} {rank}(s) from {}!",
                    names[*asker], names[*target]
                ),
                TurnOutcome::GoFish { .. } => format!(
                    "{} asked {} for {rank}s and goes fishing!",
                    names[*asker], names[*target]
                ),
            };
            for book in outcome.books() {
                line.push_str(&format!(" Book of {book}s completed."));
            }
            line
        }
    }
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();
}
