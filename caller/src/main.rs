use std::path::PathBuf;

use bingo::{generate_card, shuffle_stream, visualize_card, Game, GameFile, WinRule};
use caller::{replay, simulate, Recorder, Tally};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info", global = true)]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Command {
    /// Write a random card and draw stream to a game file
    Generate {
        /// Where to write the game file
        output: PathBuf,

        /// RNG seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Replay a game file and print the winning number
    Play {
        /// Path to the game file
        input: PathBuf,

        /// When a pattern counts as won: "completed" or "one-short"
        #[arg(short, long, default_value_t = WinRule::Completed)]
        rule: WinRule,

        /// Print the card with its marks after the game
        #[arg(long, default_value_t = false)]
        show_card: bool,
    },
    /// Play many random games and summarize the results
    Simulate {
        /// How many games to play
        #[arg(short, long, default_value_t = 100)]
        num_games: usize,

        /// RNG seed
        #[arg(long)]
        seed: Option<u64>,

        /// When a pattern counts as won: "completed" or "one-short"
        #[arg(short, long, default_value_t = WinRule::Completed)]
        rule: WinRule,

        /// Record the games as game files and JSON reports into this directory
        #[arg(long)]
        record_games_to_directory: Option<PathBuf>,
    },
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    // Get a random seed
    let seed = seed.unwrap_or_else(rand::random);
    info!(seed);
    StdRng::seed_from_u64(seed)
}

fn print_tally(tally: &Tally) {
    eprintln!("End result after {} games:", tally.games);
    for (kind, wins) in &tally.wins_by_pattern {
        let percentage = *wins as f32 / tally.games as f32 * 100.0;
        eprintln!("- {} won by a {} ({:.1}%)", wins, kind, percentage);
    }
    eprintln!("- {} without a winner", tally.exhausted);
    if let Some(average) = tally.average_draws() {
        eprintln!("- {:.2} draws per win on average", average);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    match args.command {
        Command::Generate { output, seed } => {
            let mut rng = seeded_rng(seed);
            let game_file = GameFile {
                card: generate_card(&mut rng),
                stream: shuffle_stream(&mut rng),
            };
            game_file.save(&output)?;
            info!(path = %output.display(), "Wrote game file");
        }
        Command::Play {
            input,
            rule,
            show_card,
        } => {
            let game_file = GameFile::load(&input)?;
            let mut game = Game::new(game_file.card, game_file.stream, rule);
            match replay(&mut game) {
                Some(bingo) => {
                    info!(
                        pattern = %bingo.pattern,
                        draws = bingo.draw_idx + 1,
                        %rule,
                        "Bingo"
                    );
                    println!("{}", bingo.number);
                }
                None => println!("no winner"),
            }
            if show_card {
                eprintln!("{}", visualize_card(game.card(), game.marks()));
            }
        }
        Command::Simulate {
            num_games,
            seed,
            rule,
            record_games_to_directory,
        } => {
            let mut rng = seeded_rng(seed);
            let mut recorder = if let Some(dir_path) = record_games_to_directory {
                Some(Recorder::new(dir_path)?)
            } else {
                None
            };
            let tally = simulate(&mut rng, num_games, rule, &mut recorder)?;
            print_tally(&tally);
        }
    }

    Ok(())
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
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
