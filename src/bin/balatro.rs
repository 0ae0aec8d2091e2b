use balatro_poker::cards::Card;
use balatro_poker::catalog::score_reference;
use balatro_poker::engine::autoplay;
use balatro_poker::evaluator::{analyze, classify};
use balatro_poker::hand::Hand;
use balatro_poker::round::{Round, RoundConfig};
use balatro_poker::{logging, VERSION};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Repeat for more log output on stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Also write debug logs to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Classify played cards, e.g. `classify Kd Kc Kh`")]
    Classify {
        #[arg(required = true)]
        cards: Vec<String>,
    },
    #[command(about = "List every combo in a hand, best first")]
    Analyze {
        #[arg(required = true)]
        cards: Vec<String>,
        /// Show only the first N combos.
        #[arg(long)]
        top: Option<usize>,
    },
    #[command(about = "Print the base and multiplier of every combo")]
    Scores,
    #[command(about = "Play a round by always taking the recommended combo")]
    Autoplay {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 8)]
        hand_size: usize,
        #[arg(long)]
        discard_limit: Option<u32>,
        #[arg(long, default_value_t = 4)]
        play_limit: u32,
        #[arg(long, default_value_t = 300)]
        required_points: u32,
    },
}

fn cards_arg(tokens: &[String]) -> Result<Hand, Box<dyn std::error::Error>> {
    Ok(tokens.join(" ").parse::<Hand>()?)
}

fn names(cards: &[Card]) -> String {
    cards.iter().map(|c| c.short_name()).collect::<Vec<_>>().join(" ")
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Classify { cards } => {
            let hand = cards_arg(&cards)?;
            let cards = hand.as_slice();
            let class = classify(cards);
            println!(
                "{} ({} x{}) = {}",
                class.combo,
                class.score.base,
                class.score.multiplier,
                class.score.apply(cards)
            );
        }
        Command::Analyze { cards, top } => {
            let hand = cards_arg(&cards)?;
            let hand = hand.as_slice();
            let ranked = analyze(hand);
            for combo in ranked.iter().take(top.unwrap_or(ranked.len())) {
                let positions: Vec<String> =
                    combo.positions_in(hand).iter().map(|p| (p + 1).to_string()).collect();
                println!(
                    "{:>5}  {:<16} {:<20} [{}]",
                    combo.score,
                    combo.name(),
                    names(&combo.cards),
                    positions.join(",")
                );
            }
        }
        Command::Scores => {
            for (combo, score) in score_reference() {
                println!("{:<16} {:>4} x{}", combo.name(), score.base, score.multiplier);
            }
        }
        Command::Autoplay { seed, hand_size, discard_limit, play_limit, required_points } => {
            let defaults = RoundConfig::default();
            let config = RoundConfig {
                hand_size,
                discard_limit: discard_limit.or(defaults.discard_limit),
                play_limit: Some(play_limit),
                required_points,
                seed,
            };
            let mut round = Round::new(config);
            println!(
                "round {} (seed {}), target {}",
                round.round_number(),
                round.seed(),
                required_points
            );
            for play in autoplay(&mut round, required_points) {
                println!("{:>5}  {:<16} {}", play.score, play.combo.name(), names(&play.cards));
            }
            let verdict = if round.is_cleared() { "cleared" } else { "failed" };
            println!("{} / {} points, {verdict}", round.points(), required_points);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = logging::init(logging::level_for(cli.verbose), cli.log_file.as_deref()) {
        eprintln!("balatro-poker {VERSION}: {err}");
        return ExitCode::FAILURE;
    }
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
