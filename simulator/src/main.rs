use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::{path::PathBuf, str::FromStr};
use threeshot_execution::{deal, resolve, GameRng};
use threeshot_simulator::{simulate, Config, Report, Strategy};
use threeshot_types::casino::{parse_cards, Decision, DealtRoundCards, HOLE_CARDS};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides the configured log level.
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve one round and print the result as JSON.
    Play {
        /// Seed for a dealt round (ignored when cards are given).
        #[arg(long)]
        seed: Option<u64>,

        /// Round id used with the seed.
        #[arg(long, default_value_t = 0)]
        round: u64,

        /// Hole cards, e.g. "Ah,Kh".
        #[arg(long, requires = "community")]
        hole: Option<String>,

        /// Community cards, e.g. "Qh,Jh,Th".
        #[arg(long, requires = "hole")]
        community: Option<String>,

        /// raise or fold. Defaults to the configured strategy.
        #[arg(long)]
        decision: Option<String>,

        #[arg(long)]
        first_shot_bet: Option<i64>,

        #[arg(long)]
        five_shot_bet: Option<i64>,
    },
    /// Simulate many rounds and print the house edge per wager.
    Simulate {
        #[arg(long)]
        rounds: Option<u64>,

        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, value_enum)]
        strategy: Option<Strategy>,

        #[arg(long)]
        first_shot_bet: Option<i64>,

        #[arg(long)]
        five_shot_bet: Option<i64>,
    },
    /// Print the configured pay tables as YAML.
    Paytables,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    Config::from_yaml(&text).with_context(|| format!("invalid config {}", path.display()))
}

fn parse_round_cards(hole: &str, community: &str) -> anyhow::Result<DealtRoundCards> {
    let hole = parse_cards(hole).context("invalid hole cards")?;
    let community = parse_cards(community).context("invalid community cards")?;
    let Ok(hole) = <[_; HOLE_CARDS]>::try_from(hole.as_slice()) else {
        bail!("expected {HOLE_CARDS} hole cards, got {}", hole.len());
    };
    let Ok(community) = <[_; 3]>::try_from(community.as_slice()) else {
        bail!("expected 3 community cards, got {}", community.len());
    };
    Ok(DealtRoundCards::new(hole, community))
}

fn print_report(report: &Report) {
    println!(
        "{:<10} {:>12} {:>14} {:>12} {:>10}",
        "wager", "rounds", "wagered", "net", "edge"
    );
    for (name, stats) in report.rows() {
        println!(
            "{:<10} {:>12} {:>14} {:>12} {:>9.4}%",
            name,
            stats.trials,
            stats.total_wagered,
            stats.total_net,
            stats.house_edge() * 100.0
        );
    }
    println!();
    println!(
        "raised {} of {} rounds, overall stderr {:.4}",
        report.raises,
        report.rounds,
        report.overall.stderr()
    );
    println!();
    println!("1st Shot hands:");
    for (hand, count) in report.first_shot_hands.iter().rev() {
        println!("  {:<18} {:>12}", hand.to_string(), count);
    }
    println!("5 Shot hands:");
    for (hand, count) in report.five_shot_hands.iter().rev() {
        println!("  {:<18} {:>12}", hand.to_string(), count);
    }
}

fn main() -> anyhow::Result<()> {
    // Parse args
    let args = Args::parse();
    let mut config = load_config(args.config.as_ref())?;
    if let Some(level) = args.log_level {
        config.log_level = level;
    }

    // Apply command overrides before validating
    match &args.command {
        Command::Play {
            seed,
            first_shot_bet,
            five_shot_bet,
            ..
        } => {
            config.seed = seed.unwrap_or(config.seed);
            config.first_shot_bet = first_shot_bet.unwrap_or(config.first_shot_bet);
            config.five_shot_bet = five_shot_bet.unwrap_or(config.five_shot_bet);
        }
        Command::Simulate {
            rounds,
            seed,
            strategy,
            first_shot_bet,
            five_shot_bet,
        } => {
            config.rounds = rounds.unwrap_or(config.rounds);
            config.seed = seed.unwrap_or(config.seed);
            config.strategy = strategy.unwrap_or(config.strategy);
            config.first_shot_bet = first_shot_bet.unwrap_or(config.first_shot_bet);
            config.five_shot_bet = five_shot_bet.unwrap_or(config.five_shot_bet);
        }
        Command::Paytables => {}
    }
    let config = config.validate().context("invalid configuration")?;

    // Create logger
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Play {
            seed,
            round,
            hole,
            community,
            decision,
            ..
        } => {
            let cards = match (hole, community) {
                (Some(hole), Some(community)) => parse_round_cards(&hole, &community)?,
                _ => {
                    let mut rng = match seed {
                        Some(_) => GameRng::new(config.seed, round),
                        None => GameRng::from_entropy(),
                    };
                    deal(&mut rng)
                }
            };
            let decision = match decision {
                Some(text) => Decision::from_str(&text).map_err(anyhow::Error::msg)?,
                None => config.strategy.decide(cards.hole_cards),
            };
            let result = resolve(
                &cards,
                config.wagers.first_shot() as i64,
                config.wagers.five_shot() as i64,
                decision,
                &config.paytables,
            )
            .context("failed to resolve round")?;
            info!(total_net = result.total_net, "round resolved");
            let json = serde_json::to_string_pretty(&result).context("failed to encode result")?;
            println!("{json}");
        }
        Command::Simulate { .. } => {
            let report = simulate(&config).context("simulation failed")?;
            print_report(&report);
        }
        Command::Paytables => {
            let yaml =
                serde_yaml::to_string(&config.paytables).context("failed to encode paytables")?;
            print!("{yaml}");
        }
    }

    Ok(())
}
