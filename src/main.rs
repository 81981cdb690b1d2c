use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use cobble::cards::{Card, SymbolPool};
use cobble::{catalogue, GameConfig, Phase, Pick, Session};
use tracing::{info, warn};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(about = "Spot the symbol two cards share")]
struct Args {
    /// Directory with the .png images used as symbols
    #[arg(short = 'i', long)]
    image_dir: Option<PathBuf>,

    /// Number of symbols on each card (minus one must be prime)
    #[arg(short = 'c', long)]
    images_per_card: Option<u32>,

    /// Config file remembering the image directory and card size
    #[arg(long, default_value = "cobble.json")]
    config: PathBuf,

    /// Wrong picks allowed per game
    #[arg(long)]
    lives: Option<u32>,

    /// Time budget per game, in seconds
    #[arg(long)]
    time_limit: Option<u64>,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn load_config(args: &Args) -> anyhow::Result<GameConfig> {
    let mut config = if args.config.exists() {
        GameConfig::load(&args.config)?
    } else {
        GameConfig::default()
    };

    let mut changed = false;
    if let Some(dir) = &args.image_dir {
        config.symbol_dir = Some(dir.clone());
        changed = true;
    }
    if let Some(count) = args.images_per_card {
        config.symbols_per_card = count;
        changed = true;
    }
    if let Some(lives) = args.lives {
        config.lives = lives;
    }
    if let Some(secs) = args.time_limit {
        config.time_limit_ms = secs.saturating_mul(1000);
    }

    config.validate()?;
    if changed {
        if let Err(err) = config.save(&args.config) {
            warn!(%err, "could not remember settings");
        }
    }
    Ok(config)
}

fn load_symbols(config: &GameConfig) -> anyhow::Result<SymbolPool> {
    let symbols = match &config.symbol_dir {
        Some(dir) => catalogue::scan(dir)?,
        None => catalogue::generated(config.required_symbols()),
    };
    Ok(SymbolPool::new(symbols))
}

fn print_card(label: &str, card: &Card) {
    let names: Vec<_> = card.names().collect();
    println!("  {label:>5}: {}", names.join("  "));
}

fn print_table(session: &Session) {
    let secs = session.remaining_ms() / 1000;
    println!(
        "\nscore {}  lives {}  time {:02}:{:02}  cards left {}",
        session.score(),
        session.lives(),
        secs / 60,
        secs % 60,
        session.remaining_cards()
    );
    if let (Some(left), Some(right)) = (session.left_card(), session.right_card()) {
        print_card("left", left);
        print_card("right", right);
    }
    print!("> ");
    let _ = std::io::stdout().flush();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let config = load_config(&args)?;
    let pool = load_symbols(&config)?;

    let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);
    info!(seed);

    let mut session = Session::new(&config, &pool, seed)?;

    println!("COBBLE: type the symbol both cards share, or \"quit\".");
    session.start()?;
    print_table(&session);

    let stdin = std::io::stdin();
    let mut last = Instant::now();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") {
            break;
        }

        let now = Instant::now();
        let elapsed = u64::try_from(now.duration_since(last).as_millis()).unwrap_or(u64::MAX);
        last = now;

        if session.phase().is_playing() {
            // The answer only counts if it arrived within the time budget.
            if session.tick(elapsed).is_playing() {
                match session.pick(input)? {
                    Pick::Correct => println!("yes!"),
                    Pick::Wrong => println!("no, that one is not on both cards"),
                    Pick::Missed => println!("no symbol called {input:?} on the table"),
                }
            }
        } else if input.eq_ignore_ascii_case("y") {
            session.restart()?;
            last = Instant::now();
        } else {
            break;
        }

        match session.phase() {
            Phase::Outro(reason) => {
                println!("\nGame over: {reason}. Score {}.", session.score());
                print!("Play again? (y/n) ");
                let _ = std::io::stdout().flush();
            }
            _ => print_table(&session),
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
        .with(tracing_subscriber::fmt::layer().event_format(format).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
