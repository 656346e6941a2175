use clap::Parser;
use table::ai::{create_ai, AiPlayer, AI_NAMES};
use table::bin_support::render::render_report;
use table::domain::{AuctionEndRule, Seat, PLAYERS};
use table::{telemetry, AppError, DealFlow, TableConfig};
use tracing::error;

/// Deal, bid, and play one hand of contract bridge.
///
/// Settings come from TABLE_* environment variables; flags override them.
#[derive(Parser)]
#[command(name = "table")]
struct Args {
    /// Shuffle seed (reproduces a deal)
    #[arg(long)]
    seed: Option<u64>,

    /// Seat that deals and calls first (N, E, S, W)
    #[arg(long)]
    first_seat: Option<Seat>,

    /// Auction end rule: pass-out or strict
    #[arg(long)]
    auction_end: Option<AuctionEndRule>,

    /// Give up on an auction after this many calls
    #[arg(long)]
    max_auction_calls: Option<usize>,

    /// Player names in seat order N,E,S,W
    #[arg(long, value_delimiter = ',', num_args = 4)]
    names: Option<Vec<String>>,

    /// Strategy for every seat
    #[arg(long, default_value = "heuristic")]
    ai: String,

    /// Print the deal report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

impl Args {
    fn apply(&self, mut config: TableConfig) -> Result<TableConfig, AppError> {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(seat) = self.first_seat {
            config.first_seat = seat;
        }
        if let Some(rule) = self.auction_end {
            config.auction_end = rule;
        }
        if let Some(max) = self.max_auction_calls {
            config.max_auction_calls = max;
        }
        if let Some(names) = &self.names {
            config.seat_names = names
                .clone()
                .try_into()
                .map_err(|_| AppError::config(format!("--names needs {PLAYERS} names")))?;
        }
        Ok(config)
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let config = args.apply(TableConfig::from_env()?)?;
    let seed = config.seed.unwrap_or_else(rand::random);

    let strategies: Vec<Box<dyn AiPlayer>> = Seat::ALL
        .iter()
        .map(|seat| {
            create_ai(&args.ai, Some(seed ^ seat.index() as u64)).ok_or_else(|| {
                AppError::config(format!(
                    "unknown AI '{}' (expected one of {})",
                    args.ai,
                    AI_NAMES.join(", ")
                ))
            })
        })
        .collect::<Result<_, _>>()?;
    let seats: [&dyn AiPlayer; PLAYERS] = [
        strategies[0].as_ref(),
        strategies[1].as_ref(),
        strategies[2].as_ref(),
        strategies[3].as_ref(),
    ];

    let flow = DealFlow::new(config);
    let report = flow.run_seeded_with(seed, seats)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?;
        println!("{json}");
    } else {
        print!("{}", render_report(&report, &flow.config().seat_names));
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    telemetry::init_tracing(args.verbose, args.json_logs);

    if let Err(e) = run(&args) {
        error!(code = e.code(), error = %e, "Deal failed");
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}
