//! Deal simulator CLI: plays many deals in memory and records per-deal metrics.
//!
//! Useful for comparing strategies seat against seat over thousands of deals.

mod metrics;
mod output;
mod types;

use clap::Parser;
use metrics::{build_deal_metrics, BatchSummary};
use output::OutputWriter;
use std::time::{Duration, Instant};
use table::ai::{create_ai, AiPlayer};
use table::domain::{AuctionEndRule, Seat, PLAYERS};
use table::{DealFlow, TableConfig};
use tracing::{debug, info, warn};
use types::{AiType, MetricsLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "deal-simulator")]
#[command(about = "Fast in-memory bridge deal simulator for strategy comparison")]
struct Args {
    /// Number of deals to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Strategy for all seats (shortcut for setting all four)
    #[arg(long, conflicts_with_all = ["north", "east", "south", "west"])]
    seats: Option<AiType>,

    #[arg(long, default_value = "heuristic")]
    north: AiType,

    #[arg(long, default_value = "heuristic")]
    east: AiType,

    #[arg(long, default_value = "heuristic")]
    south: AiType,

    #[arg(long, default_value = "heuristic")]
    west: AiType,

    /// Base seed; deal n is shuffled with seed + n
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

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Gzip the JSONL output
    #[arg(long)]
    compress: bool,

    #[arg(long, default_value = "basic")]
    metrics_level: MetricsLevel,
}

impl Args {
    fn seat_types(&self) -> [AiType; PLAYERS] {
        match self.seats {
            Some(all) => [all; PLAYERS],
            None => [self.north, self.east, self.south, self.west],
        }
    }

    fn table_config(&self) -> Result<TableConfig, Box<dyn std::error::Error>> {
        let mut config = TableConfig::from_env()?;
        if let Some(seat) = self.first_seat {
            config.first_seat = seat;
        }
        if let Some(rule) = self.auction_end {
            config.auction_end = rule;
        }
        if let Some(max) = self.max_auction_calls {
            config.max_auction_calls = max;
        }
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let seat_types = args.seat_types();
    let ai_names = seat_types.map(|t| t.name().to_string());
    if args.show_output {
        info!(games = args.games, ai = ?ai_names, "Starting deal simulator");
    }

    let flow = DealFlow::new(args.table_config()?);
    let strategies = Seat::ALL
        .iter()
        .map(|seat| create_strategy(seat_types[seat.index()], args.seed, *seat))
        .collect::<Result<Vec<_>, _>>()?;
    let seats: [&dyn AiPlayer; PLAYERS] = [
        strategies[0].as_ref(),
        strategies[1].as_ref(),
        strategies[2].as_ref(),
        strategies[3].as_ref(),
    ];

    let mut output_writer = OutputWriter::new(&args.output_dir, args.output_format, args.compress)?;

    let start = Instant::now();
    let mut summary = BatchSummary::default();
    let mut errors = 0u32;

    for deal_id in 1..=args.games {
        let deal_start = Instant::now();
        let seed = match args.seed {
            Some(base) => base.wrapping_add(u64::from(deal_id)),
            None => rand::random(),
        };

        match flow.run_seeded_with(seed, seats) {
            Ok(report) => {
                let duration_ms = deal_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_deal_metrics(
                    deal_id,
                    seed,
                    ai_names.clone(),
                    &report,
                    duration_ms,
                    args.metrics_level,
                );
                if let Err(e) = output_writer.write_deal(&metrics) {
                    warn!(deal_id, error = %e, "Failed to write metrics");
                }
                summary.record(&metrics);
                debug!(deal_id, seed, contract = ?metrics.contract, "Deal completed");
            }
            Err(e) => {
                errors += 1;
                warn!(deal_id, seed, error = %e, "Deal failed");
            }
        }
    }

    let elapsed = start.elapsed();
    let (jsonl_path, csv_path) = output_writer.output_paths();
    let (jsonl_path, csv_path) = (jsonl_path.cloned(), csv_path.clone());
    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path {
            info!("Detailed results written to: {}", path.display());
        }
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&summary, errors, elapsed, args.games);
    }

    Ok(())
}

/// With a base seed, each seat's randomness is derived from it so whole batches replay.
fn create_strategy(
    ai: AiType,
    base_seed: Option<u64>,
    seat: Seat,
) -> Result<Box<dyn AiPlayer>, Box<dyn std::error::Error>> {
    let seed = base_seed.map(|s| s ^ ((seat.index() as u64 + 1) << 32));
    create_ai(ai.key(), seed).ok_or_else(|| format!("Unknown AI type: {}", ai.key()).into())
}

fn print_summary(summary: &BatchSummary, errors: u32, elapsed: Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Deals completed: {}/{}", summary.deals, total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if summary.deals == 0 {
        return;
    }
    println!("Average time per deal: {:?}", elapsed / summary.deals);
    println!(
        "Average calls per auction: {:.1}",
        summary.total_calls as f64 / f64::from(summary.deals)
    );
    if summary.recovered_bids > 0 {
        println!("Rejected automatic bids: {}", summary.recovered_bids);
    }

    println!("\n=== Contracts ===");
    println!("Passed out: {}", summary.passed_out);
    match summary.made_pct() {
        Some(pct) => println!(
            "Played: {} (made {}, failed {}, {pct:.1}% made)",
            summary.contracts(),
            summary.made,
            summary.failed
        ),
        None => println!("Played: 0"),
    }
    for (strain, count) in summary.strain_counts() {
        println!("  {:>2}: {count}", strain.to_str());
    }

    let [ns, ew] = summary.avg_side_points();
    println!("\n=== Points per Deal ===");
    println!("North/South: {ns:.1}");
    println!("East/West:   {ew:.1}");
}
