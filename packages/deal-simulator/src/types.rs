//! Shared types for the simulator.

use clap::ValueEnum;
use table::ai::{Heuristic, RandomPlayer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per deal plus the CSV summary
    Jsonl,
    /// CSV summary only
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricsLevel {
    Basic,
    /// Adds dealt hands, every call, and every trick to each JSONL record
    Detailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AiType {
    Heuristic,
    Random,
}

impl AiType {
    /// Registry key understood by `table::ai::create_ai`.
    pub fn key(self) -> &'static str {
        match self {
            AiType::Heuristic => "heuristic",
            AiType::Random => "random",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AiType::Heuristic => Heuristic::NAME,
            AiType::Random => RandomPlayer::NAME,
        }
    }
}
