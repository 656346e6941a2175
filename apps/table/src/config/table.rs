use std::env;
use std::str::FromStr;

use crate::domain::{AuctionEndRule, Seat, PLAYERS};
use crate::error::AppError;

/// Upper bound on auction calls before the deal driver gives up.
pub const DEFAULT_MAX_AUCTION_CALLS: usize = 200;

/// Table settings for one deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Shuffle seed; `None` draws a fresh one per deal.
    pub seed: Option<u64>,
    /// Seat that deals first and calls first.
    pub first_seat: Seat,
    pub auction_end: AuctionEndRule,
    /// Call limit for `Strict` auctions; `PassOut` auctions always end on their own.
    pub max_auction_calls: usize,
    /// Display names indexed by `Seat::index()`.
    pub seat_names: [String; PLAYERS],
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seed: None,
            first_seat: Seat::North,
            auction_end: AuctionEndRule::default(),
            max_auction_calls: DEFAULT_MAX_AUCTION_CALLS,
            seat_names: Seat::ALL.map(|s| s.name().to_string()),
        }
    }
}

impl TableConfig {
    /// Load from `TABLE_SEED`, `TABLE_FIRST_SEAT`, `TABLE_AUCTION_END` and
    /// `TABLE_MAX_AUCTION_CALLS`; unset variables keep their defaults.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as `from_env` over an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(seed) = parsed(&lookup, "TABLE_SEED")? {
            config.seed = Some(seed);
        }
        if let Some(seat) = parsed(&lookup, "TABLE_FIRST_SEAT")? {
            config.first_seat = seat;
        }
        if let Some(rule) = parsed(&lookup, "TABLE_AUCTION_END")? {
            config.auction_end = rule;
        }
        if let Some(max) = parsed::<usize, _>(&lookup, "TABLE_MAX_AUCTION_CALLS")? {
            if max < PLAYERS {
                return Err(AppError::config(format!(
                    "TABLE_MAX_AUCTION_CALLS must be at least {PLAYERS}, got {max}"
                )));
            }
            config.max_auction_calls = max;
        }
        Ok(config)
    }

    pub fn seat_name(&self, seat: Seat) -> &str {
        &self.seat_names[seat.index()]
    }
}

fn parsed<T, F>(lookup: &F, name: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name).filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<T>()
        .map(Some)
        .map_err(|e| AppError::config(format!("{name}='{raw}' is invalid: {e}")))
}

impl FromStr for AuctionEndRule {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pass-out" | "passout" => Ok(AuctionEndRule::PassOut),
            "strict" => Ok(AuctionEndRule::Strict),
            other => Err(AppError::config(format!(
                "unknown auction end rule '{other}' (expected pass-out or strict)"
            ))),
        }
    }
}
