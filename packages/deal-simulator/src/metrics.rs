//! Per-deal metrics and running totals for a simulation batch.

use serde::Serialize;
use table::domain::{
    Bid, Card, Contract, ContractOutcome, Seat, Strain, TrickRecord, PLAYERS, STRAIN_ORDER,
};
use table::DealReport;

use crate::types::MetricsLevel;

/// One JSONL record.
#[derive(Debug, Clone, Serialize)]
pub struct DealMetrics {
    pub deal_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub ai_types: [String; PLAYERS],
    pub first_seat: Seat,
    pub calls: usize,
    pub recovered_bids: u32,
    pub contract: Option<Contract>,
    pub tricks_won: [u8; PLAYERS],
    /// Tricks taken by declarer and dummy together.
    pub declarer_tricks: Option<u8>,
    pub outcome: Option<ContractOutcome>,
    /// Points scored by North/South and East/West on this deal.
    pub side_points: [u32; 2],
    pub duration_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<DealDetail>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DealDetail {
    pub dealt_hands: [Vec<Card>; PLAYERS],
    pub bids: Vec<Bid>,
    pub tricks: Vec<TrickRecord>,
}

/// 0 for North/South, 1 for East/West.
pub fn side_of(seat: Seat) -> usize {
    seat.index() % 2
}

/// A made contract scores for the declaring side; a penalty goes to the defenders.
pub fn side_points(contract: Option<&Contract>, outcome: Option<&ContractOutcome>) -> [u32; 2] {
    let mut points = [0; 2];
    let (Some(contract), Some(outcome)) = (contract, outcome) else {
        return points;
    };
    let declaring = side_of(contract.declarer);
    match *outcome {
        ContractOutcome::Made { score, .. } => points[declaring] += score,
        ContractOutcome::Failed { penalty, .. } => points[1 - declaring] += penalty,
    }
    points
}

pub fn build_deal_metrics(
    deal_id: u32,
    seed: u64,
    ai_types: [String; PLAYERS],
    report: &DealReport,
    duration_ms: f64,
    level: MetricsLevel,
) -> DealMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let result = &report.result;
    let detail = match level {
        MetricsLevel::Basic => None,
        MetricsLevel::Detailed => Some(DealDetail {
            dealt_hands: report.dealt_hands.clone(),
            bids: report.bids.clone(),
            tricks: result.tricks.clone(),
        }),
    };

    DealMetrics {
        deal_id,
        seed,
        timestamp,
        ai_types,
        first_seat: report.first_seat,
        calls: report.bids.len(),
        recovered_bids: report.recovered_bids,
        contract: result.contract,
        tricks_won: result.tricks_won,
        declarer_tricks: result.contract.map(|c| {
            result.tricks_for(c.declarer) + result.tricks_for(c.dummy())
        }),
        outcome: result.outcome,
        side_points: side_points(result.contract.as_ref(), result.outcome.as_ref()),
        duration_ms,
        detail,
    }
}

/// One row of the CSV summary.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub deal_id: u32,
    pub seed: u64,
    pub contract: String,
    pub declarer: String,
    pub declarer_tricks: Option<u8>,
    pub verdict: &'static str,
    pub score: i32,
    pub ns_points: u32,
    pub ew_points: u32,
    pub north_ai: String,
    pub east_ai: String,
    pub south_ai: String,
    pub west_ai: String,
}

impl From<&DealMetrics> for CsvSummaryRow {
    fn from(m: &DealMetrics) -> Self {
        let (contract, declarer) = match m.contract {
            Some(c) => (
                format!("{}{}", c.level, c.strain.to_str()),
                c.declarer.name().to_string(),
            ),
            None => (String::new(), String::new()),
        };
        let verdict = match m.outcome {
            Some(ContractOutcome::Made { .. }) => "MADE",
            Some(ContractOutcome::Failed { .. }) => "FAILED",
            None => "PASSED_OUT",
        };
        let [north_ai, east_ai, south_ai, west_ai] = m.ai_types.clone();
        CsvSummaryRow {
            deal_id: m.deal_id,
            seed: m.seed,
            contract,
            declarer,
            declarer_tricks: m.declarer_tricks,
            verdict,
            score: m.outcome.map_or(0, |o| o.signed_score()),
            ns_points: m.side_points[0],
            ew_points: m.side_points[1],
            north_ai,
            east_ai,
            south_ai,
            west_ai,
        }
    }
}

/// Running totals printed at the end of a batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub deals: u32,
    pub passed_out: u32,
    pub made: u32,
    pub failed: u32,
    pub recovered_bids: u32,
    pub total_calls: u64,
    /// North/South, East/West.
    pub side_points: [u64; 2],
    /// Contracts indexed by `Strain::ordinal()`.
    pub by_strain: [u32; 5],
}

impl BatchSummary {
    pub fn record(&mut self, m: &DealMetrics) {
        self.deals += 1;
        self.recovered_bids += m.recovered_bids;
        self.total_calls += m.calls as u64;
        for (total, points) in self.side_points.iter_mut().zip(m.side_points) {
            *total += u64::from(points);
        }
        match (m.contract, m.outcome) {
            (Some(contract), Some(outcome)) => {
                self.by_strain[usize::from(contract.strain.ordinal())] += 1;
                if outcome.is_made() {
                    self.made += 1;
                } else {
                    self.failed += 1;
                }
            }
            _ => self.passed_out += 1,
        }
    }

    pub fn contracts(&self) -> u32 {
        self.made + self.failed
    }

    /// Percentage of played contracts that made; `None` when nothing was played.
    pub fn made_pct(&self) -> Option<f64> {
        let played = self.contracts();
        (played > 0).then(|| f64::from(self.made) / f64::from(played) * 100.0)
    }

    pub fn avg_side_points(&self) -> [f64; 2] {
        if self.deals == 0 {
            return [0.0; 2];
        }
        self.side_points.map(|p| p as f64 / f64::from(self.deals))
    }

    pub fn strain_counts(&self) -> impl Iterator<Item = (Strain, u32)> + '_ {
        STRAIN_ORDER
            .into_iter()
            .map(|s| (s, self.by_strain[usize::from(s.ordinal())]))
    }
}
