pub mod deal_flow;

pub use deal_flow::{DealFlow, DealReport};
