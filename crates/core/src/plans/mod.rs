//! Plans module - investment plan tier tables and the return calculator.

mod calculator;
mod plan_model;
mod plan_tables;


// Re-export the public interface
pub use calculator::{compute, compute_from_input, parse_amount_tolerant};
pub use plan_model::{Calculation, Plan, Tier};
pub use plan_tables::{find_plan, PLANS};
