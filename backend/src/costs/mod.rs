//! Gas Cost Types and Scenario Estimation
//!
//! This module provides:
//! - Gas amounts with checked arithmetic (`gas`)
//! - The validated per-operation cost table (`table`)
//! - Match size scenarios (`scenario`)
//! - Scenario totals and the combined report (`calculator`)

pub mod calculator;
pub mod gas;
pub mod scenario;
pub mod table;

// Re-exports
pub use calculator::{counterattack_cost, estimate, scenario_total, GasReport, ScenarioEstimate};
pub use gas::{CalculatorError, GasCost};
pub use scenario::{MatchSize, PLAYERS_PER_MATCH};
pub use table::{
    CostTable, CostTableError, COMMIT_BOARD, COUNTERATTACK, DEPOSIT_FUND, PROPOSE_BET,
    REQUIRED_KEYS, SHARED_OPERATIONS,
};
