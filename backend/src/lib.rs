//! Match Gas Core - Rust Engine
//!
//! Estimates the gas a battleship match costs on chain, from the
//! per-operation figures recorded by the contract gas tests.
//!
//! # Architecture
//!
//! - **costs**: Cost table loading, match size scenarios, scenario totals
//!
//! # Critical Invariants
//!
//! 1. A loaded cost table always holds `counterattack`, `proposeBet`,
//!    `depositFund` and `commitBoard`
//! 2. Loaded tables are immutable; scenarios derive new tables
//! 3. Shared operations are doubled exactly once, before any scenario sum
//! 4. Integer gas arithmetic is checked, never wrapping
//!
//! # Example
//! ```
//! use match_gas_core_rs::{estimate, CostTable, GasCost, MatchSize};
//!
//! let costs = CostTable::from_json_str(
//!     r#"{"counterattack": 100, "proposeBet": 5, "depositFund": 5,
//!         "commitBoard": 5, "other": 1}"#,
//! ).unwrap();
//! let report = estimate(&costs).unwrap();
//! assert_eq!(report.total(MatchSize::Normal), Some(GasCost::Integer(6231)));
//! assert_eq!(report.total(MatchSize::Small), Some(GasCost::Integer(1431)));
//! ```

// Module declarations
pub mod costs;

// Re-exports for convenience
pub use costs::{
    estimate, scenario_total, CalculatorError, CostTable, CostTableError, GasCost, GasReport,
    MatchSize, ScenarioEstimate,
};

/// Default cost table path, relative to the working directory
pub const DEFAULT_COST_TABLE_PATH: &str = "gas_analysis.json";
