//! Scenario Totals
//!
//! A scenario total is the sum of every operation in the table, with the
//! single counterattack cost replaced by `base × multiplier`:
//!
//! ```text
//! total(costs, size) = sum(costs with counterattack = base × size.multiplier)
//! ```
//!
//! [`estimate`] pays the shared operations once per player first, then
//! computes every scenario from that one table. The loaded table is never
//! modified, so estimating twice gives identical reports.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::gas::{CalculatorError, GasCost};
use super::scenario::MatchSize;
use super::table::{CostTable, COUNTERATTACK, SHARED_OPERATIONS};

/// Estimate for one match size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioEstimate {
    pub size: MatchSize,
    pub label: String,
    pub misses: u32,
    pub counterattack_multiplier: i64,
    /// Gas for all counterattacks in the match (`base × multiplier`)
    pub counterattack_cost: GasCost,
    pub total: GasCost,
}

/// Estimates for every match size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasReport {
    /// Per-operation costs after shared operations were paid by both players
    pub operations: BTreeMap<String, GasCost>,
    /// Shared operations for both players combined
    pub shared_operations_cost: GasCost,
    pub scenarios: Vec<ScenarioEstimate>,
}

impl GasReport {
    /// Total for `size`, if it was estimated
    pub fn total(&self, size: MatchSize) -> Option<GasCost> {
        self.scenarios
            .iter()
            .find(|s| s.size == size)
            .map(|s| s.total)
    }
}

impl fmt::Display for GasReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for scenario in &self.scenarios {
            writeln!(f, "{}: {}", scenario.label, scenario.total)?;
        }
        Ok(())
    }
}

/// Cost of all counterattacks played in a match of `size`
pub fn counterattack_cost(costs: &CostTable, size: MatchSize) -> Result<GasCost, CalculatorError> {
    costs
        .counterattack_base()
        .checked_scale(size.counterattack_multiplier(), COUNTERATTACK)
}

/// Sum of `costs` with the counterattack entry scaled for `size`
///
/// Shared operations are summed as they appear in `costs`; see
/// [`estimate`] for the per-player doubling.
pub fn scenario_total(costs: &CostTable, size: MatchSize) -> Result<GasCost, CalculatorError> {
    let scaled = counterattack_cost(costs, size)?;
    costs.with_cost(COUNTERATTACK, scaled).sum()
}

/// Estimate total gas for every match size
pub fn estimate(costs: &CostTable) -> Result<GasReport, CalculatorError> {
    let per_match = costs.with_shared_operations_doubled()?;

    let shared_operations_cost = SHARED_OPERATIONS
        .iter()
        .filter_map(|operation| per_match.get(operation))
        .try_fold(GasCost::ZERO, |acc, cost| acc.checked_add(cost, "shared operations"))?;

    let mut scenarios = Vec::with_capacity(MatchSize::ALL.len());
    for size in MatchSize::ALL {
        let counterattack_cost = counterattack_cost(&per_match, size)?;
        let total = scenario_total(&per_match, size)?;
        debug!(
            size = %size,
            multiplier = size.counterattack_multiplier(),
            counterattack_cost = %counterattack_cost,
            total = %total,
            "Estimated scenario"
        );
        scenarios.push(ScenarioEstimate {
            size,
            label: size.label(),
            misses: size.misses(),
            counterattack_multiplier: size.counterattack_multiplier(),
            counterattack_cost,
            total,
        });
    }

    Ok(GasReport {
        operations: per_match
            .iter()
            .map(|(name, cost)| (name.to_string(), cost))
            .collect(),
        shared_operations_cost,
        scenarios,
    })
}
