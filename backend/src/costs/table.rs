//! Cost Table
//!
//! Per-operation gas figures loaded from the JSON file written by the
//! contract gas test harness (`gas_analysis.json`). The file is a flat
//! object mapping operation names to numbers:
//!
//! ```json
//! { "createGame": 1510262, "proposeBet": 47133, "counterattack": 61902, ... }
//! ```
//!
//! A table is validated once when built and never mutated afterwards.
//! Scenario variants are derived as new tables.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::value::RawValue;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::gas::{CalculatorError, GasCost};
use super::scenario::PLAYERS_PER_MATCH;

/// Operation whose cost scales with match size
pub const COUNTERATTACK: &str = "counterattack";

pub const PROPOSE_BET: &str = "proposeBet";
pub const DEPOSIT_FUND: &str = "depositFund";
pub const COMMIT_BOARD: &str = "commitBoard";

/// Operations each player calls once per match
pub const SHARED_OPERATIONS: [&str; 3] = [PROPOSE_BET, DEPOSIT_FUND, COMMIT_BOARD];

/// Keys every cost table must contain
pub const REQUIRED_KEYS: [&str; 4] = [COUNTERATTACK, PROPOSE_BET, DEPOSIT_FUND, COMMIT_BOARD];

/// Errors that can occur while loading a cost table
#[derive(Debug, Error)]
pub enum CostTableError {
    #[error("Failed to read cost table {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed cost table: {reason}")]
    Malformed { reason: String },

    #[error("Cost table is missing required key \"{key}\"")]
    MissingKey { key: String },

    #[error("Cost for \"{key}\" must be a number, found {found}")]
    TypeMismatch { key: String, found: String },

    #[error("Cost for \"{key}\" does not fit in a 64-bit gas amount: {literal}")]
    NumberOutOfRange { key: String, literal: String },
}

/// Mapping from operation name to gas cost
///
/// Always contains every key in [`REQUIRED_KEYS`].
#[derive(Debug, Clone, PartialEq)]
pub struct CostTable {
    costs: BTreeMap<String, GasCost>,
}

impl CostTable {
    /// Read and validate a cost table from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CostTableError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| CostTableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json_str(&contents)?;
        debug!(
            path = %path.display(),
            entries = table.len(),
            "Loaded cost table"
        );
        Ok(table)
    }

    /// Parse and validate a cost table from a JSON string
    ///
    /// Integer literals must fit in `i64`; they are never widened to a
    /// float. Literals with a fraction or exponent are read as floats.
    pub fn from_json_str(json: &str) -> Result<Self, CostTableError> {
        let document: &RawValue = serde_json::from_str(json).map_err(malformed)?;
        let text = document.get();
        if !text.trim_start().starts_with('{') {
            let value: Value = serde_json::from_str(text).map_err(malformed)?;
            return Err(CostTableError::Malformed {
                reason: format!("expected a JSON object, found {}", json_type_name(&value)),
            });
        }

        let entries: BTreeMap<String, &RawValue> =
            serde_json::from_str(text).map_err(malformed)?;
        let mut costs = BTreeMap::new();
        for (key, raw) in entries {
            let cost = literal_to_cost(&key, raw.get())?;
            costs.insert(key, cost);
        }
        Self::validated(costs)
    }

    /// Build a table from `(name, cost)` pairs; later duplicates win
    pub fn from_entries<I, K>(entries: I) -> Result<Self, CostTableError>
    where
        I: IntoIterator<Item = (K, GasCost)>,
        K: Into<String>,
    {
        let costs = entries
            .into_iter()
            .map(|(key, cost)| (key.into(), cost))
            .collect();
        Self::validated(costs)
    }

    fn validated(costs: BTreeMap<String, GasCost>) -> Result<Self, CostTableError> {
        if let Some(key) = REQUIRED_KEYS.iter().find(|key| !costs.contains_key(**key)) {
            return Err(CostTableError::MissingKey {
                key: key.to_string(),
            });
        }
        Ok(Self { costs })
    }

    pub fn get(&self, operation: &str) -> Option<GasCost> {
        self.costs.get(operation).copied()
    }

    /// Loaded cost of a single counterattack
    pub fn counterattack_base(&self) -> GasCost {
        self.costs[COUNTERATTACK]
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, GasCost)> {
        self.costs.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Copy of this table with one entry set to `cost`
    pub fn with_cost(&self, operation: &str, cost: GasCost) -> CostTable {
        let mut costs = self.costs.clone();
        costs.insert(operation.to_string(), cost);
        CostTable { costs }
    }

    /// Copy of this table with every shared operation paid once per player
    ///
    /// The harness records one player's call; both players make it.
    pub fn with_shared_operations_doubled(&self) -> Result<CostTable, CalculatorError> {
        let mut costs = self.costs.clone();
        for operation in SHARED_OPERATIONS {
            let cost = costs[operation].checked_scale(PLAYERS_PER_MATCH, operation)?;
            costs.insert(operation.to_string(), cost);
        }
        Ok(CostTable { costs })
    }

    /// Sum of every entry
    pub fn sum(&self) -> Result<GasCost, CalculatorError> {
        self.costs
            .values()
            .try_fold(GasCost::ZERO, |acc, cost| acc.checked_add(*cost, "total"))
    }
}

fn malformed(err: serde_json::Error) -> CostTableError {
    CostTableError::Malformed {
        reason: err.to_string(),
    }
}

fn literal_to_cost(key: &str, literal: &str) -> Result<GasCost, CostTableError> {
    let out_of_range = || CostTableError::NumberOutOfRange {
        key: key.to_string(),
        literal: literal.to_string(),
    };

    if !literal.starts_with(|c: char| c == '-' || c.is_ascii_digit()) {
        let value: Value = serde_json::from_str(literal).map_err(malformed)?;
        return Err(CostTableError::TypeMismatch {
            key: key.to_string(),
            found: json_type_name(&value).to_string(),
        });
    }
    if literal.contains(['.', 'e', 'E']) {
        let value: f64 = serde_json::from_str(literal).map_err(|_| out_of_range())?;
        Ok(GasCost::Float(value))
    } else {
        literal
            .parse::<i64>()
            .map(GasCost::Integer)
            .map_err(|_| out_of_range())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
