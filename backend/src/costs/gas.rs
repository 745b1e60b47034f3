//! Gas Amounts
//!
//! A single gas figure as recorded by the contract test harness. Receipts
//! report integer gas, but the cost table accepts any JSON number, so a
//! figure is either an exact integer or a float.
//!
//! Integer arithmetic is checked. Mixing in a float promotes the result to
//! a float, and a non-finite float result is an error.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while combining gas figures
#[derive(Debug, Error, PartialEq)]
pub enum CalculatorError {
    #[error("Integer overflow while computing {operation}")]
    Overflow { operation: String },

    #[error("Non-finite result while computing {operation}")]
    NonFinite { operation: String },
}

/// Gas consumed by one operation (or a sum of operations)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GasCost {
    /// Exact gas units, as reported by transaction receipts
    Integer(i64),

    /// Fractional figure (averaged or hand-edited inputs)
    Float(f64),
}

impl GasCost {
    pub const ZERO: GasCost = GasCost::Integer(0);

    /// Value as f64 (lossy for integers above 2^53)
    pub fn as_f64(self) -> f64 {
        match self {
            GasCost::Integer(v) => v as f64,
            GasCost::Float(v) => v,
        }
    }

    /// Returns the integer value, or `None` for float figures
    pub fn as_integer(self) -> Option<i64> {
        match self {
            GasCost::Integer(v) => Some(v),
            GasCost::Float(_) => None,
        }
    }

    /// Multiply by an integer factor
    ///
    /// `operation` names the computation in the error if the result
    /// overflows or is not finite.
    pub fn checked_scale(self, factor: i64, operation: &str) -> Result<GasCost, CalculatorError> {
        match self {
            GasCost::Integer(v) => v
                .checked_mul(factor)
                .map(GasCost::Integer)
                .ok_or_else(|| CalculatorError::Overflow {
                    operation: operation.to_string(),
                }),
            GasCost::Float(v) => finite(v * factor as f64, operation),
        }
    }

    /// Add two figures, promoting to float if either side is a float
    pub fn checked_add(self, other: GasCost, operation: &str) -> Result<GasCost, CalculatorError> {
        match (self, other) {
            (GasCost::Integer(a), GasCost::Integer(b)) => a
                .checked_add(b)
                .map(GasCost::Integer)
                .ok_or_else(|| CalculatorError::Overflow {
                    operation: operation.to_string(),
                }),
            (a, b) => finite(a.as_f64() + b.as_f64(), operation),
        }
    }
}

fn finite(value: f64, operation: &str) -> Result<GasCost, CalculatorError> {
    if value.is_finite() {
        Ok(GasCost::Float(value))
    } else {
        Err(CalculatorError::NonFinite {
            operation: operation.to_string(),
        })
    }
}

impl fmt::Display for GasCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GasCost::Integer(v) => write!(f, "{}", v),
            GasCost::Float(v) => f.write_str(&format_float(*v)),
        }
    }
}

/// Shortest round-trip form, as the gas tooling prints floats:
/// `6231.0`, `0.0001`, `1e+16`, `1.5e-05`.
///
/// Positional notation for decimal exponents in `-4..16`, otherwise a
/// signed exponent of at least two digits.
fn format_float(value: f64) -> String {
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => return scientific,
    };
    if (-4..16).contains(&exponent) {
        // Debug keeps the trailing ".0" on whole floats
        format!("{:?}", value)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}
