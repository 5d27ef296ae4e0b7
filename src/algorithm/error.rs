//! # Errors while solving
//!
//! Solving is deterministic, so none of these are worth retrying.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

use crate::algorithm::Method;
use crate::data::error::CostError;

/// A `SolveError` is returned instead of a solution; no partial allocation is ever returned.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SolveError {
    /// The total supply differs from the total demand.
    ///
    /// Detected before any allocation is made. Problems are not balanced automatically.
    Unbalanced {
        #[allow(missing_docs)]
        total_supply: u128,
        #[allow(missing_docs)]
        total_demand: u128,
    },
    /// A heuristic couldn't find a cell to allocate to while supply and demand remained.
    ///
    /// This can't happen for a balanced problem and indicates a bug.
    InternalInvariantViolation {
        /// Heuristic that was running.
        method: Method,
        /// What was looked for.
        description: &'static str,
    },
    /// A quantity shipped can't be represented in the number type of the costs.
    QuantityNotRepresentable(u64),
    /// An intermediate value or the total cost doesn't fit in the number type of the costs.
    CostOverflow,
}

impl Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::Unbalanced { total_supply, total_demand } => write!(
                f, "Unbalanced: total supply {} differs from total demand {}", total_supply, total_demand,
            ),
            SolveError::InternalInvariantViolation { method, description } => write!(
                f, "InternalInvariantViolation: {} found no {} while supply and demand remain",
                method, description,
            ),
            SolveError::QuantityNotRepresentable(quantity) => write!(
                f, "QuantityNotRepresentable: {} doesn't fit in the cost type", quantity,
            ),
            SolveError::CostOverflow => write!(f, "CostOverflow: a cost doesn't fit in the cost type"),
        }
    }
}

impl Error for SolveError {}

impl From<CostError> for SolveError {
    fn from(error: CostError) -> Self {
        match error {
            CostError::QuantityNotRepresentable(quantity) => SolveError::QuantityNotRepresentable(quantity),
            CostError::Overflow => SolveError::CostOverflow,
        }
    }
}
