//! # Representation of feasible solutions
//!
//! The result of running one of the construction heuristics: how much is shipped over every
//! source-sink pair, what that costs, and in what order the heuristic made its allocations.
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::data::error::CostError;
use crate::data::matrix::Dense;
use crate::data::number::Cost;
use crate::data::problem::separator;

/// A single allocation made by a heuristic.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Step {
    /// Source index.
    pub row: usize,
    /// Sink index.
    pub column: usize,
    /// Amount shipped from the source to the sink.
    pub quantity: u64,
}

/// Quantities shipped, together with the order in which they were decided on.
///
/// Produced by a heuristic before any costs are computed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Allocation {
    #[allow(missing_docs)]
    pub matrix: Dense<u64>,
    #[allow(missing_docs)]
    pub steps: Vec<Step>,
}

/// A basic feasible solution to a balanced transportation problem.
///
/// Not necessarily optimal; it is meant as a starting point for an improvement method.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<C> {
    allocation: Dense<u64>,
    total_cost: C,
    steps: Vec<Step>,
}

impl<C> Solution<C> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor, the total cost is not verified.
    pub fn new(allocation: Dense<u64>, total_cost: C, steps: Vec<Step>) -> Self {
        Self { allocation, total_cost, steps, }
    }

    /// Quantity shipped from source `i` (row) to sink `j` (column).
    pub fn allocation(&self) -> &Dense<u64> {
        &self.allocation
    }

    /// Sum of quantity times unit cost over all cells.
    pub fn total_cost(&self) -> &C {
        &self.total_cost
    }

    /// Allocations in the order they were made.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of cells with a positive quantity.
    pub fn nr_basic_cells(&self) -> usize {
        self.allocation.nr_nonzero()
    }

    /// Whether this solution has fewer than `n + m - 1` positive cells.
    ///
    /// Degeneracy is reported but never resolved.
    pub fn is_degenerate(&self) -> bool {
        let nr_rows = self.allocation.nr_rows();
        let nr_columns = self.allocation.nr_columns();
        if nr_rows == 0 || nr_columns == 0 {
            return false;
        }

        self.nr_basic_cells() < nr_rows + nr_columns - 1
    }
}

/// Total cost of shipping the given quantities.
///
/// # Arguments
///
/// * `allocation`: Quantities shipped.
/// * `cost`: Unit costs, of the same shape as the allocation.
///
/// # Errors
///
/// When a quantity can't be represented in the cost type, or a product or the running total
/// leaves its range.
pub fn total_cost<C: Cost>(allocation: &Dense<u64>, cost: &Dense<C>) -> Result<C, CostError> {
    debug_assert_eq!(allocation.nr_rows(), cost.nr_rows());
    debug_assert_eq!(allocation.nr_columns(), cost.nr_columns());

    allocation.values()
        .zip(cost.values())
        .filter(|&(&quantity, _)| quantity > 0)
        .try_fold(C::zero(), |total, (&quantity, unit_cost)| {
            let quantity = C::from_u64(quantity)
                .ok_or(CostError::QuantityNotRepresentable(quantity))?;
            quantity.checked_product(unit_cost)
                .and_then(|product| total.checked_sum(&product))
                .ok_or(CostError::Overflow)
        })
}

impl<C: Display> Display for Solution<C> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let width = 6;
        let counter_width = 5;

        writeln!(f, "Solution matrix:")?;
        write!(f, "{0:counter_width$}|", "")?;
        for j in 0..self.allocation.nr_columns() {
            write!(f, "{0:^width$}|", format!("D{}", j))?;
        }
        writeln!(f)?;
        writeln!(f, "{}", separator(counter_width, width, self.allocation.nr_columns()))?;

        for (i, row) in self.allocation.rows().enumerate() {
            write!(f, "{0:^counter_width$}|", format!("S{}", i))?;
            for quantity in row {
                write!(f, "{0:>width$} |", quantity, width = width - 1)?;
            }
            writeln!(f)?;
        }

        write!(f, "Total cost = {}", self.total_cost)
    }
}
