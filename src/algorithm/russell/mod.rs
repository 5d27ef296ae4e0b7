//! # Russell's Approximation Method
//!
//! Every open cell gets a value `u[i] + v[j] - cost[i][j]`, where `u[i]` and `v[j]` are the
//! largest costs in its row and column. The cell with the largest value is the most attractive
//! one and gets as much as possible.
use itertools::iproduct;
use log::trace;

use crate::algorithm::error::SolveError;
use crate::algorithm::{InitialSolution, Method};
use crate::algorithm::remaining::Remaining;
use crate::algorithm::utilities::first_maximum;
use crate::data::matrix::Dense;
use crate::data::number::Cost;
use crate::data::problem::Problem;
use crate::data::solution::Allocation;

pub mod extreme;

/// Allocate by Russell value.
///
/// Ties are broken by scanning rows first and then columns, in index order.
pub struct Russell;

impl InitialSolution for Russell {
    const METHOD: Method = Method::Russell;

    fn allocate<C: Cost>(problem: &Problem<C>) -> Result<Allocation, SolveError> {
        let cost = problem.cost();
        let mut remaining = Remaining::new(problem);

        while !remaining.is_exhausted() {
            let (i, j) = select_cell(cost, &remaining)?;
            remaining.allocate(i, j);
        }

        Ok(remaining.into_allocation())
    }
}

/// Open cell with the largest Russell value, the first one on ties.
fn select_cell<C: Cost>(cost: &Dense<C>, remaining: &Remaining) -> Result<(usize, usize), SolveError> {
    let u = extreme::row_maxima(cost, remaining);
    let v = extreme::column_maxima(cost, remaining);

    let values = iproduct!(remaining.eligible_rows(), remaining.eligible_columns())
        .filter_map(|(i, j)| {
            let value = russell_value(u[i].as_ref()?, v[j].as_ref()?, &cost[(i, j)]);
            Some(value.map(|value| ((i, j), value)))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let best = first_maximum(values);
    trace!("largest russell value {:?}", best);

    best.map(|(cell, _)| cell)
        .ok_or(SolveError::InternalInvariantViolation {
            method: Method::Russell,
            description: "cell with supply and demand left",
        })
}

/// Attractiveness of a cell, larger is better.
///
/// Computed as `u - cost + v`; the difference can't be negative because `u` is the largest cost
/// in the row.
///
/// # Arguments
///
/// * `u`: Largest cost in the row of the cell.
/// * `v`: Largest cost in the column of the cell.
/// * `cost`: Unit cost of the cell.
///
/// # Errors
///
/// `CostOverflow` when the value doesn't fit in the cost type.
pub fn russell_value<C: Cost>(u: &C, v: &C, cost: &C) -> Result<C, SolveError> {
    debug_assert!(u >= cost);

    (u.clone() - cost.clone()).checked_sum(v).ok_or(SolveError::CostOverflow)
}
