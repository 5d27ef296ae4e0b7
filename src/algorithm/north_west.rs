//! # North-West Corner rule
//!
//! Starting at the top left cell, ship as much as possible and move right or down depending on
//! which of the two got exhausted. Costs are ignored entirely.
use crate::algorithm::error::SolveError;
use crate::algorithm::{InitialSolution, Method};
use crate::algorithm::remaining::Remaining;
use crate::data::number::Cost;
use crate::data::problem::Problem;
use crate::data::solution::Allocation;

/// Walk from the north west corner to the south east corner of the allocation matrix.
///
/// When the supply of a source and the demand of a sink run out in the same step, the cursor
/// moves diagonally and the solution is degenerate. That is left as is.
pub struct NorthWestCorner;

impl InitialSolution for NorthWestCorner {
    const METHOD: Method = Method::NorthWestCorner;

    fn allocate<C: Cost>(problem: &Problem<C>) -> Result<Allocation, SolveError> {
        let mut remaining = Remaining::new(problem);

        let (mut i, mut j) = (0, 0);
        while i < problem.nr_sources() && j < problem.nr_sinks() {
            remaining.allocate(i, j);

            if !remaining.has_supply(i) {
                i += 1;
            }
            if !remaining.has_demand(j) {
                j += 1;
            }
        }

        Ok(remaining.into_allocation())
    }
}
