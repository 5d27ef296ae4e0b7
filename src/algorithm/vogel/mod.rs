//! # Vogel's Approximation Method
//!
//! Repeatedly find the row or column where not using the cheapest cell would hurt most, and ship
//! as much as possible over that cheapest cell.
use log::trace;

use crate::algorithm::error::SolveError;
use crate::algorithm::{InitialSolution, Method};
use crate::algorithm::remaining::Remaining;
use crate::algorithm::utilities::{first_maximum, first_minimum};
use crate::data::matrix::Dense;
use crate::data::number::Cost;
use crate::data::problem::Problem;
use crate::data::solution::Allocation;

pub mod penalty;

/// Allocate by opportunity cost.
///
/// Penalties are recomputed in full in every iteration. When the largest row penalty equals the
/// largest column penalty, the row is chosen.
pub struct Vogel;

impl InitialSolution for Vogel {
    const METHOD: Method = Method::Vogel;

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

/// Cell to allocate to next.
///
/// The line with the largest penalty is selected, the first one on ties and a row over a column.
/// Within that line, the first cheapest cell that is still open.
fn select_cell<C: Cost>(cost: &Dense<C>, remaining: &Remaining) -> Result<(usize, usize), SolveError> {
    let row = first_maximum(open_lines(penalty::row_penalties(cost, remaining)));
    let column = first_maximum(open_lines(penalty::column_penalties(cost, remaining)));
    trace!("largest row penalty {:?}, largest column penalty {:?}", row, column);

    match (row, column) {
        (Some((i, row_penalty)), Some((_, column_penalty))) if row_penalty >= column_penalty => {
            Ok((i, cheapest_column(cost, remaining, i)?))
        },
        (Some((i, _)), None) => Ok((i, cheapest_column(cost, remaining, i)?)),
        (_, Some((j, _))) => Ok((cheapest_row(cost, remaining, j)?, j)),
        (None, None) => Err(violation("row or column with a penalty")),
    }
}

/// Keep only the penalties of lines that are still open, with their index.
fn open_lines<C>(penalties: Vec<Option<C>>) -> impl Iterator<Item = (usize, C)> {
    penalties.into_iter()
        .enumerate()
        .filter_map(|(index, penalty)| penalty.map(|penalty| (index, penalty)))
}

fn cheapest_column<C: Cost>(cost: &Dense<C>, remaining: &Remaining, i: usize) -> Result<usize, SolveError> {
    first_minimum(remaining.eligible_columns().map(|j| (j, &cost[(i, j)])))
        .map(|(j, _)| j)
        .ok_or_else(|| violation("sink with demand left"))
}

fn cheapest_row<C: Cost>(cost: &Dense<C>, remaining: &Remaining, j: usize) -> Result<usize, SolveError> {
    first_minimum(remaining.eligible_rows().map(|i| (i, &cost[(i, j)])))
        .map(|(i, _)| i)
        .ok_or_else(|| violation("source with supply left"))
}

fn violation(description: &'static str) -> SolveError {
    SolveError::InternalInvariantViolation { method: Method::Vogel, description }
}

#[cfg(test)]
mod test {
    use crate::algorithm::{InitialSolution, Method};
    use crate::algorithm::error::SolveError;
    use crate::algorithm::remaining::Remaining;
    use crate::algorithm::vogel::{Vogel, select_cell};
    use crate::data::matrix::Dense;
    use crate::data::problem::Problem;
    use crate::data::solution::Step;

    #[test]
    fn textbook() {
        let problem = Problem::new(
            vec![100, 200, 300],
            vec![150, 250, 200],
            vec![vec![4, 3, 8], vec![2, 7, 3], vec![5, 6, 2]],
        ).unwrap();
        let allocation = Vogel::allocate(&problem).unwrap();

        assert_eq!(allocation.matrix, Dense::from_rows(vec![
            vec![0, 100, 0],
            vec![150, 50, 0],
            vec![0, 100, 200],
        ], 3));
        // Row 2 has the largest penalty (3), tied with column 1; the row wins
        assert_eq!(allocation.steps[0], Step { row: 2, column: 2, quantity: 200 });
    }

    #[test]
    fn column_selected_when_strictly_larger() {
        // Row penalties are 1 and 1, column penalties 8 and 8
        let problem = Problem::new(
            vec![10, 10],
            vec![10, 10],
            vec![vec![1, 2], vec![9, 10]],
        ).unwrap();
        let allocation = Vogel::allocate(&problem).unwrap();

        assert_eq!(allocation.steps[0], Step { row: 0, column: 0, quantity: 10 });
        assert_eq!(allocation.matrix, Dense::from_rows(vec![vec![10, 0], vec![0, 10]], 2));
    }

    #[test]
    fn cheapest_cell_first_occurrence() {
        // All penalties are zero, so row 0 is selected and its first cheapest cell is used
        let problem = Problem::new(
            vec![5, 5],
            vec![5, 5],
            vec![vec![1, 1], vec![1, 1]],
        ).unwrap();
        let allocation = Vogel::allocate(&problem).unwrap();

        assert_eq!(allocation.steps, vec![
            Step { row: 0, column: 0, quantity: 5 },
            Step { row: 1, column: 1, quantity: 5 },
        ]);
    }

    #[test]
    fn nothing_left_to_allocate() {
        let problem = Problem::new(vec![0], vec![0], vec![vec![1]]).unwrap();
        let remaining = Remaining::new(&problem);
        assert!(remaining.is_exhausted());

        assert!(matches!(
            select_cell(problem.cost(), &remaining),
            Err(SolveError::InternalInvariantViolation { method: Method::Vogel, .. }),
        ));
    }
}
