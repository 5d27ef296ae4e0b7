//! # Opportunity cost penalties
//!
//! The penalty of a row is what it costs extra to ship over its second cheapest cell instead of
//! its cheapest one. Only cells in sinks with demand left count; columns are symmetric.
use crate::algorithm::remaining::Remaining;
use crate::data::matrix::Dense;
use crate::data::number::Cost;

/// Penalty of each row.
///
/// # Return value
///
/// One value per row, `None` for rows without supply left.
pub fn row_penalties<C: Cost>(cost: &Dense<C>, remaining: &Remaining) -> Vec<Option<C>> {
    (0..cost.nr_rows())
        .map(|i| {
            remaining.has_supply(i)
                .then(|| penalty(remaining.eligible_columns().map(|j| &cost[(i, j)])))
        })
        .collect()
}

/// Penalty of each column.
///
/// # Return value
///
/// One value per column, `None` for columns without demand left.
pub fn column_penalties<C: Cost>(cost: &Dense<C>, remaining: &Remaining) -> Vec<Option<C>> {
    (0..cost.nr_columns())
        .map(|j| {
            remaining.has_demand(j)
                .then(|| penalty(remaining.eligible_rows().map(|i| &cost[(i, j)])))
        })
        .collect()
}

/// Difference between the second smallest and the smallest value.
///
/// Equal values both count, so two equal minima give a zero penalty. With fewer than two values
/// the penalty is zero as well, which underestimates the urgency of a line with a single option.
pub fn penalty<'a, C: Cost + 'a>(values: impl Iterator<Item = &'a C>) -> C {
    let mut smallest: Option<&C> = None;
    let mut second_smallest: Option<&C> = None;

    for value in values {
        match smallest {
            Some(current) if !(value < current) => {
                if second_smallest.is_none_or(|second| value < second) {
                    second_smallest = Some(value);
                }
            },
            _ => {
                second_smallest = smallest;
                smallest = Some(value);
            },
        }
    }

    match (smallest, second_smallest) {
        (Some(smallest), Some(second_smallest)) => second_smallest.clone() - smallest.clone(),
        _ => C::zero(),
    }
}
