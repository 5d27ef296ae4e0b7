//! # Extreme costs
//!
//! Largest unit cost per row and per column. Only lines that are still open get a value, but
//! the maximum itself is taken over the complete line.
use crate::algorithm::remaining::Remaining;
use crate::algorithm::utilities::first_maximum;
use crate::data::matrix::Dense;
use crate::data::number::Cost;

/// Largest cost in each row, `None` for rows without supply left.
pub fn row_maxima<C: Cost>(cost: &Dense<C>, remaining: &Remaining) -> Vec<Option<C>> {
    (0..cost.nr_rows())
        .map(|i| if remaining.has_supply(i) { maximum(cost.row(i).iter()) } else { None })
        .collect()
}

/// Largest cost in each column, `None` for columns without demand left.
pub fn column_maxima<C: Cost>(cost: &Dense<C>, remaining: &Remaining) -> Vec<Option<C>> {
    (0..cost.nr_columns())
        .map(|j| if remaining.has_demand(j) { maximum(cost.column(j)) } else { None })
        .collect()
}

fn maximum<'a, C: Cost + 'a>(values: impl Iterator<Item = &'a C>) -> Option<C> {
    first_maximum(values.map(|value| ((), value))).map(|((), value)| value.clone())
}

#[cfg(test)]
mod test {
    use crate::algorithm::remaining::Remaining;
    use crate::algorithm::russell::extreme::{column_maxima, row_maxima};
    use crate::data::problem::Problem;

    #[test]
    fn whole_line_counts() {
        let problem = Problem::new(
            vec![100, 200, 300],
            vec![150, 250, 200],
            vec![vec![4, 3, 8], vec![2, 7, 3], vec![5, 6, 2]],
        ).unwrap();
        let mut remaining = Remaining::new(&problem);

        assert_eq!(row_maxima(problem.cost(), &remaining), vec![Some(8), Some(7), Some(6)]);
        assert_eq!(column_maxima(problem.cost(), &remaining), vec![Some(5), Some(7), Some(8)]);

        // Closing the third sink doesn't change the maximum of the first row
        remaining.allocate(2, 2);
        assert_eq!(remaining.demand(2), 0);
        assert_eq!(row_maxima(problem.cost(), &remaining), vec![Some(8), Some(7), Some(6)]);
        assert_eq!(column_maxima(problem.cost(), &remaining), vec![Some(5), Some(7), None]);
    }
}
