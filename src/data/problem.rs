//! # Transportation problems
//!
//! Sources with a fixed supply, sinks with a fixed demand and a unit cost for each source-sink
//! pair. A `Problem` is validated when it is created and never changes afterwards, such that it
//! can be shared between any number of solver runs.
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::data::error::{DimensionMismatch, Location, ProblemError};
use crate::data::matrix::Dense;
use crate::data::number::Cost;

/// A transportation problem.
///
/// Holds its own copies of the supply, demand and cost data.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem<C> {
    /// Amount available at each source.
    supply: Vec<u64>,
    /// Amount required at each sink.
    demand: Vec<u64>,
    /// Unit cost of shipping from source `i` (row) to sink `j` (column).
    cost: Dense<C>,
}

impl<C: Cost> Problem<C> {
    /// Create a new `Problem` instance.
    ///
    /// # Arguments
    ///
    /// * `supply`: Amount available at each source.
    /// * `demand`: Amount required at each sink.
    /// * `cost`: One row per source, each containing one unit cost per sink.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when the cost matrix isn't `supply.len()` by `demand.len()`, and
    /// `NegativeValue` when any of the values is negative. The shape is checked first.
    pub fn new(supply: Vec<i64>, demand: Vec<i64>, cost: Vec<Vec<C>>) -> Result<Self, ProblemError> {
        if cost.len() != supply.len() {
            return Err(ProblemError::DimensionMismatch(DimensionMismatch::Rows {
                expected: supply.len(),
                found: cost.len(),
            }));
        }
        if let Some((row, values)) = cost.iter().enumerate().find(|(_, row)| row.len() != demand.len()) {
            return Err(ProblemError::DimensionMismatch(DimensionMismatch::Columns {
                row,
                expected: demand.len(),
                found: values.len(),
            }));
        }

        let supply = Self::nonnegative(supply, Location::Supply)?;
        let demand = Self::nonnegative(demand, Location::Demand)?;

        let zero = C::zero();
        for (i, row) in cost.iter().enumerate() {
            // Written as a negation such that values that aren't comparable are rejected too
            if let Some(j) = row.iter().position(|value| !(*value >= zero)) {
                return Err(ProblemError::NegativeValue(Location::Cost(i, j)));
            }
        }

        let nr_sinks = demand.len();
        Ok(Self {
            supply,
            demand,
            cost: Dense::from_rows(cost, nr_sinks),
        })
    }

    fn nonnegative(
        values: Vec<i64>,
        location: impl Fn(usize) -> Location,
    ) -> Result<Vec<u64>, ProblemError> {
        values.into_iter()
            .enumerate()
            .map(|(index, value)| {
                u64::try_from(value).map_err(|_| ProblemError::NegativeValue(location(index)))
            })
            .collect()
    }
}

impl<C> Problem<C> {
    /// Supply per source.
    pub fn supply(&self) -> &[u64] {
        &self.supply
    }

    /// Demand per sink.
    pub fn demand(&self) -> &[u64] {
        &self.demand
    }

    /// Unit cost per source (row) and sink (column).
    pub fn cost(&self) -> &Dense<C> {
        &self.cost
    }

    /// Number of sources, rows of the cost matrix.
    pub fn nr_sources(&self) -> usize {
        self.supply.len()
    }

    /// Number of sinks, columns of the cost matrix.
    pub fn nr_sinks(&self) -> usize {
        self.demand.len()
    }

    /// Sum of the supply of all sources.
    ///
    /// Accumulated in a wider type, such that this can't overflow.
    pub fn total_supply(&self) -> u128 {
        self.supply.iter().map(|&value| u128::from(value)).sum()
    }

    /// Sum of the demand of all sinks.
    pub fn total_demand(&self) -> u128 {
        self.demand.iter().map(|&value| u128::from(value)).sum()
    }

    /// Whether the total supply equals the total demand.
    ///
    /// Only balanced problems can be solved; no dummy sources or sinks are introduced to balance
    /// a problem.
    pub fn is_balanced(&self) -> bool {
        self.total_supply() == self.total_demand()
    }
}

/// Check whether a problem is balanced before running any solver on it.
///
/// See `Problem::is_balanced`.
pub fn check_balance<C>(problem: &Problem<C>) -> bool {
    problem.is_balanced()
}

impl<C: Display> Display for Problem<C> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let width = 6;
        let counter_width = 5;

        // Sink labels
        write!(f, "{0:counter_width$}|", "")?;
        for j in 0..self.nr_sinks() {
            write!(f, "{0:^width$}|", format!("D{}", j))?;
        }
        writeln!(f, "{0:^width$}|", "Sup")?;
        writeln!(f, "{}", separator(counter_width, width, self.nr_sinks() + 1))?;

        // Source label, costs and supply
        for (i, row) in self.cost.rows().enumerate() {
            write!(f, "{0:^counter_width$}|", format!("S{}", i))?;
            for value in row {
                write!(f, "{0:>width$} |", value, width = width - 1)?;
            }
            writeln!(f, "{0:>width$} |", self.supply[i], width = width - 1)?;
        }

        write!(f, "{0:^counter_width$}|", "Dem")?;
        for value in &self.demand {
            write!(f, "{0:>width$} |", value, width = width - 1)?;
        }
        writeln!(f)?;
        write!(f, "{}", separator(counter_width, width, self.nr_sinks()))
    }
}

/// Horizontal line between the header and the body of a table.
pub(crate) fn separator(counter_width: usize, width: usize, nr_cells: usize) -> String {
    format!("{}+{}", "-".repeat(counter_width), format!("{}+", "-".repeat(width)).repeat(nr_cells))
}
