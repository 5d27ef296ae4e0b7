//! # Remaining supply and demand
//!
//! Working state of a single heuristic run. Created from a problem, consumed into an allocation;
//! never shared between runs.
use log::debug;

use crate::data::matrix::Dense;
use crate::data::problem::Problem;
use crate::data::solution::{Allocation, Step};

/// Supply and demand that have not been allocated yet, together with the allocations so far.
///
/// Remaining values never go below zero and never increase.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Remaining {
    supply: Vec<u64>,
    demand: Vec<u64>,
    allocation: Dense<u64>,
    steps: Vec<Step>,
}

impl Remaining {
    /// Start with nothing allocated.
    pub fn new<C>(problem: &Problem<C>) -> Self {
        Self {
            supply: problem.supply().to_vec(),
            demand: problem.demand().to_vec(),
            allocation: Dense::constant(0, problem.nr_sources(), problem.nr_sinks()),
            steps: Vec::new(),
        }
    }

    /// Supply left at source `i`.
    pub fn supply(&self, i: usize) -> u64 {
        self.supply[i]
    }

    /// Demand left at sink `j`.
    pub fn demand(&self, j: usize) -> u64 {
        self.demand[j]
    }

    /// Whether source `i` has anything left to ship.
    pub fn has_supply(&self, i: usize) -> bool {
        self.supply[i] > 0
    }

    /// Whether sink `j` still needs anything.
    pub fn has_demand(&self, j: usize) -> bool {
        self.demand[j] > 0
    }

    /// Whether either all supply or all demand has been allocated.
    pub fn is_exhausted(&self) -> bool {
        self.supply.iter().all(|&value| value == 0) || self.demand.iter().all(|&value| value == 0)
    }

    /// Indices of the sources with supply left, in order.
    pub fn eligible_rows(&self) -> impl Iterator<Item = usize> + Clone + '_ {
        (0..self.supply.len()).filter(move |&i| self.has_supply(i))
    }

    /// Indices of the sinks with demand left, in order.
    pub fn eligible_columns(&self) -> impl Iterator<Item = usize> + Clone + '_ {
        (0..self.demand.len()).filter(move |&j| self.has_demand(j))
    }

    /// Ship as much as possible from source `i` to sink `j`.
    ///
    /// At least one of the two is exhausted afterwards.
    ///
    /// # Return value
    ///
    /// The quantity shipped, which is the minimum of the remaining supply and demand.
    pub fn allocate(&mut self, i: usize, j: usize) -> u64 {
        let quantity = self.supply[i].min(self.demand[j]);

        self.allocation[(i, j)] = quantity;
        self.supply[i] -= quantity;
        self.demand[j] -= quantity;
        self.steps.push(Step { row: i, column: j, quantity });
        debug!("allocated {} from source {} to sink {}", quantity, i, j);

        quantity
    }

    /// Give up the working state, keeping only the allocations.
    pub fn into_allocation(self) -> Allocation {
        Allocation { matrix: self.allocation, steps: self.steps, }
    }
}
