//! # Algorithms
//!
//! Construction heuristics for an initial basic feasible solution. Each heuristic is a pure
//! function of a `Problem`: all working state lives inside a single run, so a problem can be
//! solved any number of times, with any method, from any number of threads.
use std::fmt::{Display, Formatter, Result as FormatResult};

use enum_map::{Enum, EnumMap};
use log::{info, warn};

use crate::algorithm::error::SolveError;
use crate::algorithm::north_west::NorthWestCorner;
use crate::algorithm::russell::Russell;
use crate::algorithm::vogel::Vogel;
use crate::data::number::Cost;
use crate::data::problem::Problem;
use crate::data::solution::{Allocation, Solution, total_cost};

pub mod error;
pub mod north_west;
pub mod remaining;
pub mod russell;
pub mod utilities;
pub mod vogel;

/// A heuristic that constructs a basic feasible solution.
///
/// Implementors only decide on the quantities; checking the balance and computing the cost is
/// shared.
pub trait InitialSolution {
    /// Which method this is.
    const METHOD: Method;

    /// Decide how much to ship over every source-sink pair.
    ///
    /// The problem should be balanced.
    ///
    /// # Errors
    ///
    /// `InternalInvariantViolation` if no cell could be selected while supply and demand remain.
    fn allocate<C: Cost>(problem: &Problem<C>) -> Result<Allocation, SolveError>;

    /// Solve a problem.
    ///
    /// # Errors
    ///
    /// `Unbalanced` when the total supply and demand differ, in which case nothing is allocated.
    fn solve<C: Cost>(problem: &Problem<C>) -> Result<Solution<C>, SolveError> {
        check_balanced(problem)?;

        let Allocation { matrix, steps } = Self::allocate(problem)?;
        debug_assert!(steps.len() < (problem.nr_sources() + problem.nr_sinks()).max(1));
        debug_assert_eq!(matrix.row_sums(), problem.supply());
        debug_assert_eq!(matrix.column_sums(), problem.demand());

        let total_cost = total_cost(&matrix, problem.cost())?;
        info!("{} finished after {} steps with total cost {}", Self::METHOD, steps.len(), total_cost);

        Ok(Solution::new(matrix, total_cost, steps))
    }
}

/// The available heuristics.
#[derive(Enum, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Method {
    /// Ignore costs, fill the allocation matrix from the top left.
    NorthWestCorner,
    /// Vogel's Approximation Method, allocate by opportunity cost.
    Vogel,
    /// Russell's Approximation Method, allocate by largest `u[i] + v[j] - cost[i][j]`.
    Russell,
}

impl Method {
    /// All methods, in the order they are usually presented.
    pub const ALL: [Method; 3] = [Method::NorthWestCorner, Method::Vogel, Method::Russell];
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        f.write_str(match self {
            Method::NorthWestCorner => "North-West Corner Method",
            Method::Vogel => "Vogel's Approximation Method",
            Method::Russell => "Russell's Approximation Method",
        })
    }
}

/// Solve a problem with the given method.
///
/// # Errors
///
/// `Unbalanced` when the total supply and demand differ. See `InitialSolution::solve`.
pub fn solve<C: Cost>(problem: &Problem<C>, method: Method) -> Result<Solution<C>, SolveError> {
    match method {
        Method::NorthWestCorner => NorthWestCorner::solve(problem),
        Method::Vogel => Vogel::solve(problem),
        Method::Russell => Russell::solve(problem),
    }
}

/// Solve a problem with every method.
///
/// The runs are independent of each other.
///
/// # Errors
///
/// The first error encountered; `Unbalanced` before any method is run.
pub fn solve_all<C: Cost>(problem: &Problem<C>) -> Result<EnumMap<Method, Solution<C>>, SolveError> {
    check_balanced(problem)?;

    Ok(EnumMap::from_array([
        NorthWestCorner::solve(problem)?,
        Vogel::solve(problem)?,
        Russell::solve(problem)?,
    ]))
}

fn check_balanced<C>(problem: &Problem<C>) -> Result<(), SolveError> {
    if problem.is_balanced() {
        Ok(())
    } else {
        let (total_supply, total_demand) = (problem.total_supply(), problem.total_demand());
        warn!("rejecting problem: total supply {} differs from total demand {}", total_supply, total_demand);
        Err(SolveError::Unbalanced { total_supply, total_demand })
    }
}
