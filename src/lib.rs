//! # Initial solutions for the transportation problem
//!
//! Goods are shipped from sources with a fixed supply to sinks with a fixed demand, at a unit cost
//! per source-sink pair. This crate constructs basic feasible solutions to balanced instances
//! using the North-West Corner rule, Vogel's Approximation Method and Russell's Approximation
//! Method. These are starting points for an improvement method like the stepping stone method,
//! they are not optimal in general.
//!
//! ```
//! use relp_transport::algorithm::{Method, solve};
//! use relp_transport::data::problem::Problem;
//!
//! let problem = Problem::new(
//!     vec![100, 200, 300],
//!     vec![150, 250, 200],
//!     vec![vec![4, 3, 8], vec![2, 7, 3], vec![5, 6, 2]],
//! ).unwrap();
//! let solution = solve(&problem, Method::NorthWestCorner).unwrap();
//! assert_eq!(solution.total_cost(), &2550);
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
