//! # Storing of transportation problems in memory
//!
//! This module provides the data structures used to represent problems and their solutions in
//! memory. Working state of a single run lives with the algorithms, in `algorithm::remaining`.

pub mod error;
pub mod matrix;
pub mod number;
pub mod problem;
pub mod solution;
