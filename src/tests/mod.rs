//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn problem()`
//! * `fn north_west_corner()`, `fn vogel()`, `fn russell()` for the expected allocations
pub mod problem_1;
pub mod problem_2;
