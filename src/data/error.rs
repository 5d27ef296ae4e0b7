//! # Errors in problem descriptions
//!
//! A problem is validated once, when it is created. These errors describe why a description
//! couldn't be turned into a problem, or why the cost of an allocation couldn't be computed.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// A `ProblemError` is created when the data describing a transportation problem is inconsistent.
///
/// No `Problem` exists when one of these is returned.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ProblemError {
    /// The cost matrix doesn't have one row per source and one column per sink.
    DimensionMismatch(DimensionMismatch),
    /// A supply, demand or cost value is negative.
    ///
    /// Costs that can't be compared with zero at all (like a float NaN) are reported here as
    /// well.
    NegativeValue(Location),
}

/// How the shape of the cost matrix differs from the shape implied by the supply and demand.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DimensionMismatch {
    /// The number of cost rows differs from the number of sources.
    Rows {
        #[allow(missing_docs)]
        expected: usize,
        #[allow(missing_docs)]
        found: usize,
    },
    /// A cost row has a length different from the number of sinks.
    Columns {
        /// Index of the first row that has the wrong length.
        row: usize,
        #[allow(missing_docs)]
        expected: usize,
        #[allow(missing_docs)]
        found: usize,
    },
}

/// Position of a value in the problem description.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Location {
    Supply(usize),
    Demand(usize),
    Cost(usize, usize),
}

impl Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProblemError::DimensionMismatch(mismatch) => write!(f, "DimensionMismatch: {}", mismatch),
            ProblemError::NegativeValue(location) => write!(f, "NegativeValue: {} is negative", location),
        }
    }
}

impl Display for DimensionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DimensionMismatch::Rows { expected, found } => write!(
                f, "cost matrix has {} rows, but there are {} sources", found, expected,
            ),
            DimensionMismatch::Columns { row, expected, found } => write!(
                f, "cost row {} has {} values, but there are {} sinks", row, found, expected,
            ),
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Location::Supply(i) => write!(f, "supply of source {}", i),
            Location::Demand(j) => write!(f, "demand of sink {}", j),
            Location::Cost(i, j) => write!(f, "cost from source {} to sink {}", i, j),
        }
    }
}

impl Error for ProblemError {}

/// A `CostError` is created when the total cost of an allocation doesn't fit in the cost type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CostError {
    /// A quantity shipped can't be converted into the cost type.
    QuantityNotRepresentable(u64),
    /// A product of quantity and unit cost, or the running total, is out of range.
    Overflow,
}

impl Display for CostError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CostError::QuantityNotRepresentable(quantity) => write!(
                f, "QuantityNotRepresentable: {} doesn't fit in the cost type", quantity,
            ),
            CostError::Overflow => write!(f, "Overflow: the total cost doesn't fit in the cost type"),
        }
    }
}

impl Error for CostError {}
