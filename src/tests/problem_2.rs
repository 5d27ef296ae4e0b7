//! Three sources and four sinks, with floating point costs.
//!
//! Vogel's and Russell's methods agree here.
use crate::algorithm::{Method, solve};
use crate::data::matrix::Dense;
use crate::data::problem::Problem;

fn problem() -> Problem<f64> {
    Problem::new(
        vec![100, 200, 150],
        vec![80, 120, 150, 100],
        vec![
            vec![8., 6., 10., 9.],
            vec![9., 7., 4., 3.],
            vec![5., 2., 8., 6.],
        ],
    ).unwrap()
}

fn north_west_corner() -> Dense<u64> {
    Dense::from_rows(vec![
        vec![80, 20, 0, 0],
        vec![0, 100, 100, 0],
        vec![0, 0, 50, 100],
    ], 4)
}

fn vogel() -> Dense<u64> {
    Dense::from_rows(vec![
        vec![50, 0, 0, 50],
        vec![0, 0, 150, 50],
        vec![30, 120, 0, 0],
    ], 4)
}

fn russell() -> Dense<u64> {
    vogel()
}

#[test]
fn solve_north_west_corner() {
    let solution = solve(&problem(), Method::NorthWestCorner).unwrap();
    assert_eq!(solution.allocation(), &north_west_corner());
    assert_eq!(solution.total_cost(), &2860.);
}

#[test]
fn solve_vogel() {
    let solution = solve(&problem(), Method::Vogel).unwrap();
    assert_eq!(solution.allocation(), &vogel());
    assert_eq!(solution.total_cost(), &1990.);
}

#[test]
fn solve_russell() {
    let solution = solve(&problem(), Method::Russell).unwrap();
    assert_eq!(solution.allocation(), &russell());
    assert_eq!(solution.total_cost(), &1990.);
    assert_eq!(solution.nr_basic_cells(), 6);
}
