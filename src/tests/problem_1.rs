//! Three factories supplying three warehouses.
//!
//! Every method gives a different allocation; Russell's method ends up degenerate.
use crate::algorithm::{Method, solve, solve_all};
use crate::data::matrix::Dense;
use crate::data::problem::Problem;

fn problem() -> Problem<i64> {
    Problem::new(
        vec![100, 200, 300],
        vec![150, 250, 200],
        vec![
            vec![4, 3, 8],
            vec![2, 7, 3],
            vec![5, 6, 2],
        ],
    ).unwrap()
}

fn north_west_corner() -> Dense<u64> {
    Dense::from_rows(vec![
        vec![100, 0, 0],
        vec![50, 150, 0],
        vec![0, 100, 200],
    ], 3)
}

fn vogel() -> Dense<u64> {
    Dense::from_rows(vec![
        vec![0, 100, 0],
        vec![150, 50, 0],
        vec![0, 100, 200],
    ], 3)
}

fn russell() -> Dense<u64> {
    Dense::from_rows(vec![
        vec![0, 100, 0],
        vec![0, 0, 200],
        vec![150, 150, 0],
    ], 3)
}

#[test]
fn solve_north_west_corner() {
    let solution = solve(&problem(), Method::NorthWestCorner).unwrap();
    assert_eq!(solution.allocation(), &north_west_corner());
    assert_eq!(solution.total_cost(), &2550);
    assert!(!solution.is_degenerate());
}

#[test]
fn solve_vogel() {
    let solution = solve(&problem(), Method::Vogel).unwrap();
    assert_eq!(solution.allocation(), &vogel());
    assert_eq!(solution.total_cost(), &1950);
    assert_eq!(solution.steps().len(), 5);
}

#[test]
fn solve_russell() {
    let solution = solve(&problem(), Method::Russell).unwrap();
    assert_eq!(solution.allocation(), &russell());
    assert_eq!(solution.total_cost(), &2550);
    assert_eq!(solution.steps().len(), 4);
    assert!(solution.is_degenerate());
}

#[test]
fn problem_is_reused() {
    let problem = problem();
    let solutions = solve_all(&problem).unwrap();

    assert_eq!(solutions[Method::NorthWestCorner].allocation(), &north_west_corner());
    assert_eq!(solutions[Method::Vogel].allocation(), &vogel());
    assert_eq!(solutions[Method::Russell].allocation(), &russell());
    // Solving doesn't touch the problem
    assert_eq!(problem, self::problem());
}
