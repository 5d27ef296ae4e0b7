use relp_transport::algorithm::{Method, solve, solve_all};
use relp_transport::algorithm::error::SolveError;
use relp_transport::data::problem::Problem;
use relp_transport::io::import;

use super::get_test_file_path;

fn to_problem(file_name: &str) -> Problem<i64> {
    let path = get_test_file_path(file_name);
    import(&path).unwrap()
}

/// Solve with every method and compare the total costs, in method order.
fn assert_total_costs(file_name: &str, expected: [i64; 3]) {
    let problem = to_problem(file_name);
    let solutions = solve_all(&problem).unwrap();

    for (method, solution) in &solutions {
        assert_eq!(solution.allocation().row_sums(), problem.supply());
        assert_eq!(solution.allocation().column_sums(), problem.demand());
        assert!(solution.steps().len() < problem.nr_sources() + problem.nr_sinks());
        assert!(solution.total_cost() <= solutions[Method::NorthWestCorner].total_cost(), "{}", method);
    }

    assert_eq!(Method::ALL.map(|method| *solutions[method].total_cost()), expected);
}

#[test]
fn factories() {
    assert_total_costs("factories", [2550, 1950, 2550]);
}

#[test]
fn depots() {
    assert_total_costs("depots", [2860, 1990, 1990]);
}

#[test]
fn mills() {
    assert_total_costs("mills", [255, 195, 195]);
}

#[test]
fn plants() {
    assert_total_costs("plants", [3520, 3130, 3170]);
}

#[test]
fn unbalanced() {
    let problem = to_problem("unbalanced");

    for method in Method::ALL {
        assert_eq!(
            solve(&problem, method),
            Err(SolveError::Unbalanced { total_supply: 1500, total_demand: 950 }),
        );
    }
}

#[test]
fn fractional() {
    let path = get_test_file_path("fractional");
    let problem = import::<f64>(&path).unwrap();

    for method in Method::ALL {
        let solution = solve(&problem, method).unwrap();
        assert_eq!(solution.total_cost(), &31.25);
    }
}
