//! Wheat and barley: how much of each to grow on 75 acres, given storage space and a budget.
use approx::assert_abs_diff_eq;

use relp_rows::{Expression, SolveStatus, Solver, Variable};

const WHEAT: Variable = Variable::new(1);
const BARLEY: Variable = Variable::new(2);

fn farm() -> Solver {
    let mut solver = Solver::new(0, 2);
    assert!(solver.column_mut(1).unwrap().set_name("wheat"));
    assert!(solver.column_mut(2).unwrap().set_name("barley"));

    let constraints = [
        (WHEAT * 120_f64 + BARLEY * 210_f64).less_or_equal(15000_f64),
        (WHEAT * 110_f64 + BARLEY * 30_f64).less_or_equal(4000_f64),
        (WHEAT + BARLEY).less_or_equal(75_f64),
    ];
    for constraint in &constraints {
        assert_eq!(solver.add_constraint(constraint), Ok(true));
    }
    assert_eq!(solver.set_objective(WHEAT * 143_f64 + BARLEY * 60_f64), Ok(true));
    solver.set_maximize();
    solver
}

#[test]
fn optimum() {
    let mut solver = farm();
    let solution = solver.solve();

    assert_eq!(solution.status(), SolveStatus::Optimal);
    assert_abs_diff_eq!(solution.objective_value().unwrap(), 6315.625, epsilon = 1e-6);
    assert_abs_diff_eq!(solution.variable(WHEAT).unwrap(), 21.875, epsilon = 1e-6);
    assert_abs_diff_eq!(solution.variable(BARLEY).unwrap(), 53.125, epsilon = 1e-6);

    let constraints = solution.constraints().unwrap();
    assert_abs_diff_eq!(constraints[0], 13781.25, epsilon = 1e-6);
    assert_abs_diff_eq!(constraints[1], 4000_f64, epsilon = 1e-6);
    assert_abs_diff_eq!(constraints[2], 75_f64, epsilon = 1e-6);
}

#[test]
fn sensitivity() {
    let mut solver = farm();
    let solution = solver.solve();

    let duals = solution.duals().unwrap();
    assert_abs_diff_eq!(duals[0], 0_f64, epsilon = 1e-6);
    assert_abs_diff_eq!(duals[1], 1.0375, epsilon = 1e-6);
    assert_abs_diff_eq!(duals[2], 28.875, epsilon = 1e-6);
    for reduced_cost in solution.reduced_costs().unwrap() {
        assert_abs_diff_eq!(*reduced_cost, 0_f64, epsilon = 1e-6);
    }
}

#[test]
fn by_name() {
    let mut solver = farm();
    solver.solve();

    let barley = solver.name_index("barley", false).unwrap();
    let column = solver.column(barley).unwrap();
    assert_eq!(column.variable(), BARLEY);
    assert_abs_diff_eq!(column.value().unwrap(), 53.125, epsilon = 1e-6);
}

#[test]
fn extra_land() {
    let mut solver = farm();
    solver.row_mut(3).unwrap().set_right_hand_side(76_f64);
    let solution = solver.solve();

    // One more acre is worth the dual value of the land row
    assert_eq!(solution.status(), SolveStatus::Optimal);
    assert_abs_diff_eq!(solution.objective_value().unwrap(), 6315.625 + 28.875, epsilon = 1e-6);
}
