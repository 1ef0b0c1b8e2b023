//! Models with a known outcome, other than a plain optimum with `<=` rows.
use std::time::Duration;

use approx::assert_abs_diff_eq;

use relp_rows::{EngineConfig, Expression, SolveStatus, Solver, Variable};

const X: Variable = Variable::new(1);
const Y: Variable = Variable::new(2);

#[test]
fn infeasible() {
    let mut solver = Solver::new(0, 2);
    solver.add_constraint(&(X + Y).greater_or_equal(5_f64)).unwrap();
    solver.add_constraint(&(X + Y).less_or_equal(4_f64)).unwrap();
    let solution = solver.solve();
    assert_eq!(solution.status(), SolveStatus::Infeasible);
    assert_eq!(solution.status().code(), 2);
    assert_eq!(solution.objective_value(), None);
}

#[test]
fn unbounded() {
    let mut solver = Solver::new(0, 2);
    solver.add_constraint(&(X - Y).less_or_equal(1_f64)).unwrap();
    solver.set_objective(X + Y).unwrap();
    solver.set_maximize();
    assert_eq!(solver.solve().status(), SolveStatus::Unbounded);
    assert_eq!(solver.most_recent_status().code(), 3);
}

#[test]
fn greater_and_equal_rows() {
    // Diet style: cheapest mix with at least 10 units, exactly 4 of which from y
    let mut solver = Solver::new(0, 2);
    solver.add_constraint(&(X + Y).greater_or_equal(10_f64)).unwrap();
    solver.add_constraint(&Y.equal_to(4_f64)).unwrap();
    solver.set_objective(X * 3_f64 + Y * 2_f64).unwrap();

    let solution = solver.solve();
    assert_eq!(solution.status(), SolveStatus::Optimal);
    assert_abs_diff_eq!(solution.objective_value().unwrap(), 26_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.variable(X).unwrap(), 6_f64, epsilon = 1e-9);
    let duals = solution.duals().unwrap();
    assert_abs_diff_eq!(duals[0], 3_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(duals[1], -1_f64, epsilon = 1e-9);
}

#[test]
fn bounds_and_free_variables() {
    let mut solver = Solver::new(0, 2);
    solver.add_constraint(&(X + Y).equal_to(1_f64)).unwrap();
    solver.column_mut(1).unwrap().set_bounds(-2_f64, 2_f64);
    solver.column_mut(2).unwrap().set_unbounded();
    solver.set_objective(X * -1_f64 + Y * 0.5_f64).unwrap();

    let solution = solver.solve();
    assert_eq!(solution.status(), SolveStatus::Optimal);
    // x at its upper bound, y = -1
    assert_abs_diff_eq!(solution.variable(X).unwrap(), 2_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.variable(Y).unwrap(), -1_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.objective_value().unwrap(), -2.5_f64, epsilon = 1e-9);
    assert!(solution.is_feasible(solution.primal().unwrap(), 1e-9));
}

#[test]
fn negative_variable() {
    let mut solver = Solver::new(0, 1);
    assert!(solver.column_mut(1).unwrap().set_bounds(-solver_infinity(), -1_f64));
    assert!(solver.column(1).unwrap().is_negative());
    solver.set_objective(X).unwrap();
    solver.set_maximize();
    let solution = solver.solve();
    assert_eq!(solution.status(), SolveStatus::Optimal);
    assert_abs_diff_eq!(solution.variable(X).unwrap(), -1_f64, epsilon = 1e-9);
}

fn solver_infinity() -> f64 {
    EngineConfig::default().infinity
}

#[test]
fn time_limit() {
    let config = EngineConfig::new().with_time_limit(Duration::ZERO);
    let mut solver = Solver::with_config(0, 2, config);
    solver.add_constraint(&(X + Y).less_or_equal(4_f64)).unwrap();
    solver.set_objective(X + Y).unwrap();
    solver.set_maximize();
    assert_eq!(solver.solve().status(), SolveStatus::SubOptimal);

    // Without a basic feasible solution to fall back on, the solve times out
    solver.add_constraint(&X.greater_or_equal(1_f64)).unwrap();
    assert_eq!(solver.solve().status(), SolveStatus::Timeout);
}

#[test]
fn abort() {
    let mut solver = Solver::new(0, 1);
    solver.add_constraint(&X.less_or_equal(4_f64)).unwrap();
    solver.set_objective(X).unwrap();
    solver.set_maximize();
    solver.backend_mut().set_abort(|| true);
    assert_eq!(solver.solve().status(), SolveStatus::UserAbort);

    solver.backend_mut().clear_abort();
    assert_eq!(solver.solve().status(), SolveStatus::Optimal);
}

#[test]
fn edits_after_solving() {
    let mut solver = Solver::new(0, 2);
    solver.add_constraint(&(X + Y * 2_f64).less_or_equal(8_f64)).unwrap();
    solver.set_objective(X + Y).unwrap();
    solver.set_maximize();
    assert_eq!(solver.solve().status(), SolveStatus::Optimal);
    assert_abs_diff_eq!(solver.column(1).unwrap().value().unwrap(), 8_f64, epsilon = 1e-9);

    // The old solution has one row less than the model now has
    solver.add_constraint(&X.less_or_equal(2_f64)).unwrap();
    let solution = solver.solution();
    assert_eq!(solution.status(), SolveStatus::NotRun);
    assert_eq!(solution.variable(X), None);
    assert_eq!(solution.constraints(), None);
    assert_eq!(solver.column(1).unwrap().value(), None);
    assert_eq!(solver.row(2).unwrap().dual_value(), None);
    assert_eq!(solver.row(2).unwrap().right_hand_side(), Some(2_f64));

    let solution = solver.solve();
    assert_eq!(solution.status(), SolveStatus::Optimal);
    assert_eq!(solution.constraints().unwrap().len(), 2);
    assert_abs_diff_eq!(solution.variable(X).unwrap(), 2_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.variable(Y).unwrap(), 3_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.objective_value().unwrap(), 5_f64, epsilon = 1e-9);

    solver.row_mut(2).unwrap().set_right_hand_side(4_f64);
    assert_eq!(solver.most_recent_status(), SolveStatus::NotRun);
    assert_eq!(solver.solution().objective_value(), None);
}
