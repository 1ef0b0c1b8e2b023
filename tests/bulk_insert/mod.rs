//! Adding many rows at once.
use relp_rows::{Error, Expression, SolveStatus, Solver, Sum, Variable};

#[test]
fn knapsack_relaxation() {
    let nr_items = 20;
    let mut solver = Solver::new(0, nr_items);
    {
        let mut rows = solver.bulk_insert();
        assert!(rows.is_add_row_mode());
        let weight = (1..=nr_items).map(|j| Variable::new(j) * j as f64).sum::<Sum>();
        assert_eq!(rows.add_constraint(&weight.less_or_equal(30_f64)), Ok(true));
        for j in 1..=nr_items {
            assert_eq!(rows.add_constraint(&Variable::new(j).less_or_equal(1_f64)), Ok(true));
        }
        // Edits of existing rows are refused until the guard is dropped
        assert_eq!(rows.set_row(1, Variable::new(1)), Ok(false));
        assert_eq!(rows.set_element(1, 1, 1_f64), Ok(false));
    }
    assert!(!solver.is_add_row_mode());
    assert_eq!(solver.nr_rows(), 1 + nr_items);

    let value = (1..=nr_items).map(Variable::new).sum::<Sum>();
    solver.set_objective(value).unwrap();
    solver.set_maximize();

    // The lightest items first: 1 + 2 + ... + 7 = 28, then 2 / 8 of item 8
    let solution = solver.solve();
    assert_eq!(solution.status(), SolveStatus::Optimal);
    assert!((solution.objective_value().unwrap() - 7.25).abs() < 1e-9);
}

#[test]
fn errors_leave_row_mode() {
    let mut solver = Solver::new(0, 1);
    let result = (|| {
        let mut rows = solver.bulk_insert();
        rows.add_constraint(&Variable::new(0).less_or_equal(1_f64))
    })();
    assert_eq!(result, Err(Error::InvalidColumn));
    assert!(!solver.is_add_row_mode());
}

#[test]
fn solving_leaves_row_mode() {
    let mut solver = Solver::new(0, 1);
    assert!(solver.set_add_row_mode(true));
    solver.add_constraint(&Variable::new(1).less_or_equal(1_f64)).unwrap();
    assert_eq!(solver.solve().status(), SolveStatus::Optimal);
    assert!(!solver.is_add_row_mode());
}
