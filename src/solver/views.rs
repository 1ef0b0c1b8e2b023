//! # Views on rows, columns and solutions
//!
//! Handles that pair an index with a borrow of the solver. They hold no state of their own: every
//! call is answered by the backend at that moment.
use crate::backend::Backend;
use crate::backend::status::SolveStatus;
use crate::data::expression::{LinearExpression, Variable};
use crate::data::linear_algebra::sparse_from_dense;
use crate::data::linear_program::elements::ConstraintType;
use crate::error::Result;
use crate::solver::Solver;

/// Read access to a constraint.
#[derive(Debug)]
pub struct Row<'a, B: Backend> {
    solver: &'a Solver<B>,
    index: usize,
}

impl<'a, B: Backend> Row<'a, B> {
    pub(crate) fn new(solver: &'a Solver<B>, index: usize) -> Self {
        Self { solver, index }
    }

    /// Row number, starting at 1.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Coefficients, one per column.
    pub fn values(&self) -> Option<Vec<f64>> {
        self.solver.backend().row_values(self.index)
    }

    /// Nonzero coefficients as (column, value), columns numbered from 1.
    pub fn sparse_values(&self) -> Option<Vec<(usize, f64)>> {
        self.values().map(|values| sparse_from_dense(&values, 1))
    }

    #[allow(missing_docs)]
    pub fn name(&self) -> Option<String> {
        self.solver.backend().row_name(self.index)
    }

    #[allow(missing_docs)]
    pub fn constraint_type(&self) -> Option<ConstraintType> {
        self.solver.backend().constraint_type(self.index)
    }

    #[allow(missing_docs)]
    pub fn right_hand_side(&self) -> Option<f64> {
        self.solver.backend().right_hand_side(self.index)
    }

    /// Width of the interval the row may take, if it has one.
    pub fn range(&self) -> Option<f64> {
        self.solver.backend().range(self.index)
    }

    /// Dual value in the latest solution.
    pub fn dual_value(&self) -> Option<f64> {
        self.solver.backend().dual_solution()?.get(self.index - 1).copied()
    }
}

/// Write access to a constraint.
#[derive(Debug)]
pub struct RowMut<'a, B: Backend> {
    solver: &'a mut Solver<B>,
    index: usize,
}

impl<'a, B: Backend> RowMut<'a, B> {
    pub(crate) fn new(solver: &'a mut Solver<B>, index: usize) -> Self {
        Self { solver, index }
    }

    /// Read access to the same row.
    pub fn as_row(&self) -> Row<'_, B> {
        Row::new(self.solver, self.index)
    }

    /// Replace the coefficients with an expression.
    pub fn set_values(&mut self, expression: impl Into<LinearExpression>) -> Result<bool> {
        self.solver.set_row(self.index, expression)
    }

    /// Replace the coefficients, one per column.
    pub fn set_values_dense(&mut self, values: &[f64]) -> bool {
        self.solver.backend_mut().set_row_dense(self.index, values)
    }

    #[allow(missing_docs)]
    pub fn set_name(&mut self, name: &str) -> bool {
        self.solver.backend_mut().set_row_name(self.index, name)
    }

    #[allow(missing_docs)]
    pub fn set_constraint_type(&mut self, constraint_type: ConstraintType) -> bool {
        self.solver.backend_mut().set_constraint_type(self.index, constraint_type)
    }

    #[allow(missing_docs)]
    pub fn set_right_hand_side(&mut self, value: f64) -> bool {
        self.solver.backend_mut().set_right_hand_side(self.index, value)
    }

    /// Let the row take values in an interval, see `GeneralForm::row_bounds`.
    pub fn set_range(&mut self, range: f64) -> bool {
        self.solver.backend_mut().set_range(self.index, range)
    }
}

/// Read access to a variable.
#[derive(Debug)]
pub struct Column<'a, B: Backend> {
    solver: &'a Solver<B>,
    index: usize,
}

impl<'a, B: Backend> Column<'a, B> {
    pub(crate) fn new(solver: &'a Solver<B>, index: usize) -> Self {
        Self { solver, index }
    }

    /// Column number, starting at 1.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The variable, for use in expressions.
    pub fn variable(&self) -> Variable {
        Variable::new(self.index)
    }

    /// Cost followed by the coefficient in each row.
    pub fn values(&self) -> Option<Vec<f64>> {
        self.solver.backend().column_values(self.index)
    }

    /// Nonzero values as (row, value); row 0 is the objective function.
    pub fn sparse_values(&self) -> Option<Vec<(usize, f64)>> {
        self.values().map(|values| sparse_from_dense(&values, 0))
    }

    #[allow(missing_docs)]
    pub fn name(&self) -> Option<String> {
        self.solver.backend().column_name(self.index)
    }

    #[allow(missing_docs)]
    pub fn lower_bound(&self) -> Option<f64> {
        self.bounds().map(|(lower, _)| lower)
    }

    #[allow(missing_docs)]
    pub fn upper_bound(&self) -> Option<f64> {
        self.bounds().map(|(_, upper)| upper)
    }

    #[allow(missing_docs)]
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.solver.backend().bounds(self.index)
    }

    /// Whether both bounds are infinite.
    pub fn is_unbounded(&self) -> bool {
        self.solver.backend().is_unbounded(self.index)
    }

    /// Whether only nonpositive values are allowed.
    pub fn is_negative(&self) -> bool {
        self.solver.backend().is_negative(self.index)
    }

    /// Value in the latest solution.
    pub fn value(&self) -> Option<f64> {
        self.solver.solution().variable(self.variable())
    }

    /// Reduced cost in the latest solution.
    pub fn reduced_cost(&self) -> Option<f64> {
        self.solver.backend().reduced_costs()?.get(self.index - 1).copied()
    }
}

/// Write access to a variable.
#[derive(Debug)]
pub struct ColumnMut<'a, B: Backend> {
    solver: &'a mut Solver<B>,
    index: usize,
}

impl<'a, B: Backend> ColumnMut<'a, B> {
    pub(crate) fn new(solver: &'a mut Solver<B>, index: usize) -> Self {
        Self { solver, index }
    }

    /// Read access to the same column.
    pub fn as_column(&self) -> Column<'_, B> {
        Column::new(self.solver, self.index)
    }

    /// Replace the cost and all coefficients: the cost first, then one value per row.
    pub fn set_values(&mut self, values: &[f64]) -> bool {
        let (rows, values): (Vec<_>, Vec<_>) = sparse_from_dense(values, 0).into_iter().unzip();
        self.solver.backend_mut().set_column(self.index, rows.len(), &values, &rows)
    }

    /// Replace the cost and all coefficients, given sparsely; row 0 is the objective function.
    pub fn set_values_sparse(&mut self, count: usize, values: &[f64], row_indices: &[usize]) -> bool {
        self.solver.backend_mut().set_column(self.index, count, values, row_indices)
    }

    #[allow(missing_docs)]
    pub fn set_name(&mut self, name: &str) -> bool {
        self.solver.backend_mut().set_column_name(self.index, name)
    }

    /// Set both bounds; infinite values are allowed.
    pub fn set_bounds(&mut self, lower: f64, upper: f64) -> bool {
        self.solver.backend_mut().set_bounds(self.index, lower, upper)
    }

    #[allow(missing_docs)]
    pub fn set_lower_bound(&mut self, lower: f64) -> bool {
        let upper = self.as_column().upper_bound().unwrap_or(f64::INFINITY);
        self.set_bounds(lower, upper)
    }

    #[allow(missing_docs)]
    pub fn set_upper_bound(&mut self, upper: f64) -> bool {
        let lower = self.as_column().lower_bound().unwrap_or(f64::NEG_INFINITY);
        self.set_bounds(lower, upper)
    }

    /// Make the variable free.
    pub fn set_unbounded(&mut self) -> bool {
        self.solver.backend_mut().set_unbounded(self.index)
    }
}

/// The outcome of a solve.
///
/// Borrows the solver immutably, so the model can't change while the solution is looked at.
#[derive(Debug)]
pub struct Solution<'a, B: Backend> {
    solver: &'a Solver<B>,
    status: SolveStatus,
}

impl<'a, B: Backend> Solution<'a, B> {
    pub(crate) fn new(solver: &'a Solver<B>, status: SolveStatus) -> Self {
        Self { solver, status }
    }

    #[allow(missing_docs)]
    pub fn status(&self) -> SolveStatus {
        self.status
    }

    /// Whether the status is `SolveStatus::Optimal`.
    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }

    /// Description of the status, as the backend words it.
    pub fn status_text(&self) -> String {
        self.solver.status_text(self.status)
    }

    #[allow(missing_docs)]
    pub fn objective_value(&self) -> Option<f64> {
        self.solver.backend().objective_value()
    }

    /// Objective function value, then the value of each row, then the value of each column.
    pub fn primal(&self) -> Option<&'a [f64]> {
        self.solver.backend().primal_solution()
    }

    /// An element of `primal`.
    pub fn primal_result(&self, index: usize) -> Option<f64> {
        self.primal()?.get(index).copied()
    }

    /// Value of each variable.
    pub fn variables(&self) -> Option<&'a [f64]> {
        let start = 1 + self.solver.nr_rows();
        self.primal()?.get(start..)
    }

    /// Value of a single variable.
    pub fn variable(&self, variable: Variable) -> Option<f64> {
        self.variables()?.get(variable.column().checked_sub(1)?).copied()
    }

    /// Value of each row.
    pub fn constraints(&self) -> Option<&'a [f64]> {
        let end = 1 + self.solver.nr_rows();
        self.primal()?.get(1..end)
    }

    /// Dual value of each row.
    pub fn duals(&self) -> Option<&'a [f64]> {
        self.solver.backend().dual_solution()
    }

    /// Reduced cost of each column.
    pub fn reduced_costs(&self) -> Option<&'a [f64]> {
        self.solver.backend().reduced_costs()
    }

    /// Number of simplex iterations the solve took.
    pub fn iterations(&self) -> u64 {
        self.solver.backend().iterations()
    }

    /// Whether values, laid out as `primal`, satisfy all bounds and constraints.
    pub fn is_feasible(&self, values: &[f64], threshold: f64) -> bool {
        self.solver.backend().is_feasible(values, threshold)
    }
}
