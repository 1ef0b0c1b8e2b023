//! # Solver facade
//!
//! Builds models from symbolic expressions on top of a `Backend`. Every expression is flattened
//! into the solver's scratch buffers and handed to the backend as a sparse row; the backend's
//! answer is passed on unchanged.
use tracing::debug;

use crate::backend::Backend;
use crate::backend::config::EngineConfig;
use crate::backend::engine::Engine;
use crate::backend::status::SolveStatus;
use crate::data::expression::LinearExpression;
use crate::data::expression::constraint::Constraint;
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::error::{Error, Result};
use crate::solver::materialize::ScratchBuffers;
use crate::solver::row_mode::BulkInsert;
use crate::solver::views::{Column, ColumnMut, Row, RowMut, Solution};

pub mod materialize;
pub mod row_mode;
pub mod views;

/// Model building and solving through symbolic expressions.
///
/// Owns the backend: dropping the solver releases it, and the borrow checker makes sure that no
/// `Row`, `Column` or `Solution` outlives it.
#[derive(Debug)]
pub struct Solver<B: Backend = Engine> {
    backend: B,
    buffers: ScratchBuffers,
}

impl Solver<Engine> {
    /// A model with `nr_rows` empty constraints and `nr_columns` nonnegative columns.
    pub fn new(nr_rows: usize, nr_columns: usize) -> Self {
        Self::from_backend(Engine::new(nr_rows, nr_columns))
    }

    /// A model with `nr_rows` empty constraints and `nr_columns` nonnegative columns.
    pub fn with_config(nr_rows: usize, nr_columns: usize, config: EngineConfig) -> Self {
        Self::from_backend(Engine::with_config(nr_rows, nr_columns, config))
    }
}

impl<B: Backend> Solver<B> {
    /// Drive an existing backend.
    pub fn from_backend(backend: B) -> Self {
        Self { backend, buffers: ScratchBuffers::new() }
    }

    #[allow(missing_docs)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[allow(missing_docs)]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Append a constraint.
    ///
    /// # Return value
    ///
    /// Whether the backend accepted the row, or `Error::InvalidColumn` if the expression refers to
    /// column 0.
    pub fn add_constraint(&mut self, constraint: &Constraint) -> Result<bool> {
        let row = self.buffers.materialize(constraint.expression())?;
        Ok(self.backend.append_constraint(
            row.count(),
            row.coefficients(),
            row.column_indices(),
            constraint.constraint_type(),
            constraint.right_hand_side(),
        ))
    }

    /// Replace the coefficients of an existing row.
    ///
    /// # Errors
    ///
    /// `Error::RowOutOfRange` if the row doesn't exist; the backend is not called in that case.
    pub fn set_row(&mut self, row: usize, expression: impl Into<LinearExpression>) -> Result<bool> {
        self.check_row(row)?;
        let expression = expression.into();
        let values = self.buffers.materialize(&expression)?;
        Ok(self.backend.set_row(row, values.count(), values.coefficients(), values.column_indices()))
    }

    /// Replace the objective function.
    pub fn set_objective(&mut self, expression: impl Into<LinearExpression>) -> Result<bool> {
        let expression = expression.into();
        let values = self.buffers.materialize(&expression)?;
        Ok(self.backend.set_objective(values.count(), values.coefficients(), values.column_indices()))
    }

    /// Append a constraint given densely, one coefficient per column.
    pub fn add_constraint_dense(&mut self, row: &[f64], constraint_type: ConstraintType, right_hand_side: f64) -> bool {
        self.backend.append_constraint_dense(row, constraint_type, right_hand_side)
    }

    /// Append a constraint given as whitespace separated coefficients, one per column.
    pub fn add_constraint_str(&mut self, row: &str, constraint_type: ConstraintType, right_hand_side: f64) -> bool {
        self.backend.append_constraint_str(row, constraint_type, right_hand_side)
    }

    /// Append a constraint given sparsely, with columns numbered from 1.
    pub fn add_constraint_sparse(
        &mut self,
        count: usize,
        coefficients: &[f64],
        column_indices: &[usize],
        constraint_type: ConstraintType,
        right_hand_side: f64,
    ) -> bool {
        self.backend.append_constraint(count, coefficients, column_indices, constraint_type, right_hand_side)
    }

    /// Replace the objective function, given densely.
    pub fn set_objective_dense(&mut self, values: &[f64]) -> bool {
        self.backend.set_objective_dense(values)
    }

    /// Replace the objective function, given as whitespace separated coefficients.
    pub fn set_objective_str(&mut self, values: &str) -> bool {
        self.backend.set_objective_str(values)
    }

    /// Append a column given densely: its cost followed by one value per row.
    pub fn add_column(&mut self, values: &[f64]) -> bool {
        self.backend.append_column_dense(values)
    }

    /// Append a column given sparsely; row 0 is the objective function.
    pub fn add_column_sparse(&mut self, count: usize, values: &[f64], row_indices: &[usize]) -> bool {
        self.backend.append_column(count, values, row_indices)
    }

    /// Append a column given as whitespace separated values: its cost, then one value per row.
    pub fn add_column_str(&mut self, values: &str) -> bool {
        self.backend.append_column_str(values)
    }

    /// Delete a column; later columns shift down by one.
    pub fn delete_column(&mut self, column: usize) -> Result<bool> {
        self.check_column(column)?;
        Ok(self.backend.delete_column(column))
    }

    /// Delete a constraint; later rows shift down by one.
    pub fn delete_constraint(&mut self, row: usize) -> Result<bool> {
        self.check_row(row)?;
        Ok(self.backend.delete_constraint(row))
    }

    /// Switch row adding mode on the backend.
    ///
    /// Prefer `bulk_insert`, which switches the mode off again when done.
    pub fn set_add_row_mode(&mut self, enabled: bool) -> bool {
        self.backend.set_add_row_mode(enabled)
    }

    #[allow(missing_docs)]
    pub fn is_add_row_mode(&self) -> bool {
        self.backend.is_add_row_mode()
    }

    /// Add rows in bulk until the returned guard is dropped.
    pub fn bulk_insert(&mut self) -> BulkInsert<'_, B> {
        BulkInsert::new(self)
    }

    #[allow(missing_docs)]
    pub fn set_maximize(&mut self) {
        self.backend.set_objective_sense(Objective::Maximize);
    }

    #[allow(missing_docs)]
    pub fn set_minimize(&mut self) {
        self.backend.set_objective_sense(Objective::Minimize);
    }

    #[allow(missing_docs)]
    pub fn is_maximize(&self) -> bool {
        self.backend.objective_sense() == Objective::Maximize
    }

    /// Maximize if `maximize`, minimize otherwise.
    pub fn set_sense(&mut self, maximize: bool) {
        if maximize {
            self.set_maximize();
        } else {
            self.set_minimize();
        }
    }

    /// Value treated as infinite.
    pub fn infinity(&self) -> f64 {
        self.backend.infinity()
    }

    #[allow(missing_docs)]
    pub fn set_infinity(&mut self, infinity: f64) {
        self.backend.set_infinity(infinity);
    }

    /// Whether a value is treated as infinite.
    pub fn is_infinite(&self, value: f64) -> bool {
        self.backend.is_infinite(value)
    }

    /// Index of the row or column with a name.
    pub fn name_index(&self, name: &str, is_row: bool) -> Option<usize> {
        self.backend.name_index(name, is_row)
    }

    #[allow(missing_docs)]
    pub fn lp_name(&self) -> String {
        self.backend.lp_name()
    }

    #[allow(missing_docs)]
    pub fn set_lp_name(&mut self, name: &str) -> bool {
        self.backend.set_lp_name(name)
    }

    /// A single coefficient; row 0 is the objective function.
    pub fn element(&self, row: usize, column: usize) -> Result<f64> {
        if row > 0 {
            self.check_row(row)?;
        }
        self.check_column(column)?;
        Ok(self.backend.element(row, column).unwrap_or(0_f64))
    }

    /// Write a single coefficient; row 0 is the objective function.
    pub fn set_element(&mut self, row: usize, column: usize, value: f64) -> Result<bool> {
        if row > 0 {
            self.check_row(row)?;
        }
        self.check_column(column)?;
        Ok(self.backend.set_element(row, column, value))
    }

    /// Write all right-hand sides at once, one value per row.
    pub fn set_rh_vec(&mut self, values: &[f64]) -> bool {
        self.backend.set_right_hand_side_vec(values)
    }

    /// Write all right-hand sides at once, given as whitespace separated values.
    pub fn set_rh_vec_str(&mut self, values: &str) -> bool {
        self.backend.set_right_hand_side_str(values)
    }

    /// Write the objective function coefficient of a single column.
    pub fn set_obj(&mut self, column: usize, value: f64) -> Result<bool> {
        self.set_element(0, column, value)
    }

    #[allow(missing_docs)]
    pub fn nr_rows(&self) -> usize {
        self.backend.nr_rows()
    }

    #[allow(missing_docs)]
    pub fn nr_columns(&self) -> usize {
        self.backend.nr_columns()
    }

    /// Number of nonzero coefficients in the constraints.
    pub fn nr_nonzeros(&self) -> usize {
        self.backend.nr_nonzeros()
    }

    /// Status of the latest solve, `SolveStatus::NotRun` if there was none.
    pub fn most_recent_status(&self) -> SolveStatus {
        self.backend.status()
    }

    /// Description of a status, as the backend words it.
    pub fn status_text(&self, status: SolveStatus) -> String {
        self.backend.status_text(status)
    }

    /// Optimize the model.
    pub fn solve(&mut self) -> Solution<'_, B> {
        let status = self.backend.solve();
        Solution::new(self, status)
    }

    /// The results of the latest solve.
    pub fn solution(&self) -> Solution<'_, B> {
        Solution::new(self, self.backend.status())
    }

    /// Read access to a row.
    pub fn row(&self, row: usize) -> Result<Row<'_, B>> {
        self.check_row(row)?;
        Ok(Row::new(self, row))
    }

    /// Write access to a row.
    pub fn row_mut(&mut self, row: usize) -> Result<RowMut<'_, B>> {
        self.check_row(row)?;
        Ok(RowMut::new(self, row))
    }

    /// Read access to a column.
    pub fn column(&self, column: usize) -> Result<Column<'_, B>> {
        self.check_column(column)?;
        Ok(Column::new(self, column))
    }

    /// Write access to a column.
    pub fn column_mut(&mut self, column: usize) -> Result<ColumnMut<'_, B>> {
        self.check_column(column)?;
        Ok(ColumnMut::new(self, column))
    }

    fn check_row(&self, row: usize) -> Result<()> {
        let nr_rows = self.backend.nr_rows();
        if (1..=nr_rows).contains(&row) {
            Ok(())
        } else {
            Err(Error::RowOutOfRange { index: row, nr_rows })
        }
    }

    fn check_column(&self, column: usize) -> Result<()> {
        let nr_columns = self.backend.nr_columns();
        if (1..=nr_columns).contains(&column) {
            Ok(())
        } else {
            Err(Error::ColumnOutOfRange { index: column, nr_columns })
        }
    }
}

impl Default for Solver<Engine> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<B: Backend> Drop for Solver<B> {
    fn drop(&mut self) {
        debug!(
            component = "solver",
            operation = "release",
            rows = self.backend.nr_rows() as u64,
            columns = self.backend.nr_columns() as u64,
            "Releasing backend"
        );
    }
}
