//! # Backend engines
//!
//! The operations a linear programming engine offers to the solver facade. The contract follows the
//! conventions of sparse matrix based engines like lp_solve:
//!
//! * Rows and columns are numbered from 1. Where a single index addresses either the objective
//! function or a constraint, 0 is the objective function.
//! * Sparse data is passed as a count, a slice of values and a slice of indices. Only the first
//! `count` elements of both slices are read.
//! * Dense slices are numbered from 0 and have one element per column (or row).
//! * Rejected operations return `false` and leave the model untouched; they are never errors.
use tracing::warn;

use crate::data::linear_algebra::sparse_from_dense;
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::backend::status::SolveStatus;

pub mod config;
pub mod engine;
pub mod status;

/// A linear programming engine driven through sparse rows.
///
/// The dense and text variants of the model building operations have default implementations in
/// terms of the sparse ones.
pub trait Backend {
    /// Append a constraint.
    ///
    /// # Arguments
    ///
    /// * `count`: Number of nonzero coefficients.
    /// * `coefficients`: Coefficient of each listed column.
    /// * `column_indices`: Columns, numbered from 1. Duplicates are allowed and their coefficients
    /// added together.
    /// * `constraint_type`: Relation between the row and the right-hand side.
    /// * `right_hand_side`: Constant the row is compared with.
    ///
    /// # Return value
    ///
    /// Whether the constraint was added.
    fn append_constraint(
        &mut self,
        count: usize,
        coefficients: &[f64],
        column_indices: &[usize],
        constraint_type: ConstraintType,
        right_hand_side: f64,
    ) -> bool;

    /// Replace all coefficients of an existing constraint.
    fn set_row(&mut self, row: usize, count: usize, coefficients: &[f64], column_indices: &[usize]) -> bool;

    /// Replace all coefficients of the objective function.
    fn set_objective(&mut self, count: usize, coefficients: &[f64], column_indices: &[usize]) -> bool;

    /// Dense coefficients of a row; row 0 is the objective function.
    fn row_values(&self, row: usize) -> Option<Vec<f64>>;

    /// Append a column.
    ///
    /// # Arguments
    ///
    /// * `count`: Number of nonzero values.
    /// * `values`: Value of the column in each listed row.
    /// * `row_indices`: Rows, numbered from 1; row 0 is the objective function.
    fn append_column(&mut self, count: usize, values: &[f64], row_indices: &[usize]) -> bool;

    /// Replace all values of an existing column, its cost included.
    fn set_column(&mut self, column: usize, count: usize, values: &[f64], row_indices: &[usize]) -> bool;

    /// Dense values of a column; element 0 is its cost, element `i` its coefficient in row `i`.
    fn column_values(&self, column: usize) -> Option<Vec<f64>>;

    /// Delete a column; the columns after it shift down by one.
    fn delete_column(&mut self, column: usize) -> bool;

    /// Delete a constraint; the rows after it shift down by one.
    fn delete_constraint(&mut self, row: usize) -> bool;

    /// Switch the mode in which rows are added efficiently, while other edits are refused.
    ///
    /// # Return value
    ///
    /// Whether the mode changed.
    fn set_add_row_mode(&mut self, enabled: bool) -> bool;

    /// Whether rows are being added in bulk.
    fn is_add_row_mode(&self) -> bool;

    /// Single coefficient; row 0 is the objective function.
    fn element(&self, row: usize, column: usize) -> Option<f64>;

    /// Write a single coefficient; row 0 is the objective function.
    fn set_element(&mut self, row: usize, column: usize, value: f64) -> bool;

    /// Right-hand side of a constraint.
    fn right_hand_side(&self, row: usize) -> Option<f64>;

    /// Write the right-hand side of a constraint.
    fn set_right_hand_side(&mut self, row: usize, value: f64) -> bool;

    /// Write the right-hand sides of all constraints, from a dense slice with one value per row.
    fn set_right_hand_side_vec(&mut self, values: &[f64]) -> bool {
        if values.len() != self.nr_rows() {
            warn!(
                component = "backend",
                operation = "set_rh_vec",
                expected = self.nr_rows(),
                got = values.len(),
                "Right-hand side vector has the wrong length"
            );
            return false;
        }

        (1..=self.nr_rows()).zip(values).all(|(row, &value)| self.set_right_hand_side(row, value))
    }

    /// Write the right-hand sides of all constraints, given as whitespace separated values.
    fn set_right_hand_side_str(&mut self, values: &str) -> bool {
        match parse_dense(values, "str_set_rh_vec") {
            Some(values) => self.set_right_hand_side_vec(&values),
            None => false,
        }
    }

    /// Relation of a constraint.
    fn constraint_type(&self, row: usize) -> Option<ConstraintType>;

    /// Change the relation of a constraint.
    fn set_constraint_type(&mut self, row: usize, constraint_type: ConstraintType) -> bool;

    /// Width of the interval a constraint may take; `None` if the row has no range.
    fn range(&self, row: usize) -> Option<f64>;

    /// Give a constraint a range.
    fn set_range(&mut self, row: usize, range: f64) -> bool;

    /// Name of a row; a generated `R{row}` if none was given.
    fn row_name(&self, row: usize) -> Option<String>;

    /// Name a row.
    fn set_row_name(&mut self, row: usize, name: &str) -> bool;

    /// Name of a column; a generated `C{column}` if none was given.
    fn column_name(&self, column: usize) -> Option<String>;

    /// Name a column.
    fn set_column_name(&mut self, column: usize, name: &str) -> bool;

    /// Index of the row or column with a name.
    fn name_index(&self, name: &str, is_row: bool) -> Option<usize>;

    /// Name of the model.
    fn lp_name(&self) -> String;

    /// Name the model.
    fn set_lp_name(&mut self, name: &str) -> bool;

    /// Lower and upper bound of a column.
    fn bounds(&self, column: usize) -> Option<(f64, f64)>;

    /// Write the lower and upper bound of a column; infinite values are allowed.
    fn set_bounds(&mut self, column: usize, lower: f64, upper: f64) -> bool;

    /// Make a column free: both bounds infinite.
    fn set_unbounded(&mut self, column: usize) -> bool {
        let infinity = self.infinity();
        self.set_bounds(column, -infinity, infinity)
    }

    /// Whether a column is free.
    fn is_unbounded(&self, column: usize) -> bool {
        self.bounds(column)
            .is_some_and(|(lower, upper)| self.is_infinite(lower) && lower < 0_f64 && self.is_infinite(upper))
    }

    /// Whether a column can only take nonpositive values.
    fn is_negative(&self, column: usize) -> bool {
        self.bounds(column).is_some_and(|(lower, upper)| upper <= 0_f64 && lower < 0_f64)
    }

    /// Direction of optimization.
    fn objective_sense(&self) -> Objective;

    /// Change the direction of optimization.
    fn set_objective_sense(&mut self, objective: Objective);

    /// Value treated as infinite.
    fn infinity(&self) -> f64;

    /// Change the value treated as infinite.
    fn set_infinity(&mut self, infinity: f64);

    /// Whether a value is treated as infinite.
    fn is_infinite(&self, value: f64) -> bool {
        value.abs() >= self.infinity()
    }

    #[allow(missing_docs)]
    fn nr_rows(&self) -> usize;

    #[allow(missing_docs)]
    fn nr_columns(&self) -> usize;

    /// Number of nonzero coefficients in the constraints.
    fn nr_nonzeros(&self) -> usize;

    /// Optimize the model.
    fn solve(&mut self) -> SolveStatus;

    /// Status of the most recent solve.
    fn status(&self) -> SolveStatus;

    /// Human readable description of a status.
    fn status_text(&self, status: SolveStatus) -> String {
        status.description().to_string()
    }

    /// Objective function value of the most recent solution.
    fn objective_value(&self) -> Option<f64>;

    /// Values of the most recent solution: objective function, then each row, then each column.
    fn primal_solution(&self) -> Option<&[f64]>;

    /// Dual value of each row in the most recent solution.
    fn dual_solution(&self) -> Option<&[f64]>;

    /// Reduced cost of each column in the most recent solution.
    fn reduced_costs(&self) -> Option<&[f64]>;

    /// Number of simplex iterations in the most recent solve.
    fn iterations(&self) -> u64;

    /// Whether values satisfy all bounds and constraints.
    ///
    /// # Arguments
    ///
    /// * `values`: Laid out as `primal_solution`: objective function, rows, columns.
    /// * `threshold`: Allowed violation.
    fn is_feasible(&self, values: &[f64], threshold: f64) -> bool;

    /// Append a constraint given densely, one coefficient per column.
    fn append_constraint_dense(&mut self, row: &[f64], constraint_type: ConstraintType, right_hand_side: f64) -> bool {
        let (indices, coefficients): (Vec<_>, Vec<_>) = sparse_from_dense(row, 1).into_iter().unzip();
        self.append_constraint(indices.len(), &coefficients, &indices, constraint_type, right_hand_side)
    }

    /// Append a constraint given as text: whitespace separated coefficients, one per column.
    fn append_constraint_str(&mut self, row: &str, constraint_type: ConstraintType, right_hand_side: f64) -> bool {
        match parse_dense(row, "add_constraint_str") {
            Some(values) => self.append_constraint_dense(&values, constraint_type, right_hand_side),
            None => false,
        }
    }

    /// Replace all coefficients of a row, given densely.
    fn set_row_dense(&mut self, row: usize, values: &[f64]) -> bool {
        let (indices, coefficients): (Vec<_>, Vec<_>) = sparse_from_dense(values, 1).into_iter().unzip();
        self.set_row(row, indices.len(), &coefficients, &indices)
    }

    /// Replace the objective function, given densely.
    fn set_objective_dense(&mut self, values: &[f64]) -> bool {
        let (indices, coefficients): (Vec<_>, Vec<_>) = sparse_from_dense(values, 1).into_iter().unzip();
        self.set_objective(indices.len(), &coefficients, &indices)
    }

    /// Replace the objective function, given as text.
    fn set_objective_str(&mut self, values: &str) -> bool {
        match parse_dense(values, "set_obj_fn_str") {
            Some(values) => self.set_objective_dense(&values),
            None => false,
        }
    }

    /// Append a column given densely: its cost followed by one value per row.
    fn append_column_dense(&mut self, values: &[f64]) -> bool {
        let (indices, values): (Vec<_>, Vec<_>) = sparse_from_dense(values, 0).into_iter().unzip();
        self.append_column(indices.len(), &values, &indices)
    }

    /// Append a column given as text: its cost followed by one value per row.
    fn append_column_str(&mut self, values: &str) -> bool {
        match parse_dense(values, "add_column_str") {
            Some(values) => self.append_column_dense(&values),
            None => false,
        }
    }
}

/// Read whitespace separated numbers.
///
/// Failures are logged and reported as `None`.
pub(crate) fn parse_dense(text: &str, operation: &'static str) -> Option<Vec<f64>> {
    match text.split_whitespace().map(str::parse::<f64>).collect::<Result<Vec<_>, _>>() {
        Ok(values) => Some(values),
        Err(error) => {
            warn!(component = "backend", operation, %error, text, "Could not parse numbers");
            None
        },
    }
}
