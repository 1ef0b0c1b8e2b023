//! # Linear programs in "general form"
//!
//! Data structure for manipulation of linear programs, as a backend engine stores them while a
//! model is being built. Rows may be of any constraint type and variables may have any bounds.
//!
//! Indices in this module are zero based; translating from the one based numbering of the backend
//! contract happens in the engine.
use enum_map::EnumMap;
use index_utils::{remove_indices, remove_sparse_indices};

use crate::data::linear_algebra::{is_sorted_sparse, sparse_get, sparse_set, SparseTupleVec};
use crate::data::linear_program::elements::{ConstraintType, Objective};

/// A linear program in general form.
///
/// Rows are stored row major: rows are added one at a time while building a model.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralForm {
    /// Which direction does the objective function go?
    pub(crate) objective: Objective,
    /// Coefficients of the cost function, sorted by column.
    pub(crate) cost: SparseTupleVec<f64>,
    /// All constraints, ordered by index.
    pub(crate) rows: Vec<Row>,
    /// Information about all variables, ordered by index.
    pub(crate) columns: Vec<Column>,
}

/// A single constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Nonzero coefficients, sorted by column.
    pub coefficients: SparseTupleVec<f64>,
    #[allow(missing_docs)]
    pub constraint_type: ConstraintType,
    #[allow(missing_docs)]
    pub right_hand_side: f64,
    /// Width of the interval the row value may take, see `GeneralForm::row_bounds`.
    pub range: Option<f64>,
    /// Name given by the user, if any.
    pub name: Option<String>,
}

impl Row {
    /// An empty row `0 <= 0`.
    pub fn empty() -> Self {
        Self::new(Vec::new(), ConstraintType::Less, 0_f64)
    }

    /// A row without range or name.
    pub fn new(coefficients: SparseTupleVec<f64>, constraint_type: ConstraintType, right_hand_side: f64) -> Self {
        debug_assert!(is_sorted_sparse(&coefficients));

        Self { coefficients, constraint_type, right_hand_side, range: None, name: None }
    }
}

/// Information about a variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    #[allow(missing_docs)]
    pub lower_bound: f64,
    #[allow(missing_docs)]
    pub upper_bound: f64,
    /// Name given by the user, if any.
    pub name: Option<String>,
}

impl Column {
    /// A nonnegative variable: `0 <= x <= infinity`.
    pub fn nonnegative(infinity: f64) -> Self {
        Self { lower_bound: 0_f64, upper_bound: infinity, name: None }
    }
}

impl GeneralForm {
    /// A model with empty rows and nonnegative, unnamed columns.
    pub fn new(nr_rows: usize, nr_columns: usize, infinity: f64) -> Self {
        Self {
            objective: Objective::default(),
            cost: Vec::new(),
            rows: vec![Row::empty(); nr_rows],
            columns: vec![Column::nonnegative(infinity); nr_columns],
        }
    }

    /// The number of constraints in this linear program.
    pub fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    /// The number of variables in this linear program.
    pub fn nr_columns(&self) -> usize {
        self.columns.len()
    }

    /// The number of nonzero coefficients in the constraints.
    pub fn nr_nonzeros(&self) -> usize {
        self.rows.iter().map(|row| row.coefficients.len()).sum()
    }

    /// How many rows of each type there are.
    pub fn constraint_type_counts(&self) -> EnumMap<ConstraintType, usize> {
        let mut counts = EnumMap::default();
        for row in &self.rows {
            counts[row.constraint_type] += 1;
        }
        counts
    }

    /// Append a variable, with its coefficients in the cost function and the existing rows.
    ///
    /// # Arguments
    ///
    /// * `cost`: Coefficient in the cost function.
    /// * `values`: Sorted (row, value) tuples.
    pub fn push_column(&mut self, cost: f64, values: &[(usize, f64)], column: Column) {
        debug_assert!(values.iter().all(|&(row, _)| row < self.nr_rows()));

        let index = self.nr_columns();
        self.columns.push(column);
        sparse_set(&mut self.cost, index, cost);
        for &(row, value) in values {
            // The new column has the highest index, so it goes at the end of each row.
            sparse_set(&mut self.rows[row].coefficients, index, value);
        }
    }

    /// Replace all coefficients of a column, including its cost.
    pub fn set_column(&mut self, column: usize, cost: f64, values: &[(usize, f64)]) {
        sparse_set(&mut self.cost, column, cost);
        let mut values = values.iter().peekable();
        for (row_index, row) in self.rows.iter_mut().enumerate() {
            let value = match values.peek() {
                Some(&&(i, value)) if i == row_index => {
                    values.next();
                    value
                },
                _ => 0_f64,
            };
            sparse_set(&mut row.coefficients, column, value);
        }
    }

    /// Dense coefficients of a column; element 0 is the cost.
    pub fn column_values(&self, column: usize) -> Vec<f64> {
        let mut values = Vec::with_capacity(1 + self.nr_rows());
        values.push(sparse_get(&self.cost, column));
        values.extend(self.rows.iter().map(|row| sparse_get(&row.coefficients, column)));
        values
    }

    /// Delete a variable, shifting the indices of all later columns.
    pub fn remove_column(&mut self, column: usize) {
        remove_indices(&mut self.columns, &[column]);
        remove_sparse_indices(&mut self.cost, &[column]);
        for row in &mut self.rows {
            remove_sparse_indices(&mut row.coefficients, &[column]);
        }
    }

    /// Delete a constraint, shifting the indices of all later rows.
    pub fn remove_row(&mut self, row: usize) {
        remove_indices(&mut self.rows, &[row]);
    }

    /// Coefficient at a position, row 0 being the cost function.
    pub fn element(&self, row: usize, column: usize) -> f64 {
        match row {
            0 => sparse_get(&self.cost, column),
            _ => sparse_get(&self.rows[row - 1].coefficients, column),
        }
    }

    /// Write a coefficient at a position, row 0 being the cost function.
    pub fn set_element(&mut self, row: usize, column: usize, value: f64) {
        match row {
            0 => sparse_set(&mut self.cost, column, value),
            _ => sparse_set(&mut self.rows[row - 1].coefficients, column, value),
        }
    }

    /// Lower and upper limit on the value of a row.
    ///
    /// Without a range, one side is infinite. A range `r` on a `<=` row with right-hand side `b`
    /// gives `b - |r| <= <a, x> <= b`, on a `>=` row it gives `b <= <a, x> <= b + |r|`. Equality rows
    /// ignore ranges.
    pub fn row_bounds(&self, row: usize) -> (f64, f64) {
        let Row { constraint_type, right_hand_side: b, range, .. } = &self.rows[row];
        match (constraint_type, range) {
            (ConstraintType::Less, None) => (f64::NEG_INFINITY, *b),
            (ConstraintType::Less, Some(r)) => (b - r.abs(), *b),
            (ConstraintType::Greater, None) => (*b, f64::INFINITY),
            (ConstraintType::Greater, Some(r)) => (*b, b + r.abs()),
            (ConstraintType::Equal, _) => (*b, *b),
        }
    }
}
