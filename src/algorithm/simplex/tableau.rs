//! # Tableau
//!
//! A dense simplex tableau: the constraint rows expressed in the current basis, the relative cost
//! row and the basis itself. Columns with an index of at least `nr_enterable_columns` may stay in
//! the basis but are never brought into it; this is how artificial variables are kept out during
//! the second phase while their relative costs still give the dual values.
use std::fmt;

use itertools::Itertools;

use crate::data::linear_program::standard_form::StandardForm;

/// Dense tableau over a `StandardForm`, extended with artificial columns where no initial basis
/// column was available.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau {
    /// Rows of `B^-1 A`, each followed by the value `B^-1 b`.
    rows: Vec<Vec<f64>>,
    /// Relative costs `c - c_B B^-1 A`, followed by minus the objective value.
    relative_costs: Vec<f64>,
    /// Column that is basic on each row.
    basis: Vec<usize>,
    /// Whether a column is basic.
    in_basis: Vec<bool>,
    /// Per row, the column that was a unit vector on that row in the original problem.
    unit_columns: Vec<usize>,
    /// Columns at or past this index are artificial.
    first_artificial: usize,
    /// Columns at or past this index are not allowed to enter the basis.
    nr_enterable_columns: usize,
    /// Tolerance for comparisons with zero.
    epsilon: f64,
    /// Number of pivots so far.
    iterations: u64,
}

impl Tableau {
    /// Create a tableau with a feasible basis, adding artificial variables where needed.
    ///
    /// The initial costs are zero; set them with `set_cost` or `set_artificial_cost`.
    pub fn new(standard_form: &StandardForm, epsilon: f64) -> Self {
        let nr_rows = standard_form.nr_rows();
        let first_artificial = standard_form.nr_columns();
        let nr_artificial = standard_form.initial_basis.iter().filter(|column| column.is_none()).count();
        let nr_columns = first_artificial + nr_artificial;

        let mut rows = Vec::with_capacity(nr_rows);
        let mut basis = Vec::with_capacity(nr_rows);
        let mut next_artificial = first_artificial;
        for (i, (constraint, b)) in standard_form.constraints.iter().zip(&standard_form.b).enumerate() {
            let mut row = Vec::with_capacity(nr_columns + 1);
            row.extend_from_slice(constraint);
            row.resize(nr_columns, 0_f64);
            row.push(*b);

            let basis_column = match standard_form.initial_basis[i] {
                Some(column) => column,
                None => {
                    let column = next_artificial;
                    next_artificial += 1;
                    row[column] = 1_f64;
                    column
                },
            };
            rows.push(row);
            basis.push(basis_column);
        }

        let mut in_basis = vec![false; nr_columns];
        for &column in &basis {
            in_basis[column] = true;
        }

        Self {
            rows,
            relative_costs: vec![0_f64; nr_columns + 1],
            unit_columns: basis.clone(),
            basis,
            in_basis,
            first_artificial,
            nr_enterable_columns: nr_columns,
            epsilon,
            iterations: 0,
        }
    }

    /// Cost one for each artificial variable, zero otherwise: the first phase objective.
    pub fn set_artificial_cost(&mut self) {
        let cost = (0..self.nr_columns())
            .map(|j| if j >= self.first_artificial { 1_f64 } else { 0_f64 })
            .collect::<Vec<_>>();
        self.set_cost(&cost);
    }

    /// Replace the cost function and compute the relative costs for the current basis.
    ///
    /// # Arguments
    ///
    /// * `cost`: Cost per column. Columns past its length, like artificial ones, have cost zero.
    pub fn set_cost(&mut self, cost: &[f64]) {
        let nr_columns = self.nr_columns();
        let mut relative_costs = (0..nr_columns)
            .map(|j| cost.get(j).copied().unwrap_or(0_f64))
            .collect::<Vec<_>>();
        relative_costs.push(0_f64);

        for (row, &basis_column) in self.rows.iter().zip(&self.basis) {
            let basis_cost = cost.get(basis_column).copied().unwrap_or(0_f64);
            if basis_cost != 0_f64 {
                for (relative_cost, value) in relative_costs.iter_mut().zip(row) {
                    *relative_cost -= basis_cost * value;
                }
            }
        }

        self.relative_costs = relative_costs;
    }

    /// Forbid artificial columns from entering the basis.
    pub fn close_artificial_columns(&mut self) {
        self.nr_enterable_columns = self.first_artificial;
    }

    /// Pivot a column into the basis on a row.
    ///
    /// # Arguments
    ///
    /// * `pivot_column`: Column to bring into the basis.
    /// * `pivot_row`: Row whose basis column leaves.
    pub fn bring_into_basis(&mut self, pivot_column: usize, pivot_row: usize) {
        debug_assert!(!self.is_in_basis(pivot_column));
        debug_assert!(self.rows[pivot_row][pivot_column].abs() > self.epsilon);

        let pivot_value = self.rows[pivot_row][pivot_column];
        for value in &mut self.rows[pivot_row] {
            *value /= pivot_value;
        }
        self.rows[pivot_row][pivot_column] = 1_f64;

        let pivot = self.rows[pivot_row].clone();
        for (i, row) in self.rows.iter_mut().enumerate() {
            if i != pivot_row {
                eliminate(row, &pivot, pivot_column);
            }
        }
        eliminate(&mut self.relative_costs, &pivot, pivot_column);

        self.update_basis_indices(pivot_row, pivot_column);
        self.iterations += 1;
    }

    fn update_basis_indices(&mut self, pivot_row: usize, pivot_column: usize) {
        let leaving = self.basis[pivot_row];
        self.in_basis[leaving] = false;
        self.in_basis[pivot_column] = true;
        self.basis[pivot_row] = pivot_column;
    }

    /// Row to pivot on when bringing a column into the basis, by the minimum ratio test.
    ///
    /// Ties are broken by the lowest index of the leaving basis column.
    ///
    /// # Return value
    ///
    /// `None` if no row limits the increase of the column, meaning the problem is unbounded.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        self.rows.iter().enumerate()
            .filter(|(_, row)| row[column] > self.epsilon)
            .map(|(i, row)| (i, row[self.nr_columns()] / row[column]))
            .min_by(|&(i, ratio_i), &(j, ratio_j)| {
                if (ratio_i - ratio_j).abs() <= self.epsilon {
                    self.basis[i].cmp(&self.basis[j])
                } else {
                    ratio_i.total_cmp(&ratio_j)
                }
            })
            .map(|(i, _)| i)
    }

    /// Remove artificial variables from the basis by pivots that don't change the solution.
    ///
    /// Should be called after the first phase found an artificial cost of zero. Artificial
    /// variables can only remain on rows that are linear combinations of other rows; their value is
    /// zero and stays zero.
    ///
    /// # Return value
    ///
    /// Rows that are redundant.
    pub fn remove_artificial_basis_variables(&mut self) -> Vec<usize> {
        let mut redundant = Vec::new();
        for row in 0..self.nr_rows() {
            if self.basis[row] < self.first_artificial {
                continue;
            }

            let replacement = (0..self.first_artificial)
                .filter(|&j| !self.is_in_basis(j))
                .find(|&j| self.rows[row][j].abs() > self.epsilon);
            match replacement {
                Some(column) => self.bring_into_basis(column, row),
                None => redundant.push(row),
            }
        }
        redundant
    }

    /// Relative cost of a column.
    pub fn relative_cost(&self, column: usize) -> f64 {
        self.relative_costs[column]
    }

    /// Whether a column is part of the current basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        self.in_basis[column]
    }

    /// Value of every column in the current basic solution, artificial columns excluded.
    pub fn current_bfs(&self) -> Vec<f64> {
        let mut values = vec![0_f64; self.first_artificial];
        for (row, &column) in self.rows.iter().zip(&self.basis) {
            if column < self.first_artificial {
                values[column] = row[self.nr_columns()];
            }
        }
        values
    }

    /// Dual value of each row, `c_B B^-1`.
    ///
    /// Read from the relative cost of the column that was a unit vector on the row: its cost is
    /// zero, so the relative cost is `-c_B B^-1 e_i`.
    pub fn dual_values(&self) -> Vec<f64> {
        self.unit_columns.iter().map(|&column| -self.relative_costs[column]).collect()
    }

    /// Cost of the current basic solution.
    pub fn objective_function_value(&self) -> f64 {
        -self.relative_costs[self.nr_columns()]
    }

    /// Whether all values are finite numbers.
    pub fn is_numerically_sound(&self) -> bool {
        self.rows.iter().flatten().chain(&self.relative_costs).all(|value| value.is_finite())
    }

    /// Number of constraint rows.
    pub fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, artificial columns included.
    pub fn nr_columns(&self) -> usize {
        self.in_basis.len()
    }

    /// Index of the first artificial column; equal to `nr_columns` if there are none.
    pub fn first_artificial(&self) -> usize {
        self.first_artificial
    }

    /// Number of columns that may be brought into the basis.
    pub fn nr_enterable_columns(&self) -> usize {
        self.nr_enterable_columns
    }

    /// Tolerance for comparisons with zero.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Number of pivots done on this tableau.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }
}

/// Subtract a multiple of the pivot row such that the pivot column becomes zero.
fn eliminate(row: &mut [f64], pivot: &[f64], pivot_column: usize) {
    let factor = row[pivot_column];
    if factor != 0_f64 {
        for (value, pivot_value) in row.iter_mut().zip(pivot) {
            *value -= factor * pivot_value;
        }
        row[pivot_column] = 0_f64;
    }
}

/// Check whether the tableau currently has a valid basic feasible solution.
///
/// Only used for debug purposes.
pub fn is_in_basic_feasible_solution_state(tableau: &Tableau) -> bool {
    let rhs = tableau.nr_columns();
    tableau.rows.iter().all(|row| row[rhs] >= -tableau.epsilon)
        && tableau.basis.iter().enumerate()
            .all(|(i, &column)| (tableau.rows[i][column] - 1_f64).abs() <= tableau.epsilon)
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cost\t{}", self.relative_costs.iter().map(|v| format!("{v:>8.3}")).join(" "))?;
        for (row, column) in self.rows.iter().zip(&self.basis) {
            writeln!(f, "x{column}\t{}", row.iter().map(|v| format!("{v:>8.3}")).join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test {
    use crate::algorithm::simplex::tableau::{is_in_basic_feasible_solution_state, Tableau};
    use crate::data::linear_program::standard_form::{RowOrigin, StandardForm};

    /// max x + 2y s.t. x + y <= 4, y <= 3, as a minimization with slacks.
    pub(crate) fn small_standard_form() -> StandardForm {
        StandardForm {
            constraints: vec![
                vec![1_f64, 1_f64, 1_f64, 0_f64],
                vec![0_f64, 1_f64, 0_f64, 1_f64],
            ],
            b: vec![4_f64, 3_f64],
            cost: vec![-1_f64, -2_f64, 0_f64, 0_f64],
            initial_basis: vec![Some(2), Some(3)],
            row_origin: vec![
                RowOrigin::Constraint { row: 0, sign: 1_f64 },
                RowOrigin::Constraint { row: 1, sign: 1_f64 },
            ],
            substitutions: Vec::new(),
        }
    }

    pub(crate) fn small_tableau() -> Tableau {
        let standard_form = small_standard_form();
        let mut tableau = Tableau::new(&standard_form, 1e-9);
        tableau.set_cost(&standard_form.cost);
        tableau
    }

    #[test]
    fn create_tableau() {
        let tableau = small_tableau();
        assert_eq!(tableau.nr_rows(), 2);
        assert_eq!(tableau.nr_columns(), 4);
        assert!(tableau.is_in_basis(2));
        assert!(tableau.is_in_basis(3));
        assert_eq!(tableau.relative_cost(1), -2_f64);
        assert_eq!(tableau.objective_function_value(), 0_f64);
        assert!(is_in_basic_feasible_solution_state(&tableau));
    }

    #[test]
    fn bring_into_basis() {
        let mut tableau = small_tableau();
        assert_eq!(tableau.select_primal_pivot_row(1), Some(1));
        tableau.bring_into_basis(1, 1);
        assert_eq!(tableau.current_bfs(), vec![0_f64, 3_f64, 1_f64, 0_f64]);
        assert_eq!(tableau.objective_function_value(), -6_f64);
        assert_eq!(tableau.relative_cost(3), 2_f64);
        assert_eq!(tableau.iterations(), 1);
        assert!(is_in_basic_feasible_solution_state(&tableau));
    }

    #[test]
    fn artificial_columns() {
        let mut standard_form = small_standard_form();
        standard_form.initial_basis[0] = None;
        let mut tableau = Tableau::new(&standard_form, 1e-9);
        assert_eq!(tableau.nr_columns(), 5);
        assert!(tableau.is_in_basis(4));

        tableau.set_artificial_cost();
        assert_eq!(tableau.objective_function_value(), 4_f64);
        assert_eq!(tableau.relative_cost(0), -1_f64);

        tableau.close_artificial_columns();
        assert_eq!(tableau.nr_enterable_columns(), 4);
    }

    #[test]
    fn unbounded_column_has_no_pivot_row() {
        let mut standard_form = small_standard_form();
        standard_form.constraints[0][0] = -1_f64;
        let tableau = Tableau::new(&standard_form, 1e-9);
        assert_eq!(tableau.select_primal_pivot_row(0), None);
    }
}
