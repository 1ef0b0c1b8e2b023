//! # Linear programs in standard form
//!
//! Minimize `<c, x>` subject to `Ax = b`, `x >= 0` and `b >= 0`, the form the simplex method
//! works on. Derived from a `GeneralForm` by shifting and splitting variables, adding slacks and
//! flipping rows with a negative right-hand side.
use itertools::Itertools;

use crate::data::linear_program::general_form::GeneralForm;

/// A linear program in standard form, together with the information needed to translate a
/// solution back.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardForm {
    /// Dense constraint rows, each `nr_columns` wide.
    pub(crate) constraints: Vec<Vec<f64>>,
    /// Right-hand sides, all nonnegative.
    pub(crate) b: Vec<f64>,
    /// Cost of each column, for minimization.
    pub(crate) cost: Vec<f64>,
    /// Per row, a column that is a unit vector on that row and can be part of the first basis.
    pub(crate) initial_basis: Vec<Option<usize>>,
    /// Per row, where it came from.
    pub(crate) row_origin: Vec<RowOrigin>,
    /// Per original variable, how to compute its value from the standard form columns.
    pub(crate) substitutions: Vec<Substitution>,
}

/// Which general form constraint a standard form row represents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowOrigin {
    /// Row of the general form, with the sign it was multiplied with to make `b` nonnegative.
    Constraint {
        /// Index in the general form.
        row: usize,
        /// Either `1` or `-1`.
        sign: f64,
    },
    /// An upper bound on a variable that has a lower bound as well.
    Bound,
}

/// `x = offset + sum_k sign_k * x_k` with all `x_k >= 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Substitution {
    /// Constant part.
    pub offset: f64,
    /// Standard form columns and their sign.
    pub parts: Vec<(usize, f64)>,
}

impl Substitution {
    /// Value of the original variable given the values of the standard form columns.
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        self.offset + self.parts.iter().map(|&(column, sign)| sign * values[column]).sum::<f64>()
    }
}

/// A row under construction: sparse coefficients and right-hand side after substitution.
struct PendingRow {
    coefficients: Vec<(usize, f64)>,
    b: f64,
    slack: Option<f64>,
    origin: RowOrigin,
}

impl GeneralForm {
    /// Convert this linear program into standard form.
    ///
    /// # Arguments
    ///
    /// * `infinity`: Values with at least this magnitude are treated as infinite.
    ///
    /// # Return value
    ///
    /// `None` if a row can trivially not be satisfied, because it is bounded by infinity from the
    /// wrong side (like `<a, x> <= -infinity`).
    pub fn to_standard_form(&self, infinity: f64) -> Option<StandardForm> {
        let is_infinite = |value: f64| value.abs() >= infinity;

        // Variables
        let mut nr_columns = 0;
        let mut substitutions = Vec::with_capacity(self.nr_columns());
        let mut pending = Vec::new();
        for column in &self.columns {
            let (lower, upper) = (column.lower_bound, column.upper_bound);
            let substitution = match (is_infinite(lower), is_infinite(upper)) {
                (false, upper_infinite) => {
                    let index = nr_columns;
                    nr_columns += 1;
                    if !upper_infinite {
                        pending.push(PendingRow {
                            coefficients: vec![(index, 1_f64)],
                            b: upper - lower,
                            slack: Some(1_f64),
                            origin: RowOrigin::Bound,
                        });
                    }
                    Substitution { offset: lower, parts: vec![(index, 1_f64)] }
                },
                (true, false) => {
                    let index = nr_columns;
                    nr_columns += 1;
                    Substitution { offset: upper, parts: vec![(index, -1_f64)] }
                },
                (true, true) => {
                    let (positive, negative) = (nr_columns, nr_columns + 1);
                    nr_columns += 2;
                    Substitution { offset: 0_f64, parts: vec![(positive, 1_f64), (negative, -1_f64)] }
                },
            };
            substitutions.push(substitution);
        }

        // Constraints
        for (row_index, row) in self.rows.iter().enumerate() {
            let coefficients = row.coefficients.iter()
                .flat_map(|&(column, value)| {
                    substitutions[column].parts.iter().map(move |&(part, sign)| (part, sign * value))
                })
                .collect::<Vec<_>>();
            let shift = row.coefficients.iter()
                .map(|&(column, value)| value * substitutions[column].offset)
                .sum::<f64>();
            let origin = RowOrigin::Constraint { row: row_index, sign: 1_f64 };

            let (lower, upper) = self.row_bounds(row_index);
            if lower == upper {
                if is_infinite(lower) {
                    return None;
                }
                pending.push(PendingRow { coefficients, b: lower - shift, slack: None, origin });
                continue;
            }
            if is_infinite(lower) && lower > 0_f64 || is_infinite(upper) && upper < 0_f64 {
                return None;
            }
            if !is_infinite(lower) {
                pending.push(PendingRow {
                    coefficients: coefficients.clone(),
                    b: lower - shift,
                    slack: Some(-1_f64),
                    origin,
                });
            }
            if !is_infinite(upper) {
                pending.push(PendingRow { coefficients, b: upper - shift, slack: Some(1_f64), origin });
            }
        }

        let nr_slacks = pending.iter().filter(|row| row.slack.is_some()).count();
        let width = nr_columns + nr_slacks;

        let mut constraints = Vec::with_capacity(pending.len());
        let mut b = Vec::with_capacity(pending.len());
        let mut initial_basis = Vec::with_capacity(pending.len());
        let mut row_origin = Vec::with_capacity(pending.len());
        let mut next_slack = nr_columns;
        for PendingRow { coefficients, b: value, slack, origin } in pending {
            let sign = if value < 0_f64 { -1_f64 } else { 1_f64 };

            let mut dense = vec![0_f64; width];
            for (column, coefficient) in coefficients {
                dense[column] += sign * coefficient;
            }
            let basis_column = slack.and_then(|slack_sign| {
                let column = next_slack;
                next_slack += 1;
                dense[column] = sign * slack_sign;
                (dense[column] > 0_f64).then_some(column)
            });

            constraints.push(dense);
            b.push(sign * value);
            initial_basis.push(basis_column);
            row_origin.push(match origin {
                RowOrigin::Constraint { row, .. } => RowOrigin::Constraint { row, sign },
                RowOrigin::Bound => RowOrigin::Bound,
            });
        }

        let mut cost = vec![0_f64; width];
        let direction = self.objective.sign();
        for &(column, value) in &self.cost {
            for &(part, sign) in &substitutions[column].parts {
                cost[part] += direction * sign * value;
            }
        }

        debug_assert!(b.iter().all(|&value| value >= 0_f64));
        debug_assert!(constraints.iter().map(Vec::len).all_equal());

        Some(StandardForm { constraints, b, cost, initial_basis, row_origin, substitutions })
    }
}

impl StandardForm {
    /// The number of rows.
    pub fn nr_rows(&self) -> usize {
        self.b.len()
    }

    /// The number of columns, slacks included.
    pub fn nr_columns(&self) -> usize {
        self.cost.len()
    }
}
