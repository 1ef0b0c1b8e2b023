//! # Simplex engine
//!
//! The backend shipped with this crate. The model is kept in general form, row by row; every solve
//! converts it to standard form and runs the two phase simplex method on a dense tableau.
use std::fmt;
use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::algorithm::{BasicSolution, Interrupt, OptimizationResult, SolveRelaxation, Tolerances};
use crate::algorithm::simplex::strategy::pivot_rule::FirstProfitable;
use crate::backend::Backend;
use crate::backend::config::{EngineConfig, Verbosity};
use crate::backend::status::SolveStatus;
use crate::data::linear_algebra::{collect_sparse, inner_product, sparse_get, SparseTupleVec};
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::linear_program::general_form::{Column, GeneralForm, Row};
use crate::data::linear_program::standard_form::{RowOrigin, StandardForm};

/// Called before every pivot; returning `true` stops the solve.
pub type AbortCallback = Box<dyn FnMut() -> bool>;

/// An in memory linear program with a simplex solver.
pub struct Engine {
    config: EngineConfig,
    model: GeneralForm,
    lp_name: Option<String>,
    add_row_mode: bool,
    status: SolveStatus,
    solution: Option<EngineSolution>,
    iterations: u64,
    abort: Option<AbortCallback>,
}

/// Everything known about the most recent solution, in the numbering of the model.
#[derive(Debug, Clone, PartialEq)]
struct EngineSolution {
    /// Objective function value, row activities and column values.
    primal: Vec<f64>,
    duals: Vec<f64>,
    reduced_costs: Vec<f64>,
}

impl Engine {
    /// A model with `nr_rows` empty constraints and `nr_columns` nonnegative columns.
    pub fn new(nr_rows: usize, nr_columns: usize) -> Self {
        Self::with_config(nr_rows, nr_columns, EngineConfig::default())
    }

    /// A model with `nr_rows` empty constraints and `nr_columns` nonnegative columns.
    pub fn with_config(nr_rows: usize, nr_columns: usize, config: EngineConfig) -> Self {
        debug!(
            component = "engine",
            operation = "init",
            rows = nr_rows as u64,
            columns = nr_columns as u64,
            "Creating model"
        );

        Self {
            model: GeneralForm::new(nr_rows, nr_columns, config.infinity),
            config,
            lp_name: None,
            add_row_mode: false,
            status: SolveStatus::NotRun,
            solution: None,
            iterations: 0,
            abort: None,
        }
    }

    #[allow(missing_docs)]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace the configuration; the value treated as infinite is kept in sync with the model.
    pub fn set_config(&mut self, config: EngineConfig) {
        self.set_infinity(config.infinity);
        self.config = config;
    }

    /// Install a callback that can stop a running solve.
    pub fn set_abort(&mut self, callback: impl FnMut() -> bool + 'static) {
        self.abort = Some(Box::new(callback));
    }

    /// Remove the abort callback.
    pub fn clear_abort(&mut self) {
        self.abort = None;
    }

    /// The model in its internal representation.
    pub fn general_form(&self) -> &GeneralForm {
        &self.model
    }

    /// Forget the most recent solution; called whenever the model changes.
    fn invalidate(&mut self) {
        if self.solution.is_some() || self.status != SolveStatus::NotRun {
            debug!(component = "engine", operation = "invalidate", previous = %self.status, "Model changed, discarding solution");
        }
        self.status = SolveStatus::NotRun;
        self.solution = None;
        self.iterations = 0;
    }

    /// Translate a one based row number, logging when it doesn't exist.
    fn row(&self, row: usize, operation: &'static str) -> Option<usize> {
        if (1..=self.model.nr_rows()).contains(&row) {
            Some(row - 1)
        } else {
            warn!(component = "engine", operation, row = row as u64, "Row does not exist");
            None
        }
    }

    /// Translate a one based column number, logging when it doesn't exist.
    fn column(&self, column: usize, operation: &'static str) -> Option<usize> {
        if (1..=self.model.nr_columns()).contains(&column) {
            Some(column - 1)
        } else {
            warn!(component = "engine", operation, column = column as u64, "Column does not exist");
            None
        }
    }

    /// Refuse an operation that is not allowed while adding rows in bulk.
    fn outside_row_mode(&self, operation: &'static str) -> bool {
        if self.add_row_mode {
            warn!(component = "engine", operation, "Not allowed in row adding mode");
        }
        !self.add_row_mode
    }

    /// Read the sparse arguments of a backend call.
    ///
    /// # Arguments
    ///
    /// * `first`: Lowest valid index.
    /// * `last`: Highest valid index.
    /// * `shift`: Subtracted from each index.
    ///
    /// # Return value
    ///
    /// Sorted tuples without duplicates, or `None` if the count or an index is invalid.
    fn sparse_arguments(
        count: usize,
        values: &[f64],
        indices: &[usize],
        (first, last, shift): (usize, usize, usize),
        operation: &'static str,
    ) -> Option<SparseTupleVec<f64>> {
        if count > values.len() || count > indices.len() {
            warn!(
                component = "engine",
                operation,
                count = count as u64,
                values = values.len() as u64,
                indices = indices.len() as u64,
                "Count exceeds the given data"
            );
            return None;
        }
        if let Some(&index) = indices[..count].iter().find(|&&index| index < first || index > last) {
            warn!(component = "engine", operation, index = index as u64, "Index does not exist");
            return None;
        }

        Some(collect_sparse(indices[..count].iter().map(|&index| index - shift).zip(values[..count].iter().copied())))
    }

    fn nr_columns_range(&self) -> (usize, usize, usize) {
        (1, self.model.nr_columns(), 1)
    }

    fn control(&mut self, started: Instant) -> impl FnMut(u64, f64) -> Option<Interrupt> + '_ {
        let deadline = self.config.time_limit.map(|limit| started + limit);
        let trace_pivots = self.config.verbosity >= Verbosity::Full;
        let abort = &mut self.abort;

        move |iteration: u64, objective: f64| {
            if trace_pivots {
                trace!(component = "engine", operation = "pivot", iteration, objective, "Iteration");
            }
            if abort.as_mut().is_some_and(|abort| abort()) {
                Some(Interrupt::Aborted)
            } else if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                Some(Interrupt::TimeLimit)
            } else {
                None
            }
        }
    }

    /// Values of a standard form solution in terms of the model.
    fn translate(&self, standard_form: &StandardForm, solution: &BasicSolution) -> EngineSolution {
        let values = standard_form.substitutions.iter()
            .map(|substitution| substitution.evaluate(&solution.values))
            .collect::<Vec<_>>();

        let mut primal = Vec::with_capacity(1 + self.model.nr_rows() + self.model.nr_columns());
        primal.push(inner_product(&self.model.cost, &values));
        primal.extend(self.model.rows.iter().map(|row| inner_product(&row.coefficients, &values)));
        primal.extend_from_slice(&values);

        // The standard form minimizes and may have flipped rows; undo both
        let direction = self.model.objective.sign();
        let mut duals = vec![0_f64; self.model.nr_rows()];
        for (origin, dual) in standard_form.row_origin.iter().zip(&solution.duals) {
            if let RowOrigin::Constraint { row, sign } = origin {
                duals[*row] += direction * sign * dual;
            }
        }

        let mut reduced_costs = (0..self.model.nr_columns())
            .map(|j| sparse_get(&self.model.cost, j))
            .collect::<Vec<_>>();
        for (row, dual) in self.model.rows.iter().zip(&duals) {
            for &(j, value) in &row.coefficients {
                reduced_costs[j] -= dual * value;
            }
        }

        EngineSolution { primal, duals, reduced_costs }
    }
}

impl Backend for Engine {
    fn append_constraint(
        &mut self,
        count: usize,
        coefficients: &[f64],
        column_indices: &[usize],
        constraint_type: ConstraintType,
        right_hand_side: f64,
    ) -> bool {
        let range = self.nr_columns_range();
        match Self::sparse_arguments(count, coefficients, column_indices, range, "add_constraint") {
            Some(coefficients) => {
                self.model.rows.push(Row::new(coefficients, constraint_type, right_hand_side));
                self.invalidate();
                true
            },
            None => false,
        }
    }

    fn set_row(&mut self, row: usize, count: usize, coefficients: &[f64], column_indices: &[usize]) -> bool {
        if !self.outside_row_mode("set_row") {
            return false;
        }
        let Some(row) = self.row(row, "set_row") else { return false };
        let range = self.nr_columns_range();
        match Self::sparse_arguments(count, coefficients, column_indices, range, "set_row") {
            Some(coefficients) => {
                self.model.rows[row].coefficients = coefficients;
                self.invalidate();
                true
            },
            None => false,
        }
    }

    fn set_objective(&mut self, count: usize, coefficients: &[f64], column_indices: &[usize]) -> bool {
        let range = self.nr_columns_range();
        match Self::sparse_arguments(count, coefficients, column_indices, range, "set_obj_fnex") {
            Some(cost) => {
                self.model.cost = cost;
                self.invalidate();
                true
            },
            None => false,
        }
    }

    fn row_values(&self, row: usize) -> Option<Vec<f64>> {
        let coefficients = match row {
            0 => &self.model.cost,
            _ => &self.model.rows[self.row(row, "get_row")?].coefficients,
        };

        let mut values = vec![0_f64; self.model.nr_columns()];
        for &(j, value) in coefficients {
            values[j] = value;
        }
        Some(values)
    }

    fn append_column(&mut self, count: usize, values: &[f64], row_indices: &[usize]) -> bool {
        if !self.outside_row_mode("add_column") {
            return false;
        }
        let range = (0, self.model.nr_rows(), 0);
        let Some(values) = Self::sparse_arguments(count, values, row_indices, range, "add_column") else {
            return false;
        };

        let (cost, rows) = split_cost(values);
        self.model.push_column(cost, &rows, Column::nonnegative(self.config.infinity));
        self.invalidate();
        true
    }

    fn set_column(&mut self, column: usize, count: usize, values: &[f64], row_indices: &[usize]) -> bool {
        if !self.outside_row_mode("set_column") {
            return false;
        }
        let Some(column) = self.column(column, "set_column") else { return false };
        let range = (0, self.model.nr_rows(), 0);
        let Some(values) = Self::sparse_arguments(count, values, row_indices, range, "set_column") else {
            return false;
        };

        let (cost, rows) = split_cost(values);
        self.model.set_column(column, cost, &rows);
        self.invalidate();
        true
    }

    fn column_values(&self, column: usize) -> Option<Vec<f64>> {
        let column = self.column(column, "get_column")?;
        Some(self.model.column_values(column))
    }

    fn delete_column(&mut self, column: usize) -> bool {
        if !self.outside_row_mode("del_column") {
            return false;
        }
        let Some(column) = self.column(column, "del_column") else { return false };
        self.model.remove_column(column);
        self.invalidate();
        true
    }

    fn delete_constraint(&mut self, row: usize) -> bool {
        if !self.outside_row_mode("del_constraint") {
            return false;
        }
        let Some(row) = self.row(row, "del_constraint") else { return false };
        self.model.remove_row(row);
        self.invalidate();
        true
    }

    fn set_add_row_mode(&mut self, enabled: bool) -> bool {
        let changed = self.add_row_mode != enabled;
        if changed {
            debug!(component = "engine", operation = "set_add_rowmode", enabled, "Row adding mode changed");
        }
        self.add_row_mode = enabled;
        changed
    }

    fn is_add_row_mode(&self) -> bool {
        self.add_row_mode
    }

    fn element(&self, row: usize, column: usize) -> Option<f64> {
        if row > 0 {
            self.row(row, "get_mat")?;
        }
        let column = self.column(column, "get_mat")?;
        Some(self.model.element(row, column))
    }

    fn set_element(&mut self, row: usize, column: usize, value: f64) -> bool {
        if !self.outside_row_mode("set_mat") {
            return false;
        }
        if row > 0 && self.row(row, "set_mat").is_none() {
            return false;
        }
        let Some(column) = self.column(column, "set_mat") else { return false };
        self.model.set_element(row, column, value);
        self.invalidate();
        true
    }

    fn right_hand_side(&self, row: usize) -> Option<f64> {
        Some(self.model.rows[self.row(row, "get_rh")?].right_hand_side)
    }

    fn set_right_hand_side(&mut self, row: usize, value: f64) -> bool {
        let Some(row) = self.row(row, "set_rh") else { return false };
        self.model.rows[row].right_hand_side = value;
        self.invalidate();
        true
    }

    fn constraint_type(&self, row: usize) -> Option<ConstraintType> {
        Some(self.model.rows[self.row(row, "get_constr_type")?].constraint_type)
    }

    fn set_constraint_type(&mut self, row: usize, constraint_type: ConstraintType) -> bool {
        let Some(row) = self.row(row, "set_constr_type") else { return false };
        self.model.rows[row].constraint_type = constraint_type;
        self.invalidate();
        true
    }

    fn range(&self, row: usize) -> Option<f64> {
        self.model.rows[self.row(row, "get_rh_range")?].range
    }

    fn set_range(&mut self, row: usize, range: f64) -> bool {
        let Some(row) = self.row(row, "set_rh_range") else { return false };
        self.model.rows[row].range = if self.is_infinite(range) { None } else { Some(range) };
        self.invalidate();
        true
    }

    fn row_name(&self, row: usize) -> Option<String> {
        let index = self.row(row, "get_row_name")?;
        Some(self.model.rows[index].name.clone().unwrap_or_else(|| format!("R{row}")))
    }

    fn set_row_name(&mut self, row: usize, name: &str) -> bool {
        let Some(row) = self.row(row, "set_row_name") else { return false };
        self.model.rows[row].name = Some(name.to_string());
        true
    }

    fn column_name(&self, column: usize) -> Option<String> {
        let index = self.column(column, "get_col_name")?;
        Some(self.model.columns[index].name.clone().unwrap_or_else(|| format!("C{column}")))
    }

    fn set_column_name(&mut self, column: usize, name: &str) -> bool {
        let Some(column) = self.column(column, "set_col_name") else { return false };
        self.model.columns[column].name = Some(name.to_string());
        true
    }

    fn name_index(&self, name: &str, is_row: bool) -> Option<usize> {
        if is_row {
            (1..=self.nr_rows()).find(|&row| self.row_name(row).as_deref() == Some(name))
        } else {
            (1..=self.nr_columns()).find(|&column| self.column_name(column).as_deref() == Some(name))
        }
    }

    fn lp_name(&self) -> String {
        self.lp_name.clone().unwrap_or_else(|| "Unnamed".to_string())
    }

    fn set_lp_name(&mut self, name: &str) -> bool {
        self.lp_name = Some(name.to_string());
        true
    }

    fn bounds(&self, column: usize) -> Option<(f64, f64)> {
        let Column { lower_bound, upper_bound, .. } = &self.model.columns[self.column(column, "get_bounds")?];
        Some((*lower_bound, *upper_bound))
    }

    fn set_bounds(&mut self, column: usize, lower: f64, upper: f64) -> bool {
        let Some(column) = self.column(column, "set_bounds") else { return false };
        if lower > upper {
            warn!(component = "engine", operation = "set_bounds", lower, upper, "Lower bound exceeds upper bound");
            return false;
        }

        let infinity = self.config.infinity;
        let column = &mut self.model.columns[column];
        column.lower_bound = lower.max(-infinity);
        column.upper_bound = upper.min(infinity);
        self.invalidate();
        true
    }

    fn objective_sense(&self) -> Objective {
        self.model.objective
    }

    fn set_objective_sense(&mut self, objective: Objective) {
        if self.model.objective != objective {
            self.model.objective = objective;
            self.invalidate();
        }
    }

    fn infinity(&self) -> f64 {
        self.config.infinity
    }

    fn set_infinity(&mut self, infinity: f64) {
        let old = self.config.infinity;
        for column in &mut self.model.columns {
            if column.lower_bound <= -old {
                column.lower_bound = -infinity;
            }
            if column.upper_bound >= old {
                column.upper_bound = infinity;
            }
        }
        self.config.infinity = infinity;
        self.invalidate();
    }

    fn nr_rows(&self) -> usize {
        self.model.nr_rows()
    }

    fn nr_columns(&self) -> usize {
        self.model.nr_columns()
    }

    fn nr_nonzeros(&self) -> usize {
        self.model.nr_nonzeros()
    }

    fn solve(&mut self) -> SolveStatus {
        if self.add_row_mode {
            debug!(component = "engine", operation = "solve", "Leaving row adding mode to solve");
            self.add_row_mode = false;
        }

        let started = Instant::now();
        let counts = self.model.constraint_type_counts();
        debug!(
            component = "engine",
            operation = "solve",
            rows = self.model.nr_rows() as u64,
            columns = self.model.nr_columns() as u64,
            nonzeros = self.model.nr_nonzeros() as u64,
            less = counts[ConstraintType::Less] as u64,
            greater = counts[ConstraintType::Greater] as u64,
            equal = counts[ConstraintType::Equal] as u64,
            "Starting solve"
        );

        self.solution = None;
        let Some(standard_form) = self.model.to_standard_form(self.config.infinity) else {
            self.status = SolveStatus::Infeasible;
            debug!(component = "engine", operation = "solve", status = %self.status, "A row has an infinite bound on the wrong side");
            return self.status;
        };

        let tolerances = Tolerances {
            pivot: self.config.epsilon,
            feasibility: self.config.feasibility_tolerance,
        };
        let relaxation = {
            let mut control = self.control(started);
            standard_form.solve_relaxation::<FirstProfitable, _>(tolerances, &mut control)
        };

        let (status, solution) = match relaxation.result {
            OptimizationResult::FiniteOptimum(solution) => (SolveStatus::Optimal, Some(solution)),
            OptimizationResult::Infeasible => (SolveStatus::Infeasible, None),
            OptimizationResult::Unbounded => (SolveStatus::Unbounded, None),
            OptimizationResult::NumericFailure => (SolveStatus::NumFailure, None),
            OptimizationResult::Interrupted(Interrupt::TimeLimit, Some(solution)) => (SolveStatus::SubOptimal, Some(solution)),
            OptimizationResult::Interrupted(Interrupt::TimeLimit, None) => (SolveStatus::Timeout, None),
            OptimizationResult::Interrupted(Interrupt::Aborted, solution) => (SolveStatus::UserAbort, solution),
        };
        self.solution = solution.map(|solution| self.translate(&standard_form, &solution));
        self.status = status;
        self.iterations = relaxation.iterations;

        debug!(
            component = "engine",
            operation = "solve",
            status = %status,
            code = status.code(),
            iterations = relaxation.iterations,
            objective = self.objective_value(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Solve finished"
        );
        status
    }

    fn status(&self) -> SolveStatus {
        self.status
    }

    fn objective_value(&self) -> Option<f64> {
        self.solution.as_ref().map(|solution| solution.primal[0])
    }

    fn primal_solution(&self) -> Option<&[f64]> {
        self.solution.as_ref().map(|solution| solution.primal.as_slice())
    }

    fn dual_solution(&self) -> Option<&[f64]> {
        self.solution.as_ref().map(|solution| solution.duals.as_slice())
    }

    fn reduced_costs(&self) -> Option<&[f64]> {
        self.solution.as_ref().map(|solution| solution.reduced_costs.as_slice())
    }

    fn iterations(&self) -> u64 {
        self.iterations
    }

    fn is_feasible(&self, values: &[f64], threshold: f64) -> bool {
        let (nr_rows, nr_columns) = (self.model.nr_rows(), self.model.nr_columns());
        if values.len() != 1 + nr_rows + nr_columns {
            return false;
        }
        let x = &values[1 + nr_rows..];

        let columns_ok = self.model.columns.iter().zip(x)
            .all(|(column, &value)| {
                value >= column.lower_bound - threshold && value <= column.upper_bound + threshold
            });
        let rows_ok = (0..nr_rows).all(|i| {
            let activity = inner_product(&self.model.rows[i].coefficients, x);
            let (lower, upper) = self.model.row_bounds(i);
            activity >= lower - threshold && activity <= upper + threshold
        });

        columns_ok && rows_ok
    }
}

/// Separate the cost (row 0) from the constraint values, which are shifted to start at 0.
fn split_cost(values: SparseTupleVec<f64>) -> (f64, SparseTupleVec<f64>) {
    match values.first() {
        Some(&(0, cost)) => (cost, values[1..].iter().map(|&(i, value)| (i - 1, value)).collect()),
        _ => (0_f64, values.into_iter().map(|(i, value)| (i - 1, value)).collect()),
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("lp_name", &self.lp_name())
            .field("rows", &self.model.nr_rows())
            .field("columns", &self.model.nr_columns())
            .field("add_row_mode", &self.add_row_mode)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use approx::assert_abs_diff_eq;

    use crate::backend::Backend;
    use crate::backend::config::EngineConfig;
    use crate::backend::engine::Engine;
    use crate::backend::status::SolveStatus;
    use crate::data::linear_program::elements::{ConstraintType, Objective};

    /// Wheat and barley on 75 acres, with storage and budget limits.
    fn farm(config: EngineConfig) -> Engine {
        let mut engine = Engine::with_config(0, 2, config);
        assert!(engine.set_objective(2, &[143_f64, 60_f64], &[1, 2]));
        engine.set_objective_sense(Objective::Maximize);
        assert!(engine.append_constraint(2, &[120_f64, 210_f64], &[1, 2], ConstraintType::Less, 15000_f64));
        assert!(engine.append_constraint(2, &[110_f64, 30_f64], &[1, 2], ConstraintType::Less, 4000_f64));
        assert!(engine.append_constraint(2, &[1_f64, 1_f64], &[1, 2], ConstraintType::Less, 75_f64));
        engine
    }

    #[test]
    fn farm_optimum() {
        let mut engine = farm(EngineConfig::default());
        assert_eq!(engine.solve(), SolveStatus::Optimal);
        assert_eq!(engine.status(), SolveStatus::Optimal);

        assert_abs_diff_eq!(engine.objective_value().unwrap(), 6315.625, epsilon = 1e-9);
        let primal = engine.primal_solution().unwrap();
        assert_eq!(primal.len(), 1 + 3 + 2);
        assert_abs_diff_eq!(primal[2], 4000_f64, epsilon = 1e-9);
        assert_abs_diff_eq!(primal[4], 21.875, epsilon = 1e-9);
        assert_abs_diff_eq!(primal[5], 53.125, epsilon = 1e-9);

        let duals = engine.dual_solution().unwrap();
        assert_abs_diff_eq!(duals[0], 0_f64, epsilon = 1e-9);
        assert_abs_diff_eq!(duals[1], 1.0375, epsilon = 1e-9);
        assert_abs_diff_eq!(duals[2], 28.875, epsilon = 1e-9);
        for &reduced_cost in engine.reduced_costs().unwrap() {
            assert_abs_diff_eq!(reduced_cost, 0_f64, epsilon = 1e-9);
        }

        assert!(engine.iterations() > 0);
        assert!(engine.is_feasible(primal, 1e-6));
        let mut too_much = primal.to_vec();
        too_much[4] += 1_f64;
        assert!(!engine.is_feasible(&too_much, 1e-6));
    }

    #[test]
    fn edits_discard_the_solution() {
        let mut engine = farm(EngineConfig::default());
        assert_eq!(engine.solve(), SolveStatus::Optimal);
        assert!(engine.set_row_name(1, "storage"));
        assert_eq!(engine.status(), SolveStatus::Optimal);

        assert!(engine.append_constraint(1, &[1_f64], &[1], ConstraintType::Less, 1_f64));
        assert_eq!(engine.status(), SolveStatus::NotRun);
        assert_eq!(engine.primal_solution(), None);
        assert_eq!(engine.dual_solution(), None);
        assert_eq!(engine.iterations(), 0);

        assert_eq!(engine.solve(), SolveStatus::Optimal);
        assert_abs_diff_eq!(engine.primal_solution().unwrap()[5], 1_f64, epsilon = 1e-9);
        assert!(!engine.set_bounds(1, 2_f64, 1_f64));
        assert_eq!(engine.status(), SolveStatus::Optimal);
        assert!(engine.set_right_hand_side(4, 2_f64));
        assert_eq!(engine.objective_value(), None);

        assert_eq!(engine.solve(), SolveStatus::Optimal);
        engine.set_objective_sense(Objective::Maximize);
        assert_eq!(engine.status(), SolveStatus::Optimal);
        engine.set_objective_sense(Objective::Minimize);
        assert_eq!(engine.status(), SolveStatus::NotRun);
    }

    #[test]
    fn not_run() {
        let engine = farm(EngineConfig::default());
        assert_eq!(engine.status(), SolveStatus::NotRun);
        assert_eq!(engine.primal_solution(), None);
        assert_eq!(engine.objective_value(), None);
    }

    #[test]
    fn interrupted() {
        let mut engine = farm(EngineConfig::default());
        engine.set_abort(|| true);
        assert_eq!(engine.solve(), SolveStatus::UserAbort);
        engine.clear_abort();

        let mut engine = farm(EngineConfig::new().with_time_limit(Duration::ZERO));
        assert_eq!(engine.solve(), SolveStatus::SubOptimal);
        assert_eq!(engine.objective_value(), Some(0_f64));
        assert_eq!(engine.iterations(), 0);
    }

    #[test]
    fn infeasible() {
        let mut engine = Engine::new(0, 1);
        engine.append_constraint(1, &[1_f64], &[1], ConstraintType::Greater, 5_f64);
        engine.append_constraint(1, &[1_f64], &[1], ConstraintType::Less, 4_f64);
        assert_eq!(engine.solve(), SolveStatus::Infeasible);
        assert_eq!(engine.primal_solution(), None);
    }

    #[test]
    fn unbounded() {
        let mut engine = Engine::new(0, 2);
        engine.set_objective_sense(Objective::Maximize);
        engine.set_objective(1, &[1_f64], &[1]);
        engine.append_constraint(2, &[1_f64, -1_f64], &[1, 2], ConstraintType::Less, 1_f64);
        assert_eq!(engine.solve(), SolveStatus::Unbounded);
    }

    #[test]
    fn equality() {
        let mut engine = Engine::new(0, 2);
        engine.set_objective(2, &[1_f64, 2_f64], &[1, 2]);
        engine.append_constraint(2, &[1_f64, 1_f64], &[1, 2], ConstraintType::Equal, 4_f64);
        assert_eq!(engine.solve(), SolveStatus::Optimal);
        assert_abs_diff_eq!(engine.objective_value().unwrap(), 4_f64, epsilon = 1e-9);
        assert_abs_diff_eq!(engine.dual_solution().unwrap()[0], 1_f64, epsilon = 1e-9);
        assert_abs_diff_eq!(engine.reduced_costs().unwrap()[1], 1_f64, epsilon = 1e-9);
    }

    #[test]
    fn free_variable() {
        let mut engine = Engine::new(0, 1);
        assert!(engine.set_unbounded(1));
        assert!(engine.is_unbounded(1));
        engine.set_objective(1, &[1_f64], &[1]);
        engine.append_constraint(1, &[1_f64], &[1], ConstraintType::Greater, -5_f64);
        assert_eq!(engine.solve(), SolveStatus::Optimal);
        assert_abs_diff_eq!(engine.objective_value().unwrap(), -5_f64, epsilon = 1e-9);
        assert_abs_diff_eq!(engine.dual_solution().unwrap()[0], 1_f64, epsilon = 1e-9);
    }

    #[test]
    fn bounds() {
        let mut engine = Engine::new(0, 2);
        engine.set_objective_sense(Objective::Maximize);
        engine.set_objective(2, &[1_f64, 1_f64], &[1, 2]);
        engine.append_constraint(2, &[1_f64, 1_f64], &[1, 2], ConstraintType::Less, 10_f64);
        assert!(engine.set_bounds(1, 0_f64, 3_f64));
        assert!(engine.set_bounds(2, -1_f64, 2_f64));
        assert!(!engine.set_bounds(2, 3_f64, 2_f64));
        assert_eq!(engine.bounds(2), Some((-1_f64, 2_f64)));
        assert!(!engine.is_negative(2));

        assert_eq!(engine.solve(), SolveStatus::Optimal);
        assert_abs_diff_eq!(engine.objective_value().unwrap(), 5_f64, epsilon = 1e-9);
        // Both columns sit at their upper bound
        assert_abs_diff_eq!(engine.reduced_costs().unwrap()[0], 1_f64, epsilon = 1e-9);
    }

    #[test]
    fn range() {
        let mut engine = Engine::new(0, 1);
        engine.set_objective(1, &[1_f64], &[1]);
        engine.append_constraint(1, &[1_f64], &[1], ConstraintType::Less, 6_f64);
        assert!(engine.set_range(1, 2_f64));
        assert_eq!(engine.range(1), Some(2_f64));
        assert_eq!(engine.solve(), SolveStatus::Optimal);
        assert_abs_diff_eq!(engine.objective_value().unwrap(), 4_f64, epsilon = 1e-9);
    }

    #[test]
    fn row_mode() {
        let mut engine = farm(EngineConfig::default());
        assert!(engine.set_add_row_mode(true));
        assert!(!engine.set_add_row_mode(true));
        assert!(engine.is_add_row_mode());

        assert!(engine.append_constraint(1, &[1_f64], &[1], ConstraintType::Less, 50_f64));
        assert!(!engine.set_element(1, 1, 2_f64));
        assert!(!engine.set_row(1, 1, &[1_f64], &[1]));
        assert!(!engine.append_column(0, &[], &[]));
        assert!(!engine.delete_constraint(1));
        assert_eq!(engine.nr_rows(), 4);

        assert_eq!(engine.solve(), SolveStatus::Optimal);
        assert!(!engine.is_add_row_mode());
        assert!(engine.set_element(1, 1, 2_f64));
    }

    #[test]
    fn invalid_arguments() {
        let mut engine = Engine::new(1, 2);
        assert!(!engine.append_constraint(1, &[1_f64], &[3], ConstraintType::Less, 1_f64));
        assert!(!engine.append_constraint(1, &[1_f64], &[0], ConstraintType::Less, 1_f64));
        assert!(!engine.append_constraint(2, &[1_f64], &[1, 2], ConstraintType::Less, 1_f64));
        assert!(!engine.set_row(2, 0, &[], &[]));
        assert_eq!(engine.right_hand_side(0), None);
        assert_eq!(engine.element(1, 3), None);
        assert_eq!(engine.nr_rows(), 1);
    }

    #[test]
    fn duplicates_are_added() {
        let mut engine = Engine::new(0, 2);
        assert!(engine.append_constraint(3, &[1_f64, 2_f64, 4_f64], &[2, 1, 2], ConstraintType::Less, 1_f64));
        assert_eq!(engine.row_values(1), Some(vec![2_f64, 5_f64]));
        assert_eq!(engine.nr_nonzeros(), 2);
    }

    #[test]
    fn text_and_dense() {
        let mut engine = Engine::new(0, 3);
        assert!(engine.append_constraint_str("3 0 2", ConstraintType::Greater, 2_f64));
        assert!(!engine.append_constraint_str("3 two", ConstraintType::Greater, 2_f64));
        assert!(engine.set_objective_str("1 1 1"));
        assert!(engine.append_column_str("4 7"));
        assert_eq!(engine.row_values(1), Some(vec![3_f64, 0_f64, 2_f64, 7_f64]));
        assert_eq!(engine.column_values(4), Some(vec![4_f64, 7_f64]));
        assert_eq!(engine.row_values(0), Some(vec![1_f64, 1_f64, 1_f64, 4_f64]));

        assert!(engine.set_right_hand_side_vec(&[9_f64]));
        assert!(!engine.set_right_hand_side_vec(&[9_f64, 1_f64]));
        assert_eq!(engine.right_hand_side(1), Some(9_f64));
    }

    #[test]
    fn names() {
        let mut engine = farm(EngineConfig::default());
        assert_eq!(engine.lp_name(), "Unnamed");
        engine.set_lp_name("farm");
        assert_eq!(engine.lp_name(), "farm");

        assert_eq!(engine.row_name(2), Some("R2".to_string()));
        assert!(engine.set_row_name(3, "land"));
        assert!(engine.set_column_name(1, "wheat"));
        assert_eq!(engine.name_index("land", true), Some(3));
        assert_eq!(engine.name_index("wheat", false), Some(1));
        assert_eq!(engine.name_index("C2", false), Some(2));
        assert_eq!(engine.name_index("barley", false), None);
    }

    #[test]
    fn delete() {
        let mut engine = farm(EngineConfig::default());
        assert!(engine.delete_column(1));
        assert_eq!(engine.nr_columns(), 1);
        assert_eq!(engine.row_values(1), Some(vec![210_f64]));
        assert!(engine.delete_constraint(1));
        assert_eq!(engine.right_hand_side(1), Some(4000_f64));
    }

    #[test]
    fn infinity() {
        let mut engine = Engine::new(0, 1);
        engine.set_unbounded(1);
        engine.set_infinity(1e20);
        assert_eq!(engine.bounds(1), Some((-1e20, 1e20)));
        assert!(engine.is_infinite(-2e20));
        assert!(engine.is_unbounded(1));
    }
}
