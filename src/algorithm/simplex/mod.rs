//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm. The
//! algorithm is implemented as described in chapters 2 and 4 of Combinatorial Optimization, a book
//! by Christos H. Papadimitriou and Kenneth Steiglitz: a first phase minimizes the sum of the
//! artificial variables to find a basic feasible solution, a second phase optimizes from there.
use tracing::debug;

use crate::algorithm::{BasicSolution, Control, OptimizationResult, Relaxation, SolveRelaxation, Tolerances};
use crate::algorithm::simplex::strategy::pivot_rule::PivotRule;
use crate::algorithm::simplex::tableau::{is_in_basic_feasible_solution_state, Tableau};
use crate::data::linear_program::standard_form::StandardForm;

pub mod strategy;
pub mod tableau;

impl SolveRelaxation for StandardForm {
    fn solve_relaxation<PR: PivotRule, C: Control>(
        &self,
        tolerances: Tolerances,
        control: &mut C,
    ) -> Relaxation {
        let mut tableau = Tableau::new(self, tolerances.pivot);

        let result = match artificial_primal::<PR, C>(&mut tableau, tolerances.feasibility, control) {
            Ok(FeasibilityResult::Feasible(rank)) => {
                if let Rank::Deficient(rows) = rank {
                    debug!(redundant_rows = ?rows, "rank deficient constraint matrix");
                }
                tableau.close_artificial_columns();
                tableau.set_cost(&self.cost);
                primal::<PR, C>(&mut tableau, control)
            },
            Ok(FeasibilityResult::Infeasible) => OptimizationResult::Infeasible,
            Err(stopped) => stopped,
        };

        Relaxation { result, iterations: tableau.iterations() }
    }
}

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
///
/// If the problem is feasible, it can either have full rank, or be rank deficient.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum FeasibilityResult {
    Feasible(Rank),
    Infeasible,
}

/// A matrix or linear program either has full rank, or be rank deficient.
///
/// In case it is rank deficient, a sorted, deduplicated list of (row)indices is provided. The
/// artificial variables on these rows stay in the basis at value zero.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Rank {
    Full,
    Deficient(Vec<usize>),
}

/// Reduces the artificial cost of the basic feasible solution to zero, if possible. In doing so, a
/// basic feasible solution to the standard form linear program is found.
///
/// # Arguments
///
/// * `tableau`: Tableau with a valid basis. This basis will typically contain some artificial
/// variables; if it doesn't, nothing needs to be done.
/// * `feasibility_tolerance`: Largest remaining artificial cost considered to be zero.
///
/// # Return value
///
/// Whether the tableau allows a basic feasible solution without artificial variables, or the
/// reason the search was stopped.
pub(crate) fn artificial_primal<PR: PivotRule, C: Control>(
    tableau: &mut Tableau,
    feasibility_tolerance: f64,
    control: &mut C,
) -> Result<FeasibilityResult, OptimizationResult> {
    if tableau.nr_enterable_columns() == tableau.first_artificial() {
        return Ok(FeasibilityResult::Feasible(Rank::Full));
    }

    tableau.set_artificial_cost();
    let mut rule = PR::new();
    loop {
        debug_assert!(is_in_basic_feasible_solution_state(tableau));

        if let Some(interrupt) = control.interrupt(tableau.iterations(), tableau.objective_function_value()) {
            break Err(OptimizationResult::Interrupted(interrupt, None));
        }

        match rule.select_primal_pivot_column(tableau) {
            Some((column, _cost)) => match tableau.select_primal_pivot_row(column) {
                Some(row) => tableau.bring_into_basis(column, row),
                // The artificial cost is bounded from below by zero
                None => break Err(OptimizationResult::NumericFailure),
            },
            None if !tableau.is_numerically_sound() => break Err(OptimizationResult::NumericFailure),
            None => break Ok(if tableau.objective_function_value() <= feasibility_tolerance {
                let rows_to_remove = tableau.remove_artificial_basis_variables();
                if rows_to_remove.is_empty() {
                    FeasibilityResult::Feasible(Rank::Full)
                } else {
                    FeasibilityResult::Feasible(Rank::Deficient(rows_to_remove))
                }
            } else {
                FeasibilityResult::Infeasible
            }),
        }
    }
}

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal <=> dual feasible <=> c >= 0)
/// - All constraint values need to be positive (primary feasibility)
pub(crate) fn primal<PR: PivotRule, C: Control>(
    tableau: &mut Tableau,
    control: &mut C,
) -> OptimizationResult {
    let mut rule = PR::new();
    loop {
        debug_assert!(is_in_basic_feasible_solution_state(tableau));

        if let Some(interrupt) = control.interrupt(tableau.iterations(), tableau.objective_function_value()) {
            break OptimizationResult::Interrupted(interrupt, Some(basic_solution(tableau)));
        }

        match rule.select_primal_pivot_column(tableau) {
            Some((column, _cost)) => match tableau.select_primal_pivot_row(column) {
                Some(row) => tableau.bring_into_basis(column, row),
                None => break OptimizationResult::Unbounded,
            },
            None if !tableau.is_numerically_sound() => break OptimizationResult::NumericFailure,
            None => break OptimizationResult::FiniteOptimum(basic_solution(tableau)),
        }
    }
}

fn basic_solution(tableau: &Tableau) -> BasicSolution {
    BasicSolution {
        values: tableau.current_bfs(),
        duals: tableau.dual_values(),
    }
}
