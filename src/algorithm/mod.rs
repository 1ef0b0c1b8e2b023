//! # Algorithms
use crate::algorithm::simplex::strategy::pivot_rule::PivotRule;

pub mod simplex;

/// A problem formulation of which a relaxation can be solved.
///
/// In the case of linear programming, that means that integer constraints are ignored.
pub trait SolveRelaxation {
    /// Solve the relaxed version of this problem.
    ///
    /// # Arguments
    ///
    /// * `tolerances`: How close to zero values need to be to be treated as zero.
    /// * `control`: Consulted before every pivot; can stop the algorithm.
    ///
    /// # Return value
    ///
    /// Whether the problem is feasible, and if so, a solution if the problem is bounded.
    fn solve_relaxation<PR: PivotRule, C: Control>(
        &self,
        tolerances: Tolerances,
        control: &mut C,
    ) -> Relaxation;
}

/// Numerical tolerances of the simplex method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Values with at most this magnitude are not pivoted on and costs above `-pivot` are not
    /// considered improving.
    pub pivot: f64,
    /// Largest total artificial value that is still considered feasible.
    pub feasibility: f64,
}

/// Outside influence on a running algorithm.
pub trait Control {
    /// Called before every pivot.
    ///
    /// # Arguments
    ///
    /// * `iteration`: Number of pivots done so far.
    /// * `objective`: Value of the current basic solution, in the objective of the running phase.
    ///
    /// # Return value
    ///
    /// A reason to stop, if any.
    fn interrupt(&mut self, iteration: u64, objective: f64) -> Option<Interrupt>;
}

impl<F: FnMut(u64, f64) -> Option<Interrupt>> Control for F {
    fn interrupt(&mut self, iteration: u64, objective: f64) -> Option<Interrupt> {
        self(iteration, objective)
    }
}

/// Why an algorithm was stopped before it finished.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Interrupt {
    /// The time limit passed.
    TimeLimit,
    /// The user asked to stop.
    Aborted,
}

/// Outcome of solving a relaxation, together with the work it took.
#[derive(Debug, Clone, PartialEq)]
pub struct Relaxation {
    #[allow(missing_docs)]
    pub result: OptimizationResult,
    /// Number of pivots done.
    pub iterations: u64,
}

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm, unless that algorithm was stopped early.
#[derive(Debug, Clone, PartialEq)]
pub enum OptimizationResult {
    /// No solution satisfies all constraints.
    Infeasible,
    /// An optimal basic solution.
    FiniteOptimum(BasicSolution),
    /// The objective can be improved without limit.
    Unbounded,
    /// Stopped early; if a feasible solution was known at that moment, it is included.
    Interrupted(Interrupt, Option<BasicSolution>),
    /// Values stopped being finite numbers.
    NumericFailure,
}

/// Values of a basic solution and of the matching dual solution.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicSolution {
    /// Value of each column.
    pub values: Vec<f64>,
    /// Dual value of each row.
    pub duals: Vec<f64>,
}
