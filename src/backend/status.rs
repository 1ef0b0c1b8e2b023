//! # Solve status
use std::fmt;

/// Terminal state of a solve.
///
/// The numeric codes are the ones lp_solve uses, so that models and tooling written against that
/// convention keep working.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum SolveStatus {
    /// Memory could not be allocated.
    NoMemory,
    /// No solve was attempted since the model was created or last changed.
    #[default]
    NotRun,
    /// An optimal solution was found.
    Optimal,
    /// A feasible solution was found, but the solve stopped before proving optimality.
    SubOptimal,
    /// No solution satisfies all constraints.
    Infeasible,
    /// The objective can be improved without limit.
    Unbounded,
    /// The basis cycled and the solve could not continue.
    Degenerate,
    /// Values stopped being finite numbers.
    NumFailure,
    /// The abort callback asked to stop.
    UserAbort,
    /// The time limit passed before a feasible solution was found.
    Timeout,
    /// The model was solved by presolve alone.
    Presolved,
}

impl SolveStatus {
    /// Numeric status code.
    pub fn code(self) -> i32 {
        match self {
            SolveStatus::NoMemory => -2,
            SolveStatus::NotRun => -1,
            SolveStatus::Optimal => 0,
            SolveStatus::SubOptimal => 1,
            SolveStatus::Infeasible => 2,
            SolveStatus::Unbounded => 3,
            SolveStatus::Degenerate => 4,
            SolveStatus::NumFailure => 5,
            SolveStatus::UserAbort => 6,
            SolveStatus::Timeout => 7,
            SolveStatus::Presolved => 9,
        }
    }

    /// The status belonging to a numeric code, if any.
    pub fn from_code(code: i32) -> Option<Self> {
        let status = match code {
            -2 => SolveStatus::NoMemory,
            -1 => SolveStatus::NotRun,
            0 => SolveStatus::Optimal,
            1 => SolveStatus::SubOptimal,
            2 => SolveStatus::Infeasible,
            3 => SolveStatus::Unbounded,
            4 => SolveStatus::Degenerate,
            5 => SolveStatus::NumFailure,
            6 => SolveStatus::UserAbort,
            7 => SolveStatus::Timeout,
            9 => SolveStatus::Presolved,
            _ => return None,
        };
        Some(status)
    }

    /// Human readable description.
    pub fn description(self) -> &'static str {
        match self {
            SolveStatus::NoMemory => "Out of memory",
            SolveStatus::NotRun => "Model has not been solved yet",
            SolveStatus::Optimal => "OPTIMAL solution",
            SolveStatus::SubOptimal => "SUB-OPTIMAL solution",
            SolveStatus::Infeasible => "This problem is infeasible",
            SolveStatus::Unbounded => "This problem is unbounded",
            SolveStatus::Degenerate => "DEGENERATE situation",
            SolveStatus::NumFailure => "NUMERICAL FAILURE encountered",
            SolveStatus::UserAbort => "User-requested termination",
            SolveStatus::Timeout => "Termination due to timeout",
            SolveStatus::Presolved => "Presolved solution",
        }
    }

    /// Whether the backend holds a solution that satisfies all constraints.
    pub fn has_feasible_solution(self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::SubOptimal | SolveStatus::Presolved)
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
