//! # Building blocks to describe linear programs.
use std::fmt;

use enum_map::Enum;

/// A `ConstraintType` is a type of (in)equality.
///
/// These are read "from constraint to constraint value", meaning:
/// * When a constraint is `ConstraintType::Equal`, the equation is `<a, x> == b`
/// * When a constraint is `ConstraintType::Less`, the equation is `<a, x> <= b`
/// * When a constraint is `ConstraintType::Greater`, the equation is `<a, x> >= b`
#[allow(missing_docs)]
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ConstraintType {
    Less,
    Greater,
    Equal,
}

impl ConstraintType {
    /// The relation symbol, as it would be written in a model file.
    pub fn symbol(self) -> &'static str {
        match self {
            ConstraintType::Less => "<=",
            ConstraintType::Greater => ">=",
            ConstraintType::Equal => "=",
        }
    }
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Objective {
    Maximize,
    #[default]
    Minimize,
}

impl Objective {
    /// Factor that turns this objective into a minimization.
    pub(crate) fn sign(self) -> f64 {
        match self {
            Objective::Maximize => -1_f64,
            Objective::Minimize => 1_f64,
        }
    }
}
