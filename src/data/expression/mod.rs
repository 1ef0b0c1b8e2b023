//! # Symbolic linear expressions
//!
//! Value types to write down the rows of a linear program: a `Variable` refers to a column, a
//! `Summand` is a column with a coefficient and a `Sum` is an ordered list of summands.
//!
//! Composition never simplifies. Adding two expressions concatenates their summands, also when a
//! column appears more than once; it is up to the backend to merge or reject duplicate columns.
//! The order of the summands is the order in which they are materialized into a sparse row.
use std::slice;

use crate::data::expression::constraint::{Comparison, Constraint};
use crate::data::linear_program::elements::ConstraintType;
use crate::error::Result;

pub mod constraint;
mod ops;

/// A decision variable, identified by its column.
///
/// Columns are numbered from one, as the backend numbers them. Index zero is not rejected here,
/// but materializing an expression that contains it fails.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Variable {
    column: usize,
}

impl Variable {
    /// Refer to the variable in a column.
    pub const fn new(column: usize) -> Self {
        Self { column }
    }

    /// Column of this variable, numbered from one.
    pub fn column(self) -> usize {
        self.column
    }

    /// This variable with coefficient one.
    pub fn summand(self) -> Summand {
        Summand::new(self.column, 1_f64)
    }
}

/// A single term: a column with a coefficient.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Summand {
    column: usize,
    coefficient: f64,
}

impl Summand {
    /// Create a term `coefficient * x_column`.
    pub const fn new(column: usize, coefficient: f64) -> Self {
        Self { column, coefficient }
    }

    /// Column of the variable, numbered from one.
    pub fn column(self) -> usize {
        self.column
    }

    /// Factor the variable is multiplied with.
    pub fn coefficient(self) -> f64 {
        self.coefficient
    }

    /// The variable this term is about.
    pub fn variable(self) -> Variable {
        Variable::new(self.column)
    }
}

impl From<Variable> for Summand {
    fn from(variable: Variable) -> Self {
        variable.summand()
    }
}

/// An ordered list of summands.
///
/// The empty sum is the zero expression.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sum {
    summands: Vec<Summand>,
}

impl Sum {
    /// The zero expression.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a sum from summands, keeping their order.
    pub fn new(summands: Vec<Summand>) -> Self {
        Self { summands }
    }

    /// All terms, in insertion order.
    pub fn summands(&self) -> &[Summand] {
        &self.summands
    }

    /// Consume and return the terms.
    pub fn into_summands(self) -> Vec<Summand> {
        self.summands
    }

    /// Number of terms, duplicate columns counted separately.
    pub fn len(&self) -> usize {
        self.summands.len()
    }

    /// Whether this is the zero expression.
    pub fn is_empty(&self) -> bool {
        self.summands.is_empty()
    }

    /// Append a single term.
    pub fn push(&mut self, summand: impl Into<Summand>) {
        self.summands.push(summand.into());
    }
}

impl From<Variable> for Sum {
    fn from(variable: Variable) -> Self {
        Self { summands: vec![variable.summand()] }
    }
}

impl From<Summand> for Sum {
    fn from(summand: Summand) -> Self {
        Self { summands: vec![summand] }
    }
}

impl From<Vec<Summand>> for Sum {
    fn from(summands: Vec<Summand>) -> Self {
        Self { summands }
    }
}

/// What can be placed in a row: either a single term or a list of terms.
///
/// A single term stays a single term, such that it can be written to a row without looking at a
/// list.
#[derive(Clone, Debug, PartialEq)]
pub enum LinearExpression {
    #[allow(missing_docs)]
    Summand(Summand),
    #[allow(missing_docs)]
    Sum(Sum),
}

impl LinearExpression {
    /// All terms of the expression, in order.
    pub fn summands(&self) -> &[Summand] {
        match self {
            LinearExpression::Summand(summand) => slice::from_ref(summand),
            LinearExpression::Sum(sum) => sum.summands(),
        }
    }

    /// Number of terms that a materialization of this expression writes.
    pub fn len(&self) -> usize {
        match self {
            LinearExpression::Summand(_) => 1,
            LinearExpression::Sum(sum) => sum.len(),
        }
    }

    /// Whether materializing writes nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Variable> for LinearExpression {
    fn from(variable: Variable) -> Self {
        LinearExpression::Summand(variable.summand())
    }
}

impl From<Summand> for LinearExpression {
    fn from(summand: Summand) -> Self {
        LinearExpression::Summand(summand)
    }
}

impl From<Sum> for LinearExpression {
    fn from(sum: Sum) -> Self {
        LinearExpression::Sum(sum)
    }
}

/// Named constructors shared by `Variable`, `Summand` and `Sum`.
///
/// The arithmetic operators in this module are written in terms of these methods, so `a - b` is
/// always `a.add(b.negate())`.
pub trait Expression: Into<Sum> + Into<LinearExpression> + Sized {
    /// Result of flipping the sign of every coefficient.
    type Negated: Expression;
    /// Result of multiplying every coefficient with a scalar.
    type Scaled: Expression;

    /// Flip the sign of every coefficient.
    fn negate(self) -> Self::Negated;

    /// Multiply every coefficient with `factor`.
    ///
    /// Repeated scaling multiplies: scaling by 2 and then by 3 scales by 6.
    fn scale(self, factor: f64) -> Self::Scaled;

    /// Concatenate the terms of `other` after the terms of `self`.
    fn add(self, other: impl Into<Sum>) -> Sum {
        let mut sum: Sum = self.into();
        sum.summands.extend(other.into().summands);
        sum
    }

    /// Add the negation of `other`.
    fn subtract<E: Expression>(self, other: E) -> Sum {
        self.add(other.negate())
    }

    /// The constraint `self <= right_hand_side`.
    fn less_or_equal(self, right_hand_side: f64) -> Constraint {
        Constraint::new(self, ConstraintType::Less, right_hand_side)
    }

    /// The constraint `self >= right_hand_side`.
    fn greater_or_equal(self, right_hand_side: f64) -> Constraint {
        Constraint::new(self, ConstraintType::Greater, right_hand_side)
    }

    /// The constraint `self == right_hand_side`.
    fn equal_to(self, right_hand_side: f64) -> Constraint {
        Constraint::new(self, ConstraintType::Equal, right_hand_side)
    }

    /// Not supported, always fails with `Error::UnsupportedRelation`.
    fn not_equal(self, right_hand_side: f64) -> Result<Constraint> {
        self.compare(Comparison::NotEqual, right_hand_side)
    }

    /// Relate this expression to a scalar.
    ///
    /// # Errors
    ///
    /// `Error::UnsupportedRelation` for `Comparison::NotEqual`.
    fn compare(self, comparison: Comparison, right_hand_side: f64) -> Result<Constraint> {
        let constraint_type = ConstraintType::try_from(comparison)?;
        Ok(Constraint::new(self, constraint_type, right_hand_side))
    }
}

impl Expression for Variable {
    type Negated = Summand;
    type Scaled = Summand;

    fn negate(self) -> Summand {
        Summand::new(self.column, -1_f64)
    }

    fn scale(self, factor: f64) -> Summand {
        Summand::new(self.column, factor)
    }
}

impl Expression for Summand {
    type Negated = Summand;
    type Scaled = Summand;

    fn negate(self) -> Summand {
        Summand::new(self.column, -self.coefficient)
    }

    fn scale(self, factor: f64) -> Summand {
        Summand::new(self.column, self.coefficient * factor)
    }
}

impl Expression for Sum {
    type Negated = Sum;
    type Scaled = Sum;

    fn negate(self) -> Sum {
        self.summands.into_iter().map(Summand::negate).collect()
    }

    fn scale(self, factor: f64) -> Sum {
        self.summands.into_iter().map(|summand| summand.scale(factor)).collect()
    }
}
