//! # Constraints
//!
//! An expression related to a scalar right-hand side.
use crate::data::expression::LinearExpression;
use crate::data::linear_program::elements::ConstraintType;
use crate::error::Error;

/// Relations one might write between an expression and a scalar.
///
/// Only the first three can become a row.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Comparison {
    /// `<=`
    LessOrEqual,
    /// `>=`
    GreaterOrEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
}

impl TryFrom<Comparison> for ConstraintType {
    type Error = Error;

    fn try_from(comparison: Comparison) -> Result<Self, Self::Error> {
        match comparison {
            Comparison::LessOrEqual => Ok(ConstraintType::Less),
            Comparison::GreaterOrEqual => Ok(ConstraintType::Greater),
            Comparison::Equal => Ok(ConstraintType::Equal),
            Comparison::NotEqual => Err(Error::UnsupportedRelation),
        }
    }
}

/// A row to be: `expression <relation> right_hand_side`.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    expression: LinearExpression,
    constraint_type: ConstraintType,
    right_hand_side: f64,
}

impl Constraint {
    /// Relate an expression to a right-hand side.
    ///
    /// The right-hand side is kept as given, also when it is the backend's infinity.
    pub fn new(
        expression: impl Into<LinearExpression>,
        constraint_type: ConstraintType,
        right_hand_side: f64,
    ) -> Self {
        Self {
            expression: expression.into(),
            constraint_type,
            right_hand_side,
        }
    }

    /// Left-hand side.
    pub fn expression(&self) -> &LinearExpression {
        &self.expression
    }

    #[allow(missing_docs)]
    pub fn constraint_type(&self) -> ConstraintType {
        self.constraint_type
    }

    #[allow(missing_docs)]
    pub fn right_hand_side(&self) -> f64 {
        self.right_hand_side
    }

    /// Consume and return (expression, constraint type, right-hand side).
    pub fn into_parts(self) -> (LinearExpression, ConstraintType, f64) {
        (self.expression, self.constraint_type, self.right_hand_side)
    }
}
