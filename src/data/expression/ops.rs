//! # Operators
//!
//! Arithmetic operators on expressions, all forwarding to the named methods of `Expression`.
use std::iter;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::data::expression::{Expression, Sum, Summand, Variable};

macro_rules! impl_binary {
    (@right $left:ty; $($right:ty),*) => {
        $(
            impl Add<$right> for $left {
                type Output = Sum;

                fn add(self, rhs: $right) -> Self::Output {
                    Expression::add(self, rhs)
                }
            }

            impl Sub<$right> for $left {
                type Output = Sum;

                fn sub(self, rhs: $right) -> Self::Output {
                    Expression::subtract(self, rhs)
                }
            }
        )*
    };
    ($($left:ty),*) => {
        $(
            impl_binary!(@right $left; Variable, Summand, Sum);
        )*
    };
}
impl_binary!(Variable, Summand, Sum);

macro_rules! impl_unary {
    ($($expression:ty),*) => {
        $(
            impl Neg for $expression {
                type Output = <$expression as Expression>::Negated;

                fn neg(self) -> Self::Output {
                    Expression::negate(self)
                }
            }

            impl Mul<f64> for $expression {
                type Output = <$expression as Expression>::Scaled;

                fn mul(self, factor: f64) -> Self::Output {
                    Expression::scale(self, factor)
                }
            }

            impl Mul<$expression> for f64 {
                type Output = <$expression as Expression>::Scaled;

                fn mul(self, expression: $expression) -> Self::Output {
                    Expression::scale(expression, self)
                }
            }

            impl AddAssign<$expression> for Sum {
                fn add_assign(&mut self, rhs: $expression) {
                    self.summands.extend(Sum::from(rhs).summands);
                }
            }

            impl SubAssign<$expression> for Sum {
                fn sub_assign(&mut self, rhs: $expression) {
                    *self += Expression::negate(rhs);
                }
            }
        )*
    };
}
impl_unary!(Variable, Summand, Sum);

impl MulAssign<f64> for Sum {
    fn mul_assign(&mut self, factor: f64) {
        for summand in &mut self.summands {
            *summand = summand.scale(factor);
        }
    }
}

impl FromIterator<Summand> for Sum {
    fn from_iter<I: IntoIterator<Item = Summand>>(iter: I) -> Self {
        Sum::new(iter.into_iter().collect())
    }
}

impl Extend<Summand> for Sum {
    fn extend<I: IntoIterator<Item = Summand>>(&mut self, iter: I) {
        self.summands.extend(iter);
    }
}

impl iter::Sum<Summand> for Sum {
    fn sum<I: Iterator<Item = Summand>>(iter: I) -> Self {
        iter.collect()
    }
}

impl iter::Sum<Variable> for Sum {
    fn sum<I: Iterator<Item = Variable>>(iter: I) -> Self {
        iter.map(Variable::summand).collect()
    }
}

impl iter::Sum<Sum> for Sum {
    fn sum<I: Iterator<Item = Sum>>(iter: I) -> Self {
        iter.fold(Sum::empty(), |total, sum| total + sum)
    }
}
