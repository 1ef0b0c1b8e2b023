//! # Linear programs from symbolic expressions
//!
//! Models are written with variables, sums and relations, flattened into sparse rows and handed to
//! a linear programming backend. The backend shipped with this crate solves them using the Simplex
//! Method as described in the book Combinatorial Optimization by Christos H. Papadimitriou and
//! Kenneth Steiglitz.
//!
//! ```
//! use relp_rows::{Expression, SolveStatus, Solver, Variable};
//!
//! let mut solver = Solver::new(0, 2);
//! let (x, y) = (Variable::new(1), Variable::new(2));
//! solver.add_constraint(&(x + y).less_or_equal(4_f64)).unwrap();
//! solver.set_objective(x + y * 2_f64).unwrap();
//! solver.set_maximize();
//!
//! let solution = solver.solve();
//! assert_eq!(solution.status(), SolveStatus::Optimal);
//! assert_eq!(solution.objective_value(), Some(8_f64));
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod backend;
pub mod data;
pub mod error;
pub mod solver;

pub use crate::backend::Backend;
pub use crate::backend::config::{EngineConfig, Verbosity};
pub use crate::backend::engine::Engine;
pub use crate::backend::status::SolveStatus;
pub use crate::data::expression::{Expression, LinearExpression, Sum, Summand, Variable};
pub use crate::data::expression::constraint::{Comparison, Constraint};
pub use crate::data::linear_program::elements::{ConstraintType, Objective};
pub use crate::error::{Error, Result};
pub use crate::solver::Solver;
pub use crate::solver::materialize::{ScratchBuffers, SparseRow};
pub use crate::solver::row_mode::BulkInsert;
pub use crate::solver::views::{Column, ColumnMut, Row, RowMut, Solution};
