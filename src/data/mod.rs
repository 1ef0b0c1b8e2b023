//! # Storing of linear programs in memory
//!
//! This module provides the data structures used to represent linear programs in memory: the
//! symbolic expressions models are written in, and the forms an engine stores and solves them in.
//! Algorithms may introduce their specific data structures in `algorithm::my_algorithm`.
pub mod expression;
pub mod linear_algebra;
pub mod linear_program;
