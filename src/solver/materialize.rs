//! # Row materialization
//!
//! Symbolic expressions are flattened into the paired index and coefficient arrays that backends
//! consume. The arrays are scratch space owned by a single solver and reused for every call.
use itertools::izip;
use tracing::debug;

use crate::data::expression::LinearExpression;
use crate::error::{Error, Result};

/// Column indices and coefficients of the most recently materialized expression.
///
/// Both buffers always have the same length. It only grows, to exactly the longest expression seen
/// so far; a fresh instance holds no heap allocation.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScratchBuffers {
    column_indices: Vec<usize>,
    coefficients: Vec<f64>,
}

impl ScratchBuffers {
    /// Empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements that fit without reallocating.
    pub fn capacity(&self) -> usize {
        self.column_indices.len()
    }

    /// Make room for at least `length` elements.
    ///
    /// Too small buffers are replaced by buffers of exactly `length` elements; their contents are
    /// not kept. Large enough buffers are left alone.
    pub fn ensure_capacity(&mut self, length: usize) {
        if self.capacity() < length {
            debug!(
                component = "materializer",
                operation = "grow",
                from = self.capacity() as u64,
                to = length as u64,
                "Growing scratch buffers"
            );
            self.column_indices = vec![0; length];
            self.coefficients = vec![0_f64; length];
        }
    }

    /// Write the summands of an expression to the start of the buffers.
    ///
    /// # Arguments
    ///
    /// * `expression`: Summand or sum to flatten. Duplicate columns are written as they are.
    ///
    /// # Return value
    ///
    /// A view on the written part of the buffers, or `Error::InvalidColumn` if a summand refers to
    /// column 0. In that case the buffers are not touched.
    pub fn materialize(&mut self, expression: &LinearExpression) -> Result<SparseRow<'_>> {
        let summands = expression.summands();
        if summands.iter().any(|summand| summand.column() == 0) {
            return Err(Error::InvalidColumn);
        }

        let count = summands.len();
        self.ensure_capacity(count);
        for (summand, column, coefficient) in izip!(summands, &mut self.column_indices, &mut self.coefficients) {
            *column = summand.column();
            *coefficient = summand.coefficient();
        }

        Ok(SparseRow {
            column_indices: &self.column_indices[..count],
            coefficients: &self.coefficients[..count],
        })
    }
}

/// An expression in backend form, borrowed from the scratch buffers it was written to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparseRow<'a> {
    column_indices: &'a [usize],
    coefficients: &'a [f64],
}

impl<'a> SparseRow<'a> {
    /// Number of summands.
    pub fn count(&self) -> usize {
        self.column_indices.len()
    }

    /// Column of each summand, numbered from 1.
    pub fn column_indices(&self) -> &'a [usize] {
        self.column_indices
    }

    /// Coefficient of each summand.
    pub fn coefficients(&self) -> &'a [f64] {
        self.coefficients
    }

    /// Copy the row out of the buffers, as (column indices, coefficients).
    #[allow(clippy::should_implement_trait)]
    pub fn to_owned(&self) -> (Vec<usize>, Vec<f64>) {
        (self.column_indices.to_vec(), self.coefficients.to_vec())
    }
}
