//! # Adding rows in bulk
use std::ops::{Deref, DerefMut};

use tracing::debug;

use crate::backend::Backend;
use crate::solver::Solver;

/// Keeps the backend in row adding mode for as long as it lives.
///
/// Dereferences to the solver, so constraints are added as usual. Dropping the guard restores the
/// mode as it was before, also when unwinding.
pub struct BulkInsert<'a, B: Backend> {
    solver: &'a mut Solver<B>,
    /// Whether the guard switched the mode on, and so has to switch it off again.
    switched_on: bool,
}

impl<'a, B: Backend> BulkInsert<'a, B> {
    pub(crate) fn new(solver: &'a mut Solver<B>) -> Self {
        let switched_on = solver.set_add_row_mode(true);
        debug!(
            component = "solver",
            operation = "bulk_insert",
            rows = solver.nr_rows() as u64,
            switched_on,
            "Adding rows in bulk"
        );

        Self { solver, switched_on }
    }
}

impl<B: Backend> Deref for BulkInsert<'_, B> {
    type Target = Solver<B>;

    fn deref(&self) -> &Self::Target {
        self.solver
    }
}

impl<B: Backend> DerefMut for BulkInsert<'_, B> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.solver
    }
}

impl<B: Backend> Drop for BulkInsert<'_, B> {
    fn drop(&mut self) {
        if self.switched_on {
            self.solver.set_add_row_mode(false);
        }
        debug!(component = "solver", operation = "bulk_insert", rows = self.solver.nr_rows() as u64, "Done adding rows");
    }
}
