//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use crate::algorithm::simplex::tableau::Tableau;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected for a primal pivot, a row needs to be found. This decision is
/// currently made independent of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;
    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// A column that may enter the basis, together with its relative cost, or `None` if no column
    /// improves the objective.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<(usize, f64)>;
}

/// Simply pivot on the first column, which has a negative relative cost.
///
/// Together with the leaving row chosen by lowest basis index this is Bland's rule, which does not
/// cycle.
pub struct FirstProfitable;

impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<(usize, f64)> {
        (0..tableau.nr_enterable_columns())
            .filter(|&column| !tableau.is_in_basis(column))
            .map(|column| (column, tableau.relative_cost(column)))
            .find(|&(_, cost)| cost < -tableau.epsilon())
    }
}
