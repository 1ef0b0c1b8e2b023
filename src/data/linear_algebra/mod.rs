//! # Linear algebra primitives
//!
//! Rows and columns of a linear program are stored as sorted lists of (index, value) tuples; the
//! implicit values are zero.
use itertools::Itertools;
use num_traits::Zero;

/// A single nonzero element of a sparse row or column.
pub type SparseTuple<F> = (usize, F);
/// Sorted list of nonzero elements, without duplicate indices.
pub type SparseTupleVec<F> = Vec<SparseTuple<F>>;

/// Collect (index, value) pairs into a sorted sparse vector.
///
/// Values sharing an index are added together; resulting zeros are not stored.
pub fn collect_sparse(pairs: impl IntoIterator<Item = SparseTuple<f64>>) -> SparseTupleVec<f64> {
    pairs.into_iter()
        .sorted_by(|(i, _), (j, _)| i.cmp(j))
        .coalesce(|(i, x), (j, y)| if i == j { Ok((i, x + y)) } else { Err(((i, x), (j, y))) })
        .filter(|(_, value)| !value.is_zero())
        .collect()
}

/// Collect the nonzero values of a dense slice.
///
/// # Arguments
///
/// * `values`: Dense values.
/// * `first_index`: Index given to the first element, 1 for one based row and column numbers.
pub fn sparse_from_dense(values: &[f64], first_index: usize) -> SparseTupleVec<f64> {
    values.iter().copied()
        .enumerate()
        .filter(|(_, value)| !value.is_zero())
        .map(|(i, value)| (i + first_index, value))
        .collect()
}

/// Read a value from a sorted sparse vector.
pub fn sparse_get(vector: &[SparseTuple<f64>], index: usize) -> f64 {
    match vector.binary_search_by(|&(i, _)| i.cmp(&index)) {
        Ok(position) => vector[position].1,
        Err(_) => 0_f64,
    }
}

/// Write a value into a sorted sparse vector, removing the element when it becomes zero.
pub fn sparse_set(vector: &mut SparseTupleVec<f64>, index: usize, value: f64) {
    match vector.binary_search_by(|&(i, _)| i.cmp(&index)) {
        Ok(position) if value.is_zero() => {
            vector.remove(position);
        },
        Ok(position) => vector[position].1 = value,
        Err(position) if !value.is_zero() => vector.insert(position, (index, value)),
        Err(_) => (),
    }
}

/// Inner product of a sparse vector with a dense one.
pub fn inner_product(sparse: &[SparseTuple<f64>], dense: &[f64]) -> f64 {
    sparse.iter().map(|&(i, value)| value * dense[i]).sum()
}

/// Whether indices are strictly increasing, used in debug assertions.
pub(crate) fn is_sorted_sparse<F>(vector: &[SparseTuple<F>]) -> bool {
    vector.windows(2).all(|w| w[0].0 < w[1].0)
}
