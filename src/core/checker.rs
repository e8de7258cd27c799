//! Adjacent-pair sortedness checks.
//!
//! A slice is ascending when every element is less than or equal to its
//! successor. Empty and single-element slices have no pair to violate this and
//! are always ascending.

/// Returns `true` if `values` is in non-decreasing order.
///
/// Stops at the first adjacent inversion.
pub fn is_ascending<T: PartialOrd>(values: &[T]) -> bool {
    is_ascending_by(values, |a, b| a <= b)
}

/// Same scan as [`is_ascending`] with a caller-supplied `le` predicate.
pub fn is_ascending_by<T, F>(values: &[T], le: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    first_inversion_by(values, le).is_none()
}

/// Index `i` of the first pair with `values[i] > values[i + 1]`.
pub fn first_inversion<T: PartialOrd>(values: &[T]) -> Option<usize> {
    first_inversion_by(values, |a, b| a <= b)
}

/// Index of the first pair for which `le` fails. Pairs after it are never compared.
pub fn first_inversion_by<T, F>(values: &[T], mut le: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    values.windows(2).position(|pair| !le(&pair[0], &pair[1]))
}
