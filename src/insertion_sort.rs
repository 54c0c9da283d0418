//! Insertion sort for short ranges.

use ndarray::ArrayViewMut1;

/// Sorts `v` using insertion sort, which is *O*(*n*^2) worst-case.
///
/// Each element is swapped leftward past its greater predecessors, one adjacent swap at a time,
/// until it meets a predecessor not greater than itself or the start of `v`.
pub fn insertion_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	for i in 1..v.len() {
		let mut j = i;
		while j > 0 && is_less(&v[j], &v[j - 1]) {
			v.swap(j, j - 1);
			j -= 1;
		}
	}
}
