//! Sequential quicksort taking the first element of each range as pivot.

use crate::partition::partition;
use ndarray::{ArrayViewMut1, Axis};

/// Sorts `v` using quicksort on the current thread, which is *O*(*n*^2) worst-case.
///
/// The pivot is always the first element of the range, hence already sorted or reverse-sorted
/// input hits the worst case. Ranges are partitioned all the way down to a length of one.
pub fn quick_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	while v.len() > 1 {
		let mid = partition(v.view_mut(), 0, is_less);

		// Split the range into `left`, `pivot`, and `right`.
		let (left, right) = v.split_at(Axis(0), mid);
		let (_pivot, right) = right.split_at(Axis(0), 1);

		// Recurse into the shorter side only in order to bound the stack depth by
		// `log2(len)`. Then just continue with the longer side.
		if left.len() < right.len() {
			quick_sort(left, is_less);
			v = right;
		} else {
			quick_sort(right, is_less);
			v = left;
		}
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::quick_sort;
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		quick_sort(array.view_mut(), &mut u32::lt);
		assert_eq!(array, sorted);
	}

	#[test]
	fn concrete() {
		let mut array = arr1(&[5, 3, 8, 1, 9, 2]);
		quick_sort(array.view_mut(), &mut i32::lt);
		assert_eq!(array, arr1(&[1, 2, 3, 5, 8, 9]));
	}

	#[test]
	fn presorted_and_reversed() {
		let mut ascending = Array1::from_iter(0..5_000);
		quick_sort(ascending.view_mut(), &mut i32::lt);
		assert_eq!(ascending, Array1::from_iter(0..5_000));

		let mut descending = Array1::from_iter((0..5_000).rev());
		quick_sort(descending.view_mut(), &mut i32::lt);
		assert_eq!(descending, Array1::from_iter(0..5_000));
	}

	#[test]
	fn all_equal() {
		let mut array = arr1(&[7, 7, 7, 7, 7]);
		quick_sort(array.view_mut(), &mut i32::lt);
		assert_eq!(array, arr1(&[7, 7, 7, 7, 7]));
	}
}
