//! Lomuto partitioning and sortedness check.

use core::cmp::Ordering::{self, Equal, Less};
use ndarray::{ArrayView1, ArrayViewMut1};

/// Index of the middle element of a non-empty range of length `len`, rounding down.
///
/// For inclusive bounds `left..=right` this is `left + (right - left) / 2` relative to `left`.
#[inline]
pub fn midpoint(len: usize) -> usize {
	debug_assert!(len > 0);
	(len - 1) / 2
}

/// Partitions `v` around the element at `pivot` and returns the pivot's new index.
///
/// Afterwards, all elements left of the returned index are less than or equal to the pivot, the
/// pivot itself sits at the returned index, and all elements right of it are greater than or
/// equal to the pivot. Only elements of `v` are swapped, nothing is allocated.
///
/// # Panics
///
/// Panics if `pivot >= v.len()`.
pub fn partition<T, F>(mut v: ArrayViewMut1<'_, T>, pivot: usize, is_less: &mut F) -> usize
where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	if pivot >= len {
		panic!("partition pivot {pivot} out of bounds of slice of length {len}");
	}

	// Park the pivot at the end while scanning.
	let last = len - 1;
	v.swap(pivot, last);

	// Elements in `..store` are less than the pivot.
	let mut store = 0;
	for i in 0..last {
		if is_less(&v[i], &v[last]) {
			v.swap(i, store);
			store += 1;
		}
	}

	// Move the pivot between both partitions.
	v.swap(store, last);
	store
}

/// Checks whether adjacent pairs of `v` are in order, treating incomparable pairs as unordered.
pub fn is_sorted<T, F>(v: ArrayView1<'_, T>, mut compare: F) -> bool
where
	F: FnMut(&T, &T) -> Option<Ordering>,
{
	v.iter()
		.zip(v.iter().skip(1))
		.all(|(a, b)| matches!(compare(a, b), Some(Less | Equal)))
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{is_sorted, midpoint, partition};
	use ndarray::{Array1, arr1, s};
	use quickcheck::TestResult;
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn partitioned(xs: Vec<u32>, pivot: usize) -> TestResult {
		if xs.is_empty() {
			return TestResult::discard();
		}
		let pivot = pivot % xs.len();
		let value = xs[pivot];
		let mut expected = xs.clone();
		expected.sort_unstable();
		let mut array = Array1::from_vec(xs);
		let mid = partition(array.view_mut(), pivot, &mut u32::lt);
		assert_eq!(array[mid], value);
		assert!(array.slice(s![..mid]).iter().all(|&x| x <= value));
		assert!(array.slice(s![mid + 1..]).iter().all(|&x| x >= value));
		let mut actual = array.to_vec();
		actual.sort_unstable();
		assert_eq!(actual, expected);
		TestResult::passed()
	}

	#[test]
	fn leaves_outside_untouched() {
		let mut array = arr1(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
		let mid = partition(array.slice_mut(s![3..7]), 1, &mut i32::lt);
		assert_eq!(mid, 2);
		assert_eq!(array.slice(s![..3]), arr1(&[9, 8, 7]));
		assert_eq!(array.slice(s![7..]), arr1(&[2, 1, 0]));
		assert_eq!(array[3 + mid], 5);
	}

	#[test]
	fn single_element() {
		let mut array = arr1(&[42]);
		assert_eq!(partition(array.view_mut(), 0, &mut i32::lt), 0);
		assert_eq!(array, arr1(&[42]));
	}

	#[test]
	fn all_equal() {
		let mut array = arr1(&[7, 7, 7, 7, 7]);
		assert_eq!(partition(array.view_mut(), midpoint(5), &mut i32::lt), 0);
		assert_eq!(array, arr1(&[7, 7, 7, 7, 7]));
	}

	#[test]
	#[should_panic]
	fn pivot_out_of_bounds() {
		let mut array = arr1(&[1, 2, 3]);
		partition(array.view_mut(), 3, &mut i32::lt);
	}

	#[test]
	fn midpoints() {
		assert_eq!(midpoint(1), 0);
		assert_eq!(midpoint(2), 0);
		assert_eq!(midpoint(6), 2);
		assert_eq!(midpoint(7), 3);
	}

	#[test]
	fn sortedness() {
		assert!(is_sorted(arr1::<i32>(&[]).view(), i32::partial_cmp));
		assert!(is_sorted(arr1(&[1]).view(), i32::partial_cmp));
		assert!(is_sorted(arr1(&[1, 2, 2, 3]).view(), i32::partial_cmp));
		assert!(!is_sorted(arr1(&[3, 1, 2]).view(), i32::partial_cmp));
		assert!(!is_sorted(arr1(&[1.0, f64::NAN, 2.0]).view(), f64::partial_cmp));
	}
}
