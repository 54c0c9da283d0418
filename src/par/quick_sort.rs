//! Adaptive parallel quicksort.

use crate::{
	config::{Config, Strategy},
	insertion_sort::insertion_sort,
	par::fork::{descend, join},
	partition::{midpoint, partition},
	quick_sort::quick_sort,
};
use core::mem;
use ndarray::{ArrayViewMut1, Axis};
use tracing::{debug, trace};

/// Sorts `v` by recursively partitioning it into work units of which large ones are sorted in
/// parallel, which is *O*(*n*^2) worst-case.
pub fn par_quick_sort<T, F>(v: ArrayViewMut1<'_, T>, config: &Config, is_less: F)
where
	T: Send,
	F: Fn(&T, &T) -> bool + Sync,
{
	// Sorting has no meaningful behavior on zero-sized types.
	if mem::size_of::<T>() == 0 {
		return;
	}

	debug!(
		len = v.len(),
		insertion_cutoff = config.insertion_cutoff(),
		sequential_threshold = config.sequential_threshold(),
		"sorting"
	);

	recurse(v, 0, config, &is_less);
}

/// Sorts the work unit `v` starting at index `offset` of the original array.
///
/// Both halves of a parallel split are views split off `v`, so concurrently live work units
/// never overlap and need no synchronization beyond the join.
fn recurse<T, F>(mut v: ArrayViewMut1<'_, T>, offset: usize, config: &Config, is_less: &F)
where
	T: Send,
	F: Fn(&T, &T) -> bool + Sync,
{
	let len = v.len();
	match config.strategy(len) {
		Strategy::Trivial => {}
		Strategy::Small => insertion_sort(v, &mut |a: &T, b: &T| is_less(a, b)),
		Strategy::Sequential => quick_sort(v, &mut |a: &T, b: &T| is_less(a, b)),
		Strategy::Parallel => {
			let mid = partition(v.view_mut(), midpoint(len), &mut |a: &T, b: &T| is_less(a, b));
			trace!(
				left = offset,
				pivot = offset + mid,
				right = offset + len - 1,
				"forking"
			);

			// Split the range into `left`, `pivot`, and `right`.
			let (left, right) = v.split_at(Axis(0), mid);
			let (_pivot, right) = right.split_at(Axis(0), 1);

			join(
				|| descend(|| recurse(left, offset, config, is_less)),
				|| descend(|| recurse(right, offset + mid + 1, config, is_less)),
			);
		}
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::par_quick_sort;
	use crate::config::Config;
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;

	fn sorted_with(xs: Vec<u32>, config: &Config) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		par_quick_sort(array.view_mut(), config, u32::lt);
		assert_eq!(array, sorted);
	}

	#[cfg_attr(miri, ignore)]
	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		sorted_with(xs, &Config::default());
	}

	#[cfg_attr(miri, ignore)]
	#[quickcheck]
	fn sorted_with_any_thresholds(xs: Vec<u32>, insertion_cutoff: u8, sequential_threshold: u8) {
		let config = Config::new()
			.with_insertion_cutoff(insertion_cutoff.into())
			.with_sequential_threshold(sequential_threshold.into());
		sorted_with(xs, &config);
	}

	#[test]
	fn forks_at_every_level() {
		let config = Config::new()
			.with_insertion_cutoff(0)
			.with_sequential_threshold(0);
		let mut array = arr1(&[5, 3, 8, 1, 9, 2]);
		par_quick_sort(array.view_mut(), &config, i32::lt);
		assert_eq!(array, arr1(&[1, 2, 3, 5, 8, 9]));
	}

	#[test]
	fn presorted_and_reversed() {
		let config = Config::new().with_sequential_threshold(64);
		let mut ascending = Array1::from_iter(0..20_000);
		par_quick_sort(ascending.view_mut(), &config, i32::lt);
		assert_eq!(ascending, Array1::from_iter(0..20_000));

		let mut descending = Array1::from_iter((0..20_000).rev());
		par_quick_sort(descending.view_mut(), &config, i32::lt);
		assert_eq!(descending, Array1::from_iter(0..20_000));
	}

	#[test]
	fn zero_sized() {
		let mut array = Array1::from_elem(10_000, ());
		par_quick_sort(array.view_mut(), &Config::default(), |_, _| unreachable!());
	}
}
