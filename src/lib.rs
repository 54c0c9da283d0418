//! Adaptive fork/join [quicksort] for mutable 1-dimensional [`ndarray`] arrays and (sub)views
//! with arbitrary memory layout (e.g., non-contiguous).
//!
//! Every range of the array is sorted by one of three algorithms depending on its length:
//!
//!   * insertion sort for ranges of up to [`INSERTION_CUTOFF`] elements,
//!   * sequential quicksort with the first element as pivot for ranges shorter than
//!     [`SEQUENTIAL_THRESHOLD`],
//!   * otherwise the range is partitioned around its middle element and both halves are sorted
//!     in parallel as two independent work units, each choosing its own algorithm again.
//!
//! All work units operate on disjoint mutable views into the same array, hence sorting neither
//! copies the array nor takes any locks.
//!
//! # Example
//!
//! ```
//! use ndarray_qsort::{SortExt, ndarray::arr2};
//!
//! let mut v = arr2(&[[-5, 4, 1, -3,  2],
//!                    [ 8, 3, 2,  4,  8],
//!                    [38, 9, 3,  0,  3],
//!                    [ 4, 9, 0,  8, -1]]);
//!
//! // Mutable subview into the last column, which is non-contiguous.
//! let mut column = v.column_mut(4);
//! column.par_qsort();
//!
//! assert!(v == arr2(&[[-5, 4, 1, -3, -1],
//!                     [ 8, 3, 2,  4,  2],
//!                     [38, 9, 3,  0,  3],
//!                     [ 4, 9, 0,  8,  8]]));
//! ```
//!
//! # Current Implementation
//!
//! | Resource | Complexity                    |
//! |----------|-------------------------------|
//! | Time     | Best *O*(*n* log *n*)         |
//! | Time     | Average *O*(*n* log *n*)      |
//! | Time     | Worst *O*(*n*^2)              |
//! | Space    | *O*(log *n*) sequential stack |
//!
//! Pivots are fixed (middle element for parallel splits, first element for sequential ranges)
//! to keep sorting deterministic, so specifically patterned input can hit the worst case.
//! The sort is unstable (i.e., may reorder equal elements).
//!
//! # Features
//!
//!   * `std` for [`std::error::Error`] and `tracing/std`. Enabled by `default`.
//!   * `rayon` for sorting halves in parallel on Rayon's pool. Enabled by `default`. Without it,
//!     work units run one after the other on the calling thread.
//!   * `stacker` for growing the stack on demand during deep recursion. Enabled by `default`.
//!
//! [quicksort]: https://en.wikipedia.org/wiki/Quicksort

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod config;
mod error;
mod insertion_sort;
mod par;
mod partition;
mod quick_sort;

pub use crate::{
	config::{Config, INSERTION_CUTOFF, SEQUENTIAL_THRESHOLD, Strategy},
	error::Error,
};
pub use ndarray;

use crate::par::quick_sort::par_quick_sort;
use core::cmp::Ordering::{self, Less};
use ndarray::{ArrayBase, Data, DataMut, Ix1};

/// Sorts `v` in place with the default [`Config`].
///
/// # Examples
///
/// ```
/// use ndarray_qsort::ndarray::arr1;
///
/// let mut v = arr1(&[5, 3, 8, 1, 9, 2]);
/// ndarray_qsort::sort(&mut v);
/// assert_eq!(v, arr1(&[1, 2, 3, 5, 8, 9]));
/// ```
#[inline]
pub fn sort<A, S>(v: &mut ArrayBase<S, Ix1>)
where
	A: Ord + Send,
	S: DataMut<Elem = A>,
{
	Config::new().sort(v);
}

/// Sorts `v` in place with the default [`Config`], rejecting an absent array.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `v` is [`None`].
///
/// # Examples
///
/// ```
/// use ndarray_qsort::{Error, ndarray::{Array1, arr1}};
///
/// let mut v = arr1(&[3, 1, 2]);
/// assert_eq!(ndarray_qsort::try_sort(Some(&mut v)), Ok(()));
/// assert_eq!(v, arr1(&[1, 2, 3]));
///
/// let absent: Option<&mut Array1<i32>> = None;
/// assert!(matches!(ndarray_qsort::try_sort(absent), Err(Error::InvalidArgument(_))));
/// ```
#[inline]
pub fn try_sort<A, S>(v: Option<&mut ArrayBase<S, Ix1>>) -> Result<(), Error>
where
	A: Ord + Send,
	S: DataMut<Elem = A>,
{
	Config::new().try_sort(v)
}

/// Checks if the elements of `v` are sorted.
///
/// Empty and single-element arrays are sorted.
///
/// # Examples
///
/// ```
/// use ndarray_qsort::ndarray::arr1;
///
/// assert!(ndarray_qsort::is_sorted(&arr1(&[1, 2, 3])));
/// assert!(!ndarray_qsort::is_sorted(&arr1(&[3, 1, 2])));
/// ```
#[inline]
#[must_use]
pub fn is_sorted<A, S>(v: &ArrayBase<S, Ix1>) -> bool
where
	A: PartialOrd,
	S: Data<Elem = A>,
{
	partition::is_sorted(v.view(), A::partial_cmp)
}

impl Config {
	/// Sorts `v` in place.
	pub fn sort<A, S>(&self, v: &mut ArrayBase<S, Ix1>)
	where
		A: Ord + Send,
		S: DataMut<Elem = A>,
	{
		par_quick_sort(v.view_mut(), self, A::lt);
	}
	/// Sorts `v` in place with a comparator function.
	///
	/// The comparator function must define a total ordering for the elements in the array. If
	/// the ordering is not total, the order of the elements is unspecified.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_qsort::{Config, ndarray::arr1};
	///
	/// let mut v = arr1(&[5, 4, 1, 3, 2]);
	/// Config::new().sort_by(&mut v, |a, b| b.cmp(a));
	/// assert_eq!(v, arr1(&[5, 4, 3, 2, 1]));
	/// ```
	pub fn sort_by<A, S, F>(&self, v: &mut ArrayBase<S, Ix1>, compare: F)
	where
		A: Send,
		F: Fn(&A, &A) -> Ordering + Sync,
		S: DataMut<Elem = A>,
	{
		par_quick_sort(v.view_mut(), self, |a: &A, b: &A| compare(a, b) == Less);
	}
	/// Sorts `v` in place with a key extraction function.
	///
	/// The key function is called twice per comparison.
	pub fn sort_by_key<A, S, K, F>(&self, v: &mut ArrayBase<S, Ix1>, f: F)
	where
		A: Send,
		K: Ord,
		F: Fn(&A) -> K + Sync,
		S: DataMut<Elem = A>,
	{
		par_quick_sort(v.view_mut(), self, |a: &A, b: &A| f(a).lt(&f(b)));
	}
	/// Sorts `v` in place, rejecting an absent array before any work is scheduled.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidArgument`] if `v` is [`None`].
	pub fn try_sort<A, S>(&self, v: Option<&mut ArrayBase<S, Ix1>>) -> Result<(), Error>
	where
		A: Ord + Send,
		S: DataMut<Elem = A>,
	{
		let v = v.ok_or(Error::InvalidArgument("array to sort is absent"))?;
		self.sort(v);
		Ok(())
	}
	/// Sorts `v` in place on the threads of `pool` instead of Rayon's global pool.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_qsort::{Config, ndarray::Array1};
	///
	/// let pool = rayon::ThreadPoolBuilder::new().num_threads(2).build().unwrap();
	/// let mut v = Array1::from_iter((0..10_000).rev());
	/// Config::new().sort_in_pool(&pool, &mut v);
	/// assert_eq!(v, Array1::from_iter(0..10_000));
	/// ```
	#[cfg(feature = "rayon")]
	pub fn sort_in_pool<A, S>(&self, pool: &rayon::ThreadPool, v: &mut ArrayBase<S, Ix1>)
	where
		A: Ord + Send,
		S: DataMut<Elem = A>,
	{
		let v = v.view_mut();
		pool.install(move || par_quick_sort(v, self, A::lt));
	}
}

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing adaptive parallel quicksort.
pub trait SortExt<A, S>
where
	S: Data<Elem = A>,
{
	/// Sorts the array in parallel, but might not preserve the order of equal elements.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place
	/// (i.e., does not allocate), and *O*(*n*^2) worst-case.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_qsort::{SortExt, ndarray::arr1};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// v.par_qsort();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	fn par_qsort(&mut self)
	where
		A: Ord + Send,
		S: DataMut;
	/// Sorts the array in parallel with a comparator function, but might not preserve the order
	/// of equal elements.
	///
	/// The comparator function must define a total ordering for the elements in the array. If
	/// the ordering is not total, the order of the elements is unspecified. An order is a
	/// total order if it is (for all `a`, `b` and `c`):
	///
	/// * total and antisymmetric: exactly one of `a < b`, `a == b` or `a > b` is true, and
	/// * transitive, `a < b` and `b < c` implies `a < c`. The same must hold for both `==` and `>`.
	///
	/// For example, while [`f64`] doesn't implement [`Ord`] because `NaN != NaN`, we can use
	/// `partial_cmp` as our sort function when we know the array doesn't contain a `NaN`.
	///
	/// ```
	/// use ndarray_qsort::{SortExt, ndarray::arr1};
	///
	/// let mut floats = arr1(&[5f64, 4.0, 1.0, 3.0, 2.0]);
	/// floats.par_qsort_by(|a, b| a.partial_cmp(b).unwrap());
	/// assert_eq!(floats, arr1(&[1.0, 2.0, 3.0, 4.0, 5.0]));
	/// ```
	fn par_qsort_by<F>(&mut self, compare: F)
	where
		A: Send,
		F: Fn(&A, &A) -> Ordering + Sync,
		S: DataMut;
	/// Sorts the array in parallel with a key extraction function, but might not preserve the
	/// order of equal elements.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_qsort::{SortExt, ndarray::arr1};
	///
	/// let mut v = arr1(&[-5i32, 4, 1, -3, 2]);
	///
	/// v.par_qsort_by_key(|k| k.abs());
	/// assert!(v == arr1(&[1, 2, -3, 4, -5]));
	/// ```
	fn par_qsort_by_key<K, F>(&mut self, f: F)
	where
		A: Send,
		K: Ord,
		F: Fn(&A) -> K + Sync,
		S: DataMut;
	/// Sorts the array in parallel with custom thresholds.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_qsort::{Config, SortExt, ndarray::arr1};
	///
	/// // Skips insertion sort and forks down to ranges of two elements.
	/// let config = Config::new().with_insertion_cutoff(0).with_sequential_threshold(2);
	///
	/// let mut v = arr1(&[5, 3, 8, 1, 9, 2]);
	/// v.par_qsort_with(&config);
	/// assert!(v == arr1(&[1, 2, 3, 5, 8, 9]));
	/// ```
	fn par_qsort_with(&mut self, config: &Config)
	where
		A: Ord + Send,
		S: DataMut;

	/// Checks if the elements of this array are sorted.
	///
	/// That is, for each element `a` and its following element `b`, `a <= b` must hold. If the
	/// array yields exactly zero or one element, `true` is returned.
	///
	/// Note that if `Self::Item` is only `PartialOrd`, but not `Ord`, the above definition
	/// implies that this function returns `false` if any two consecutive items are not
	/// comparable.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_qsort::{SortExt, ndarray::{arr1, Array1}};
	///
	/// let empty: Array1<i32> = arr1(&[]);
	///
	/// assert!(arr1(&[1, 2, 2, 9]).is_sorted());
	/// assert!(!arr1(&[1, 3, 2, 4]).is_sorted());
	/// assert!(arr1(&[0]).is_sorted());
	/// assert!(empty.is_sorted());
	/// assert!(!arr1(&[0.0, 1.0, f32::NAN]).is_sorted());
	/// ```
	#[must_use]
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd;
	/// Checks if the elements of this array are sorted using the given comparator function.
	///
	/// Instead of using `PartialOrd::partial_cmp`, this function uses the given `compare`
	/// function to determine the ordering of two elements. Apart from that, it's equivalent to
	/// [`is_sorted`](SortExt::is_sorted); see its documentation for more information.
	#[must_use]
	fn is_sorted_by<F>(&self, compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Option<Ordering>;
	/// Checks if the elements of this array are sorted using the given key extraction function.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_qsort::{SortExt, ndarray::arr1};
	///
	/// assert!(arr1(&["c", "bb", "aaa"]).is_sorted_by_key(|s| s.len()));
	/// assert!(!arr1(&[-2i32, -1, 0, 3]).is_sorted_by_key(|n| n.abs()));
	/// ```
	#[must_use]
	fn is_sorted_by_key<F, K>(&self, f: F) -> bool
	where
		F: FnMut(&A) -> K,
		K: PartialOrd;
}

impl<A, S> SortExt<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[inline]
	fn par_qsort(&mut self)
	where
		A: Ord + Send,
		S: DataMut,
	{
		Config::new().sort(self);
	}
	#[inline]
	fn par_qsort_by<F>(&mut self, compare: F)
	where
		A: Send,
		F: Fn(&A, &A) -> Ordering + Sync,
		S: DataMut,
	{
		Config::new().sort_by(self, compare);
	}
	#[inline]
	fn par_qsort_by_key<K, F>(&mut self, f: F)
	where
		A: Send,
		K: Ord,
		F: Fn(&A) -> K + Sync,
		S: DataMut,
	{
		Config::new().sort_by_key(self, f);
	}
	#[inline]
	fn par_qsort_with(&mut self, config: &Config)
	where
		A: Ord + Send,
		S: DataMut,
	{
		config.sort(self);
	}

	#[inline]
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd,
	{
		partition::is_sorted(self.view(), |a, b| a.partial_cmp(b))
	}
	#[inline]
	fn is_sorted_by<F>(&self, compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Option<Ordering>,
	{
		partition::is_sorted(self.view(), compare)
	}
	#[inline]
	fn is_sorted_by_key<F, K>(&self, mut f: F) -> bool
	where
		F: FnMut(&A) -> K,
		K: PartialOrd,
	{
		partition::is_sorted(self.view(), |a, b| f(a).partial_cmp(&f(b)))
	}
}
