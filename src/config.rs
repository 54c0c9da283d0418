//! Thresholds steering the per-range choice between insertion sort, sequential quicksort, and
//! parallel quicksort.

/// Ranges of up to this length get sorted using insertion sort.
pub const INSERTION_CUTOFF: usize = 150;

/// Ranges of at least this length get partitioned and their halves sorted in parallel. This is
/// chosen so that the overhead of task scheduling is negligible compared to the sorting work.
pub const SEQUENTIAL_THRESHOLD: usize = 1_000;

/// How a single range gets sorted, see [`Config::strategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
	/// Ranges of length zero or one are sorted by definition.
	Trivial,
	/// Insertion sort.
	Small,
	/// Quicksort with the first element as pivot, recursing on the current thread.
	Sequential,
	/// Partition around the middle element and sort both halves as two parallel work units.
	Parallel,
}

/// Construction-time configuration of the sort.
///
/// Lowering [`insertion_cutoff`](Self::insertion_cutoff) trades insertion sort for partitioning
/// overhead. Lowering [`sequential_threshold`](Self::sequential_threshold) spawns more tasks,
/// improving utilization on larger inputs at the cost of scheduling overhead.
///
/// # Examples
///
/// ```
/// use ndarray_qsort::{Config, Strategy, ndarray::arr1};
///
/// let config = Config::new().with_insertion_cutoff(0).with_sequential_threshold(4);
/// assert_eq!(config.strategy(3), Strategy::Sequential);
/// assert_eq!(config.strategy(4), Strategy::Parallel);
///
/// let mut v = arr1(&[5, 3, 8, 1, 9, 2]);
/// config.sort(&mut v);
/// assert_eq!(v, arr1(&[1, 2, 3, 5, 8, 9]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
	insertion_cutoff: usize,
	sequential_threshold: usize,
}

impl Default for Config {
	fn default() -> Self {
		Self::new()
	}
}

impl Config {
	/// Configuration with [`INSERTION_CUTOFF`] and [`SEQUENTIAL_THRESHOLD`].
	#[must_use]
	pub const fn new() -> Self {
		Self {
			insertion_cutoff: INSERTION_CUTOFF,
			sequential_threshold: SEQUENTIAL_THRESHOLD,
		}
	}
	/// Sets the maximum length of ranges sorted by insertion sort.
	#[must_use]
	pub const fn with_insertion_cutoff(mut self, insertion_cutoff: usize) -> Self {
		self.insertion_cutoff = insertion_cutoff;
		self
	}
	/// Sets the minimum length of ranges whose halves are sorted in parallel.
	#[must_use]
	pub const fn with_sequential_threshold(mut self, sequential_threshold: usize) -> Self {
		self.sequential_threshold = sequential_threshold;
		self
	}
	/// Maximum length of ranges sorted by insertion sort.
	#[must_use]
	pub const fn insertion_cutoff(&self) -> usize {
		self.insertion_cutoff
	}
	/// Minimum length of ranges whose halves are sorted in parallel.
	#[must_use]
	pub const fn sequential_threshold(&self) -> usize {
		self.sequential_threshold
	}
	/// Decides how a range of length `len` gets sorted.
	///
	/// The decision is made per range: a [`Strategy::Parallel`] range may well produce halves
	/// which are [`Strategy::Sequential`] or [`Strategy::Small`].
	#[must_use]
	pub const fn strategy(&self, len: usize) -> Strategy {
		if len <= 1 {
			Strategy::Trivial
		} else if len <= self.insertion_cutoff {
			Strategy::Small
		} else if len < self.sequential_threshold {
			Strategy::Sequential
		} else {
			Strategy::Parallel
		}
	}
}

#[cfg(test)]
mod test {
	use super::{Config, INSERTION_CUTOFF, SEQUENTIAL_THRESHOLD, Strategy};

	#[test]
	fn default_boundaries() {
		let config = Config::default();
		assert_eq!(config.strategy(0), Strategy::Trivial);
		assert_eq!(config.strategy(1), Strategy::Trivial);
		assert_eq!(config.strategy(2), Strategy::Small);
		assert_eq!(config.strategy(INSERTION_CUTOFF), Strategy::Small);
		assert_eq!(config.strategy(INSERTION_CUTOFF + 1), Strategy::Sequential);
		assert_eq!(config.strategy(SEQUENTIAL_THRESHOLD - 1), Strategy::Sequential);
		assert_eq!(config.strategy(SEQUENTIAL_THRESHOLD), Strategy::Parallel);
		assert_eq!(config.strategy(usize::MAX), Strategy::Parallel);
	}

	#[test]
	fn zero_cutoff_never_uses_insertion_sort() {
		let config = Config::new().with_insertion_cutoff(0);
		assert_eq!(config.strategy(1), Strategy::Trivial);
		assert_eq!(config.strategy(2), Strategy::Sequential);
	}

	#[test]
	fn cutoff_above_threshold_shadows_parallel() {
		let config = Config::new()
			.with_insertion_cutoff(2_000)
			.with_sequential_threshold(1_000);
		assert_eq!(config.strategy(1_500), Strategy::Small);
		assert_eq!(config.strategy(2_001), Strategy::Parallel);
	}
}
