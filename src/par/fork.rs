//! Seam onto the task substrate.
//!
//! With the `rayon` feature, work units run on Rayon's work-stealing pool, either the global one
//! or the one the caller [`install`](rayon::ThreadPool::install)ed. Without it, both units of a
//! fork run one after the other on the calling thread.

/// Below this much remaining stack, [`descend`] switches to a freshly allocated segment.
#[cfg(feature = "stacker")]
const RED_ZONE: usize = 64 * 1024;
/// Size of each freshly allocated stack segment.
#[cfg(feature = "stacker")]
const STACK_SIZE: usize = 1024 * 1024;

/// Runs `a` and `b`, potentially in parallel, and returns once both have completed.
#[cfg(feature = "rayon")]
#[inline]
pub fn join<A, B>(a: A, b: B)
where
	A: FnOnce() + Send,
	B: FnOnce() + Send,
{
	rayon::join(a, b);
}

/// Runs `a` and then `b`.
#[cfg(not(feature = "rayon"))]
#[inline]
pub fn join<A, B>(a: A, b: B)
where
	A: FnOnce() + Send,
	B: FnOnce() + Send,
{
	a();
	b();
}

/// Calls `f` one recursion level deeper, growing the stack first if it is about to run out.
#[cfg(feature = "stacker")]
#[inline]
pub fn descend<R, F>(f: F) -> R
where
	F: FnOnce() -> R,
{
	stacker::maybe_grow(RED_ZONE, STACK_SIZE, f)
}

/// Calls `f` one recursion level deeper.
#[cfg(not(feature = "stacker"))]
#[inline]
pub fn descend<R, F>(f: F) -> R
where
	F: FnOnce() -> R,
{
	f()
}
