//! Error type of the fallible entry points.

use core::fmt::{self, Display, Formatter};

/// Error returned by [`try_sort`](crate::try_sort) and [`Config::try_sort`](crate::Config::try_sort).
///
/// It is reported before any work is scheduled, so the buffer is never partially sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
	/// An argument was rejected at the entry point, e.g., the buffer is absent.
	InvalidArgument(&'static str),
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidArgument(reason) => write!(f, "invalid argument: {reason}"),
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::Error;

	#[test]
	fn display() {
		let error = Error::InvalidArgument("buffer is absent");
		assert_eq!(error.to_string(), "invalid argument: buffer is absent");
	}
}
