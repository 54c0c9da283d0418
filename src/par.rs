//! Fork/join dispatch of work units onto the task substrate.

pub mod fork;
pub mod quick_sort;
