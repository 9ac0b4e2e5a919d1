//! punctual - exact single-machine sequencing with deadlines.
//!
//! Given jobs with an integer duration, a real profit, and an integer
//! deadline, pick a subset and an execution order, run back-to-back from
//! time 0 without gaps or preemption, collecting the profit of every job
//! that finishes at or before its deadline. The schedule is computed by
//! dynamic programming over the discretized timeline, so cost is
//! pseudo-polynomial in the largest deadline; see [`solver`] for the exact
//! semantics of the reported profit.

pub mod input;
pub mod job;
pub mod solver;
pub mod sorted_list;

pub use job::{ByDeadline, Job, JobList};
pub use solver::{solve, Solution};
pub use sorted_list::{ListError, SortOrder, SortedList};

/// Identifier assigned to jobs sequentially, starting at 1, in input order.
pub type JobId = u32;

/// Discrete time unit used for durations and deadlines.
pub type Time = u64;
