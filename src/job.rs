//! The job record and its deadline ordering.

use std::cmp::Ordering;
use std::fmt;

use crate::sorted_list::{SortOrder, SortedList};
use crate::{JobId, Time};

/// A unit of work: run for `duration` time units and collect `profit`, but
/// only if it completes at or before `deadline`.
///
/// Immutable after construction. Jobs carry no ordering of their own;
/// collections that need one use [`ByDeadline`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Job {
    id: JobId,
    duration: Time,
    profit: f64,
    deadline: Time,
}

impl Job {
    pub fn new(id: JobId, duration: Time, profit: f64, deadline: Time) -> Self {
        Self {
            id,
            duration,
            profit,
            deadline,
        }
    }

    pub fn id(&self) -> JobId {
        self.id
    }

    pub fn duration(&self) -> Time {
        self.duration
    }

    pub fn profit(&self) -> f64 {
        self.profit
    }

    /// Latest time at which this job may complete and still earn its profit.
    pub fn deadline(&self) -> Time {
        self.deadline
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(d={}, p={}, due={})",
            self.id, self.duration, self.profit, self.deadline
        )
    }
}

/// Orders jobs by deadline only; duration and profit are never tie-breakers.
#[derive(Debug, Clone, Copy)]
pub struct ByDeadline;

impl SortOrder<Job> for ByDeadline {
    fn cmp(a: &Job, b: &Job) -> Ordering {
        a.deadline.cmp(&b.deadline)
    }
}

/// Jobs kept ascending by deadline, deadline ties permitted.
///
/// Note the tie-break consequence of insert-before-equals: among jobs
/// sharing a deadline, the most recently inserted occupies the lowest
/// position, so input order among ties is reversed in position space. The
/// solver treats position order as both precedence and execution order, and
/// tests pin this behavior down.
pub type JobList = SortedList<Job, ByDeadline>;
