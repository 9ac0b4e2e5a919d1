//! The profit table filled by the dynamic program.

use crate::job::{Job, JobList};
use crate::Time;

/// Start time of a job finishing exactly at `t`, or `None` when the job
/// cannot complete by `t` even when started at time 0.
pub(crate) fn earliest_start(t: Time, job: &Job) -> Option<Time> {
    t.checked_sub(job.duration())
}

/// Profit earned by `job` when it finishes exactly at `t`: the full profit
/// when on time, nothing once the deadline has passed.
pub(crate) fn on_time_profit(job: &Job, t: Time) -> f64 {
    if t <= job.deadline() {
        job.profit()
    } else {
        0.0
    }
}

/// Row-major `(horizon + 1) x jobs` table of achievable profit.
///
/// `get(t, i)` is the best profit using only the jobs at positions `0..=i`,
/// with every chosen job completing at or before `t`. Rows cover the whole
/// timeline `0..=horizon`, where the horizon is the largest deadline, so the
/// table is pseudo-polynomial in deadline magnitude.
#[derive(Debug)]
pub(crate) struct ProfitTable {
    cells: Vec<f64>,
    columns: usize,
}

impl ProfitTable {
    fn zeroed(horizon: Time, columns: usize) -> Self {
        let rows = horizon as usize + 1;
        Self {
            cells: vec![0.0; rows * columns],
            columns,
        }
    }

    pub(crate) fn get(&self, t: Time, i: usize) -> f64 {
        self.cells[t as usize * self.columns + i]
    }

    fn set(&mut self, t: Time, i: usize, value: f64) {
        self.cells[t as usize * self.columns + i] = value;
    }

    /// Fills the table for `jobs` (ascending by deadline) up to `horizon`.
    ///
    /// For each completion time `t >= 1` and position `i`, the cell is the
    /// better of scheduling job `i` to finish exactly at `t` (building on
    /// the predecessor column at the job's start time) or inheriting the
    /// best value over positions `0..i` at `t`. The first column has no
    /// predecessor and recurses on itself over earlier times instead;
    /// infeasible completion times leave a cell at its zero default.
    pub(crate) fn build(jobs: &JobList, horizon: Time) -> Self {
        let mut table = Self::zeroed(horizon, jobs.len());
        for t in 1..=horizon {
            for (i, job) in jobs.iter().enumerate() {
                match (i.checked_sub(1), earliest_start(t, job)) {
                    (Some(prev), Some(start)) => {
                        let take = table.get(start, prev) + on_time_profit(job, t);
                        let skip = table.get(t, prev);
                        table.set(t, i, take.max(skip));
                    }
                    (Some(prev), None) => {
                        table.set(t, i, table.get(t, prev));
                    }
                    (None, Some(start)) => {
                        let take = on_time_profit(job, t);
                        table.set(t, 0, table.get(start, 0).max(take));
                    }
                    // Cannot finish the first job at t: the cell keeps its
                    // zero default.
                    (None, None) => {}
                }
            }
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobs(specs: &[(Time, f64, Time)]) -> JobList {
        let mut list = JobList::allowing_duplicates();
        for (n, &(duration, profit, deadline)) in specs.iter().enumerate() {
            list.insert(Job::new(n as u32 + 1, duration, profit, deadline))
                .unwrap();
        }
        list
    }

    #[test]
    fn single_job_column() {
        // One job: 2 time units, profit 5, due at 3.
        let jobs = jobs(&[(2, 5.0, 3)]);
        let table = ProfitTable::build(&jobs, 3);
        assert_eq!(table.get(0, 0), 0.0);
        assert_eq!(table.get(1, 0), 0.0); // cannot finish by 1
        assert_eq!(table.get(2, 0), 5.0);
        assert_eq!(table.get(3, 0), 5.0);
    }

    #[test]
    fn late_completion_earns_nothing() {
        // Due at 1 but takes 2 units: never profitable.
        let jobs = jobs(&[(2, 5.0, 1), (1, 1.0, 4)]);
        let table = ProfitTable::build(&jobs, 4);
        assert_eq!(table.get(4, 0), 0.0);
        assert_eq!(table.get(4, 1), 1.0);
    }

    #[test]
    fn corner_cell_is_optimal_profit() {
        let jobs = jobs(&[(1, 1.0, 1), (1, 3.0, 2), (2, 2.0, 4), (3, 1.0, 7)]);
        let table = ProfitTable::build(&jobs, 7);
        assert_eq!(table.get(7, 3), 7.0);
    }

    #[test]
    fn feasibility_helpers() {
        let job = Job::new(1, 3, 2.0, 5);
        assert_eq!(earliest_start(5, &job), Some(2));
        assert_eq!(earliest_start(3, &job), Some(0));
        assert_eq!(earliest_start(2, &job), None);
        assert_eq!(on_time_profit(&job, 5), 2.0);
        assert_eq!(on_time_profit(&job, 6), 0.0);
    }
}
