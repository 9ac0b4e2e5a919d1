//! Parsing job records from text input.
//!
//! One record per non-empty line, `duration,profit,deadline`: duration and
//! deadline as non-negative integers, profit as a real number. Blank lines
//! are skipped. Ids are assigned sequentially from 1 in input order, before
//! the list re-sorts the jobs by deadline. Malformed lines are reported
//! with their 1-based line number, never silently dropped.

use std::fs;
use std::num::{ParseFloatError, ParseIntError};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::job::{Job, JobList};
use crate::JobId;

/// Errors raised while reading or parsing job input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("line {line}: expected `duration,profit,deadline`, found {found} fields")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: invalid integer `{value}`")]
    InvalidInt {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: invalid profit `{value}`")]
    InvalidProfit {
        line: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn parse_int(line: usize, value: &str) -> Result<u64, InputError> {
    value.trim().parse().map_err(|source| InputError::InvalidInt {
        line,
        value: value.trim().to_owned(),
        source,
    })
}

fn parse_profit(line: usize, value: &str) -> Result<f64, InputError> {
    value
        .trim()
        .parse()
        .map_err(|source| InputError::InvalidProfit {
            line,
            value: value.trim().to_owned(),
            source,
        })
}

/// Parses job records from lines, producing a deadline-sorted list.
pub fn parse_jobs<'a, I>(lines: I) -> Result<JobList, InputError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut jobs = JobList::allowing_duplicates();
    let mut next_id: JobId = 1;
    for (lineno, raw) in lines.into_iter().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let lineno = lineno + 1;
        let fields: Vec<&str> = line.split(',').collect();
        let &[duration, profit, deadline] = fields.as_slice() else {
            return Err(InputError::FieldCount {
                line: lineno,
                found: fields.len(),
            });
        };
        let job = Job::new(
            next_id,
            parse_int(lineno, duration)?,
            parse_profit(lineno, profit)?,
            parse_int(lineno, deadline)?,
        );
        next_id += 1;
        // The list accepts deadline ties, so insertion cannot fail.
        let inserted = jobs.insert(job);
        debug_assert!(inserted.is_ok(), "duplicate-allowing list rejected an insert");
    }
    Ok(jobs)
}

/// Reads and parses a whole job file.
pub fn read_jobs(path: &Path) -> Result<JobList, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_owned(),
        source,
    })?;
    parse_jobs(text.lines())
}
