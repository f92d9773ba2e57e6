// Processing module for querying job records
// Author: Gabriel Demetrios Lafis

mod filter;
mod aggregate;
mod salary;

pub use filter::*;
pub use aggregate::*;
pub use salary::*;

use log::debug;

use crate::data::Record;
use crate::utils::InsightsResult;

/// Field holding the job category
pub const JOB_TYPE: &str = "job_type";
/// Field holding the lower salary bound
pub const MIN_SALARY: &str = "min_salary";
/// Field holding the upper salary bound
pub const MAX_SALARY: &str = "max_salary";

/// Which end of a numeric column to aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Max,
    Min,
}

/// Keep the records for which `check` returns `Ok(true)`, in order.
///
/// Records for which `check` fails are skipped rather than aborting the
/// whole pass; each skip is logged at debug level.
pub fn collect_valid<'a, I, F>(records: I, mut check: F) -> Vec<Record>
where
    I: IntoIterator<Item = &'a Record>,
    F: FnMut(&Record) -> InsightsResult<bool>,
{
    records
        .into_iter()
        .filter(|record| match check(record) {
            Ok(keep) => keep,
            Err(err) => {
                debug!("Skipping record: {}", err);
                false
            }
        })
        .cloned()
        .collect()
}
