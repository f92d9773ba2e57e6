// Filter operations over job records
// Author: Gabriel Demetrios Lafis

use crate::data::Record;
use super::{collect_valid, matches_salary_range, Salary, JOB_TYPE};

/// Keep records whose `field` equals `value`; records lacking the field are dropped
pub fn filter_by_field(records: &[Record], field: &str, value: &str) -> Vec<Record> {
    records
        .iter()
        .filter(|record| record.get(field) == Some(value))
        .cloned()
        .collect()
}

/// Keep records of the given job type, in original order
pub fn filter_by_job_type(records: &[Record], job_type: &str) -> Vec<Record> {
    filter_by_field(records, JOB_TYPE, job_type)
}

/// Keep jobs whose salary range contains `salary`.
///
/// Jobs with missing, non-numeric or inverted ranges are left out, as is
/// every job when `salary` itself is not an integer. This never fails.
pub fn filter_by_salary_range(jobs: &[Record], salary: impl Into<Salary>) -> Vec<Record> {
    let salary = salary.into();
    collect_valid(jobs, |job| matches_salary_range(job, &salary))
}
