// Aggregation operations over job records
// Author: Gabriel Demetrios Lafis

use std::collections::HashSet;

use log::warn;

use crate::data::Record;
use crate::storage::load;
use crate::utils::{InsightsError, InsightsResult};
use super::{Extremum, JOB_TYPE, MAX_SALARY, MIN_SALARY};

/// Distinct values of `field`; fails with `MissingField` if any record lacks it
pub fn unique_values(records: &[Record], field: &str) -> InsightsResult<HashSet<String>> {
    records
        .iter()
        .map(|record| record.require(field).map(str::to_string))
        .collect()
}

/// Distinct job types across the records
pub fn unique_job_types(records: &[Record]) -> InsightsResult<HashSet<String>> {
    unique_values(records, JOB_TYPE)
}

/// Distinct job types in the file at `path`
pub fn get_unique_job_types(path: &str) -> InsightsResult<HashSet<String>> {
    let records = load(path)?;
    unique_job_types(&records)
}

/// True for a non-empty string of ASCII decimal digits
pub fn is_decimal_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Magnitude ordering key for a digit string: significant length, then digits
fn digit_magnitude(value: &str) -> (usize, &str) {
    let significant = value.trim_start_matches('0');
    (significant.len(), significant)
}

/// Largest or smallest integer value of `field`.
///
/// Only values made entirely of decimal digits count; signed, fractional,
/// blank or absent values are ignored. Values are compared as digit strings,
/// so the winner is exact even when other candidates exceed `i64`.
/// Fails with `EmptyResult` when nothing qualifies and with `Overflow` when
/// the winner does not fit in `i64`.
pub fn aggregate_numeric(
    records: &[Record],
    field: &str,
    extremum: Extremum,
) -> InsightsResult<i64> {
    let values = records
        .iter()
        .filter_map(|record| record.get(field))
        .filter(|value| is_decimal_digits(value));

    let winner = match extremum {
        Extremum::Max => values.max_by_key(|value| digit_magnitude(*value)),
        Extremum::Min => values.min_by_key(|value| digit_magnitude(*value)),
    };

    let winner = winner.ok_or_else(|| {
        warn!("No numeric '{}' values among {} records", field, records.len());
        InsightsError::EmptyResult {
            field: field.to_string(),
        }
    })?;

    winner.parse::<i64>().map_err(|_| InsightsError::Overflow {
        field: field.to_string(),
        value: winner.to_string(),
    })
}

/// Highest `max_salary` across the records
pub fn max_salary(records: &[Record]) -> InsightsResult<i64> {
    aggregate_numeric(records, MAX_SALARY, Extremum::Max)
}

/// Lowest `min_salary` across the records
pub fn min_salary(records: &[Record]) -> InsightsResult<i64> {
    aggregate_numeric(records, MIN_SALARY, Extremum::Min)
}

/// Highest `max_salary` in the file at `path`
pub fn get_max_salary(path: &str) -> InsightsResult<i64> {
    let records = load(path)?;
    max_salary(&records)
}

/// Lowest `min_salary` in the file at `path`
pub fn get_min_salary(path: &str) -> InsightsResult<i64> {
    let records = load(path)?;
    min_salary(&records)
}
