// Salary range checks
// Author: Gabriel Demetrios Lafis

use crate::data::Record;
use crate::utils::{InsightsError, InsightsResult};
use super::{MAX_SALARY, MIN_SALARY};

/// A salary to test against a job's range, given as a number or as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Salary {
    Amount(i64),
    Text(String),
}

impl Salary {
    /// Integer value; text is parsed like an integer literal
    pub fn amount(&self) -> InsightsResult<i64> {
        match self {
            Salary::Amount(amount) => Ok(*amount),
            Salary::Text(text) => parse_integer(text, "salary"),
        }
    }
}

impl From<i64> for Salary {
    fn from(amount: i64) -> Self {
        Salary::Amount(amount)
    }
}

impl From<i32> for Salary {
    fn from(amount: i32) -> Self {
        Salary::Amount(i64::from(amount))
    }
}

impl From<u32> for Salary {
    fn from(amount: u32) -> Self {
        Salary::Amount(i64::from(amount))
    }
}

impl From<&str> for Salary {
    fn from(text: &str) -> Self {
        Salary::Text(text.to_string())
    }
}

impl From<String> for Salary {
    fn from(text: String) -> Self {
        Salary::Text(text)
    }
}

impl From<&Salary> for Salary {
    fn from(salary: &Salary) -> Self {
        salary.clone()
    }
}

/// Check whether `salary` lies within the job's inclusive salary range.
///
/// Fails with `InvalidRange` when either bound is missing or not an
/// integer, when `salary` is not an integer, or when the job's
/// `min_salary` exceeds its `max_salary`.
pub fn matches_salary_range(job: &Record, salary: impl Into<Salary>) -> InsightsResult<bool> {
    let max_salary = salary_bound(job, MAX_SALARY)?;
    let min_salary = salary_bound(job, MIN_SALARY)?;
    let salary = salary.into().amount()?;

    if min_salary > max_salary {
        return Err(InsightsError::InvalidRange(format!(
            "{} {} is greater than {} {}",
            MIN_SALARY, min_salary, MAX_SALARY, max_salary
        )));
    }

    Ok(min_salary <= salary && salary <= max_salary)
}

fn salary_bound(job: &Record, field: &str) -> InsightsResult<i64> {
    let raw = job
        .get(field)
        .ok_or_else(|| InsightsError::InvalidRange(format!("missing {}", field)))?;
    parse_integer(raw, field)
}

/// Parse an optionally signed base-10 integer, ignoring surrounding whitespace
fn parse_integer(raw: &str, what: &str) -> InsightsResult<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        InsightsError::InvalidRange(format!("{} '{}' is not a valid integer", what, raw))
    })
}
