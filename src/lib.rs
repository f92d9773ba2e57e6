// Job Insights
// Author: Gabriel Demetrios Lafis

//! # Job Insights
//!
//! Query job listings stored in a delimited text file.
//!
//! ## Features
//!
//! - Loading CSV files into ordered record sets, cached per path string
//! - Distinct job types and filtering by job type
//! - Highest and lowest advertised salaries
//! - Salary range checks and filtering by salary
//!
//! ## Example
//!
//! ```no_run
//! use job_insights::{
//!     filter_by_job_type, filter_by_salary_range, get_max_salary,
//!     get_unique_job_types, load,
//! };
//!
//! let jobs = load("data/jobs.csv")?;
//!
//! for job_type in get_unique_job_types("data/jobs.csv")? {
//!     let matching = filter_by_job_type(&jobs, &job_type);
//!     println!("{}: {} jobs", job_type, matching.len());
//! }
//!
//! println!("Top salary: {}", get_max_salary("data/jobs.csv")?);
//!
//! let affordable = filter_by_salary_range(&jobs, 3000);
//! println!("{} jobs pay 3000", affordable.len());
//! # Ok::<(), job_insights::InsightsError>(())
//! ```

pub mod data;
pub mod processing;
pub mod storage;
pub mod utils;

// Re-export main types
pub use data::{Record, RecordSet};
pub use processing::{
    filter_by_job_type, filter_by_salary_range, get_max_salary, get_min_salary,
    get_unique_job_types, matches_salary_range, Salary,
};
pub use storage::{load, Loader};
pub use utils::{Config, InsightsError, InsightsResult};
