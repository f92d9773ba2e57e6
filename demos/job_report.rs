// Job report example
// Author: Gabriel Demetrios Lafis

use clap::{Arg, Command};
use log::error;

use job_insights::{
    filter_by_job_type, filter_by_salary_range, get_max_salary, get_min_salary,
    get_unique_job_types, load,
    storage::configure_default_loader,
    utils::{init_logging_with, Config},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("job_report")
        .about("Summarize a CSV file of job listings")
        .arg(
            Arg::new("file")
                .help("CSV file with job_type, min_salary and max_salary columns")
                .value_parser(clap::value_parser!(String))
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("salary")
                .short('s')
                .long("salary")
                .value_name("SALARY")
                .help("List jobs whose salary range contains this value")
                .takes_value(true)
                .value_parser(clap::value_parser!(String)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("JSON or YAML configuration file")
                .takes_value(true)
                .value_parser(clap::value_parser!(String)),
        )
        .get_matches();

    let config = match matches.get_one::<String>("config") {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Err(err) = init_logging_with(&config.logging) {
        eprintln!("Error initializing logger: {}", err);
    }
    configure_default_loader(&config.loader)?;

    let path = matches
        .get_one::<String>("file")
        .ok_or("missing file argument")?;

    let jobs = match load(path) {
        Ok(jobs) => jobs,
        Err(err) => {
            error!("{}", err);
            return Err(err.into());
        }
    };
    println!("{} jobs in {}", jobs.len(), path);

    let mut job_types: Vec<String> = get_unique_job_types(path)?.into_iter().collect();
    job_types.sort();
    for job_type in &job_types {
        println!("  {:<12} {}", job_type, filter_by_job_type(&jobs, job_type).len());
    }

    match (get_min_salary(path), get_max_salary(path)) {
        (Ok(min), Ok(max)) => println!("Salaries range from {} to {}", min, max),
        (min, max) => println!("Salary bounds unavailable: {:?} / {:?}", min.err(), max.err()),
    }

    if let Some(salary) = matches.get_one::<String>("salary") {
        let matching = filter_by_salary_range(&jobs, salary.as_str());
        println!("{} jobs pay {}", matching.len(), salary);
    }

    Ok(())
}
