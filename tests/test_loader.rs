// Loader tests
// Author: Gabriel Demetrios Lafis

use std::io::Write;

use job_insights::{
    data::CsvSource,
    load,
    utils::{Config, ConfigError, LoggingConfig},
    InsightsError, Loader,
};
use tempfile::NamedTempFile;

const JOBS_CSV: &str = "\
job_title,company,job_type,min_salary,max_salary
Backend Developer,Acme,FULL_TIME,3000,5000
Intern,Globex,INTERN,800,1200
\"Analyst, Data\",Initech,FULL_TIME,,
";

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_preserves_rows_and_headers() {
    let file = write_csv(JOBS_CSV);
    let records = load(file.path().to_str().unwrap()).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(
        records.headers(),
        ["job_title", "company", "job_type", "min_salary", "max_salary"]
    );
    assert_eq!(records[0].get("job_title"), Some("Backend Developer"));
    assert_eq!(records[1].get("job_type"), Some("INTERN"));
    assert_eq!(records[2].get("job_title"), Some("Analyst, Data"));
    assert_eq!(records[2].get("min_salary"), Some(""));

    for record in &records {
        assert_eq!(record.len(), records.headers().len());
    }
}

#[test]
fn test_load_same_path_returns_cached_set() {
    let file = write_csv(JOBS_CSV);
    let path = file.path().to_str().unwrap();

    let first = load(path).unwrap();
    let second = load(path).unwrap();

    assert!(first.ptr_eq(&second));
    assert_eq!(second.source(), path);
}

#[test]
fn test_path_string_is_the_cache_key() {
    let file = write_csv(JOBS_CSV);
    let dir = file.path().parent().unwrap();
    let name = file.path().file_name().unwrap().to_str().unwrap();

    let direct = file.path().to_str().unwrap().to_string();
    let indirect = format!("{}/./{}", dir.display(), name);
    let loader = Loader::new();

    let first = loader.load(&direct).unwrap();
    let second = loader.load(&indirect).unwrap();

    assert!(!first.ptr_eq(&second));
    assert_eq!(first.records(), second.records());
    assert_eq!(loader.cached_paths().len(), 2);
}

#[test]
fn test_missing_file_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    let err = load(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, InsightsError::FileNotFound { .. }));
}

#[test]
fn test_directory_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();

    let err = CsvSource::new(dir.path().to_str().unwrap()).read().unwrap_err();
    assert!(matches!(err, InsightsError::FileNotFound { .. }));
}

#[test]
fn test_ragged_row_is_parse_error() {
    let file = write_csv("job_type,min_salary,max_salary\nFULL_TIME,1000\n");

    let err = Loader::new().load(file.path().to_str().unwrap()).unwrap_err();
    assert!(matches!(err, InsightsError::Parse { .. }));
}

#[test]
fn test_header_only_file_is_empty_set() {
    let file = write_csv("job_type,min_salary,max_salary\n");

    let records = Loader::new().load(file.path().to_str().unwrap()).unwrap();
    assert!(records.is_empty());
    assert_eq!(records.headers().len(), 3);
}

#[test]
fn test_config_from_yaml_and_json() {
    let dir = tempfile::tempdir().unwrap();

    let yaml = dir.path().join("insights.yaml");
    std::fs::write(
        &yaml,
        "loader:\n  delimiter: \";\"\n  trim: true\nlogging:\n  level: debug\n",
    )
    .unwrap();
    let config = Config::from_file(&yaml).unwrap();
    assert_eq!(config.loader.delimiter, ';');
    assert!(config.loader.trim);
    assert_eq!(config.log_level_filter(), log::LevelFilter::Debug);

    let json = dir.path().join("insights.json");
    std::fs::write(&json, r#"{"logging": {"level": "warn"}}"#).unwrap();
    let config = Config::from_file(&json).unwrap();
    assert_eq!(config.loader.delimiter, ',');
    assert_eq!(config.log_level_filter(), log::LevelFilter::Warn);
    assert!(config.logging.color);

    let toml = dir.path().join("insights.toml");
    std::fs::write(&toml, "").unwrap();
    assert!(matches!(
        Config::from_file(&toml),
        Err(ConfigError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_logging_level_names() {
    let level = |name: &str| {
        LoggingConfig {
            level: name.to_string(),
            color: false,
        }
        .level_filter()
    };

    assert_eq!(level("WARN"), log::LevelFilter::Warn);
    assert_eq!(level(" trace "), log::LevelFilter::Trace);
    assert_eq!(level("off"), log::LevelFilter::Off);
    assert_eq!(level("verbose"), log::LevelFilter::Info);
}

#[test]
fn test_logging_installs_once() {
    use job_insights::utils::{init_logging, init_logging_with};

    let config = LoggingConfig {
        level: "debug".to_string(),
        color: false,
    };
    assert!(init_logging_with(&config).is_ok());
    assert!(init_logging(log::LevelFilter::Info).is_err());

    // Loads keep working with the logger installed
    let file = write_csv(JOBS_CSV);
    assert_eq!(load(file.path().to_str().unwrap()).unwrap().len(), 3);
}
