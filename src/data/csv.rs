// CSV record source
// Author: Gabriel Demetrios Lafis

use std::fs::File;
use std::io::{self, BufReader};

use super::{Record, RecordSet};
use crate::utils::{InsightsError, InsightsResult};

/// Reads a delimited file with a header row into a `RecordSet`
pub struct CsvSource {
    path: String,
    delimiter: u8,
    trim: bool,
}

impl CsvSource {
    /// Create a comma-delimited source for the given path
    pub fn new(path: &str) -> Self {
        CsvSource {
            path: path.to_string(),
            delimiter: b',',
            trim: false,
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Strip surrounding whitespace from headers and values
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Read every row of the file
    pub fn read(&self) -> InsightsResult<RecordSet> {
        let file = self.open()?;

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .trim(if self.trim { csv::Trim::All } else { csv::Trim::None })
            .from_reader(BufReader::new(file));

        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(|e| self.csv_error(e))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut records = Vec::new();
        for result in csv_reader.records() {
            let row = result.map_err(|e| self.csv_error(e))?;
            let record: Record = headers
                .iter()
                .map(String::as_str)
                .zip(row.iter())
                .collect();
            records.push(record);
        }

        Ok(RecordSet::new(self.path.clone(), headers, records))
    }

    fn open(&self) -> InsightsResult<File> {
        let not_found = || InsightsError::FileNotFound {
            path: self.path.clone(),
        };

        let file = File::open(&self.path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => not_found(),
            _ => InsightsError::Io(err),
        })?;

        // Directories open fine on some platforms but cannot be read as text
        if !file.metadata()?.is_file() {
            return Err(not_found());
        }

        Ok(file)
    }

    fn csv_error(&self, err: csv::Error) -> InsightsError {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => InsightsError::Io(io_err),
            _ => InsightsError::Parse {
                path: self.path.clone(),
                message,
            },
        }
    }
}
