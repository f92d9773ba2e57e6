// Memoizing record loader
// Author: Gabriel Demetrios Lafis

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock};

use log::{debug, error, info};

use crate::data::{CsvSource, RecordSet};
use crate::utils::{ConfigError, InsightsResult, LoaderConfig};

/// Cache entry for one path string
#[derive(Default)]
struct Slot {
    /// Set once, by the first successful load
    records: OnceLock<RecordSet>,
    /// Held while reading the file so concurrent first loads wait
    loading: Mutex<()>,
}

/// Loads record sets from delimited files, caching each by its path string.
///
/// Entries are never evicted or invalidated. Only successful loads are
/// cached, so a failed path is read again on the next call. Concurrent
/// first loads of the same path wait on that path's slot and share one read;
/// reads of a cached path take only the map's read lock.
pub struct Loader {
    delimiter: u8,
    trim: bool,
    slots: RwLock<HashMap<String, Arc<Slot>>>,
}

impl Loader {
    /// Create a loader for comma-delimited files
    pub fn new() -> Self {
        Loader {
            delimiter: b',',
            trim: false,
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Create a loader from configuration
    pub fn with_config(config: &LoaderConfig) -> Result<Self, ConfigError> {
        Ok(Loader {
            delimiter: config.delimiter_byte()?,
            trim: config.trim,
            slots: RwLock::new(HashMap::new()),
        })
    }

    /// Load the records at `path`, reading the file only on the first
    /// successful call for that exact string
    pub fn load(&self, path: &str) -> InsightsResult<RecordSet> {
        if let Some(records) = self.cached(path) {
            debug!("Cache hit for {}", path);
            return Ok(records);
        }

        let slot = self.slot(path);
        let _loading = slot.loading.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(records) = slot.records.get() {
            debug!("Cache hit for {} after waiting on another load", path);
            return Ok(records.clone());
        }

        let source = CsvSource::new(path)
            .with_delimiter(self.delimiter)
            .with_trim(self.trim);

        match source.read() {
            Ok(records) => {
                info!("Loaded {} records from {}", records.len(), path);
                // Only this thread sets the slot while it holds `loading`
                let _ = slot.records.set(records.clone());
                self.publish(path, &slot);
                Ok(records)
            }
            Err(err) => {
                error!("Failed to load {}: {}", path, err);
                self.discard(path, &slot);
                Err(err)
            }
        }
    }

    /// Check whether a successful load of `path` is cached
    pub fn is_cached(&self, path: &str) -> bool {
        self.cached(path).is_some()
    }

    /// Paths with a cached record set, sorted
    pub fn cached_paths(&self) -> Vec<String> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        let mut paths: Vec<String> = slots
            .iter()
            .filter(|(_, slot)| slot.records.get().is_some())
            .map(|(path, _)| path.clone())
            .collect();
        paths.sort();
        paths
    }

    /// Number of cached record sets
    pub fn len(&self) -> usize {
        self.cached_paths().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cached(&self, path: &str) -> Option<RecordSet> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots.get(path).and_then(|slot| slot.records.get().cloned())
    }

    fn slot(&self, path: &str) -> Arc<Slot> {
        {
            let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(slot) = slots.get(path) {
                return Arc::clone(slot);
            }
        }

        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(path.to_string()).or_default())
    }

    /// Drop the entry for a failed path so failures leave nothing behind.
    ///
    /// Callers already waiting on the slot retry the read themselves and
    /// publish the slot again if they succeed.
    fn discard(&self, path: &str, slot: &Arc<Slot>) {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        if slots.get(path).map_or(false, |current| Arc::ptr_eq(current, slot)) {
            slots.remove(path);
        }
    }

    fn publish(&self, path: &str, slot: &Arc<Slot>) {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        slots
            .entry(path.to_string())
            .or_insert_with(|| Arc::clone(slot));
    }
}

impl Default for Loader {
    fn default() -> Self {
        Loader::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Barrier;
    use std::thread;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("late.csv");
        let path_str = path.to_str().unwrap();
        let loader = Loader::new();

        assert!(loader.load(path_str).is_err());
        assert!(!loader.is_cached(path_str));
        assert!(loader.is_empty());

        std::fs::write(&path, "job_type\nFULL_TIME\n").unwrap();

        let records = loader.load(path_str).unwrap();
        assert_eq!(records.len(), 1);
        assert!(loader.is_cached(path_str));
    }

    #[test]
    fn test_failed_loads_leave_no_entries() {
        let dir = tempfile::tempdir().unwrap();
        let loader = Loader::new();

        for i in 0..100 {
            let path = dir.path().join(format!("missing-{}.csv", i));
            assert!(loader.load(path.to_str().unwrap()).is_err());
        }

        assert!(loader.slots.read().unwrap().is_empty());
    }

    #[test]
    fn test_cached_read_does_not_wait_on_loading_lock() {
        let file = write_csv("job_type\nFULL_TIME\n");
        let path = file.path().to_str().unwrap().to_string();
        let loader = Arc::new(Loader::new());
        loader.load(&path).unwrap();

        let slot = Arc::clone(loader.slots.read().unwrap().get(&path).unwrap());
        let _held = slot.loading.lock().unwrap();

        let reader = {
            let loader = Arc::clone(&loader);
            let path = path.clone();
            thread::spawn(move || loader.load(&path).map(|records| records.len()))
        };

        assert_eq!(reader.join().unwrap().unwrap(), 1);
    }

    #[test]
    fn test_cached_set_survives_file_change() {
        let file = write_csv("job_type\nFULL_TIME\n");
        let path = file.path().to_str().unwrap();
        let loader = Loader::new();

        let first = loader.load(path).unwrap();
        std::fs::write(file.path(), "job_type\nINTERN\nPART_TIME\n").unwrap();
        let second = loader.load(path).unwrap();

        assert!(first.ptr_eq(&second));
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_concurrent_first_loads_share_one_set() {
        let file = write_csv("job_type,min_salary,max_salary\nFULL_TIME,1,2\n");
        let path = file.path().to_str().unwrap().to_string();
        let loader = Arc::new(Loader::new());
        let barrier = Arc::new(Barrier::new(4));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let loader = Arc::clone(&loader);
                let barrier = Arc::clone(&barrier);
                let path = path.clone();
                thread::spawn(move || {
                    barrier.wait();
                    loader.load(&path).unwrap()
                })
            })
            .collect();

        let sets: Vec<RecordSet> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(sets.iter().all(|set| set.ptr_eq(&sets[0])));
        assert_eq!(loader.cached_paths(), vec![path]);
    }

    #[test]
    fn test_semicolon_delimiter_from_config() {
        let file = write_csv("job_type; max_salary\nINTERN; 900\n");
        let config = LoaderConfig {
            delimiter: ';',
            trim: true,
        };
        let loader = Loader::with_config(&config).unwrap();

        let records = loader.load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(records.headers(), ["job_type", "max_salary"]);
        assert_eq!(records[0].get("max_salary"), Some("900"));
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let config = LoaderConfig {
            delimiter: '§',
            trim: false,
        };
        assert!(matches!(
            Loader::with_config(&config),
            Err(ConfigError::Invalid(_))
        ));
    }
}
