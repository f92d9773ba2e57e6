// Storage module for loading and caching record sets
// Author: Gabriel Demetrios Lafis

mod cache;

pub use cache::*;

use std::sync::OnceLock;

use crate::data::RecordSet;
use crate::utils::{ConfigError, InsightsResult, LoaderConfig};

static DEFAULT_LOADER: OnceLock<Loader> = OnceLock::new();

/// The process-wide loader used by the path-based query functions
pub fn default_loader() -> &'static Loader {
    DEFAULT_LOADER.get_or_init(Loader::new)
}

/// Configure the process-wide loader.
///
/// Returns `Ok(false)` if it was already initialized, either by an earlier
/// call or by a load, in which case the configuration is ignored.
pub fn configure_default_loader(config: &LoaderConfig) -> Result<bool, ConfigError> {
    let loader = Loader::with_config(config)?;
    Ok(DEFAULT_LOADER.set(loader).is_ok())
}

/// Load the records at `path` through the process-wide cache
pub fn load(path: &str) -> InsightsResult<RecordSet> {
    default_loader().load(path)
}
