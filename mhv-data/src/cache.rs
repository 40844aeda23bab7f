//! Memoized loading of the sampled dataset.
//!
//! Each distinct set of loader arguments (source, columns, sample size, seed)
//! is sampled once per process; later calls get the same `Arc<Dataset>` back.
//! The filtered population behind a sample is memoized per (source, columns),
//! so a new sample size or seed never re-reads the CSV. Failed loads are not
//! cached.
//!
//! Each map sits behind a single `Mutex` held for the whole load, so two
//! sessions asking for the same key never read the file twice.

use crate::dataset::Dataset;
use crate::filter::ListingFilter;
use crate::sample::sample_listings;
use crate::source::DataSource;
use crate::DEFAULT_N_SAMPLE;
use log::{debug, info};
use mhv_core::{Column, HousingError, Listing, DEFAULT_COLUMNS};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Arguments of one loader call.
#[derive(Debug, Clone)]
pub struct LoadRequest {
    pub source: DataSource,
    pub columns: Vec<Column>,
    pub n_sample: usize,
    pub seed: Option<u64>,
}

impl LoadRequest {
    /// Default columns, 1000 rows, unseeded.
    pub fn new(source: DataSource) -> Self {
        Self {
            source,
            columns: DEFAULT_COLUMNS.to_vec(),
            n_sample: DEFAULT_N_SAMPLE,
            seed: None,
        }
    }

    pub fn with_columns(mut self, columns: &[Column]) -> Self {
        self.columns = columns.to_vec();
        self
    }

    pub fn with_n_sample(mut self, n_sample: usize) -> Self {
        self.n_sample = n_sample;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    fn population_key(&self) -> PopulationKey {
        PopulationKey {
            source: self.source.cache_key(),
            columns: self.columns.clone(),
        }
    }

    fn key(&self) -> LoadKey {
        LoadKey {
            population: self.population_key(),
            n_sample: self.n_sample,
            seed: self.seed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PopulationKey {
    source: String,
    columns: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct LoadKey {
    population: PopulationKey,
    n_sample: usize,
    seed: Option<u64>,
}

/// Read and filter, keeping every qualifying listing.
fn read_filtered(request: &LoadRequest) -> Result<Vec<Listing>, HousingError> {
    let raw = request.source.read(&request.columns)?;
    let total = raw.len();
    let filtered = ListingFilter::default().apply(raw);
    info!(
        "loader: {} of {} listings from {} pass the price/landsize filter",
        filtered.len(),
        total,
        request.source
    );
    Ok(filtered)
}

fn sample_dataset(request: &LoadRequest, population: &[Listing]) -> Result<Dataset, HousingError> {
    let rows = sample_listings(population, request.n_sample, request.seed)?;
    Ok(Dataset::new(rows, request.columns.clone()))
}

/// Read, filter and sample without touching any cache.
pub fn load(request: &LoadRequest) -> Result<Dataset, HousingError> {
    sample_dataset(request, &read_filtered(request)?)
}

/// Hit/miss counters, mostly for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

#[derive(Debug, Default)]
pub struct LoaderCache {
    entries: Mutex<HashMap<LoadKey, Arc<Dataset>>>,
    populations: Mutex<HashMap<PopulationKey, Arc<Vec<Listing>>>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl LoaderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the memoized dataset for `request`, loading it on first use.
    pub fn get_or_load(&self, request: &LoadRequest) -> Result<Arc<Dataset>, HousingError> {
        let key = request.key();
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(dataset) = entries.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("loader cache hit: {:?}", key);
            return Ok(Arc::clone(dataset));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!("loader cache miss: {:?}", key);
        let population = self.population(request)?;
        let dataset = Arc::new(sample_dataset(request, &population)?);
        entries.insert(key, Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Every listing of `request`'s source that passes the filter, read once
    /// per (source, columns).
    pub fn population(&self, request: &LoadRequest) -> Result<Arc<Vec<Listing>>, HousingError> {
        let key = request.population_key();
        let mut populations = self.populations.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(rows) = populations.get(&key) {
            return Ok(Arc::clone(rows));
        }
        let rows = Arc::new(read_filtered(request)?);
        populations.insert(key, Arc::clone(&rows));
        Ok(rows)
    }

    /// Upper bound for `n_sample`: the number of listings that pass the filter.
    pub fn available(&self, request: &LoadRequest) -> Result<usize, HousingError> {
        Ok(self.population(request)?.len())
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clear();
        self.populations.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

static SESSION_CACHE: OnceLock<LoaderCache> = OnceLock::new();

/// Process-wide cache shared by every dashboard session.
pub fn session_cache() -> &'static LoaderCache {
    SESSION_CACHE.get_or_init(LoaderCache::new)
}

/// Memoized loader entry point used by the dashboard and the CLI.
pub fn get_data(request: &LoadRequest) -> Result<Arc<Dataset>, HousingError> {
    session_cache().get_or_load(request)
}

/// Number of listings `get_data` can sample from, through the same cache.
pub fn available_rows(request: &LoadRequest) -> Result<usize, HousingError> {
    session_cache().available(request)
}
