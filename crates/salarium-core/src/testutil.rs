//! Test utilities: a mock `JobSource` for driving the aggregation
//! pipeline without real HTTP.
//!
//! The mock's vacancy type is `Option<f64>` — the estimate the adapter
//! would have produced — so tests state pricing outcomes directly.
//! Queued responses and recorded call counts sit behind `Arc<Mutex<_>>`
//! for assertions after the run.

use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::traits::JobSource;

type FetchResult = Result<(u64, Vec<Option<f64>>), AppError>;

/// Mock source with queued fetch responses. Each `fetch_all` call pops
/// the next queued result; an exhausted queue returns an empty page.
pub struct MockSource {
    fetches: Arc<Mutex<Vec<FetchResult>>>,
    resolve_error: Arc<Mutex<Option<AppError>>>,
    resolve_calls: Arc<Mutex<u32>>,
    fetch_calls: Arc<Mutex<u32>>,
}

impl MockSource {
    pub fn with_fetches(fetches: Vec<FetchResult>) -> Self {
        Self {
            fetches: Arc::new(Mutex::new(fetches)),
            resolve_error: Arc::new(Mutex::new(None)),
            resolve_calls: Arc::new(Mutex::new(0)),
            fetch_calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_resolve_error(error: AppError) -> Self {
        Self {
            fetches: Arc::new(Mutex::new(Vec::new())),
            resolve_error: Arc::new(Mutex::new(Some(error))),
            resolve_calls: Arc::new(Mutex::new(0)),
            fetch_calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn resolve_calls(&self) -> u32 {
        *self.resolve_calls.lock().unwrap()
    }

    pub fn fetch_calls(&self) -> u32 {
        *self.fetch_calls.lock().unwrap()
    }
}

impl JobSource for MockSource {
    type LocationId = u32;
    type Vacancy = Option<f64>;

    fn website(&self) -> &str {
        "mock"
    }

    async fn resolve_location(&self, _place: &str) -> Result<u32, AppError> {
        *self.resolve_calls.lock().unwrap() += 1;
        let mut err = self.resolve_error.lock().unwrap();
        if let Some(e) = err.take() {
            return Err(e);
        }
        Ok(1)
    }

    async fn fetch_all(
        &self,
        _language: &str,
        _location: &u32,
    ) -> Result<(u64, Vec<Option<f64>>), AppError> {
        *self.fetch_calls.lock().unwrap() += 1;
        let mut fetches = self.fetches.lock().unwrap();
        if fetches.is_empty() {
            Ok((0, vec![]))
        } else {
            fetches.remove(0)
        }
    }

    fn estimate(&self, vacancy: &Option<f64>) -> Option<f64> {
        *vacancy
    }
}
