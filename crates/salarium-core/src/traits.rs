use std::future::Future;

use crate::error::AppError;

/// Role noun prepended to every vacancy search, whichever source runs it.
pub const SEARCH_ROLE: &str = "Программист";

/// Build the search text sent to a source's vacancy endpoint.
pub fn search_query(language: &str) -> String {
    format!("{SEARCH_ROLE} {language}")
}

/// One job-listing provider: location directory plus paginated vacancy
/// search plus a per-vacancy salary adapter.
///
/// The aggregation pipeline is written once against this trait; each
/// source supplies its own identifier and vacancy payload types.
pub trait JobSource: Send + Sync {
    /// Source-specific geographic filter token for the search endpoint.
    type LocationId: Send + Sync;
    /// Source-shaped vacancy record, opaque to the aggregator.
    type Vacancy: Send;

    /// Display label used in report titles and error notices.
    fn website(&self) -> &str;

    /// Map a place name to this source's location identifier.
    ///
    /// Exact match only; a miss is `AppError::LocationNotFound`. Called
    /// once per run, not once per language.
    fn resolve_location(
        &self,
        place: &str,
    ) -> impl Future<Output = Result<Self::LocationId, AppError>> + Send;

    /// Paginated search for one language keyword.
    ///
    /// Returns the server-reported total alongside the page-concatenated
    /// vacancy list in response order. Any failed page aborts the whole
    /// fetch; no partial result is returned.
    fn fetch_all(
        &self,
        language: &str,
        location: &Self::LocationId,
    ) -> impl Future<Output = Result<(u64, Vec<Self::Vacancy>), AppError>> + Send;

    /// Extract a rouble estimate from one vacancy, or `None` when the
    /// posting is priced in another currency or not priced at all.
    fn estimate(&self, vacancy: &Self::Vacancy) -> Option<f64>;
}
