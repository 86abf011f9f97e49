/// Aggregated salary statistics for one programming language on one source.
///
/// `vacancies_found` is the server-reported total across all pages and may
/// exceed or fall below `vacancies_processed` (the server counts postings
/// this run could not price). `average_salary` is meaningful only when
/// `vacancies_processed > 0`; the all-zero value is the "no pricing
/// signal" record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct LanguageStats {
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub average_salary: u64,
}

impl LanguageStats {
    /// The empty record for a language with zero priceable vacancies.
    pub fn empty(vacancies_found: u64) -> Self {
        Self {
            vacancies_found,
            ..Self::default()
        }
    }
}

/// Per-source result handed to the output layer.
///
/// Row order equals the configured language order; rows are never
/// re-sorted.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Report {
    pub city: String,
    pub website: String,
    pub rows: Vec<(String, LanguageStats)>,
}
