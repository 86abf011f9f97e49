use crate::error::AppError;
use crate::models::{LanguageStats, Report};
use crate::traits::JobSource;

/// Aggregate one language on one source into a statistics record.
///
/// Fetches every page, prices each vacancy through the source's adapter
/// in original order, and folds the defined estimates into the record.
/// Zero priceable vacancies is not an error: the empty record still
/// carries the server-reported total.
pub async fn stats_for<S: JobSource>(
    source: &S,
    language: &str,
    location: &S::LocationId,
) -> Result<LanguageStats, AppError> {
    let (found, vacancies) = source.fetch_all(language, location).await?;
    tracing::info!(
        "{}: fetched {} vacancies for {} ({} found server-side)",
        source.website(),
        vacancies.len(),
        language,
        found
    );

    let estimates: Vec<f64> = vacancies
        .iter()
        .filter_map(|vacancy| source.estimate(vacancy))
        .collect();

    if estimates.is_empty() {
        return Ok(LanguageStats::empty(found));
    }

    let mean = estimates.iter().sum::<f64>() / estimates.len() as f64;

    Ok(LanguageStats {
        vacancies_found: found,
        vacancies_processed: estimates.len() as u64,
        // Truncate toward zero, integer-division style.
        average_salary: mean as u64,
    })
}

/// Run the full aggregation for one source: resolve the location once,
/// then process every configured language in order.
///
/// Row order in the returned report equals the input language order. A
/// fetch failure aborts the remaining languages and propagates; no
/// partial report survives for the source.
pub async fn collect_report<S: JobSource>(
    source: &S,
    city: &str,
    languages: &[String],
) -> Result<Report, AppError> {
    let location = source.resolve_location(city).await?;
    tracing::info!("{}: resolved location for {}", source.website(), city);

    let mut rows = Vec::with_capacity(languages.len());
    for language in languages {
        let stats = stats_for(source, language, &location).await?;
        rows.push((language.clone(), stats));
    }

    Ok(Report {
        city: city.to_string(),
        website: source.website().to_string(),
        rows,
    })
}
