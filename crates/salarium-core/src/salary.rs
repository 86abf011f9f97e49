/// Derive a single salary figure from a possibly partial range.
///
/// Postings that state only a lower bound tend to undercount real pay by
/// about 20%, and upper-bound-only postings overcount symmetrically, so
/// the lone bound is scaled rather than taken as-is.
///
/// Returns `None` when neither bound is given; callers must exclude such
/// vacancies from aggregation, never treat them as zero.
pub fn estimate_salary(from: Option<f64>, to: Option<f64>) -> Option<f64> {
    match (from, to) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (Some(from), None) => Some(from * 1.2),
        (None, Some(to)) => Some(to * 0.8),
        (None, None) => None,
    }
}
