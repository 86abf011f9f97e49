pub mod error;
pub mod models;
pub mod salary;
pub mod stats;
pub mod traits;

#[cfg(test)]
pub mod testutil;

pub use error::AppError;
pub use models::{LanguageStats, Report};
pub use salary::estimate_salary;
pub use stats::{collect_report, stats_for};
pub use traits::{JobSource, search_query};
