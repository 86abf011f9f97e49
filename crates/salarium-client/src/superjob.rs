use std::time::Duration;

use reqwest::Client;
use salarium_core::{AppError, JobSource, estimate_salary, search_query};
use serde::Deserialize;

use crate::http::{read_json, transport_error};

const SJ_API_BASE: &str = "https://api.superjob.ru/2.0";
const WEBSITE: &str = "SuperJob";
const API_KEY_HEADER: &str = "X-Api-App-Id";
const PAGE_SIZE: u32 = 100;
/// Catalogue id of the programming section in SuperJob's rubricator.
const PROGRAMMING_CATALOGUE: u32 = 48;
/// SuperJob does not declare its page count up front; the search is
/// capped at this many pages regardless of the true result size.
const MAX_PAGES: u32 = 5;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// SuperJob API client (`api.superjob.ru/2.0`).
///
/// Every request carries the application key in the `X-Api-App-Id`
/// header. The key is passed in explicitly; reading it from the
/// environment is the caller's concern.
#[derive(Clone)]
pub struct SuperjobClient {
    client: Client,
    base_url: String,
    api_key: String,
    timeout_secs: u64,
}

impl SuperjobClient {
    pub fn new(api_key: &str) -> Result<Self, AppError> {
        Self::with_base_url(api_key, SJ_API_BASE)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| AppError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        })
    }

    async fn vacancies_page(
        &self,
        keyword: &str,
        town: u64,
        page: Option<u32>,
    ) -> Result<VacanciesPage, AppError> {
        let url = format!("{}/vacancies/", self.base_url);
        let mut request = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(&[
                ("count", PAGE_SIZE.to_string()),
                ("town", town.to_string()),
                ("catalogues", PROGRAMMING_CATALOGUE.to_string()),
                ("keyword", keyword.to_string()),
            ]);
        if let Some(page) = page {
            request = request.query(&[("page", page.to_string())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| transport_error(e, self.timeout_secs))?;

        read_json(response).await
    }
}

// ---- SuperJob API types ----

#[derive(Debug, Deserialize)]
struct Town {
    id: u64,
    title: String,
}

#[derive(Debug, Deserialize)]
struct TownsPage {
    objects: Vec<Town>,
}

#[derive(Debug, Deserialize)]
struct VacanciesPage {
    total: u64,
    objects: Vec<SjVacancy>,
}

/// One vacancy from `GET /vacancies/`. SuperJob flattens the salary onto
/// the vacancy itself and encodes "not specified" as `0`.
#[derive(Debug, Clone, Deserialize)]
pub struct SjVacancy {
    pub payment_from: Option<f64>,
    pub payment_to: Option<f64>,
    pub currency: Option<String>,
}

/// Treat SuperJob's zero payment bound as an absent one.
fn payment_bound(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

fn find_town(towns: &[Town], title: &str) -> Option<u64> {
    towns.iter().find(|town| town.title == title).map(|t| t.id)
}

impl JobSource for SuperjobClient {
    type LocationId = u64;
    type Vacancy = SjVacancy;

    fn website(&self) -> &str {
        WEBSITE
    }

    async fn resolve_location(&self, place: &str) -> Result<u64, AppError> {
        let url = format!("{}/towns/", self.base_url);
        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(&[("all", "1")])
            .send()
            .await
            .map_err(|e| transport_error(e, self.timeout_secs))?;

        let towns: TownsPage = read_json(response).await?;

        find_town(&towns.objects, place).ok_or_else(|| AppError::LocationNotFound {
            website: WEBSITE.to_string(),
            place: place.to_string(),
        })
    }

    async fn fetch_all(
        &self,
        language: &str,
        town: &u64,
    ) -> Result<(u64, Vec<SjVacancy>), AppError> {
        let keyword = search_query(language);

        // The initial request supplies the found total; the page count is
        // a fixed upper bound.
        let first = self.vacancies_page(&keyword, *town, None).await?;

        let mut vacancies = Vec::new();
        for page in 0..MAX_PAGES {
            let page_data = self.vacancies_page(&keyword, *town, Some(page)).await?;
            vacancies.extend(page_data.objects);
        }

        Ok((first.total, vacancies))
    }

    fn estimate(&self, vacancy: &SjVacancy) -> Option<f64> {
        if vacancy.currency.as_deref() != Some("rub") {
            return None;
        }
        estimate_salary(
            payment_bound(vacancy.payment_from),
            payment_bound(vacancy.payment_to),
        )
    }
}
