use std::time::Duration;

use reqwest::Client;
use salarium_core::{AppError, JobSource, estimate_salary, search_query};
use serde::Deserialize;

use crate::http::{read_json, transport_error};

const HH_API_BASE: &str = "https://api.hh.ru";
const WEBSITE: &str = "HeadHunter";
const PAGE_SIZE: u32 = 100;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HeadHunter API client (`api.hh.ru`).
///
/// No credentials required. Locations come from the `/areas` tree;
/// vacancy search declares its own page count up front.
#[derive(Clone)]
pub struct HhClient {
    client: Client,
    base_url: String,
    timeout_secs: u64,
}

impl HhClient {
    pub fn new() -> Result<Self, AppError> {
        Self::with_base_url(HH_API_BASE)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| AppError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        })
    }

    async fn vacancies_page(
        &self,
        text: &str,
        area: &str,
        page: Option<u32>,
    ) -> Result<VacanciesPage, AppError> {
        let url = format!("{}/vacancies", self.base_url);
        let mut request = self.client.get(&url).query(&[
            ("per_page", PAGE_SIZE.to_string()),
            ("text", text.to_string()),
            ("area", area.to_string()),
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

// ---- HeadHunter API types ----

#[derive(Debug, Deserialize)]
struct Area {
    id: String,
    name: String,
    #[serde(default)]
    areas: Vec<Area>,
}

#[derive(Debug, Deserialize)]
struct VacanciesPage {
    found: u64,
    pages: u32,
    items: Vec<HhVacancy>,
}

/// One vacancy from `GET /vacancies`. Only the salary block is read;
/// every other field is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct HhVacancy {
    pub salary: Option<HhSalary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HhSalary {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: Option<String>,
}

/// Scan the area tree country → region → city, depth-first, first match
/// wins on the display name. A region hit returns before that region's
/// cities are scanned; the tree is never descended past the city level.
fn find_area(countries: &[Area], name: &str) -> Option<String> {
    for country in countries {
        if country.name == name {
            return Some(country.id.clone());
        }
        for region in &country.areas {
            if region.name == name {
                return Some(region.id.clone());
            }
            for city in &region.areas {
                if city.name == name {
                    return Some(city.id.clone());
                }
            }
        }
    }
    None
}

impl JobSource for HhClient {
    type LocationId = String;
    type Vacancy = HhVacancy;

    fn website(&self) -> &str {
        WEBSITE
    }

    async fn resolve_location(&self, place: &str) -> Result<String, AppError> {
        let url = format!("{}/areas", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(e, self.timeout_secs))?;

        let countries: Vec<Area> = read_json(response).await?;

        find_area(&countries, place).ok_or_else(|| AppError::LocationNotFound {
            website: WEBSITE.to_string(),
            place: place.to_string(),
        })
    }

    async fn fetch_all(
        &self,
        language: &str,
        area: &String,
    ) -> Result<(u64, Vec<HhVacancy>), AppError> {
        let text = search_query(language);

        // The initial request supplies the found total and page count.
        let first = self.vacancies_page(&text, area, None).await?;
        tracing::debug!("HeadHunter: {} pages declared for '{}'", first.pages, text);

        let mut vacancies = Vec::new();
        for page in 0..first.pages {
            let page_data = self.vacancies_page(&text, area, Some(page)).await?;
            vacancies.extend(page_data.items);
        }

        Ok((first.found, vacancies))
    }

    fn estimate(&self, vacancy: &HhVacancy) -> Option<f64> {
        let salary = vacancy.salary.as_ref()?;
        if salary.currency.as_deref() != Some("RUR") {
            return None;
        }
        estimate_salary(salary.from, salary.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn area_tree() -> Vec<Area> {
        serde_json::from_value(json!([
            {
                "id": "113",
                "name": "Россия",
                "areas": [
                    {
                        "id": "1",
                        "name": "Москва",
                        "areas": [
                            {"id": "2019", "name": "Зеленоград", "areas": []}
                        ]
                    },
                    {
                        "id": "1202",
                        "name": "Новосибирская область",
                        "areas": [
                            {"id": "4", "name": "Новосибирск", "areas": []}
                        ]
                    }
                ]
            },
            {
                "id": "16",
                "name": "Беларусь",
                "areas": [
                    {
                        "id": "1002",
                        "name": "Минская область",
                        "areas": [
                            {"id": "1003", "name": "Москва", "areas": []}
                        ]
                    }
                ]
            }
        ]))
        .unwrap()
    }

    fn vacancy(value: serde_json::Value) -> HhVacancy {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_find_area_matches_region_before_its_cities() {
        assert_eq!(find_area(&area_tree(), "Москва"), Some("1".to_string()));
    }

    #[test]
    fn test_find_area_country_level() {
        assert_eq!(find_area(&area_tree(), "Беларусь"), Some("16".to_string()));
    }

    #[test]
    fn test_find_area_city_level() {
        assert_eq!(find_area(&area_tree(), "Новосибирск"), Some("4".to_string()));
    }

    #[test]
    fn test_find_area_is_case_sensitive_and_exact() {
        assert_eq!(find_area(&area_tree(), "москва"), None);
        assert_eq!(find_area(&area_tree(), "Новосибирская"), None);
    }

    #[test]
    fn test_estimate_rur_range() {
        let client = HhClient::new().unwrap();
        let v = vacancy(json!({"salary": {"from": 100000, "to": 200000, "currency": "RUR"}}));
        assert_eq!(client.estimate(&v), Some(150_000.0));
    }

    #[test]
    fn test_estimate_lower_bound_only() {
        let client = HhClient::new().unwrap();
        let v = vacancy(json!({"salary": {"from": 100000, "to": null, "currency": "RUR"}}));
        let estimate = client.estimate(&v).unwrap();
        assert!((estimate - 120_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_estimate_rejects_foreign_currency() {
        let client = HhClient::new().unwrap();
        let v = vacancy(json!({"salary": {"from": 1000, "to": 2000, "currency": "USD"}}));
        assert_eq!(client.estimate(&v), None);
    }

    #[test]
    fn test_estimate_rejects_missing_salary_block() {
        let client = HhClient::new().unwrap();
        let v = vacancy(json!({"salary": null}));
        assert_eq!(client.estimate(&v), None);
    }

    #[test]
    fn test_estimate_rejects_unset_currency() {
        let client = HhClient::new().unwrap();
        let v = vacancy(json!({"salary": {"from": 100000, "to": null, "currency": null}}));
        assert_eq!(client.estimate(&v), None);
    }

    #[test]
    fn test_vacancies_page_parses_with_extra_fields() {
        let page: VacanciesPage = serde_json::from_value(json!({
            "found": 2861,
            "pages": 29,
            "per_page": 100,
            "items": [
                {"id": "101", "name": "Программист Python",
                 "salary": {"from": 150000, "to": null, "currency": "RUR", "gross": false}},
                {"id": "102", "name": "Backend developer", "salary": null}
            ]
        }))
        .unwrap();

        assert_eq!(page.found, 2861);
        assert_eq!(page.pages, 29);
        assert_eq!(page.items.len(), 2);
        assert!(page.items[1].salary.is_none());
    }
}
