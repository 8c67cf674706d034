use chrono::{DateTime, Days, Months, NaiveDate, Utc};
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;
use thiserror::Error;

pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Fixed search page size; there is no pagination beyond the first page.
const PER_PAGE: &str = "30";

/// Language filter options offered in the UI, as (code, label) pairs.
/// `all` is the sentinel meaning "no language clause".
pub const LANGUAGES: [(&str, &str); 13] = [
    ("all", "All Languages"),
    ("javascript", "JavaScript"),
    ("typescript", "TypeScript"),
    ("python", "Python"),
    ("java", "Java"),
    ("cpp", "C++"),
    ("csharp", "C#"),
    ("php", "PHP"),
    ("ruby", "Ruby"),
    ("go", "Go"),
    ("rust", "Rust"),
    ("swift", "Swift"),
    ("kotlin", "Kotlin"),
];

pub const ALL_LANGUAGES: &str = "all";

/// Coarse time window for the trending query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Daily, Period::Weekly, Period::Monthly];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Period::Daily => "Today",
            Period::Weekly => "This Week",
            Period::Monthly => "This Month",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Period> {
        match code {
            "daily" => Some(Period::Daily),
            "weekly" => Some(Period::Weekly),
            "monthly" => Some(Period::Monthly),
            _ => None,
        }
    }
}

/// Earliest creation date included in the search for a given period.
///
/// The offsets are wider than the period names suggest (a "daily" window
/// reaches back a full week, and so on). Narrow windows return too few
/// repositories to fill a page, so the ranges are expanded on purpose.
#[must_use]
pub fn cutoff_date(period: Period, today: NaiveDate) -> NaiveDate {
    match period {
        Period::Daily => today.checked_sub_days(Days::new(7)).unwrap_or(today),
        Period::Weekly => today.checked_sub_days(Days::new(30)).unwrap_or(today),
        Period::Monthly => today.checked_sub_months(Months::new(3)).unwrap_or(today),
    }
}

/// Builds the `q` parameter for the repository search.
///
/// Total over its inputs: every (language, period) pair yields a query.
#[must_use]
pub fn build_query(language: &str, period: Period, today: NaiveDate) -> String {
    let cutoff = cutoff_date(period, today);
    let mut query = format!("created:>{}", cutoff.format("%Y-%m-%d"));
    if language != ALL_LANGUAGES {
        query.push_str(&format!(" language:{language}"));
    }
    query
}

/// One repository as returned by the search endpoint. Extra upstream
/// fields are ignored; records are replaced wholesale on every refresh.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendingRepo {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub language: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner: RepoOwner,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RepoOwner {
    pub login: String,
    pub avatar_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<TrendingRepo>,
}

/// The transport call failed or the response status was non-success.
/// Callers get no richer taxonomy than this.
#[derive(Debug, Error)]
#[error("failed to fetch trending projects")]
pub struct RequestError(#[from] reqwest::Error);

#[derive(Debug, Clone)]
pub struct GitHubSearch {
    client: reqwest::Client,
    base_url: String,
}

impl Default for GitHubSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubSearch {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(GITHUB_API_BASE)
    }

    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches one page of trending repositories for the given selection.
    ///
    /// A missing `items` field in the envelope is an empty result, not an
    /// error. No retries, no rate-limit inspection: the call either
    /// returns a full list or fails entirely.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_trending(
        &self,
        language: &str,
        period: Period,
    ) -> Result<Vec<TrendingRepo>, RequestError> {
        let query = build_query(language, period, Utc::now().date_naive());
        let url = format!("{}/search/repositories", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query.as_str()),
                ("sort", "stars"),
                ("order", "desc"),
                ("per_page", PER_PAGE),
            ])
            .header(ACCEPT, "application/vnd.github+json")
            // Browsers strip this as a forbidden fetch header and send
            // their own; it matters for native callers, which GitHub
            // rejects without one.
            .header(USER_AGENT, "gittrend/0.1")
            .send()
            .await?;

        let envelope: SearchResponse = response.error_for_status()?.json().await?;

        tracing::debug!(count = envelope.items.len(), "fetched trending repositories");
        Ok(envelope.items)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn cutoff_reaches_back_seven_days_for_daily() {
        assert_eq!(
            cutoff_date(Period::Daily, day(2024, 3, 15)),
            day(2024, 3, 8)
        );
    }

    #[test]
    fn cutoff_reaches_back_thirty_days_for_weekly() {
        assert_eq!(
            cutoff_date(Period::Weekly, day(2024, 3, 15)),
            day(2024, 2, 14)
        );
    }

    #[test]
    fn cutoff_reaches_back_three_months_for_monthly() {
        assert_eq!(
            cutoff_date(Period::Monthly, day(2024, 3, 15)),
            day(2023, 12, 15)
        );
    }

    #[test]
    fn monthly_cutoff_clamps_to_month_end() {
        assert_eq!(
            cutoff_date(Period::Monthly, day(2024, 5, 31)),
            day(2024, 2, 29)
        );
    }

    #[test]
    fn query_formats_cutoff_as_calendar_date() {
        let query = build_query(ALL_LANGUAGES, Period::Daily, day(2024, 3, 15));
        assert_eq!(query, "created:>2024-03-08");
    }

    #[test]
    fn query_omits_language_clause_for_all() {
        let query = build_query(ALL_LANGUAGES, Period::Weekly, day(2024, 3, 15));
        assert!(!query.contains("language:"));
    }

    #[test]
    fn query_appends_single_language_clause() {
        let query = build_query("rust", Period::Daily, day(2024, 3, 15));
        assert_eq!(query, "created:>2024-03-08 language:rust");
        assert_eq!(query.matches("language:").count(), 1);
    }

    #[test]
    fn period_codes_round_trip() {
        for period in Period::ALL {
            assert_eq!(Period::from_code(period.code()), Some(period));
        }
        assert_eq!(Period::from_code("hourly"), None);
    }

    #[test]
    fn language_table_starts_with_the_sentinel() {
        assert_eq!(LANGUAGES[0].0, ALL_LANGUAGES);
    }

    fn repo_json() -> serde_json::Value {
        serde_json::json!({
            "id": 1296269,
            "name": "hello-world",
            "full_name": "octocat/hello-world",
            "description": "A test repository",
            "html_url": "https://github.com/octocat/hello-world",
            "stargazers_count": 1420,
            "forks_count": 9,
            "language": "Rust",
            "created_at": "2024-01-15T10:30:00Z",
            "updated_at": "2024-02-01T08:00:00Z",
            "owner": {
                "login": "octocat",
                "avatar_url": "https://avatars.githubusercontent.com/u/583231"
            },
            "watchers_count": 1420,
            "open_issues_count": 3
        })
    }

    #[tokio::test]
    async fn parses_search_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .and(query_param("sort", "stars"))
            .and(query_param("order", "desc"))
            .and(query_param("per_page", "30"))
            .and(header("User-Agent", "gittrend/0.1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_count": 1,
                "incomplete_results": false,
                "items": [repo_json()]
            })))
            .mount(&server)
            .await;

        let search = GitHubSearch::with_base_url(server.uri());
        let repos = search.fetch_trending("rust", Period::Daily).await.unwrap();

        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].id, 1_296_269);
        assert_eq!(repos[0].full_name, "octocat/hello-world");
        assert_eq!(repos[0].stargazers_count, 1420);
        assert_eq!(repos[0].language, Some("Rust".to_string()));
        assert_eq!(repos[0].owner.login, "octocat");
    }

    #[tokio::test]
    async fn missing_items_field_is_an_empty_result() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_count": 0,
                "incomplete_results": false
            })))
            .mount(&server)
            .await;

        let search = GitHubSearch::with_base_url(server.uri());
        let repos = search
            .fetch_trending(ALL_LANGUAGES, Period::Monthly)
            .await
            .unwrap();

        assert!(repos.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_a_request_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let search = GitHubSearch::with_base_url(server.uri());
        let result = search.fetch_trending(ALL_LANGUAGES, Period::Daily).await;

        let error = result.unwrap_err();
        assert_eq!(error.to_string(), "failed to fetch trending projects");
    }

    #[tokio::test]
    async fn optional_fields_may_be_absent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [{
                    "id": 7,
                    "name": "minimal",
                    "full_name": "user/minimal",
                    "description": null,
                    "html_url": "https://github.com/user/minimal",
                    "stargazers_count": 0,
                    "forks_count": 0,
                    "language": null,
                    "created_at": "2024-01-01T00:00:00Z",
                    "updated_at": "2024-01-01T00:00:00Z",
                    "owner": {
                        "login": "user",
                        "avatar_url": "https://avatars.githubusercontent.com/u/1"
                    }
                }]
            })))
            .mount(&server)
            .await;

        let search = GitHubSearch::with_base_url(server.uri());
        let repos = search
            .fetch_trending(ALL_LANGUAGES, Period::Daily)
            .await
            .unwrap();

        assert!(repos[0].description.is_none());
        assert!(repos[0].language.is_none());
    }
}
