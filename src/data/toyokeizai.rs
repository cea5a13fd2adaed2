//! Fetching the Toyo Keizai daily prefecture dataset.

use reqwest::blocking::Client;

use crate::error::{AppError, ErrorKind};

/// URL of the daily patients CSV.
pub const DAILY_DATA_URL: &str =
    "https://raw.githubusercontent.com/kaz-ogiwara/covid19/master/data/prefectures.csv";

/// Blocking HTTP client for the upstream dataset.
///
/// The dataset is public: no authentication, no query parameters, no custom
/// headers.
pub struct UpstreamClient {
    client: Client,
}

impl UpstreamClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Fetch the daily CSV body as text.
    ///
    /// A non-success HTTP status is surfaced as a network error here, so an
    /// upstream error page never reaches the CSV parser.
    pub fn fetch_daily_csv(&self) -> Result<String, AppError> {
        let resp = self.client.get(DAILY_DATA_URL).send().map_err(|e| {
            AppError::new(ErrorKind::Network, format!("Failed to fetch daily CSV: {e}"))
        })?;

        if !resp.status().is_success() {
            return Err(AppError::new(
                ErrorKind::Network,
                format!("Daily CSV request failed with status {}.", resp.status()),
            ));
        }

        resp.text().map_err(|e| {
            AppError::new(
                ErrorKind::Network,
                format!("Failed to read daily CSV body: {e}"),
            )
        })
    }
}

impl Default for UpstreamClient {
    fn default() -> Self {
        Self::new()
    }
}
