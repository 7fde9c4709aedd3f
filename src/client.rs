use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::core::{DecodeError, Report, decode_report};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebtCritical {
    #[default]
    No,
    Yes,
}

impl DebtCritical {
    pub fn as_str(self) -> &'static str {
        match self {
            DebtCritical::No => "no",
            DebtCritical::Yes => "yes",
        }
    }
}

// The eight advisor inputs, in the order the upstream service documents them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AdvisorRequest {
    pub age: u32,
    pub income: f64,
    pub expenses: f64,
    pub debt: f64,
    pub debt_critical: DebtCritical,
    pub emergency: f64,
    pub savings: f64,
    pub investments: f64,
}

impl Default for AdvisorRequest {
    fn default() -> Self {
        AdvisorRequest {
            age: 25,
            income: 100_000.0,
            expenses: 60_000.0,
            debt: 200_000.0,
            debt_critical: DebtCritical::No,
            emergency: 150_000.0,
            savings: 200_000.0,
            investments: 500_000.0,
        }
    }
}

impl AdvisorRequest {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("age", self.age.to_string()),
            ("income", self.income.to_string()),
            ("expenses", self.expenses.to_string()),
            ("debt", self.debt.to_string()),
            ("debt_critical", self.debt_critical.as_str().to_string()),
            ("emergency", self.emergency.to_string()),
            ("savings", self.savings.to_string()),
            ("investments", self.investments.to_string()),
        ]
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Error connecting to API. Please ensure the server is running.")]
    Network(#[from] reqwest::Error),
    #[error("Failed to fetch report")]
    Status(StatusCode),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[derive(Debug, Clone)]
pub struct AdvisorClient {
    http: reqwest::Client,
    base_url: String,
}

impl AdvisorClient {
    pub fn new(base_url: &str) -> Self {
        AdvisorClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/financial_advisor", self.base_url)
    }

    pub async fn fetch_report(&self, request: &AdvisorRequest) -> Result<Report, FetchError> {
        let response = self
            .http
            .get(self.endpoint())
            .query(&request.to_query())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        Ok(decode_report(&body)?)
    }
}
