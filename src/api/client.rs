//! Client for the external trip-planning service.
//!
//! One request, one response or one failure. No retry, no streaming;
//! errors surface immediately to the caller.

use crate::errors::{AppError, AppResult};
use crate::models::plan::{PlanRequest, PlanResponse};
use std::time::Duration;

pub struct PlanClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl PlanClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> AppResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn plan_trip(&self, request: &PlanRequest) -> AppResult<PlanResponse> {
        let url = format!("{}/api/plan-trip/", self.base_url);
        let res = self.http.post(&url).json(request).send()?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().unwrap_or_default();
            return Err(AppError::Service {
                status: status.as_u16(),
                body,
            });
        }

        Ok(res.json()?)
    }
}
