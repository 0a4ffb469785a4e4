//! HTTP client for the contact-intake backend
//!
//! Speaks JSON to `{base}/api/contact` and its owner endpoints.

use super::error::IntakeError;
use super::traits::IntakeClientTrait;
use super::types::{
    ContactReceipt, ErrorBody, InboxQuery, InquiryStatus, SubmissionEnvelope, SubmissionPage,
    SubmissionRecord,
};
use crate::state::ContactPayload;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;
use uuid::Uuid;

/// Path of the contact resource below the configured base address
const CONTACT_PATH: &str = "/api/contact";

/// Client for the contact-intake backend
#[derive(Debug, Clone)]
pub struct IntakeClient {
    http: Client,
    base: String,
}

impl IntakeClient {
    /// Create a client for `base_url`. `timeout` of `None` keeps the transport default.
    pub fn new(base_url: &Url, timeout: Option<Duration>) -> Result<Self, IntakeError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Build `{base}/api/contact{suffix}`
    fn endpoint(&self, suffix: &str) -> Result<Url, IntakeError> {
        Ok(Url::parse(&format!("{}{}{}", self.base, CONTACT_PATH, suffix))?)
    }
}

/// Turn a response into `T`, or into `Rejected` when the status is not 2xx
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, IntakeError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        let body = serde_json::from_slice::<ErrorBody>(&bytes).unwrap_or_default();
        return Err(IntakeError::Rejected {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_slice(&bytes).map_err(|e| IntakeError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl IntakeClientTrait for IntakeClient {
    async fn submit_contact(&self, payload: ContactPayload) -> Result<ContactReceipt, IntakeError> {
        let url = self.endpoint("")?;
        tracing::debug!(%url, "posting contact submission");

        let response = self.http.post(url).json(&payload).send().await?;
        let status = response.status().as_u16();
        let receipt: ContactReceipt = read_json(response).await?;

        if !receipt.success {
            return Err(IntakeError::Rejected {
                status,
                body: ErrorBody {
                    detail: None,
                    error: Some(receipt.message),
                },
            });
        }

        tracing::info!(
            submission_id = receipt.submission_id.as_deref().unwrap_or("-"),
            "contact submission accepted"
        );
        Ok(receipt)
    }

    async fn list_submissions(&self, query: InboxQuery) -> Result<SubmissionPage, IntakeError> {
        let url = self.endpoint("")?;

        let mut params = vec![
            ("limit", query.limit.to_string()),
            ("skip", query.skip.to_string()),
        ];
        if let Some(status) = query.status {
            params.push(("status", status.as_str().to_string()));
        }

        let response = self.http.get(url).query(&params).send().await?;
        let page: SubmissionPage = read_json(response).await?;
        tracing::info!(
            count = page.count,
            returned = page.submissions.len(),
            "loaded inbox page"
        );
        Ok(page)
    }

    async fn get_submission(&self, id: Uuid) -> Result<SubmissionRecord, IntakeError> {
        let url = self.endpoint(&format!("/{id}"))?;
        let response = self.http.get(url).send().await?;
        let envelope: SubmissionEnvelope = read_json(response).await?;
        Ok(envelope.submission)
    }

    async fn update_submission_status(
        &self,
        id: Uuid,
        status: InquiryStatus,
    ) -> Result<(), IntakeError> {
        let url = self.endpoint(&format!("/{id}/status"))?;
        let response = self
            .http
            .patch(url)
            .query(&[("status", status.as_str())])
            .send()
            .await?;
        let _: serde_json::Value = read_json(response).await?;
        tracing::info!(%id, status = status.as_str(), "updated submission status");
        Ok(())
    }
}
