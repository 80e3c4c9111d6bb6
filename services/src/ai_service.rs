//! Client for the external AI service.
//!
//! Two endpoints are used, both authenticated with a `token` query parameter:
//! - `POST /feedback/` generates review text for a submission.
//! - `POST /assignment/upload` hands a freshly stored file over for processing
//!   (text extraction, plagiarism, embeddings).

use db::models::document::Model as Document;
use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ServiceError, ServiceResult};

pub const NO_FEEDBACK: &str = "No feedback received";

/// Response fields that may carry the feedback text, in order of preference.
const FEEDBACK_FIELDS: [&str; 4] = ["combined_output", "feedback", "content", "message"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub title: String,
    pub description: String,
    pub content: String,
    pub persona: String,
}

impl FeedbackRequest {
    pub fn for_document(document: &Document) -> Self {
        Self {
            title: document
                .folder
                .clone()
                .filter(|f| !f.is_empty())
                .unwrap_or_else(|| "Assignment".to_string()),
            description: format!("Assignment submission by {}", document.name_student),
            content: format!("File: {}", document.document_name),
            persona: "teacher".to_string(),
        }
    }
}

/// Picks the feedback text out of an AI service response.
pub fn extract_feedback(body: &Value) -> String {
    FEEDBACK_FIELDS
        .iter()
        .find_map(|field| body.get(*field).and_then(Value::as_str).filter(|s| !s.is_empty()))
        .unwrap_or(NO_FEEDBACK)
        .to_string()
}

#[derive(Clone)]
pub struct AiServiceClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl AiServiceClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Asks the AI service for feedback on `document`. The result is not stored.
    pub async fn generate_feedback(&self, document: &Document) -> ServiceResult<String> {
        let request = FeedbackRequest::for_document(document);
        let response = self
            .http
            .post(format!("{}/feedback/", self.base_url))
            .query(&[("token", self.token.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Upstream(format!(
                "HTTP error! status: {}",
                status.as_u16()
            )));
        }

        let body: Value = response.json().await?;
        Ok(extract_feedback(&body))
    }

    /// Notifies the processing pipeline that a file was stored.
    pub async fn notify_upload(&self, uuid: &str, file_url: &str) -> ServiceResult<()> {
        let form = Form::new()
            .text("uuid", uuid.to_string())
            .text("file_url", file_url.to_string());

        let response = self
            .http
            .post(format!("{}/assignment/upload", self.base_url))
            .query(&[("token", self.token.as_str())])
            .header(reqwest::header::ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ServiceError::Upstream(format!(
                "HTTP {}: {}",
                status.as_u16(),
                text
            )));
        }
        Ok(())
    }
}
