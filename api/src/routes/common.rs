use db::models::document::{DocumentStatus, Model as Document, PlagiarismReport};
use serde::Serialize;

/// A document as returned by the API, with its derived review status.
#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    #[serde(flatten)]
    pub document: Document,
    pub status: DocumentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plagiarism_report: Option<PlagiarismReport>,
}

impl From<Document> for DocumentResponse {
    fn from(document: Document) -> Self {
        Self {
            status: document.status(),
            plagiarism_report: document.plagiarism_report(),
            document,
        }
    }
}

pub fn document_list(documents: Vec<Document>) -> Vec<DocumentResponse> {
    documents.into_iter().map(DocumentResponse::from).collect()
}
