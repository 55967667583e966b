// Document model types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{PageMeta, PageResult};

/// Document row as shown in list views
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub file_name: String,
    pub file_type: String,
    /// Raw size in bytes
    pub file_size: u64,
    pub uploader_name: String,
    #[serde(default)]
    pub uploaded_at: Option<NaiveDateTime>,
    pub formatted_date: String,
    /// Human readable size, formatted by the server
    pub formatted_file_size: String,
}

/// Full document metadata, fetched individually
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDetail {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub file_name: String,
    pub file_type: String,
    pub file_size: u64,
    pub uploader_name: String,
    pub uploader_username: String,
    #[serde(default)]
    pub uploaded_at: Option<NaiveDateTime>,
    pub formatted_date: String,
    pub formatted_file_size: String,
}

/// Wire shape of `GET /documents`
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentListResponse {
    pub documents: Vec<DocumentSummary>,
    #[serde(flatten)]
    pub meta: PageMeta,
}

impl From<DocumentListResponse> for PageResult<DocumentSummary> {
    fn from(response: DocumentListResponse) -> Self {
        PageResult::from_parts(response.documents, response.meta)
    }
}
