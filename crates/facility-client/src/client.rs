// ResourceClient - typed facade for all facility API operations

use std::sync::Arc;

use bytes::Bytes;
use reqwest::multipart::{Form, Part};

use facility_api::{
    CreateNoticeRequest, DocumentDetail, DocumentListResponse, DocumentSummary, LoginRequest,
    LoginResponse, NoticeDetail, NoticeListResponse, NoticeSummary, PageRequest, PageResult,
    UserInfo, api_path,
};

use crate::{
    config::HttpClientConfig,
    diagnostics::{Diagnostic, DiagnosticSink, TracingSink},
    error::{ClientError, Result},
    http::FacilityHttpClient,
};

/// A file selected for upload
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePayload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Bytes,
}

impl FilePayload {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Payload size in bytes
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Multipart body of `POST /documents`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadDocumentRequest {
    pub title: String,
    pub description: Option<String>,
    pub file: FilePayload,
}

impl UploadDocumentRequest {
    fn into_form(self) -> Result<Form> {
        let part = Part::bytes(self.file.bytes.to_vec())
            .file_name(self.file.file_name)
            .mime_str(&self.file.mime_type)
            .map_err(|e| {
                ClientError::InvalidRequest(format!("mime type '{}': {}", self.file.mime_type, e))
            })?;

        let mut form = Form::new().text("title", self.title);
        if let Some(description) = self.description {
            form = form.text("description", description);
        }
        Ok(form.part("file", part))
    }
}

/// Typed client for the facility API.
///
/// Every operation returns `None` on failure after reporting a [`Diagnostic`]
/// to the configured sink; no error escapes this layer.
#[derive(Clone)]
pub struct ResourceClient {
    http: FacilityHttpClient,
    sink: Arc<dyn DiagnosticSink>,
}

impl ResourceClient {
    /// Create a new client reporting failures through `tracing`
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        Ok(Self {
            http: FacilityHttpClient::new(config)?,
            sink: Arc::new(TracingSink),
        })
    }

    /// Create a client from a base URL with default timeouts
    pub fn from_base_url(base_url: &str) -> Result<Self> {
        Self::new(HttpClientConfig::new(base_url))
    }

    /// Replace the diagnostics sink
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    fn settle<T>(&self, operation: &'static str, context: String, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.sink
                    .report(&Diagnostic::from_error(operation, context, &err));
                None
            }
        }
    }

    fn page_context(request: &PageRequest) -> String {
        format!(
            "page={} size={}",
            request.page_index(),
            request.page_size()
        )
    }

    // ============================================================================
    // Notice APIs
    // ============================================================================

    pub async fn list_notices(&self, request: PageRequest) -> Option<PageResult<NoticeSummary>> {
        let result = self
            .http
            .get_json_with_query::<NoticeListResponse, _>(api_path::NOTICES, &request)
            .await;
        self.settle("list_notices", Self::page_context(&request), result)
            .map(PageResult::from)
    }

    pub async fn all_notices(&self) -> Option<PageResult<NoticeSummary>> {
        let result = self
            .http
            .get_json::<NoticeListResponse>(api_path::NOTICES_ALL)
            .await;
        self.settle("all_notices", String::new(), result)
            .map(PageResult::from)
    }

    pub async fn get_notice(&self, id: u64) -> Option<NoticeDetail> {
        let result = self.http.get_json(&api_path::notice(id)).await;
        self.settle("get_notice", format!("id={}", id), result)
    }

    pub async fn create_notice(&self, request: &CreateNoticeRequest) -> Option<NoticeDetail> {
        let result = self.http.post_json(api_path::NOTICES, request).await;
        self.settle("create_notice", format!("title={}", request.title), result)
    }

    // ============================================================================
    // Document APIs
    // ============================================================================

    pub async fn list_documents(
        &self,
        request: PageRequest,
    ) -> Option<PageResult<DocumentSummary>> {
        let result = self
            .http
            .get_json_with_query::<DocumentListResponse, _>(api_path::DOCUMENTS, &request)
            .await;
        self.settle("list_documents", Self::page_context(&request), result)
            .map(PageResult::from)
    }

    pub async fn all_documents(&self) -> Option<PageResult<DocumentSummary>> {
        let result = self
            .http
            .get_json::<DocumentListResponse>(api_path::DOCUMENTS_ALL)
            .await;
        self.settle("all_documents", String::new(), result)
            .map(PageResult::from)
    }

    pub async fn get_document(&self, id: u64) -> Option<DocumentDetail> {
        let result = self.http.get_json(&api_path::document(id)).await;
        self.settle("get_document", format!("id={}", id), result)
    }

    pub async fn upload_document(&self, request: UploadDocumentRequest) -> Option<DocumentDetail> {
        let context = format!(
            "title={} file={} bytes={}",
            request.title,
            request.file.file_name,
            request.file.size()
        );
        let result = match request.into_form() {
            Ok(form) => self.http.post_multipart(api_path::DOCUMENTS, form).await,
            Err(err) => Err(err),
        };
        self.settle("upload_document", context, result)
    }

    /// Download the raw file content; the body is binary and carries no envelope
    pub async fn download_document(&self, id: u64) -> Option<Bytes> {
        let result = self.http.get_bytes(&api_path::document_download(id)).await;
        self.settle("download_document", format!("id={}", id), result)
    }

    // ============================================================================
    // Auth / User APIs
    // ============================================================================

    /// Log in; on success the session cookie is stored for later calls
    pub async fn login(&self, request: &LoginRequest) -> Option<LoginResponse> {
        let result = self.http.post_json(api_path::AUTH_LOGIN, request).await;
        self.settle("login", format!("username={}", request.username), result)
    }

    /// Invalidate the session; returns the server message
    pub async fn logout(&self) -> Option<String> {
        let result = self.http.post_empty(api_path::AUTH_LOGOUT).await;
        self.settle("logout", String::new(), result)
    }

    pub async fn current_user(&self) -> Option<UserInfo> {
        let result = self.http.get_json(api_path::USERS_ME).await;
        self.settle("current_user", String::new(), result)
    }

    pub async fn user_by_username(&self, username: &str) -> Option<UserInfo> {
        let result = self.http.get_json(&api_path::user(username)).await;
        self.settle("user_by_username", format!("username={}", username), result)
    }
}
