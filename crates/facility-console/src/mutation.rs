//! Create/upload form controllers
//!
//! A [`Mutation`] describes one write operation: its editable draft, how
//! the draft is validated into a request, and the message shown when the
//! server rejects it. [`MutationController`] owns the draft plus the
//! loading/error state for one form. On success the draft is cleared and
//! the caller refetches the affected list; on failure the draft is kept so
//! the user can retry.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{info, warn};

use facility_api::validation::{
    validate_content, validate_description, validate_file_size, validate_required,
    validate_title,
};
use facility_api::{CreateNoticeRequest, DocumentDetail, NoticeDetail};
use facility_client::{FilePayload, ResourceClient, UploadDocumentRequest};

use crate::error::{FieldError, check};
use crate::messages;

pub trait Mutation: Send + Sync + 'static {
    /// Name used in log events
    const NAME: &'static str;
    /// Message shown when submission fails after validation
    const FAILURE_MESSAGE: &'static str;

    type Draft: Clone + Debug + Default + Send + Sync;
    type Request: Send + 'static;
    type Output: Send + 'static;

    /// Check the draft and build the request to submit
    fn validate(draft: &Self::Draft) -> Result<Self::Request, FieldError>;
}

/// Performs the write for a mutation. `None` means it failed and was
/// already reported.
#[async_trait]
pub trait Submitter<M: Mutation>: Send + Sync {
    async fn submit(&self, request: M::Request) -> Option<M::Output>;
}

/// Result of one submit attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome<T> {
    Completed(T),
    Invalid(FieldError),
    Failed(String),
}

impl<T> SubmitOutcome<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, SubmitOutcome::Completed(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MutationState<D> {
    pub draft: D,
    pub loading: bool,
    pub error: Option<String>,
    /// Set when `error` came from a field validation rule
    pub invalid_field: Option<&'static str>,
}

impl<D: Default> Default for MutationState<D> {
    fn default() -> Self {
        Self {
            draft: D::default(),
            loading: false,
            error: None,
            invalid_field: None,
        }
    }
}

pub struct MutationController<M: Mutation> {
    submitter: Arc<dyn Submitter<M>>,
    state: RwLock<MutationState<M::Draft>>,
}

impl<M: Mutation> MutationController<M> {
    pub fn new(submitter: Arc<dyn Submitter<M>>) -> Self {
        Self {
            submitter,
            state: RwLock::new(MutationState::default()),
        }
    }

    pub fn state(&self) -> MutationState<M::Draft> {
        self.state.read().clone()
    }

    pub fn draft(&self) -> M::Draft {
        self.state.read().draft.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn edit(&self, f: impl FnOnce(&mut M::Draft)) {
        f(&mut self.state.write().draft);
    }

    /// Discard the draft and any error
    pub fn close(&self) {
        let mut state = self.state.write();
        state.draft = M::Draft::default();
        state.error = None;
        state.invalid_field = None;
    }

    /// Validate and submit the draft.
    ///
    /// Concurrent submissions are not deduplicated; callers disable the
    /// submit action while `is_loading` is true.
    pub async fn submit(&self) -> SubmitOutcome<M::Output> {
        let draft = self.draft();
        let request = match M::validate(&draft) {
            Ok(request) => request,
            Err(field_error) => {
                let mut state = self.state.write();
                state.error = Some(field_error.message.clone());
                state.invalid_field = Some(field_error.field);
                return SubmitOutcome::Invalid(field_error);
            }
        };

        {
            let mut state = self.state.write();
            state.loading = true;
            state.error = None;
            state.invalid_field = None;
        }

        let result = self.submitter.submit(request).await;

        let mut state = self.state.write();
        state.loading = false;
        match result {
            Some(output) => {
                info!(mutation = M::NAME, "Submission completed");
                state.draft = M::Draft::default();
                SubmitOutcome::Completed(output)
            }
            None => {
                warn!(mutation = M::NAME, "Submission failed");
                state.error = Some(M::FAILURE_MESSAGE.to_string());
                SubmitOutcome::Failed(M::FAILURE_MESSAGE.to_string())
            }
        }
    }
}

// ============================================================================
// Create notice
// ============================================================================

#[derive(Clone, Copy, Debug, Default)]
pub struct CreateNotice;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeDraft {
    pub title: String,
    pub content: String,
}

impl Mutation for CreateNotice {
    const NAME: &'static str = "create_notice";
    const FAILURE_MESSAGE: &'static str = messages::NOTICE_CREATE_FAILED;

    type Draft = NoticeDraft;
    type Request = CreateNoticeRequest;
    type Output = NoticeDetail;

    fn validate(draft: &NoticeDraft) -> Result<CreateNoticeRequest, FieldError> {
        check("title", validate_required("title", &draft.title))?;
        check("content", validate_required("content", &draft.content))?;
        check("title", validate_title(&draft.title))?;
        check("content", validate_content(&draft.content))?;

        Ok(CreateNoticeRequest {
            title: draft.title.trim().to_string(),
            content: draft.content.trim().to_string(),
        })
    }
}

#[async_trait]
impl Submitter<CreateNotice> for ResourceClient {
    async fn submit(&self, request: CreateNoticeRequest) -> Option<NoticeDetail> {
        self.create_notice(&request).await
    }
}

// ============================================================================
// Upload document
// ============================================================================

#[derive(Clone, Copy, Debug, Default)]
pub struct UploadDocument;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentDraft {
    pub title: String,
    pub description: String,
    pub file: Option<FilePayload>,
}

impl Mutation for UploadDocument {
    const NAME: &'static str = "upload_document";
    const FAILURE_MESSAGE: &'static str = messages::DOCUMENT_UPLOAD_FAILED;

    type Draft = DocumentDraft;
    type Request = UploadDocumentRequest;
    type Output = DocumentDetail;

    fn validate(draft: &DocumentDraft) -> Result<UploadDocumentRequest, FieldError> {
        check("title", validate_required("title", &draft.title))?;
        let file = draft
            .file
            .as_ref()
            .ok_or_else(|| FieldError::new("file", "required", messages::FILE_REQUIRED))?;
        check("title", validate_title(&draft.title))?;
        check("description", validate_description(&draft.description))?;
        check("file", validate_file_size(file.size()))?;

        let description = draft.description.trim();
        Ok(UploadDocumentRequest {
            title: draft.title.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            file: file.clone(),
        })
    }
}

#[async_trait]
impl Submitter<UploadDocument> for ResourceClient {
    async fn submit(&self, request: UploadDocumentRequest) -> Option<DocumentDetail> {
        self.upload_document(request).await
    }
}

impl MutationController<UploadDocument> {
    /// Attach a file to the draft. An oversized file is rejected and the
    /// previously selected file, if any, is kept.
    pub fn select_file(&self, file: FilePayload) -> Result<(), FieldError> {
        let mut state = self.state.write();
        if let Err(err) = check("file", validate_file_size(file.size())) {
            state.error = Some(err.message.clone());
            state.invalid_field = Some(err.field);
            return Err(err);
        }
        state.draft.file = Some(file);
        state.error = None;
        state.invalid_field = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(title: &str, content: &str) -> NoticeDraft {
        NoticeDraft {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    fn document(title: &str, description: &str, size: usize) -> DocumentDraft {
        DocumentDraft {
            title: title.to_string(),
            description: description.to_string(),
            file: Some(FilePayload::new(
                "plan.pdf",
                "application/pdf",
                vec![0u8; size],
            )),
        }
    }

    #[test]
    fn test_notice_requires_title_before_content() {
        let err = CreateNotice::validate(&notice("  ", "")).unwrap_err();
        assert_eq!(err.field, "title");
        assert_eq!(err.code, "required");
        assert_eq!(err.message, "Please enter the title.");
    }

    #[test]
    fn test_notice_requires_content() {
        let err = CreateNotice::validate(&notice("Title", " ")).unwrap_err();
        assert_eq!(err.field, "content");
    }

    #[test]
    fn test_notice_title_length_boundary() {
        assert!(CreateNotice::validate(&notice(&"a".repeat(200), "body")).is_ok());

        let err = CreateNotice::validate(&notice(&"a".repeat(201), "body")).unwrap_err();
        assert_eq!(err.field, "title");
        assert_eq!(err.code, "too_long");
    }

    #[test]
    fn test_notice_content_too_long() {
        let err = CreateNotice::validate(&notice("Title", &"b".repeat(5001))).unwrap_err();
        assert_eq!(err.field, "content");
        assert_eq!(err.message, "The content cannot exceed 5000 characters.");
    }

    #[test]
    fn test_notice_request_is_trimmed() {
        let request = CreateNotice::validate(&notice("  Water outage ", "\nTuesday\n")).unwrap();
        assert_eq!(request.title, "Water outage");
        assert_eq!(request.content, "Tuesday");
    }

    #[test]
    fn test_upload_requires_file_after_title() {
        let mut draft = document("", "", 1);
        draft.file = None;
        assert_eq!(UploadDocument::validate(&draft).unwrap_err().field, "title");

        draft.title = "Floor plan".to_string();
        let err = UploadDocument::validate(&draft).unwrap_err();
        assert_eq!(err.field, "file");
        assert_eq!(err.message, messages::FILE_REQUIRED);
    }

    #[test]
    fn test_upload_description_limit() {
        let err = UploadDocument::validate(&document("Plan", &"d".repeat(1001), 1)).unwrap_err();
        assert_eq!(err.field, "description");
    }

    #[test]
    fn test_upload_file_size_limit() {
        let err =
            UploadDocument::validate(&document("Plan", "", 10 * 1024 * 1024 + 1)).unwrap_err();
        assert_eq!(err.field, "file");
        assert_eq!(err.code, "file_too_large");
    }

    #[test]
    fn test_upload_blank_description_is_omitted() {
        let request = UploadDocument::validate(&document(" Plan ", "   ", 4)).unwrap();
        assert_eq!(request.title, "Plan");
        assert_eq!(request.description, None);

        let request = UploadDocument::validate(&document("Plan", " Level 2 ", 4)).unwrap();
        assert_eq!(request.description.as_deref(), Some("Level 2"));
    }
}
