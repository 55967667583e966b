//! MutationController tests with fake submitters

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use facility_api::{CreateNoticeRequest, NoticeDetail};
use facility_client::FilePayload;
use facility_console::{
    CreateNotice, MutationController, SubmitOutcome, Submitter, UploadDocument,
};

fn created(request: &CreateNoticeRequest) -> NoticeDetail {
    NoticeDetail {
        id: 42,
        title: request.title.clone(),
        content: request.content.clone(),
        author_name: "Kim".to_string(),
        author_username: "21-70001".to_string(),
        created_at: None,
        formatted_date: "2024.03.02".to_string(),
    }
}

/// Succeeds or fails according to a queued script
#[derive(Default)]
struct FakeNotices {
    accept: Mutex<VecDeque<bool>>,
    received: Mutex<Vec<CreateNoticeRequest>>,
}

impl FakeNotices {
    fn scripted(accept: Vec<bool>) -> Arc<Self> {
        Arc::new(Self {
            accept: Mutex::new(accept.into()),
            received: Mutex::new(Vec::new()),
        })
    }

    fn received(&self) -> Vec<CreateNoticeRequest> {
        self.received.lock().clone()
    }
}

#[async_trait]
impl Submitter<CreateNotice> for FakeNotices {
    async fn submit(&self, request: CreateNoticeRequest) -> Option<NoticeDetail> {
        let accepted = self.accept.lock().pop_front().unwrap_or(false);
        let detail = created(&request);
        self.received.lock().push(request);
        accepted.then_some(detail)
    }
}

/// Rejects every upload
struct RejectingUploads;

#[async_trait]
impl Submitter<UploadDocument> for RejectingUploads {
    async fn submit(
        &self,
        _request: facility_client::UploadDocumentRequest,
    ) -> Option<facility_api::DocumentDetail> {
        None
    }
}

fn notice_form(source: Arc<FakeNotices>) -> MutationController<CreateNotice> {
    MutationController::new(source)
}

#[tokio::test]
async fn test_success_clears_draft() {
    let source = FakeNotices::scripted(vec![true]);
    let form = notice_form(source.clone());
    form.edit(|draft| {
        draft.title = " Elevator check ".to_string();
        draft.content = "Building 3, Friday".to_string();
    });

    let outcome = form.submit().await;

    match outcome {
        SubmitOutcome::Completed(notice) => assert_eq!(notice.title, "Elevator check"),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(!form.is_loading());
    let state = form.state();
    assert_eq!(state.error, None);
    assert_eq!(state.draft, Default::default());
    assert_eq!(source.received().len(), 1);
}

#[tokio::test]
async fn test_failure_keeps_draft_for_retry() {
    let source = FakeNotices::scripted(vec![false, true]);
    let form = notice_form(source.clone());
    form.edit(|draft| {
        draft.title = "Elevator check".to_string();
        draft.content = "Building 3".to_string();
    });

    let outcome = form.submit().await;
    assert_eq!(
        outcome,
        SubmitOutcome::Failed("An error occurred while creating the notice.".to_string())
    );
    let state = form.state();
    assert!(!state.loading);
    assert_eq!(state.draft.title, "Elevator check");
    assert_eq!(state.invalid_field, None);

    assert!(form.submit().await.is_completed());
    assert_eq!(source.received().len(), 2);
}

#[tokio::test]
async fn test_validation_failure_makes_no_call() {
    let source = FakeNotices::scripted(vec![true]);
    let form = notice_form(source.clone());
    form.edit(|draft| draft.title = "x".repeat(201));
    form.edit(|draft| draft.content = "body".to_string());

    let outcome = form.submit().await;

    match outcome {
        SubmitOutcome::Invalid(err) => assert_eq!(err.field, "title"),
        other => panic!("unexpected outcome: {:?}", other),
    }
    let state = form.state();
    assert_eq!(state.invalid_field, Some("title"));
    assert_eq!(
        state.error.as_deref(),
        Some("The title cannot exceed 200 characters.")
    );
    assert!(source.received().is_empty());
}

#[tokio::test]
async fn test_close_discards_draft_and_error() {
    let form = notice_form(FakeNotices::scripted(vec![]));
    form.edit(|draft| draft.title = "Half typed".to_string());
    form.submit().await;
    assert!(form.state().error.is_some());

    form.close();

    let state = form.state();
    assert_eq!(state.draft.title, "");
    assert_eq!(state.error, None);
}

#[test]
fn test_oversized_file_selection_is_rejected() {
    let form = MutationController::<UploadDocument>::new(Arc::new(RejectingUploads));
    let small = FilePayload::new("plan.pdf", "application/pdf", vec![0u8; 16]);
    form.select_file(small.clone()).unwrap();

    let large = FilePayload::new("scan.tif", "image/tiff", vec![0u8; 10 * 1024 * 1024 + 1]);
    let err = form.select_file(large).unwrap_err();

    assert_eq!(err.code, "file_too_large");
    let state = form.state();
    assert_eq!(state.draft.file, Some(small));
    assert_eq!(state.invalid_field, Some("file"));
}

#[tokio::test]
async fn test_upload_failure_reports_generic_message() {
    let form = MutationController::<UploadDocument>::new(Arc::new(RejectingUploads));
    form.edit(|draft| draft.title = "Floor plan".to_string());
    form.select_file(FilePayload::new("plan.pdf", "application/pdf", vec![1u8, 2, 3]))
        .unwrap();

    let outcome = form.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed("An error occurred while uploading the document.".to_string())
    );
    assert!(form.state().draft.file.is_some());
}
