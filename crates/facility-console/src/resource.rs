// Resource types the generic controllers are parameterized over

use std::fmt::Debug;

use facility_api::{DocumentDetail, DocumentSummary, NoticeDetail, NoticeSummary};

use crate::messages;

/// A paginated, individually fetchable resource
pub trait Resource: Send + Sync + 'static {
    /// Name used in log events
    const NAME: &'static str;
    /// Message shown when a list fetch fails
    const LIST_ERROR: &'static str;
    /// Message shown when a detail fetch fails
    const DETAIL_ERROR: &'static str;

    type Summary: Clone + Debug + Send + Sync + 'static;
    type Detail: Clone + Debug + Send + Sync + 'static;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Notices;

impl Resource for Notices {
    const NAME: &'static str = "notices";
    const LIST_ERROR: &'static str = messages::NOTICE_LIST_FAILED;
    const DETAIL_ERROR: &'static str = messages::NOTICE_DETAIL_FAILED;

    type Summary = NoticeSummary;
    type Detail = NoticeDetail;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Documents;

impl Resource for Documents {
    const NAME: &'static str = "documents";
    const LIST_ERROR: &'static str = messages::DOCUMENT_LIST_FAILED;
    const DETAIL_ERROR: &'static str = messages::DOCUMENT_DETAIL_FAILED;

    type Summary = DocumentSummary;
    type Detail = DocumentDetail;
}
