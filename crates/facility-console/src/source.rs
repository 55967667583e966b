// Data source abstraction consumed by the controllers

use async_trait::async_trait;
use bytes::Bytes;

use facility_api::{
    DocumentDetail, DocumentSummary, NoticeDetail, NoticeSummary, PageRequest, PageResult,
};
use facility_client::ResourceClient;

use crate::resource::{Documents, Notices, Resource};

/// Fetches one page of summaries. `None` means the fetch failed and was
/// already reported.
#[async_trait]
pub trait PageSource<R: Resource>: Send + Sync {
    async fn fetch_page(&self, request: PageRequest) -> Option<PageResult<R::Summary>>;
}

/// Fetches one entity by identifier
#[async_trait]
pub trait DetailSource<R: Resource>: Send + Sync {
    async fn fetch_detail(&self, id: u64) -> Option<R::Detail>;
}

/// Fetches raw file content
#[async_trait]
pub trait FileSource: Send + Sync {
    async fn fetch_file(&self, id: u64) -> Option<Bytes>;
}

#[async_trait]
impl PageSource<Notices> for ResourceClient {
    async fn fetch_page(&self, request: PageRequest) -> Option<PageResult<NoticeSummary>> {
        self.list_notices(request).await
    }
}

#[async_trait]
impl DetailSource<Notices> for ResourceClient {
    async fn fetch_detail(&self, id: u64) -> Option<NoticeDetail> {
        self.get_notice(id).await
    }
}

#[async_trait]
impl PageSource<Documents> for ResourceClient {
    async fn fetch_page(&self, request: PageRequest) -> Option<PageResult<DocumentSummary>> {
        self.list_documents(request).await
    }
}

#[async_trait]
impl DetailSource<Documents> for ResourceClient {
    async fn fetch_detail(&self, id: u64) -> Option<DocumentDetail> {
        self.get_document(id).await
    }
}

#[async_trait]
impl FileSource for ResourceClient {
    async fn fetch_file(&self, id: u64) -> Option<Bytes> {
        self.download_document(id).await
    }
}
