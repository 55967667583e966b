// Model types for facility API requests and responses

pub mod common;
pub mod document;
pub mod notice;
pub mod user;

pub use common::{
    ApiResponse, DEFAULT_PAGE_SIZE, EnvelopeError, InvalidPageSize, PageMeta, PageRequest,
    PageResult,
};
pub use document::{DocumentDetail, DocumentListResponse, DocumentSummary};
pub use notice::{CreateNoticeRequest, NoticeDetail, NoticeListResponse, NoticeSummary};
pub use user::{LoginRequest, LoginResponse, UnitInfo, UserInfo, UserRole};
