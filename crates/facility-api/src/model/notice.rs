// Notice model types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{PageMeta, PageResult};

/// Notice row as shown in list views
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeSummary {
    pub id: u64,
    pub title: String,
    pub author_name: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    /// Pre-formatted by the server; never recomputed here
    pub formatted_date: String,
}

/// Full notice, fetched individually
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeDetail {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author_name: String,
    pub author_username: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    pub formatted_date: String,
}

/// Wire shape of `GET /notices`
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeListResponse {
    pub notices: Vec<NoticeSummary>,
    #[serde(flatten)]
    pub meta: PageMeta,
}

impl From<NoticeListResponse> for PageResult<NoticeSummary> {
    fn from(response: NoticeListResponse) -> Self {
        PageResult::from_parts(response.notices, response.meta)
    }
}

/// Body of `POST /notices`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNoticeRequest {
    pub title: String,
    pub content: String,
}
