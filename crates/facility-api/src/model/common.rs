// Common model types: response envelope and pagination

use serde::{Deserialize, Deserializer, Serialize};

/// Page size the backend applies when none is requested
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Response envelope wrapping every JSON API response.
///
/// A response is only usable when `success` is true *and* `data` is present;
/// see [`ApiResponse::into_data`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Treats an explicit `null` the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Why an envelope could not be turned into its payload
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EnvelopeError {
    #[error("server rejected request: {0}")]
    Rejected(String),

    #[error("response carried no data: {0}")]
    MissingData(String),
}

impl EnvelopeError {
    /// The server-supplied message
    pub fn message(&self) -> &str {
        match self {
            EnvelopeError::Rejected(message) | EnvelopeError::MissingData(message) => message,
        }
    }
}

impl<T> ApiResponse<T> {
    /// Successful envelope carrying `data`
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Failed envelope with no data
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    /// Extract the payload, treating `success == false` or absent `data` as failure
    pub fn into_data(self) -> Result<T, EnvelopeError> {
        if !self.success {
            return Err(EnvelopeError::Rejected(self.message));
        }
        self.data.ok_or(EnvelopeError::MissingData(self.message))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("page size must be positive")]
pub struct InvalidPageSize;

/// Server-facing page request. `page_index` is 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PageRequest {
    #[serde(rename = "page")]
    page_index: u32,
    #[serde(rename = "size")]
    page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page_index: u32, page_size: u32) -> Result<Self, InvalidPageSize> {
        if page_size == 0 {
            return Err(InvalidPageSize);
        }
        Ok(Self {
            page_index,
            page_size,
        })
    }

    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// 1-based page number as shown to the user
    pub fn display_page(&self) -> u32 {
        self.page_index.saturating_add(1)
    }

    pub fn with_page_index(self, page_index: u32) -> Self {
        Self { page_index, ..self }
    }
}

/// Pagination fields reported by the server alongside a page of items
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_count: u64,
    /// 1-based, as reported by the server
    pub current_page: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Normalized page of items, independent of the resource-specific wire shape.
///
/// Values are stored exactly as the server reported them; no consistency
/// between `current_page`, `total_pages` and the flags is assumed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub current_page: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> PageResult<T> {
    pub fn from_parts(items: Vec<T>, meta: PageMeta) -> Self {
        Self {
            items,
            total_count: meta.total_count,
            current_page: meta.current_page,
            total_pages: meta.total_pages,
            has_next: meta.has_next,
            has_previous: meta.has_previous,
        }
    }

    pub fn meta(&self) -> PageMeta {
        PageMeta {
            total_count: self.total_count,
            current_page: self.current_page,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}
