// User-facing messages, one per operation

pub const NOTICE_LIST_FAILED: &str = "Failed to load notices.";
pub const NOTICE_DETAIL_FAILED: &str = "Failed to load the notice.";
pub const NOTICE_CREATE_FAILED: &str = "An error occurred while creating the notice.";

pub const DOCUMENT_LIST_FAILED: &str = "Failed to load documents.";
pub const DOCUMENT_DETAIL_FAILED: &str = "Failed to load the document.";
pub const DOCUMENT_UPLOAD_FAILED: &str = "An error occurred while uploading the document.";
pub const DOCUMENT_DOWNLOAD_FAILED: &str = "Failed to download the document.";

pub const CREDENTIALS_REQUIRED: &str = "Please enter your username and password.";
pub const LOGIN_FAILED: &str = "Invalid username or password.";
pub const SESSION_LOAD_FAILED: &str = "Failed to load your account.";
pub const LOGOUT_FAILED: &str = "An error occurred while logging out.";

pub const FILE_REQUIRED: &str = "Please select a file.";
