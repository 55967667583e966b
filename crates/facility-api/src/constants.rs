// API path constants, relative to the configured base URL

pub mod api_path {
    // Auth
    pub const AUTH_LOGIN: &str = "/auth/login";
    pub const AUTH_LOGOUT: &str = "/auth/logout";

    // Users
    pub const USERS_ME: &str = "/users/me";
    pub const USERS: &str = "/users";

    // Notices
    pub const NOTICES: &str = "/notices";
    pub const NOTICES_ALL: &str = "/notices/all";

    // Documents
    pub const DOCUMENTS: &str = "/documents";
    pub const DOCUMENTS_ALL: &str = "/documents/all";

    pub fn notice(id: u64) -> String {
        format!("{}/{}", NOTICES, id)
    }

    pub fn document(id: u64) -> String {
        format!("{}/{}", DOCUMENTS, id)
    }

    pub fn document_download(id: u64) -> String {
        format!("{}/{}/download", DOCUMENTS, id)
    }

    pub fn user(username: &str) -> String {
        format!("{}/{}", USERS, path_segment(username))
    }

    /// Percent-encode `value` so it stays a single path segment
    fn path_segment(value: &str) -> String {
        if !value.is_empty() && value.chars().all(|c| c == '.') {
            return value.replace('.', "%2E");
        }
        url::form_urlencoded::byte_serialize(value.as_bytes())
            .map(|chunk| if chunk == "+" { "%20" } else { chunk })
            .collect()
    }
}
