// Saves document content to the local filesystem

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{error, info};

use crate::messages;
use crate::source::FileSource;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DownloadState {
    pub downloading: bool,
    pub error: Option<String>,
}

pub struct DownloadController {
    source: Arc<dyn FileSource>,
    state: RwLock<DownloadState>,
}

impl DownloadController {
    pub fn new(source: Arc<dyn FileSource>) -> Self {
        Self {
            source,
            state: RwLock::new(DownloadState::default()),
        }
    }

    pub fn state(&self) -> DownloadState {
        self.state.read().clone()
    }

    /// Fetch document `id` and write it into `dir` under `file_name`.
    ///
    /// Only the final component of `file_name` is used. Returns the written
    /// path, or `None` with the state's error set.
    pub async fn download(&self, id: u64, file_name: &str, dir: &Path) -> Option<PathBuf> {
        {
            let mut state = self.state.write();
            state.downloading = true;
            state.error = None;
        }

        let path = dir.join(local_file_name(id, file_name));
        let saved = match self.source.fetch_file(id).await {
            Some(bytes) => match tokio::fs::write(&path, &bytes).await {
                Ok(()) => {
                    info!(id, path = %path.display(), size = bytes.len(), "Document saved");
                    true
                }
                Err(e) => {
                    error!(id, path = %path.display(), error = %e, "Failed to write document");
                    false
                }
            },
            None => false,
        };

        let mut state = self.state.write();
        state.downloading = false;
        if saved {
            Some(path)
        } else {
            state.error = Some(messages::DOCUMENT_DOWNLOAD_FAILED.to_string());
            None
        }
    }
}

fn local_file_name(id: u64, file_name: &str) -> String {
    Path::new(file_name)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("document-{}", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_file_name_strips_directories() {
        assert_eq!(local_file_name(1, "plan.pdf"), "plan.pdf");
        assert_eq!(local_file_name(1, "../../etc/passwd"), "passwd");
        assert_eq!(local_file_name(7, ""), "document-7");
        assert_eq!(local_file_name(7, ".."), "document-7");
    }
}
