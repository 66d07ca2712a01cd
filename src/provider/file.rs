//! File-backed provider serving a local JSON fixture.

use crate::feed::PageRequest;
use crate::model::FetchError;
use crate::provider::{PageReply, ReviewsProvider};
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::thread;
use tracing::debug;

/// Provider that reads a page payload from a file on disk.
///
/// Every request is answered with the same file contents; the file plays
/// the role of one server response and pagination windowing is left to the
/// payload itself. Reads happen on a short-lived worker thread so the owner
/// context never blocks on I/O.
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    /// Provider serving the payload at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReviewsProvider for FileProvider {
    fn fetch_page(&mut self, request: PageRequest, reply: Sender<PageReply>) {
        let path = self.path.clone();
        thread::spawn(move || {
            debug!(path = %path.display(), offset = request.offset, "reading page payload");
            let outcome = std::fs::read(&path).map_err(FetchError::from);
            // The session may have been dropped while we were reading.
            let _ = reply.send((request, outcome));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn serves_file_contents() {
        let dir = std::env::temp_dir().join("revfeed-provider-test");
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("page.json");
        std::fs::write(&path, b"{\"items\":[],\"count\":0}").expect("fixture");

        let mut provider = FileProvider::new(&path);
        let (tx, rx) = mpsc::channel();
        provider.fetch_page(PageRequest { offset: 0, limit: 20 }, tx);

        let (request, outcome) = rx.recv_timeout(Duration::from_secs(5)).expect("reply");
        assert_eq!(request.offset, 0);
        assert_eq!(outcome.expect("read ok"), b"{\"items\":[],\"count\":0}");
    }

    #[test]
    fn missing_file_reports_io_error() {
        let mut provider = FileProvider::new("/nonexistent/revfeed-page.json");
        let (tx, rx) = mpsc::channel();
        provider.fetch_page(PageRequest { offset: 0, limit: 20 }, tx);

        let (_, outcome) = rx.recv_timeout(Duration::from_secs(5)).expect("reply");
        assert!(matches!(outcome, Err(FetchError::Io(_))));
    }

    #[test]
    fn dropped_receiver_is_tolerated() {
        let mut provider = FileProvider::new("/nonexistent/revfeed-page.json");
        let (tx, rx) = mpsc::channel();
        drop(rx);
        // Must not panic even though the reply has nowhere to go.
        provider.fetch_page(PageRequest { offset: 0, limit: 20 }, tx);
        std::thread::sleep(Duration::from_millis(50));
    }
}
