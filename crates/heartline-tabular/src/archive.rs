//! In-memory zip archive assembly.

use std::collections::HashSet;
use std::future::Future;
use std::io::{Cursor, Write};
use std::sync::Arc;

use tokio::sync::Mutex;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::ArchiveError;

/// MIME type of a finished archive.
pub const ARCHIVE_CONTENT_TYPE: &str = "application/zip";

type ZipBuffer = ZipWriter<Cursor<Vec<u8>>>;

/// One named file inside the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Path inside the archive; `/` separates directories.
    pub path: String,
    pub data: Vec<u8>,
}

impl ArchiveEntry {
    pub fn new(path: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            data,
        }
    }
}

struct ArchiveState {
    writer: ZipBuffer,
    paths: HashSet<String>,
}

/// Handle for appending entries to an archive under construction.
///
/// Clones share the same archive. Appends are serialized, so the entry order
/// in the archive is the order in which appends complete.
#[derive(Clone)]
pub struct ArchiveSink {
    state: Arc<Mutex<Option<ArchiveState>>>,
    options: SimpleFileOptions,
}

impl ArchiveSink {
    fn new() -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            // maximum deflate level
            .compression_level(Some(9));

        Self {
            state: Arc::new(Mutex::new(Some(ArchiveState {
                writer: ZipWriter::new(Cursor::new(Vec::new())),
                paths: HashSet::new(),
            }))),
            options,
        }
    }

    /// Appends `data` as a file named `path`.
    ///
    /// # Errors
    ///
    /// Fails if `path` was already used, if the archive has been finalized,
    /// or if the zip writer rejects the entry.
    pub async fn append_entry(&self, data: &[u8], path: &str) -> Result<(), ArchiveError> {
        let mut guard = self.state.lock().await;
        let state = guard.as_mut().ok_or(ArchiveError::Finalized)?;

        if !state.paths.insert(path.to_string()) {
            return Err(ArchiveError::DuplicateEntry(path.to_string()));
        }

        state.writer.start_file(path, self.options)?;
        state.writer.write_all(data)?;

        tracing::trace!(path = %path, bytes = data.len(), "Appended archive entry");
        Ok(())
    }

    pub async fn append(&self, entry: &ArchiveEntry) -> Result<(), ArchiveError> {
        self.append_entry(&entry.data, &entry.path).await
    }

    async fn finish(&self) -> Result<Vec<u8>, ArchiveError> {
        let state = self
            .state
            .lock()
            .await
            .take()
            .ok_or(ArchiveError::Finalized)?;
        let entries = state.paths.len();
        let cursor = state.writer.finish()?;
        let bytes = cursor.into_inner();

        tracing::debug!(entries, bytes = bytes.len(), "Finalized archive");
        Ok(bytes)
    }
}

/// Runs `generator` with a fresh archive sink and returns the finished
/// archive bytes.
///
/// The archive is finalized only after the generator's future completes
/// successfully. If the generator or finalization fails, the error is
/// returned and the partial archive is discarded.
pub async fn with_archive<F, Fut, E>(generator: F) -> Result<Vec<u8>, E>
where
    F: FnOnce(ArchiveSink) -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: From<ArchiveError>,
{
    let sink = ArchiveSink::new();
    generator(sink.clone()).await?;
    Ok(sink.finish().await?)
}
