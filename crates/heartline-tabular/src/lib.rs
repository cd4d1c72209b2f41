//! Delimited tables and archive assembly for Heartline export.
//!
//! # Components
//!
//! - [`encode_field`] / [`encode_row`] - cell escaping with a spreadsheet
//!   formula-injection guard
//! - [`build_table`] - header plus one fixed-width row per record
//! - [`with_archive`] - collects named tables into an in-memory zip archive
//!
//! Tables use `;` between cells and `\n` between rows. Clinical free text
//! frequently contains commas, so the semicolon keeps most cells unquoted.
//!
//! # Example
//!
//! ```ignore
//! use heartline_tabular::{build_table, with_archive, ArchiveError};
//!
//! let bytes = with_archive(|sink| async move {
//!     let table = build_table(&["id", "value"], &records, |r| [r.id.clone(), r.value.to_string()]);
//!     sink.append_entry(&table, "values.csv").await?;
//!     Ok::<_, ArchiveError>(())
//! })
//! .await?;
//! ```

mod archive;
mod encoder;
mod table;

pub use archive::{ARCHIVE_CONTENT_TYPE, ArchiveEntry, ArchiveSink, with_archive};
pub use encoder::{FIELD_DELIMITER, ROW_DELIMITER, encode_field, encode_row};
pub use table::build_table;

use thiserror::Error;

/// Errors that can occur while assembling an archive.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The zip writer rejected an entry or failed to finalize.
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Writing entry data failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Two entries were appended under the same path.
    #[error("Duplicate archive entry: {0}")]
    DuplicateEntry(String),

    /// An entry was appended after the archive was finalized.
    #[error("Archive already finalized")]
    Finalized,
}

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, ArchiveError>;
