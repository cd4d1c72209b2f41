//! Heartline data export
//!
//! Exports per-patient clinical data from a [`ClinicalStore`] into a zip
//! archive of `;`-delimited tables. An export targets one patient, every
//! patient of an organization, or every patient.
//!
//! ## Archive layout
//!
//! - `questionnaire_{id}.csv` - one table per questionnaire definition
//! - `{userId}/appointments.csv`, `{userId}/medicationRequests.csv`,
//!   `{userId}/messages.csv`
//! - `{userId}/{observationCollection}.csv` - one table per observation
//!   category (`bodyWeightObservations`, `bloodPressureObservations`, ...)
//! - `{userId}/questionnaireResponses_kccq.csv`, `{userId}/symptomScores.csv`
//!
//! Every table starts with its header row, also when it has no data rows.
//!
//! ## Example
//!
//! ```ignore
//! use heartline_export::{ExportScope, ExportSettings, Exporter};
//!
//! let exporter = Exporter::new(store, ExportSettings::default());
//! let scope = ExportScope::Organization("stanford".into());
//! let archive = exporter.export(&scope).await?;
//! std::fs::write(scope.archive_file_name(), archive)?;
//! ```
//!
//! [`ClinicalStore`]: heartline_storage::ClinicalStore

mod error;
mod exporter;
pub mod projectors;
mod scope;
mod settings;

pub use error::{ErrorKind, ExportError, Result};
pub use exporter::Exporter;
pub use heartline_tabular::ARCHIVE_CONTENT_TYPE;
pub use scope::ExportScope;
pub use settings::{DEFAULT_KCCQ_QUESTIONNAIRE_URL, DEFAULT_LANGUAGE, ExportSettings};
