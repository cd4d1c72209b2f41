use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use heartline_config::AppConfig;
use heartline_db_memory::{Fixture, InMemoryStore};
use heartline_export::{ARCHIVE_CONTENT_TYPE, ExportScope, Exporter};

use crate::cli::ExportArgs;
use crate::output::print_success;

/// Summary of a written archive.
#[derive(Debug)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub entries: usize,
    pub bytes: usize,
}

pub async fn run(args: ExportArgs, config: &AppConfig) -> Result<()> {
    let (scope, options) = args.scope.into_parts();
    let output = options
        .output
        .unwrap_or_else(|| PathBuf::from(scope.archive_file_name()));

    let summary = export_fixture(&options.data, &scope, &output, config).await?;

    print_success(&format!(
        "Exported {scope} to {} ({} entries, {} bytes, {ARCHIVE_CONTENT_TYPE})",
        summary.path.display(),
        summary.entries,
        summary.bytes
    ));
    Ok(())
}

/// Loads `data` into an in-memory store, exports `scope` and writes the
/// archive to `output`.
pub async fn export_fixture(
    data: &Path,
    scope: &ExportScope,
    output: &Path,
    config: &AppConfig,
) -> Result<ExportSummary> {
    let json = tokio::fs::read_to_string(data)
        .await
        .with_context(|| format!("Failed to read data file {}", data.display()))?;
    let fixture = Fixture::from_json(&json)?;
    let store = InMemoryStore::from_fixture(fixture)
        .with_context(|| format!("Failed to load data file {}", data.display()))?;
    tracing::info!(documents = store.len(), data = %data.display(), "Loaded store");

    let exporter = Exporter::new(Arc::new(store), config.export.clone());
    let archive = exporter
        .export(scope)
        .await
        .with_context(|| format!("Export of {scope} failed"))?;

    let entries = zip::ZipArchive::new(Cursor::new(archive.as_slice()))
        .context("Exported archive is unreadable")?
        .len();

    tokio::fs::write(output, &archive)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(ExportSummary {
        path: output.to_path_buf(),
        entries,
        bytes: archive.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "questionnaires": {"kccq": {"item": [{"linkId": "q1", "type": "choice"}]}},
        "users": {
            "p1": {
                "profile": {"type": "patient", "organization": "stanford"},
                "collections": {
                    "appointments": {
                        "a1": {"status": "booked", "start": "2024-03-01T09:00:00Z", "end": "2024-03-01T09:30:00Z"}
                    }
                }
            }
        }
    }"#;

    #[tokio::test]
    async fn test_export_fixture_writes_archive() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("fixture.json");
        std::fs::write(&data, FIXTURE).unwrap();
        let scope = ExportScope::SingleUser("p1".into());
        let output = dir.path().join(scope.archive_file_name());

        let summary = export_fixture(&data, &scope, &output, &AppConfig::default())
            .await
            .unwrap();

        assert_eq!(summary.entries, 13);
        assert_eq!(summary.bytes as u64, std::fs::metadata(&output).unwrap().len());
    }

    #[tokio::test]
    async fn test_missing_user_reports_scope() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("fixture.json");
        std::fs::write(&data, FIXTURE).unwrap();
        let output = dir.path().join("out.zip");

        let err = export_fixture(
            &data,
            &ExportScope::SingleUser("p9".into()),
            &output,
            &AppConfig::default(),
        )
        .await
        .unwrap_err();

        let message = format!("{err:#}");
        assert!(message.contains("Export of user:p9 failed"));
        assert!(message.contains("User not found: p9"));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_missing_data_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_fixture(
            &dir.path().join("absent.json"),
            &ExportScope::All,
            &dir.path().join("out.zip"),
            &AppConfig::default(),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("Failed to read data file"));
    }
}
