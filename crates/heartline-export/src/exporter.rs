//! Export orchestration.

use std::time::Instant;

use futures_util::future::try_join_all;
use heartline_core::{
    Appointment, MedicationRequest, Observation, ObservationCategory, Questionnaire,
    QuestionnaireResponse, SymptomScore, UserMessage,
};
use heartline_storage::{ClinicalStore, DynStore, Selector, UserCollection, query_as};
use heartline_tabular::{ArchiveEntry, ArchiveSink, with_archive};
use tracing::instrument;

use crate::error::{ExportError, Result};
use crate::projectors::{
    self, appointments, medications, messages, observations, questionnaire_responses,
    questionnaires, symptom_scores,
};
use crate::scope::ExportScope;
use crate::settings::ExportSettings;

/// Per-user tables, in archive order.
const USER_TABLES: [UserCollection; 12] = [
    UserCollection::Appointments,
    UserCollection::MedicationRequests,
    UserCollection::Messages,
    UserCollection::Observations(ObservationCategory::BodyWeight),
    UserCollection::Observations(ObservationCategory::BloodPressure),
    UserCollection::Observations(ObservationCategory::Creatinine),
    UserCollection::Observations(ObservationCategory::DryWeight),
    UserCollection::Observations(ObservationCategory::EstimatedGlomerularFiltrationRate),
    UserCollection::Observations(ObservationCategory::HeartRate),
    UserCollection::Observations(ObservationCategory::Potassium),
    UserCollection::QuestionnaireResponses,
    UserCollection::SymptomScores,
];

/// Builds export archives from a clinical store.
///
/// An `Exporter` holds no per-call state; concurrent exports share nothing
/// but the store handle.
#[derive(Clone)]
pub struct Exporter {
    store: DynStore,
    settings: ExportSettings,
}

impl Exporter {
    pub fn new(store: DynStore, settings: ExportSettings) -> Self {
        Self { store, settings }
    }

    /// Exports the data of one user.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::NotFound`] if the user does not exist.
    pub async fn export_for_user(&self, user_id: &str) -> Result<Vec<u8>> {
        self.export(&ExportScope::SingleUser(user_id.to_string()))
            .await
    }

    /// Exports every patient of `organization`. An organization without
    /// patients yields an archive holding only the questionnaire tables.
    pub async fn export_for_organization(&self, organization: &str) -> Result<Vec<u8>> {
        self.export(&ExportScope::Organization(organization.to_string()))
            .await
    }

    /// Exports every patient.
    pub async fn export_for_all(&self) -> Result<Vec<u8>> {
        self.export(&ExportScope::All).await
    }

    /// Exports `scope` into a finished zip archive.
    ///
    /// Questionnaire definitions are written first, then the tables of each
    /// user in resolution order. The first failing query or append aborts
    /// the whole export.
    pub async fn export(&self, scope: &ExportScope) -> Result<Vec<u8>> {
        let started = Instant::now();
        tracing::info!(
            scope = %scope,
            backend = self.store.backend_name(),
            "Starting export"
        );

        let result = self.build_archive(scope).await;

        match &result {
            Ok(archive) => tracing::info!(
                scope = %scope,
                bytes = archive.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Export completed"
            ),
            Err(e) => tracing::warn!(
                scope = %scope,
                kind = %e.kind(),
                error = %e,
                "Export failed"
            ),
        }

        result
    }

    async fn build_archive(&self, scope: &ExportScope) -> Result<Vec<u8>> {
        let user_ids = self.resolve_scope(scope).await?;
        tracing::info!(scope = %scope, users = user_ids.len(), "Resolved export scope");

        with_archive(|sink| self.write_archive(sink, user_ids)).await
    }

    async fn write_archive(&self, sink: ArchiveSink, user_ids: Vec<String>) -> Result<()> {
        let mut entries = self.export_questionnaires(&sink).await?;
        for user_id in &user_ids {
            entries += self.export_user(&sink, user_id).await?;
        }
        tracing::info!(users = user_ids.len(), entries, "All tables appended");
        Ok(())
    }

    async fn resolve_scope(&self, scope: &ExportScope) -> Result<Vec<String>> {
        match scope {
            ExportScope::SingleUser(user_id) => match self.store.get_user(user_id).await? {
                Some(user) => Ok(vec![user.id]),
                None => Err(ExportError::not_found(user_id.as_str())),
            },
            ExportScope::Organization(organization) => Ok(self
                .store
                .get_all_patients()
                .await?
                .into_iter()
                .filter(|patient| patient.content.belongs_to(organization))
                .map(|patient| patient.id)
                .collect()),
            ExportScope::All => Ok(self
                .store
                .get_all_patients()
                .await?
                .into_iter()
                .map(|patient| patient.id)
                .collect()),
        }
    }

    async fn export_questionnaires(&self, sink: &ArchiveSink) -> Result<usize> {
        let records =
            query_as::<Questionnaire>(self.store(), &Selector::Questionnaires).await?;

        for record in &records {
            let path = questionnaires::file_name(&record.id);
            let table = questionnaires::render(record);
            tracing::debug!(path = %path, bytes = table.len(), "Rendered questionnaire table");
            sink.append_entry(&table, &path).await?;
        }

        Ok(records.len())
    }

    /// Queries every per-user collection concurrently, then appends the
    /// tables in [`USER_TABLES`] order.
    #[instrument(skip(self, sink))]
    async fn export_user(&self, sink: &ArchiveSink, user_id: &str) -> Result<usize> {
        let tables = USER_TABLES
            .iter()
            .map(|collection| self.render_user_table(user_id, *collection));
        let entries = try_join_all(tables).await?;

        for entry in &entries {
            sink.append(entry).await?;
        }

        tracing::debug!(tables = entries.len(), "Exported user");
        Ok(entries.len())
    }

    async fn render_user_table(
        &self,
        user_id: &str,
        collection: UserCollection,
    ) -> Result<ArchiveEntry> {
        let selector = Selector::user_collection(user_id, collection);
        let store = self.store();

        let table = match collection {
            UserCollection::Appointments => {
                appointments::render(&query_as::<Appointment>(store, &selector).await?)
            }
            UserCollection::MedicationRequests => {
                medications::render(&query_as::<MedicationRequest>(store, &selector).await?)
            }
            UserCollection::Messages => messages::render(
                &query_as::<UserMessage>(store, &selector).await?,
                &self.settings.language,
            ),
            UserCollection::Observations(category) => observations::renderer(category)(
                &query_as::<Observation>(store, &selector).await?,
            ),
            UserCollection::QuestionnaireResponses => questionnaire_responses::render(
                &query_as::<QuestionnaireResponse>(store, &selector).await?,
                &self.settings.kccq_questionnaire_url,
            ),
            UserCollection::SymptomScores => {
                symptom_scores::render(&query_as::<SymptomScore>(store, &selector).await?)
            }
        };

        let path = format!("{user_id}/{}", projectors::table_file_name(collection));
        tracing::debug!(path = %path, bytes = table.len(), "Rendered table");
        Ok(ArchiveEntry::new(path, table))
    }

    fn store(&self) -> &dyn ClinicalStore {
        self.store.as_ref()
    }
}
