//! Per-category projections from clinical records to table rows.
//!
//! Each submodule exposes its `HEADERS` and a `render` function producing a
//! complete table. Cell conventions shared by all projectors:
//!
//! - missing optional values become empty cells
//! - timestamps are RFC 3339 in UTC
//! - numbers use the `f64` display form (`80`, `72.5`)
//! - booleans are `true` / `false`

pub mod appointments;
pub mod medications;
pub mod messages;
pub mod observations;
pub mod questionnaire_responses;
pub mod questionnaires;
pub mod symptom_scores;

use std::fmt::Display;

use heartline_storage::UserCollection;

/// Table file name of a per-user collection, relative to the user directory.
pub fn table_file_name(collection: UserCollection) -> String {
    match collection {
        UserCollection::QuestionnaireResponses => {
            format!("{}_kccq.csv", collection.name())
        }
        other => format!("{}.csv", other.name()),
    }
}

fn text(value: Option<&str>) -> String {
    value.map(str::to_string).unwrap_or_default()
}

fn cell<T: Display>(value: Option<T>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}
