use serde::{Deserialize, Serialize};

use crate::localized::LocalizedText;
use crate::time::FhirDateTime;

/// A message shown to a patient in the app (reminders, recommendations, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    pub title: LocalizedText,
    pub description: Option<LocalizedText>,
    pub action: Option<String>,
    #[serde(default)]
    pub is_dismissible: bool,
    pub creation_date: FhirDateTime,
    pub due_date: Option<FhirDateTime>,
    pub completion_date: Option<FhirDateTime>,
    pub reference: Option<String>,
}
