use serde::{Deserialize, Serialize};

/// Language used to resolve localized message text when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Placeholder URL of the KCCQ instrument whose items carry the linkIds in
/// [`KCCQ_SLOTS`](crate::projectors::questionnaire_responses::KCCQ_SLOTS).
///
/// A deployment exporting responses to a published questionnaire must set
/// `kccq_questionnaire_url` to that questionnaire's URL and use its linkIds
/// in the slot table.
pub const DEFAULT_KCCQ_QUESTIONNAIRE_URL: &str = "urn:heartline:questionnaire:kccq-12";

/// Per-exporter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Preferred language tag for localized text.
    #[serde(default = "default_language")]
    pub language: String,
    /// Only questionnaire responses to this URL are exported.
    #[serde(default = "default_kccq_questionnaire_url")]
    pub kccq_questionnaire_url: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            language: default_language(),
            kccq_questionnaire_url: default_kccq_questionnaire_url(),
        }
    }
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_kccq_questionnaire_url() -> String {
    DEFAULT_KCCQ_QUESTIONNAIRE_URL.to_string()
}
