use serde::{Deserialize, Serialize};

use crate::time::FhirDateTime;

/// Scores derived from a KCCQ questionnaire response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomScore {
    pub questionnaire_response_id: Option<String>,
    pub date: FhirDateTime,
    pub overall_score: f64,
    pub physical_limits_score: Option<f64>,
    pub social_limits_score: Option<f64>,
    pub quality_of_life_score: Option<f64>,
    pub symptom_frequency_score: Option<f64>,
    pub dizziness_score: f64,
}
