use heartline_core::SymptomScore;
use heartline_storage::ClinicalRecord;
use heartline_tabular::build_table;

use super::{cell, text};

pub const HEADERS: [&str; 9] = [
    "id",
    "questionnaireResponseId",
    "date",
    "overallScore",
    "physicalLimitsScore",
    "socialLimitsScore",
    "qualityOfLifeScore",
    "symptomFrequencyScore",
    "dizzinessScore",
];

pub fn project(record: &ClinicalRecord<SymptomScore>) -> [String; 9] {
    let score = &record.content;
    [
        record.id.clone(),
        text(score.questionnaire_response_id.as_deref()),
        score.date.to_string(),
        score.overall_score.to_string(),
        cell(score.physical_limits_score),
        cell(score.social_limits_score),
        cell(score.quality_of_life_score),
        cell(score.symptom_frequency_score),
        score.dizziness_score.to_string(),
    ]
}

pub fn render(records: &[ClinicalRecord<SymptomScore>]) -> Vec<u8> {
    build_table(&HEADERS, records, project)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_partial_scores() {
        let score: SymptomScore = serde_json::from_value(json!({
            "questionnaireResponseId": "qr1",
            "date": "2024-04-10T00:00:00Z",
            "overallScore": 62.5,
            "physicalLimitsScore": 50,
            "dizzinessScore": 3
        }))
        .unwrap();

        assert_eq!(
            project(&ClinicalRecord::new("s1", score)),
            ["s1", "qr1", "2024-04-10T00:00:00Z", "62.5", "50", "", "", "", "3"]
        );
    }
}
