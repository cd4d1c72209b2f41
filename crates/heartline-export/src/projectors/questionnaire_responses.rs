//! KCCQ questionnaire response tables.
//!
//! Each response becomes one row holding the coded answer of every KCCQ-12
//! question plus the dizziness question. Answers are looked up by `linkId`
//! among the leaf items of the response.
//!
//! The slot linkIds and the configured questionnaire URL describe one
//! instrument and must be changed together.

use heartline_core::QuestionnaireResponse;
use heartline_storage::ClinicalRecord;
use heartline_tabular::build_table;

use super::cell;

/// One answer column of the KCCQ table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KccqSlot {
    pub column: &'static str,
    pub link_id: &'static str,
}

const fn slot(column: &'static str, link_id: &'static str) -> KccqSlot {
    KccqSlot { column, link_id }
}

pub const KCCQ_SLOTS: [KccqSlot; 13] = [
    slot("physicalLimitsShowering", "kccq-1a"),
    slot("physicalLimitsWalking", "kccq-1b"),
    slot("physicalLimitsHurrying", "kccq-1c"),
    slot("symptomFrequencySwelling", "kccq-2"),
    slot("symptomFrequencyFatigue", "kccq-3"),
    slot("symptomFrequencyShortnessOfBreath", "kccq-4"),
    slot("symptomFrequencySleepingSittingUp", "kccq-5"),
    slot("qualityOfLifeEnjoyment", "kccq-6"),
    slot("qualityOfLifeSatisfaction", "kccq-7"),
    slot("socialLimitsHobbies", "kccq-8a"),
    slot("socialLimitsChores", "kccq-8b"),
    slot("socialLimitsVisiting", "kccq-8c"),
    slot("dizziness", "dizziness"),
];

/// Number of columns: `id`, `authored`, then one per slot.
pub const COLUMNS: usize = KCCQ_SLOTS.len() + 2;

/// `id;authored` followed by the slot columns.
pub fn headers() -> [&'static str; COLUMNS] {
    std::array::from_fn(|index| match index {
        0 => "id",
        1 => "authored",
        _ => KCCQ_SLOTS[index - 2].column,
    })
}

pub fn project(record: &ClinicalRecord<QuestionnaireResponse>) -> [String; COLUMNS] {
    let response = &record.content;
    let tree = response.item_tree();
    std::array::from_fn(|index| match index {
        0 => record.id.clone(),
        1 => cell(response.authored),
        _ => {
            let link_id = KCCQ_SLOTS[index - 2].link_id;
            tree.find_leaf(|item| item.link_id == link_id)
                .and_then(|item| item.first_coded_answer())
                .map(str::to_string)
                .unwrap_or_default()
        }
    })
}

/// Renders responses to `questionnaire_url`; responses to any other
/// questionnaire are skipped.
pub fn render(records: &[ClinicalRecord<QuestionnaireResponse>], questionnaire_url: &str) -> Vec<u8> {
    let kccq: Vec<&ClinicalRecord<QuestionnaireResponse>> = records
        .iter()
        .filter(|record| record.content.is_response_to(questionnaire_url))
        .collect();
    build_table(&headers(), &kccq, |record| project(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    const URL: &str = "http://example.org/kccq";

    fn answer(link_id: &str, code: &str) -> Value {
        json!({"linkId": link_id, "answer": [{"valueCoding": {"code": code}}]})
    }

    fn response(id: &str, questionnaire: &str, items: Value) -> ClinicalRecord<QuestionnaireResponse> {
        let content = json!({
            "questionnaire": questionnaire,
            "authored": "2024-06-01T10:00:00Z",
            "item": items
        });
        ClinicalRecord::new(id, serde_json::from_value(content).unwrap())
    }

    #[test]
    fn test_headers() {
        let headers = headers();
        assert_eq!(headers[0], "id");
        assert_eq!(headers[1], "authored");
        assert_eq!(headers[2], "physicalLimitsShowering");
        assert_eq!(headers[COLUMNS - 1], "dizziness");
    }

    #[test]
    fn test_project_nested_answers() {
        let record = response(
            "qr1",
            URL,
            json!([
                {"linkId": "physical", "item": [answer("kccq-1a", "3"), answer("kccq-1c", "5")]},
                {"linkId": "social", "item": [{"linkId": "group", "item": [answer("kccq-8b", "2")]}]},
                answer("dizziness", "1"),
                {"linkId": "kccq-6", "answer": [{"valueString": "free text"}]}
            ]),
        );

        let row = project(&record);
        assert_eq!(row[0], "qr1");
        assert_eq!(row[1], "2024-06-01T10:00:00Z");
        assert_eq!(row[2], "3");
        assert_eq!(row[3], "");
        assert_eq!(row[4], "5");
        assert_eq!(row[9], "");
        assert_eq!(row[12], "2");
        assert_eq!(row[14], "1");
    }

    #[test]
    fn test_default_url_answers_fill_every_slot() {
        let items: Vec<Value> = KCCQ_SLOTS
            .iter()
            .map(|slot| answer(slot.link_id, "2"))
            .collect();
        let records = vec![response(
            "qr1",
            crate::settings::DEFAULT_KCCQ_QUESTIONNAIRE_URL,
            Value::Array(items),
        )];

        let table = String::from_utf8(render(
            &records,
            &crate::ExportSettings::default().kccq_questionnaire_url,
        ))
        .unwrap();
        let row = table.split('\n').nth(1).unwrap();
        assert!(row.split(';').skip(2).all(|cell| cell == "2"));
        assert_eq!(row.split(';').count(), COLUMNS);
    }

    #[test]
    fn test_render_filters_other_questionnaires() {
        let records = vec![
            response("qr1", URL, json!([answer("kccq-2", "4")])),
            response("qr2", "http://example.org/phq9", json!([answer("kccq-2", "1")])),
            response("qr3", "http://example.org/KCCQ", json!([])),
        ];

        let table = String::from_utf8(render(&records, URL)).unwrap();
        let lines: Vec<&str> = table.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("qr1;2024-06-01T10:00:00Z;;;;4;"));
    }
}
