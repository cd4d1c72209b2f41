//! Questionnaire definition tables.
//!
//! Only leaf items are exported: groups carry no answerable content. Leaves
//! appear in depth-first pre-order with children in their original order.

use heartline_core::{Questionnaire, QuestionnaireItem};
use heartline_storage::ClinicalRecord;
use heartline_tabular::build_table;

use super::text;

pub const HEADERS: [&str; 4] = ["linkId", "text", "type", "answerOptions"];

/// Archive path of a questionnaire definition.
pub fn file_name(questionnaire_id: &str) -> String {
    format!("questionnaire_{questionnaire_id}.csv")
}

pub fn project(item: &&QuestionnaireItem) -> [String; 4] {
    [
        item.link_id.clone(),
        text(item.text.as_deref()),
        text(item.item_type.as_deref()),
        item.answer_options_label(),
    ]
}

pub fn render(record: &ClinicalRecord<Questionnaire>) -> Vec<u8> {
    let tree = record.content.item_tree();
    let leaves: Vec<&QuestionnaireItem> = tree.leaves().collect();
    build_table(&HEADERS, &leaves, project)
}
