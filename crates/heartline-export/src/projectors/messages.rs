use heartline_core::UserMessage;
use heartline_storage::ClinicalRecord;
use heartline_tabular::build_table;

use super::{cell, text};

pub const HEADERS: [&str; 10] = [
    "id",
    "type",
    "title",
    "description",
    "action",
    "isDismissible",
    "creationDate",
    "dueDate",
    "completionDate",
    "reference",
];

/// Projects one message, resolving localized text for `language`.
pub fn project(record: &ClinicalRecord<UserMessage>, language: &str) -> [String; 10] {
    let message = &record.content;
    [
        record.id.clone(),
        message.message_type.clone(),
        message.title.localize(language).to_string(),
        text(
            message
                .description
                .as_ref()
                .map(|description| description.localize(language)),
        ),
        text(message.action.as_deref()),
        message.is_dismissible.to_string(),
        message.creation_date.to_string(),
        cell(message.due_date),
        cell(message.completion_date),
        text(message.reference.as_deref()),
    ]
}

pub fn render(records: &[ClinicalRecord<UserMessage>], language: &str) -> Vec<u8> {
    build_table(&HEADERS, records, |record| project(record, language))
}
