use heartline_core::Appointment;
use heartline_storage::ClinicalRecord;
use heartline_tabular::build_table;

use super::{cell, text};

pub const HEADERS: [&str; 8] = [
    "id",
    "status",
    "created",
    "start",
    "end",
    "comment",
    "patientInstruction",
    "participants",
];

pub fn project(record: &ClinicalRecord<Appointment>) -> [String; 8] {
    let appointment = &record.content;
    [
        record.id.clone(),
        appointment.status.clone(),
        cell(appointment.created),
        appointment.start.to_string(),
        appointment.end.to_string(),
        text(appointment.comment.as_deref()),
        text(appointment.patient_instruction.as_deref()),
        appointment
            .participant_references()
            .collect::<Vec<_>>()
            .join("|"),
    ]
}

pub fn render(records: &[ClinicalRecord<Appointment>]) -> Vec<u8> {
    build_table(&HEADERS, records, project)
}
