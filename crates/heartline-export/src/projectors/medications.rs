use heartline_core::MedicationRequest;
use heartline_storage::ClinicalRecord;
use heartline_tabular::build_table;

use super::{cell, text};

pub const HEADERS: [&str; 6] = [
    "id",
    "medicationCode",
    "drugCode",
    "doseValue",
    "doseUnit",
    "frequencyPerDay",
];

pub fn project(record: &ClinicalRecord<MedicationRequest>) -> [String; 6] {
    let request = &record.content;
    let dose = request.dose_quantity();
    [
        record.id.clone(),
        text(request.medication_code()),
        text(request.drug_code()),
        cell(dose.and_then(|dose| dose.value)),
        text(dose.and_then(|dose| dose.unit.as_deref())),
        cell(request.frequency()),
    ]
}

pub fn render(records: &[ClinicalRecord<MedicationRequest>]) -> Vec<u8> {
    build_table(&HEADERS, records, project)
}
