//! Table building.

use crate::encoder::{ROW_DELIMITER, encode_row};

/// Builds a complete table: the header row followed by one row per record.
///
/// `project` returns exactly `N` cells, matching `headers`, so every row has
/// the header's width. Rows keep the order of `records`. Rows are separated
/// by `\n`; there is no trailing newline, and an empty `records` slice
/// yields the header line alone.
pub fn build_table<T, const N: usize>(
    headers: &[&str; N],
    records: &[T],
    project: impl Fn(&T) -> [String; N],
) -> Vec<u8> {
    let mut table = encode_row(headers);
    for record in records {
        table.push(ROW_DELIMITER);
        table.push_str(&encode_row(project(record)));
    }
    table.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Reading {
        id: &'static str,
        value: f64,
        note: Option<&'static str>,
    }

    fn project(reading: &Reading) -> [String; 3] {
        [
            reading.id.to_string(),
            reading.value.to_string(),
            reading.note.map(str::to_string).unwrap_or_default(),
        ]
    }

    #[test]
    fn test_header_only() {
        let table = build_table(&["id", "value", "note"], &[], project);
        assert_eq!(String::from_utf8(table).unwrap(), "id;value;note");
    }

    #[test]
    fn test_rows_in_record_order() {
        let readings = [
            Reading {
                id: "b",
                value: 72.5,
                note: Some("after walk; tired"),
            },
            Reading {
                id: "a",
                value: 80.0,
                note: None,
            },
        ];

        let table = build_table(&["id", "value", "note"], &readings, project);
        assert_eq!(
            String::from_utf8(table).unwrap(),
            "id;value;note\nb;72.5;\"after walk; tired\"\na;80;"
        );
    }
}
