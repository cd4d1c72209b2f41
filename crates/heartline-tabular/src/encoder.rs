//! Cell and row encoding.

use std::borrow::Cow;

/// Separator between cells of one row.
pub const FIELD_DELIMITER: char = ';';

/// Separator between rows.
pub const ROW_DELIMITER: char = '\n';

/// Leading characters a spreadsheet would evaluate as a formula.
const FORMULA_PREFIXES: [char; 4] = ['=', '+', '-', '@'];

/// Characters that force a cell to be quoted.
const QUOTE_TRIGGERS: [char; 4] = [FIELD_DELIMITER, '\n', '\r', '"'];

/// Escapes one cell.
///
/// A value starting with `=`, `+`, `-` or `@` gets a leading apostrophe. The
/// result is then wrapped in double quotes (internal quotes doubled) if it
/// contains the delimiter, a line break or a double quote.
pub fn encode_field(raw: &str) -> Cow<'_, str> {
    let guarded: Cow<'_, str> = if raw.starts_with(FORMULA_PREFIXES) {
        Cow::Owned(format!("'{raw}"))
    } else {
        Cow::Borrowed(raw)
    };

    if guarded.contains(QUOTE_TRIGGERS) {
        Cow::Owned(format!("\"{}\"", guarded.replace('"', "\"\"")))
    } else {
        guarded
    }
}

/// Encodes every cell and joins them with [`FIELD_DELIMITER`].
pub fn encode_row<I, S>(cells: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    for (index, cell) in cells.into_iter().enumerate() {
        if index > 0 {
            line.push(FIELD_DELIMITER);
        }
        line.push_str(&encode_field(cell.as_ref()));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value_is_borrowed() {
        assert!(matches!(encode_field("hello"), Cow::Borrowed("hello")));
        assert_eq!(encode_field(""), "");
        assert_eq!(encode_field("a,b"), "a,b");
    }

    #[test]
    fn test_formula_injection_guard() {
        assert_eq!(encode_field("=SUM(A1)"), "'=SUM(A1)");
        assert_eq!(encode_field("+1"), "'+1");
        assert_eq!(encode_field("-5"), "'-5");
        assert_eq!(encode_field("@cmd"), "'@cmd");
        assert_eq!(encode_field("a=b"), "a=b");
    }

    #[test]
    fn test_quoting() {
        assert_eq!(encode_field("a;b"), "\"a;b\"");
        assert_eq!(encode_field("a\"b"), "\"a\"\"b\"");
        assert_eq!(encode_field("line1\nline2"), "\"line1\nline2\"");
        assert_eq!(encode_field("cr\rhere"), "\"cr\rhere\"");
    }

    #[test]
    fn test_guard_then_quote() {
        assert_eq!(encode_field("=A1;B1"), "\"'=A1;B1\"");
        assert_eq!(encode_field("-\"x\""), "\"'-\"\"x\"\"\"");
    }

    #[test]
    fn test_encode_row() {
        assert_eq!(encode_row(["id", "value", "unit"]), "id;value;unit");
        assert_eq!(
            encode_row(vec!["1".to_string(), "a;b".to_string(), String::new()]),
            "1;\"a;b\";"
        );
        assert_eq!(encode_row(Vec::<String>::new()), "");
    }
}
