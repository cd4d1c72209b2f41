//! Table and archive properties checked through independent readers.

use std::io::{Cursor, Read};

use futures_util::future::try_join_all;
use heartline_tabular::{ArchiveError, build_table, with_archive};
use zip::ZipArchive;

fn parse(table: &[u8]) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_reader(table);
    reader
        .records()
        .map(|record| record.unwrap().iter().map(str::to_string).collect())
        .collect()
}

#[derive(Clone)]
struct Note {
    id: String,
    title: String,
    body: String,
}

fn note(id: &str, title: &str, body: &str) -> Note {
    Note {
        id: id.to_string(),
        title: title.to_string(),
        body: body.to_string(),
    }
}

fn project(note: &Note) -> [String; 3] {
    [note.id.clone(), note.title.clone(), note.body.clone()]
}

#[test]
fn rows_reconstruct_original_cells() {
    let notes = vec![
        note("n1", "Daily check", "Felt fine"),
        note("n2", "Swelling; ankles", "Left \"worse\" than right"),
        note("n3", "Multi\nline", "cr\r\nlf"),
        note("n4", "", "comma, separated"),
    ];

    let rows = parse(&build_table(&["id", "title", "body"], &notes, project));

    assert_eq!(rows.len(), notes.len() + 1);
    assert_eq!(rows[0], vec!["id", "title", "body"]);
    for (row, note) in rows[1..].iter().zip(&notes) {
        assert_eq!(row, &vec![note.id.clone(), note.title.clone(), note.body.clone()]);
    }
}

#[test]
fn every_row_has_header_width() {
    let notes: Vec<Note> = (0..50)
        .map(|i| note(&format!("n{i}"), &"x;".repeat(i % 4), ""))
        .collect();

    let rows = parse(&build_table(&["id", "title", "body"], &notes, project));
    assert!(rows.iter().all(|row| row.len() == 3));
}

#[test]
fn formula_prefixes_are_neutralized() {
    let notes = vec![
        note("n1", "=HYPERLINK(\"x\")", "+1"),
        note("n2", "-2", "@SUM(A1:A2)"),
    ];

    let rows = parse(&build_table(&["id", "title", "body"], &notes, project));
    assert_eq!(rows[1], vec!["n1", "'=HYPERLINK(\"x\")", "'+1"]);
    assert_eq!(rows[2], vec!["n2", "'-2", "'@SUM(A1:A2)"]);
}

#[test]
fn empty_records_yield_header_only() {
    let table = build_table(&["id", "title", "body"], &[] as &[Note], project);
    assert_eq!(table, b"id;title;body");
}

#[tokio::test]
async fn concurrent_appends_keep_every_entry() {
    let bytes = with_archive(|sink| async move {
        let appends = (0..20).map(|i| {
            let sink = sink.clone();
            async move {
                let table = build_table(&["id"], &[format!("row{i}")], |id| [id.clone()]);
                sink.append_entry(&table, &format!("u{i}/rows.csv")).await
            }
        });
        try_join_all(appends).await?;
        Ok::<_, ArchiveError>(())
    })
    .await
    .unwrap();

    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    assert_eq!(archive.len(), 20);

    let mut content = String::new();
    archive
        .by_name("u7/rows.csv")
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    assert_eq!(content, "id\nrow7");
}
