//! Loading records and configuration from disk.

use cinedex::{load_config, load_documents, FieldKind, FieldValue, SearchError};
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

fn json_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_movie_objects() {
    let file = json_file(
        r#"[
            {"id": 1, "name": "Parasite", "oscar": 2020, "genre": ["Comedy", "Drama"]},
            {"id": 2, "name": "Rocky", "oscar": 1977, "genre": ["Drama", "Sport"]}
        ]"#,
    );
    let records = load_documents(file.path(), false).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].id, Some(2));
    assert_eq!(records[1].fields.get("oscar"), Some(&FieldValue::Integer(1977)));
}

#[test]
fn test_auto_id_fills_missing_ids_only() {
    let file = json_file(r#"[{"name": "A"}, {"id": 10, "name": "B"}, {"name": "C"}]"#);
    let records = load_documents(file.path(), true).unwrap();
    let ids: Vec<Option<i64>> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![Some(1), Some(10), Some(3)]);
}

#[test]
fn test_malformed_files() {
    let not_json = json_file("{ nope");
    assert!(matches!(
        load_documents(not_json.path(), false),
        Err(SearchError::Load { .. })
    ));

    let not_array = json_file(r#"{"id": 1}"#);
    let err = load_documents(not_array.path(), false).unwrap_err();
    assert!(err.to_string().contains("expected a JSON array"));

    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(matches!(
        load_documents(&missing, false),
        Err(SearchError::Load { ref path, .. }) if *path == missing
    ));
}

#[test]
fn test_config_file() {
    let file = json_file(
        r#"{
            "schema": {"fields": [
                {"name": "title", "weight": 3.0, "required": true},
                {"name": "year", "kind": "integer"}
            ]},
            "engine": {"default_result_limit": 5, "prefix_length": 1}
        }"#,
    );
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.schema.fields.len(), 2);
    assert_eq!(config.schema.fields[1].kind, FieldKind::Integer);
    assert!(config.schema.fields[0].required);
    assert_eq!(config.engine.default_result_limit, 5);
    assert_eq!(config.engine.default_max_distance, 2);
}

#[test]
fn test_config_with_invalid_schema_rejected() {
    let file = json_file(r#"{"schema": {"fields": []}}"#);
    assert!(matches!(
        load_config(file.path()),
        Err(SearchError::IndexBuild(_))
    ));
}
