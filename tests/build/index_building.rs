//! Snapshot construction and its rejections.

use cinedex::{
    DocId, DocumentRecord, FieldConfig, IndexBuildError, Schema, Snapshot,
};

fn schema() -> Schema {
    Schema::new(vec![
        FieldConfig::text("name").required(),
        FieldConfig::keyword("rating"),
        FieldConfig::integer("oscar"),
    ])
}

#[test]
fn test_build_counts() {
    let records = vec![
        DocumentRecord::new(1)
            .with_field("name", "The Godfather Part II")
            .with_field("rating", "R")
            .with_field("oscar", 1975_i64),
        DocumentRecord::new(2)
            .with_field("name", "The Godfather")
            .with_field("rating", "R")
            .with_field("oscar", 1973_i64),
    ];
    let snap = Snapshot::build(records, schema()).unwrap();
    let stats = snap.info().stats;
    assert_eq!(stats.documents, 2);

    let name = stats.fields.iter().find(|f| f.name == "name").unwrap();
    // the, godfather, part, ii
    assert_eq!(name.terms, 4);
    assert_eq!(name.postings, 6);

    let rating = stats.fields.iter().find(|f| f.name == "rating").unwrap();
    assert_eq!(rating.terms, 1);
    assert_eq!(snap.index().doc_freq("rating", "r"), 2);
    assert_eq!(snap.index().lookup_exact("oscar", "1973")[0].doc_id, DocId(2));
}

#[test]
fn test_undeclared_fields_stored_not_indexed() {
    let records = vec![DocumentRecord::new(1)
        .with_field("name", "Rocky")
        .with_field("poster", "rocky.jpg")];
    let snap = Snapshot::build(records, schema()).unwrap();
    assert!(!snap.index().has_field("poster"));
    assert!(snap.store().get(DocId(1)).unwrap().field("poster").is_some());
}

#[test]
fn test_build_rejections() {
    let missing_id = vec![DocumentRecord::default().with_field("name", "X")];
    assert_eq!(
        Snapshot::build(missing_id, schema()).unwrap_err(),
        IndexBuildError::MissingId { position: 0 }
    );

    let missing_name = vec![DocumentRecord::new(3).with_field("rating", "R")];
    assert_eq!(
        Snapshot::build(missing_name, schema()).unwrap_err(),
        IndexBuildError::MissingField {
            id: DocId(3),
            field: "name".to_string()
        }
    );

    let duplicate = vec![
        DocumentRecord::new(5).with_field("name", "A"),
        DocumentRecord::new(5).with_field("name", "B"),
    ];
    assert_eq!(
        Snapshot::build(duplicate, schema()).unwrap_err(),
        IndexBuildError::DuplicateId { id: DocId(5) }
    );

    assert_eq!(
        Snapshot::build(vec![], Schema::new(vec![])).unwrap_err(),
        IndexBuildError::EmptySchema
    );
}

#[test]
fn test_empty_input_builds_empty_snapshot() {
    let snap = Snapshot::build(vec![], schema()).unwrap();
    assert_eq!(snap.store().len(), 0);
    assert_eq!(snap.index().total_docs(), 0);
    assert_eq!(snap.fingerprint(), Snapshot::empty(schema()).fingerprint());
}
