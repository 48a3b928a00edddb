//! Ranking: weights, term frequency, distance penalty, tie-breaking.

use crate::common::{assert_ranked, ids, movie_engine};
use cinedex::{
    DocumentRecord, EngineConfig, FieldConfig, Fuzziness, QueryRequest, Schema, SearchEngine,
};

#[test]
fn test_name_weight_outranks_summary() {
    let schema = Schema::new(vec![
        FieldConfig::text("name").weight(2.0),
        FieldConfig::text("summary"),
    ]);
    let records = vec![
        DocumentRecord::new(1).with_field("summary", "a film about a gladiator"),
        DocumentRecord::new(2).with_field("name", "Gladiator"),
    ];
    let engine = SearchEngine::with_documents(records, schema, EngineConfig::default()).unwrap();
    let hits = engine.search_exact("*", "gladiator", None).unwrap();
    assert_eq!(ids(&hits), vec![2, 1]);
    assert_eq!(hits[0].score, 2.0);
    assert_eq!(hits[1].score, 1.0);
}

#[test]
fn test_term_frequency_accumulates() {
    let schema = Schema::new(vec![FieldConfig::text("summary")]);
    let records = vec![
        DocumentRecord::new(1).with_field("summary", "war"),
        DocumentRecord::new(2).with_field("summary", "war and more war"),
    ];
    let engine = SearchEngine::with_documents(records, schema, EngineConfig::default()).unwrap();
    let hits = engine.search_exact("summary", "war", None).unwrap();
    assert_eq!(ids(&hits), vec![2, 1]);
}

#[test]
fn test_ties_break_by_id() {
    let schema = Schema::new(vec![FieldConfig::text("name")]);
    let records = vec![
        DocumentRecord::new(30).with_field("name", "Rocky"),
        DocumentRecord::new(10).with_field("name", "Rocky II"),
        DocumentRecord::new(20).with_field("name", "Rocky III"),
    ];
    let engine = SearchEngine::with_documents(records, schema, EngineConfig::default()).unwrap();
    let hits = engine.search_exact("name", "rocky", None).unwrap();
    assert_eq!(ids(&hits), vec![10, 20, 30]);
}

#[test]
fn test_multi_field_search_over_movies() {
    let engine = movie_engine();
    let hits = engine.search_exact("*", "drama", None).unwrap();
    assert_eq!(ids(&hits), vec![1, 2, 3]);
    assert_ranked(&hits);

    // Directors are searchable word by word
    let hits = engine.search_exact("directors", "scott", None).unwrap();
    assert_eq!(ids(&hits), vec![4]);
}

#[test]
fn test_fuzzy_auto_over_movies() {
    let engine = movie_engine();
    let request = QueryRequest::fuzzy("name", "gladiatr").with_fuzziness(Fuzziness::Auto);
    let hits = engine.execute(&request).unwrap();
    assert_eq!(ids(&hits), vec![4]);

    // Two-letter terms get no edits under AUTO
    let request = QueryRequest::fuzzy("name", "of").with_fuzziness(Fuzziness::Auto);
    assert_eq!(ids(&engine.execute(&request).unwrap()), vec![3]);
}

#[test]
fn test_keyword_field_matches_whole_value() {
    let engine = movie_engine();
    assert_eq!(ids(&engine.search_exact("rating", "pg-13", None).unwrap()), vec![2]);
    assert_eq!(ids(&engine.search_exact("rating", "pg", None).unwrap()), vec![5]);
    assert_eq!(ids(&engine.search_wildcard("rating", "pg*", None).unwrap()), vec![2, 5]);
}

#[test]
fn test_limit_truncates_after_ranking() {
    let engine = movie_engine();
    let all = engine.search_wildcard("*", "*a*", None).unwrap();
    let top = engine.search_wildcard("*", "*a*", Some(2)).unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(ids(&top), ids(&all)[..2].to_vec());
}
