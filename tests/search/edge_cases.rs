//! Boundary conditions and rejected input.

use crate::common::{ids, movie_engine, scenario_engine};
use cinedex::{
    EngineConfig, Fuzziness, QueryError, QueryMode, QueryRequest, Schema, SearchEngine,
    SearchError,
};

#[test]
fn test_negative_max_distance_is_invalid_parameter() {
    let engine = scenario_engine();
    let err = engine.search_fuzzy("name", "parasit", -1, None).unwrap_err();
    assert!(matches!(err, SearchError::InvalidParameter { name: "max_distance", .. }));
}

#[test]
fn test_zero_limit_is_empty_not_error() {
    let engine = scenario_engine();
    assert!(engine.search_exact("name", "parasite", Some(0)).unwrap().is_empty());
    assert!(engine.search_fuzzy("name", "parasit", 2, Some(0)).unwrap().is_empty());
    assert!(engine.search_wildcard("name", "para*", Some(0)).unwrap().is_empty());
    assert!(engine.suggest("name", "para", Some(0)).unwrap().is_empty());
    assert!(engine.suggest_terms("name", "para", Some(0)).unwrap().is_empty());
}

#[test]
fn test_distance_zero_is_exact() {
    let engine = scenario_engine();
    assert_eq!(ids(&engine.search_fuzzy("name", "parasite", 0, None).unwrap()), vec![1]);
    assert!(engine.search_fuzzy("name", "parasit", 0, None).unwrap().is_empty());
}

#[test]
fn test_empty_and_punctuation_queries() {
    let engine = scenario_engine();
    assert!(engine.search_exact("name", "", None).unwrap().is_empty());
    assert!(engine.search_exact("name", " ... ", None).unwrap().is_empty());
    assert!(engine.suggest("name", "", None).unwrap().is_empty());
}

#[test]
fn test_no_match_is_empty() {
    let engine = scenario_engine();
    assert!(engine.search_exact("name", "casablanca", None).unwrap().is_empty());
    assert!(engine.search_wildcard("name", "casa*", None).unwrap().is_empty());
    assert!(engine.suggest_terms("name", "zz", None).unwrap().is_empty());
}

#[test]
fn test_empty_wildcard_pattern_fails_to_parse() {
    let engine = scenario_engine();
    let err = engine.search_wildcard("name", "", None).unwrap_err();
    assert!(matches!(err, SearchError::Query(QueryError::EmptyPattern)));
}

#[test]
fn test_unknown_and_malformed_fields() {
    let engine = scenario_engine();
    assert!(matches!(
        engine.search_exact("genre", "drama", None),
        Err(SearchError::Query(QueryError::UnknownField(_)))
    ));
    assert!(matches!(
        engine.search_exact("", "drama", None),
        Err(SearchError::Query(QueryError::MalformedField(_)))
    ));
    assert!(matches!(
        engine.suggest_terms("na/me", "pa", None),
        Err(SearchError::Query(QueryError::MalformedField(_)))
    ));
}

#[test]
fn test_unknown_mode() {
    assert!(matches!(
        QueryRequest::parse_mode("regex", "name", "x"),
        Err(SearchError::Query(QueryError::UnknownMode(_)))
    ));
    let request = QueryRequest::parse_mode("Wildcard", "name", "x*").unwrap();
    assert_eq!(request.mode, QueryMode::Wildcard);
}

#[test]
fn test_bad_fuzziness_string() {
    assert!(matches!(
        "two".parse::<Fuzziness>(),
        Err(SearchError::InvalidParameter { name: "fuzziness", .. })
    ));
}

#[test]
fn test_question_mark_needs_one_char() {
    let engine = scenario_engine();
    assert!(engine.search_wildcard("name", "parasite?", None).unwrap().is_empty());
    assert_eq!(ids(&engine.search_wildcard("name", "parasit?", None).unwrap()), vec![1]);
}

#[test]
fn test_diacritics_fold() {
    let engine = SearchEngine::with_documents(
        vec![cinedex::DocumentRecord::new(1).with_field("name", "Amélie")],
        Schema::movies(),
        EngineConfig::default(),
    )
    .unwrap();
    assert_eq!(ids(&engine.search_exact("name", "amelie", None).unwrap()), vec![1]);
    assert_eq!(ids(&engine.search_exact("name", "AMÉLIE", None).unwrap()), vec![1]);
}

#[test]
fn test_facets_unknown_field() {
    let engine = movie_engine();
    assert!(matches!(
        engine.facets("poster", 5),
        Err(SearchError::Query(QueryError::UnknownField(_)))
    ));
}
