//! Integration tests for index construction and term lookup.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

use lexicon::prelude::*;

const SALES: [&str; 3] = [
    "new home sales top forecasts",
    "home sales rise in July",
    "increase in home sales in July",
];

#[test]
fn test_sales_corpus() {
    let index = build_from_texts(SALES);

    let home = index.get("home").unwrap();
    assert_eq!(home.document_frequency(), 3);
    assert_eq!(home.document_ids(), &[0, 1, 2]);

    let top = index.get("top").unwrap();
    assert_eq!(top.document_frequency(), 1);
    assert_eq!(top.document_ids(), &[0]);

    // "in" appears twice in the last document but is posted once.
    let in_entry = index.get("in").unwrap();
    assert_eq!(in_entry.document_ids(), &[1, 2]);

    assert_eq!(index.doc_count(), 3);
}

#[test]
fn test_sales_corpus_first_seen_order() {
    let index = build_from_texts(SALES);

    let terms: Vec<&str> = index.terms().collect();
    assert_eq!(
        terms,
        vec!["new", "home", "sales", "top", "forecasts", "rise", "in", "july", "increase"]
    );
}

#[test]
fn test_keyed_terms() {
    let mut docs = BTreeMap::new();
    docs.insert(1u32, vec!["1001", "1002"]);
    docs.insert(23u32, vec!["1001", "1003"]);

    let index = build_from_terms(docs);

    assert_eq!(index.len(), 3);
    assert_eq!(index.get("1001").unwrap().document_frequency(), 2);
    assert_eq!(index.get("1001").unwrap().document_ids(), &[1, 23]);
    assert_eq!(index.get("1002").unwrap().document_ids(), &[1]);
    assert_eq!(index.get("1003").unwrap().document_ids(), &[23]);
}

#[test]
fn test_keyed_terms_repeated_pairs_are_collapsed() {
    let index = build_from_terms(vec![
        ("a", vec!["x", "X", "x"]),
        ("b", vec!["x"]),
        ("a", vec!["x"]),
    ]);

    let x = index.get("x").unwrap();
    assert_eq!(x.document_frequency(), 2);
    assert_eq!(x.document_ids(), &["a", "b"]);
}

#[test]
fn test_find_is_case_insensitive() {
    let index = build_from_texts(SALES);

    assert_eq!(index.find("Sales"), index.find("sales"));
    assert_eq!(index.find("SALES").to_string(), "Found: sales in documents: [0, 1, 2]");
}

#[test]
fn test_find_missing_term() {
    let index = build_from_texts(SALES);

    let result = index.find("prices");
    assert!(!result.is_found());
    assert_eq!(result.document_frequency(), 0);
    assert!(result.document_ids().is_empty());
    assert_eq!(result.to_string(), "Not Found: prices");
}

#[test]
fn test_empty_index() {
    let index = build_from_texts(Vec::<String>::new());

    assert!(index.is_empty());
    assert!(!index.find("home").is_found());
    assert!(!index.find("").is_found());
    assert_eq!(index.iter().count(), 0);
}

#[test]
fn test_blank_documents_still_take_an_id() {
    let index = build_from_texts(["   ", "", "home"]);

    assert_eq!(index.doc_count(), 3);
    assert_eq!(index.find("home").document_ids(), &[2]);
}

#[test]
fn test_builder_with_config() -> Result<()> {
    let config = IndexConfig::from_json_str(r#"{ "expected_terms": 16 }"#)?;
    let mut builder = IndexBuilder::with_config(config)?;

    assert_eq!(builder.add_text("home sales"), 0);
    assert_eq!(builder.add_text("home"), 1);

    let index = builder.finish();
    assert_eq!(
        index.stats(),
        IndexStats {
            doc_count: 2,
            term_count: 2,
            posting_count: 3,
        }
    );

    Ok(())
}

#[test]
fn test_shared_index_readers() -> Result<()> {
    let shared = Arc::new(SharedIndex::new());
    shared.publish(build_from_texts(SALES))?;

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let index = shared.get().unwrap();
                index.find("July").document_frequency()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }

    assert!(shared.publish(InvertedIndex::empty()).is_err());

    Ok(())
}

#[test]
fn test_searcher_find_text() {
    let searcher = IndexSearcher::new(build_from_texts(SALES));

    let results = searcher.find_text("July july PRICES");
    let rendered: Vec<String> = results.iter().map(ToString::to_string).collect();

    assert_eq!(
        rendered,
        vec!["Found: july in documents: [1, 2]", "Not Found: prices"]
    );
}
