use super::*;

#[test]
fn index_statements_are_idempotent() {
    for statement in INDEX_STATEMENTS {
        assert!(statement.contains("IF NOT EXISTS"), "not idempotent: {statement}");
    }
}

#[test]
fn index_statements_cover_declared_names() {
    let ddl = INDEX_STATEMENTS.join("\n");
    assert!(ddl.contains(VECTOR_INDEX_NAME));
    assert!(ddl.contains(FULLTEXT_INDEX_NAME));
    assert!(ddl.contains(&VECTOR_DIMENSIONS.to_string()));
}

#[test]
fn import_merges_on_natural_keys() {
    assert!(IMPORT_ARTICLES.contains("MERGE (j:JobProfile {id: row.id})"));
    assert!(IMPORT_ARTICLES.contains("MERGE (c:Chunk {id: chunk.index})"));
    assert!(IMPORT_ARTICLES.contains("setNodeVectorProperty(c, 'embedding', chunk.embedding)"));
}

#[test]
fn import_references_only_row_parameters() {
    // Single top-level parameter keeps the whole export in one statement.
    assert!(IMPORT_ARTICLES.contains("UNWIND $data AS row"));
    assert_eq!(IMPORT_ARTICLES.matches('$').count(), 1);
}

#[test]
fn network_query_excludes_chunks() {
    assert!(FETCH_NETWORK.contains("NOT end:Chunk"));
    assert!(FETCH_NETWORK.contains("RETURN {nodes:"));
}

#[test]
fn search_queries_bind_expected_parameters() {
    for param in ["$index", "$k", "$embedding"] {
        assert!(VECTOR_SEARCH.contains(param));
    }
    for param in ["$index", "$query", "$k"] {
        assert!(FULLTEXT_SEARCH.contains(param));
    }
}
