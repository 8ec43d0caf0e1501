use super::*;

fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |var| {
        pairs
            .iter()
            .find(|(name, _)| *name == var)
            .map(|(_, value)| (*value).to_owned())
    }
}

// ===== config =====

#[test]
fn config_requires_password() {
    let err = GraphConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert!(matches!(err, GraphError::MissingConfig { var } if var == "NEO4J_PASSWORD"));
}

#[test]
fn config_applies_defaults() {
    let config = GraphConfig::from_lookup(lookup_from(&[("NEO4J_PASSWORD", "secret")])).unwrap();
    assert_eq!(config.url, "http://localhost:7474");
    assert_eq!(config.username, "neo4j");
    assert_eq!(config.database, "neo4j");
}

#[test]
fn config_honors_overrides() {
    let config = GraphConfig::from_lookup(lookup_from(&[
        ("NEO4J_PASSWORD", "secret"),
        ("NEO4J_URL", "http://graph:7474/"),
        ("NEO4J_USERNAME", "svc"),
        ("NEO4J_DATABASE", "careers"),
    ]))
    .unwrap();
    assert_eq!(config.url, "http://graph:7474/");
    assert_eq!(config.database, "careers");
}

// ===== commit url =====

#[test]
fn commit_url_joins_database() {
    assert_eq!(
        commit_url("http://localhost:7474", "neo4j"),
        "http://localhost:7474/db/neo4j/tx/commit"
    );
}

#[test]
fn commit_url_trims_trailing_slash() {
    assert_eq!(
        commit_url("http://graph:7474/", "careers"),
        "http://graph:7474/db/careers/tx/commit"
    );
}

// ===== response parsing =====

#[test]
fn parse_rows_keyed_by_column() {
    let body = serde_json::json!({
        "results": [{
            "columns": ["role", "score"],
            "data": [
                { "row": ["Nurse", 9.0], "meta": [null, null] },
                { "row": ["Engineer", 7.5], "meta": [null, null] }
            ]
        }],
        "errors": []
    })
    .to_string();
    let rows = parse_commit_response(&body).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["role"], "Nurse");
    assert_eq!(rows[1]["score"], 7.5);
}

#[test]
fn parse_surfaces_statement_error() {
    let body = serde_json::json!({
        "results": [],
        "errors": [{
            "code": "Neo.ClientError.Statement.SyntaxError",
            "message": "Invalid input"
        }]
    })
    .to_string();
    let err = parse_commit_response(&body).unwrap_err();
    match err {
        GraphError::Statement { code, message } => {
            assert_eq!(code, "Neo.ClientError.Statement.SyntaxError");
            assert_eq!(message, "Invalid input");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn parse_empty_results_yields_no_rows() {
    let body = serde_json::json!({ "results": [], "errors": [] }).to_string();
    assert!(parse_commit_response(&body).unwrap().is_empty());
}

#[test]
fn parse_rejects_non_json_body() {
    assert!(matches!(parse_commit_response("<html>"), Err(GraphError::Parse(_))));
}

#[test]
fn parse_rejects_entry_without_row() {
    let body = serde_json::json!({
        "results": [{ "columns": ["n"], "data": [{ "meta": [] }] }],
        "errors": []
    })
    .to_string();
    assert!(matches!(parse_commit_response(&body), Err(GraphError::Parse(_))));
}
