use super::*;

fn rows(values: serde_json::Value) -> Vec<Map<String, Value>> {
    values
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_object().unwrap().clone())
        .collect()
}

#[test]
fn strips_backticked_node_type() {
    assert_eq!(strip_node_type(":`JobProfile`"), "JobProfile");
    assert_eq!(strip_node_type(":Employer"), "Employer");
}

#[test]
fn groups_properties_per_label() {
    let nodes = rows(serde_json::json!([
        { "nodeType": ":`JobProfile`", "propertyName": "id", "propertyTypes": ["String"] },
        { "nodeType": ":`JobProfile`", "propertyName": "sector", "propertyTypes": ["String"] },
        { "nodeType": ":`Aptitude`", "propertyName": "attribute", "propertyTypes": ["String"] }
    ]));
    let lines = node_property_lines(&nodes);
    assert_eq!(lines, vec![
        "JobProfile {id: String, sector: String}".to_owned(),
        "Aptitude {attribute: String}".to_owned(),
    ]);
}

#[test]
fn renders_relationship_patterns() {
    let rels = rows(serde_json::json!([
        { "start": "JobProfile", "type": "EMPLOYED_BY", "end": "Employer" }
    ]));
    assert_eq!(relationship_lines(&rels), vec!["(:JobProfile)-[:EMPLOYED_BY]->(:Employer)".to_owned()]);
}

#[test]
fn render_schema_combines_sections() {
    let nodes = rows(serde_json::json!([
        { "nodeType": ":`JobProfile`", "propertyName": "jobRole", "propertyTypes": ["String"] }
    ]));
    let rels = rows(serde_json::json!([
        { "start": "JobProfile", "type": "HAS_APTITUDE", "end": "Aptitude" }
    ]));
    let schema = render_schema(&nodes, &rels);
    assert_eq!(
        schema,
        "Node properties:\nJobProfile {jobRole: String}\nRelationships:\n(:JobProfile)-[:HAS_APTITUDE]->(:Aptitude)"
    );
}

#[test]
fn malformed_rows_are_skipped() {
    let nodes = rows(serde_json::json!([{ "propertyName": "orphan" }]));
    assert!(node_property_lines(&nodes).is_empty());
    let rels = rows(serde_json::json!([{ "start": "A" }]));
    assert!(relationship_lines(&rels).is_empty());
}
