//! Graph schema introspection for the Cypher-generation prompt.
//!
//! Renders the live node properties and relationship patterns into the text
//! block the generation prompt expects. Node properties come from
//! `db.schema.nodeTypeProperties()`; relationship patterns from a distinct
//! scan of connected label pairs.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use std::fmt::Write;

use serde_json::{Map, Value, json};

use super::client::{GraphClient, GraphError};

const NODE_PROPERTIES_QUERY: &str = "CALL db.schema.nodeTypeProperties() \
     YIELD nodeType, propertyName, propertyTypes \
     RETURN nodeType, propertyName, propertyTypes";

const RELATIONSHIP_PATTERNS_QUERY: &str = "MATCH (a)-[r]->(b) \
     UNWIND labels(a) AS start UNWIND labels(b) AS end \
     RETURN DISTINCT start, type(r) AS type, end";

/// Fetch and render the schema description used in prompts.
///
/// # Errors
///
/// Returns a [`GraphError`] if either introspection query fails.
pub async fn fetch_schema(graph: &GraphClient) -> Result<String, GraphError> {
    let nodes = graph.run(NODE_PROPERTIES_QUERY, json!({})).await?;
    let relationships = graph.run(RELATIONSHIP_PATTERNS_QUERY, json!({})).await?;
    Ok(render_schema(&nodes, &relationships))
}

/// Render introspection rows into the prompt's schema block.
#[must_use]
pub fn render_schema(nodes: &[Map<String, Value>], relationships: &[Map<String, Value>]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Node properties:");
    for line in node_property_lines(nodes) {
        let _ = writeln!(out, "{line}");
    }
    let _ = writeln!(out, "Relationships:");
    for line in relationship_lines(relationships) {
        let _ = writeln!(out, "{line}");
    }
    while out.ends_with('\n') {
        out.pop();
    }
    out
}

/// Group `nodeTypeProperties` rows into one `Label {prop: Type, ...}` line
/// per label, preserving first-seen order.
fn node_property_lines(rows: &[Map<String, Value>]) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    let mut properties: Vec<Vec<String>> = Vec::new();

    for row in rows {
        let Some(label) = row.get("nodeType").and_then(Value::as_str).map(strip_node_type) else {
            continue;
        };
        let index = match order.iter().position(|l| *l == label) {
            Some(index) => index,
            None => {
                order.push(label.clone());
                properties.push(Vec::new());
                order.len() - 1
            }
        };
        if let Some(name) = row.get("propertyName").and_then(Value::as_str) {
            let prop_type = row
                .get("propertyTypes")
                .and_then(Value::as_array)
                .and_then(|types| types.first())
                .and_then(Value::as_str)
                .unwrap_or("Any");
            properties[index].push(format!("{name}: {prop_type}"));
        }
    }

    order
        .into_iter()
        .zip(properties)
        .map(|(label, props)| format!("{label} {{{}}}", props.join(", ")))
        .collect()
}

/// Render distinct `(start)-[type]->(end)` rows as schema patterns.
fn relationship_lines(rows: &[Map<String, Value>]) -> Vec<String> {
    rows.iter()
        .filter_map(|row| {
            let start = row.get("start")?.as_str()?;
            let rel_type = row.get("type")?.as_str()?;
            let end = row.get("end")?.as_str()?;
            Some(format!("(:{start})-[:{rel_type}]->(:{end})"))
        })
        .collect()
}

/// `db.schema.nodeTypeProperties` reports labels as `` :`Label` ``.
fn strip_node_type(node_type: &str) -> String {
    node_type.trim_start_matches(':').replace('`', "")
}
