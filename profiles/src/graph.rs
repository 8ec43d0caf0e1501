//! Network visualization payload.
//!
//! Shape returned by `GET /fetch_network/` and consumed by the network
//! graph page. Property bags stay schemaless (`serde_json::Map`); the
//! graph stores whatever the import wrote, and the viewer renders keys
//! generically.

#[cfg(test)]
#[path = "graph_test.rs"]
mod graph_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A node in the visualization payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    /// Primary label, with internal labels already filtered out server-side.
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// A relationship in the visualization payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphRelationship {
    pub start: String,
    pub end: String,
    #[serde(rename = "type")]
    pub rel_type: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// The full node/relationship set for the network view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkGraph {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub relationships: Vec<GraphRelationship>,
}

impl NetworkGraph {
    /// Drop every null-valued property from nodes and relationships.
    /// Absent keys render cleaner than explicit nulls in the viewer.
    pub fn remove_null_properties(&mut self) {
        for node in &mut self.nodes {
            node.properties.retain(|_, value| !value.is_null());
        }
        for rel in &mut self.relationships {
            rel.properties.retain(|_, value| !value.is_null());
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.relationships.is_empty()
    }
}
