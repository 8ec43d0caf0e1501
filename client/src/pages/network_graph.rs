//! Network Graph page. Fetches `/fetch_network/` on mount and renders the
//! node/relationship set as a circular SVG layout with a summary line.

#[cfg(test)]
#[path = "network_graph_test.rs"]
mod network_graph_test;

use leptos::prelude::*;

use profiles::{GraphNode, NetworkGraph};

use crate::net::api;

const VIEW_WIDTH: f64 = 900.0;
const VIEW_HEIGHT: f64 = 640.0;
const LAYOUT_MARGIN: f64 = 60.0;

const LOAD_ERROR_MESSAGE: &str = "Failed to load the network graph.";

/// Categorical palette; a tag always maps to the same entry.
const TAG_COLORS: [&str; 8] = [
    "#4dabf7", "#69db7c", "#ffa94d", "#e599f7", "#ff8787", "#63e6be", "#ffd43b", "#a5d8ff",
];

#[component]
pub fn NetworkGraphPage() -> impl IntoView {
    let graph = RwSignal::new(None::<Result<NetworkGraph, String>>);

    let loaded = RwSignal::new(false);
    Effect::new(move || {
        if loaded.get() {
            return;
        }
        loaded.set(true);
        leptos::task::spawn_local(async move {
            graph.set(Some(api::fetch_network().await));
        });
    });

    view! {
        <div class="page">
            <div class="card card--wide">
                <h2 class="card__title">"Knowledge Graph Network"</h2>
                {move || match graph.get() {
                    None => view! { <p class="network__status">"Loading network..."</p> }.into_any(),
                    Some(Err(_)) => {
                        view! { <p class="network__status network__status--error">{LOAD_ERROR_MESSAGE}</p> }
                            .into_any()
                    }
                    Some(Ok(network)) if network.is_empty() => {
                        view! {
                            <p class="network__status">
                                "The graph is empty. Run the article import first."
                            </p>
                        }
                            .into_any()
                    }
                    Some(Ok(network)) => render_network(&network).into_any(),
                }}
            </div>
        </div>
    }
}

fn render_network(network: &NetworkGraph) -> impl IntoView {
    let positions = circle_positions(
        network.nodes.len(),
        VIEW_WIDTH / 2.0,
        VIEW_HEIGHT / 2.0,
        (VIEW_HEIGHT / 2.0) - LAYOUT_MARGIN,
    );

    let edges = network
        .relationships
        .iter()
        .filter_map(|rel| {
            let (x1, y1) = position_of(&network.nodes, &positions, &rel.start)?;
            let (x2, y2) = position_of(&network.nodes, &positions, &rel.end)?;
            let rel_type = rel.rel_type.clone();
            Some(view! {
                <line class="network__edge" x1=x1 y1=y1 x2=x2 y2=y2>
                    <title>{rel_type}</title>
                </line>
            })
        })
        .collect::<Vec<_>>();

    let nodes = network
        .nodes
        .iter()
        .zip(&positions)
        .map(|(node, position)| {
            let (x, y) = *position;
            let label_y = y + 24.0;
            let label = node_label(node);
            let color = tag_color(node.tag.as_deref());
            let tag = node.tag.clone().unwrap_or_default();
            view! {
                <g class="network__node">
                    <circle cx=x cy=y r="10" fill=color>
                        <title>{tag}</title>
                    </circle>
                    <text x=x y=label_y text-anchor="middle" class="network__label">
                        {label}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    let summary = format!(
        "{} nodes, {} relationships",
        network.nodes.len(),
        network.relationships.len()
    );

    view! {
        <div class="network">
            <p class="network__summary">{summary}</p>
            <svg
                class="network__canvas"
                viewBox={format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")}
                role="img"
                aria-label="Knowledge graph network"
            >
                {edges}
                {nodes}
            </svg>
        </div>
    }
}

/// Evenly spaced positions on a circle, starting at twelve o'clock.
fn circle_positions(count: usize, cx: f64, cy: f64, radius: f64) -> Vec<(f64, f64)> {
    (0..count)
        .map(|i| {
            let angle = (i as f64 / count.max(1) as f64) * std::f64::consts::TAU
                - std::f64::consts::FRAC_PI_2;
            (cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect()
}

/// Position of the node with the given id, if it is in the payload.
fn position_of(
    nodes: &[GraphNode],
    positions: &[(f64, f64)],
    id: &str,
) -> Option<(f64, f64)> {
    let index = nodes.iter().position(|node| node.id == id)?;
    positions.get(index).copied()
}

/// Human label for a node: the most descriptive property, falling back to
/// a shortened id.
fn node_label(node: &GraphNode) -> String {
    const LABEL_KEYS: [&str; 8] =
        ["jobRole", "name", "attribute", "title", "reason", "heading", "option", "value"];
    for key in LABEL_KEYS {
        if let Some(value) = node.properties.get(key).and_then(|v| v.as_str()) {
            return truncate_label(value);
        }
    }
    truncate_label(&node.id)
}

fn truncate_label(value: &str) -> String {
    const MAX_CHARS: usize = 24;
    if value.chars().count() <= MAX_CHARS {
        return value.to_owned();
    }
    let head: String = value.chars().take(MAX_CHARS - 1).collect();
    format!("{head}…")
}

/// Stable palette assignment per tag; untagged nodes share the last entry.
fn tag_color(tag: Option<&str>) -> &'static str {
    match tag {
        None => TAG_COLORS[TAG_COLORS.len() - 1],
        Some(tag) => {
            let hash: usize = tag.bytes().map(usize::from).sum();
            TAG_COLORS[hash % TAG_COLORS.len()]
        }
    }
}
