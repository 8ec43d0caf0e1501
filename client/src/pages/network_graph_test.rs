use super::*;

fn node(id: &str, tag: Option<&str>, props: serde_json::Value) -> GraphNode {
    GraphNode {
        id: id.to_owned(),
        tag: tag.map(str::to_owned),
        properties: props.as_object().cloned().unwrap_or_default(),
    }
}

// ===== layout =====

#[test]
fn circle_positions_returns_one_position_per_node() {
    assert_eq!(circle_positions(0, 100.0, 100.0, 50.0).len(), 0);
    assert_eq!(circle_positions(7, 100.0, 100.0, 50.0).len(), 7);
}

#[test]
fn circle_positions_stay_on_the_radius() {
    let positions = circle_positions(12, 450.0, 320.0, 260.0);
    for (x, y) in positions {
        let distance = ((x - 450.0).powi(2) + (y - 320.0).powi(2)).sqrt();
        assert!((distance - 260.0).abs() < 1e-9);
    }
}

#[test]
fn first_position_is_at_twelve_o_clock() {
    let positions = circle_positions(4, 0.0, 0.0, 10.0);
    let (x, y) = positions[0];
    assert!(x.abs() < 1e-9);
    assert!((y + 10.0).abs() < 1e-9);
}

#[test]
fn position_of_resolves_ids_and_rejects_strangers() {
    let nodes = vec![node("a", None, serde_json::json!({})), node("b", None, serde_json::json!({}))];
    let positions = circle_positions(nodes.len(), 0.0, 0.0, 10.0);
    assert_eq!(position_of(&nodes, &positions, "b"), Some(positions[1]));
    assert_eq!(position_of(&nodes, &positions, "zzz"), None);
}

// ===== labels =====

#[test]
fn node_label_prefers_descriptive_properties() {
    let n = node("abc123", Some("JobProfile"), serde_json::json!({ "jobRole": "Nurse" }));
    assert_eq!(node_label(&n), "Nurse");

    let n = node("Apollo", Some("Employer"), serde_json::json!({ "name": "Apollo" }));
    assert_eq!(node_label(&n), "Apollo");
}

#[test]
fn node_label_falls_back_to_id() {
    let n = node("66d1c7f2", Some("JobProfile"), serde_json::json!({}));
    assert_eq!(node_label(&n), "66d1c7f2");
}

#[test]
fn long_labels_are_truncated_with_ellipsis() {
    let n = node(
        "x",
        None,
        serde_json::json!({ "name": "A very long employer name that keeps going" }),
    );
    let label = node_label(&n);
    assert!(label.chars().count() <= 24);
    assert!(label.ends_with('…'));
}

// ===== colors =====

#[test]
fn tag_color_is_deterministic() {
    assert_eq!(tag_color(Some("JobProfile")), tag_color(Some("JobProfile")));
    assert_eq!(tag_color(None), tag_color(None));
}

#[test]
fn tag_color_always_comes_from_the_palette() {
    for tag in ["JobProfile", "Employer", "Aptitude", "Value", "CareerPathway"] {
        assert!(TAG_COLORS.contains(&tag_color(Some(tag))));
    }
}
