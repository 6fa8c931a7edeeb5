//! Tests for result projections

use super::*;
use crate::page_info::{PageInfo, PagePosition};
use pretty_assertions::assert_eq;
use serde_json::json;

fn sample() -> (Vec<serde_json::Value>, PageInfo) {
    let data = vec![json!({"id": "1"}), json!({"id": "2"}), json!({"id": "3"})];
    let info = PageInfo {
        has_next_page: true,
        has_previous_page: false,
        total_count: 10,
        size_per_page: 3,
        current_item: 1,
        page: PagePosition { current: 1, of: 4 },
        first_cursor: Some("1".to_string()),
        last_cursor: Some("3".to_string()),
    };
    (data, info)
}

fn paginated(data: &[serde_json::Value], info: PageInfo) -> Paginated<'_, serde_json::Value> {
    let cursors = data
        .iter()
        .map(|r| r["id"].as_str().unwrap_or_default().to_string())
        .collect();
    Paginated::new(data, cursors, info)
}

#[test]
fn test_flat_projection() {
    let (data, info) = sample();
    let result = paginated(&data, info.clone());

    let flat = result.to_flat();
    assert_eq!(flat.data, &data[..]);
    assert_eq!(flat.page_info, info);
}

#[test]
fn test_node_projection_pairs_each_record_with_its_cursor() {
    let (data, info) = sample();
    let result = paginated(&data, info.clone());

    let nodes = result.to_nodes();
    assert_eq!(nodes.data.len(), 3);
    for (i, edge) in nodes.data.iter().enumerate() {
        assert_eq!(edge.node, &data[i]);
        assert_eq!(edge.cursor, data[i]["id"].as_str().unwrap());
    }
    assert_eq!(nodes.page_info, info);
}

#[test]
fn test_projections_are_idempotent() {
    let (data, info) = sample();
    let result = paginated(&data, info);

    assert_eq!(result.to_flat(), result.to_flat());
    assert_eq!(result.to_nodes(), result.to_nodes());
}

#[test]
fn test_empty_window_projects_empty() {
    let data: Vec<serde_json::Value> = vec![];
    let result = paginated(&data, PageInfo::default());

    assert!(result.is_empty());
    assert_eq!(result.len(), 0);
    assert!(result.to_flat().data.is_empty());
    assert!(result.to_nodes().data.is_empty());
}

#[test]
fn test_serialized_shape() {
    let (data, info) = sample();
    let result = paginated(&data, info);

    let flat = serde_json::to_value(result.to_flat()).unwrap();
    assert_eq!(flat["data"], json!([{"id": "1"}, {"id": "2"}, {"id": "3"}]));
    assert_eq!(flat["pageInfo"]["hasNextPage"], json!(true));

    let nodes = serde_json::to_value(result.to_nodes()).unwrap();
    assert_eq!(nodes["data"][0], json!({"node": {"id": "1"}, "cursor": "1"}));
    assert_eq!(nodes["pageInfo"], flat["pageInfo"]);
}
