use super::*;
use crate::layout::full_layout;
use crate::parsers::parse;

fn layout(src: &str) -> Layout {
    full_layout(&parse(src).unwrap()).unwrap()
}

#[test]
fn test_json_shape() {
    let out = JsonRenderer::new().render(&layout("(define x 1)(+ x x)"));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["root"], 0);
    let nodes = value["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[0]["label"], "+");
    assert_eq!(nodes[0]["kind"], "call");
    assert_eq!(nodes[0]["childs"], serde_json::json!([1, 1]));
    assert_eq!(nodes[0]["belows"], serde_json::json!([1]));
    assert_eq!(nodes[1]["label"], "x");
    assert_eq!(nodes[1]["kind"], "variable");
    assert_eq!(nodes[1]["depth"], 1);
    assert_eq!(nodes[2]["kind"], "number");
    assert_eq!(nodes[2]["offset"], 0.0);
}

#[test]
fn test_compact_is_single_line() {
    let out = JsonRenderer::compact().render(&layout("(f a b)"));
    assert_eq!(out.lines().count(), 1);
    assert!(out.contains(r#""offset":-0.5"#));
}

#[test]
fn test_pretty_ends_with_newline() {
    let out = JsonRenderer::default().render(&layout("x"));
    assert!(out.ends_with("}\n"));
}
