use super::*;
use crate::parsers::parse;

fn depths(src: &str) -> Vec<(String, usize)> {
    let graph = NodeGraph::from_program(&parse(src).unwrap()).unwrap();
    let childs = graph.child_lists();
    let depth = assign_depths(&graph, &childs);
    let mut out: Vec<(String, usize)> = graph
        .digraph
        .node_indices()
        .map(|n| (graph.data(n).label.clone(), depth[n.index()]))
        .collect();
    out.sort();
    out
}

fn depth_of(src: &str, label: &str) -> usize {
    depths(src)
        .into_iter()
        .find(|(l, _)| l == label)
        .map(|(_, d)| d)
        .unwrap()
}

#[test]
fn test_single_node_depth_zero() {
    assert_eq!(depths("x"), vec![("x".to_string(), 0)]);
}

#[test]
fn test_siblings_share_depth() {
    assert_eq!(
        depths("(f a b)"),
        vec![
            ("a".to_string(), 1),
            ("b".to_string(), 1),
            ("f".to_string(), 0)
        ]
    );
}

#[test]
fn test_shared_node_takes_longest_path() {
    let src = "(define a 1)(f a (g a))";
    assert_eq!(depth_of(src, "f"), 0);
    assert_eq!(depth_of(src, "g"), 1);
    assert_eq!(depth_of(src, "a"), 2);
    assert_eq!(depth_of(src, "1"), 3);
}

#[test]
fn test_longest_path_independent_of_argument_order() {
    assert_eq!(depth_of("(define a z)(f (g (h a)) a)", "a"), 3);
    assert_eq!(depth_of("(define a z)(f a (g (h a)))", "a"), 3);
    assert_eq!(depth_of("(define a z)(f a (g (h a)))", "z"), 4);
}

#[test]
fn test_deep_chain() {
    let n = 200;
    let src = format!("{}x{}", "(f ".repeat(n), ")".repeat(n));
    assert_eq!(depth_of(&src, "x"), n);
}
