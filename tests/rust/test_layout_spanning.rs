use super::*;
use crate::layout::depth::assign_depths;
use crate::layout::graph::NodeGraph;
use crate::parsers::parse;

/// (labels by index, childs, belows, root)
fn select(src: &str) -> (Vec<String>, Vec<Vec<usize>>, Vec<Vec<usize>>, usize) {
    let graph = NodeGraph::from_program(&parse(src).unwrap()).unwrap();
    let childs = graph.child_lists();
    let depth = assign_depths(&graph, &childs);
    let root = graph.root.index();
    let belows = select_belows(root, &childs, &depth);
    let labels = graph
        .digraph
        .node_indices()
        .map(|n| graph.data(n).label.clone())
        .collect();
    (labels, childs, belows, root)
}

fn idx(labels: &[String], label: &str) -> usize {
    labels.iter().position(|l| l == label).unwrap()
}

fn below_labels(labels: &[String], belows: &[Vec<usize>], label: &str) -> Vec<String> {
    belows[idx(labels, label)]
        .iter()
        .map(|&b| labels[b].clone())
        .collect()
}

#[test]
fn test_plain_tree_keeps_every_edge() {
    let belows = select_belows(0, &[vec![1, 2], vec![], vec![]], &[0, 1, 1]);
    assert_eq!(belows, vec![vec![1, 2], vec![], vec![]]);
}

#[test]
fn test_skips_edge_that_is_not_one_level_down() {
    let belows = select_belows(0, &[vec![1, 2], vec![2], vec![]], &[0, 1, 2]);
    assert_eq!(belows, vec![vec![1], vec![2], vec![]]);
}

#[test]
fn test_duplicate_edge_claimed_once() {
    let (labels, _, belows, root) = select("(define x 1)(+ x x)");
    assert_eq!(belows[root].len(), 1);
    assert_eq!(below_labels(&labels, &belows, "+"), vec!["x"]);
    assert_eq!(below_labels(&labels, &belows, "x"), vec!["1"]);
}

#[test]
fn test_shallow_parent_edge_excluded() {
    let (labels, _, belows, _) = select("(define a 1)(f a (g a))");
    assert_eq!(below_labels(&labels, &belows, "f"), vec!["g"]);
    assert_eq!(below_labels(&labels, &belows, "g"), vec!["a"]);
}

#[test]
fn test_first_claimant_in_traversal_order_wins() {
    let (labels, _, belows, _) = select("(define s q)(f (g s) (h s))");
    assert_eq!(below_labels(&labels, &belows, "g"), vec!["s"]);
    assert!(below_labels(&labels, &belows, "h").is_empty());
}

#[test]
fn test_depth_first_claim_beats_later_sibling() {
    let (labels, _, belows, _) = select("(define s q)(f (g (k s)) (h (m s)))");
    assert_eq!(below_labels(&labels, &belows, "k"), vec!["s"]);
    assert!(below_labels(&labels, &belows, "m").is_empty());
}

#[test]
fn test_every_node_has_exactly_one_primary_parent() {
    let (labels, childs, belows, root) =
        select("(define a (p q))(define b (r a a))(f a b (g b (h a)))");
    let mut parents = vec![0usize; labels.len()];
    for (node, list) in belows.iter().enumerate() {
        for &b in list {
            parents[b] += 1;
            assert!(childs[node].contains(&b), "belows must be a subset of childs");
        }
    }
    for (node, &count) in parents.iter().enumerate() {
        let expected = if node == root { 0 } else { 1 };
        assert_eq!(count, expected, "node {}", labels[node]);
    }
}
