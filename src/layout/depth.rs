//! Depth assignment — longest path from the root to every node.

use petgraph::visit::DfsPostOrder;

use super::graph::NodeGraph;

/// Compute `depth[n]` = the greatest number of edges on any root-to-`n` path.
///
/// `DfsPostOrder` finishes every node exactly once however many incoming
/// edges it has; walking the finish order backwards is a topological order,
/// in which relaxing each `childs` edge yields the longest path.
pub fn assign_depths(graph: &NodeGraph, childs: &[Vec<usize>]) -> Vec<usize> {
    let mut finish_order = Vec::with_capacity(graph.node_count());
    let mut dfs = DfsPostOrder::new(&graph.digraph, graph.root);
    while let Some(node) = dfs.next(&graph.digraph) {
        finish_order.push(node.index());
    }

    let mut depth = vec![0usize; graph.node_count()];
    for &node in finish_order.iter().rev() {
        let next = depth[node] + 1;
        for &child in &childs[node] {
            if depth[child] < next {
                depth[child] = next;
            }
        }
    }
    depth
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_depth.rs"]
mod tests;
