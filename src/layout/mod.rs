//! Layout engine — turns a parsed program into positioned nodes.
//!
//! Pipeline: build the node graph, assign depths, select the spanning
//! `belows` tree, compute offsets, then number the nodes for output.

pub mod contour;
pub mod depth;
pub mod graph;
pub mod spanning;
pub mod types;

pub use graph::NodeGraph;
pub use types::{Layout, NodeId, NodeKind, PlacedNode};

use log::debug;

use crate::error::LayoutError;
use crate::syntax::types::Program;

/// Run the full layout pipeline on a parsed program.
pub fn full_layout(program: &Program) -> Result<Layout, LayoutError> {
    let graph = NodeGraph::from_program(program)?;
    if !graph.is_dag() {
        return Err(LayoutError::NotADag);
    }

    let childs = graph.child_lists();
    let depth = depth::assign_depths(&graph, &childs);
    let root = graph.root.index();
    let belows = spanning::select_belows(root, &childs, &depth);
    let offsets = contour::compute_offsets(root, &belows);

    let layout = assemble(&graph, root, &childs, &belows, &depth, &offsets);
    debug!(
        "layout: {} nodes, {} rows, width {}",
        layout.len(),
        layout.height(),
        layout.width()
    );
    Ok(layout)
}

/// Renumber nodes in pre-order of the `belows` tree and collect the output
/// records.
fn assemble(
    graph: &NodeGraph,
    root: usize,
    childs: &[Vec<usize>],
    belows: &[Vec<usize>],
    depth: &[usize],
    offsets: &[f64],
) -> Layout {
    let mut order = Vec::with_capacity(belows.len());
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        order.push(node);
        stack.extend(belows[node].iter().rev().copied());
    }

    let mut new_id = vec![usize::MAX; belows.len()];
    for (id, &node) in order.iter().enumerate() {
        new_id[node] = id;
    }

    let nodes = order
        .iter()
        .enumerate()
        .map(|(id, &node)| {
            let data = graph.data(petgraph::graph::NodeIndex::new(node));
            PlacedNode {
                id,
                label: data.label.clone(),
                kind: data.kind,
                depth: depth[node],
                offset: offsets[node],
                childs: childs[node].iter().map(|&c| new_id[c]).collect(),
                belows: belows[node].iter().map(|&c| new_id[c]).collect(),
            }
        })
        .collect();

    Layout { root: 0, nodes }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout.rs"]
mod tests;
