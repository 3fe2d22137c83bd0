//! Spanning selection — pick one primary parent per node to form the
//! `belows` tree that positions are computed from.

/// Build `belows` for every node reachable from `root`.
///
/// Depth-first from the root, in argument order: a child is claimed by the
/// current node when it sits exactly one level deeper and no earlier-visited
/// node has claimed it. A claimed child is explored before the next sibling
/// edge is considered, so the first claimant in traversal order wins.
pub fn select_belows(root: usize, childs: &[Vec<usize>], depth: &[usize]) -> Vec<Vec<usize>> {
    let mut belows = vec![Vec::new(); childs.len()];
    let mut has_primary_parent = vec![false; childs.len()];
    // (node, index of the next childs edge to consider)
    let mut frames: Vec<(usize, usize)> = vec![(root, 0)];

    while let Some(frame) = frames.last_mut() {
        let (node, next) = *frame;
        let Some(&child) = childs[node].get(next) else {
            frames.pop();
            continue;
        };
        frame.1 += 1;
        if depth[child] == depth[node] + 1 && !has_primary_parent[child] {
            has_primary_parent[child] = true;
            belows[node].push(child);
            frames.push((child, 0));
        }
    }

    belows
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_spanning.rs"]
mod tests;
