//! Offset/contour engine — horizontal placement of the `belows` tree.
//!
//! Subtrees are placed bottom-up. Each node keeps its position inside its own
//! subtree frame (`offset`) and the translation of that frame relative to its
//! parent's frame (`shift`). Moving a sibling subtree therefore touches one
//! number; `to_absolute` folds the shifts into final coordinates at the end.
//!
//! Contours are walked through the first/last `belows` entry of each node, or
//! through a thread when one is set. A thread links the bottom of a shorter
//! contour to the next node of a taller neighbour and records the frame delta
//! between the two, so walks across it keep accumulating the right shift.

use log::trace;

/// Horizontal gap required between neighbouring nodes on the same depth.
pub const MIN_SEPARATION: f64 = 1.0;

/// Contour walk direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Pass-scoped state for one layout run.
pub struct ContourEngine<'a> {
    belows: &'a [Vec<usize>],
    offset: Vec<f64>,
    shift: Vec<f64>,
    /// Thread target and the frame delta to add when following it.
    thread: Vec<Option<(usize, f64)>>,
}

impl<'a> ContourEngine<'a> {
    pub fn new(belows: &'a [Vec<usize>]) -> Self {
        let n = belows.len();
        Self {
            belows,
            offset: vec![0.0; n],
            shift: vec![0.0; n],
            thread: vec![None; n],
        }
    }

    /// Lay out the tree under `root` and return absolute offsets, with the
    /// root centred at 0.
    pub fn run(mut self, root: usize) -> Vec<f64> {
        for node in post_order(self.belows, root) {
            self.place_children(node);
        }
        let origin = -(self.offset[root] + self.shift[root]);
        to_absolute(self.belows, root, &self.offset, &self.shift, origin)
    }

    /// Separate the already laid out subtrees under `node`, then centre
    /// `node` over them.
    fn place_children(&mut self, node: usize) {
        let belows = self.belows;
        let kids = &belows[node];
        let mut merged: Vec<f64> = Vec::new();

        for i in 1..kids.len() {
            let left_tree = kids[i - 1];
            let right_tree = kids[i];

            merged = max_contour(&merged, &self.contour(left_tree, Side::Right));
            let left = self.contour(right_tree, Side::Left);

            let gap = merged
                .iter()
                .zip(&left)
                .map(|(r, l)| MIN_SEPARATION + r - l)
                .fold(0.0, f64::max);
            self.shift[right_tree] += gap;
            trace!("node {node}: shifted child {right_tree} by {gap}");

            if merged.len() < left.len() {
                self.set_thread(kids[0], right_tree, Side::Left);
            } else if merged.len() > left.len() {
                self.set_thread(left_tree, right_tree, Side::Right);
            }
        }

        self.offset[node] = if kids.is_empty() {
            0.0
        } else {
            let sum: f64 = kids.iter().map(|&k| self.offset[k] + self.shift[k]).sum();
            sum / kids.len() as f64
        };
    }

    /// Next node down a contour, with the frame delta to get there.
    fn step(&self, node: usize, side: Side) -> Option<(usize, f64)> {
        if let Some(link) = self.thread[node] {
            return Some(link);
        }
        let kids = &self.belows[node];
        let next = match side {
            Side::Left => kids.first(),
            Side::Right => kids.last(),
        };
        next.map(|&child| (child, self.shift[child]))
    }

    /// Depth-indexed offsets of `subtree`'s silhouette on `side`, expressed
    /// in the frame of its parent.
    fn contour(&self, subtree: usize, side: Side) -> Vec<f64> {
        let mut acc = self.shift[subtree];
        let mut out = vec![self.offset[subtree] + acc];
        let mut node = subtree;
        while let Some((next, delta)) = self.step(node, side) {
            acc += delta;
            out.push(self.offset[next] + acc);
            node = next;
        }
        out
    }

    /// Walk two contours in lockstep and thread the one that ends first onto
    /// the continuation of the other.
    ///
    /// `Side::Left`: the left contour of the forest so far (entered through
    /// its first subtree) is shorter than the new subtree's left contour.
    /// `Side::Right`: the new subtree's right contour is shorter than the
    /// forest's right contour (entered through the previous subtree).
    fn set_thread(&mut self, left_tree: usize, right_tree: usize, side: Side) {
        let (mut short, mut tall) = match side {
            Side::Left => (left_tree, right_tree),
            Side::Right => (right_tree, left_tree),
        };
        let mut short_acc = self.shift[short];
        let mut tall_acc = self.shift[tall];

        loop {
            match (self.step(short, side), self.step(tall, side)) {
                (Some((s, ds)), Some((t, dt))) => {
                    short = s;
                    short_acc += ds;
                    tall = t;
                    tall_acc += dt;
                }
                (None, Some((t, dt))) => {
                    self.thread[short] = Some((t, tall_acc + dt - short_acc));
                    return;
                }
                _ => return,
            }
        }
    }
}

/// Depth-wise maximum of two contours; the longer tail is kept as is.
pub fn max_contour(a: &[f64], b: &[f64]) -> Vec<f64> {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut out = long.to_vec();
    for (slot, &v) in out.iter_mut().zip(short) {
        if v > *slot {
            *slot = v;
        }
    }
    out
}

/// Nodes of the `belows` tree under `root`, every node after all of its
/// descendants.
pub fn post_order(belows: &[Vec<usize>], root: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(belows.len());
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        order.push(node);
        stack.extend(belows[node].iter().copied());
    }
    order.reverse();
    order
}

/// Fold per-subtree frame shifts into absolute offsets.
///
/// Each node's accumulated origin is its parent's origin plus its own shift;
/// children are handed that origin before the node's own offset is added to
/// it, so a node's position never leaks into its descendants.
pub fn to_absolute(
    belows: &[Vec<usize>],
    root: usize,
    offset: &[f64],
    shift: &[f64],
    origin: f64,
) -> Vec<f64> {
    let mut absolute = vec![0.0; offset.len()];
    let mut stack = vec![(root, origin)];
    while let Some((node, parent_origin)) = stack.pop() {
        let origin = parent_origin + shift[node];
        stack.extend(belows[node].iter().map(|&child| (child, origin)));
        absolute[node] = offset[node] + origin;
    }
    absolute
}

/// Compute absolute offsets for the `belows` tree under `root`.
pub fn compute_offsets(root: usize, belows: &[Vec<usize>]) -> Vec<f64> {
    ContourEngine::new(belows).run(root)
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_contour.rs"]
mod tests;
