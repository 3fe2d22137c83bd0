//! Expression arena, binding table, and the parsed `Program`.
//!
//! Expressions live in an `ExprArena` and refer to each other through
//! `ExprId` handles. A `define` creates one `Expr::Variable` for its name, and
//! every later reference to that name returns the same handle, so sharing in
//! the source becomes handle identity in the arena.

use std::fmt;

use serde::Serialize;

// ─── ExprId ──────────────────────────────────────────────────────────────────

/// Handle to an expression stored in an `ExprArena`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExprId(u32);

impl ExprId {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expr({})", self.0)
    }
}

// ─── Expr ────────────────────────────────────────────────────────────────────

/// What kind of word a primitive was written as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    #[default]
    Symbol,
    Number,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// `(label arg...)`
    Call { label: String, args: Vec<ExprId> },
    /// A word with no binding in scope.
    Primitive { label: String, kind: PrimitiveKind },
    /// A `define`d name; `bound` is the definition body.
    Variable { label: String, bound: ExprId },
}

impl Expr {
    pub fn label(&self) -> &str {
        match self {
            Expr::Call { label, .. } | Expr::Primitive { label, .. } | Expr::Variable { label, .. } => {
                label
            }
        }
    }

    /// Direct sub-expressions in argument order.
    pub fn children(&self) -> &[ExprId] {
        match self {
            Expr::Call { args, .. } => args,
            Expr::Variable { bound, .. } => std::slice::from_ref(bound),
            Expr::Primitive { .. } => &[],
        }
    }
}

// ─── ExprArena ───────────────────────────────────────────────────────────────

/// Owns every expression created during one parse.
#[derive(Debug, Clone, Default)]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `expr` and return its handle.
    pub fn alloc(&mut self, expr: Expr) -> ExprId {
        let index = self.exprs.len();
        assert!(index < u32::MAX as usize, "expression arena capacity exceeded");
        self.exprs.push(expr);
        ExprId::new(index as u32)
    }

    /// # Panics
    ///
    /// Panics if `id` was not allocated by this arena.
    pub fn get(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ExprId, &Expr)> {
        self.exprs
            .iter()
            .enumerate()
            .map(|(i, e)| (ExprId::new(i as u32), e))
    }
}

// ─── BindingTable ────────────────────────────────────────────────────────────

/// Ordered `name → Variable` mapping, in the textual order of the `define`s.
///
/// First binding wins: a later `define` of a name that is already bound is
/// rejected by `bind` and lookups keep returning the original variable.
#[derive(Debug, Clone, Default)]
pub struct BindingTable {
    entries: Vec<(String, ExprId)>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name → variable`. Returns `false` (and changes nothing) when
    /// `name` is already bound.
    pub fn bind(&mut self, name: impl Into<String>, variable: ExprId) -> bool {
        let name = name.into();
        if self.lookup(&name).is_some() {
            return false;
        }
        self.entries.push((name, variable));
        true
    }

    /// Scan in insertion order and return the first match.
    pub fn lookup(&self, name: &str) -> Option<ExprId> {
        self.entries
            .iter()
            .find(|(bound, _)| bound == name)
            .map(|&(_, id)| id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ExprId)> {
        self.entries.iter().map(|(name, id)| (name.as_str(), *id))
    }
}

// ─── Program ─────────────────────────────────────────────────────────────────

/// Result of a successful parse: the arena, the bindings, and the root.
#[derive(Debug, Clone)]
pub struct Program {
    pub arena: ExprArena,
    pub bindings: BindingTable,
    pub root: ExprId,
}

impl Program {
    pub fn expr(&self, id: ExprId) -> &Expr {
        self.arena.get(id)
    }

    pub fn root_expr(&self) -> &Expr {
        self.arena.get(self.root)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_types.rs"]
mod tests;
