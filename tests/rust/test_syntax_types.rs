use super::*;

fn prim(arena: &mut ExprArena, label: &str) -> ExprId {
    arena.alloc(Expr::Primitive {
        label: label.to_string(),
        kind: PrimitiveKind::Symbol,
    })
}

#[test]
fn test_arena_alloc_and_get() {
    let mut arena = ExprArena::new();
    assert!(arena.is_empty());
    let a = prim(&mut arena, "a");
    let b = prim(&mut arena, "b");
    assert_ne!(a, b);
    assert_eq!(arena.len(), 2);
    assert_eq!(arena.get(a).label(), "a");
    assert_eq!(arena.get(b).label(), "b");
}

#[test]
fn test_expr_children_order() {
    let mut arena = ExprArena::new();
    let a = prim(&mut arena, "a");
    let b = prim(&mut arena, "b");
    let call = arena.alloc(Expr::Call {
        label: "f".to_string(),
        args: vec![a, b, a],
    });
    assert_eq!(arena.get(call).children(), &[a, b, a]);
    assert!(arena.get(a).children().is_empty());

    let var = arena.alloc(Expr::Variable {
        label: "v".to_string(),
        bound: call,
    });
    assert_eq!(arena.get(var).children(), &[call]);
    assert_eq!(arena.get(var).label(), "v");
}

#[test]
fn test_binding_first_wins() {
    let mut arena = ExprArena::new();
    let first = prim(&mut arena, "1");
    let second = prim(&mut arena, "2");
    let mut table = BindingTable::new();
    assert!(table.bind("x", first));
    assert!(!table.bind("x", second));
    assert_eq!(table.len(), 1);
    assert_eq!(table.lookup("x"), Some(first));
    assert_eq!(table.lookup("y"), None);
}

#[test]
fn test_binding_iter_in_insertion_order() {
    let mut arena = ExprArena::new();
    let a = prim(&mut arena, "a");
    let b = prim(&mut arena, "b");
    let mut table = BindingTable::new();
    table.bind("zeta", a);
    table.bind("alpha", b);
    let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["zeta", "alpha"]);
}

#[test]
fn test_expr_id_index() {
    assert_eq!(ExprId::new(7).index(), 7);
    assert_eq!(format!("{:?}", ExprId::new(3)), "Expr(3)");
}
