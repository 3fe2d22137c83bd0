use super::*;
use crate::layout::full_layout;
use crate::parsers::parse;

fn render(src: &str, unicode: bool) -> String {
    let layout = full_layout(&parse(src).unwrap()).unwrap();
    AsciiRenderer::new(unicode).render(&layout)
}

#[test]
fn test_single_node() {
    assert_eq!(render("x", true), "x\n");
}

#[test]
fn test_two_children_unicode() {
    let expected = "  f\n┌─┴─┐\n│   │\n▼   ▼\na   b\n";
    assert_eq!(render("(f a b)", true), expected);
}

#[test]
fn test_two_children_ascii() {
    let expected = "  f\n+-+-+\n|   |\nv   v\na   b\n";
    assert_eq!(render("(f a b)", false), expected);
}

#[test]
fn test_shared_variable_drawn_once() {
    let out = render("(define x 1)(+ x x)", true);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![" +", " │", " │", " ▼", "⟨x⟩", " │", " │", " ▼", " 1"]
    );
}

#[test]
fn test_variable_brackets_ascii() {
    let out = render("(define x 1)(+ x x)", false);
    assert_eq!(out.lines().filter(|l| l.contains("[x]")).count(), 1);
}

#[test]
fn test_row_height_spacing() {
    let layout = full_layout(&parse("(f (g h))").unwrap()).unwrap();
    let renderer = AsciiRenderer {
        charset: CharSet::Ascii,
        column_width: 0,
        row_height: 2,
    };
    assert_eq!(renderer.render(&layout), "f\n|\ng\n|\nh\n");
}

#[test]
fn test_labels_never_overlap() {
    let out = render("(define s (k 1 2))(fun (gg s) (hhh s (m s)) s)", true);
    for label in ["fun", "gg", "hhh", "⟨s⟩", "k", "m"] {
        assert!(out.contains(label), "missing {label} in\n{out}");
    }
}

#[test]
fn test_empty_layout() {
    let layout = Layout {
        root: 0,
        nodes: vec![],
    };
    assert_eq!(AsciiRenderer::new(true).render(&layout), "");
}
