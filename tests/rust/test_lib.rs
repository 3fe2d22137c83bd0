use super::*;

#[test]
fn test_convert_ok() {
    let layout = convert("(define x 1)(+ x x)").unwrap();
    assert_eq!(layout.len(), 3);
    assert_eq!(layout.root_node().label, "+");
}

#[test]
fn test_convert_rejects_malformed_input() {
    for src in ["", "   ", "(", "(f", "(define x)", "()", ")", "(define x 1)"] {
        assert!(
            matches!(convert(src), Err(Error::Parse(_))),
            "expected a parse error for {src:?}"
        );
    }
}

#[test]
fn test_error_message() {
    let err = convert("(f a").unwrap_err();
    assert_eq!(err.to_string(), "call to 'f' is missing its closing ')'");
}

#[test]
fn test_trailing_tokens_are_ignored() {
    assert_eq!(convert("(f a) b c").unwrap(), convert("(f a)").unwrap());
}

#[test]
fn test_render_source_formats() {
    let src = "(f a b)";
    let json = render_source(src, &RenderConfig::with_format(OutputFormat::Json)).unwrap();
    assert!(json.trim_start().starts_with('{'));
    let svg = render_source(src, &RenderConfig::with_format(OutputFormat::Svg)).unwrap();
    assert!(svg.starts_with("<svg"));
    let text = render_source(src, &RenderConfig::with_format(OutputFormat::Ascii)).unwrap();
    assert_eq!(text.lines().last(), Some("a   b"));
}

#[test]
fn test_render_source_propagates_errors() {
    assert!(render_source("(", &RenderConfig::default()).is_err());
}
