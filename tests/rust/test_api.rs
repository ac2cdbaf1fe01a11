use super::*;
use crate::syntax::Direction;

#[test]
fn test_layout_dsl_uses_header_direction() {
    let result = layout_dsl("graph LR\nA --> B\n", &LayoutConfig::default()).unwrap();
    assert_eq!(result.direction, Direction::LR);
    let b = result.node("B").unwrap();
    assert_eq!((b.x, b.y), (80.0, 0.0));
}

#[test]
fn test_config_direction_overrides_header() {
    let config = LayoutConfig::new().with_direction(Direction::BT);
    let result = layout_dsl("graph LR\nA --> B\n", &config).unwrap();
    assert_eq!(result.direction, Direction::BT);
    assert_eq!(result.node("A").unwrap().y, 80.0);
}

#[test]
fn test_layout_dsl_labels() {
    let result = layout_dsl("A[Start] --> B[End]", &LayoutConfig::default()).unwrap();
    assert_eq!(result.node("A").unwrap().label, "Start");
    assert_eq!(result.node("B").unwrap().label, "End");
}

#[test]
fn test_layout_dsl_breaks_cycles() {
    let src = "graph TD\nA --> B\nB --> C\nC --> A\nC --> D\n";
    let result = layout_dsl(src, &LayoutConfig::default()).unwrap();
    assert_eq!(result.node("C").unwrap().layer, 0);
    assert_eq!(result.node("B").unwrap().layer, 2);
}

#[test]
fn test_parse_error_propagates() {
    let err = layout_dsl("graph TD\nA --> ???\n", &LayoutConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Parse { line: 2, .. }));
}

#[test]
fn test_render_dsl_text() {
    let out = render_dsl("A --> B", Format::Text, &LayoutConfig::default(), None).unwrap();
    assert_eq!(
        out,
        "direction: TD\n\
         layer 0: A@(0.0,0.0)\n\
         layer 1: B@(0.0,80.0)\n\
         bounds: (0.0,0.0)-(0.0,80.0)\n"
    );
}

#[test]
fn test_render_dsl_json_with_hull() {
    let out = render_dsl(
        "A --> B\nA --> C",
        Format::Json,
        &LayoutConfig::default(),
        Some(Vec::new()),
    )
    .unwrap();
    let doc: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(doc["hull"].as_array().unwrap().len(), 3);
}

#[test]
fn test_render_dsl_empty_input() {
    let out = render_dsl("", Format::Text, &LayoutConfig::default(), None).unwrap();
    assert_eq!(out, "");
}

#[test]
fn test_format_from_str() {
    assert_eq!("text".parse::<Format>().unwrap(), Format::Text);
    assert_eq!("JSON".parse::<Format>().unwrap(), Format::Json);
    assert!("svg".parse::<Format>().is_err());
    assert_eq!(Format::default(), Format::Text);
}
