//! Integration tests for loading border documents.

use bevel_style::{
    BorderDefaults, BorderDocument, BorderStyle, CascadedBorders, ColorValue, Corners, Edges,
    LayoutDirection, StyleError,
};

#[test]
fn test_load_full_document() {
    let borders = CascadedBorders::from_json(
        r##"{
            "width":  { "all": 2, "top": 5 },
            "color":  { "start": "#ff0000", "horizontal": "blue" },
            "radius": { "topStart": 4, "all": 1 },
            "style":  { "all": "dashed" }
        }"##,
    )
    .unwrap();

    let metrics = borders.resolve_metrics(LayoutDirection::Rtl);
    assert_eq!(
        metrics.widths,
        Edges {
            left: 2.0,
            top: 5.0,
            right: 2.0,
            bottom: 2.0,
        }
    );
    assert_eq!(metrics.colors.right, Some(ColorValue::rgb(255, 0, 0)));
    assert_eq!(metrics.colors.left, Some(ColorValue::rgb(0, 0, 255)));
    assert_eq!(metrics.colors.top, None);
    assert_eq!(
        metrics.radii,
        Corners {
            top_left: 1.0,
            top_right: 4.0,
            bottom_left: 1.0,
            bottom_right: 1.0,
        }
    );
    assert_eq!(metrics.style, BorderStyle::Dashed);
}

#[test]
fn test_empty_document() {
    let borders = CascadedBorders::from_json("{}").unwrap();
    assert!(borders.is_empty());
}

#[test]
fn test_unknown_slot_is_rejected() {
    let result = CascadedBorders::from_json(r#"{ "width": { "middle": 1 } }"#);
    assert!(matches!(result, Err(StyleError::InvalidDocument(_))));
}

#[test]
fn test_unknown_group_is_rejected() {
    let result = CascadedBorders::from_json(r#"{ "opacity": 0.5 }"#);
    assert!(matches!(result, Err(StyleError::InvalidDocument(_))));
}

#[test]
fn test_bad_color_is_reported() {
    let error = CascadedBorders::from_json(r#"{ "color": { "all": "not-a-color" } }"#)
        .unwrap_err();
    assert!(error.to_string().contains("not-a-color"));
}

#[test]
fn test_per_edge_style_is_dropped() {
    let document =
        BorderDocument::from_json(r#"{ "style": { "left": "dotted", "all": "dashed" } }"#)
            .unwrap();
    let borders = document.into_cascade();
    assert_eq!(borders.style.all, Some(BorderStyle::Dashed));

    let only_edge = CascadedBorders::from_json(r#"{ "style": { "top": "dotted" } }"#).unwrap();
    assert!(only_edge.style.is_empty());
    assert_eq!(
        only_edge.resolve_metrics(LayoutDirection::Ltr).style,
        BorderStyle::Solid
    );
}

#[test]
fn test_metrics_serialize() {
    let borders = CascadedBorders::from_json(r#"{ "color": { "top": "red" } }"#).unwrap();
    let json = serde_json::to_value(borders.resolve_metrics(LayoutDirection::Ltr)).unwrap();
    assert_eq!(json["colors"]["top"], "#ff0000");
    assert!(json["colors"]["left"].is_null());
    assert_eq!(json["radii"]["bottomRight"], 0.0);
    assert_eq!(json["style"], "solid");
}

#[test]
fn test_partial_defaults() {
    let defaults = BorderDefaults::from_json(r#"{ "style": "dotted", "color": "gray" }"#).unwrap();
    assert_eq!(defaults.style, BorderStyle::Dotted);
    assert_eq!(defaults.color, Some(ColorValue::rgb(128, 128, 128)));
    assert_eq!(defaults.width, 0.0);
    assert_eq!(defaults.radius, 0.0);
}

#[test]
fn test_overflowing_width_is_rejected() {
    let error = CascadedBorders::from_json(r#"{ "width": { "all": 1e40 } }"#).unwrap_err();
    assert!(matches!(error, StyleError::InvalidDocument(_)));
    assert!(error.to_string().contains("width.all"));
}

#[test]
fn test_overflowing_radius_is_rejected() {
    let error = CascadedBorders::from_json(r#"{ "radius": { "all": 1, "topStart": -1e39 } }"#)
        .unwrap_err();
    assert!(error.to_string().contains("radius.topStart"));
}

#[test]
fn test_large_finite_lengths_are_kept() {
    let borders = CascadedBorders::from_json(r#"{ "width": { "left": 1e30 } }"#).unwrap();
    let metrics = borders.resolve_metrics(LayoutDirection::Ltr);
    assert!(metrics.widths.left.is_finite());
    assert!(metrics.widths.left > 1e29);
}
