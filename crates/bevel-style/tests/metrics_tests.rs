//! Integration tests for border metrics assembly.

use bevel_style::{
    BorderDefaults, BorderMetrics, BorderStyle, CascadedBorders, CascadedCorners, CascadedEdges,
    CascadedScalar, ColorValue, CornerSlot, Corners, EdgeSlot, Edges, LayoutDirection,
    resolve_metrics,
};

fn sample_borders() -> CascadedBorders {
    CascadedBorders {
        widths: CascadedEdges::all(1.0).with(EdgeSlot::Start, 3.0),
        colors: CascadedEdges::new().with(EdgeSlot::Horizontal, ColorValue::BLACK),
        radii: CascadedCorners::new().with(CornerSlot::TopEnd, 4.0),
        style: CascadedScalar::all(BorderStyle::Dashed),
    }
}

#[test]
fn test_empty_borders_use_standard_defaults() {
    let metrics = resolve_metrics(&CascadedBorders::default(), LayoutDirection::Ltr);
    assert_eq!(metrics.widths, Edges::splat(0.0));
    assert_eq!(metrics.colors, Edges::splat(None));
    assert_eq!(metrics.radii, Corners::splat(0.0));
    assert_eq!(metrics.style, BorderStyle::Solid);
    assert_eq!(metrics, BorderMetrics::default());
}

#[test]
fn test_standard_defaults() {
    let defaults = BorderDefaults::default();
    assert_eq!(defaults.width, 0.0);
    assert_eq!(defaults.color, None);
    assert_eq!(defaults.radius, 0.0);
    assert_eq!(defaults.style, BorderStyle::Solid);
}

#[test]
fn test_each_group_resolves_for_direction() {
    let borders = sample_borders();

    let ltr = borders.resolve_metrics(LayoutDirection::Ltr);
    assert_eq!(
        ltr.widths,
        Edges {
            left: 3.0,
            top: 1.0,
            right: 1.0,
            bottom: 1.0,
        }
    );
    assert_eq!(ltr.colors.left, Some(ColorValue::BLACK));
    assert_eq!(ltr.colors.top, None);
    assert_eq!(ltr.radii.top_right, 4.0);
    assert_eq!(ltr.radii.top_left, 0.0);
    assert_eq!(ltr.style, BorderStyle::Dashed);

    let rtl = borders.resolve_metrics(LayoutDirection::Rtl);
    assert_eq!(rtl.widths.left, 1.0);
    assert_eq!(rtl.widths.right, 3.0);
    assert_eq!(rtl.radii.top_left, 4.0);
    assert_eq!(rtl.radii.top_right, 0.0);
}

#[test]
fn test_custom_defaults_fill_unset_slots() {
    let defaults = BorderDefaults {
        width: 0.5,
        color: Some(ColorValue::WHITE),
        radius: 2.0,
        style: BorderStyle::Dotted,
    };
    let metrics =
        CascadedBorders::default().resolve_metrics_with(LayoutDirection::Rtl, &defaults);
    assert_eq!(metrics.widths, Edges::splat(0.5));
    assert_eq!(metrics.colors, Edges::splat(Some(ColorValue::WHITE)));
    assert_eq!(metrics.radii, Corners::splat(2.0));
    assert_eq!(metrics.style, BorderStyle::Dotted);
}

#[test]
fn test_groups_are_independent() {
    let base = sample_borders();
    let mut changed = sample_borders();
    changed.widths = CascadedEdges::all(10.0);

    let before = base.resolve_metrics(LayoutDirection::Ltr);
    let after = changed.resolve_metrics(LayoutDirection::Ltr);
    assert_ne!(before.widths, after.widths);
    assert_eq!(before.colors, after.colors);
    assert_eq!(before.radii, after.radii);
    assert_eq!(before.style, after.style);
}

#[test]
fn test_other_groups_do_not_touch_widths() {
    let base = sample_borders();
    let changed = CascadedBorders {
        colors: CascadedEdges::all(ColorValue::WHITE).with(EdgeSlot::Start, ColorValue::BLACK),
        radii: CascadedCorners::all(9.0).with(CornerSlot::BottomStart, 1.0),
        style: CascadedScalar::all(BorderStyle::Dotted),
        ..sample_borders()
    };

    let before = base.resolve_metrics(LayoutDirection::Rtl);
    let after = changed.resolve_metrics(LayoutDirection::Rtl);
    assert_ne!(before.colors, after.colors);
    assert_ne!(before.radii, after.radii);
    assert_ne!(before.style, after.style);
    assert_eq!(before.widths, after.widths);
}

#[test]
fn test_resolution_is_repeatable() {
    let borders = sample_borders();
    assert_eq!(
        borders.resolve_metrics(LayoutDirection::Rtl),
        borders.resolve_metrics(LayoutDirection::Rtl)
    );
}

#[test]
fn test_uniform_border() {
    let borders = CascadedBorders {
        widths: CascadedEdges::all(2.0),
        colors: CascadedEdges::all(ColorValue::BLACK),
        radii: CascadedCorners::all(4.0),
        style: CascadedScalar::new(),
    };
    let metrics = borders.resolve_metrics(LayoutDirection::Ltr);
    assert!(metrics.is_uniform());
    assert!(metrics.has_visible_border());

    assert!(!sample_borders().resolve_metrics(LayoutDirection::Ltr).is_uniform());
}

#[test]
fn test_visible_border_needs_width_and_opaque_color() {
    let no_color = CascadedBorders {
        widths: CascadedEdges::all(2.0),
        ..CascadedBorders::default()
    };
    assert!(!no_color.resolve_metrics(LayoutDirection::Ltr).has_visible_border());

    let transparent = CascadedBorders {
        widths: CascadedEdges::all(2.0),
        colors: CascadedEdges::all(ColorValue::TRANSPARENT),
        ..CascadedBorders::default()
    };
    assert!(!transparent.resolve_metrics(LayoutDirection::Ltr).has_visible_border());

    let one_edge = CascadedBorders {
        widths: CascadedEdges::new().with(EdgeSlot::Bottom, 1.0),
        colors: CascadedEdges::all(ColorValue::BLACK),
        ..CascadedBorders::default()
    };
    assert!(one_edge.resolve_metrics(LayoutDirection::Rtl).has_visible_border());
}

#[test]
fn test_is_empty() {
    assert!(CascadedBorders::default().is_empty());
    assert!(!sample_borders().is_empty());
}
