//! Border metrics assembly.
//!
//! [§ 4 Borders](https://www.w3.org/TR/css-backgrounds-3/#borders)
//!
//! Resolves each border property group over its own topology and packages the
//! results into the record layout and paint consume.

use serde::{Deserialize, Serialize};

use crate::cascade::{Cascade, CascadedCorners, CascadedEdges, CascadedScalar, Corners, Edges};
use crate::direction::LayoutDirection;
use crate::values::{BorderStyle, ColorValue};

/// Every border property of one element, as specified.
///
/// Built by the property-parsing collaborator; immutable once handed over.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CascadedBorders {
    /// [§ 4.3 'border-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    pub widths: CascadedEdges<f32>,
    /// [§ 4.1 'border-color'](https://www.w3.org/TR/css-backgrounds-3/#border-color)
    pub colors: CascadedEdges<ColorValue>,
    /// [§ 5.1 'border-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
    pub radii: CascadedCorners<f32>,
    /// [§ 4.2 'border-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
    pub style: CascadedScalar<BorderStyle>,
}

/// Values used where no cascade slot applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BorderDefaults {
    /// Width of an edge nobody specified.
    pub width: f32,
    /// Color of an edge nobody specified. `None` is "unset", not transparent
    /// black: paint treats it as no color at all.
    pub color: Option<ColorValue>,
    /// Radius of a corner nobody specified.
    pub radius: f32,
    /// Style when unspecified.
    pub style: BorderStyle,
}

impl Default for BorderDefaults {
    fn default() -> Self {
        Self {
            width: 0.0,
            color: None,
            radius: 0.0,
            style: BorderStyle::Solid,
        }
    }
}

/// Fully-resolved border metrics for one element.
///
/// Every slot is populated; nothing here refers back to the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BorderMetrics {
    /// Width per physical edge.
    pub widths: Edges<f32>,
    /// Color per physical edge, `None` where unset.
    pub colors: Edges<Option<ColorValue>>,
    /// Radius per physical corner.
    pub radii: Corners<f32>,
    /// Line style for the whole border.
    pub style: BorderStyle,
}

impl BorderMetrics {
    /// Whether every edge shares width and color and every corner shares a
    /// radius, so the border can be stroked as one rounded rectangle.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.widths.is_uniform() && self.colors.is_uniform() && self.radii.is_uniform()
    }

    /// Whether any edge would paint: a positive width with a set, non-transparent color.
    #[must_use]
    pub fn has_visible_border(&self) -> bool {
        self.widths.iter().any(|(edge, &width)| {
            width > 0.0
                && self
                    .colors
                    .get(edge)
                    .is_some_and(|color| !color.is_transparent())
        })
    }
}

impl CascadedBorders {
    /// Resolve with the standard defaults (see [`BorderDefaults::default`]).
    #[must_use]
    pub fn resolve_metrics(&self, direction: LayoutDirection) -> BorderMetrics {
        self.resolve_metrics_with(direction, &BorderDefaults::default())
    }

    /// Resolve each group independently against its own default.
    #[must_use]
    pub fn resolve_metrics_with(
        &self,
        direction: LayoutDirection,
        defaults: &BorderDefaults,
    ) -> BorderMetrics {
        BorderMetrics {
            widths: self.widths.resolve(direction, defaults.width),
            colors: self
                .colors
                .resolve_with(direction, |found| found.copied().or(defaults.color)),
            radii: self.radii.resolve(direction, defaults.radius),
            style: self.style.resolve(direction, defaults.style),
        }
    }

    /// Whether nothing at all was specified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
            && self.colors.is_empty()
            && self.radii.is_empty()
            && self.style.is_empty()
    }
}

/// Resolve every border group of `borders` for `direction`.
#[must_use]
pub fn resolve_metrics(borders: &CascadedBorders, direction: LayoutDirection) -> BorderMetrics {
    borders.resolve_metrics(direction)
}
