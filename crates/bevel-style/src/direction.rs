//! Layout direction and the logical-to-physical edge mapping.
//!
//! [§ 2.1 Specifying Directionality](https://www.w3.org/TR/css-writing-modes-4/#direction)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::StyleError;

/// [§ 2.1 'direction'](https://www.w3.org/TR/css-writing-modes-4/#direction)
///
/// "This property specifies the inline base direction or directionality of
/// any bidi paragraph, embedding, isolate, or override established by the box."
///
/// Only horizontal writing is modelled, so the inline axis is always the
/// horizontal one and the direction alone decides where `start` and `end` sit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    /// Left-to-right: start → left, end → right.
    #[default]
    Ltr,
    /// Right-to-left: start → right, end → left.
    Rtl,
}

/// Physical side of a box, fixed by geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PhysicalEdge {
    /// Left edge of the box
    Left,
    /// Top edge of the box
    Top,
    /// Right edge of the box
    Right,
    /// Bottom edge of the box
    Bottom,
}

/// Direction-relative side of a box on the inline axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum LogicalEdge {
    /// Where inline content begins.
    Start,
    /// Where inline content ends.
    End,
}

impl LayoutDirection {
    /// Build a direction from the host framework's `isRTL`-style flag.
    #[must_use]
    pub const fn from_rtl(is_rtl: bool) -> Self {
        if is_rtl { Self::Rtl } else { Self::Ltr }
    }

    /// Parse an `ltr` / `rtl` keyword, ignoring ASCII case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidDirection`] for any other keyword.
    pub fn from_keyword(text: &str) -> Result<Self, StyleError> {
        let text = text.trim();
        text.parse().map_err(|_| StyleError::InvalidDirection(text.to_string()))
    }

    /// Whether content flows right-to-left.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }

    /// [§ 6.2 Flow-relative Directions](https://www.w3.org/TR/css-writing-modes-4/#logical-directions)
    ///
    /// Map a logical edge to the physical edge it names.
    ///
    /// | Direction | start | end   |
    /// |-----------|-------|-------|
    /// | ltr       | left  | right |
    /// | rtl       | right | left  |
    #[must_use]
    pub const fn physical_edge(self, logical: LogicalEdge) -> PhysicalEdge {
        match (self, logical) {
            (Self::Ltr, LogicalEdge::Start) | (Self::Rtl, LogicalEdge::End) => PhysicalEdge::Left,
            (Self::Ltr, LogicalEdge::End) | (Self::Rtl, LogicalEdge::Start) => PhysicalEdge::Right,
        }
    }

    /// Inverse of [`Self::physical_edge`].
    ///
    /// Top and bottom lie on the block axis and have no inline alias.
    #[must_use]
    pub const fn logical_edge(self, physical: PhysicalEdge) -> Option<LogicalEdge> {
        match (self, physical) {
            (Self::Ltr, PhysicalEdge::Left) | (Self::Rtl, PhysicalEdge::Right) => {
                Some(LogicalEdge::Start)
            }
            (Self::Ltr, PhysicalEdge::Right) | (Self::Rtl, PhysicalEdge::Left) => {
                Some(LogicalEdge::End)
            }
            (_, PhysicalEdge::Top | PhysicalEdge::Bottom) => None,
        }
    }
}

impl PhysicalEdge {
    /// Whether this edge lies on the horizontal axis group (left/right).
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}
