//! Corner topology: border radii.
//!
//! [§ 5.1 Curve Radii](https://www.w3.org/TR/css-backgrounds-3/#border-radius) and
//! [§ 4.5 Flow-Relative Corner Rounding](https://www.w3.org/TR/css-logical-1/#border-radius-properties)

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use super::{Cascade, Topology};
use crate::direction::{LayoutDirection, LogicalEdge, PhysicalEdge};

/// A physical corner of the border box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum Corner {
    /// Where the top and left edges meet.
    TopLeft,
    /// Where the top and right edges meet.
    TopRight,
    /// Where the bottom and left edges meet.
    BottomLeft,
    /// Where the bottom and right edges meet.
    BottomRight,
}

impl Corner {
    /// Whether the corner sits on the top edge.
    #[must_use]
    pub const fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    /// The left or right edge the corner touches.
    #[must_use]
    pub const fn horizontal_edge(self) -> PhysicalEdge {
        match self {
            Self::TopLeft | Self::BottomLeft => PhysicalEdge::Left,
            Self::TopRight | Self::BottomRight => PhysicalEdge::Right,
        }
    }
}

/// The slots a radius can be specified through.
///
/// The logical aliases keep the physical top/bottom and flip only on the
/// inline axis: `topStart` is the top-left corner in ltr and the top-right
/// corner in rtl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum CornerSlot {
    /// Every corner.
    All,
    /// The top-left corner only.
    TopLeft,
    /// The top-right corner only.
    TopRight,
    /// The bottom-left corner only.
    BottomLeft,
    /// The bottom-right corner only.
    BottomRight,
    /// The top corner on the inline-start side.
    TopStart,
    /// The top corner on the inline-end side.
    TopEnd,
    /// The bottom corner on the inline-start side.
    BottomStart,
    /// The bottom corner on the inline-end side.
    BottomEnd,
}

impl CornerSlot {
    /// The logical alias on the same top/bottom edge as `corner`.
    #[must_use]
    pub const fn alias(corner: Corner, side: LogicalEdge) -> Self {
        match (corner.is_top(), side) {
            (true, LogicalEdge::Start) => Self::TopStart,
            (true, LogicalEdge::End) => Self::TopEnd,
            (false, LogicalEdge::Start) => Self::BottomStart,
            (false, LogicalEdge::End) => Self::BottomEnd,
        }
    }
}

impl From<Corner> for CornerSlot {
    fn from(corner: Corner) -> Self {
        match corner {
            Corner::TopLeft => Self::TopLeft,
            Corner::TopRight => Self::TopRight,
            Corner::BottomLeft => Self::BottomLeft,
            Corner::BottomRight => Self::BottomRight,
        }
    }
}

/// Four physical corners, each resolved on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerTopology;

impl Topology for CornerTopology {
    type Slot = CornerSlot;
    type Target = Corner;
    type Resolved<T> = Corners<T>;

    /// logical alias for this direction → physical corner → all.
    ///
    /// | Corner      | ltr                            | rtl                            |
    /// |-------------|--------------------------------|--------------------------------|
    /// | topLeft     | topStart, topLeft, all         | topEnd, topLeft, all           |
    /// | topRight    | topEnd, topRight, all          | topStart, topRight, all        |
    /// | bottomLeft  | bottomStart, bottomLeft, all   | bottomEnd, bottomLeft, all     |
    /// | bottomRight | bottomEnd, bottomRight, all    | bottomStart, bottomRight, all  |
    fn precedence(target: Corner, direction: LayoutDirection) -> impl Iterator<Item = CornerSlot> {
        let alias = direction
            .logical_edge(target.horizontal_edge())
            .map(|side| CornerSlot::alias(target, side));
        [alias, Some(CornerSlot::from(target)), Some(CornerSlot::All)]
            .into_iter()
            .flatten()
    }

    fn build<T>(mut resolve: impl FnMut(Corner) -> T) -> Corners<T> {
        Corners {
            top_left: resolve(Corner::TopLeft),
            top_right: resolve(Corner::TopRight),
            bottom_left: resolve(Corner::BottomLeft),
            bottom_right: resolve(Corner::BottomRight),
        }
    }
}

/// Sparse per-corner input: any subset of the slots may be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CascadedCorners<T> {
    /// Top-left corner only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_left: Option<T>,
    /// Top-right corner only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_right: Option<T>,
    /// Bottom-left corner only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_left: Option<T>,
    /// Bottom-right corner only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_right: Option<T>,
    /// Top corner on the inline-start side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_start: Option<T>,
    /// Top corner on the inline-end side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_end: Option<T>,
    /// Bottom corner on the inline-start side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_start: Option<T>,
    /// Bottom corner on the inline-end side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_end: Option<T>,
    /// Every corner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all: Option<T>,
}

impl<T> Default for CascadedCorners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CascadedCorners<T> {
    /// A set with no slot specified.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            top_left: None,
            top_right: None,
            bottom_left: None,
            bottom_right: None,
            top_start: None,
            top_end: None,
            bottom_start: None,
            bottom_end: None,
            all: None,
        }
    }

    /// A set with only `all` specified.
    #[must_use]
    pub fn all(value: T) -> Self {
        Self {
            all: Some(value),
            ..Self::new()
        }
    }

    /// Return the set with `slot` specified as `value`.
    #[must_use]
    pub fn with(mut self, slot: CornerSlot, value: T) -> Self {
        *self.slot_mut(slot) = Some(value);
        self
    }

    /// Mutable access to the storage behind `slot`.
    pub fn slot_mut(&mut self, slot: CornerSlot) -> &mut Option<T> {
        match slot {
            CornerSlot::All => &mut self.all,
            CornerSlot::TopLeft => &mut self.top_left,
            CornerSlot::TopRight => &mut self.top_right,
            CornerSlot::BottomLeft => &mut self.bottom_left,
            CornerSlot::BottomRight => &mut self.bottom_right,
            CornerSlot::TopStart => &mut self.top_start,
            CornerSlot::TopEnd => &mut self.top_end,
            CornerSlot::BottomStart => &mut self.bottom_start,
            CornerSlot::BottomEnd => &mut self.bottom_end,
        }
    }

    /// Slots that hold a value, in declaration order.
    pub fn specified(&self) -> impl Iterator<Item = CornerSlot> + '_ {
        CornerSlot::iter().filter(|&slot| self.slot(slot).is_some())
    }

    /// Whether no slot is specified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specified().next().is_none()
    }
}

impl<T> Cascade for CascadedCorners<T> {
    type Topology = CornerTopology;
    type Value = T;

    fn slot(&self, slot: CornerSlot) -> Option<&T> {
        match slot {
            CornerSlot::All => self.all.as_ref(),
            CornerSlot::TopLeft => self.top_left.as_ref(),
            CornerSlot::TopRight => self.top_right.as_ref(),
            CornerSlot::BottomLeft => self.bottom_left.as_ref(),
            CornerSlot::BottomRight => self.bottom_right.as_ref(),
            CornerSlot::TopStart => self.top_start.as_ref(),
            CornerSlot::TopEnd => self.top_end.as_ref(),
            CornerSlot::BottomStart => self.bottom_start.as_ref(),
            CornerSlot::BottomEnd => self.bottom_end.as_ref(),
        }
    }
}

/// One resolved value per physical corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Corners<T> {
    /// Top-left corner value.
    pub top_left: T,
    /// Top-right corner value.
    pub top_right: T,
    /// Bottom-left corner value.
    pub bottom_left: T,
    /// Bottom-right corner value.
    pub bottom_right: T,
}

impl<T> Corners<T> {
    /// The same value on every corner.
    #[must_use]
    pub fn splat(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            top_left: value.clone(),
            top_right: value.clone(),
            bottom_left: value.clone(),
            bottom_right: value,
        }
    }

    /// Value on `corner`.
    #[must_use]
    pub const fn get(&self, corner: Corner) -> &T {
        match corner {
            Corner::TopLeft => &self.top_left,
            Corner::TopRight => &self.top_right,
            Corner::BottomLeft => &self.bottom_left,
            Corner::BottomRight => &self.bottom_right,
        }
    }

    /// Apply `f` to every corner.
    #[must_use]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Corners<U> {
        Corners {
            top_left: f(self.top_left),
            top_right: f(self.top_right),
            bottom_left: f(self.bottom_left),
            bottom_right: f(self.bottom_right),
        }
    }

    /// `(corner, value)` pairs in top-left, top-right, bottom-left, bottom-right order.
    pub fn iter(&self) -> impl Iterator<Item = (Corner, &T)> {
        Corner::iter().map(move |corner| (corner, self.get(corner)))
    }

    /// Whether all four corners carry the same value.
    #[must_use]
    pub fn is_uniform(&self) -> bool
    where
        T: PartialEq,
    {
        self.top_left == self.top_right
            && self.top_left == self.bottom_left
            && self.top_left == self.bottom_right
    }
}
