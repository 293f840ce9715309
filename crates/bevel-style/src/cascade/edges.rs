//! Edge topology: border widths and colors.
//!
//! [§ 4.4 Flow-Relative Borders](https://www.w3.org/TR/css-logical-1/#border-properties)

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use super::{Cascade, Topology};
use crate::direction::{LayoutDirection, LogicalEdge, PhysicalEdge};

/// The nine slots an edge property can be specified through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum EdgeSlot {
    /// Every edge.
    All,
    /// Left and right.
    Horizontal,
    /// Top and bottom.
    Vertical,
    /// The left edge only.
    Left,
    /// The top edge only.
    Top,
    /// The right edge only.
    Right,
    /// The bottom edge only.
    Bottom,
    /// The inline-start edge; left or right depending on direction.
    Start,
    /// The inline-end edge; right or left depending on direction.
    End,
}

impl From<PhysicalEdge> for EdgeSlot {
    fn from(edge: PhysicalEdge) -> Self {
        match edge {
            PhysicalEdge::Left => Self::Left,
            PhysicalEdge::Top => Self::Top,
            PhysicalEdge::Right => Self::Right,
            PhysicalEdge::Bottom => Self::Bottom,
        }
    }
}

impl From<LogicalEdge> for EdgeSlot {
    fn from(edge: LogicalEdge) -> Self {
        match edge {
            LogicalEdge::Start => Self::Start,
            LogicalEdge::End => Self::End,
        }
    }
}

/// Four physical edges, each resolved on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeTopology;

impl Topology for EdgeTopology {
    type Slot = EdgeSlot;
    type Target = PhysicalEdge;
    type Resolved<T> = Edges<T>;

    /// [§ 4.4](https://www.w3.org/TR/css-logical-1/#border-properties)
    ///
    /// physical edge → logical alias for this direction → axis group → all.
    ///
    /// | Edge   | ltr                              | rtl                              |
    /// |--------|----------------------------------|----------------------------------|
    /// | left   | left, start, horizontal, all     | left, end, horizontal, all       |
    /// | top    | top, vertical, all               | top, vertical, all               |
    /// | right  | right, end, horizontal, all      | right, start, horizontal, all    |
    /// | bottom | bottom, vertical, all            | bottom, vertical, all            |
    fn precedence(
        target: PhysicalEdge,
        direction: LayoutDirection,
    ) -> impl Iterator<Item = EdgeSlot> {
        let axis = if target.is_horizontal() {
            EdgeSlot::Horizontal
        } else {
            EdgeSlot::Vertical
        };
        [
            Some(EdgeSlot::from(target)),
            direction.logical_edge(target).map(EdgeSlot::from),
            Some(axis),
            Some(EdgeSlot::All),
        ]
        .into_iter()
        .flatten()
    }

    fn build<T>(mut resolve: impl FnMut(PhysicalEdge) -> T) -> Edges<T> {
        Edges {
            left: resolve(PhysicalEdge::Left),
            top: resolve(PhysicalEdge::Top),
            right: resolve(PhysicalEdge::Right),
            bottom: resolve(PhysicalEdge::Bottom),
        }
    }
}

/// Sparse per-edge input: any subset of the nine slots may be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CascadedEdges<T> {
    /// Left edge only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<T>,
    /// Top edge only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<T>,
    /// Right edge only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<T>,
    /// Bottom edge only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<T>,
    /// Inline-start edge, mapped by direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<T>,
    /// Inline-end edge, mapped by direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<T>,
    /// Left and right.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<T>,
    /// Top and bottom.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical: Option<T>,
    /// Every edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all: Option<T>,
}

impl<T> Default for CascadedEdges<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CascadedEdges<T> {
    /// A set with no slot specified.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            left: None,
            top: None,
            right: None,
            bottom: None,
            start: None,
            end: None,
            horizontal: None,
            vertical: None,
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
    pub fn with(mut self, slot: EdgeSlot, value: T) -> Self {
        *self.slot_mut(slot) = Some(value);
        self
    }

    /// Mutable access to the storage behind `slot`.
    pub fn slot_mut(&mut self, slot: EdgeSlot) -> &mut Option<T> {
        match slot {
            EdgeSlot::All => &mut self.all,
            EdgeSlot::Horizontal => &mut self.horizontal,
            EdgeSlot::Vertical => &mut self.vertical,
            EdgeSlot::Left => &mut self.left,
            EdgeSlot::Top => &mut self.top,
            EdgeSlot::Right => &mut self.right,
            EdgeSlot::Bottom => &mut self.bottom,
            EdgeSlot::Start => &mut self.start,
            EdgeSlot::End => &mut self.end,
        }
    }

    /// Slots that hold a value, in declaration order.
    pub fn specified(&self) -> impl Iterator<Item = EdgeSlot> + '_ {
        EdgeSlot::iter().filter(|&slot| self.slot(slot).is_some())
    }

    /// Whether no slot is specified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specified().next().is_none()
    }
}

impl<T> Cascade for CascadedEdges<T> {
    type Topology = EdgeTopology;
    type Value = T;

    fn slot(&self, slot: EdgeSlot) -> Option<&T> {
        match slot {
            EdgeSlot::All => self.all.as_ref(),
            EdgeSlot::Horizontal => self.horizontal.as_ref(),
            EdgeSlot::Vertical => self.vertical.as_ref(),
            EdgeSlot::Left => self.left.as_ref(),
            EdgeSlot::Top => self.top.as_ref(),
            EdgeSlot::Right => self.right.as_ref(),
            EdgeSlot::Bottom => self.bottom.as_ref(),
            EdgeSlot::Start => self.start.as_ref(),
            EdgeSlot::End => self.end.as_ref(),
        }
    }
}

/// One resolved value per physical edge.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Edges<T> {
    /// Left edge value.
    pub left: T,
    /// Top edge value.
    pub top: T,
    /// Right edge value.
    pub right: T,
    /// Bottom edge value.
    pub bottom: T,
}

impl<T> Edges<T> {
    /// The same value on every edge.
    #[must_use]
    pub fn splat(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            left: value.clone(),
            top: value.clone(),
            right: value.clone(),
            bottom: value,
        }
    }

    /// Value on `edge`.
    #[must_use]
    pub const fn get(&self, edge: PhysicalEdge) -> &T {
        match edge {
            PhysicalEdge::Left => &self.left,
            PhysicalEdge::Top => &self.top,
            PhysicalEdge::Right => &self.right,
            PhysicalEdge::Bottom => &self.bottom,
        }
    }

    /// Apply `f` to every edge.
    #[must_use]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Edges<U> {
        Edges {
            left: f(self.left),
            top: f(self.top),
            right: f(self.right),
            bottom: f(self.bottom),
        }
    }

    /// `(edge, value)` pairs in left, top, right, bottom order.
    pub fn iter(&self) -> impl Iterator<Item = (PhysicalEdge, &T)> {
        PhysicalEdge::iter().map(move |edge| (edge, self.get(edge)))
    }

    /// Whether all four edges carry the same value.
    ///
    /// Paint uses this to stroke a single path instead of four segments.
    #[must_use]
    pub fn is_uniform(&self) -> bool
    where
        T: PartialEq,
    {
        self.left == self.top && self.left == self.right && self.left == self.bottom
    }
}
