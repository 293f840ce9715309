//! Cascade resolution for per-edge and per-corner border properties.
//!
//! [CSS Logical Properties § 4 Flow-Relative Box Model Properties](https://www.w3.org/TR/css-logical-1/#box)
//!
//! A property may be specified at several specificities at once: a blanket
//! value for every edge, a value per axis, per physical edge, and per logical
//! edge. Each output slot of a [`Topology`] walks its own ordered list of
//! applicable input slots and takes the first one that is set, falling back to
//! a caller-supplied default. The walk is written once, in [`Cascade`], and
//! shared by every property group.

mod corners;
mod edges;
mod scalar;

use std::fmt;

use crate::direction::LayoutDirection;

pub use corners::{CascadedCorners, Corner, CornerSlot, CornerTopology, Corners};
pub use edges::{CascadedEdges, EdgeSlot, EdgeTopology, Edges};
pub use scalar::{CascadedScalar, ScalarSlot, ScalarTarget, ScalarTopology};

/// The shape a cascaded property is resolved over.
///
/// A topology names its input slots, its output targets, and for each target
/// the order in which slots are consulted under a given direction.
pub trait Topology {
    /// Name of one optional input slot (`left`, `start`, `all`, ...).
    type Slot: Copy + fmt::Debug + fmt::Display;
    /// Name of one output slot (an edge, a corner, or the single scalar).
    type Target: Copy + fmt::Debug + fmt::Display;
    /// The fully-populated output, one `T` per target.
    type Resolved<T>;

    /// Applicable slots for `target`, most specific first.
    ///
    /// Slots that do not apply to `target` are never yielded.
    fn precedence(
        target: Self::Target,
        direction: LayoutDirection,
    ) -> impl Iterator<Item = Self::Slot>;

    /// Assemble a resolved value by computing every target once.
    fn build<T>(resolve: impl FnMut(Self::Target) -> T) -> Self::Resolved<T>;
}

/// Resolved output of a cascade carrying values of type `T`.
pub type ResolvedOf<C, T> = <<C as Cascade>::Topology as Topology>::Resolved<T>;

/// A sparse set of values, one optional value per slot of its topology.
pub trait Cascade {
    /// Topology the slots belong to.
    type Topology: Topology;
    /// Value held by each slot.
    type Value;

    /// Value stored in `slot`, if it was specified.
    fn slot(&self, slot: <Self::Topology as Topology>::Slot) -> Option<&Self::Value>;

    /// First specified slot in the precedence of `target`.
    fn winning_slot(
        &self,
        target: <Self::Topology as Topology>::Target,
        direction: LayoutDirection,
    ) -> Option<<Self::Topology as Topology>::Slot> {
        <Self::Topology as Topology>::precedence(target, direction)
            .find(|&slot| self.slot(slot).is_some())
    }

    /// Value that applies to `target`, or `None` when no applicable slot is set.
    fn lookup(
        &self,
        target: <Self::Topology as Topology>::Target,
        direction: LayoutDirection,
    ) -> Option<&Self::Value> {
        <Self::Topology as Topology>::precedence(target, direction)
            .find_map(|slot| self.slot(slot))
    }

    /// Walk every target and hand the found value (if any) to `finish`.
    ///
    /// This is the single resolution routine; [`Cascade::resolve`] is the
    /// common case of substituting a default.
    fn resolve_with<U>(
        &self,
        direction: LayoutDirection,
        mut finish: impl FnMut(Option<&Self::Value>) -> U,
    ) -> <Self::Topology as Topology>::Resolved<U> {
        <Self::Topology as Topology>::build(|target| {
            #[cfg(feature = "cascade-trace")]
            eprintln!(
                "[CASCADE] {target} ({direction}) <- {}",
                self.winning_slot(target, direction)
                    .map_or_else(|| "default".to_string(), |slot| slot.to_string())
            );
            finish(self.lookup(target, direction))
        })
    }

    /// Resolve every target, using `default` where nothing applies.
    fn resolve(
        &self,
        direction: LayoutDirection,
        default: Self::Value,
    ) -> <Self::Topology as Topology>::Resolved<Self::Value>
    where
        Self::Value: Clone,
    {
        self.resolve_with(direction, |found| found.cloned().unwrap_or_else(|| default.clone()))
    }
}

/// Resolve `cascade` for `direction`, falling back to `default`.
///
/// Never fails: an empty cascade yields `default` in every output slot.
#[must_use]
pub fn resolve<C>(
    cascade: &C,
    direction: LayoutDirection,
    default: C::Value,
) -> ResolvedOf<C, C::Value>
where
    C: Cascade,
    C::Value: Clone,
{
    cascade.resolve(direction, default)
}
