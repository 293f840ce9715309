//! Scalar topology: border style.
//!
//! Style carries no per-edge split; its only slot is `all` and it resolves to a
//! single value.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use super::{Cascade, Topology};
use crate::direction::LayoutDirection;

/// The single slot of a scalar property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "camelCase")]
pub enum ScalarSlot {
    /// The whole box.
    All,
}

/// The single output of a scalar property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "camelCase")]
pub enum ScalarTarget {
    /// The resolved value.
    Value,
}

/// One output slot, independent of direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarTopology;

impl Topology for ScalarTopology {
    type Slot = ScalarSlot;
    type Target = ScalarTarget;
    type Resolved<T> = T;

    fn precedence(
        _target: ScalarTarget,
        _direction: LayoutDirection,
    ) -> impl Iterator<Item = ScalarSlot> {
        std::iter::once(ScalarSlot::All)
    }

    fn build<T>(mut resolve: impl FnMut(ScalarTarget) -> T) -> T {
        resolve(ScalarTarget::Value)
    }
}

/// Sparse scalar input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CascadedScalar<T> {
    /// The value for the whole box.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all: Option<T>,
}

impl<T> Default for CascadedScalar<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CascadedScalar<T> {
    /// Unspecified.
    #[must_use]
    pub const fn new() -> Self {
        Self { all: None }
    }

    /// Specified as `value`.
    #[must_use]
    pub const fn all(value: T) -> Self {
        Self { all: Some(value) }
    }

    /// Whether the value is unspecified.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.all.is_none()
    }
}

impl<T> Cascade for CascadedScalar<T> {
    type Topology = ScalarTopology;
    type Value = T;

    fn slot(&self, slot: ScalarSlot) -> Option<&T> {
        match slot {
            ScalarSlot::All => self.all.as_ref(),
        }
    }
}
