//! Cascaded border resolution for the Bevel resolver.
//!
//! # Scope
//!
//! This crate implements:
//! - **Layout direction** ([§ 2.1 'direction'](https://www.w3.org/TR/css-writing-modes-4/#direction))
//!   - Logical (start/end) to physical (left/right) edge mapping
//!
//! - **Border values** ([CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/))
//!   - Colors (hex, named colors)
//!   - Line styles (solid, dotted, dashed)
//!
//! - **Cascade resolution** ([CSS Logical Properties Level 1](https://www.w3.org/TR/css-logical-1/))
//!   - One generic resolver over edge, corner and scalar topologies
//!   - Precedence: physical edge, logical edge, axis group, all, default
//!
//! - **Border metrics** - widths, colors, radii and style resolved into one record
//!
//! - **Border documents** - the typed JSON input form
//!
//! # Not Implemented
//!
//! - Vertical writing modes (the inline axis is always horizontal)
//! - Per-edge border styles
//!
//! # Features
//!
//! - `cascade-trace` - print the winning slot of every resolved target to
//!   stderr. Its code path is only compiled with the feature on:
//!   `cargo test -p bevel-style --features cascade-trace`

/// Cascade resolution over edge, corner and scalar topologies.
pub mod cascade;
/// Layout direction per [§ 2.1 'direction'](https://www.w3.org/TR/css-writing-modes-4/#direction).
pub mod direction;
/// Typed JSON border documents.
pub mod document;
/// Errors raised while building typed input.
pub mod error;
/// Resolved border metrics.
pub mod metrics;
/// Border values per [CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/).
pub mod values;

// Re-exports for convenience
pub use cascade::{
    Cascade, CascadedCorners, CascadedEdges, CascadedScalar, Corner, CornerSlot, Corners, EdgeSlot,
    Edges, Topology, resolve,
};
pub use direction::{LayoutDirection, LogicalEdge, PhysicalEdge};
pub use document::BorderDocument;
pub use error::StyleError;
pub use metrics::{BorderDefaults, BorderMetrics, CascadedBorders, resolve_metrics};
pub use values::{BorderStyle, ColorValue};
