//! Border line styles
//!
//! [§ 4.2 'border-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// [§ 4.2 'border-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
///
/// The line styles a view border can be painted with. `none` and `hidden` are
/// expressed with a zero width rather than a style keyword.
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
pub enum BorderStyle {
    /// "A single line segment." The baseline style when nothing is specified.
    #[default]
    Solid,
    /// "A series of round dots."
    Dotted,
    /// "A series of square-ended dashes."
    Dashed,
}
