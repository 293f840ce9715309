//! Border documents: the typed JSON form of [`CascadedBorders`].
//!
//! ```json
//! {
//!   "width":  { "all": 2, "top": 5 },
//!   "color":  { "start": "#ff0000", "horizontal": "blue" },
//!   "radius": { "topStart": 4, "all": 1 },
//!   "style":  { "all": "dashed" }
//! }
//! ```
//!
//! Every key is optional. Unknown keys are rejected rather than ignored, so a
//! misspelled slot surfaces as an error instead of a silently missing border.

use bevel_common::warning::warn_once;
use serde::Deserialize;
use serde::de::Error as _;

use crate::StyleError;
use crate::cascade::{Cascade, CascadedCorners, CascadedEdges, CascadedScalar, EdgeSlot};
use crate::metrics::{BorderDefaults, CascadedBorders};
use crate::values::{BorderStyle, ColorValue};

/// Serialized shape of a border document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BorderDocument {
    /// Border widths, in edge shape.
    pub width: CascadedEdges<f32>,
    /// Border colors, in edge shape.
    pub color: CascadedEdges<ColorValue>,
    /// Border radii, in corner shape.
    pub radius: CascadedCorners<f32>,
    /// Border style. Accepted in edge shape so per-edge keys are recognised
    /// and reported, but only `all` is honoured.
    pub style: CascadedEdges<BorderStyle>,
}

impl BorderDocument {
    /// Parse a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidDocument`] for malformed JSON, unknown
    /// keys, values of the wrong type (including unknown colors), and widths
    /// or radii too large to hold as a finite `f32`.
    pub fn from_json(text: &str) -> Result<Self, StyleError> {
        let document: Self = serde_json::from_str(text)?;
        document.check_finite()?;
        Ok(document)
    }

    /// JSON numbers beyond `f32::MAX` deserialise to infinity.
    fn check_finite(&self) -> Result<(), StyleError> {
        let widths = self
            .width
            .specified()
            .filter(|&slot| !self.width.slot(slot).is_some_and(|v| v.is_finite()))
            .map(|slot| format!("width.{slot}"));
        let radii = self
            .radius
            .specified()
            .filter(|&slot| !self.radius.slot(slot).is_some_and(|v| v.is_finite()))
            .map(|slot| format!("radius.{slot}"));

        match widths.chain(radii).next() {
            Some(key) => Err(StyleError::InvalidDocument(serde_json::Error::custom(
                format!("'{key}' is not a finite length"),
            ))),
            None => Ok(()),
        }
    }

    /// Convert into the cascade sets the resolver consumes.
    #[must_use]
    pub fn into_cascade(self) -> CascadedBorders {
        let Self {
            width,
            color,
            radius,
            style,
        } = self;

        // Border style has no per-edge topology; anything but `all` is dropped.
        for slot in style.specified().filter(|&slot| slot != EdgeSlot::All) {
            warn_once(
                "document",
                &format!("per-edge border style '{slot}' is not supported; only 'all' is used"),
            );
        }

        CascadedBorders {
            widths: width,
            colors: color,
            radii: radius,
            style: CascadedScalar { all: style.all },
        }
    }
}

impl CascadedBorders {
    /// Parse a border document straight into cascade sets.
    ///
    /// # Errors
    ///
    /// See [`BorderDocument::from_json`].
    pub fn from_json(text: &str) -> Result<Self, StyleError> {
        BorderDocument::from_json(text).map(BorderDocument::into_cascade)
    }
}

impl BorderDefaults {
    /// Parse resolver defaults from JSON text; omitted keys keep their
    /// standard values.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidDocument`] for malformed JSON or unknown keys.
    pub fn from_json(text: &str) -> Result<Self, StyleError> {
        Ok(serde_json::from_str(text)?)
    }
}
