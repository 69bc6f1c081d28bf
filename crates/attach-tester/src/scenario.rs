//! Scenario files: a parameter set, a window size and the space to place it in.
//!
//! Scenarios are written in RON. Optional values may be given bare
//! (`attach_rect: (x: 0, y: 0, w: 10, h: 10)`), and rules are spelled out
//! field by field:
//!
//! ```ron
//! (
//!     window: (width: 40, height: 30),
//!     attach_rect: (x: 100, y: 100, w: 50, h: 20),
//!     primary: [(axis: Y, rect: Max, window: Min)],
//!     secondary: [(axis: X, rect: Min, window: Min, flip_if_rtl: true)],
//!     bounds: (x: 0, y: 0, w: 800, h: 600),
//! )
//! ```

use std::{fs, path::Path};

use attach::{AttachParams, AttachRule, Border, Monitor, Point, Rect, Size, WindowTypeHint};
use ron::{Options, extensions::Extensions};
use serde::Deserialize;

use crate::error::{Error, Result};

/// One positioning problem.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Optional label shown in the output.
    #[serde(default)]
    pub name: Option<String>,
    /// Size of the window being positioned.
    pub window: Size,
    /// Attachment rectangle, relative to `attach_origin`.
    #[serde(default)]
    pub attach_rect: Option<Rect>,
    /// Origin of the attachment rectangle's coordinate space.
    #[serde(default)]
    pub attach_origin: Option<Point>,
    /// Space kept around the attachment rectangle.
    #[serde(default)]
    pub attach_margin: Option<Border>,
    /// Space kept around the window.
    #[serde(default)]
    pub window_margin: Option<Border>,
    /// Window padding, carried for completeness.
    #[serde(default)]
    pub window_padding: Option<Border>,
    /// Extra displacement of the window.
    #[serde(default)]
    pub window_offset: Option<Point>,
    /// Window type hint.
    #[serde(default)]
    pub window_type_hint: WindowTypeHint,
    /// Right-to-left text direction.
    #[serde(default)]
    pub right_to_left: bool,
    /// Primary rules in priority order.
    #[serde(default)]
    pub primary: Vec<AttachRule>,
    /// Secondary rules in priority order.
    #[serde(default)]
    pub secondary: Vec<AttachRule>,
    /// Bounds to keep the window inside. Ignored when `monitors` is set.
    #[serde(default)]
    pub bounds: Option<Rect>,
    /// Monitor layout; when present the window is moved on a virtual screen.
    #[serde(default)]
    pub monitors: Vec<Monitor>,
}

impl Scenario {
    /// Parse a scenario from RON text.
    pub fn from_ron(text: &str) -> ron::error::SpannedResult<Self> {
        Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .with_default_extension(Extensions::UNWRAP_NEWTYPES)
            .from_str(text)
    }

    /// Read and parse the scenario file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&text).map_err(|err| Error::Scenario {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Build the parameter set described by the scenario.
    pub fn params(&self) -> AttachParams {
        let mut params = AttachParams::new();
        params
            .set_attach_rect(self.attach_rect)
            .set_attach_origin(self.attach_origin)
            .set_attach_margin(self.attach_margin)
            .set_window_margin(self.window_margin)
            .set_window_padding(self.window_padding)
            .set_window_offset(self.window_offset)
            .set_window_type_hint(self.window_type_hint)
            .set_right_to_left(self.right_to_left)
            .add_primary_rules(self.primary.iter().copied())
            .add_secondary_rules(self.secondary.iter().copied());
        params
    }
}
