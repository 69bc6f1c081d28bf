//! The parameter set describing how a window attaches to a rectangle.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    geom::{Border, Point, Rect},
    rule::AttachRule,
    window::PositionReport,
};

/// Hint describing the kind of window being positioned.
///
/// Positioning never reads it; it travels with the parameters so that window
/// backends can pick an appropriate window type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowTypeHint {
    /// Normal toplevel window.
    #[default]
    Normal,
    /// Dialog window.
    Dialog,
    /// Torn-off menu.
    Menu,
    /// Torn-off toolbar.
    Toolbar,
    /// Startup splash screen.
    Splashscreen,
    /// Utility window such as a palette.
    Utility,
    /// Dock or panel.
    Dock,
    /// Desktop background.
    Desktop,
    /// Menu dropped down from a menubar.
    DropdownMenu,
    /// Context menu.
    PopupMenu,
    /// Tooltip.
    Tooltip,
    /// Notification bubble.
    Notification,
    /// Combo box popup.
    Combo,
    /// Drag-and-drop icon.
    Dnd,
}

/// Shared function invoked once the final window position is known.
type CallbackFn = dyn Fn(&AttachParams, &PositionReport) + Send + Sync;

/// Handler invoked after a window has been moved using [`AttachParams`].
///
/// The handler owns whatever state the closure captures. Copies of the
/// parameter set share the handler; its captured state is dropped exactly
/// once, when the last parameter set holding it is dropped or replaces it.
#[derive(Clone)]
pub struct PositionCallback {
    /// The shared closure.
    func: Arc<CallbackFn>,
}

impl PositionCallback {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&AttachParams, &PositionReport) + Send + Sync + 'static,
    {
        Self { func: Arc::new(f) }
    }

    /// Invoke the handler.
    pub fn call(&self, params: &AttachParams, report: &PositionReport) {
        (self.func)(params, report);
    }

    /// Whether two handles refer to the same closure.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl Debug for PositionCallback {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PositionCallback")
            .field("holders", &Arc::strong_count(&self.func))
            .finish()
    }
}

/// Everything needed to position a window relative to an attachment rectangle.
///
/// Built empty, filled in through setters and rule appenders, then read by
/// [`choose_position`](crate::choose_position). Cloning deep-copies the rule
/// lists and shares the position callback.
#[derive(Clone, Debug, Default)]
pub struct AttachParams {
    /// Root origin of the coordinate system `attach_rect` is expressed in.
    attach_origin: Point,
    /// Rectangle to attach to; positioning is impossible without it.
    attach_rect: Option<Rect>,
    /// Space to leave around `attach_rect`.
    attach_margin: Border,
    /// Space to leave around the window.
    window_margin: Border,
    /// Space between the window and its contents.
    window_padding: Border,
    /// Unconditional displacement added to the computed position.
    window_offset: Point,
    /// Passed through to window backends.
    window_type_hint: WindowTypeHint,
    /// Text direction; enables mirroring of flippable rules.
    is_right_to_left: bool,
    /// Rules tried first, in insertion order.
    primary_rules: Vec<AttachRule>,
    /// Rules tried for the complementary axis, in insertion order.
    secondary_rules: Vec<AttachRule>,
    /// Called after a window has been moved.
    position_callback: Option<PositionCallback>,
}

impl AttachParams {
    /// Create an empty parameter set with no attachment rectangle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root origin of the attachment rectangle's coordinate system.
    /// `None` resets it to zero.
    pub fn set_attach_origin(&mut self, origin: Option<Point>) -> &mut Self {
        self.attach_origin = origin.unwrap_or_default();
        self
    }

    /// Set the rectangle the window is positioned against. `None` clears it.
    pub fn set_attach_rect(&mut self, rect: Option<Rect>) -> &mut Self {
        self.attach_rect = rect;
        self
    }

    /// Set the space to leave around the attachment rectangle.
    pub fn set_attach_margin(&mut self, margin: Option<Border>) -> &mut Self {
        self.attach_margin = margin.unwrap_or_default();
        self
    }

    /// Set the space to leave around the window.
    pub fn set_window_margin(&mut self, margin: Option<Border>) -> &mut Self {
        self.window_margin = margin.unwrap_or_default();
        self
    }

    /// Set the space between the window and its contents.
    pub fn set_window_padding(&mut self, padding: Option<Border>) -> &mut Self {
        self.window_padding = padding.unwrap_or_default();
        self
    }

    /// Set the displacement applied to every computed position.
    pub fn set_window_offset(&mut self, offset: Option<Point>) -> &mut Self {
        self.window_offset = offset.unwrap_or_default();
        self
    }

    /// Set the window type hint.
    pub fn set_window_type_hint(&mut self, hint: WindowTypeHint) -> &mut Self {
        self.window_type_hint = hint;
        self
    }

    /// Set the text direction.
    pub fn set_right_to_left(&mut self, is_right_to_left: bool) -> &mut Self {
        self.is_right_to_left = is_right_to_left;
        self
    }

    /// Append primary rules.
    ///
    /// Rules are tried in the order they were added. For each primary rule
    /// that can be satisfied, the secondary rules are searched for one that
    /// is satisfiable and constrains the other axis.
    pub fn add_primary_rules<I>(&mut self, rules: I) -> &mut Self
    where
        I: IntoIterator<Item = AttachRule>,
    {
        self.primary_rules.extend(rules);
        self
    }

    /// Append secondary rules. See [`add_primary_rules`](Self::add_primary_rules).
    pub fn add_secondary_rules<I>(&mut self, rules: I) -> &mut Self
    where
        I: IntoIterator<Item = AttachRule>,
    {
        self.secondary_rules.extend(rules);
        self
    }

    /// Install, replace, or remove the position callback.
    ///
    /// The previous handler is released here unless another copy of the
    /// parameters still shares it.
    pub fn set_position_callback(&mut self, callback: Option<PositionCallback>) -> &mut Self {
        if let (Some(old), Some(new)) = (&self.position_callback, &callback)
            && !old.ptr_eq(new)
        {
            debug!("replacing position callback");
        }
        self.position_callback = callback;
        self
    }

    /// Root origin of the attachment rectangle's coordinate system.
    #[must_use]
    pub fn attach_origin(&self) -> Point {
        self.attach_origin
    }

    /// The attachment rectangle, if set.
    #[must_use]
    pub fn attach_rect(&self) -> Option<Rect> {
        self.attach_rect
    }

    /// Centre of the attachment rectangle in root coordinates.
    #[must_use]
    pub fn attach_center(&self) -> Option<Point> {
        self.attach_rect.map(|rect| {
            let center = rect.center();
            Point::new(self.attach_origin.x + center.x, self.attach_origin.y + center.y)
        })
    }

    /// Whether an attachment rectangle has been set.
    #[must_use]
    pub fn has_attach_rect(&self) -> bool {
        self.attach_rect.is_some()
    }

    /// Space around the attachment rectangle.
    #[must_use]
    pub fn attach_margin(&self) -> Border {
        self.attach_margin
    }

    /// Space around the window.
    #[must_use]
    pub fn window_margin(&self) -> Border {
        self.window_margin
    }

    /// Space between the window and its contents.
    #[must_use]
    pub fn window_padding(&self) -> Border {
        self.window_padding
    }

    /// Displacement applied to every computed position.
    #[must_use]
    pub fn window_offset(&self) -> Point {
        self.window_offset
    }

    /// The window type hint.
    #[must_use]
    pub fn window_type_hint(&self) -> WindowTypeHint {
        self.window_type_hint
    }

    /// Whether the text direction is right-to-left.
    #[must_use]
    pub fn is_right_to_left(&self) -> bool {
        self.is_right_to_left
    }

    /// Primary rules in insertion order.
    #[must_use]
    pub fn primary_rules(&self) -> &[AttachRule] {
        &self.primary_rules
    }

    /// Secondary rules in insertion order.
    #[must_use]
    pub fn secondary_rules(&self) -> &[AttachRule] {
        &self.secondary_rules
    }

    /// The installed position callback.
    #[must_use]
    pub fn position_callback(&self) -> Option<&PositionCallback> {
        self.position_callback.as_ref()
    }
}
