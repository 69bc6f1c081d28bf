//! Binding the chooser to real windows.
//!
//! A [`WindowBackend`] supplies window sizes and monitor work areas and moves
//! windows. [`move_using_attach_params`] ties everything together: it picks a
//! position for the window on the monitor under the attachment rectangle,
//! moves the window there, and reports the result to the position callback.

use serde::Serialize;
use tracing::debug;

use crate::{
    Error, Result,
    choose::{Placement, choose_position},
    geom::{Point, Rect, Size},
    params::AttachParams,
    rule::AttachRule,
};

mod virtual_screen;

pub use virtual_screen::{Monitor, VirtualScreen};

/// Identifier of a window known to a backend.
pub type WindowId = u32;

/// Windowing-system operations needed to position a window.
pub trait WindowBackend {
    /// Current size of `window`.
    fn window_size(&self, window: WindowId) -> Result<Size>;

    /// Work area (excluding panels and docks) of the monitor containing `point`.
    fn work_area_at(&self, point: Point) -> Rect;

    /// Move `window` so its origin is at `position`.
    fn move_window(&self, window: WindowId, position: Point) -> Result<()>;
}

/// What the position callback learns about a completed positioning pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PositionReport {
    /// The window that was moved.
    pub window: WindowId,
    /// Final position of the window.
    pub position: Point,
    /// Displacement applied to keep the window on-screen.
    pub offset: Point,
    /// Primary rule used for positioning.
    pub primary: AttachRule,
    /// Secondary rule used for positioning.
    pub secondary: AttachRule,
}

impl PositionReport {
    /// Report for `window` positioned by `placement`.
    #[must_use]
    pub fn new(window: WindowId, placement: &Placement) -> Self {
        Self {
            window,
            position: placement.position,
            offset: placement.offset,
            primary: placement.primary,
            secondary: placement.secondary,
        }
    }
}

/// Choose a position for `window`, bounded by the work area of the monitor
/// under the centre of the attachment rectangle.
pub fn choose_position_for_window<B>(
    params: &AttachParams,
    backend: &B,
    window: WindowId,
) -> Result<Option<Placement>>
where
    B: WindowBackend + ?Sized,
{
    let center = params.attach_center().ok_or(Error::MissingAttachRect)?;
    let bounds = backend.work_area_at(center);
    let size = backend.window_size(window)?;
    debug!(window, %center, %bounds, %size, "choosing position for window");
    choose_position(params, size.width, size.height, Some(&bounds))
}

/// Move `window` to the best position described by `params`.
///
/// Does nothing when `params` is absent or has no attachment rectangle. When
/// no rule pair exists the window stays where it is and no callback fires.
/// The reported offset is informational; the window is moved to the final
/// position.
pub fn move_using_attach_params<B>(
    backend: &B,
    window: WindowId,
    params: Option<&AttachParams>,
) -> Result<Option<Placement>>
where
    B: WindowBackend + ?Sized,
{
    let Some(params) = params.filter(|p| p.has_attach_rect()) else {
        debug!(window, "no attachment rectangle; leaving window in place");
        return Ok(None);
    };
    let Some(placement) = choose_position_for_window(params, backend, window)? else {
        debug!(window, "no position found; leaving window in place");
        return Ok(None);
    };
    backend.move_window(window, placement.position)?;
    if let Some(callback) = params.position_callback() {
        callback.call(params, &PositionReport::new(window, &placement));
    }
    Ok(Some(placement))
}
