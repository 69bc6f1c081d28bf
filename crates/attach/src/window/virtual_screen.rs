use std::collections::HashMap;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{WindowBackend, WindowId};
use crate::{
    Error, Result,
    geom::{Point, Rect, Size},
};

/// A display attached to a [`VirtualScreen`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monitor {
    /// Full extent of the monitor in root coordinates.
    pub geometry: Rect,
    /// Part of the monitor not covered by panels and docks.
    pub work_area: Rect,
}

impl Monitor {
    /// Monitor whose work area is its whole geometry.
    #[must_use]
    pub const fn new(geometry: Rect) -> Self {
        Self {
            geometry,
            work_area: geometry,
        }
    }

    /// Replace the work area.
    #[must_use]
    pub const fn with_work_area(mut self, work_area: Rect) -> Self {
        self.work_area = work_area;
        self
    }
}

/// A window tracked by a [`VirtualScreen`].
#[derive(Clone, Copy, Debug)]
struct VirtualWindow {
    /// Current size.
    size: Size,
    /// Current origin.
    position: Point,
}

/// Mutable state behind the screen's lock.
#[derive(Debug, Default)]
struct State {
    /// Windows keyed by id.
    windows: HashMap<WindowId, VirtualWindow>,
    /// Every move in the order it happened.
    moves: Vec<(WindowId, Point)>,
    /// Next id handed out by `add_window`.
    next_id: WindowId,
}

/// In-memory [`WindowBackend`] with a fixed monitor layout.
#[derive(Debug, Default)]
pub struct VirtualScreen {
    /// Monitors in lookup order.
    monitors: Vec<Monitor>,
    /// Windows and move log.
    state: Mutex<State>,
}

impl VirtualScreen {
    /// Create a screen with the given monitors.
    pub fn new(monitors: impl IntoIterator<Item = Monitor>) -> Self {
        Self {
            monitors: monitors.into_iter().collect(),
            state: Mutex::new(State {
                next_id: 1,
                ..State::default()
            }),
        }
    }

    /// Monitors in lookup order.
    pub fn monitors(&self) -> &[Monitor] {
        &self.monitors
    }

    /// Add a window of `size` at `position` and return its id.
    pub fn add_window(&self, size: Size, position: Point) -> WindowId {
        let mut st = self.state.lock();
        let id = st.next_id.max(1);
        st.next_id = id + 1;
        st.windows.insert(id, VirtualWindow { size, position });
        id
    }

    /// Current origin of `window`.
    pub fn position(&self, window: WindowId) -> Option<Point> {
        self.state.lock().windows.get(&window).map(|w| w.position)
    }

    /// All moves performed so far, oldest first.
    pub fn moves(&self) -> Vec<(WindowId, Point)> {
        self.state.lock().moves.clone()
    }

    /// Monitor that contains `point`, or the nearest one.
    pub fn monitor_at(&self, point: Point) -> Option<&Monitor> {
        self.monitors
            .iter()
            .find(|m| m.geometry.contains(point))
            .or_else(|| {
                debug!(%point, "no monitor contains point; using nearest");
                self.monitors
                    .iter()
                    .min_by_key(|m| m.geometry.distance_sq(point))
            })
    }
}

impl WindowBackend for VirtualScreen {
    fn window_size(&self, window: WindowId) -> Result<Size> {
        self.state
            .lock()
            .windows
            .get(&window)
            .map(|w| w.size)
            .ok_or(Error::UnknownWindow(window))
    }

    fn work_area_at(&self, point: Point) -> Rect {
        self.monitor_at(point)
            .map_or(Rect::new(0, 0, 0, 0), |m| m.work_area)
    }

    fn move_window(&self, window: WindowId, position: Point) -> Result<()> {
        let mut st = self.state.lock();
        let Some(w) = st.windows.get_mut(&window) else {
            return Err(Error::UnknownWindow(window));
        };
        w.position = position;
        st.moves.push((window, position));
        debug!(window, %position, "moved window");
        Ok(())
    }
}
