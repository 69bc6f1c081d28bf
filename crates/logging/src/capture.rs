//! Capture tracing events into memory.
//!
//! [`capture`] returns a layer and a handle sharing one buffer. Install the
//! layer in a subscriber; read what was logged through the handle. Used by
//! tests that assert on warnings, and by tools that want to echo diagnostics
//! alongside their results.

use std::{mem, sync::Arc};

use parking_lot::Mutex;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::fmt::{RenderedLog, render_event};

/// Shared buffer of rendered events.
type Buffer = Arc<Mutex<Vec<RenderedLog>>>;

/// Tracing layer that records every event it sees.
#[derive(Debug, Clone)]
pub struct CaptureLayer {
    /// Destination buffer.
    buf: Buffer,
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.buf.lock().push(render_event(event));
    }
}

/// Read side of a [`CaptureLayer`].
#[derive(Debug, Clone)]
pub struct CapturedLogs {
    /// Buffer shared with the layer.
    buf: Buffer,
}

impl CapturedLogs {
    /// Copy of everything captured so far.
    pub fn snapshot(&self) -> Vec<RenderedLog> {
        self.buf.lock().clone()
    }

    /// Remove and return everything captured so far.
    pub fn take(&self) -> Vec<RenderedLog> {
        mem::take(&mut *self.buf.lock())
    }

    /// Discard everything captured so far.
    pub fn clear(&self) {
        self.buf.lock().clear();
    }

    /// Captured events at exactly `level`.
    pub fn at_level(&self, level: Level) -> Vec<RenderedLog> {
        self.buf
            .lock()
            .iter()
            .filter(|r| r.level == level)
            .cloned()
            .collect()
    }

    /// Whether any captured message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.buf.lock().iter().any(|r| r.message.contains(needle))
    }
}

/// Create a capture layer and its read handle.
pub fn capture() -> (CaptureLayer, CapturedLogs) {
    let buf = Buffer::default();
    (
        CaptureLayer { buf: buf.clone() },
        CapturedLogs { buf },
    )
}
