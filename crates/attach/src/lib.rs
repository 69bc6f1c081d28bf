//! attach: positioning floating windows against an attachment rectangle.
//!
//! A popup, menu or tooltip describes where it wants to appear as two
//! prioritised lists of [`AttachRule`]s: *primary* rules and *secondary*
//! rules. Each rule ties a point of the attachment rectangle to a point of
//! the window along one axis. [`choose_position`] picks the best
//! non-conflicting pair of rules (one per axis) that keeps the window inside
//! the available bounds, then clamps the result on-screen and reports the
//! displacement.
//!
//! [`move_using_attach_params`] binds the chooser to a [`WindowBackend`],
//! which supplies window sizes and monitor work areas and performs the move.
//! [`VirtualScreen`] is an in-memory backend used by tests and tooling.
#![warn(missing_docs)]

mod choose;
mod error;
mod eval;
mod geom;
mod params;
mod rule;
mod window;

pub use choose::{Placement, choose_position};
pub use error::{Error, Result};
pub use eval::{Evaluation, evaluate};
pub use geom::{Border, Point, Rect, Size};
pub use params::{AttachParams, PositionCallback, WindowTypeHint};
pub use rule::{Anchor, AttachRule, Axis, bits};
pub use window::{
    Monitor, PositionReport, VirtualScreen, WindowBackend, WindowId, choose_position_for_window,
    move_using_attach_params,
};
