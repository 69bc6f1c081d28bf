//! Render `tracing` events into concise logfmt records.
//!
//! The `message` field becomes the record's message; every other field is
//! kept as a `key=value` pair in recording order.

use std::fmt::{Debug, Display, Formatter, Result as FmtResult, Write};

use tracing::{
    Event, Level,
    field::{Field, Visit},
};

/// Level, target, message and fields extracted from a tracing event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLog {
    /// Severity of the event.
    pub level: Level,
    /// Event target (typically the module path).
    pub target: String,
    /// The `message` field, or the rendered fields when there is none.
    pub message: String,
    /// Non-message fields as `(name, value)` pairs.
    pub fields: Vec<(String, String)>,
}

impl RenderedLog {
    /// Value of the field called `name`, if recorded.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

impl Display for RenderedLog {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "level={} target={} msg={:?}", self.level, self.target, self.message)?;
        for (k, v) in &self.fields {
            write!(f, " {k}={v}")?;
        }
        Ok(())
    }
}

/// Collects the message and fields of one event.
#[derive(Default)]
struct FieldVisitor {
    /// Captured `message` field, if present.
    msg: Option<String>,
    /// Remaining fields.
    fields: Vec<(String, String)>,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.msg = Some(value.to_string());
        } else {
            self.fields
                .push((field.name().to_string(), format!("{value:?}")));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        if field.name() == "message" {
            self.msg = Some(format!("{value:?}"));
        } else {
            self.fields
                .push((field.name().to_string(), format!("{value:?}")));
        }
    }
}

/// Extract a [`RenderedLog`] from a tracing event.
///
/// Events without a `message` field use their `key=value` pairs as message.
pub fn render_event(event: &Event<'_>) -> RenderedLog {
    let meta = event.metadata();
    let mut vis = FieldVisitor::default();
    event.record(&mut vis);
    let message = vis.msg.unwrap_or_else(|| {
        let mut out = String::new();
        for (k, v) in &vis.fields {
            let _ignored = write!(&mut out, "{k}={v} ");
        }
        out.trim_end().to_string()
    });
    RenderedLog {
        level: *meta.level(),
        target: meta.target().to_string(),
        message,
        fields: vis.fields,
    }
}
