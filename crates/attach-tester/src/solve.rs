//! Implementation for the `solve` subcommand.

use std::{
    io::{self, Write},
    path::Path,
};

use attach::{
    Placement, Point, PositionCallback, Rect, VirtualScreen, WindowBackend, choose_position,
    move_using_attach_params,
};
use logging::capture::CapturedLogs;
use serde::Serialize;
use tracing::{Level, info};

use crate::{cli::SolveArgs, error::Result, scenario::Scenario};

/// Outcome of one scenario.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    /// Scenario file.
    pub path: String,
    /// Scenario label, if any.
    pub name: Option<String>,
    /// Bounds the window was kept inside, if any.
    pub bounds: Option<Rect>,
    /// Chosen placement; `None` when no rule pair exists.
    pub placement: Option<Placement>,
    /// Warnings logged while solving.
    pub warnings: Vec<String>,
}

/// Solve every scenario and print the results.
pub fn run(args: &SolveArgs, logs: &CapturedLogs) -> Result<()> {
    let mut outcomes = Vec::with_capacity(args.scenarios.len());
    for path in &args.scenarios {
        let scenario = Scenario::load(path)?;
        logs.clear();
        let mut outcome = solve(path, &scenario)?;
        outcome.warnings = logs
            .at_level(Level::WARN)
            .into_iter()
            .map(|r| r.to_string())
            .collect();
        outcomes.push(outcome);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &outcomes)?;
        writeln!(out)?;
    } else {
        for outcome in &outcomes {
            write_text(&mut out, outcome)?;
        }
    }
    Ok(())
}

/// Solve one scenario.
///
/// With monitors the window is created on a [`VirtualScreen`] and moved
/// there; otherwise the chooser runs directly against `bounds`.
pub fn solve(path: &Path, scenario: &Scenario) -> Result<Outcome> {
    let mut params = scenario.params();
    let (bounds, placement) = if scenario.monitors.is_empty() {
        let placement = choose_position(
            &params,
            scenario.window.width,
            scenario.window.height,
            scenario.bounds.as_ref(),
        )?;
        (scenario.bounds, placement)
    } else {
        let screen = VirtualScreen::new(scenario.monitors.iter().copied());
        let window = screen.add_window(scenario.window, Point::ZERO);
        params.set_position_callback(Some(PositionCallback::new(|_, report| {
            info!(
                window = report.window,
                position = %report.position,
                offset = %report.offset,
                "window positioned"
            );
        })));
        let placement = move_using_attach_params(&screen, window, Some(&params))?;
        let bounds = params.attach_center().map(|c| screen.work_area_at(c));
        (bounds, placement)
    };
    Ok(Outcome {
        path: path.display().to_string(),
        name: scenario.name.clone(),
        bounds,
        placement,
        warnings: Vec::new(),
    })
}

/// Human-readable rendering of one outcome.
fn write_text(out: &mut impl Write, outcome: &Outcome) -> io::Result<()> {
    match &outcome.name {
        Some(name) => writeln!(out, "{} ({name})", outcome.path)?,
        None => writeln!(out, "{}", outcome.path)?,
    }
    if let Some(bounds) = outcome.bounds {
        writeln!(out, "  bounds:    {bounds}")?;
    }
    match &outcome.placement {
        Some(p) => {
            writeln!(out, "  position:  {}", p.position)?;
            if p.was_clamped() {
                writeln!(out, "  offset:    {}", p.offset)?;
            }
            writeln!(out, "  primary:   {}", p.primary)?;
            writeln!(out, "  secondary: {}", p.secondary)?;
        }
        None => writeln!(out, "  no non-conflicting rule pair")?,
    }
    for w in &outcome.warnings {
        writeln!(out, "  warning:   {w}")?;
    }
    Ok(())
}
