//! Text rendering of an [`Outcome`]: controls, grid, legend, summary.

use std::fmt::Write as _;

use crate::shell::Control;
use crate::{Outcome, Status};

pub fn glyph(status: Status) -> char {
    match status {
        Status::Benefit => '+',
        Status::Harm => 'x',
        Status::Unharmed => 'o',
        Status::Default => '.',
    }
}

/// Counts are shown to one decimal at most (controls step in tenths).
pub fn fmt_count(x: f64) -> String {
    let r = (x * 10.0).round() / 10.0 + 0.0;
    format!("{r}")
}

/// Value a control displays: benefit and harm show their clamped values.
pub fn shown_value(control: Control, outcome: &Outcome) -> f64 {
    match control {
        Control::Total => outcome.total,
        Control::Benefit => outcome.clamped_benefit,
        Control::Harm => outcome.clamped_harm,
    }
}

/// Upper end of the control's slider track.
pub fn slider_max(control: Control, outcome: &Outcome) -> f64 {
    match control {
        Control::Total => crate::GRID_CELLS as f64,
        Control::Benefit => outcome.total,
        Control::Harm => outcome.clamped_benefit,
    }
}

pub fn controls(outcome: &Outcome) -> String {
    let mut s = String::new();
    for c in Control::ALL {
        let _ = writeln!(
            s,
            "{:<17}{:>6} / {}",
            c.label(),
            fmt_count(shown_value(c, outcome)),
            fmt_count(slider_max(c, outcome)),
        );
    }
    s
}

pub fn grid(outcome: &Outcome) -> String {
    let mut s = String::new();
    for row in outcome.rows() {
        let line: Vec<String> = row.iter().map(|c| glyph(*c).to_string()).collect();
        s.push_str(&line.join(" "));
        s.push('\n');
    }
    s
}

pub fn legend() -> String {
    format!(
        "{} Benefit  {} Harm  {} No change",
        glyph(Status::Benefit),
        glyph(Status::Harm),
        glyph(Status::Unharmed)
    )
}

pub fn summary(outcome: &Outcome) -> String {
    format!(
        "Out of {} people, {} will benefit, {} will be harmed, and {} will experience no meaningful change.",
        fmt_count(outcome.total),
        fmt_count(outcome.clamped_benefit),
        fmt_count(outcome.clamped_harm),
        fmt_count(outcome.unaffected),
    )
}

/// Full widget: controls, grid, legend, summary.
pub fn render(outcome: &Outcome) -> String {
    format!(
        "{}\n{}\n{}\n\n{}\n",
        controls(outcome),
        grid(outcome),
        legend(),
        summary(outcome)
    )
}
