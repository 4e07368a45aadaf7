//! Line-driven session: one line in, one input event, one full re-render.
//!
//! ```text
//! total 40
//! benefit 12.5
//! harm 3
//! reset
//! show
//! quit
//! ```

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::SessionError;
use crate::shell::{Control, Inputs, view};
use crate::{ClampPolicy, Outcome};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Set(Control, f64),
    Reset,
    Show,
    Quit,
}

impl FromStr for Command {
    type Err = SessionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let head = words.next().ok_or(SessionError::Empty)?;

        let cmd = if let Some(control) = Control::from_name(head) {
            let raw = words.next().ok_or(SessionError::MissingValue(control.name()))?;
            let value: f64 = raw.parse().map_err(|_| SessionError::NotANumber {
                control: control.name(),
                value: raw.to_string(),
            })?;
            if !value.is_finite() {
                return Err(SessionError::NonFinite { control: control.name() });
            }
            Command::Set(control, value)
        } else {
            match head.to_ascii_lowercase().as_str() {
                "reset" => Command::Reset,
                "show" => Command::Show,
                "quit" | "exit" => Command::Quit,
                _ => return Err(SessionError::UnknownCommand(head.to_string())),
            }
        };

        match words.next() {
            Some(extra) => Err(SessionError::TrailingInput(extra.to_string())),
            None => Ok(cmd),
        }
    }
}

/// Owns the control state for one interactive run.
#[derive(Clone, Debug)]
pub struct Session {
    inputs: Inputs,
    policy: ClampPolicy,
}

impl Session {
    pub fn new(inputs: Inputs, policy: ClampPolicy) -> Self {
        Self { inputs, policy }
    }

    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    pub fn outcome(&self) -> Outcome {
        self.inputs.outcome(self.policy)
    }

    /// Apply one event. Returns `false` once the session should stop.
    pub fn apply(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Set(control, value) => self.inputs.set(control, value),
            Command::Reset => self.inputs.reset(),
            Command::Show => {}
            Command::Quit => return false,
        }
        true
    }

    /// Read commands until `quit` or end of input, rendering after each event.
    /// Bad lines are reported on `out` and skipped.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<(), SessionError> {
        write!(out, "{}", view::render(&self.outcome()))?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(cmd) => {
                    if !self.apply(cmd) {
                        break;
                    }
                    write!(out, "{}", view::render(&self.outcome()))?;
                }
                Err(e) => {
                    log::warn!("rejected session line {line:?}: {e}");
                    writeln!(out, "error: {e}")?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Inputs::default(), ClampPolicy::default())
    }
}
