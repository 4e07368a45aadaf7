/*!
`outcome_grid` — a pure population-outcome calculator for a 10×10 infographic.

What it does
- Takes three raw inputs straight from a control surface
  (`total`, `benefit`, `harm`), unconstrained at the point of entry.
- Runs a sequential clamp chain: benefit against total, then harm against the
  *already clamped* benefit. The order is fixed; the two clamps never run
  side by side.
- Classifies each of the 100 grid cells as benefit, harm, unharmed or default.

How to use (call surface only)
- `compute(total, benefit, harm) -> Outcome` with the guarded policy.
- `compute_with(ClampPolicy::Legacy, ..)` for the unguarded chain
  (upper bounds only, `unaffected` may go negative).
- `shell::Inputs` holds the three raw values with setters and `reset`;
  `shell::view` turns an `Outcome` into text.

What it does NOT do
- No persistence, no animation, no shared state. Every input change is a
  full recompute; nothing is cached between calls.
*/

use serde::{Serialize, Serializer};

pub mod config;
pub mod error;
pub mod mechanics;
pub mod shell;

#[cfg(feature = "cli")]
pub mod cli;

/// Cells in the infographic.
pub const GRID_CELLS: usize = 100;
/// Cells per rendered row.
pub const GRID_COLUMNS: usize = 10;

/// Display state of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Benefit,
    Harm,
    Unharmed,
    /// Outside the active population (`index >= total`).
    Default,
}

/// How raw inputs are bounded before classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClampPolicy {
    /// Floor every input at zero (NaN → 0), round total to whole people and cap
    /// it at the grid size, run the
    /// sequential chain, then cap harm at `total - benefit`.
    #[default]
    Guarded,
    /// Upper bounds only: `min(benefit, total)`, `min(harm, benefit)`.
    Legacy,
}

/// Derived values for one set of inputs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Outcome {
    /// Total population the cells were classified against.
    pub total: f64,
    pub clamped_benefit: f64,
    pub clamped_harm: f64,
    pub unaffected: f64,
    #[serde(serialize_with = "serialize_cells")]
    pub cells: [Status; GRID_CELLS],
}

impl Outcome {
    /// Number of cells in `status`.
    pub fn count(&self, status: Status) -> usize {
        self.cells.iter().filter(|c| **c == status).count()
    }

    /// Cells in display order, `GRID_COLUMNS` per row.
    pub fn rows(&self) -> impl Iterator<Item = &[Status]> + '_ {
        self.cells.chunks(GRID_COLUMNS)
    }
}

fn serialize_cells<S: Serializer>(cells: &[Status; GRID_CELLS], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(cells.iter())
}

/// Guarded computation; see [`ClampPolicy::Guarded`].
pub fn compute(total: f64, benefit: f64, harm: f64) -> Outcome {
    compute_with(ClampPolicy::Guarded, total, benefit, harm)
}

/// Clamp the raw inputs under `policy` and classify every cell.
pub fn compute_with(policy: ClampPolicy, total: f64, benefit: f64, harm: f64) -> Outcome {
    use mechanics::{classify, clamp};

    let (total, clamped_benefit, clamped_harm) = match policy {
        ClampPolicy::Legacy => {
            let b = clamp::benefit(benefit, total);
            let h = clamp::harm(harm, b);
            (total, b, h)
        }
        ClampPolicy::Guarded => {
            for (name, raw) in [("total", total), ("benefit", benefit), ("harm", harm)] {
                if raw.is_nan() || raw < 0.0 {
                    log::warn!("{name} input {raw} is below zero or not a number; using 0");
                }
            }
            let t = clamp::cap_total(total, GRID_CELLS);
            let b = clamp::benefit(clamp::floor_zero(benefit), t);
            let h = clamp::harm(clamp::floor_zero(harm), b);
            let h_fit = clamp::headroom(h, t, b);
            if h_fit < h {
                log::warn!("harm {h} exceeds headroom {}; cut to {h_fit}", t - b);
            }
            (t, b, h_fit)
        }
    };

    let unaffected = clamp::unaffected(total, clamped_benefit, clamped_harm);
    log::debug!(
        "compute({policy:?}): total={total} benefit={clamped_benefit} harm={clamped_harm} unaffected={unaffected}"
    );

    Outcome {
        total,
        clamped_benefit,
        clamped_harm,
        unaffected,
        cells: classify::cells(total, clamped_benefit, clamped_harm),
    }
}
