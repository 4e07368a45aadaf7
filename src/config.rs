//! Optional JSON config: initial control values and the clamp policy.
//!
//! ```json
//! { "total": 60, "benefit": 12.5, "harm": 4, "policy": "guarded" }
//! ```
//!
//! Missing keys fall back to the widget defaults (100 / 5 / 2, guarded).

use std::path::Path;

use serde::Deserialize;

use crate::ClampPolicy;
use crate::error::ConfigError;
use crate::shell::Inputs;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub total: f64,
    pub benefit: f64,
    pub harm: f64,
    pub policy: ClampPolicy,
}

impl Default for Config {
    fn default() -> Self {
        let d = Inputs::default();
        Self { total: d.total, benefit: d.benefit, harm: d.harm, policy: ClampPolicy::default() }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loaded config from {}: {:?}", path.display(), cfg);
        Ok(cfg)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Initial control state. Values pass through the control steps like any
    /// other input.
    pub fn inputs(&self) -> Inputs {
        let mut inputs = Inputs::default();
        inputs.set_total(self.total);
        inputs.set_benefit(self.benefit);
        inputs.set_harm(self.harm);
        inputs
    }
}
