use crate::{ClampPolicy, Outcome, compute_with};

/// One of the three numeric controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    Total,
    Benefit,
    Harm,
}

impl Control {
    pub const ALL: [Control; 3] = [Control::Total, Control::Benefit, Control::Harm];

    /// Label shown next to the control.
    pub fn label(self) -> &'static str {
        match self {
            Control::Total => "Total population",
            Control::Benefit => "Benefit",
            Control::Harm => "Harm",
        }
    }

    /// Command word in a session.
    pub fn name(self) -> &'static str {
        match self {
            Control::Total => "total",
            Control::Benefit => "benefit",
            Control::Harm => "harm",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Step granularity: whole people for the population, tenths otherwise.
    pub fn step(self) -> f64 {
        match self {
            Control::Total => 1.0,
            Control::Benefit | Control::Harm => 0.1,
        }
    }

    /// Snap `value` to this control's step. `+ 0.0` turns `-0.0` into `0.0`.
    /// Values too large to scale by the step are kept as given.
    pub fn quantize(self, value: f64) -> f64 {
        let q = match self {
            Control::Total => value.round(),
            Control::Benefit | Control::Harm => (value * 10.0).round() / 10.0,
        };
        if q.is_finite() || !value.is_finite() {
            q + 0.0
        } else {
            value
        }
    }
}

/// Raw control values. Unbounded on purpose: range handling belongs to the
/// calculator's clamp chain, not to the setters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Inputs {
    pub total: f64,
    pub benefit: f64,
    pub harm: f64,
}

impl Inputs {
    pub const DEFAULT_TOTAL: f64 = 100.0;
    pub const DEFAULT_BENEFIT: f64 = 5.0;
    pub const DEFAULT_HARM: f64 = 2.0;

    pub fn get(&self, control: Control) -> f64 {
        match control {
            Control::Total => self.total,
            Control::Benefit => self.benefit,
            Control::Harm => self.harm,
        }
    }

    /// Store `value` for `control` after snapping it to the control's step.
    pub fn set(&mut self, control: Control, value: f64) {
        let v = control.quantize(value);
        let slot = match control {
            Control::Total => &mut self.total,
            Control::Benefit => &mut self.benefit,
            Control::Harm => &mut self.harm,
        };
        log::debug!("{}: {} -> {}", control.name(), slot, v);
        *slot = v;
    }

    pub fn set_total(&mut self, value: f64) {
        self.set(Control::Total, value);
    }

    pub fn set_benefit(&mut self, value: f64) {
        self.set(Control::Benefit, value);
    }

    pub fn set_harm(&mut self, value: f64) {
        self.set(Control::Harm, value);
    }

    pub fn reset(&mut self) {
        log::debug!("reset to defaults");
        *self = Self::default();
    }

    pub fn outcome(&self, policy: ClampPolicy) -> Outcome {
        compute_with(policy, self.total, self.benefit, self.harm)
    }
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            total: Self::DEFAULT_TOTAL,
            benefit: Self::DEFAULT_BENEFIT,
            harm: Self::DEFAULT_HARM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_follows_control_step() {
        assert_eq!(Control::Total.quantize(42.6), 43.0);
        assert_eq!(Control::Benefit.quantize(0.1 + 0.2), 0.3);
        assert_eq!(Control::Harm.quantize(2.04), 2.0);
        assert!(Control::Harm.quantize(-0.04).is_sign_positive());
    }

    #[test]
    fn quantize_keeps_huge_finite_values_finite() {
        assert_eq!(Control::Benefit.quantize(1e308), 1e308);
        assert_eq!(Control::Harm.quantize(-1e308), -1e308);
        assert_eq!(Control::Total.quantize(1e308), 1e308);
    }

    #[test]
    fn setters_do_not_bound_values() {
        let mut i = Inputs::default();
        i.set_total(250.0);
        i.set_benefit(-3.0);
        i.set_harm(500.0);
        assert_eq!(i, Inputs { total: 250.0, benefit: -3.0, harm: 500.0 });
    }

    #[test]
    fn reset_restores_defaults() {
        let mut i = Inputs { total: 7.0, benefit: 1.5, harm: 0.5 };
        i.reset();
        assert_eq!(i, Inputs { total: 100.0, benefit: 5.0, harm: 2.0 });
    }

    #[test]
    fn control_names_round_trip() {
        for c in Control::ALL {
            assert_eq!(Control::from_name(c.name()), Some(c));
        }
        assert_eq!(Control::from_name("HARM"), Some(Control::Harm));
        assert_eq!(Control::from_name("people"), None);
    }
}
