/// Clamp mechanics: the sequential upper-bound chain and the guards around it.

/// Lower bound at zero. `f64::max` drops NaN, so NaN maps to 0 as well.
#[inline]
pub fn floor_zero(x: f64) -> f64 {
    x.max(0.0)
}

/// Total population as whole people in `[0, cells]`.
#[inline]
pub fn cap_total(total: f64, cells: usize) -> f64 {
    floor_zero(total).round().min(cells as f64)
}

/// Benefit can never exceed the population: min(benefit, total).
#[inline]
pub fn benefit(raw: f64, total: f64) -> f64 {
    raw.min(total)
}

/// Harm is bounded by the *clamped* benefit, not the raw one.
#[inline]
pub fn harm(raw: f64, clamped_benefit: f64) -> f64 {
    raw.min(clamped_benefit)
}

/// Harm cut to what is left of the population after benefit.
#[inline]
pub fn headroom(harm: f64, total: f64, clamped_benefit: f64) -> f64 {
    harm.min(floor_zero(total - clamped_benefit))
}

/// Remainder: total - benefit - harm.
#[inline]
pub fn unaffected(total: f64, clamped_benefit: f64, clamped_harm: f64) -> f64 {
    total - clamped_benefit - clamped_harm
}
