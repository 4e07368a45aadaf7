// demos/walkthrough.rs
// Run with:
//   cargo run --example walkthrough

use outcome_grid::shell::{Inputs, view};
use outcome_grid::{ClampPolicy, compute_with};

fn main() {
    let mut inputs = Inputs::default();

    println!("== Defaults ==");
    print!("{}", view::render(&inputs.outcome(ClampPolicy::Guarded)));

    // Slide the population down; benefit follows, harm is cut to what is left.
    inputs.set_total(10.0);
    inputs.set_benefit(8.0);
    inputs.set_harm(4.0);
    println!("\n== total 10, benefit 8, harm 4 ==");
    print!("{}", view::render(&inputs.outcome(ClampPolicy::Guarded)));

    // Same raw values under the upper-bound-only chain.
    let legacy = compute_with(ClampPolicy::Legacy, inputs.total, inputs.benefit, inputs.harm);
    println!("\n== same inputs, legacy clamp ==");
    println!("{}", view::summary(&legacy));

    inputs.reset();
    println!("\n== after reset ==");
    println!("{}", view::summary(&inputs.outcome(ClampPolicy::Guarded)));
}
