//! Shared test fixtures: synthetic bore measurements sampled on circles.

use rand::prelude::*;

use crate::condition::{Condition, CoordinateSample};

/// Condition with `n` cap points on the upper half and `n` rod points on the
/// lower half of a circle of radius `radius + offset` around `center`.
///
/// Samples are emitted in a scrambled order so normalization has work to do.
pub(crate) fn circle_condition(
    label: &str,
    n: usize,
    radius: f64,
    center: [f64; 2],
    offset: f64,
) -> Condition {
    let r = radius + offset;
    let mut samples: Vec<CoordinateSample> = (0..n)
        .map(|i| {
            let t = std::f64::consts::PI * (i as f64 + 0.5) / n as f64;
            let cap = [center[0] + r * t.cos(), center[1] + r * t.sin()];
            let rod = [center[0] + r * t.cos(), center[1] - r * t.sin()];
            CoordinateSample::new(cap, rod)
        })
        .collect();
    samples.reverse();
    if samples.len() > 2 {
        samples.swap(0, 1);
    }
    Condition::new(label, samples)
}

/// Add uniform noise in `[-sigma, sigma]` to every coordinate.
pub(crate) fn jitter(mut condition: Condition, sigma: f64, seed: u64) -> Condition {
    let mut rng = StdRng::seed_from_u64(seed);
    for s in &mut condition.samples {
        s.cap_x += rng.gen_range(-sigma..sigma);
        s.cap_y += rng.gen_range(-sigma..sigma);
        s.rod_x += rng.gen_range(-sigma..sigma);
        s.rod_y += rng.gen_range(-sigma..sigma);
    }
    condition
}

/// Points sampled on a full circle.
pub(crate) fn circle_points(n: usize, center: [f64; 2], radius: f64) -> Vec<[f64; 2]> {
    (0..n)
        .map(|i| {
            let t = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
            [center[0] + radius * t.cos(), center[1] + radius * t.sin()]
        })
        .collect()
}
