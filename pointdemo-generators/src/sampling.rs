//! Seeded sampling and option-decoding helpers shared by the generators.

use pointdemo_core::{GeneratorError, PointColor};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use std::f32::consts::{PI, TAU};

/// Colour of the first cluster, and the default point colour.
pub(crate) const BLUE: PointColor = PointColor::DEFAULT;
/// Colour of the second cluster.
pub(crate) const ORANGE: PointColor = PointColor::Palette("#f90");
/// Colour of the third cluster.
pub(crate) const GREEN: PointColor = PointColor::Palette("#6a3");

pub(crate) fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Reads the option value at `index` as a `usize`.
pub(crate) fn value_at(values: &[u32], index: usize) -> Result<usize, GeneratorError> {
    let raw = values
        .get(index)
        .copied()
        .ok_or(GeneratorError::MissingValue { index })?;
    usize::try_from(raw).map_err(|_| GeneratorError::Overflow)
}

/// Reads a point count and rejects zero.
pub(crate) fn point_count(values: &[u32], index: usize) -> Result<usize, GeneratorError> {
    match value_at(values, index)? {
        0 => Err(GeneratorError::ZeroPoints),
        count => Ok(count),
    }
}

/// Reads a dimensionality and rejects zero.
pub(crate) fn dimensions(values: &[u32], index: usize) -> Result<usize, GeneratorError> {
    match value_at(values, index)? {
        0 => Err(GeneratorError::ZeroDimensions),
        dims => Ok(dims),
    }
}

/// Multiplies two counts, reporting overflow instead of wrapping.
pub(crate) fn checked_total(left: usize, right: usize) -> Result<usize, GeneratorError> {
    left.checked_mul(right).ok_or(GeneratorError::Overflow)
}

#[expect(
    clippy::cast_precision_loss,
    reason = "option values are small slider positions"
)]
pub(crate) fn as_f32(value: usize) -> f32 {
    value as f32
}

/// Returns `2π · step / steps`.
#[expect(
    clippy::float_arithmetic,
    reason = "angle parametrisation requires floating-point arithmetic"
)]
pub(crate) fn full_turn(step: usize, steps: usize) -> f32 {
    TAU * as_f32(step) / as_f32(steps)
}

/// Returns `1.5π · step / steps`, the hue sweep used by path-like demos.
#[expect(
    clippy::float_arithmetic,
    reason = "angle parametrisation requires floating-point arithmetic"
)]
pub(crate) fn three_quarter_turn(step: usize, steps: usize) -> f32 {
    1.5 * PI * as_f32(step) / as_f32(steps)
}

/// Maps an angle in radians to a hue in `[0, 300]` degrees.
#[expect(
    clippy::float_arithmetic,
    reason = "hue mapping scales the angle"
)]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "hue is clamped to [0, 300] before conversion"
)]
pub(crate) fn angle_color(angle: f32) -> PointColor {
    let hue = (300.0 * angle / TAU).floor().clamp(0.0, 300.0);
    PointColor::Hue(hue as u16)
}

#[expect(
    clippy::float_arithmetic,
    reason = "Box-Muller transform requires floating-point arithmetic"
)]
pub(crate) fn standard_normal_sample(rng: &mut SmallRng) -> Result<f32, GeneratorError> {
    let mut u1 = rng.gen_range(0.0_f32..1.0_f32);
    if u1 <= f32::EPSILON {
        u1 = f32::EPSILON;
    }
    let u2 = rng.gen_range(0.0_f32..1.0_f32);
    let radius = (-2.0_f32 * u1.ln()).sqrt();
    let theta = TAU * u2;
    let sample = radius * theta.cos();
    if sample.is_finite() {
        Ok(sample)
    } else {
        Err(GeneratorError::NonFinite {
            parameter: "standard_normal_sample",
        })
    }
}

/// Samples a vector of `dimensions` independent standard normal values.
pub(crate) fn normal_vector(
    rng: &mut SmallRng,
    dimensions: usize,
) -> Result<Vec<f32>, GeneratorError> {
    (0..dimensions)
        .map(|_| standard_normal_sample(rng))
        .collect()
}

pub(crate) fn uniform_sample(rng: &mut SmallRng) -> f32 {
    rng.gen_range(0.0_f32..1.0_f32)
}

/// Samples a vector of `dimensions` values uniform in `[0, 1)`.
pub(crate) fn uniform_vector(rng: &mut SmallRng, dimensions: usize) -> Vec<f32> {
    (0..dimensions).map(|_| uniform_sample(rng)).collect()
}

/// Adds `offset` to the first coordinate, if there is one.
#[expect(
    clippy::float_arithmetic,
    reason = "cluster offsets shift coordinates"
)]
pub(crate) fn shift_first_axis(point: &mut [f32], offset: f32) {
    if let Some(value) = point.first_mut() {
        *value += offset;
    }
}

/// Multiplies every coordinate by `factor`.
#[expect(
    clippy::float_arithmetic,
    reason = "cluster scaling multiplies coordinates"
)]
pub(crate) fn scale(point: &mut [f32], factor: f32) {
    for value in point {
        *value *= factor;
    }
}
