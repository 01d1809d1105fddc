//! Closed curves: circles, a trefoil knot and pairs of rings.

use std::f32::consts::TAU;

use pointdemo_core::{GeneratorError, PointCloud};

use crate::sampling::{
    BLUE, ORANGE, angle_color, checked_total, full_turn, point_count, seeded_rng, uniform_sample,
};

/// Tilt applied to both rings so neither lies flat in a coordinate plane.
const RING_TILT: f32 = 0.4;

/// Rotates `(x, y, z)` about the x axis by [`RING_TILT`] radians.
#[expect(
    clippy::float_arithmetic,
    reason = "rotation requires floating-point arithmetic"
)]
fn tilt([x, y, z]: [f32; 3]) -> [f32; 3] {
    let (sin, cos) = RING_TILT.sin_cos();
    [x, cos * y + sin * z, -sin * y + cos * z]
}

pub(crate) fn circle(values: &[u32], _seed: u64) -> Result<PointCloud, GeneratorError> {
    let count = point_count(values, 0)?;
    let mut builder = PointCloud::builder(2, count)?;
    for step in 0..count {
        let angle = full_turn(step, count);
        let (sin, cos) = angle.sin_cos();
        builder.push(&[cos, sin], angle_color(angle))?;
    }
    Ok(builder.finish())
}

#[expect(
    clippy::float_arithmetic,
    reason = "angle sampling scales a uniform draw"
)]
pub(crate) fn random_circle(values: &[u32], seed: u64) -> Result<PointCloud, GeneratorError> {
    let count = point_count(values, 0)?;
    let mut rng = seeded_rng(seed);
    let mut builder = PointCloud::builder(2, count)?;
    for _ in 0..count {
        let angle = TAU * uniform_sample(&mut rng);
        let (sin, cos) = angle.sin_cos();
        builder.push(&[cos, sin], angle_color(angle))?;
    }
    Ok(builder.finish())
}

/// Samples the trefoil `(sin t + 2 sin 2t, cos t - 2 cos 2t, -sin 3t)`.
#[expect(
    clippy::float_arithmetic,
    reason = "knot parametrisation requires floating-point arithmetic"
)]
pub(crate) fn trefoil(values: &[u32], _seed: u64) -> Result<PointCloud, GeneratorError> {
    let count = point_count(values, 0)?;
    let mut builder = PointCloud::builder(3, count)?;
    for step in 0..count {
        let angle = full_turn(step, count);
        let x = angle.sin() + 2.0 * (2.0 * angle).sin();
        let y = angle.cos() - 2.0 * (2.0 * angle).cos();
        let z = -(3.0 * angle).sin();
        builder.push(&[x, y, z], angle_color(angle))?;
    }
    Ok(builder.finish())
}

/// Two perpendicular unit rings whose centres sit `offset` apart on x.
///
/// An offset of 1 threads each ring through the other; 3 keeps them apart.
#[expect(
    clippy::float_arithmetic,
    reason = "ring parametrisation requires floating-point arithmetic"
)]
fn ring_pair(values: &[u32], offset: f32) -> Result<PointCloud, GeneratorError> {
    let count = point_count(values, 0)?;
    let mut builder = PointCloud::builder(3, checked_total(count, 2)?)?;
    for step in 0..count {
        let (sin, cos) = full_turn(step, count).sin_cos();
        builder.push(&tilt([cos, sin, 0.0]), ORANGE)?;
        builder.push(&tilt([offset + cos, 0.0, sin]), BLUE)?;
    }
    Ok(builder.finish())
}

pub(crate) fn linked_rings(values: &[u32], _seed: u64) -> Result<PointCloud, GeneratorError> {
    ring_pair(values, 1.0)
}

pub(crate) fn unlinked_rings(values: &[u32], _seed: u64) -> Result<PointCloud, GeneratorError> {
    ring_pair(values, 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "norm comparison needs floating-point arithmetic"
    )]
    fn tilt_preserves_length() {
        let [x, y, z] = tilt([0.0, 3.0, 4.0]);
        assert_eq!(x, 0.0);
        assert!(((y * y + z * z).sqrt() - 5.0).abs() < 1e-5);
    }

    #[rstest]
    fn rings_interleave_colours() {
        let cloud = linked_rings(&[20], 0).expect("rings must generate");
        assert_eq!(cloud.len(), 40);
        assert_eq!(cloud.color(0), Some(ORANGE));
        assert_eq!(cloud.color(1), Some(BLUE));
    }
}
