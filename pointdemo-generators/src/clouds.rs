//! Lattice and unstructured cloud generators.

use pointdemo_core::{GeneratorError, PointCloud, PointColor};

use crate::sampling::{
    BLUE, as_f32, checked_total, dimensions, normal_vector, point_count, seeded_rng,
    uniform_sample, uniform_vector,
};

/// Channel value for lattice position `step` of `side`, scaled into `0..=255`.
fn lattice_channel(step: usize, side: usize) -> Result<u8, GeneratorError> {
    let scaled = checked_total(step, 255)?
        .checked_div(side)
        .ok_or(GeneratorError::ZeroPoints)?;
    u8::try_from(scaled).map_err(|_| GeneratorError::Overflow)
}

/// `side × side` integer lattice in the plane, coloured by position.
pub(crate) fn grid(values: &[u32], _seed: u64) -> Result<PointCloud, GeneratorError> {
    let side = point_count(values, 0)?;
    let mut builder = PointCloud::builder(2, checked_total(side, side)?)?;
    for x in 0..side {
        let red = lattice_channel(x, side)?;
        for y in 0..side {
            let green = lattice_channel(y, side)?;
            builder.push(&[as_f32(x), as_f32(y)], PointColor::Rgb(red, green, 160))?;
        }
    }
    Ok(builder.finish())
}

/// Isotropic standard normal cloud.
pub(crate) fn gaussian_cloud(values: &[u32], seed: u64) -> Result<PointCloud, GeneratorError> {
    let count = point_count(values, 0)?;
    let dims = dimensions(values, 1)?;
    let mut rng = seeded_rng(seed);
    let mut builder = PointCloud::builder(dims, count)?;
    for _ in 0..count {
        builder.push(&normal_vector(&mut rng, dims)?, BLUE)?;
    }
    Ok(builder.finish())
}

/// Normal cloud whose `j`-th axis is compressed by `j + 1`.
#[expect(
    clippy::float_arithmetic,
    reason = "axis compression divides sampled coordinates"
)]
pub(crate) fn ellipsoidal_cloud(values: &[u32], seed: u64) -> Result<PointCloud, GeneratorError> {
    let count = point_count(values, 0)?;
    let dims = dimensions(values, 1)?;
    let mut rng = seeded_rng(seed);
    let mut builder = PointCloud::builder(dims, count)?;
    for _ in 0..count {
        let mut point = normal_vector(&mut rng, dims)?;
        for (axis, value) in point.iter_mut().enumerate() {
            *value /= as_f32(axis) + 1.0;
        }
        builder.push(&point, BLUE)?;
    }
    Ok(builder.finish())
}

/// One point per axis of an `n`-dimensional space, each at a slightly jittered
/// unit distance from the origin.
///
/// The vertices of the standard simplex are pairwise `√2` apart, so the
/// pairwise distances land in `[√2, 1.5·√2)`.
#[expect(
    clippy::float_arithmetic,
    reason = "jittered radius requires floating-point arithmetic"
)]
pub(crate) fn equally_spaced(values: &[u32], seed: u64) -> Result<PointCloud, GeneratorError> {
    let count = point_count(values, 0)?;
    let mut rng = seeded_rng(seed);
    let mut builder = PointCloud::builder(count, count)?;
    let mut point = vec![0.0_f32; count];
    for axis in 0..count {
        let radius = 1.0 + 0.5 * uniform_sample(&mut rng);
        point.fill(0.0);
        if let Some(slot) = point.get_mut(axis) {
            *slot = radius;
        }
        builder.push(&point, BLUE)?;
    }
    Ok(builder.finish())
}

/// Points drawn uniformly from the unit hypercube.
pub(crate) fn uniform_cloud(values: &[u32], seed: u64) -> Result<PointCloud, GeneratorError> {
    let count = point_count(values, 0)?;
    let dims = dimensions(values, 1)?;
    let mut rng = seeded_rng(seed);
    let mut builder = PointCloud::builder(dims, count)?;
    for _ in 0..count {
        builder.push(&uniform_vector(&mut rng, dims), BLUE)?;
    }
    Ok(builder.finish())
}
