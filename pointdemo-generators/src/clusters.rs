//! Gaussian cluster generators.
//!
//! Points are emitted interleaved: for each index one point per cluster, in
//! cluster order.

use pointdemo_core::{GeneratorError, PointCloud};

use crate::sampling::{
    BLUE, GREEN, ORANGE, as_f32, checked_total, dimensions, normal_vector, point_count, scale,
    seeded_rng, shift_first_axis, standard_normal_sample, value_at,
};

/// Two unit Gaussians whose means sit 10 apart on the first axis.
pub(crate) fn two_clusters(values: &[u32], seed: u64) -> Result<PointCloud, GeneratorError> {
    let per_cluster = point_count(values, 0)?;
    let dims = dimensions(values, 1)?;
    let mut rng = seeded_rng(seed);
    let mut builder = PointCloud::builder(dims, checked_total(per_cluster, 2)?)?;
    for _ in 0..per_cluster {
        builder.push(&normal_vector(&mut rng, dims)?, BLUE)?;
        let mut shifted = normal_vector(&mut rng, dims)?;
        shift_first_axis(&mut shifted, 10.0);
        builder.push(&shifted, ORANGE)?;
    }
    Ok(builder.finish())
}

/// Three unit Gaussians centred at 0, 10 and 50 on the first axis.
pub(crate) fn three_clusters(values: &[u32], seed: u64) -> Result<PointCloud, GeneratorError> {
    let per_cluster = point_count(values, 0)?;
    let dims = dimensions(values, 1)?;
    let mut rng = seeded_rng(seed);
    let mut builder = PointCloud::builder(dims, checked_total(per_cluster, 3)?)?;
    for _ in 0..per_cluster {
        builder.push(&normal_vector(&mut rng, dims)?, BLUE)?;
        let mut near = normal_vector(&mut rng, dims)?;
        shift_first_axis(&mut near, 10.0);
        builder.push(&near, ORANGE)?;
        let mut far = normal_vector(&mut rng, dims)?;
        shift_first_axis(&mut far, 50.0);
        builder.push(&far, GREEN)?;
    }
    Ok(builder.finish())
}

/// A unit Gaussian and a second Gaussian shrunk by `scale`, 20 apart.
pub(crate) fn two_different_clusters(
    values: &[u32],
    seed: u64,
) -> Result<PointCloud, GeneratorError> {
    let per_cluster = point_count(values, 0)?;
    let dims = dimensions(values, 1)?;
    let shrink = match value_at(values, 2)? {
        0 => return Err(GeneratorError::ZeroScale),
        factor => as_f32(factor).recip(),
    };
    let mut rng = seeded_rng(seed);
    let mut builder = PointCloud::builder(dims, checked_total(per_cluster, 2)?)?;
    for _ in 0..per_cluster {
        builder.push(&normal_vector(&mut rng, dims)?, BLUE)?;
        let mut tight = normal_vector(&mut rng, dims)?;
        scale(&mut tight, shrink);
        shift_first_axis(&mut tight, 20.0);
        builder.push(&tight, ORANGE)?;
    }
    Ok(builder.finish())
}

/// Two noisy parallel diagonal lines in 2-D, offset by `n / 5`.
#[expect(
    clippy::float_arithmetic,
    reason = "line positions and jitter require floating-point arithmetic"
)]
pub(crate) fn long_clusters(values: &[u32], seed: u64) -> Result<PointCloud, GeneratorError> {
    let per_cluster = point_count(values, 0)?;
    let count = as_f32(per_cluster);
    let spread = 0.03 * count;
    let offset = count / 5.0;
    let mut rng = seeded_rng(seed);
    let mut builder = PointCloud::builder(2, checked_total(per_cluster, 2)?)?;
    for index in 0..per_cluster {
        let along = as_f32(index);
        let x1 = along + spread * standard_normal_sample(&mut rng)?;
        let y1 = along + spread * standard_normal_sample(&mut rng)?;
        builder.push(&[x1, y1], BLUE)?;
        let x2 = along + spread * standard_normal_sample(&mut rng)? + offset;
        let y2 = along + spread * standard_normal_sample(&mut rng)? - offset;
        builder.push(&[x2, y2], ORANGE)?;
    }
    Ok(builder.finish())
}

/// A unit Gaussian nested inside a Gaussian fifty times wider.
pub(crate) fn subset_clusters(values: &[u32], seed: u64) -> Result<PointCloud, GeneratorError> {
    let per_cluster = point_count(values, 0)?;
    let dims = dimensions(values, 1)?;
    let mut rng = seeded_rng(seed);
    let mut builder = PointCloud::builder(dims, checked_total(per_cluster, 2)?)?;
    for _ in 0..per_cluster {
        builder.push(&normal_vector(&mut rng, dims)?, BLUE)?;
        let mut wide = normal_vector(&mut rng, dims)?;
        scale(&mut wide, 50.0);
        builder.push(&wide, ORANGE)?;
    }
    Ok(builder.finish())
}
