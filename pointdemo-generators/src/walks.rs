//! Path-like generators whose colour sweeps with the step index.

use pointdemo_core::{GeneratorError, PointCloud};

use crate::sampling::{
    angle_color, as_f32, dimensions, normal_vector, point_count, scale, seeded_rng,
    three_quarter_turn,
};

/// Staircase through `n` dimensions: point `i` has its first `i` axes set.
pub(crate) fn orthogonal_steps(values: &[u32], _seed: u64) -> Result<PointCloud, GeneratorError> {
    let count = point_count(values, 0)?;
    let mut builder = PointCloud::builder(count, count)?;
    let mut point = vec![0.0_f32; count];
    for step in 0..count {
        builder.push(&point, angle_color(three_quarter_turn(step, count)))?;
        if let Some(axis) = point.get_mut(step) {
            *axis = 1.0;
        }
    }
    Ok(builder.finish())
}

#[expect(
    clippy::float_arithmetic,
    reason = "walk accumulation requires floating-point arithmetic"
)]
fn walk(values: &[u32], seed: u64, jump: bool) -> Result<PointCloud, GeneratorError> {
    let count = point_count(values, 0)?;
    let dims = dimensions(values, 1)?;
    let jump_scale = as_f32(dims).sqrt();
    let mut rng = seeded_rng(seed);
    let mut builder = PointCloud::builder(dims, count)?;
    let mut position = vec![0.0_f32; dims];
    for step in 0..count {
        let stride = normal_vector(&mut rng, dims)?;
        for (coord, delta) in position.iter_mut().zip(stride) {
            *coord += delta;
        }
        let color = angle_color(three_quarter_turn(step, count));
        if jump {
            let mut offset = normal_vector(&mut rng, dims)?;
            scale(&mut offset, jump_scale);
            for (coord, base) in offset.iter_mut().zip(&position) {
                *coord += base;
            }
            builder.push(&offset, color)?;
        } else {
            builder.push(&position, color)?;
        }
    }
    Ok(builder.finish())
}

/// Cumulative sum of standard normal steps.
pub(crate) fn random_walk(values: &[u32], seed: u64) -> Result<PointCloud, GeneratorError> {
    walk(values, seed, false)
}

/// Random walk where each emitted point jumps a `√d`-scaled distance away
/// from the underlying walk.
pub(crate) fn random_jump(values: &[u32], seed: u64) -> Result<PointCloud, GeneratorError> {
    walk(values, seed, true)
}
