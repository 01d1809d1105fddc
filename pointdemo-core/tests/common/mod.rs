use std::sync::Arc;

use pointdemo_core::{
    DemoDeclaration, DemoOption, Generator, GeneratorError, PointCloud, PointColor,
};

/// Emits `values[0]` evenly spaced points on the x axis, or one point without options.
#[derive(Debug, Clone, Copy)]
pub struct Line;

impl Generator for Line {
    #[expect(
        clippy::cast_precision_loss,
        reason = "test coordinates are small step indices"
    )]
    fn generate(&self, values: &[u32], _seed: u64) -> Result<PointCloud, GeneratorError> {
        let count = values.first().copied().unwrap_or(1);
        if count == 0 {
            return Err(GeneratorError::ZeroPoints);
        }
        let mut builder = PointCloud::builder(1, count as usize)?;
        for step in 0..count {
            builder.push(&[step as f32], PointColor::DEFAULT)?;
        }
        Ok(builder.finish())
    }
}

#[must_use]
pub fn line_demo(name: &str, options: &[(&str, u32, u32, u32)]) -> DemoDeclaration {
    options.iter().fold(
        DemoDeclaration::new(name, format!("{name} on a line"), Arc::new(Line)),
        |declaration, &(option, min, max, start)| {
            declaration.with_option(DemoOption::new(option, min, max, start))
        },
    )
}
