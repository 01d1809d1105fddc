//! Shared test utilities for `pointdemo-core`.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use crate::{
    demo::DemoDeclaration,
    error::GeneratorError,
    generator::Generator,
    option::DemoOption,
    point_cloud::{PointCloud, PointColor},
};

/// [`Generator`] that records invocations and emits `values[0]` points on a line.
#[derive(Debug, Default)]
pub(crate) struct CountingGenerator {
    calls: AtomicUsize,
    last_seed: Mutex<Option<u64>>,
}

impl CountingGenerator {
    /// Returns the invocation counter for assertions.
    pub(crate) fn calls(&self) -> &AtomicUsize {
        &self.calls
    }

    /// Returns the seed passed to the most recent invocation.
    pub(crate) fn last_seed(&self) -> Option<u64> {
        *self.last_seed.lock().expect("seed lock poisoned")
    }
}

impl Generator for CountingGenerator {
    #[expect(
        clippy::cast_precision_loss,
        reason = "test coordinates are small step indices"
    )]
    fn generate(&self, values: &[u32], seed: u64) -> Result<PointCloud, GeneratorError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        *self.last_seed.lock().expect("seed lock poisoned") = Some(seed);
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

/// Builds a declaration backed by a fresh [`CountingGenerator`].
///
/// Each option is given as `(name, min, max, start)`.
pub(crate) fn declaration(name: &str, options: &[(&str, u32, u32, u32)]) -> DemoDeclaration {
    options.iter().fold(
        DemoDeclaration::new(name, format!("{name} test demo"), Arc::new(CountingGenerator::default())),
        |declaration, &(option, min, max, start)| {
            declaration.with_option(DemoOption::new(option, min, max, start))
        },
    )
}
