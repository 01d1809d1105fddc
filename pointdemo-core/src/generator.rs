//! Generator capability invoked by registered demos.

use std::fmt;

use crate::{error::GeneratorError, point_cloud::PointCloud};

/// Produces a [`PointCloud`] from a demo's option values.
///
/// `values` carries one entry per declared option in declaration order. The
/// registry checks arity before calling in; anything else about the values is
/// the generator's concern. Implementations must be deterministic for a given
/// `(values, seed)` pair.
///
/// # Examples
/// ```
/// use pointdemo_core::{Generator, GeneratorError, PointCloud, PointColor};
///
/// #[derive(Debug)]
/// struct Line;
///
/// impl Generator for Line {
///     fn generate(&self, values: &[u32], _seed: u64) -> Result<PointCloud, GeneratorError> {
///         let count = *values.first().ok_or(GeneratorError::MissingValue { index: 0 })?;
///         let mut builder = PointCloud::builder(1, count as usize)?;
///         for step in 0..count {
///             builder.push(&[step as f32], PointColor::DEFAULT)?;
///         }
///         Ok(builder.finish())
///     }
/// }
///
/// let cloud = Line.generate(&[4], 0)?;
/// assert_eq!(cloud.len(), 4);
/// # Ok::<(), GeneratorError>(())
/// ```
pub trait Generator: fmt::Debug + Send + Sync {
    /// Generates a point cloud for the supplied option values.
    ///
    /// # Errors
    /// Returns a [`GeneratorError`] when the values describe an unusable
    /// shape or sampling produces non-finite coordinates.
    fn generate(&self, values: &[u32], seed: u64) -> Result<PointCloud, GeneratorError>;
}

/// Function signature accepted by [`FnGenerator`].
pub type GeneratorFn = fn(&[u32], u64) -> Result<PointCloud, GeneratorError>;

/// Adapts a plain function into a [`Generator`].
///
/// # Examples
/// ```
/// use pointdemo_core::{FnGenerator, Generator, GeneratorError, PointCloud, PointColor};
///
/// fn origin(_: &[u32], _: u64) -> Result<PointCloud, GeneratorError> {
///     PointCloud::from_parts(2, vec![0.0, 0.0], vec![PointColor::DEFAULT])
/// }
///
/// let generator = FnGenerator::new("origin", origin);
/// assert_eq!(generator.label(), "origin");
/// assert_eq!(generator.generate(&[], 1)?.len(), 1);
/// # Ok::<(), GeneratorError>(())
/// ```
#[derive(Clone, Copy)]
pub struct FnGenerator {
    label: &'static str,
    function: GeneratorFn,
}

impl FnGenerator {
    /// Wraps `function`, keeping `label` for diagnostics.
    #[must_use]
    pub const fn new(label: &'static str, function: GeneratorFn) -> Self {
        Self { label, function }
    }

    /// Returns the diagnostic label.
    #[must_use]
    #[rustfmt::skip]
    pub const fn label(&self) -> &'static str { self.label }
}

impl fmt::Debug for FnGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnGenerator")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl Generator for FnGenerator {
    fn generate(&self, values: &[u32], seed: u64) -> Result<PointCloud, GeneratorError> {
        (self.function)(values, seed)
    }
}
