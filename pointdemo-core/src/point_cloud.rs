//! Point cloud output produced by demo generators.
//!
//! Coordinates are stored in a flat row-major buffer alongside one display
//! colour per point.

use std::fmt;

use crate::error::GeneratorError;

/// Display colour attached to a generated point.
///
/// # Examples
/// ```
/// use pointdemo_core::PointColor;
///
/// assert_eq!(PointColor::Hue(120).to_string(), "hsl(120,50%,50%)");
/// assert_eq!(PointColor::Rgb(255, 0, 16).to_string(), "rgb(255,0,16)");
/// assert_eq!(PointColor::DEFAULT.to_string(), "#039");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointColor {
    /// A fixed CSS colour literal such as `#f90`.
    Palette(&'static str),
    /// An HSL hue in degrees rendered at 50% saturation and lightness.
    Hue(u16),
    /// An explicit RGB triple.
    Rgb(u8, u8, u8),
}

impl PointColor {
    /// Colour used when a generator does not pick one.
    pub const DEFAULT: Self = Self::Palette("#039");
}

impl Default for PointColor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PointColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Palette(literal) => f.write_str(literal),
            Self::Hue(hue) => write!(f, "hsl({hue},50%,50%)"),
            Self::Rgb(red, green, blue) => write!(f, "rgb({red},{green},{blue})"),
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl serde::Serialize for PointColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A set of coloured points sharing one dimensionality.
///
/// # Examples
/// ```
/// use pointdemo_core::{PointCloud, PointColor};
///
/// let mut builder = PointCloud::builder(2, 2)?;
/// builder.push(&[0.0, 0.0], PointColor::DEFAULT)?;
/// builder.push(&[3.0, 4.0], PointColor::Hue(0))?;
/// let cloud = builder.finish();
/// assert_eq!(cloud.len(), 2);
/// assert_eq!(cloud.point(1), Some(&[3.0, 4.0][..]));
/// assert_eq!(cloud.euclidean_distance(0, 1), Some(5.0));
/// # Ok::<(), pointdemo_core::GeneratorError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PointCloud {
    coords: Vec<f32>,
    colors: Vec<PointColor>,
    dimensions: usize,
}

impl PointCloud {
    /// Assembles a cloud from a flat coordinate buffer and per-point colours.
    ///
    /// # Errors
    /// Returns [`GeneratorError::ZeroDimensions`] when `dimensions` is zero,
    /// [`GeneratorError::ShapeMismatch`] when the buffer length is not
    /// `colors.len() * dimensions`, and [`GeneratorError::NonFinite`] when any
    /// coordinate is NaN or infinite.
    pub fn from_parts(
        dimensions: usize,
        coords: Vec<f32>,
        colors: Vec<PointColor>,
    ) -> Result<Self, GeneratorError> {
        if dimensions == 0 {
            return Err(GeneratorError::ZeroDimensions);
        }
        let expected = colors
            .len()
            .checked_mul(dimensions)
            .ok_or(GeneratorError::Overflow)?;
        if coords.len() != expected {
            return Err(GeneratorError::ShapeMismatch {
                expected,
                actual: coords.len(),
            });
        }
        if coords.iter().any(|value| !value.is_finite()) {
            return Err(GeneratorError::NonFinite {
                parameter: "coords",
            });
        }
        Ok(Self {
            coords,
            colors,
            dimensions,
        })
    }

    /// Starts an incremental builder with room for `capacity` points.
    ///
    /// # Errors
    /// Returns [`GeneratorError::ZeroDimensions`] when `dimensions` is zero
    /// and [`GeneratorError::Overflow`] when the buffer size overflows.
    pub fn builder(dimensions: usize, capacity: usize) -> Result<PointCloudBuilder, GeneratorError> {
        if dimensions == 0 {
            return Err(GeneratorError::ZeroDimensions);
        }
        let total = capacity
            .checked_mul(dimensions)
            .ok_or(GeneratorError::Overflow)?;
        Ok(PointCloudBuilder {
            coords: Vec::with_capacity(total),
            colors: Vec::with_capacity(capacity),
            dimensions,
        })
    }

    /// Returns the number of points.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.colors.len() }

    /// Returns whether the cloud has no points.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// Returns the dimensionality shared by every point.
    #[must_use]
    #[rustfmt::skip]
    pub const fn dimensions(&self) -> usize { self.dimensions }

    /// Returns the flat row-major coordinate buffer.
    #[must_use]
    pub fn coords(&self) -> &[f32] {
        &self.coords
    }

    /// Returns the coordinates of point `index`, if present.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<&[f32]> {
        let start = index.checked_mul(self.dimensions)?;
        let end = start.checked_add(self.dimensions)?;
        self.coords.get(start..end)
    }

    /// Returns the colour of point `index`, if present.
    #[must_use]
    pub fn color(&self, index: usize) -> Option<PointColor> {
        self.colors.get(index).copied()
    }

    /// Iterates over `(coordinates, colour)` pairs in generation order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&[f32], PointColor)> + '_ {
        self.coords
            .chunks_exact(self.dimensions)
            .zip(self.colors.iter().copied())
    }

    /// Computes the Euclidean distance between points `left` and `right`.
    ///
    /// Returns `None` when either index is out of bounds.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "Euclidean distance requires floating-point arithmetic"
    )]
    pub fn euclidean_distance(&self, left: usize, right: usize) -> Option<f32> {
        let lhs = self.point(left)?;
        let rhs = self.point(right)?;
        let sum_sq = lhs.iter().zip(rhs).fold(0.0_f32, |acc, (a, b)| {
            let diff = a - b;
            acc + diff * diff
        });
        Some(sum_sq.sqrt())
    }
}

/// Incrementally assembles a [`PointCloud`] one point at a time.
#[derive(Clone, Debug)]
pub struct PointCloudBuilder {
    coords: Vec<f32>,
    colors: Vec<PointColor>,
    dimensions: usize,
}

impl PointCloudBuilder {
    /// Appends a point.
    ///
    /// # Errors
    /// Returns [`GeneratorError::ShapeMismatch`] when `coords` does not match
    /// the builder's dimensionality and [`GeneratorError::NonFinite`] when a
    /// coordinate is NaN or infinite.
    pub fn push(&mut self, coords: &[f32], color: PointColor) -> Result<(), GeneratorError> {
        if coords.len() != self.dimensions {
            return Err(GeneratorError::ShapeMismatch {
                expected: self.dimensions,
                actual: coords.len(),
            });
        }
        if coords.iter().any(|value| !value.is_finite()) {
            return Err(GeneratorError::NonFinite {
                parameter: "coords",
            });
        }
        self.coords.extend_from_slice(coords);
        self.colors.push(color);
        Ok(())
    }

    /// Returns the number of points pushed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns whether no points have been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Finalises the cloud.
    #[must_use]
    pub fn finish(self) -> PointCloud {
        PointCloud {
            coords: self.coords,
            colors: self.colors,
            dimensions: self.dimensions,
        }
    }
}
