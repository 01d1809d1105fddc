//! Tunable numeric parameters exposed by a demo.

use std::sync::Arc;

use crate::error::RegistryError;

/// A named, bounded integer parameter presented as a slider.
///
/// Bounds are inclusive. The invariants `min < max` and
/// `min <= start <= max` are checked when the owning demo is registered.
///
/// # Examples
/// ```
/// use pointdemo_core::DemoOption;
///
/// let option = DemoOption::new("Points Per Side", 5, 20, 10);
/// assert!(option.contains(5));
/// assert!(option.contains(20));
/// assert!(!option.contains(21));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DemoOption {
    name: String,
    min: u32,
    max: u32,
    start: u32,
}

impl DemoOption {
    /// Declares an option. Validation is deferred to [`crate::Registry::build`].
    #[must_use]
    pub fn new(name: impl Into<String>, min: u32, max: u32, start: u32) -> Self {
        Self {
            name: name.into(),
            min,
            max,
            start,
        }
    }

    /// Returns the display label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    #[rustfmt::skip]
    pub const fn min(&self) -> u32 { self.min }

    /// Returns the inclusive upper bound.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max(&self) -> u32 { self.max }

    /// Returns the default value.
    #[must_use]
    #[rustfmt::skip]
    pub const fn start(&self) -> u32 { self.start }

    /// Returns whether `value` lies within `[min, max]`.
    #[must_use]
    pub const fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }

    pub(crate) fn validate(&self, demo: &str, option_index: usize) -> Result<(), RegistryError> {
        if self.name.trim().is_empty() {
            return Err(RegistryError::EmptyOptionName {
                demo: Arc::from(demo),
                option_index,
            });
        }
        if self.min >= self.max {
            return Err(RegistryError::InvalidOptionBounds {
                demo: Arc::from(demo),
                option: Arc::from(self.name.as_str()),
                min: self.min,
                max: self.max,
            });
        }
        if !self.contains(self.start) {
            return Err(RegistryError::StartOutOfRange {
                demo: Arc::from(demo),
                option: Arc::from(self.name.as_str()),
                start: self.start,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}
