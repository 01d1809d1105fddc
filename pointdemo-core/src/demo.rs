//! Demo declarations and the registered descriptors derived from them.

use std::{fmt, sync::Arc};

use tracing::{Span, debug, field, instrument};

use crate::{
    error::{RegistryError, Result},
    generator::Generator,
    option::DemoOption,
    point_cloud::PointCloud,
};

/// An author-supplied demo before it has been assigned a registry index.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use pointdemo_core::{DemoDeclaration, DemoOption, FnGenerator, GeneratorError, PointCloud};
///
/// fn empty(_: &[u32], _: u64) -> Result<PointCloud, GeneratorError> {
///     PointCloud::from_parts(1, Vec::new(), Vec::new())
/// }
///
/// let declaration = DemoDeclaration::new(
///     "Empty",
///     "Nothing to see here.",
///     Arc::new(FnGenerator::new("empty", empty)),
/// )
/// .with_option(DemoOption::new("Ignored", 0, 1, 0));
/// assert_eq!(declaration.name(), "Empty");
/// assert_eq!(declaration.options().len(), 1);
/// ```
#[derive(Clone)]
pub struct DemoDeclaration {
    name: String,
    description: String,
    options: Vec<DemoOption>,
    generator: Arc<dyn Generator>,
}

impl DemoDeclaration {
    /// Declares a demo with no options.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        generator: Arc<dyn Generator>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            options: Vec::new(),
            generator,
        }
    }

    /// Appends an option. Options keep their declaration order.
    #[must_use]
    pub fn with_option(mut self, option: DemoOption) -> Self {
        self.options.push(option);
        self
    }

    /// Returns the declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared options.
    #[must_use]
    pub fn options(&self) -> &[DemoOption] {
        &self.options
    }

    pub(crate) fn validate(&self, index: usize) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RegistryError::EmptyDemoName { index });
        }
        for (option_index, option) in self.options.iter().enumerate() {
            option.validate(&self.name, option_index)?;
        }
        Ok(())
    }

    pub(crate) fn into_descriptor(self, index: usize) -> DemoDescriptor {
        DemoDescriptor {
            name: self.name,
            description: self.description,
            options: self.options,
            generator: self.generator,
            index,
        }
    }
}

impl fmt::Debug for DemoDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemoDeclaration")
            .field("name", &self.name)
            .field("options", &self.options)
            .field("generator", &self.generator)
            .finish_non_exhaustive()
    }
}

/// A registered demo: the declaration plus its position in the registry.
#[derive(Clone)]
pub struct DemoDescriptor {
    name: String,
    description: String,
    options: Vec<DemoOption>,
    generator: Arc<dyn Generator>,
    index: usize,
}

impl DemoDescriptor {
    /// Returns the unique display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the options in presentation order.
    #[must_use]
    pub fn options(&self) -> &[DemoOption] {
        &self.options
    }

    /// Returns the generator backing this demo.
    #[must_use]
    pub fn generator(&self) -> &Arc<dyn Generator> {
        &self.generator
    }

    /// Returns the zero-based position assigned at registration.
    #[must_use]
    #[rustfmt::skip]
    pub const fn index(&self) -> usize { self.index }

    /// Returns each option's default value in declaration order.
    #[must_use]
    pub fn default_values(&self) -> Vec<u32> {
        self.options.iter().map(DemoOption::start).collect()
    }

    /// Applies named overrides on top of the default values.
    ///
    /// Later overrides for the same option win. Values are not bounds-checked;
    /// callers presenting the options decide how to treat out-of-range input.
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownOption`] when an override names an
    /// option this demo does not declare.
    pub fn resolve_values<'a, I>(&self, overrides: I) -> Result<Vec<u32>>
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        let mut values = self.default_values();
        for (option_name, value) in overrides {
            let slot = self
                .options
                .iter()
                .position(|option| option.name() == option_name)
                .and_then(|position| values.get_mut(position))
                .ok_or_else(|| RegistryError::UnknownOption {
                    demo: Arc::from(self.name.as_str()),
                    option: Arc::from(option_name),
                })?;
            *slot = value;
        }
        Ok(values)
    }

    /// Runs the generator after checking that one value is supplied per option.
    ///
    /// # Errors
    /// Returns [`RegistryError::InvalidArguments`] on an arity mismatch and
    /// [`RegistryError::Generator`] when the generator itself fails.
    #[instrument(
        name = "registry.generate",
        err,
        skip(self, values),
        fields(demo = %self.name, values = field::Empty),
    )]
    pub fn generate(&self, values: &[u32], seed: u64) -> Result<PointCloud> {
        Span::current().record("values", field::debug(values));
        if values.len() != self.options.len() {
            return Err(RegistryError::InvalidArguments {
                demo: Arc::from(self.name.as_str()),
                expected: self.options.len(),
                actual: values.len(),
            });
        }
        let cloud = self
            .generator
            .generate(values, seed)
            .map_err(|error| RegistryError::Generator {
                demo: Arc::from(self.name.as_str()),
                error,
            })?;
        debug!(
            points = cloud.len(),
            dimensions = cloud.dimensions(),
            "demo generated"
        );
        Ok(cloud)
    }
}

impl fmt::Debug for DemoDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemoDescriptor")
            .field("index", &self.index)
            .field("name", &self.name)
            .field("options", &self.options)
            .field("generator", &self.generator)
            .finish_non_exhaustive()
    }
}
