//! The immutable demo registry.
//!
//! A [`Registry`] is built once from an ordered list of declarations. Each
//! descriptor receives its position as its index and is reachable by name
//! through an index that points back into the ordered list, so a name lookup
//! always yields the very descriptor stored at that position.

use std::{collections::HashMap, sync::Arc};

use tracing::{Span, field, info, instrument};

use crate::{
    demo::{DemoDeclaration, DemoDescriptor},
    error::{RegistryError, Result},
    point_cloud::PointCloud,
};

/// Ordered demos plus a name index, immutable after [`Registry::build`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use pointdemo_core::{
///     DemoDeclaration, DemoOption, FnGenerator, GeneratorError, PointCloud, PointColor, Registry,
/// };
///
/// fn grid(values: &[u32], _: u64) -> Result<PointCloud, GeneratorError> {
///     let side = *values.first().ok_or(GeneratorError::MissingValue { index: 0 })?;
///     let mut builder = PointCloud::builder(2, (side * side) as usize)?;
///     for x in 0..side {
///         for y in 0..side {
///             builder.push(&[x as f32, y as f32], PointColor::DEFAULT)?;
///         }
///     }
///     Ok(builder.finish())
/// }
///
/// let registry = Registry::build([
///     DemoDeclaration::new("Grid", "A square grid.", Arc::new(FnGenerator::new("grid", grid)))
///         .with_option(DemoOption::new("Points Per Side", 5, 20, 10)),
/// ])?;
///
/// let demo = registry.lookup("Grid")?;
/// assert_eq!(demo.index(), 0);
/// let cloud = registry.generate(demo, &demo.default_values(), 0)?;
/// assert_eq!(cloud.len(), 100);
/// # Ok::<(), pointdemo_core::RegistryError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Registry {
    demos: Vec<DemoDescriptor>,
    by_name: HashMap<String, usize>,
}

impl Registry {
    /// Validates `declarations` and assigns each its zero-based index.
    ///
    /// Declaration order is preserved and significant: the first demo is the
    /// default selection.
    ///
    /// # Errors
    /// Returns [`RegistryError::EmptyRegistry`] when nothing is declared,
    /// [`RegistryError::EmptyDemoName`], [`RegistryError::EmptyOptionName`],
    /// [`RegistryError::InvalidOptionBounds`] or
    /// [`RegistryError::StartOutOfRange`] for malformed declarations, and
    /// [`RegistryError::DuplicateDemoName`] when two declarations share a
    /// name. The first failing declaration in order is reported.
    #[instrument(
        name = "registry.build",
        err,
        skip(declarations),
        fields(demos = field::Empty)
    )]
    pub fn build<I>(declarations: I) -> Result<Self>
    where
        I: IntoIterator<Item = DemoDeclaration>,
    {
        let declarations = declarations.into_iter();
        let (lower, _) = declarations.size_hint();
        let mut demos = Vec::with_capacity(lower);
        let mut by_name = HashMap::with_capacity(lower);

        for (index, declaration) in declarations.enumerate() {
            declaration.validate(index)?;
            if let Some(&first_index) = by_name.get(declaration.name()) {
                return Err(RegistryError::DuplicateDemoName {
                    name: Arc::from(declaration.name()),
                    first_index,
                    duplicate_index: index,
                });
            }
            by_name.insert(declaration.name().to_owned(), index);
            demos.push(declaration.into_descriptor(index));
        }

        if demos.is_empty() {
            return Err(RegistryError::EmptyRegistry);
        }

        Span::current().record("demos", demos.len());
        info!(demos = demos.len(), "demo registry built");
        Ok(Self { demos, by_name })
    }

    /// Returns the descriptors in declaration order.
    #[must_use]
    pub fn demos(&self) -> &[DemoDescriptor] {
        &self.demos
    }

    /// Returns the number of registered demos.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.demos.len() }

    /// Returns whether the registry is empty. A built registry never is.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.demos.is_empty() }

    /// Iterates over descriptors in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, DemoDescriptor> {
        self.demos.iter()
    }

    /// Iterates over demo names in declaration order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.demos.iter().map(DemoDescriptor::name)
    }

    /// Returns the first declared demo, used as the default selection.
    #[must_use]
    pub fn default_demo(&self) -> Option<&DemoDescriptor> {
        self.demos.first()
    }

    /// Returns the descriptor at `index`, if any.
    #[must_use]
    pub fn demo_at(&self, index: usize) -> Option<&DemoDescriptor> {
        self.demos.get(index)
    }

    /// Returns the descriptor registered under `name`, if any.
    ///
    /// Matching is exact and case-sensitive.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DemoDescriptor> {
        self.by_name
            .get(name)
            .and_then(|&index| self.demos.get(index))
    }

    /// Looks up a demo by exact name.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] when no demo has that name.
    pub fn lookup(&self, name: &str) -> Result<&DemoDescriptor> {
        self.get(name).ok_or_else(|| RegistryError::NotFound {
            name: Arc::from(name),
        })
    }

    /// Generates a point cloud for `descriptor`.
    ///
    /// The registry checks only that one value is supplied per option, then
    /// delegates to the descriptor's generator.
    ///
    /// # Errors
    /// Returns [`RegistryError::InvalidArguments`] on an arity mismatch and
    /// [`RegistryError::Generator`] when the generator fails.
    pub fn generate(
        &self,
        descriptor: &DemoDescriptor,
        values: &[u32],
        seed: u64,
    ) -> Result<PointCloud> {
        descriptor.generate(values, seed)
    }

    /// Looks up `name` and generates its point cloud.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] for unknown names plus any error
    /// raised by [`Self::generate`].
    pub fn generate_by_name(&self, name: &str, values: &[u32], seed: u64) -> Result<PointCloud> {
        let descriptor = self.lookup(name)?;
        self.generate(descriptor, values, seed)
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a DemoDescriptor;
    type IntoIter = std::slice::Iter<'a, DemoDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::declaration;
    use rstest::rstest;

    fn grid_and_cloud() -> Vec<DemoDeclaration> {
        vec![
            declaration("Grid", &[("Points Per Side", 5, 20, 10)]),
            declaration(
                "Gaussian Cloud",
                &[("Number Of Points", 20, 500, 50), ("Dimensions", 1, 100, 2)],
            ),
        ]
    }

    #[rstest]
    fn build_assigns_indices_in_declaration_order() {
        let registry = Registry::build(grid_and_cloud()).expect("declarations are valid");

        let first = registry.demo_at(0).expect("first demo must exist");
        let second = registry.demo_at(1).expect("second demo must exist");
        assert_eq!(first.name(), "Grid");
        assert_eq!(first.index(), 0);
        assert_eq!(second.name(), "Gaussian Cloud");
        assert_eq!(second.index(), 1);
    }

    #[rstest]
    fn lookup_returns_the_stored_descriptor() {
        let registry = Registry::build(grid_and_cloud()).expect("declarations are valid");

        let by_name = registry.lookup("Grid").expect("Grid must be registered");
        let by_position = registry.demo_at(0).expect("Grid is declared first");
        assert!(std::ptr::eq(by_name, by_position));
    }

    #[rstest]
    fn duplicate_names_are_rejected() {
        let declarations = vec![
            declaration("Grid", &[("Points Per Side", 5, 20, 10)]),
            declaration("Circle", &[]),
            declaration("Grid", &[("Points Per Side", 2, 4, 3)]),
        ];

        let err = Registry::build(declarations).expect_err("duplicate names must fail");

        assert_eq!(
            err,
            RegistryError::DuplicateDemoName {
                name: Arc::from("Grid"),
                first_index: 0,
                duplicate_index: 2,
            }
        );
    }

    #[rstest]
    fn names_differing_only_by_case_are_distinct() {
        let registry = Registry::build(vec![declaration("Grid", &[]), declaration("grid", &[])])
            .expect("case-distinct names are unique");
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup("grid").map(DemoDescriptor::index), Ok(1));
    }

    #[rstest]
    fn empty_declarations_are_rejected() {
        let err = Registry::build(Vec::new()).expect_err("an empty registry must fail");
        assert_eq!(err, RegistryError::EmptyRegistry);
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    fn blank_demo_names_are_rejected(#[case] name: &str) {
        let err = Registry::build(vec![declaration("Grid", &[]), declaration(name, &[])])
            .expect_err("blank names must fail");
        assert_eq!(err, RegistryError::EmptyDemoName { index: 1 });
    }

    #[rstest]
    fn first_invalid_declaration_wins() {
        let err = Registry::build(vec![
            declaration("Broken", &[("Scale", 10, 1, 5)]),
            declaration("Broken", &[]),
        ])
        .expect_err("invalid bounds must fail before the duplicate is seen");
        assert_eq!(err.code().as_str(), "REGISTRY_INVALID_OPTION_BOUNDS");
    }

    #[rstest]
    #[case::exact_case("gaussian cloud")]
    #[case::prefix("Gauss")]
    #[case::missing("Swiss Roll")]
    fn lookup_reports_not_found(#[case] name: &str) {
        let registry = Registry::build(grid_and_cloud()).expect("declarations are valid");
        let err = registry.lookup(name).expect_err("lookup must not match");
        assert_eq!(
            err,
            RegistryError::NotFound {
                name: Arc::from(name)
            }
        );
        assert!(registry.get(name).is_none());
    }

    #[rstest]
    fn default_demo_is_the_first_declaration() {
        let registry = Registry::build(grid_and_cloud()).expect("declarations are valid");
        assert_eq!(registry.default_demo().map(DemoDescriptor::name), Some("Grid"));
    }

    #[rstest]
    fn generate_by_name_reports_unknown_demo() {
        let registry = Registry::build(grid_and_cloud()).expect("declarations are valid");
        let err = registry
            .generate_by_name("Torus", &[], 0)
            .expect_err("unknown demo must fail");
        assert_eq!(err.code().as_str(), "REGISTRY_NOT_FOUND");
    }

    #[rstest]
    fn names_follow_declaration_order() {
        let registry = Registry::build(grid_and_cloud()).expect("declarations are valid");
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, ["Grid", "Gaussian Cloud"]);
    }

    #[test]
    fn registry_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
    }
}
