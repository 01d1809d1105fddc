//! The reference demo list and the generators backing it.

use std::sync::Arc;

use pointdemo_core::{
    DemoDeclaration, DemoOption, Generator, GeneratorError, GeneratorFn, PointCloud, Registry,
    RegistryError,
};
use tracing::{Span, field, instrument};

use crate::{clouds, clusters, shapes, walks};

/// Identifies one of the built-in point-cloud generators.
///
/// Each variant is a stateless [`Generator`]; option values are read in the
/// order the matching stock demo declares them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum StockGenerator {
    /// Square lattice, `[side]`.
    Grid,
    /// Two offset Gaussians, `[per_cluster, dims]`.
    TwoClusters,
    /// Three offset Gaussians, `[per_cluster, dims]`.
    ThreeClusters,
    /// Two Gaussians of different width, `[per_cluster, dims, scale]`.
    TwoDifferentClusters,
    /// Two parallel noisy lines, `[per_cluster]`.
    LongClusters,
    /// A tight Gaussian inside a wide one, `[per_cluster, dims]`.
    SubsetClusters,
    /// Evenly spaced unit circle, `[points]`.
    Circle,
    /// Randomly spaced unit circle, `[points]`.
    RandomCircle,
    /// Isotropic Gaussian, `[points, dims]`.
    GaussianCloud,
    /// Axis-compressed Gaussian, `[points, dims]`.
    EllipsoidalCloud,
    /// Trefoil knot in 3-D, `[points]`.
    Trefoil,
    /// Two interlocking rings in 3-D, `[points]`.
    LinkedRings,
    /// Two separate rings in 3-D, `[points]`.
    UnlinkedRings,
    /// Axis-by-axis staircase, `[points]`.
    OrthogonalSteps,
    /// Gaussian random walk, `[points, dims]`.
    RandomWalk,
    /// Gaussian random walk with per-point jumps, `[points, dims]`.
    RandomJump,
    /// Jittered simplex vertices, `[points]`.
    EquallySpaced,
    /// Uniform unit hypercube, `[points, dims]`.
    UniformCloud,
}

impl StockGenerator {
    /// Every stock generator, in reference demo order.
    pub const ALL: [Self; 18] = [
        Self::Grid,
        Self::TwoClusters,
        Self::ThreeClusters,
        Self::TwoDifferentClusters,
        Self::LongClusters,
        Self::SubsetClusters,
        Self::Circle,
        Self::RandomCircle,
        Self::GaussianCloud,
        Self::EllipsoidalCloud,
        Self::Trefoil,
        Self::LinkedRings,
        Self::UnlinkedRings,
        Self::OrthogonalSteps,
        Self::RandomWalk,
        Self::RandomJump,
        Self::EquallySpaced,
        Self::UniformCloud,
    ];

    /// Returns a stable snake-case label for logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::TwoClusters => "two_clusters",
            Self::ThreeClusters => "three_clusters",
            Self::TwoDifferentClusters => "two_different_clusters",
            Self::LongClusters => "long_clusters",
            Self::SubsetClusters => "subset_clusters",
            Self::Circle => "circle",
            Self::RandomCircle => "random_circle",
            Self::GaussianCloud => "gaussian_cloud",
            Self::EllipsoidalCloud => "ellipsoidal_cloud",
            Self::Trefoil => "trefoil",
            Self::LinkedRings => "linked_rings",
            Self::UnlinkedRings => "unlinked_rings",
            Self::OrthogonalSteps => "orthogonal_steps",
            Self::RandomWalk => "random_walk",
            Self::RandomJump => "random_jump",
            Self::EquallySpaced => "equally_spaced",
            Self::UniformCloud => "uniform_cloud",
        }
    }

    const fn function(self) -> GeneratorFn {
        match self {
            Self::Grid => clouds::grid,
            Self::TwoClusters => clusters::two_clusters,
            Self::ThreeClusters => clusters::three_clusters,
            Self::TwoDifferentClusters => clusters::two_different_clusters,
            Self::LongClusters => clusters::long_clusters,
            Self::SubsetClusters => clusters::subset_clusters,
            Self::Circle => shapes::circle,
            Self::RandomCircle => shapes::random_circle,
            Self::GaussianCloud => clouds::gaussian_cloud,
            Self::EllipsoidalCloud => clouds::ellipsoidal_cloud,
            Self::Trefoil => shapes::trefoil,
            Self::LinkedRings => shapes::linked_rings,
            Self::UnlinkedRings => shapes::unlinked_rings,
            Self::OrthogonalSteps => walks::orthogonal_steps,
            Self::RandomWalk => walks::random_walk,
            Self::RandomJump => walks::random_jump,
            Self::EquallySpaced => clouds::equally_spaced,
            Self::UniformCloud => clouds::uniform_cloud,
        }
    }
}

impl Generator for StockGenerator {
    fn generate(&self, values: &[u32], seed: u64) -> Result<PointCloud, GeneratorError> {
        (self.function())(values, seed)
    }
}

/// `(name, min, max, start)` for one slider.
type OptionRow = (&'static str, u32, u32, u32);

const PER_CLUSTER: OptionRow = ("Points Per Cluster", 10, 100, 50);
const CLUSTER_DIMS: OptionRow = ("Dimensions", 1, 100, 2);
const CIRCLE_POINTS: OptionRow = ("Number Of Points", 20, 100, 50);
const CLOUD_POINTS: OptionRow = ("Number Of Points", 20, 500, 50);
const CURVE_POINTS: OptionRow = ("Number Of Points", 20, 200, 50);
const WALK_POINTS: OptionRow = ("Number Of Points", 20, 1000, 100);
const WALK_DIMS: OptionRow = ("Dimension", 1, 1000, 100);

struct StockDemo {
    name: &'static str,
    description: &'static str,
    generator: StockGenerator,
    options: &'static [OptionRow],
}

const STOCK_DEMOS: [StockDemo; 18] = [
    StockDemo {
        name: "Grid",
        description: concat!(
            "A square grid with equal spacing between points. ",
            "Try convergence at different sizes.",
        ),
        generator: StockGenerator::Grid,
        options: &[("Points Per Side", 5, 20, 10)],
    },
    StockDemo {
        name: "Two Clusters",
        description: "Two clusters with equal numbers of points.",
        generator: StockGenerator::TwoClusters,
        options: &[PER_CLUSTER, CLUSTER_DIMS],
    },
    StockDemo {
        name: "Three Clusters",
        description: concat!(
            "Three clusters with equal numbers of points, but at ",
            "different distances from each other.",
        ),
        generator: StockGenerator::ThreeClusters,
        options: &[PER_CLUSTER, CLUSTER_DIMS],
    },
    StockDemo {
        name: "Two Different-Sized Clusters",
        description: concat!(
            "Two clusters with equal numbers of points, but ",
            "different variances within the clusters.",
        ),
        generator: StockGenerator::TwoDifferentClusters,
        options: &[PER_CLUSTER, CLUSTER_DIMS, ("Scale", 1, 10, 5)],
    },
    StockDemo {
        name: "Two Long Linear Clusters",
        description: concat!(
            "Two sets of points, arranged in parallel lines that are ",
            "close to each other. Note curvature of lines.",
        ),
        generator: StockGenerator::LongClusters,
        options: &[PER_CLUSTER],
    },
    StockDemo {
        name: "Cluster In Cluster",
        description: "A dense, tight cluster inside of a wide, sparse cluster.",
        generator: StockGenerator::SubsetClusters,
        options: &[PER_CLUSTER, CLUSTER_DIMS],
    },
    StockDemo {
        name: "Circle (Evenly Spaced)",
        description: concat!(
            "Points evenly distributed in a circle. Hue ",
            "corresponds to angle in the circle.",
        ),
        generator: StockGenerator::Circle,
        options: &[CIRCLE_POINTS],
    },
    StockDemo {
        name: "Circle (Randomly Spaced)",
        description: concat!(
            "Points randomly distributed in a circle. Hue ",
            "corresponds to angle in the circle.",
        ),
        generator: StockGenerator::RandomCircle,
        options: &[CIRCLE_POINTS],
    },
    StockDemo {
        name: "Gaussian Cloud",
        description: concat!(
            "Points in a unit Gaussian distribution. Data is entirely random, so any ",
            "visible subclusters are not statistically significant",
        ),
        generator: StockGenerator::GaussianCloud,
        options: &[CLOUD_POINTS, CLUSTER_DIMS],
    },
    StockDemo {
        name: "Ellipsoidal Gaussian Cloud",
        description: concat!(
            "Points in an ellipsoidal Gaussian distribution.  Dimension n ",
            "has variance 1/n. Elongation is visible in plot.",
        ),
        generator: StockGenerator::EllipsoidalCloud,
        options: &[CLOUD_POINTS, CLUSTER_DIMS],
    },
    StockDemo {
        name: "Trefoil Knot",
        description: concat!(
            "Points arranged in 3D, following a trefoil knot. ",
            "Different runs may give different results.",
        ),
        generator: StockGenerator::Trefoil,
        options: &[CURVE_POINTS],
    },
    StockDemo {
        name: "Linked Rings",
        description: concat!(
            "Points arranged in 3D, on two linked circles. ",
            "Different runs may give different results.",
        ),
        generator: StockGenerator::LinkedRings,
        options: &[CURVE_POINTS],
    },
    StockDemo {
        name: "Unlinked Rings",
        description: "Points arranged in 3D, on two unlinked circles",
        generator: StockGenerator::UnlinkedRings,
        options: &[CURVE_POINTS],
    },
    StockDemo {
        name: "Orthogonal Steps",
        description: "Points related by mutually orthogonal steps. Very similar to a random walk.",
        generator: StockGenerator::OrthogonalSteps,
        options: &[CLOUD_POINTS],
    },
    StockDemo {
        name: "Random Walk",
        description: "Random (Gaussian) walk. Smoother than you might think.",
        generator: StockGenerator::RandomWalk,
        options: &[WALK_POINTS, WALK_DIMS],
    },
    StockDemo {
        name: "Random Jump",
        description: "Random (Gaussian) Jump",
        generator: StockGenerator::RandomJump,
        options: &[WALK_POINTS, WALK_DIMS],
    },
    StockDemo {
        name: "Equally Spaced",
        description: concat!(
            "A set of points, where distances between all pairs of ",
            "points are the same in the original space.",
        ),
        generator: StockGenerator::EquallySpaced,
        options: &[CIRCLE_POINTS],
    },
    StockDemo {
        name: "Uniform Distribution",
        description: "Points uniformly distributed in a unit cube.",
        generator: StockGenerator::UniformCloud,
        options: &[CURVE_POINTS, ("Dimensions", 1, 10, 3)],
    },
];

impl StockDemo {
    fn declaration(&self) -> DemoDeclaration {
        self.options.iter().fold(
            DemoDeclaration::new(self.name, self.description, Arc::new(self.generator)),
            |declaration, &(name, min, max, start)| {
                declaration.with_option(DemoOption::new(name, min, max, start))
            },
        )
    }
}

/// Returns the reference demo declarations in canonical order.
///
/// Callers may append their own declarations before building a [`Registry`].
#[must_use]
pub fn stock_declarations() -> Vec<DemoDeclaration> {
    STOCK_DEMOS.iter().map(StockDemo::declaration).collect()
}

/// Builds a [`Registry`] holding exactly the reference demos.
///
/// # Errors
/// Propagates [`Registry::build`] failures; the stock table is expected to be
/// valid, so an error here indicates a broken declaration.
#[instrument(name = "generators.stock_registry", err, fields(demos = field::Empty))]
pub fn stock_registry() -> Result<Registry, RegistryError> {
    let registry = Registry::build(stock_declarations())?;
    Span::current().record("demos", registry.len());
    Ok(registry)
}
