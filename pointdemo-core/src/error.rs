//! Error types for the demo registry.
//!
//! Defines the registry and generator error enums together with their stable
//! machine-readable codes.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by a [`crate::Generator`] while building a point cloud.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GeneratorError {
    /// The requested point count was zero.
    #[error("point count must be greater than zero")]
    ZeroPoints,
    /// The requested dimension count was zero.
    #[error("dimension count must be greater than zero")]
    ZeroDimensions,
    /// A divisor-like scale factor was zero.
    #[error("scale factor must be greater than zero")]
    ZeroScale,
    /// The requested shape does not fit in memory addressing.
    #[error("requested point cloud size overflows usize")]
    Overflow,
    /// An option value expected by the generator was not supplied.
    #[error("option value at position {index} is missing")]
    MissingValue {
        /// Position of the missing value within the option list.
        index: usize,
    },
    /// The generator needs more dimensions than were requested.
    #[error("generator requires at least {minimum} dimensions (got {actual})")]
    InsufficientDimensions {
        /// Smallest dimensionality supported by the generator.
        minimum: usize,
        /// Dimensionality that was requested.
        actual: usize,
    },
    /// A sampled or derived value was NaN or infinite.
    #[error("non-finite value produced for `{parameter}`")]
    NonFinite {
        /// Name of the quantity that became non-finite.
        parameter: &'static str,
    },
    /// A point did not match the dimensionality of its cloud.
    #[error("point has {actual} coordinates but the cloud expects {expected}")]
    ShapeMismatch {
        /// Dimensionality of the cloud.
        expected: usize,
        /// Number of coordinates supplied.
        actual: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// The requested point count was zero.
        ZeroPoints => ZeroPoints => "GENERATOR_ZERO_POINTS",
        /// The requested dimension count was zero.
        ZeroDimensions => ZeroDimensions => "GENERATOR_ZERO_DIMENSIONS",
        /// A scale factor was zero.
        ZeroScale => ZeroScale => "GENERATOR_ZERO_SCALE",
        /// The requested shape overflowed.
        Overflow => Overflow => "GENERATOR_OVERFLOW",
        /// An option value was missing.
        MissingValue => MissingValue { .. } => "GENERATOR_MISSING_VALUE",
        /// Too few dimensions for the generator.
        InsufficientDimensions => InsufficientDimensions { .. } => "GENERATOR_INSUFFICIENT_DIMENSIONS",
        /// A value became NaN or infinite.
        NonFinite => NonFinite { .. } => "GENERATOR_NON_FINITE",
        /// A point had the wrong number of coordinates.
        ShapeMismatch => ShapeMismatch { .. } => "GENERATOR_SHAPE_MISMATCH",
    }
}

/// Error type produced when building or querying a [`crate::Registry`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RegistryError {
    /// No demos were declared.
    #[error("a registry requires at least one demo declaration")]
    EmptyRegistry,
    /// A declaration had an empty name.
    #[error("demo declaration at index {index} has an empty name")]
    EmptyDemoName {
        /// Position of the offending declaration.
        index: usize,
    },
    /// An option within a demo had an empty name.
    #[error("option {option_index} of demo `{demo}` has an empty name")]
    EmptyOptionName {
        /// Demo declaring the option.
        demo: Arc<str>,
        /// Position of the option within the demo.
        option_index: usize,
    },
    /// An option's lower bound was not strictly below its upper bound.
    #[error("option `{option}` of demo `{demo}` has min {min} which is not below max {max}")]
    InvalidOptionBounds {
        /// Demo declaring the option.
        demo: Arc<str>,
        /// Offending option.
        option: Arc<str>,
        /// Declared lower bound.
        min: u32,
        /// Declared upper bound.
        max: u32,
    },
    /// An option's default value fell outside its bounds.
    #[error("option `{option}` of demo `{demo}` starts at {start}, outside [{min}, {max}]")]
    StartOutOfRange {
        /// Demo declaring the option.
        demo: Arc<str>,
        /// Offending option.
        option: Arc<str>,
        /// Declared default value.
        start: u32,
        /// Declared lower bound.
        min: u32,
        /// Declared upper bound.
        max: u32,
    },
    /// Two declarations shared the same name.
    #[error("demo `{name}` is declared at index {first_index} and again at {duplicate_index}")]
    DuplicateDemoName {
        /// Name that was declared twice.
        name: Arc<str>,
        /// Position of the first declaration.
        first_index: usize,
        /// Position of the conflicting declaration.
        duplicate_index: usize,
    },
    /// No demo is registered under the requested name.
    #[error("no demo named `{name}` is registered")]
    NotFound {
        /// Name that was looked up.
        name: Arc<str>,
    },
    /// An override referred to an option the demo does not declare.
    #[error("demo `{demo}` has no option named `{option}`")]
    UnknownOption {
        /// Demo being configured.
        demo: Arc<str>,
        /// Unrecognised option name.
        option: Arc<str>,
    },
    /// The number of option values did not match the demo's option list.
    #[error("demo `{demo}` expects {expected} option values but {actual} were given")]
    InvalidArguments {
        /// Demo being generated.
        demo: Arc<str>,
        /// Number of declared options.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },
    /// The demo's generator failed.
    #[error("generator for demo `{demo}` failed: {error}")]
    Generator {
        /// Demo whose generator failed.
        demo: Arc<str>,
        #[source]
        /// Underlying generator error.
        error: GeneratorError,
    },
}

define_error_codes! {
    /// Stable codes describing [`RegistryError`] variants.
    enum RegistryErrorCode for RegistryError {
        /// No demos were declared.
        EmptyRegistry => EmptyRegistry => "REGISTRY_EMPTY",
        /// A declaration had an empty name.
        EmptyDemoName => EmptyDemoName { .. } => "REGISTRY_EMPTY_DEMO_NAME",
        /// An option had an empty name.
        EmptyOptionName => EmptyOptionName { .. } => "REGISTRY_EMPTY_OPTION_NAME",
        /// An option's bounds were inverted or equal.
        InvalidOptionBounds => InvalidOptionBounds { .. } => "REGISTRY_INVALID_OPTION_BOUNDS",
        /// An option's default fell outside its bounds.
        StartOutOfRange => StartOutOfRange { .. } => "REGISTRY_START_OUT_OF_RANGE",
        /// Two declarations shared the same name.
        DuplicateDemoName => DuplicateDemoName { .. } => "REGISTRY_DUPLICATE_DEMO_NAME",
        /// No demo matched a lookup.
        NotFound => NotFound { .. } => "REGISTRY_NOT_FOUND",
        /// An override named an undeclared option.
        UnknownOption => UnknownOption { .. } => "REGISTRY_UNKNOWN_OPTION",
        /// Option value arity did not match.
        InvalidArguments => InvalidArguments { .. } => "REGISTRY_INVALID_ARGUMENTS",
        /// The demo's generator failed.
        GeneratorFailure => Generator { .. } => "REGISTRY_GENERATOR_FAILURE",
    }
}

impl RegistryError {
    /// Retrieve the inner [`GeneratorErrorCode`] when the error originated in a generator.
    #[must_use]
    pub const fn generator_code(&self) -> Option<GeneratorErrorCode> {
        match self {
            Self::Generator { error, .. } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the registry API.
pub type Result<T> = core::result::Result<T, RegistryError>;
