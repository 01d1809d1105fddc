//! Demo registry core library.
//!
//! Declares selectable point-cloud demos, validates their option ranges and
//! indexes them by name. Concrete generators live in other crates and plug in
//! through the [`Generator`] trait.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod demo;
mod error;
mod generator;
mod option;
mod point_cloud;
mod registry;

#[cfg(test)]
mod test_utils;

pub use crate::{
    demo::{DemoDeclaration, DemoDescriptor},
    error::{GeneratorError, GeneratorErrorCode, RegistryError, RegistryErrorCode, Result},
    generator::{FnGenerator, Generator, GeneratorFn},
    option::DemoOption,
    point_cloud::{PointCloud, PointCloudBuilder, PointColor},
    registry::Registry,
};
