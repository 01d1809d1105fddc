//! Built-in point-cloud generators and the reference demo list.
//!
//! [`stock_registry`] builds a [`pointdemo_core::Registry`] holding the
//! eighteen reference demos in their canonical order, starting with `Grid`.
//! Every generator seeds a fresh [`rand::rngs::SmallRng`] from the caller's
//! seed, so equal `(values, seed)` pairs always yield equal clouds.

mod clouds;
mod clusters;
mod sampling;
mod shapes;
mod stock;
mod walks;

pub use crate::stock::{StockGenerator, stock_declarations, stock_registry};
