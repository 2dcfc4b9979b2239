//! Geometric operations on [`V3d`](crate::V3d)
//!
//! Each submodule adds an `impl V3d` block:
//! - `metric`: length, distance, normalisation, validity, fuzzy equality
//! - `products`: dot, cross, elementwise product, angle
//! - `transform`: projection, rejection, mirror, axis-angle rotation

mod metric;
mod products;
mod transform;
