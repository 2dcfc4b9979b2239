//! 3D Vector Core Library
//!
//! A fixed three-component, double-precision vector value type (`V3d`) with
//! the geometric operations needed by positioning and graphics code.
//!
//! ## Features
//!
//! - Arithmetic operators (`+`, `-`, unary `-`, scalar `*` and `/`, compound assignment)
//! - Length, distance, normalisation and `NaN`-based validity checks
//! - Dot and cross products, angle in degrees, elementwise product
//! - Projection, rejection, mirroring and axis-angle rotation
//! - Raw `[f64; 3]` views guarded by a compile-time layout check
//! - `nalgebra`, `approx` and `serde` integration; `bytemuck` behind a feature
//!
//! Every operation has a pure form that returns a new vector. Operations that
//! are worth doing in place also have an `_in_place` form that mutates the
//! receiver and returns it.
//!
//! ## Usage
//! ```
//! use v3d_core::V3d;
//!
//! let v = V3d::new(3.0, 4.0, 0.0);
//! assert_eq!(v.length(), 5.0);
//! assert_eq!(V3d::cross(V3d::X, V3d::Y), V3d::Z);
//!
//! let mut w = v;
//! w.normalise_in_place().rotate_in_place(90.0, V3d::Z);
//! assert!(w.equals(V3d::new(0.8, -0.6, 0.0), 1e-12));
//!
//! // degenerate input shows up as NaN, never as a panic
//! assert!(!V3d::ZERO.normalise().is_valid());
//! ```

// Core types and utilities
pub mod core_types;

// Operations on the vector type
pub mod geometry;

// Interop with nalgebra / approx / bytemuck
pub mod interop;

// Re-export core types
pub use core_types::{SliceLengthError, V3d};
