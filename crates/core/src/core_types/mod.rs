//! Core types: the vector value itself, its operators and conversion errors

pub mod error;
mod ops;
pub mod vec3;

pub use error::SliceLengthError;
pub use vec3::V3d;
