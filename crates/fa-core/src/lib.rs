//! fa-core: stable foundation for the floating-array cable model.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - geometry (planar/3D vector aliases + heading helpers)
//! - ids (stable compact IDs for chain objects)
//! - error (shared error types)

pub mod error;
pub mod geometry;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{FaError, FaResult};
pub use geometry::*;
pub use ids::*;
pub use numeric::*;
pub use units::*;
