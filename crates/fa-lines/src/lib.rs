//! Quasi-static line mechanics for mooring lines and dynamic cables.
//!
//! This crate provides the `LineModel` contract used by cable and mooring
//! designs, and `Subsystem`, an implementation that solves the static
//! equilibrium of a multi-section elastic catenary between two end points.
//! Anchored lines may rest partly on a frictionless seabed.

pub mod catenary;
pub mod elements;
pub mod error;
pub mod jacobian;
pub mod line_type;
pub mod model;
pub mod newton;
pub mod subsystem;

pub use catenary::{Profile, SectionLoad};
pub use elements::{Line, Point};
pub use error::{LineError, LineResult};
pub use line_type::{LineType, LineTypeTable, SharedLineType};
pub use model::{LineModel, SubsystemParams, SuspensionCase, build_elements};
pub use newton::{NewtonConfig, NewtonResult};
pub use subsystem::{LineSolution, Subsystem};
