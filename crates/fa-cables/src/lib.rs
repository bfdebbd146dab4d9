//! Dynamic subsea power cables for floating offshore wind arrays.
//!
//! A [`DynamicCable`] is built from a [`DesignSpec`]: an ordered list of
//! sections joined by connectors. The cable tracks its end positions as the
//! owning platform moves and builds a line model (by default
//! [`fa_lines::Subsystem`]) to find its static shape.
//!
//! # Example
//!
//! ```
//! use fa_cables::{AdjustParams, DesignSpec, DynamicCable, reference_cable_type};
//! use fa_core::{Vec2, Vec3};
//! use fa_lines::SuspensionCase;
//!
//! let design = DesignSpec::uniform(reference_cable_type(), &[200.0, 280.0], -100.0, 442.0);
//! let mut cable: DynamicCable = DynamicCable::new(design).unwrap();
//!
//! cable
//!     .reposition(Vec2::zeros(), Some(0.0), None, false, &AdjustParams::new())
//!     .unwrap();
//! assert_eq!(cable.r_b(), Vec3::new(58.0, 0.0, -14.0));
//! assert_eq!(cable.r_a(), Vec3::new(500.0, 0.0, -100.0));
//!
//! let ss = cable.create_subsystem(SuspensionCase::Anchored).unwrap();
//! assert!(ss.solution().unwrap().h > 0.0);
//! ```

pub mod adjust;
pub mod cable;
pub mod config;
pub mod cost;
pub mod design;
pub mod error;
pub mod factory;
pub mod position;
pub mod site;
pub mod topology;

pub use adjust::{AdjustParams, Adjuster, RadialAdjuster, SharedCableAdjuster, SymmetricAdjuster};
pub use cable::DynamicCable;
pub use config::CableConfig;
pub use design::{CableTypeSpec, ConnectorSpec, DesignSpec, SectionSpec, reference_cable_type};
pub use error::{CableError, CableResult};
pub use position::{End, IntoEnd};
pub use site::{FlatSeabed, SiteInfo, SlopedSeabed};
pub use topology::{CableTopology, Connector, Section, SubcomponentRef, TypeRegistry};
