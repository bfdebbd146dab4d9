//! Construction options for a dynamic cable.

use fa_core::Vec3;
use fa_core::units::{Accel, Density, Length, constants, m};

/// Placement and environment settings of a dynamic cable.
#[derive(Clone, Debug, PartialEq)]
pub struct CableConfig {
    pub id: String,
    /// Horizontal distance from platform center to end A
    pub rad_anch: Length,
    /// Horizontal distance from platform center to end B
    pub rad_fair: Length,
    /// Depth of end A
    pub z_anch: Length,
    /// Depth of end B
    pub z_fair: Length,
    pub rho: Density,
    pub g: Accel,
    /// Initial end A position
    pub r_a: Vec3,
    /// Initial end B position
    pub r_b: Vec3,
}

impl Default for CableConfig {
    fn default() -> Self {
        Self {
            id: "cable".to_string(),
            rad_anch: m(500.0),
            rad_fair: m(58.0),
            z_anch: m(-100.0),
            z_fair: m(-14.0),
            rho: constants::rho_seawater(),
            g: constants::g(),
            r_a: Vec3::zeros(),
            r_b: Vec3::zeros(),
        }
    }
}

impl CableConfig {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}
