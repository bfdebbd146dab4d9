//! Site information consulted while placing cables.

/// Project-level site data.
pub trait SiteInfo {
    /// Water depth (m, positive) at a horizontal position.
    fn depth_at(&self, x: f64, y: f64) -> f64;
}

/// Constant-depth seabed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlatSeabed {
    pub depth: f64,
}

impl SiteInfo for FlatSeabed {
    fn depth_at(&self, _x: f64, _y: f64) -> f64 {
        self.depth
    }
}

/// Seabed depth varying linearly in x and y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlopedSeabed {
    /// Depth at the origin (m)
    pub depth0: f64,
    /// Depth gradient along x (m/m)
    pub slope_x: f64,
    /// Depth gradient along y (m/m)
    pub slope_y: f64,
}

impl SiteInfo for SlopedSeabed {
    fn depth_at(&self, x: f64, y: f64) -> f64 {
        self.depth0 + self.slope_x * x + self.slope_y * y
    }
}
