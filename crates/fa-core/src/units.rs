// fa-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, Angle as UomAngle, Area as UomArea, Force as UomForce,
    Length as UomLength, LinearMassDensity as UomLinearMassDensity, Mass as UomMass,
    MassDensity as UomMassDensity, Volume as UomVolume,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type Angle = UomAngle;
pub type Area = UomArea;
pub type Density = UomMassDensity;
pub type Force = UomForce;
pub type Length = UomLength;
pub type LinearMass = UomLinearMassDensity;
pub type Mass = UomMass;
pub type Volume = UomVolume;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn m3(v: f64) -> Volume {
    use uom::si::volume::cubic_meter;
    Volume::new::<cubic_meter>(v)
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn kg_per_m(v: f64) -> LinearMass {
    use uom::si::linear_mass_density::kilogram_per_meter;
    LinearMass::new::<kilogram_per_meter>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn mps2(v: f64) -> Accel {
    use uom::si::acceleration::meter_per_second_squared;
    Accel::new::<meter_per_second_squared>(v)
}

#[inline]
pub fn newton(v: f64) -> Force {
    use uom::si::force::newton;
    Force::new::<newton>(v)
}

#[inline]
pub fn deg(v: f64) -> Angle {
    use uom::si::angle::degree;
    Angle::new::<degree>(v)
}

#[inline]
pub fn rad(v: f64) -> Angle {
    use uom::si::angle::radian;
    Angle::new::<radian>(v)
}

/// Angle in radians, the unit headings are stored in.
#[inline]
pub fn to_radians(angle: Angle) -> f64 {
    use uom::si::angle::radian;
    angle.get::<radian>()
}

pub mod constants {
    use super::*;

    /// Gravity used by the array design defaults (not standard g0).
    pub const G_MPS2: f64 = 9.81;

    /// Nominal seawater density.
    pub const RHO_SEAWATER: f64 = 1025.0;

    #[inline]
    pub fn g() -> Accel {
        mps2(G_MPS2)
    }

    #[inline]
    pub fn rho_seawater() -> Density {
        kg_per_m3(RHO_SEAWATER)
    }
}
