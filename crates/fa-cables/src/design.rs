//! Design description of a dynamic cable.
//!
//! A design lists the sections from end A to end B and one connector at
//! every section boundary, including both ends:
//!
//! ```text
//! C0 --S0-- C1 --S1-- C2 ... Cn
//! ```

use fa_core::units::{
    Area, Force, Length, LinearMass, Mass, Volume, kg, kg_per_m, m, m2, m3, newton,
};
use fa_core::{FaError, ensure_finite, ensure_non_negative, ensure_positive};
use fa_lines::LineType;

use crate::error::{CableError, CableResult};

/// Physical properties of a bare cable.
#[derive(Debug, Clone, PartialEq)]
pub struct CableTypeSpec {
    pub name: String,
    /// Volumetric diameter
    pub d_vol: Length,
    /// Mass per unit length
    pub m: LinearMass,
    /// Axial stiffness
    pub ea: Force,
}

impl CableTypeSpec {
    pub fn new(name: impl Into<String>, d_vol: Length, m: LinearMass, ea: Force) -> Self {
        Self {
            name: name.into(),
            d_vol,
            m,
            ea,
        }
    }

    /// Check the properties and derive the line type for an environment.
    pub fn to_line_type(&self, rho: f64, g: f64) -> CableResult<LineType> {
        let invalid = |e: FaError| CableError::config(format!("cable type '{}': {}", self.name, e));

        let d_vol = ensure_non_negative(self.d_vol.value, "diameter").map_err(invalid)?;
        let mass = ensure_finite(self.m.value, "mass per length").map_err(invalid)?;
        let ea = ensure_positive(self.ea.value, "axial stiffness").map_err(invalid)?;

        Ok(LineType::new(self.name.clone(), d_vol, mass, ea, rho, g))
    }
}

/// One section of the design.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpec {
    pub length: Length,
    /// Overrides the cable's bare type, e.g. for a stiffened section.
    pub cable_type: Option<CableTypeSpec>,
}

impl SectionSpec {
    pub fn new(length: Length) -> Self {
        Self {
            length,
            cable_type: None,
        }
    }

    pub fn with_type(mut self, cable_type: CableTypeSpec) -> Self {
        self.cable_type = Some(cable_type);
        self
    }
}

/// One connector of the design: a joint, buoy or cable end.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorSpec {
    /// Type label; used as the identifier prefix.
    pub kind: Option<String>,
    pub mass: Mass,
    /// Displaced volume
    pub volume: Volume,
    /// Drag area
    pub cda: Area,
}

impl Default for ConnectorSpec {
    fn default() -> Self {
        Self {
            kind: None,
            mass: kg(0.0),
            volume: m3(0.0),
            cda: m2(0.0),
        }
    }
}

impl ConnectorSpec {
    /// A bare joint without mass, volume or drag.
    pub fn bare() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// A buoyancy module of given mass and displaced volume.
    pub fn buoy(mass: Mass, volume: Volume) -> Self {
        Self {
            kind: Some("buoy".to_string()),
            mass,
            volume,
            cda: m2(0.0),
        }
    }

    pub fn with_cda(mut self, cda: Area) -> Self {
        self.cda = cda;
        self
    }
}

/// Full design of a dynamic cable.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignSpec {
    /// The bare cable, used by every section without its own type.
    pub cable_type: CableTypeSpec,
    pub sections: Vec<SectionSpec>,
    /// One more than `sections`.
    pub connectors: Vec<ConnectorSpec>,
    /// Anchor depth (negative, below the free surface)
    pub z_anchor: Length,
    /// Horizontal span between the ends
    pub span: Length,
}

impl DesignSpec {
    /// A design of bare sections joined by bare connectors.
    pub fn uniform(cable_type: CableTypeSpec, lengths: &[f64], z_anchor: f64, span: f64) -> Self {
        Self {
            cable_type,
            sections: lengths.iter().map(|&l| SectionSpec::new(m(l))).collect(),
            connectors: vec![ConnectorSpec::bare(); lengths.len() + 1],
            z_anchor: m(z_anchor),
            span: m(span),
        }
    }

    /// Type used by section `i`.
    pub fn section_type(&self, i: usize) -> Option<&CableTypeSpec> {
        self.sections
            .get(i)
            .map(|s| s.cable_type.as_ref().unwrap_or(&self.cable_type))
    }

    pub fn total_length(&self) -> f64 {
        self.sections.iter().map(|s| s.length.value).sum()
    }
}

/// A typical 66 kV dynamic cable: 200 mm, 50 kg/m.
pub fn reference_cable_type() -> CableTypeSpec {
    CableTypeSpec::new("dynamic_66kV", m(0.2), kg_per_m(50.0), newton(5.0e8))
}
