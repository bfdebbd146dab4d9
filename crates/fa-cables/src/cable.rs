//! The dynamic cable: design, topology, end positions and line model.

use std::collections::BTreeMap;
use std::fmt;

use fa_core::units::m;
use fa_core::{Vec3, ensure_positive};
use fa_lines::{LineModel, SharedLineType, Subsystem};
use tracing::debug;

use crate::adjust::Adjuster;
use crate::config::CableConfig;
use crate::design::DesignSpec;
use crate::error::{CableError, CableResult};
use crate::topology::CableTopology;

/// A dynamic power cable between end A (anchor, joint or far platform) and
/// end B (fairlead).
///
/// The cable keeps three views consistent: the design it was built from,
/// the connector/section topology, and an optional line model `M` that is
/// created by [`DynamicCable::create_subsystem`]. Updates to lengths and end
/// positions are forwarded to the model but never re-solve it.
///
/// Cable types are shared with the line model by reference, so a cable is
/// confined to one thread.
pub struct DynamicCable<M: LineModel = Subsystem> {
    pub(crate) id: String,
    pub(crate) design: DesignSpec,
    pub(crate) topology: CableTopology,

    pub(crate) r_a: Vec3,
    pub(crate) r_b: Vec3,
    /// Radians
    pub(crate) heading: f64,
    pub(crate) rad_anch: f64,
    pub(crate) rad_fair: f64,
    pub(crate) z_anch: f64,
    pub(crate) z_fair: f64,

    pub(crate) shared: bool,
    pub(crate) symmetric: bool,
    pub(crate) adjuster: Option<Box<dyn Adjuster<M>>>,

    pub(crate) rho: f64,
    pub(crate) g: f64,

    pub(crate) ss: Option<M>,

    pub(crate) loads: BTreeMap<String, f64>,
    pub(crate) reliability: BTreeMap<String, f64>,
    pub(crate) cost: BTreeMap<String, f64>,
}

impl<M: LineModel> DynamicCable<M> {
    /// Build a cable with default placement and environment.
    pub fn new(design: DesignSpec) -> CableResult<Self> {
        Self::with_config(design, CableConfig::default())
    }

    pub fn with_config(design: DesignSpec, config: CableConfig) -> CableResult<Self> {
        let rho = ensure_positive(config.rho.value, "water density")
            .map_err(|e| CableError::config(e.to_string()))?;
        let g = ensure_positive(config.g.value, "gravity")
            .map_err(|e| CableError::config(e.to_string()))?;
        for (what, v) in [
            ("rad_anch", config.rad_anch.value),
            ("rad_fair", config.rad_fair.value),
            ("z_anch", config.z_anch.value),
            ("z_fair", config.z_fair.value),
        ] {
            if !v.is_finite() {
                return Err(CableError::config(format!("{what} must be finite, got {v}")));
            }
        }

        let topology = CableTopology::build(&design, rho, g)?;

        debug!(
            cable = %config.id,
            sections = topology.n_sec(),
            length = design.total_length(),
            "cable built"
        );

        Ok(Self {
            id: config.id,
            design,
            topology,
            r_a: config.r_a,
            r_b: config.r_b,
            heading: 0.0,
            rad_anch: config.rad_anch.value,
            rad_fair: config.rad_fair.value,
            z_anch: config.z_anch.value,
            z_fair: config.z_fair.value,
            shared: false,
            symmetric: false,
            adjuster: None,
            rho,
            g,
            ss: None,
            loads: BTreeMap::new(),
            reliability: BTreeMap::new(),
            cost: BTreeMap::new(),
        })
    }

    /// Set the length of section `i` in the design, the topology and, if
    /// present, the line model. The model is not re-solved.
    pub fn set_section_length(&mut self, length: f64, i: usize) -> CableResult<()> {
        let n_sec = self.topology.n_sec();
        let Some(section) = self.topology.section_mut(i) else {
            return Err(CableError::IndexOutOfBounds { index: i, len: n_sec });
        };
        let length = ensure_positive(length, "section length")
            .map_err(|e| CableError::config(format!("section {i}: {e}")))?;

        section.length = length;
        if let Some(spec) = self.design.sections.get_mut(i) {
            spec.length = m(length);
        }
        if let Some(line) = self.ss.as_mut().and_then(|ss| ss.lines_mut().get_mut(i)) {
            line.set_length(length);
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn design(&self) -> &DesignSpec {
        &self.design
    }

    pub fn topology(&self) -> &CableTopology {
        &self.topology
    }

    pub fn n_sec(&self) -> usize {
        self.topology.n_sec()
    }

    pub fn i_con(&self) -> &[usize] {
        self.topology.i_con()
    }

    pub fn i_sec(&self) -> &[usize] {
        self.topology.i_sec()
    }

    /// Shared handle to the bare cable type.
    pub fn cable_type(&self) -> &SharedLineType {
        self.topology.cable_type()
    }

    /// Bare cable diameter (m), as currently set on the shared type.
    pub fn d0(&self) -> f64 {
        self.cable_type().borrow().d_vol
    }

    /// Bare cable mass per length (kg/m).
    pub fn m0(&self) -> f64 {
        self.cable_type().borrow().m
    }

    /// Bare cable submerged weight per length (N/m).
    pub fn w0(&self) -> f64 {
        self.cable_type().borrow().w
    }

    pub fn r_a(&self) -> Vec3 {
        self.r_a
    }

    pub fn r_b(&self) -> Vec3 {
        self.r_b
    }

    /// Heading in radians.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn rad_anch(&self) -> f64 {
        self.rad_anch
    }

    pub fn set_rad_anch(&mut self, rad_anch: f64) {
        self.rad_anch = rad_anch;
    }

    pub fn rad_fair(&self) -> f64 {
        self.rad_fair
    }

    pub fn set_rad_fair(&mut self, rad_fair: f64) {
        self.rad_fair = rad_fair;
    }

    pub fn z_anch(&self) -> f64 {
        self.z_anch
    }

    pub fn set_z_anch(&mut self, z_anch: f64) {
        self.z_anch = z_anch;
    }

    pub fn z_fair(&self) -> f64 {
        self.z_fair
    }

    pub fn set_z_fair(&mut self, z_fair: f64) {
        self.z_fair = z_fair;
    }

    /// Horizontal span used when the line model is created.
    pub fn set_span(&mut self, span: f64) {
        self.design.span = m(span);
    }

    /// Fully suspended between two platforms.
    pub fn is_shared(&self) -> bool {
        self.shared
    }

    pub fn set_shared(&mut self, shared: bool) {
        self.shared = shared;
    }

    /// Suspended and symmetric about end A.
    pub fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    pub fn set_symmetric(&mut self, symmetric: bool) {
        self.symmetric = symmetric;
    }

    pub fn rho(&self) -> f64 {
        self.rho
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    /// Register the strategy `reposition` uses to place end A.
    pub fn set_adjuster(&mut self, adjuster: impl Adjuster<M> + 'static) {
        self.adjuster = Some(Box::new(adjuster));
    }

    pub fn clear_adjuster(&mut self) {
        self.adjuster = None;
    }

    pub fn has_adjuster(&self) -> bool {
        self.adjuster.is_some()
    }

    /// The line model, once created.
    pub fn subsystem(&self) -> Option<&M> {
        self.ss.as_ref()
    }

    pub fn subsystem_mut(&mut self) -> Option<&mut M> {
        self.ss.as_mut()
    }

    pub fn loads(&self) -> &BTreeMap<String, f64> {
        &self.loads
    }

    pub fn loads_mut(&mut self) -> &mut BTreeMap<String, f64> {
        &mut self.loads
    }

    pub fn reliability(&self) -> &BTreeMap<String, f64> {
        &self.reliability
    }

    pub fn reliability_mut(&mut self) -> &mut BTreeMap<String, f64> {
        &mut self.reliability
    }
}

impl<M: LineModel + fmt::Debug> fmt::Debug for DynamicCable<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicCable")
            .field("id", &self.id)
            .field("n_sec", &self.topology.n_sec())
            .field("r_a", &self.r_a)
            .field("r_b", &self.r_b)
            .field("heading", &self.heading)
            .field("shared", &self.shared)
            .field("symmetric", &self.symmetric)
            .field("has_adjuster", &self.adjuster.is_some())
            .field("ss", &self.ss)
            .finish_non_exhaustive()
    }
}
