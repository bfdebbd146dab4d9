//! Construction of the line model of a dynamic cable.

use std::rc::Rc;

use fa_lines::{LineError, LineModel, SubsystemParams, SuspensionCase};
use tracing::{debug, warn};

use crate::cable::DynamicCable;
use crate::error::{CableError, CableResult};

impl<M: LineModel> DynamicCable<M> {
    /// Build the line model for the current design and end positions and
    /// solve its static equilibrium.
    ///
    /// An existing model is replaced. Cable types are registered in the
    /// model by reference, so later edits to them reach the model. Connector
    /// mass, volume and drag are copied onto the model points; an anchored
    /// cable skips point 0, which sits on the anchor.
    ///
    /// The new model is kept even when the solve fails.
    pub fn create_subsystem(&mut self, case: SuspensionCase) -> CableResult<&M> {
        if self.ss.is_some() {
            warn!(cable = %self.id, "cable already has a subsystem; it will be overwritten");
        }

        let mut ss = M::new(SubsystemParams {
            depth: -self.design.z_anchor.value,
            rho: self.rho,
            g: self.g,
            span: self.design.span.value,
            r_b_fair: self.r_b,
        });

        let sections = self.topology.sections();
        let mut lengths = Vec::with_capacity(sections.len());
        let mut type_names = Vec::with_capacity(sections.len());
        for section in sections {
            let name = section.cable_type.borrow().name.clone();
            ss.line_types_mut()
                .insert(name.clone(), Rc::clone(&section.cable_type));
            lengths.push(section.length);
            type_names.push(name);
        }

        ss.build_generic(&lengths, &type_names, case)?;
        ss.set_end_position(self.r_a, false, false);
        ss.set_end_position(self.r_b, true, false);

        let start = usize::from(case.has_anchor());
        let connectors = self.topology.connectors();
        for (point, connector) in ss.points_mut().iter_mut().zip(connectors).skip(start) {
            point.m = connector.m;
            point.v = connector.v;
            point.cda = connector.cda;
        }

        let ss = self.ss.insert(ss);
        ss.static_solve()?;
        debug!(cable = %self.id, ?case, "subsystem solved");

        Ok(&*ss)
    }

    /// [`create_subsystem`](Self::create_subsystem) with the numeric
    /// selector: 0 anchored, 1 suspended, 2 symmetric.
    pub fn create_subsystem_from_selector(&mut self, case: u8) -> CableResult<&M> {
        let case = SuspensionCase::try_from(case).map_err(|e| match e {
            LineError::InvalidCase { value } => {
                CableError::config(format!("unknown suspension case {value}"))
            }
            other => CableError::Solver(other),
        })?;
        self.create_subsystem(case)
    }
}
