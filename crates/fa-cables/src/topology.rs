//! Connector/section topology of a dynamic cable.
//!
//! A design is turned into the alternating sequence
//! `[C0, S0, C1, S1, ..., Cn]`. Connectors sit at the even positions
//! (`i_con`) and sections at the odd ones (`i_sec`).

use std::collections::HashMap;
use std::rc::Rc;

use fa_core::{EdgeId, NodeId, Tolerances, ensure_non_negative, ensure_positive, nearly_equal};
use fa_graph::{Chain, ChainBuilder, PositionIndex, Subcomponent};
use fa_lines::{LineType, SharedLineType};
use fa_lines::line_type::share;

use crate::design::{CableTypeSpec, ConnectorSpec, DesignSpec};
use crate::error::{CableError, CableResult};

/// A joint, buoy or end of the cable.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    /// `kind + index` when the design names a kind, else the bare index
    pub id: String,
    pub kind: Option<String>,
    /// Mass (kg)
    pub m: f64,
    /// Displaced volume (m^3)
    pub v: f64,
    /// Drag area (m^2)
    pub cda: f64,
    pub node: NodeId,
}

impl Connector {
    fn from_spec(index: usize, spec: &ConnectorSpec, node: NodeId) -> CableResult<Self> {
        let id = match &spec.kind {
            Some(kind) => format!("{kind}{index}"),
            None => index.to_string(),
        };
        let check = |v: f64, what| {
            ensure_non_negative(v, what)
                .map_err(|e| CableError::config(format!("connector {id}: {e}")))
        };
        let m = check(spec.mass.value, "mass")?;
        let v = check(spec.volume.value, "volume")?;
        let cda = check(spec.cda.value, "drag area")?;

        Ok(Self {
            id,
            kind: spec.kind.clone(),
            m,
            v,
            cda,
            node,
        })
    }
}

/// One uniform section of the cable.
#[derive(Debug, Clone)]
pub struct Section {
    pub id: usize,
    /// Unstretched length (m)
    pub length: f64,
    pub cable_type: SharedLineType,
    pub edge: EdgeId,
}

/// A subcomponent resolved from a sequence position.
#[derive(Debug, Clone, Copy)]
pub enum SubcomponentRef<'a> {
    Connector(&'a Connector),
    Section(&'a Section),
}

/// Cable types of a design, registered once per name.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: Vec<SharedLineType>,
    by_name: HashMap<String, usize>,
}

/// Two derivations of one cable type agree up to rounding.
fn same_properties(a: &LineType, b: &LineType) -> bool {
    let tol = Tolerances::default();
    [(a.d_vol, b.d_vol), (a.m, b.m), (a.w, b.w), (a.ea, b.ea)]
        .iter()
        .all(|&(x, y)| nearly_equal(x, y, tol))
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the handle for `spec`, creating it on first use.
    ///
    /// A second spec with the same name must describe the same cable.
    pub fn register(&mut self, spec: &CableTypeSpec, rho: f64, g: f64) -> CableResult<SharedLineType> {
        let line_type = spec.to_line_type(rho, g)?;

        if let Some(&i) = self.by_name.get(&spec.name) {
            let existing = &self.types[i];
            if !same_properties(&existing.borrow(), &line_type) {
                return Err(CableError::config(format!(
                    "conflicting definitions for cable type '{}'",
                    spec.name
                )));
            }
            return Ok(Rc::clone(existing));
        }

        let shared = share(line_type);
        self.by_name.insert(spec.name.clone(), self.types.len());
        self.types.push(Rc::clone(&shared));
        Ok(shared)
    }

    pub fn get(&self, name: &str) -> Option<&SharedLineType> {
        self.by_name.get(name).map(|&i| &self.types[i])
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Types in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &SharedLineType> {
        self.types.iter()
    }
}

/// The built topology of a cable.
#[derive(Debug, Clone)]
pub struct CableTopology {
    chain: Chain,
    index: PositionIndex,
    connectors: Vec<Connector>,
    sections: Vec<Section>,
    types: TypeRegistry,
    cable_type: SharedLineType,
}

impl CableTopology {
    /// Build the topology of a design in an environment of density `rho`
    /// and gravity `g`.
    pub fn build(design: &DesignSpec, rho: f64, g: f64) -> CableResult<Self> {
        let n_sec = design.sections.len();
        if n_sec == 0 {
            return Err(CableError::config("a cable needs at least one section"));
        }
        if design.connectors.len() != n_sec + 1 {
            return Err(CableError::config(format!(
                "{} sections need {} connectors, got {}",
                n_sec,
                n_sec + 1,
                design.connectors.len()
            )));
        }

        let mut types = TypeRegistry::new();
        let cable_type = types.register(&design.cable_type, rho, g)?;

        let mut builder = ChainBuilder::new();
        let nodes: Vec<NodeId> = (0..design.connectors.len())
            .map(|i| builder.add_node(format!("C{i}")))
            .collect();

        let connectors = design
            .connectors
            .iter()
            .zip(&nodes)
            .enumerate()
            .map(|(i, (spec, &node))| Connector::from_spec(i, spec, node))
            .collect::<CableResult<Vec<_>>>()?;

        let mut sections = Vec::with_capacity(n_sec);
        for (i, spec) in design.sections.iter().enumerate() {
            let length = ensure_positive(spec.length.value, "section length").map_err(|e| {
                CableError::config(format!("section {i}: {e}"))
            })?;
            let cable_type = match &spec.cable_type {
                Some(own) => types.register(own, rho, g)?,
                None => Rc::clone(&cable_type),
            };
            let edge = builder.add_edge(format!("S{i}"), nodes[i], nodes[i + 1]);
            sections.push(Section {
                id: i,
                length,
                cable_type,
                edge,
            });
        }

        let chain = builder.build()?;
        let index = PositionIndex::from_chain(&chain);

        Ok(Self {
            chain,
            index,
            connectors,
            sections,
            types,
            cable_type,
        })
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub(crate) fn section_mut(&mut self, i: usize) -> Option<&mut Section> {
        self.sections.get_mut(i)
    }

    pub fn n_sec(&self) -> usize {
        self.sections.len()
    }

    /// Length of the subcomponent sequence, `2 * n_sec + 1`.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn i_con(&self) -> &[usize] {
        self.chain.i_con()
    }

    pub fn i_sec(&self) -> &[usize] {
        self.chain.i_sec()
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// The bare cable type.
    pub fn cable_type(&self) -> &SharedLineType {
        &self.cable_type
    }

    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// Subcomponent at a sequence position.
    pub fn at(&self, pos: usize) -> Option<SubcomponentRef<'_>> {
        match self.index.at(pos)? {
            Subcomponent::Node(id) => self.connectors.get(id.slot()).map(SubcomponentRef::Connector),
            Subcomponent::Edge(id) => self.sections.get(id.slot()).map(SubcomponentRef::Section),
        }
    }

    /// Sequence position of section `i`.
    pub fn section_pos(&self, i: usize) -> CableResult<usize> {
        let section = self.sections.get(i).ok_or(CableError::IndexOutOfBounds {
            index: i,
            len: self.sections.len(),
        })?;
        Ok(self.index.edge_pos(section.edge)?)
    }

    /// Sequence position of connector `i`.
    pub fn connector_pos(&self, i: usize) -> CableResult<usize> {
        let connector = self.connectors.get(i).ok_or(CableError::IndexOutOfBounds {
            index: i,
            len: self.connectors.len(),
        })?;
        Ok(self.index.node_pos(connector.node)?)
    }
}
