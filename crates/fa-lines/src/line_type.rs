//! Line type definitions and the shared type table.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Physical properties of a uniform line or bare cable.
#[derive(Debug, Clone, PartialEq)]
pub struct LineType {
    pub name: String,
    /// Volumetric diameter (m)
    pub d_vol: f64,
    /// Mass per unit length (kg/m)
    pub m: f64,
    /// Submerged weight per unit length (N/m), negative when buoyant
    pub w: f64,
    /// Axial stiffness (N)
    pub ea: f64,
}

impl LineType {
    /// Create a line type, deriving the submerged weight from the environment.
    pub fn new(name: impl Into<String>, d_vol: f64, m: f64, ea: f64, rho: f64, g: f64) -> Self {
        Self {
            name: name.into(),
            d_vol,
            m,
            w: submerged_weight(d_vol, m, rho, g),
            ea,
        }
    }
}

/// `(m - rho * pi/4 * d^2) * g`
pub fn submerged_weight(d_vol: f64, m: f64, rho: f64, g: f64) -> f64 {
    (m - rho * std::f64::consts::FRAC_PI_4 * d_vol * d_vol) * g
}

/// A line type shared by reference between its owner and a line model.
///
/// Mutations through any handle are seen by all of them.
pub type SharedLineType = Rc<RefCell<LineType>>;

/// Wrap a line type into a shared handle.
pub fn share(line_type: LineType) -> SharedLineType {
    Rc::new(RefCell::new(line_type))
}

/// Name -> line type table of a line model.
///
/// Entries are aliases, never copies; cloning the table clones handles.
#[derive(Debug, Clone, Default)]
pub struct LineTypeTable {
    types: HashMap<String, SharedLineType>,
}

impl LineTypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type under `name`, returning the handle it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        line_type: SharedLineType,
    ) -> Option<SharedLineType> {
        self.types.insert(name.into(), line_type)
    }

    pub fn get(&self, name: &str) -> Option<&SharedLineType> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
