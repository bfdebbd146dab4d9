//! Lines and points of a line model.

use std::cell::Ref;

use fa_core::Vec3;

use crate::line_type::{LineType, SharedLineType};

/// One uniform section of a line model.
#[derive(Debug, Clone)]
pub struct Line {
    /// Position in the model's line list
    pub number: usize,
    /// Unstretched length (m)
    pub length: f64,
    pub type_name: String,
    line_type: SharedLineType,
}

impl Line {
    pub fn new(
        number: usize,
        length: f64,
        type_name: impl Into<String>,
        line_type: SharedLineType,
    ) -> Self {
        Self {
            number,
            length,
            type_name: type_name.into(),
            line_type,
        }
    }

    pub fn set_length(&mut self, length: f64) {
        self.length = length;
    }

    /// Current properties of the (shared) line type.
    pub fn line_type(&self) -> Ref<'_, LineType> {
        self.line_type.borrow()
    }

    pub fn shared_type(&self) -> &SharedLineType {
        &self.line_type
    }
}

/// A point joining two lines, or a line end.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Position in the model's point list
    pub number: usize,
    /// Lumped mass (kg)
    pub m: f64,
    /// Displaced volume (m^3)
    pub v: f64,
    /// Drag area (m^2)
    pub cda: f64,
    /// Absolute position (m)
    pub r: Vec3,
}

impl Point {
    pub fn new(number: usize, r: Vec3) -> Self {
        Self {
            number,
            m: 0.0,
            v: 0.0,
            cda: 0.0,
            r,
        }
    }

    /// Net downward load `(m - rho * v) * g`, negative for buoys.
    pub fn net_weight(&self, rho: f64, g: f64) -> f64 {
        (self.m - rho * self.v) * g
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_type::share;

    #[test]
    fn buoy_has_negative_net_weight() {
        let mut p = Point::new(1, Vec3::zeros());
        p.m = 500.0;
        p.v = 2.0;
        assert!(p.net_weight(1025.0, 9.81) < 0.0);
    }

    #[test]
    fn line_sees_type_updates() {
        let shared = share(LineType::new("dyn", 0.2, 50.0, 5e8, 1025.0, 9.81));
        let mut line = Line::new(0, 100.0, "dyn", shared.clone());
        line.set_length(120.0);
        shared.borrow_mut().m = 60.0;
        assert_eq!(line.length, 120.0);
        assert_eq!(line.line_type().m, 60.0);
    }
}
