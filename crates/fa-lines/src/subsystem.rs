//! Quasi-static subsystem: one multi-section line between two ends.
//!
//! The equilibrium is found by shooting: given the horizontal tension `H`
//! and the vertical tension `V_A` at end A, the line is integrated section by
//! section (see [`crate::catenary`]) and the unknowns are adjusted with a
//! Newton iteration until the far end lands on end B.
//!
//! - `Anchored`: unknowns `[H, V_A]`; a negative `V_A` lays line on the seabed.
//! - `Suspended`: unknowns `[H, V_A]`; no seabed contact.
//! - `Symmetric`: end A is the midpoint, where `V_A` is half the net load of
//!   the midpoint connector; unknown `[H]`, and the midpoint depth follows
//!   from the solved shape.

use fa_core::{Vec3, horizontal};
use nalgebra::DVector;
use tracing::debug;

use crate::catenary::{self, SectionLoad};
use crate::elements::{Line, Point};
use crate::error::{LineError, LineResult};
use crate::jacobian::finite_difference_jacobian;
use crate::line_type::LineTypeTable;
use crate::model::{LineModel, SubsystemParams, SuspensionCase, build_elements};
use crate::newton::{NewtonConfig, newton_solve};

/// Lower bound on the horizontal tension unknown (N).
const MIN_HORIZONTAL_TENSION: f64 = 1e-3;

/// Ends closer than this horizontally (m) cannot define a line plane.
const MIN_HORIZONTAL_SPAN: f64 = 1e-9;

/// Converged static state of a subsystem.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSolution {
    /// Horizontal tension (N), constant along the line
    pub h: f64,
    /// Vertical tension at end A (N)
    pub v_a: f64,
    /// Vertical tension at end B (N)
    pub v_b: f64,
    /// Effective tension at end A (N)
    pub tension_a: f64,
    /// Effective tension at end B (N)
    pub tension_b: f64,
    /// Line length resting on the seabed (m)
    pub laid_length: f64,
    pub iterations: usize,
    pub residual_norm: f64,
}

/// A line assembly solved with elastic catenary sections.
#[derive(Debug, Clone)]
pub struct Subsystem {
    depth: f64,
    rho: f64,
    g: f64,
    span: f64,
    r_a: Vec3,
    r_b: Vec3,
    case: SuspensionCase,
    line_types: LineTypeTable,
    lines: Vec<Line>,
    points: Vec<Point>,
    newton: NewtonConfig,
    solution: Option<LineSolution>,
}

impl Subsystem {
    /// Result of the last successful solve.
    ///
    /// Moving an end or changing a length does not clear it; it then
    /// describes the previous geometry until the next `static_solve`.
    pub fn solution(&self) -> Option<&LineSolution> {
        self.solution.as_ref()
    }

    pub fn r_a(&self) -> Vec3 {
        self.r_a
    }

    pub fn r_b(&self) -> Vec3 {
        self.r_b
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn span(&self) -> f64 {
        self.span
    }

    pub fn case(&self) -> SuspensionCase {
        self.case
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn line_types(&self) -> &LineTypeTable {
        &self.line_types
    }

    /// Snapshot section loads from the (shared) line types.
    fn section_loads(&self) -> LineResult<Vec<SectionLoad>> {
        self.lines
            .iter()
            .map(|line| {
                let line_type = line.line_type();
                let load = SectionLoad {
                    length: line.length,
                    w: line_type.w,
                    ea: line_type.ea,
                };
                if !(load.length > 0.0 && load.ea > 0.0 && load.w.is_finite()) {
                    return Err(LineError::ProblemSetup {
                        what: format!(
                            "line {} ({}) needs positive length and stiffness and finite weight",
                            line.number, line.type_name
                        ),
                    });
                }
                Ok(load)
            })
            .collect()
    }
}

/// Starting values for `[H, V_A]`.
///
/// A slack line uses the parabolic sag estimate, a taut one the stretch
/// needed to reach the chord.
fn initial_guess(x_span: f64, z_span: f64, length: f64, weight: f64, ea: f64) -> (f64, f64) {
    let chord = x_span.hypot(z_span);
    let h = if length > chord {
        let sag = (3.0 * chord * (length - chord) / 8.0).sqrt();
        weight.abs() * x_span / (8.0 * sag)
    } else {
        ea * (chord / length - 1.0) * x_span / chord + weight.abs()
    };
    let h = h.max(1.0);
    (h, h * z_span / x_span - weight / 2.0)
}

impl LineModel for Subsystem {
    fn new(params: SubsystemParams) -> Self {
        let r_b = params.r_b_fair;
        Self {
            depth: params.depth,
            rho: params.rho,
            g: params.g,
            span: params.span,
            r_a: Vec3::new(r_b.x - params.span, r_b.y, -params.depth),
            r_b,
            case: SuspensionCase::default(),
            line_types: LineTypeTable::new(),
            lines: Vec::new(),
            points: Vec::new(),
            newton: NewtonConfig::default(),
            solution: None,
        }
    }

    fn line_types_mut(&mut self) -> &mut LineTypeTable {
        &mut self.line_types
    }

    fn build_generic(
        &mut self,
        lengths: &[f64],
        type_names: &[String],
        case: SuspensionCase,
    ) -> LineResult<()> {
        let (lines, points) =
            build_elements(&self.line_types, lengths, type_names, self.r_a, self.r_b)?;
        self.lines = lines;
        self.points = points;
        self.case = case;
        self.solution = None;
        Ok(())
    }

    fn set_end_position(&mut self, r: Vec3, end_b: bool, sink: bool) {
        if end_b {
            self.r_b = r;
            if let Some(point) = self.points.last_mut() {
                point.r = r;
            }
        } else {
            let mut r = r;
            if sink {
                r.z = -self.depth;
            }
            self.r_a = r;
            if let Some(point) = self.points.first_mut() {
                point.r = r;
            }
        }
    }

    fn lines_mut(&mut self) -> &mut [Line] {
        &mut self.lines
    }

    fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    fn static_solve(&mut self) -> LineResult<()> {
        if self.lines.is_empty() {
            return Err(LineError::ProblemSetup {
                what: "no lines to solve; build_generic must run first".to_string(),
            });
        }

        let sections = self.section_loads()?;
        let loads: Vec<f64> = self
            .points
            .iter()
            .map(|p| p.net_weight(self.rho, self.g))
            .collect();

        let horiz = horizontal(&self.r_b) - horizontal(&self.r_a);
        let x_span = horiz.norm();
        if x_span < MIN_HORIZONTAL_SPAN {
            return Err(LineError::ProblemSetup {
                what: "end A and end B are vertically aligned".to_string(),
            });
        }
        let dir = horiz / x_span;
        let z_span = self.r_b.z - self.r_a.z;
        let seabed = self.case.has_anchor();

        let length: f64 = sections.iter().map(|s| s.length).sum();
        let interior = loads.len().saturating_sub(1);
        let weight = sections.iter().map(|s| s.w * s.length).sum::<f64>()
            + loads.iter().take(interior).skip(1).sum::<f64>();
        let mean_ea = sections.iter().map(|s| s.ea * s.length).sum::<f64>() / length;

        let config = NewtonConfig {
            lower_bounds: vec![(0, MIN_HORIZONTAL_TENSION)],
            ..self.newton.clone()
        };
        let (h0, v0) = initial_guess(x_span, z_span, length, weight, mean_ea);

        let (h, v_a, result) = match self.case {
            SuspensionCase::Anchored | SuspensionCase::Suspended => {
                let residual = |x: &DVector<f64>| -> LineResult<DVector<f64>> {
                    let p = catenary::walk(x[0], x[1], &sections, &loads, seabed)?;
                    Ok(DVector::from_vec(vec![p.dx - x_span, p.dz - z_span]))
                };
                let jacobian = |x: &DVector<f64>| {
                    finite_difference_jacobian(x, &residual, config.fd_epsilon)
                };
                let x0 = DVector::from_vec(vec![h0, v0]);
                let result = newton_solve(x0, &residual, jacobian, &config)?;
                (result.x[0], result.x[1], result)
            }
            SuspensionCase::Symmetric => {
                // Each half carries half of the midpoint load
                let v_mid = 0.5 * loads.first().copied().unwrap_or(0.0);
                let residual = |x: &DVector<f64>| -> LineResult<DVector<f64>> {
                    let p = catenary::walk(x[0], v_mid, &sections, &loads, false)?;
                    Ok(DVector::from_element(1, p.dx - x_span))
                };
                let jacobian = |x: &DVector<f64>| {
                    finite_difference_jacobian(x, &residual, config.fd_epsilon)
                };
                let x0 = DVector::from_element(1, h0);
                let result = newton_solve(x0, &residual, jacobian, &config)?;
                (result.x[0], v_mid, result)
            }
        };

        let profile = catenary::walk(h, v_a, &sections, &loads, seabed)?;

        // The midpoint of a symmetric line floats to where the shape puts it
        if self.case == SuspensionCase::Symmetric {
            self.r_a.z = self.r_b.z - profile.dz;
        }
        for (point, &(s, z)) in self.points.iter_mut().zip(&profile.nodes) {
            point.r = Vec3::new(
                self.r_a.x + dir.x * s,
                self.r_a.y + dir.y * s,
                self.r_a.z + z,
            );
        }

        // Frictionless seabed: only H reaches an anchor with laid line
        let tension_a = if seabed && v_a < 0.0 { h } else { h.hypot(v_a) };

        debug!(
            case = ?self.case,
            h,
            v_a,
            v_b = profile.v_b,
            laid = profile.laid_length,
            iterations = result.iterations,
            "subsystem solved"
        );

        self.solution = Some(LineSolution {
            h,
            v_a,
            v_b: profile.v_b,
            tension_a,
            tension_b: h.hypot(profile.v_b),
            laid_length: profile.laid_length,
            iterations: result.iterations,
            residual_norm: result.residual_norm,
        });

        Ok(())
    }
}
