//! The line model contract consumed by cable and mooring designs.

use fa_core::{Vec3, ensure_positive};

use crate::elements::{Line, Point};
use crate::error::{LineError, LineResult};
use crate::line_type::LineTypeTable;

/// Topology variant of a line assembly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SuspensionCase {
    /// End A rests on the seabed.
    #[default]
    Anchored = 0,
    /// Both ends hang from floating platforms.
    Suspended = 1,
    /// Suspended and symmetric; end A is the midpoint.
    Symmetric = 2,
}

impl SuspensionCase {
    /// Whether end A terminates at a seabed anchor.
    pub fn has_anchor(self) -> bool {
        self == SuspensionCase::Anchored
    }
}

impl TryFrom<u8> for SuspensionCase {
    type Error = LineError;

    fn try_from(value: u8) -> LineResult<Self> {
        match value {
            0 => Ok(SuspensionCase::Anchored),
            1 => Ok(SuspensionCase::Suspended),
            2 => Ok(SuspensionCase::Symmetric),
            _ => Err(LineError::InvalidCase { value }),
        }
    }
}

/// Site and geometry inputs for constructing a line model.
#[derive(Clone, Debug, PartialEq)]
pub struct SubsystemParams {
    /// Water depth (m, positive)
    pub depth: f64,
    /// Water density (kg/m^3)
    pub rho: f64,
    /// Gravity (m/s^2)
    pub g: f64,
    /// Horizontal span between the ends (m)
    pub span: f64,
    /// Fairlead (end B) position
    pub r_b_fair: Vec3,
}

/// A line-mechanics model: a chain of lines joined by points, solved for
/// static equilibrium between end A and end B.
///
/// Points are numbered from end A (point 0) to end B (last point); line `i`
/// joins point `i` to point `i + 1`.
pub trait LineModel {
    /// Create an empty model for a site.
    fn new(params: SubsystemParams) -> Self
    where
        Self: Sized;

    /// Mutable name -> type table used by `build_generic`.
    fn line_types_mut(&mut self) -> &mut LineTypeTable;

    /// (Re)build lines and points from ordered lengths and type names.
    fn build_generic(
        &mut self,
        lengths: &[f64],
        type_names: &[String],
        case: SuspensionCase,
    ) -> LineResult<()>;

    /// Move end A (`end_b == false`) or end B.
    ///
    /// With `sink`, end A is placed on the seabed instead of the supplied depth.
    fn set_end_position(&mut self, r: Vec3, end_b: bool, sink: bool);

    fn lines_mut(&mut self) -> &mut [Line];

    fn points_mut(&mut self) -> &mut [Point];

    /// Solve static equilibrium for the current ends, lengths and loads.
    fn static_solve(&mut self) -> LineResult<()>;
}

/// Build the line and point lists shared by every model implementation.
///
/// Points are spread evenly on the straight segment from `r_a` to `r_b`.
pub fn build_elements(
    table: &LineTypeTable,
    lengths: &[f64],
    type_names: &[String],
    r_a: Vec3,
    r_b: Vec3,
) -> LineResult<(Vec<Line>, Vec<Point>)> {
    if lengths.is_empty() {
        return Err(LineError::ProblemSetup {
            what: "at least one line section is required".to_string(),
        });
    }
    if lengths.len() != type_names.len() {
        return Err(LineError::ProblemSetup {
            what: format!(
                "{} lengths but {} type names",
                lengths.len(),
                type_names.len()
            ),
        });
    }

    let mut lines = Vec::with_capacity(lengths.len());
    for (i, (&length, name)) in lengths.iter().zip(type_names).enumerate() {
        ensure_positive(length, "line length")?;
        let line_type = table
            .get(name)
            .ok_or_else(|| LineError::UnknownLineType { name: name.clone() })?;
        lines.push(Line::new(i, length, name.clone(), line_type.clone()));
    }

    let n = lines.len();
    let points = (0..=n)
        .map(|i| {
            let t = i as f64 / n as f64;
            Point::new(i, r_a + (r_b - r_a) * t)
        })
        .collect();

    Ok((lines, points))
}
