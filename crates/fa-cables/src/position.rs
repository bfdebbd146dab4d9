//! End positioning of a dynamic cable.

use fa_core::units::{deg, to_radians};
use fa_core::{Vec2, Vec3, heading_unit, with_depth};
use fa_lines::LineModel;
use tracing::trace;

use crate::adjust::AdjustParams;
use crate::cable::DynamicCable;
use crate::error::{CableError, CableResult};
use crate::site::SiteInfo;

/// One end of a cable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum End {
    /// Anchor, subsea joint or far platform
    A,
    /// Fairlead
    B,
}

impl End {
    pub fn is_b(self) -> bool {
        self == End::B
    }
}

/// Selectors accepted for an end: `'a'`/`'A'`/`0`/`false` and
/// `'b'`/`'B'`/`1`/`true`.
pub trait IntoEnd {
    fn into_end(self) -> CableResult<End>;
}

fn invalid(token: impl ToString) -> CableError {
    CableError::InvalidEndSelector {
        token: token.to_string(),
    }
}

impl IntoEnd for End {
    fn into_end(self) -> CableResult<End> {
        Ok(self)
    }
}

impl IntoEnd for &str {
    fn into_end(self) -> CableResult<End> {
        match self {
            "a" | "A" => Ok(End::A),
            "b" | "B" => Ok(End::B),
            other => Err(invalid(other)),
        }
    }
}

impl IntoEnd for char {
    fn into_end(self) -> CableResult<End> {
        match self {
            'a' | 'A' => Ok(End::A),
            'b' | 'B' => Ok(End::B),
            other => Err(invalid(other)),
        }
    }
}

impl IntoEnd for bool {
    fn into_end(self) -> CableResult<End> {
        Ok(if self { End::B } else { End::A })
    }
}

macro_rules! int_into_end {
    ($($t:ty),*) => {
        $(
            impl IntoEnd for $t {
                fn into_end(self) -> CableResult<End> {
                    match self {
                        0 => Ok(End::A),
                        1 => Ok(End::B),
                        other => Err(invalid(other)),
                    }
                }
            }
        )*
    };
}

int_into_end!(u8, i32, usize);

impl<M: LineModel> DynamicCable<M> {
    /// Move the cable with its platform.
    ///
    /// End B is placed at `rad_fair` from `center` along the heading, at
    /// `z_fair`. End A is then placed by the registered adjuster, or at
    /// `rad_anch` along the heading at `z_anch` on the seabed.
    ///
    /// `heading` is in degrees when `degrees` is set, else radians; without
    /// it the stored heading is kept.
    pub fn reposition(
        &mut self,
        center: Vec2,
        heading: Option<f64>,
        project: Option<&dyn SiteInfo>,
        degrees: bool,
        params: &AdjustParams,
    ) -> CableResult<()> {
        if let Some(heading) = heading {
            self.heading = if degrees { to_radians(deg(heading)) } else { heading };
        }
        let u = heading_unit(self.heading);

        self.set_end_position(with_depth(center + self.rad_fair * u, self.z_fair), End::B, false)?;

        match self.adjuster.take() {
            Some(adjuster) => {
                let result = adjuster.adjust(self, project, center, u, params);
                // The adjuster may have registered a replacement
                if self.adjuster.is_none() {
                    self.adjuster = Some(adjuster);
                }
                result
            }
            None => self.set_end_position(
                with_depth(center + self.rad_anch * u, self.z_anch),
                End::A,
                true,
            ),
        }
    }

    /// Set the absolute position of one end.
    ///
    /// The position is forwarded to the line model if there is one; `sink`
    /// asks the model to put end A on the seabed. The model is not re-solved.
    pub fn set_end_position(&mut self, r: Vec3, end: impl IntoEnd, sink: bool) -> CableResult<()> {
        let end = end.into_end()?;
        match end {
            End::A => self.r_a = r,
            End::B => self.r_b = r,
        }
        if let Some(ss) = self.ss.as_mut() {
            ss.set_end_position(r, end.is_b(), sink);
        }
        trace!(cable = %self.id, ?end, x = r.x, y = r.y, z = r.z, sink, "end moved");
        Ok(())
    }
}
