//! Strategies for placing end A when a cable is repositioned.

use std::collections::BTreeMap;

use fa_core::{Vec2, ensure_positive, with_depth};
use fa_lines::LineModel;
use tracing::debug;

use crate::cable::DynamicCable;
use crate::error::CableResult;
use crate::position::End;
use crate::site::SiteInfo;

/// Named numeric arguments passed through `reposition` to an adjuster.
pub type AdjustParams = BTreeMap<String, f64>;

/// Custom placement of a cable after its platform moved.
///
/// `reposition` has already placed end B when `adjust` runs. The adjuster
/// places end A and may change the cable's design (span, flags, depths).
pub trait Adjuster<M: LineModel> {
    /// * `center` - platform center (x, y)
    /// * `u` - unit vector along the cable heading
    fn adjust(
        &self,
        cable: &mut DynamicCable<M>,
        project: Option<&dyn SiteInfo>,
        center: Vec2,
        u: Vec2,
        params: &AdjustParams,
    ) -> CableResult<()>;
}

/// Radial placement at a fixed anchor radius.
///
/// The radius may be overridden per call with the `rad_anch` parameter. With
/// a project, the anchor depth is read from the site and stored as `z_anch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RadialAdjuster;

impl<M: LineModel> Adjuster<M> for RadialAdjuster {
    fn adjust(
        &self,
        cable: &mut DynamicCable<M>,
        project: Option<&dyn SiteInfo>,
        center: Vec2,
        u: Vec2,
        params: &AdjustParams,
    ) -> CableResult<()> {
        let rad_anch = params.get("rad_anch").copied().unwrap_or(cable.rad_anch());
        let xy = center + rad_anch * u;

        if let Some(site) = project {
            let depth = ensure_positive(site.depth_at(xy.x, xy.y), "site depth")?;
            cable.set_z_anch(-depth);
        }

        cable.set_end_position(with_depth(xy, cable.z_anch()), End::A, true)
    }
}

/// A cable suspended between two platforms.
///
/// End A is the fairlead of the platform at `far_center`, on the near side
/// of that platform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SharedCableAdjuster {
    pub far_center: Vec2,
}

impl<M: LineModel> Adjuster<M> for SharedCableAdjuster {
    fn adjust(
        &self,
        cable: &mut DynamicCable<M>,
        _project: Option<&dyn SiteInfo>,
        _center: Vec2,
        u: Vec2,
        _params: &AdjustParams,
    ) -> CableResult<()> {
        cable.set_shared(true);
        cable.set_symmetric(false);

        let xy = self.far_center - cable.rad_fair() * u;
        cable.set_end_position(with_depth(xy, cable.z_fair()), End::A, false)
    }
}

/// One half of a symmetric cable between two platforms `spacing` apart.
///
/// End A is the midpoint between the platforms at depth `z_mid`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SymmetricAdjuster {
    pub spacing: f64,
    pub z_mid: f64,
}

impl<M: LineModel> Adjuster<M> for SymmetricAdjuster {
    fn adjust(
        &self,
        cable: &mut DynamicCable<M>,
        _project: Option<&dyn SiteInfo>,
        center: Vec2,
        u: Vec2,
        _params: &AdjustParams,
    ) -> CableResult<()> {
        let half = 0.5 * ensure_positive(self.spacing, "platform spacing")?;
        let span = half - cable.rad_fair();
        debug!(cable = %cable.id(), span, "symmetric span");

        cable.set_shared(true);
        cable.set_symmetric(true);
        cable.set_span(span);

        cable.set_end_position(with_depth(center + half * u, self.z_mid), End::A, false)
    }
}
