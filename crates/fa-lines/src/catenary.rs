//! Elastic catenary integration along a multi-section line.
//!
//! Tensions are split into a horizontal component `H`, constant along the
//! line, and a vertical component `V` that grows by the submerged weight of
//! each section and the net weight of each interior point. `V` is measured
//! along the direction of travel from end A, so a negative `V_A` means the
//! line leaves end A heading downwards.

use crate::error::{LineError, LineResult};

/// Below this `|w * L|` (N) a section is integrated as a straight element.
const STRAIGHT_LOAD_EPS: f64 = 1e-9;

/// Mechanical inputs of one section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionLoad {
    /// Unstretched length (m)
    pub length: f64,
    /// Submerged weight per length (N/m)
    pub w: f64,
    /// Axial stiffness (N)
    pub ea: f64,
}

/// Result of walking the line from end A to end B.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    /// Horizontal extent (m)
    pub dx: f64,
    /// Vertical rise from A to B (m)
    pub dz: f64,
    /// Vertical tension at end B (N)
    pub v_b: f64,
    /// Length resting on the seabed (m)
    pub laid_length: f64,
    /// (horizontal, vertical) offset of every point from end A
    pub nodes: Vec<(f64, f64)>,
}

/// Horizontal and vertical extent of one suspended section, plus the
/// vertical tension at its far end.
pub fn section_span(h: f64, v0: f64, load: &SectionLoad) -> (f64, f64, f64) {
    let SectionLoad { length, w, ea } = *load;
    let v1 = v0 + w * length;

    // Stretch under the mean tension components
    let dx_elastic = h * length / ea;
    let dz_elastic = length * (v0 + v1) / (2.0 * ea);

    if (w * length).abs() < STRAIGHT_LOAD_EPS {
        let t0 = h.hypot(v0);
        return (
            h * length / t0 + dx_elastic,
            v0 * length / t0 + dz_elastic,
            v1,
        );
    }

    let dx = h / w * ((v1 / h).asinh() - (v0 / h).asinh());
    let dz = (v1.hypot(h) - v0.hypot(h)) / w;
    (dx + dx_elastic, dz + dz_elastic, v1)
}

/// Integrate the line from end A given `H` and `V_A`.
///
/// `point_loads[i]` is the net downward load of point `i`; the end points
/// (first and last entries) are carried by their supports and ignored.
/// With `seabed`, the line starts on a frictionless seabed at end A and the
/// length needed to bring `V` up to zero lies flat.
pub fn walk(
    h: f64,
    v_a: f64,
    sections: &[SectionLoad],
    point_loads: &[f64],
    seabed: bool,
) -> LineResult<Profile> {
    if !(h > 0.0 && h.is_finite()) {
        return Err(LineError::Numeric {
            what: format!("horizontal tension must be positive, got {}", h),
        });
    }
    if !v_a.is_finite() {
        return Err(LineError::Numeric {
            what: format!("non-finite vertical tension {}", v_a),
        });
    }

    let mut x = 0.0;
    let mut z = 0.0;
    let mut v = v_a;
    let mut laid = 0.0;
    let mut on_seabed = seabed;
    let mut nodes = Vec::with_capacity(sections.len() + 1);
    nodes.push((0.0, 0.0));

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            v += point_loads.get(i).copied().unwrap_or(0.0);
        }

        let mut remaining = section.length;

        if on_seabed && v < 0.0 && section.w > 0.0 {
            let lb = (-v / section.w).min(remaining);
            x += lb + h * lb / section.ea;
            laid += lb;
            v += section.w * lb;
            remaining -= lb;
        }

        if remaining > 0.0 {
            on_seabed = false;
            let part = SectionLoad {
                length: remaining,
                ..*section
            };
            let (dx, dz, v1) = section_span(h, v, &part);
            x += dx;
            z += dz;
            v = v1;
        }

        nodes.push((x, z));
    }

    Ok(Profile {
        dx: x,
        dz: z,
        v_b: v,
        laid_length: laid,
        nodes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f64 = 200.0;
    const EA: f64 = 1e12;

    fn section(length: f64) -> SectionLoad {
        SectionLoad { length, w: W, ea: EA }
    }

    #[test]
    fn catenary_from_vertex_matches_closed_form() {
        // Starting horizontally: z = a (cosh(x/a) - 1), s = a sinh(x/a)
        let h = 10_000.0;
        let a = h / W;
        let (dx, dz, v1) = section_span(h, 0.0, &section(100.0));

        let x_expected = a * (100.0 / a).asinh();
        let z_expected = a * ((x_expected / a).cosh() - 1.0);
        assert!((dx - x_expected).abs() < 1e-5);
        assert!((dz - z_expected).abs() < 1e-5);
        assert!((v1 - W * 100.0).abs() < 1e-9);
    }

    #[test]
    fn weightless_section_is_straight() {
        let load = SectionLoad {
            length: 50.0,
            w: 0.0,
            ea: EA,
        };
        let (dx, dz, v1) = section_span(3.0, 4.0, &load);
        assert!((dx - 30.0).abs() < 1e-6);
        assert!((dz - 40.0).abs() < 1e-6);
        assert_eq!(v1, 4.0);
    }

    #[test]
    fn elastic_stretch_adds_length() {
        let stiff = section_span(1e4, 0.0, &section(100.0)).0;
        let soft = section_span(
            1e4,
            0.0,
            &SectionLoad {
                length: 100.0,
                w: W,
                ea: 1e6,
            },
        )
        .0;
        assert!(soft > stiff);
    }

    #[test]
    fn seabed_portion_lies_flat() {
        let sections = [section(100.0), section(100.0)];
        let loads = [0.0, 0.0, 0.0];
        // V_A = -150 m of weight: 150 m on the seabed, 50 m suspended
        let profile = walk(5_000.0, -150.0 * W, &sections, &loads, true).unwrap();

        assert!((profile.laid_length - 150.0).abs() < 1e-9);
        assert_eq!(profile.nodes[1], (100.0 + 5_000.0 * 100.0 / EA, 0.0));
        assert!(profile.dz > 0.0);
        assert!((profile.v_b - 50.0 * W).abs() < 1e-6);
    }

    #[test]
    fn without_seabed_line_dips_below_end_a() {
        let sections = [section(100.0)];
        let profile = walk(5_000.0, -50.0 * W, &sections, &[0.0, 0.0], false).unwrap();
        assert_eq!(profile.laid_length, 0.0);
        // Symmetric about the vertex: same height at both ends
        assert!(profile.dz.abs() < 1e-6);
    }

    #[test]
    fn interior_point_loads_shift_vertical_tension() {
        let sections = [section(50.0), section(50.0)];
        let buoy = -2_000.0;
        let profile = walk(5_000.0, 0.0, &sections, &[123.0, buoy, 456.0], false).unwrap();
        assert!((profile.v_b - (100.0 * W + buoy)).abs() < 1e-6);
    }

    #[test]
    fn non_positive_horizontal_tension_is_rejected() {
        let sections = [section(10.0)];
        assert!(walk(0.0, 0.0, &sections, &[0.0, 0.0], false).is_err());
        assert!(walk(-1.0, 0.0, &sections, &[0.0, 0.0], false).is_err());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn vertical_tension_gains_carried_weight(
                h in 1.0e3f64..1.0e5,
                v_a in -5.0e4f64..5.0e4,
                lengths in prop::collection::vec(10.0f64..300.0, 1..5),
            ) {
                let sections: Vec<SectionLoad> = lengths.iter().map(|&l| section(l)).collect();
                let loads = vec![0.0; sections.len() + 1];
                let profile = walk(h, v_a, &sections, &loads, false).unwrap();

                let weight: f64 = lengths.iter().sum::<f64>() * W;
                prop_assert!((profile.v_b - v_a - weight).abs() < 1e-6 * weight.max(1.0));
                prop_assert_eq!(profile.nodes.len(), sections.len() + 1);
                prop_assert!(profile.nodes.windows(2).all(|p| p[1].0 > p[0].0));
            }
        }
    }
}
