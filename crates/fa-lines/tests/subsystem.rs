//! Static solves of complete subsystems.

use std::rc::Rc;

use fa_core::Vec3;
use fa_lines::line_type::share;
use fa_lines::{
    LineError, LineModel, LineType, SharedLineType, Subsystem, SubsystemParams, SuspensionCase,
};

const RHO: f64 = 1025.0;
const G: f64 = 9.81;

fn dynamic_cable_type() -> SharedLineType {
    // 200 mm cable, 50 kg/m: roughly 175 N/m submerged
    share(LineType::new("dyn_66kV", 0.2, 50.0, 5e8, RHO, G))
}

fn subsystem(depth: f64, r_b: Vec3) -> Subsystem {
    Subsystem::new(SubsystemParams {
        depth,
        rho: RHO,
        g: G,
        span: 442.0,
        r_b_fair: r_b,
    })
}

fn build(
    ss: &mut Subsystem,
    line_type: &SharedLineType,
    lengths: &[f64],
    case: SuspensionCase,
) {
    let name = line_type.borrow().name.clone();
    ss.line_types_mut().insert(name.clone(), Rc::clone(line_type));
    let names = vec![name; lengths.len()];
    ss.build_generic(lengths, &names, case).unwrap();
}

#[test]
fn anchored_cable_lays_on_seabed() {
    let cable = dynamic_cable_type();
    let mut ss = subsystem(100.0, Vec3::new(58.0, 0.0, -14.0));
    build(&mut ss, &cable, &[200.0, 280.0], SuspensionCase::Anchored);
    ss.set_end_position(Vec3::new(500.0, 0.0, -100.0), false, true);
    ss.set_end_position(Vec3::new(58.0, 0.0, -14.0), true, false);

    ss.static_solve().unwrap();
    let sol = ss.solution().unwrap().clone();

    assert!(sol.h > 1.0e4 && sol.h < 1.5e4, "H = {}", sol.h);
    assert!(sol.laid_length > 300.0 && sol.laid_length < 380.0);
    assert!(sol.v_a < 0.0);
    assert_eq!(sol.tension_a, sol.h);
    assert!(sol.tension_b > sol.h);

    // First section lies entirely on the seabed
    let points = ss.points();
    assert_eq!(points.len(), 3);
    assert!((points[1].r.z + 100.0).abs() < 1e-9);
    assert!((points[2].r - Vec3::new(58.0, 0.0, -14.0)).norm() < 1e-3);
}

#[test]
fn solve_follows_heading_of_ends() {
    let cable = dynamic_cable_type();
    let mut ss = subsystem(100.0, Vec3::new(0.0, 58.0, -14.0));
    build(&mut ss, &cable, &[200.0, 280.0], SuspensionCase::Anchored);
    ss.set_end_position(Vec3::new(0.0, 500.0, -100.0), false, true);
    ss.set_end_position(Vec3::new(0.0, 58.0, -14.0), true, false);

    ss.static_solve().unwrap();

    for point in ss.points() {
        assert!(point.r.x.abs() < 1e-9);
    }
    let last = ss.points().last().unwrap().r;
    assert!((last - Vec3::new(0.0, 58.0, -14.0)).norm() < 1e-3);
}

#[test]
fn level_suspended_cable_is_symmetric() {
    let cable = dynamic_cable_type();
    let mut ss = subsystem(200.0, Vec3::new(400.0, 0.0, -50.0));
    build(&mut ss, &cable, &[250.0, 250.0], SuspensionCase::Suspended);
    ss.set_end_position(Vec3::new(0.0, 0.0, -50.0), false, false);
    ss.set_end_position(Vec3::new(400.0, 0.0, -50.0), true, false);

    ss.static_solve().unwrap();
    let sol = ss.solution().unwrap();

    assert_eq!(sol.laid_length, 0.0);
    assert!((sol.v_a + sol.v_b).abs() < 1e-3 * sol.v_b.abs());
    assert!((sol.tension_a - sol.tension_b).abs() < 1e-3 * sol.tension_b);
    // Midpoint hangs below the ends
    assert!(ss.points()[1].r.z < -150.0);
}

#[test]
fn buoy_lifts_suspended_cable() {
    let cable = dynamic_cable_type();

    let mut bare = subsystem(200.0, Vec3::new(400.0, 0.0, -30.0));
    build(&mut bare, &cable, &[250.0, 250.0], SuspensionCase::Suspended);
    bare.set_end_position(Vec3::new(0.0, 0.0, -50.0), false, false);
    bare.set_end_position(Vec3::new(400.0, 0.0, -30.0), true, false);
    bare.static_solve().unwrap();

    let mut buoyed = bare.clone();
    buoyed.points_mut()[1].v = 2.0;
    buoyed.points_mut()[1].m = 50.0;
    buoyed.static_solve().unwrap();

    assert!(buoyed.points()[1].r.z > bare.points()[1].r.z);
}

#[test]
fn symmetric_midpoint_floats() {
    let cable = dynamic_cable_type();
    let mut ss = subsystem(200.0, Vec3::new(58.0, 0.0, -14.0));
    build(&mut ss, &cable, &[150.0, 150.0], SuspensionCase::Symmetric);
    ss.set_end_position(Vec3::new(300.0, 0.0, -60.0), false, false);
    ss.set_end_position(Vec3::new(58.0, 0.0, -14.0), true, false);

    ss.static_solve().unwrap();
    let sol = ss.solution().unwrap();

    assert_eq!(sol.v_a, 0.0);
    assert_eq!(sol.tension_a, sol.h);
    // Midpoint ends up below the fairlead by the solved rise
    assert!(ss.r_a().z < -14.0);
    assert!((ss.points()[0].r - ss.r_a()).norm() < 1e-9);
    assert!((ss.points()[2].r.x - 58.0).abs() < 1e-3);
}

#[test]
fn symmetric_midpoint_buoy_lifts_midpoint() {
    let cable = dynamic_cable_type();
    let mut bare = subsystem(200.0, Vec3::new(58.0, 0.0, -14.0));
    build(&mut bare, &cable, &[150.0, 150.0], SuspensionCase::Symmetric);
    bare.set_end_position(Vec3::new(300.0, 0.0, -60.0), false, false);
    bare.set_end_position(Vec3::new(58.0, 0.0, -14.0), true, false);

    let mut buoyed = bare.clone();
    bare.static_solve().unwrap();

    // About 9.6 kN of net lift, split between the two halves
    buoyed.points_mut()[0].m = 50.0;
    buoyed.points_mut()[0].v = 1.0;
    let lift = buoyed.points()[0].net_weight(RHO, G);
    buoyed.static_solve().unwrap();

    let bare_sol = bare.solution().unwrap();
    let sol = buoyed.solution().unwrap();
    assert_eq!(sol.v_a, 0.5 * lift);
    assert!(sol.v_a < 0.0);
    assert!(buoyed.r_a().z > bare.r_a().z + 1.0);
    assert!((sol.h - bare_sol.h).abs() > 1.0);
    assert!((buoyed.points()[2].r.x - 58.0).abs() < 1e-3);
}

#[test]
fn shared_type_edits_reach_next_solve() {
    let cable = dynamic_cable_type();
    let mut ss = subsystem(100.0, Vec3::new(58.0, 0.0, -14.0));
    build(&mut ss, &cable, &[200.0, 280.0], SuspensionCase::Anchored);
    ss.set_end_position(Vec3::new(500.0, 0.0, -100.0), false, true);
    ss.static_solve().unwrap();
    let h_light = ss.solution().unwrap().h;

    let w = cable.borrow().w;
    cable.borrow_mut().w = 2.0 * w;
    ss.static_solve().unwrap();
    let h_heavy = ss.solution().unwrap().h;

    assert!(h_heavy > 1.5 * h_light);
}

#[test]
fn length_change_is_not_solved_until_asked() {
    let cable = dynamic_cable_type();
    let mut ss = subsystem(100.0, Vec3::new(58.0, 0.0, -14.0));
    build(&mut ss, &cable, &[200.0, 280.0], SuspensionCase::Anchored);
    ss.set_end_position(Vec3::new(500.0, 0.0, -100.0), false, true);
    ss.static_solve().unwrap();
    let before = ss.solution().unwrap().clone();

    ss.lines_mut()[1].set_length(270.0);
    assert_eq!(ss.solution(), Some(&before));

    ss.static_solve().unwrap();
    assert!(ss.solution().unwrap().h > before.h);
}

#[test]
fn cable_too_long_for_span_fails_to_converge() {
    let cable = dynamic_cable_type();
    let mut ss = subsystem(100.0, Vec3::new(58.0, 0.0, -14.0));
    build(&mut ss, &cable, &[300.0, 300.0], SuspensionCase::Anchored);
    ss.set_end_position(Vec3::new(500.0, 0.0, -100.0), false, true);

    let err = ss.static_solve().unwrap_err();
    assert!(matches!(err, LineError::ConvergenceFailed { .. }));
    assert!(ss.solution().is_none());
}

#[test]
fn sink_places_anchor_on_seabed() {
    let mut ss = subsystem(120.0, Vec3::new(58.0, 0.0, -14.0));
    ss.set_end_position(Vec3::new(500.0, 0.0, -80.0), false, true);
    assert_eq!(ss.r_a(), Vec3::new(500.0, 0.0, -120.0));

    ss.set_end_position(Vec3::new(500.0, 0.0, -80.0), false, false);
    assert_eq!(ss.r_a().z, -80.0);

    // sink has no effect on the fairlead
    ss.set_end_position(Vec3::new(60.0, 0.0, -14.0), true, true);
    assert_eq!(ss.r_b(), Vec3::new(60.0, 0.0, -14.0));
}
