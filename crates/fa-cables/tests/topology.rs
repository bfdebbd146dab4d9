//! Topology invariants over arbitrary designs.

mod common;

use std::rc::Rc;

use common::design;
use fa_cables::{CableError, DynamicCable, SubcomponentRef};
use fa_lines::Subsystem;
use proptest::prelude::*;

proptest! {
    #[test]
    fn sequence_alternates_and_indices_partition(
        lengths in prop::collection::vec(1.0f64..500.0, 1..12),
    ) {
        let k = lengths.len();
        let cable: DynamicCable<Subsystem> = DynamicCable::new(design(&lengths)).unwrap();
        let topo = cable.topology();

        prop_assert_eq!(topo.len(), 2 * k + 1);
        prop_assert_eq!(cable.i_con().len(), k + 1);
        prop_assert_eq!(cable.i_sec().len(), k);

        let mut seen = vec![false; 2 * k + 1];
        for &pos in cable.i_con().iter().chain(cable.i_sec()) {
            prop_assert!(!seen[pos]);
            seen[pos] = true;
        }
        prop_assert!(seen.iter().all(|&s| s));

        for pos in 0..topo.len() {
            match topo.at(pos) {
                Some(SubcomponentRef::Connector(c)) => {
                    prop_assert_eq!(pos % 2, 0);
                    prop_assert_eq!(c.id.clone(), (pos / 2).to_string());
                }
                Some(SubcomponentRef::Section(s)) => {
                    prop_assert_eq!(pos % 2, 1);
                    prop_assert_eq!(s.id, pos / 2);
                    prop_assert_eq!(s.length, lengths[s.id]);
                    prop_assert!(Rc::ptr_eq(&s.cable_type, cable.cable_type()));
                }
                None => prop_assert!(false, "no subcomponent at {}", pos),
            }
        }
    }

    #[test]
    fn wrong_connector_count_is_a_configuration_error(
        k in 1usize..8,
        extra in prop_oneof![Just(-1i32), 1i32..3],
    ) {
        let mut d = design(&vec![100.0; k]);
        let n = (k as i32 + 1 + extra) as usize;
        d.connectors.resize(n, d.connectors[0].clone());

        let result = DynamicCable::<Subsystem>::new(d);
        prop_assert!(matches!(result, Err(CableError::Configuration { .. })), "expected CableError::Configuration");
    }
}
