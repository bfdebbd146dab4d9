//! Cost bookkeeping of a dynamic cable.

use std::collections::BTreeMap;

use fa_lines::LineModel;

use crate::cable::DynamicCable;

impl<M: LineModel> DynamicCable<M> {
    /// Sum of all cost entries, 0 when there are none.
    ///
    /// Entries are not checked for completeness.
    pub fn get_cost(&self) -> f64 {
        self.cost.values().sum()
    }

    /// Record a cost entry, returning the value it replaced.
    pub fn set_cost(&mut self, key: impl Into<String>, value: f64) -> Option<f64> {
        self.cost.insert(key.into(), value)
    }

    pub fn cost(&self) -> &BTreeMap<String, f64> {
        &self.cost
    }

    pub fn cost_mut(&mut self) -> &mut BTreeMap<String, f64> {
        &mut self.cost
    }
}
