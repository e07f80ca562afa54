//! Statistics derived from the machine list.
//!
//! Pure derivation with no state of its own: everything is recomputed from
//! scratch on every call, which is cheap at the registry's scale and keeps
//! read-after-write consistency trivial.

use crate::models::MachineRecord;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Aggregate counts and sums over the current machine list.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MachineStats {
    /// Count of all registered machines.
    pub total: u64,
    /// Machine count per welding type, in lexical type order.
    pub by_type: BTreeMap<String, u64>,
    /// Sum of idle current draw over all machines, in amps.
    pub total_idle_current: f64,
    /// Sum of welding current draw over all machines, in amps.
    pub total_welding_current: f64,
    /// Number of distinct brand values (case-sensitive).
    pub distinct_brand_count: u64,
}

impl MachineStats {
    /// Count of machines with the given welding type, 0 when unseen.
    #[must_use]
    pub fn count_for_type(&self, welding_type: &str) -> u64 {
        self.by_type.get(welding_type).copied().unwrap_or(0)
    }

    /// Count of TIG machines.
    #[must_use]
    pub fn tig(&self) -> u64 {
        self.count_for_type("TIG")
    }

    /// Count of MIG machines.
    #[must_use]
    pub fn mig(&self) -> u64 {
        self.count_for_type("MIG")
    }
}

/// Calculates aggregate statistics over the given machine list.
#[must_use]
pub fn calculate(machines: &[MachineRecord]) -> MachineStats {
    let mut by_type: BTreeMap<String, u64> = BTreeMap::new();
    let mut brands: BTreeSet<&str> = BTreeSet::new();
    let mut total_idle_current = 0.0;
    let mut total_welding_current = 0.0;

    for machine in machines {
        *by_type.entry(machine.welding_type.clone()).or_insert(0) += 1;
        brands.insert(machine.brand.as_str());
        total_idle_current += machine.idle_current_amps;
        total_welding_current += machine.welding_current_amps;
    }

    MachineStats {
        total: machines.len() as u64,
        by_type,
        total_idle_current,
        total_welding_current,
        distinct_brand_count: brands.len() as u64,
    }
}
