use std::{collections::HashMap, sync::Arc};

use parking_lot::Mutex;

use crate::Id;

/// Hands out one mutex per entity id.
///
/// Flows that write the derived counters of a place or question hold
/// that entity's guard across the whole read-recompute-write, so
/// concurrent events targeting the same aggregate are serialized while
/// events on different aggregates proceed in parallel. Readers never
/// touch these locks.
#[derive(Debug, Default)]
pub struct AggregateLocks {
    locks: Mutex<HashMap<Id, Arc<Mutex<()>>>>,
}

impl AggregateLocks {
    pub fn guard(&self, id: &Id) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock();
        Arc::clone(locks.entry(id.clone()).or_default())
    }
}
