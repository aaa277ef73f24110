use std::{collections::HashMap, sync::Arc};

use anyhow::Result as Fallible;
use parking_lot::{Mutex, RwLock};

use soko_core::{
    db::{FilterConstraints, PlaceFacets, PlaceFilterIndex},
    entities::{distance, Id},
};

#[derive(Debug, Default, Clone)]
struct Snapshot {
    facets_by_place: HashMap<Id, PlaceFacets>,
    generation: u64,
}

fn text_matches(wanted: &str, actual: &str) -> bool {
    wanted.to_lowercase() == actual.to_lowercase()
}

fn matches(facets: &PlaceFacets, constraints: &FilterConstraints) -> bool {
    if let Some(city) = &constraints.city {
        if !text_matches(city, &facets.city) {
            return false;
        }
    }
    if let Some(region) = &constraints.region {
        match &facets.region {
            Some(actual) if text_matches(region, actual) => {}
            _ => return false,
        }
    }
    if let Some(postal_code) = &constraints.postal_code {
        if facets.postal_code.as_deref() != Some(postal_code.as_str()) {
            return false;
        }
    }
    if let Some((center, radius_km)) = &constraints.within {
        // Places without known coordinates never match a radius query.
        match &facets.pos {
            Some(pos) if distance(center, pos) <= *radius_km => {}
            _ => return false,
        }
    }
    if !constraints.place_types.is_empty() && !constraints.place_types.contains(&facets.place_type)
    {
        return false;
    }
    if constraints.delivery_only && !facets.delivery {
        return false;
    }
    if let Some(mode) = constraints.payment {
        if !facets.payment.accepts(mode) {
            return false;
        }
    }
    true
}

/// Facet index over non-tombstoned places with copy-then-swap snapshot
/// semantics. An empty constraint set matches every indexed place.
#[derive(Debug, Default)]
pub struct InMemFacetIndex {
    snapshot: RwLock<Arc<Snapshot>>,
    write_guard: Mutex<()>,
}

impl InMemFacetIndex {
    pub fn new() -> Self {
        Default::default()
    }

    fn load(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot.read())
    }

    fn publish(&self, next: Snapshot) {
        *self.snapshot.write() = Arc::new(next);
    }
}

impl PlaceFilterIndex for InMemFacetIndex {
    fn upsert_place(&self, id: &Id, facets: PlaceFacets) -> Fallible<()> {
        let _guard = self.write_guard.lock();
        let mut next = Snapshot::clone(&self.load());
        next.facets_by_place.insert(id.clone(), facets);
        next.generation += 1;
        self.publish(next);
        Ok(())
    }

    fn remove_place(&self, id: &Id) -> Fallible<()> {
        let _guard = self.write_guard.lock();
        let snapshot = self.load();
        if !snapshot.facets_by_place.contains_key(id) {
            log::debug!("Place {id} was not indexed; nothing to remove");
            return Ok(());
        }
        let mut next = Snapshot::clone(&snapshot);
        next.facets_by_place.remove(id);
        next.generation += 1;
        self.publish(next);
        Ok(())
    }

    fn filter_places(&self, constraints: &FilterConstraints) -> Fallible<Vec<Id>> {
        let snapshot = self.load();
        let mut ids: Vec<Id> = snapshot
            .facets_by_place
            .iter()
            .filter(|(_, facets)| matches(facets, constraints))
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort_unstable();
        Ok(ids)
    }

    fn generation(&self) -> u64 {
        self.load().generation
    }
}
