use soko_core::entities::{Place, PlaceStats, Timestamp};

use super::*;

impl PlaceRepo for MemoryBackend {
    fn create_or_update_place(&self, place: Place) -> Result<()> {
        let mut tables = self.tables.write();
        tables.places.insert(place.id.clone(), place);
        Ok(())
    }

    fn get_place(&self, id: &str) -> Result<Place> {
        self.tables
            .read()
            .places
            .get(id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn get_places(&self, ids: &[&str]) -> Result<Vec<Place>> {
        let tables = self.tables.read();
        Ok(ids
            .iter()
            .filter_map(|id| tables.places.get(*id).cloned())
            .collect())
    }

    fn all_places(&self) -> Result<Vec<Place>> {
        Ok(self.tables.read().places.values().cloned().collect())
    }

    fn count_places(&self) -> Result<usize> {
        Ok(self.tables.read().places.len())
    }

    fn update_place_stats(&self, id: &str, stats: PlaceStats) -> Result<()> {
        let mut tables = self.tables.write();
        let place = tables.places.get_mut(id).ok_or(RepoError::NotFound)?;
        place.stats = stats;
        Ok(())
    }

    fn mark_place_deleted(&self, id: &str, deleted_at: Timestamp) -> Result<()> {
        let mut tables = self.tables.write();
        let place = tables.places.get_mut(id).ok_or(RepoError::NotFound)?;
        place.deleted_at = Some(deleted_at);
        Ok(())
    }
}
