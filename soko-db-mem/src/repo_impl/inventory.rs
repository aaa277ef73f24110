use soko_core::entities::InventoryLink;

use super::*;

impl InventoryRepo for MemoryBackend {
    fn upsert_inventory_link(&self, link: InventoryLink) -> Result<InventoryLink> {
        let mut tables = self.tables.write();
        let pair = (link.place_id.clone(), link.product_id.clone());
        if let Some(existing_id) = tables.inventory_by_pair.get(&pair).cloned() {
            log::debug!(
                "Refreshing inventory link {existing_id} for place {} / product {}",
                pair.0,
                pair.1
            );
            let existing = tables
                .inventory
                .get_mut(&existing_id)
                .ok_or(RepoError::NotFound)?;
            existing.commonly_available = link.commonly_available;
            existing.typical_price = link.typical_price;
            existing.note = link.note;
            existing.last_verified_at = link.last_verified_at;
            return Ok(existing.clone());
        }
        tables.inventory_by_pair.insert(pair, link.id.clone());
        tables.inventory.insert(link.id.clone(), link.clone());
        Ok(link)
    }

    fn load_inventory_of_place(&self, place_id: &str) -> Result<Vec<InventoryLink>> {
        Ok(self
            .tables
            .read()
            .inventory
            .values()
            .filter(|link| link.place_id.as_str() == place_id)
            .cloned()
            .collect())
    }

    fn load_inventory_of_product(&self, product_id: &str) -> Result<Vec<InventoryLink>> {
        Ok(self
            .tables
            .read()
            .inventory
            .values()
            .filter(|link| link.product_id.as_str() == product_id)
            .cloned()
            .collect())
    }
}
