use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewInventoryLink {
    pub place_id: Id,
    pub product_id: Id,
    pub commonly_available: bool,
    pub typical_price: Option<Price>,
    pub note: Option<String>,
}

/// Assert that a place commonly carries a product.
///
/// Keyed by the (place, product) pair: a re-submission refreshes the
/// existing link (including `last_verified_at`) instead of duplicating.
pub fn store_inventory_link<R>(repo: &R, new: NewInventoryLink, at: Timestamp) -> Result<InventoryLink>
where
    R: InventoryRepo + PlaceRepo + ProductRepo,
{
    let NewInventoryLink {
        place_id,
        product_id,
        commonly_available,
        typical_price,
        note,
    } = new;

    if repo.get_place(place_id.as_str())?.is_deleted() {
        return Err(Error::Repo(RepoError::NotFound));
    }
    if repo.get_product(product_id.as_str())?.is_deleted() {
        return Err(Error::Repo(RepoError::NotFound));
    }

    let link = repo.upsert_inventory_link(InventoryLink {
        id: Id::new(),
        place_id,
        product_id,
        commonly_available,
        typical_price,
        note,
        last_verified_at: at,
    })?;
    Ok(link)
}
