use std::cmp::Ordering;

use super::prelude::*;

fn availability_order(
    a: &(AvgRating, Timestamp, &Id),
    b: &(AvgRating, Timestamp, &Id),
) -> Ordering {
    f64::from(b.0)
        .total_cmp(&f64::from(a.0))
        .then_with(|| b.1.cmp(&a.1))
        .then_with(|| a.2.cmp(b.2))
}

/// Who carries this product: places joined via their inventory links,
/// ordered by place rating, verification freshness and id.
///
/// By default only links with `commonly_available = true` are returned;
/// `include_unavailable` appends the remaining links after all
/// available ones, ordered the same way.
pub fn places_for_product<R>(
    repo: &R,
    product_id: &str,
    include_unavailable: bool,
) -> Result<Vec<(Place, InventoryLink)>>
where
    R: PlaceRepo + ProductRepo + InventoryRepo,
{
    if repo.get_product(product_id)?.is_deleted() {
        return Err(Error::Repo(RepoError::NotFound));
    }
    let mut rows = Vec::new();
    for link in repo.load_inventory_of_product(product_id)? {
        let place = repo.get_place(link.place_id.as_str())?;
        if place.is_deleted() {
            continue;
        }
        rows.push((place, link));
    }
    rows.sort_by(|(pa, la), (pb, lb)| {
        lb.commonly_available
            .cmp(&la.commonly_available)
            .then_with(|| {
                availability_order(
                    &(pa.stats.rating, la.last_verified_at, &pa.id),
                    &(pb.stats.rating, lb.last_verified_at, &pb.id),
                )
            })
    });
    if !include_unavailable {
        rows.retain(|(_, link)| link.commonly_available);
    }
    Ok(rows)
}

/// What does this place carry: products joined via the place's
/// inventory links. The place-rating key is constant within one place,
/// so the effective order is verification freshness, then product id.
pub fn products_for_place<R>(
    repo: &R,
    place_id: &str,
    include_unavailable: bool,
) -> Result<Vec<(Product, InventoryLink)>>
where
    R: PlaceRepo + ProductRepo + InventoryRepo,
{
    let place = repo.get_place(place_id)?;
    if place.is_deleted() {
        return Err(Error::Repo(RepoError::NotFound));
    }
    let mut rows = Vec::new();
    for link in repo.load_inventory_of_place(place_id)? {
        let product = repo.get_product(link.product_id.as_str())?;
        if product.is_deleted() {
            continue;
        }
        rows.push((product, link));
    }
    let rating = place.stats.rating;
    rows.sort_by(|(xa, la), (xb, lb)| {
        lb.commonly_available
            .cmp(&la.commonly_available)
            .then_with(|| {
                availability_order(
                    &(rating, la.last_verified_at, &xa.id),
                    &(rating, lb.last_verified_at, &xb.id),
                )
            })
    });
    if !include_unavailable {
        rows.retain(|(_, link)| link.commonly_available);
    }
    Ok(rows)
}
