use crate::*;

/// Store a product row and refresh its term index entry, so queries in
/// any of the product's names keep resolving to the canonical id.
pub fn upsert_product<D>(
    db: &D,
    term_index: &dyn TermIndex,
    product: Product,
    at: Timestamp,
) -> Result<Product>
where
    D: Db,
{
    let product = usecases::store_product(db, product, at)?;
    if let Err(err) = usecases::reindex_product(term_index, &product) {
        log::error!(
            "Failed to reindex product {} after update: {}",
            product.id,
            err
        );
    }
    Ok(product)
}
