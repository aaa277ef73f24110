use super::prelude::*;

/// Persist a new or updated product row. Identity is immutable; only
/// the descriptive fields change on update.
pub fn store_product<R>(repo: &R, mut product: Product, at: Timestamp) -> Result<Product>
where
    R: ProductRepo,
{
    if product.name.trim().is_empty() {
        return Err(Error::Name);
    }
    product.updated_at = at;
    match repo.get_product(product.id.as_str()) {
        Ok(existing) => product.created_at = existing.created_at,
        Err(RepoError::NotFound) => product.created_at = at,
        Err(err) => return Err(err.into()),
    }
    repo.create_or_update_product(product.clone())?;
    Ok(product)
}
