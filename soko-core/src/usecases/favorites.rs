use super::prelude::*;

/// Bookmark a place or product for a user.
///
/// Inserting an existing (user, target) pair changes nothing and does
/// not duplicate. The place-xor-product rule is enforced by the
/// [`FavoriteTarget`] constructor at the boundary.
pub fn add_favorite<R>(repo: &R, user_id: Id, target: FavoriteTarget, at: Timestamp) -> Result<()>
where
    R: FavoriteRepo + PlaceRepo + ProductRepo,
{
    match &target {
        FavoriteTarget::Place(id) => {
            if repo.get_place(id.as_str())?.is_deleted() {
                return Err(Error::Repo(RepoError::NotFound));
            }
        }
        FavoriteTarget::Product(id) => {
            if repo.get_product(id.as_str())?.is_deleted() {
                return Err(Error::Repo(RepoError::NotFound));
            }
        }
    }
    let inserted = repo.insert_favorite(Favorite {
        id: Id::new(),
        user_id,
        target,
        created_at: at,
    })?;
    if !inserted {
        log::debug!("Favorite already present; nothing to do");
    }
    Ok(())
}

pub fn remove_favorite<R>(repo: &R, user_id: &str, target: &FavoriteTarget) -> Result<()>
where
    R: FavoriteRepo,
{
    Ok(repo.delete_favorite(user_id, target)?)
}

pub fn favorites_of_user<R>(repo: &R, user_id: &str) -> Result<Vec<Favorite>>
where
    R: FavoriteRepo,
{
    Ok(repo.favorites_of_user(user_id)?)
}
