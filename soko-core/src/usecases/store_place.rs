use super::prelude::*;

/// Persist a new or updated place row coming from the place-management
/// collaborator. Derived counters of an existing row are preserved;
/// this path never writes them.
pub fn store_place<R>(repo: &R, mut place: Place, at: Timestamp) -> Result<Place>
where
    R: PlaceRepo,
{
    if place.name.trim().is_empty() {
        return Err(Error::Name);
    }
    if let Some(pos) = &place.location.pos {
        if !pos.is_valid() {
            return Err(Error::InvalidPosition);
        }
    }
    place.updated_at = at;
    match repo.get_place(place.id.as_str()) {
        Ok(existing) => {
            place.stats = existing.stats;
            place.created_at = existing.created_at;
        }
        Err(RepoError::NotFound) => {
            place.created_at = at;
            place.stats = Default::default();
        }
        Err(err) => return Err(err.into()),
    }
    repo.create_or_update_place(place.clone())?;
    Ok(place)
}

/// Tombstone a place. The row is kept while references exist; indices
/// and filters treat it as gone.
pub fn delete_place<R>(repo: &R, place_id: &str, at: Timestamp) -> Result<()>
where
    R: PlaceRepo,
{
    Ok(repo.mark_place_deleted(place_id, at)?)
}
