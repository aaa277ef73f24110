use super::prelude::*;

/// Increment the monotonic view counter of a place.
pub fn bump_place_view<R>(repo: &R, place_id: &str) -> Result<u64>
where
    R: PlaceRepo,
{
    let mut place = repo.get_place(place_id)?;
    if place.is_deleted() {
        return Err(Error::Repo(RepoError::NotFound));
    }
    place.stats.view_count += 1;
    let views = place.stats.view_count;
    repo.update_place_stats(place_id, place.stats)?;
    Ok(views)
}
