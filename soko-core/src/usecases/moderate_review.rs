use super::prelude::*;
use crate::rating;

/// Apply a moderation decision to a review and keep the owning place's
/// derived counters consistent.
///
/// A review entering the counted set updates the rating with a
/// running-mean step; a review leaving the counted set (or a rating
/// edit, see `edit_review`) always triggers a full recomputation from
/// the counted set.
///
/// Callers serialize invocations per place (see the application layer);
/// this function itself only performs the read-modify-write.
pub fn moderate_review<R>(
    repo: &R,
    review_id: &str,
    new_status: ModerationStatus,
    at: Timestamp,
) -> Result<Review>
where
    R: ReviewRepo + PlaceRepo,
{
    let mut review = repo.get_review(review_id)?;
    review.status.verify_transition(new_status)?;

    let was_counted = review.is_counted();
    log::info!(
        "Changing moderation status of review {} from {} to {}",
        review.id,
        ModerationStatusPrimitive::from(review.status),
        ModerationStatusPrimitive::from(new_status),
    );
    review.status = new_status;
    if new_status == ModerationStatus::Removed {
        review.deleted_at = Some(at);
    }
    repo.update_review(&review)?;

    match (was_counted, review.is_counted()) {
        (false, true) => {
            let mut place = repo.get_place(review.place_id.as_str())?;
            let (rating, review_count) =
                rating::count_in(place.stats.rating, place.stats.review_count, review.value);
            place.stats.rating = rating;
            place.stats.review_count = review_count;
            repo.update_place_stats(review.place_id.as_str(), place.stats)?;
        }
        (true, false) => {
            rebuild_place_stats(repo, &review.place_id)?;
        }
        // Flag set/resolved without leaving the counted set, or a
        // transition between uncounted states: aggregates unchanged.
        _ => {}
    }
    Ok(review)
}

/// Full recomputation of a place's rating aggregate from its counted
/// reviews. The new stats are built completely before the single
/// repository write; readers never observe a partially updated pair.
pub fn rebuild_place_stats<R>(repo: &R, place_id: &Id) -> Result<PlaceStats>
where
    R: ReviewRepo + PlaceRepo,
{
    let mut place = match repo.get_place(place_id.as_str()) {
        Ok(place) => place,
        Err(RepoError::NotFound) => {
            log::error!("Reviews reference missing place {place_id}; aggregate cannot be rebuilt");
            return Err(Error::ConsistencyRecovery(place_id.clone()));
        }
        Err(err) => return Err(err.into()),
    };
    let reviews = repo.load_reviews_of_place(place_id.as_str())?;
    let (rating, review_count) = rating::recompute(&reviews);
    place.stats.rating = rating;
    place.stats.review_count = review_count;
    repo.update_place_stats(place_id.as_str(), place.stats.clone())?;
    Ok(place.stats)
}
