use crate::{locks::AggregateLocks, *};

/// Apply a moderation decision under the owning place's aggregate
/// guard: concurrent events for the same place are serialized, events
/// for different places proceed in parallel.
pub fn moderate_review<D>(
    db: &D,
    place_locks: &AggregateLocks,
    review_id: &str,
    new_status: ModerationStatus,
    at: Timestamp,
) -> Result<Review>
where
    D: Db,
{
    let review = db.get_review(review_id)?;
    let place = place_locks.guard(&review.place_id);
    let _serialized = place.lock();
    Ok(usecases::moderate_review(db, review_id, new_status, at)?)
}

/// Edit a review under the owning place's aggregate guard; a rating
/// change recomputes the place aggregate.
pub fn edit_review<D>(
    db: &D,
    place_locks: &AggregateLocks,
    review_id: &str,
    patch: usecases::ReviewPatch,
) -> Result<Review>
where
    D: Db,
{
    let review = db.get_review(review_id)?;
    let place = place_locks.guard(&review.place_id);
    let _serialized = place.lock();
    Ok(usecases::edit_review(db, review_id, patch)?)
}

/// Monotonic view counter bump, serialized like every other write to
/// the place's derived counters.
pub fn bump_place_view<D>(db: &D, place_locks: &AggregateLocks, place_id: &str) -> Result<u64>
where
    D: Db,
{
    let place = place_locks.guard(&Id::from(place_id));
    let _serialized = place.lock();
    Ok(usecases::bump_place_view(db, place_id)?)
}
