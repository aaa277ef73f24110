use crate::{locks::AggregateLocks, *};

/// Record a helpfulness vote, serialized per vote target so concurrent
/// votes on the same review/answer cannot interleave their
/// read-modify-write sections.
pub fn cast_vote<D>(
    db: &D,
    vote_locks: &AggregateLocks,
    voter_id: Id,
    target: VoteTarget,
    direction: VoteDirection,
    at: Timestamp,
) -> Result<()>
where
    D: Db,
{
    let guard = vote_locks.guard(target.id());
    let _serialized = guard.lock();
    Ok(usecases::cast_vote(db, voter_id, target, direction, at)?)
}
