use super::prelude::*;

/// Record a helpfulness vote on a review or answer.
///
/// Idempotent per (user, target): repeating the same vote is a no-op,
/// voting the opposite direction moves the single counted vote.
pub fn cast_vote<R>(
    repo: &R,
    voter_id: Id,
    target: VoteTarget,
    direction: VoteDirection,
    at: Timestamp,
) -> Result<()>
where
    R: VoteRepo + ReviewRepo + QuestionRepo,
{
    // The target must exist and be visible.
    match &target {
        VoteTarget::Review(id) => {
            let review = repo.get_review(id.as_str())?;
            if review.deleted_at.is_some() {
                return Err(Error::Repo(RepoError::NotFound));
            }
        }
        VoteTarget::Answer(id) => {
            repo.get_answer(id.as_str())?;
        }
    }

    let previous = repo.replace_vote(Vote {
        user_id: voter_id,
        target: target.clone(),
        direction,
        cast_at: at,
    })?;
    let previous_direction = previous.map(|vote| vote.direction);
    if previous_direction == Some(direction) {
        // Repeated identical vote: counters unchanged.
        return Ok(());
    }

    let (up, down) = vote_deltas(previous_direction, direction);
    match &target {
        VoteTarget::Review(id) => {
            let mut review = repo.get_review(id.as_str())?;
            review.helpful_count = apply_delta(review.helpful_count, up);
            review.unhelpful_count = apply_delta(review.unhelpful_count, down);
            repo.update_review(&review)?;
        }
        VoteTarget::Answer(id) => {
            let mut answer = repo.get_answer(id.as_str())?;
            answer.helpful_count = apply_delta(answer.helpful_count, up);
            answer.unhelpful_count = apply_delta(answer.unhelpful_count, down);
            repo.update_answer(&answer)?;
        }
    }
    Ok(())
}

// (helpful, unhelpful) counter deltas for a direction change.
fn vote_deltas(previous: Option<VoteDirection>, next: VoteDirection) -> (i64, i64) {
    let mut up = 0;
    let mut down = 0;
    match previous {
        Some(VoteDirection::Helpful) => up -= 1,
        Some(VoteDirection::Unhelpful) => down -= 1,
        None => {}
    }
    match next {
        VoteDirection::Helpful => up += 1,
        VoteDirection::Unhelpful => down += 1,
    }
    (up, down)
}

fn apply_delta(count: u64, delta: i64) -> u64 {
    count.saturating_add_signed(delta)
}
