use super::prelude::*;

/// Attach or replace the place owner's response on a review.
/// No aggregate is affected.
pub fn respond_to_review<R>(repo: &R, review_id: &str, text: String, at: Timestamp) -> Result<Review>
where
    R: ReviewRepo,
{
    if text.trim().is_empty() {
        return Err(Error::EmptyResponseText);
    }
    let mut review = repo.get_review(review_id)?;
    if review.deleted_at.is_some() {
        return Err(Error::Repo(RepoError::NotFound));
    }
    review.owner_response = Some(OwnerResponse {
        text,
        responded_at: at,
    });
    repo.update_review(&review)?;
    Ok(review)
}
