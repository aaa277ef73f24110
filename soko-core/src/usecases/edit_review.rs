use super::prelude::*;
use crate::usecases::rebuild_place_stats;

#[derive(Debug, Default, Clone)]
pub struct ReviewPatch {
    pub value: Option<i8>,
    pub title: Option<String>,
    pub text: Option<String>,
}

/// Edit an existing review. A rating change on a counted review forces
/// a full recomputation of the place aggregate; the running mean is not
/// trusted for in-place edits.
pub fn edit_review<R>(repo: &R, review_id: &str, patch: ReviewPatch) -> Result<Review>
where
    R: ReviewRepo + PlaceRepo,
{
    let mut review = repo.get_review(review_id)?;
    if review.deleted_at.is_some() || review.status.is_terminal() {
        return Err(Error::Repo(RepoError::NotFound));
    }

    let ReviewPatch { value, title, text } = patch;
    let mut rating_changed = false;
    if let Some(value) = value {
        let value = RatingValue::try_from(value)?;
        rating_changed = value != review.value;
        review.value = value;
    }
    if let Some(text) = text {
        if text.trim().is_empty() {
            return Err(Error::EmptyReviewText);
        }
        review.text = text;
    }
    if title.is_some() {
        review.title = title;
    }
    repo.update_review(&review)?;

    if rating_changed && review.is_counted() {
        rebuild_place_stats(repo, &review.place_id)?;
    }
    Ok(review)
}
