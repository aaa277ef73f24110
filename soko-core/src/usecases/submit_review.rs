use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewReview {
    pub user_id: Id,
    pub place_id: Id,
    pub product_id: Option<Id>,
    pub value: i8,
    pub title: Option<String>,
    pub text: String,
    pub context: ReviewContext,
}

/// Store a new review in the `submitted` moderation state.
///
/// The review does not contribute to any aggregate until it is approved.
pub fn submit_review<R>(repo: &R, new: NewReview, at: Timestamp) -> Result<Review>
where
    R: ReviewRepo + PlaceRepo + ProductRepo,
{
    let NewReview {
        user_id,
        place_id,
        product_id,
        value,
        title,
        text,
        context,
    } = new;

    let place = repo.get_place(place_id.as_str())?;
    if place.is_deleted() {
        return Err(Error::Repo(RepoError::NotFound));
    }
    if let Some(product_id) = &product_id {
        let product = repo.get_product(product_id.as_str())?;
        if product.is_deleted() {
            return Err(Error::Repo(RepoError::NotFound));
        }
    }

    let value = RatingValue::try_from(value)?;
    if text.trim().is_empty() {
        return Err(Error::EmptyReviewText);
    }

    let review = Review {
        id: Id::new(),
        user_id,
        place_id,
        product_id,
        value,
        title,
        text,
        context,
        status: ModerationStatus::default(),
        helpful_count: 0,
        unhelpful_count: 0,
        owner_response: None,
        created_at: at,
        deleted_at: None,
    };
    repo.create_review(review.clone())?;
    log::debug!("Stored new review {} for place {}", review.id, review.place_id);
    Ok(review)
}
