use super::prelude::*;
use crate::util::sort::sort_reviews_newest_first;

/// The publicly visible reviews of a place (counted set), newest first,
/// with the total count for pagination controls.
pub fn reviews_of_place<R>(
    repo: &R,
    place_id: &str,
    pagination: &Pagination,
) -> Result<(Vec<Review>, usize)>
where
    R: ReviewRepo,
{
    let mut reviews: Vec<_> = repo
        .load_reviews_of_place(place_id)?
        .into_iter()
        .filter(Review::is_counted)
        .collect();
    sort_reviews_newest_first(&mut reviews);
    let total = reviews.len();
    Ok((pagination.cut(reviews), total))
}
