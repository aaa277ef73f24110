use soko_entities::{place::*, rating::*, review::*};

/// Accumulates counted review ratings into a mean.
#[derive(Debug, Default, Clone)]
pub struct AvgRatingBuilder {
    acc: i64,
    cnt: u64,
}

impl AvgRatingBuilder {
    pub fn add(&mut self, val: RatingValue) {
        debug_assert!(val.is_valid());
        self.acc += i64::from(i8::from(val));
        self.cnt += 1;
    }

    pub fn build(self) -> (AvgRating, u64) {
        if self.cnt > 0 {
            let avg = AvgRating::from(self.acc as f64 / self.cnt as f64).clamp();
            (avg, self.cnt)
        } else {
            (Default::default(), 0)
        }
    }
}

impl std::ops::AddAssign<RatingValue> for AvgRatingBuilder {
    fn add_assign(&mut self, rhs: RatingValue) {
        self.add(rhs);
    }
}

/// Full recomputation from the currently counted, non-tombstoned
/// reviews. This is the authoritative definition of a place rating.
pub fn recompute(reviews: &[Review]) -> (AvgRating, u64) {
    reviews
        .iter()
        .filter(|r| r.is_counted())
        .fold(AvgRatingBuilder::default(), |mut acc, r| {
            acc.add(r.value);
            acc
        })
        .build()
}

/// Running-mean step for one rating entering the counted set:
/// `rating' = rating + (value - rating) / count'`.
pub fn count_in(rating: AvgRating, review_count: u64, value: RatingValue) -> (AvgRating, u64) {
    let count = review_count + 1;
    let mean = f64::from(rating) + (f64::from(value) - f64::from(rating)) / count as f64;
    (AvgRating::from(mean).clamp(), count)
}

pub trait Rated {
    fn avg_rating(&self, _: &[Review]) -> (AvgRating, u64);
}

impl Rated for Place {
    fn avg_rating(&self, reviews: &[Review]) -> (AvgRating, u64) {
        debug_assert_eq!(
            reviews.len(),
            reviews.iter().filter(|r| r.place_id == self.id).count()
        );
        recompute(reviews)
    }
}
