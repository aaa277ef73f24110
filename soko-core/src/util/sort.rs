use soko_entities::{question::*, review::*};

/// Display order for answers: owner-verified answers first, then net
/// helpfulness, then age (oldest first), then id for determinism.
pub fn rank_answers(answers: &mut [Answer]) {
    answers.sort_by(|a, b| {
        b.authoritative
            .cmp(&a.authoritative)
            .then_with(|| b.net_helpfulness().cmp(&a.net_helpfulness()))
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Display order for reviews: newest first, id for determinism.
pub fn sort_reviews_newest_first(reviews: &mut [Review]) {
    reviews.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}
