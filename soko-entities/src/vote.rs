use crate::{id::*, time::*};

/// What a helpfulness vote refers to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VoteTarget {
    Review(Id),
    Answer(Id),
}

impl VoteTarget {
    pub fn id(&self) -> &Id {
        match self {
            Self::Review(id) | Self::Answer(id) => id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteDirection {
    Helpful,
    Unhelpful,
}

/// A single user's helpfulness vote on a review or answer.
///
/// At most one vote per (user, target) pair exists. A repeated vote from
/// the same user replaces the previous one instead of accumulating.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub user_id   : Id,
    pub target    : VoteTarget,
    pub direction : VoteDirection,
    pub cast_at   : Timestamp,
}
