use thiserror::Error;

use crate::{id::*, time::*};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("A question must reference a place and/or a product")]
pub struct MissingQuestionTarget;

/// A user question about a place, a product, or a product at a place.
///
/// `answer_count` and `answered` are denormalized from the question's
/// answers and owned exclusively by the trust aggregation flows.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id            : Id,
    pub user_id       : Id,
    pub place_id      : Option<Id>,
    pub product_id    : Option<Id>,
    pub text          : String,
    pub category      : Option<String>,
    pub answer_count  : u64,
    pub answered      : bool,
    pub helpful_count : u64,
    pub created_at    : Timestamp,
}

impl Question {
    /// At least one of place/product must be referenced.
    pub fn verify_target(&self) -> Result<(), MissingQuestionTarget> {
        if self.place_id.is_none() && self.product_id.is_none() {
            return Err(MissingQuestionTarget);
        }
        Ok(())
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub id              : Id,
    pub question_id     : Id,
    pub user_id         : Id,
    pub text            : String,
    /// True when the answering user is the verified owner of the place
    /// the question refers to. Authoritative answers always rank first.
    pub authoritative   : bool,
    pub helpful_count   : u64,
    pub unhelpful_count : u64,
    pub created_at      : Timestamp,
}

impl Answer {
    /// Net helpfulness used for display ranking.
    pub fn net_helpfulness(&self) -> i64 {
        self.helpful_count as i64 - self.unhelpful_count as i64
    }
}
