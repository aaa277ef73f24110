use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::*;
use strum::{EnumCount, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

use crate::{id::*, rating::*, time::*};

pub type ModerationStatusPrimitive = i16;

/// Lifecycle stage of a review, controlling whether it contributes to
/// derived aggregates.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive, ToPrimitive, EnumIter, EnumCount, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive, serialize_all = "snake_case")]
pub enum ModerationStatus {
    Removed   = -2,
    Rejected  = -1,
    Submitted =  0,
    Flagged   =  1,
    Approved  =  2,
}

impl ModerationStatus {
    pub const fn default() -> Self {
        Self::Submitted
    }

    /// Whether a review in this status contributes to derived aggregates.
    ///
    /// A flagged review stays counted until the flag is resolved.
    pub fn is_counted(self) -> bool {
        self >= Self::Flagged
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Removed | Self::Rejected)
    }

    /// Check a requested transition against the moderation state machine.
    ///
    /// Allowed: `Submitted -> {Approved, Rejected}`,
    /// `Approved -> Flagged`, `Flagged -> Approved` and
    /// `{Submitted, Approved, Flagged} -> Removed`.
    pub fn verify_transition(self, to: Self) -> Result<(), InvalidTransition> {
        use ModerationStatus::*;
        let allowed = match (self, to) {
            (Submitted, Approved) | (Submitted, Rejected) => true,
            (Approved, Flagged) | (Flagged, Approved) => true,
            (Submitted | Approved | Flagged, Removed) => true,
            _ => false,
        };
        if allowed {
            Ok(())
        } else {
            Err(InvalidTransition { from: self, to })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid review status transition: {from:?} -> {to:?}")]
pub struct InvalidTransition {
    pub from: ModerationStatus,
    pub to: ModerationStatus,
}

#[derive(Debug, Error)]
#[error("Invalid review status primitive: {0}")]
pub struct InvalidModerationStatusPrimitive(ModerationStatusPrimitive);

impl TryFrom<ModerationStatusPrimitive> for ModerationStatus {
    type Error = InvalidModerationStatusPrimitive;
    fn try_from(from: ModerationStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidModerationStatusPrimitive(from))
    }
}

impl From<ModerationStatus> for ModerationStatusPrimitive {
    fn from(from: ModerationStatus) -> Self {
        from.to_i16().expect("moderation status primitive")
    }
}

/// What aspect of the place/product the review addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive, serialize_all = "snake_case")]
pub enum ReviewContext {
    General,
    Availability,
    Freshness,
    Service,
    Pricing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerResponse {
    pub text: String,
    pub responded_at: Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id              : Id,
    pub user_id         : Id,
    pub place_id        : Id,
    pub product_id      : Option<Id>,
    pub value           : RatingValue,
    pub title           : Option<String>,
    pub text            : String,
    pub context         : ReviewContext,
    pub status          : ModerationStatus,
    pub helpful_count   : u64,
    pub unhelpful_count : u64,
    pub owner_response  : Option<OwnerResponse>,
    pub created_at      : Timestamp,
    pub deleted_at      : Option<Timestamp>,
}

impl Review {
    /// Whether this review currently contributes to derived aggregates.
    pub fn is_counted(&self) -> bool {
        self.status.is_counted() && self.deleted_at.is_none()
    }
}
