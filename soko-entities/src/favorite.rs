use thiserror::Error;

use crate::{id::*, time::*};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum FavoriteTargetError {
    #[error("A favorite must reference either a place or a product")]
    Missing,
    #[error("A favorite cannot reference both a place and a product")]
    Ambiguous,
}

/// The bookmarked entity: exactly one of place or product.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FavoriteTarget {
    Place(Id),
    Product(Id),
}

impl FavoriteTarget {
    /// Boundary constructor for transports that submit two optional ids.
    pub fn new(place_id: Option<Id>, product_id: Option<Id>) -> Result<Self, FavoriteTargetError> {
        match (place_id, product_id) {
            (Some(id), None) => Ok(Self::Place(id)),
            (None, Some(id)) => Ok(Self::Product(id)),
            (None, None) => Err(FavoriteTargetError::Missing),
            (Some(_), Some(_)) => Err(FavoriteTargetError::Ambiguous),
        }
    }

    pub fn place_id(&self) -> Option<&Id> {
        match self {
            Self::Place(id) => Some(id),
            Self::Product(_) => None,
        }
    }

    pub fn product_id(&self) -> Option<&Id> {
        match self {
            Self::Place(_) => None,
            Self::Product(id) => Some(id),
        }
    }
}

/// A user's bookmark. Unique per (user, target) pair.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id         : Id,
    pub user_id    : Id,
    pub target     : FavoriteTarget,
    pub created_at : Timestamp,
}
