use crate::repositories;
use soko_entities::{
    favorite::FavoriteTargetError, hours::HoursParseError, id::Id,
    question::MissingQuestionTarget, rating::RatingValueOutOfRange, review::InvalidTransition,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is invalid")]
    Name,
    #[error("Empty review text")]
    EmptyReviewText,
    #[error("Empty question text")]
    EmptyQuestionText,
    #[error("Empty answer text")]
    EmptyAnswerText,
    #[error("Empty response text")]
    EmptyResponseText,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Invalid opening hours")]
    OpeningHours,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Unknown filter key: {0}")]
    UnknownFilter(String),
    #[error("Invalid value for filter {0}")]
    FilterValue(String),
    #[error(transparent)]
    FavoriteTarget(#[from] FavoriteTargetError),
    #[error(transparent)]
    QuestionTarget(#[from] MissingQuestionTarget),
    #[error(transparent)]
    ReviewTransition(#[from] InvalidTransition),
    #[error("The aggregate of {0} could not be reconciled and was rebuilt")]
    ConsistencyRecovery(Id),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

/// Coarse classification of an [`Error`], used by callers that map
/// failures onto transport-level responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    StateConflict,
    NotFound,
    ConsistencyRecovery,
    Other,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Name
            | Self::EmptyReviewText
            | Self::EmptyQuestionText
            | Self::EmptyAnswerText
            | Self::EmptyResponseText
            | Self::RatingValue
            | Self::OpeningHours
            | Self::InvalidPosition
            | Self::UnknownFilter(_)
            | Self::FilterValue(_)
            | Self::FavoriteTarget(_)
            | Self::QuestionTarget(_) => ErrorKind::Validation,
            Self::ReviewTransition(_) => ErrorKind::StateConflict,
            Self::ConsistencyRecovery(_) => ErrorKind::ConsistencyRecovery,
            Self::Repo(repositories::Error::NotFound) => ErrorKind::NotFound,
            Self::Repo(_) => ErrorKind::Other,
        }
    }
}

impl From<RatingValueOutOfRange> for Error {
    fn from(_: RatingValueOutOfRange) -> Self {
        Self::RatingValue
    }
}

impl From<HoursParseError> for Error {
    fn from(_: HoursParseError) -> Self {
        Self::OpeningHours
    }
}
