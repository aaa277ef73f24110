use thiserror::Error;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("Rating value out of range: {0}")]
pub struct RatingValueOutOfRange(pub i8);

/// A single review rating on the 1..=5 scale.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct RatingValue(i8);

impl RatingValue {
    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl TryFrom<i8> for RatingValue {
    type Error = RatingValueOutOfRange;

    fn try_from(from: i8) -> Result<Self, Self::Error> {
        let new = Self(from);
        if new.is_valid() {
            Ok(new)
        } else {
            Err(RatingValueOutOfRange(from))
        }
    }
}

impl From<RatingValue> for i8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for f64 {
    fn from(from: RatingValue) -> Self {
        f64::from(from.0)
    }
}

/// Mean of the counted review ratings of a place.
///
/// The exact mean is kept at full precision so that incremental updates
/// stay consistent with a full recomputation. The two-decimal contract
/// applies at the presentation boundary, see [`AvgRating::rounded`].
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRating(f64);

impl AvgRating {
    pub const fn min() -> Self {
        Self(0.0)
    }

    pub const fn max() -> Self {
        Self(5.0)
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }

    /// The mean rounded to two decimals, as presented to clients.
    pub fn rounded(self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }
}

impl From<f64> for AvgRating {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<AvgRating> for f64 {
    fn from(from: AvgRating) -> Self {
        from.0
    }
}

impl From<RatingValue> for AvgRating {
    fn from(from: RatingValue) -> Self {
        f64::from(from).into()
    }
}
