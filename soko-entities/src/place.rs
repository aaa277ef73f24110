use strum::{EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::{geo::*, hours::*, id::*, rating::*, time::*};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive, serialize_all = "snake_case")]
pub enum PlaceType {
    Grocery,
    Restaurant,
    Butcher,
    Bakery,
    Market,
}

/// Postal address facets used for filtering.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Address {
    pub city: String,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Location {
    pub address: Address,
    pub pos: Option<Coordinate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive, serialize_all = "snake_case")]
pub enum PaymentMode {
    Cash,
    Card,
    Mobile,
}

/// Accepted payment modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentModes {
    pub cash: bool,
    pub card: bool,
    pub mobile: bool,
}

impl PaymentModes {
    pub fn accepts(&self, mode: PaymentMode) -> bool {
        match mode {
            PaymentMode::Cash => self.cash,
            PaymentMode::Card => self.card,
            PaymentMode::Mobile => self.mobile,
        }
    }
}

impl Default for PaymentModes {
    fn default() -> Self {
        // Cash and card are assumed accepted unless stated otherwise.
        Self {
            cash: true,
            card: true,
            mobile: false,
        }
    }
}

/// Derived counters of a place.
///
/// Owned exclusively by the trust aggregation flows. `rating` is always
/// the mean of the currently counted review ratings, never independently
/// mutated.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PlaceStats {
    pub rating       : AvgRating,
    pub review_count : u64,
    pub view_count   : u64,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id               : Id,
    pub name             : String,
    pub description      : Option<String>,
    pub location         : Location,
    pub place_type       : PlaceType,
    pub specialization   : Option<String>,
    pub languages_spoken : Vec<String>,
    pub payment          : PaymentModes,
    pub delivery         : bool,
    pub delivery_notes   : Option<String>,
    pub hours            : WeeklyHours,
    pub owner_verified   : bool,
    pub owner_name       : Option<String>,
    pub stats            : PlaceStats,
    pub created_at       : Timestamp,
    pub updated_at       : Timestamp,
    pub deleted_at       : Option<Timestamp>,
}

impl Place {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
