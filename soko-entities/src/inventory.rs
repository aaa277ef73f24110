use crate::{id::*, time::*};

#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    pub amount: f64,
    pub currency: String,
}

/// Non-real-time assertion that a place commonly carries a product.
///
/// Unique per (place, product) pair. Re-submission updates the existing
/// link rather than duplicating it.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryLink {
    pub id                 : Id,
    pub place_id           : Id,
    pub product_id         : Id,
    pub commonly_available : bool,
    pub typical_price      : Option<Price>,
    /// Free-form freshness/availability note ("Fresh on weekends").
    pub note               : Option<String>,
    pub last_verified_at   : Timestamp,
}
