use crate::{entities::*, repositories::*};
use anyhow::Result as Fallible;

pub trait Db:
    PlaceRepo + ProductRepo + InventoryRepo + ReviewRepo + QuestionRepo + FavoriteRepo + VoteRepo
{
}

impl<T> Db for T where
    T: PlaceRepo + ProductRepo + InventoryRepo + ReviewRepo + QuestionRepo + FavoriteRepo + VoteRepo
{
}

/// A term index match: how many of the query tokens occur in the
/// entity's indexed token set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermHit {
    pub id: Id,
    pub overlap: usize,
}

/// Token to entity-id index over normalized tokens.
///
/// Writers replace whole entries (remove + reinsert); readers observe a
/// consistent snapshot of whichever index generation was current when
/// the query was dispatched.
pub trait TermIndex {
    fn index_entity(&self, id: &Id, tokens: &[String]) -> Fallible<()>;
    fn remove_entity(&self, id: &Id) -> Fallible<()>;

    /// Hits ordered by overlap descending, id ascending.
    fn query_tokens(&self, tokens: &[String]) -> Fallible<Vec<TermHit>>;

    /// Monotonically increasing snapshot generation.
    fn generation(&self) -> u64;
}

/// Location and structured-attribute facets of a place.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceFacets {
    pub city: String,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub pos: Option<Coordinate>,
    pub place_type: PlaceType,
    pub delivery: bool,
    pub payment: PaymentModes,
}

impl From<&Place> for PlaceFacets {
    fn from(from: &Place) -> Self {
        Self {
            city: from.location.address.city.clone(),
            region: from.location.address.region.clone(),
            postal_code: from.location.address.postal_code.clone(),
            pos: from.location.pos,
            place_type: from.place_type,
            delivery: from.delivery,
            payment: from.payment,
        }
    }
}

/// Conjunctive facet constraints. An empty constraint set matches every
/// indexed place.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FilterConstraints {
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    /// Center and radius in km. Only places with known coordinates match.
    pub within: Option<(Coordinate, f64)>,
    pub place_types: Vec<PlaceType>,
    pub delivery_only: bool,
    pub payment: Option<PaymentMode>,
}

impl FilterConstraints {
    pub fn is_empty(&self) -> bool {
        let Self {
            city,
            region,
            postal_code,
            within,
            place_types,
            delivery_only,
            payment,
        } = self;
        city.is_none()
            && region.is_none()
            && postal_code.is_none()
            && within.is_none()
            && place_types.is_empty()
            && !delivery_only
            && payment.is_none()
    }
}

/// Facet index over non-tombstoned places.
pub trait PlaceFilterIndex {
    fn upsert_place(&self, id: &Id, facets: PlaceFacets) -> Fallible<()>;
    fn remove_place(&self, id: &Id) -> Fallible<()>;

    /// Matching place ids, ascending.
    fn filter_places(&self, constraints: &FilterConstraints) -> Fallible<Vec<Id>>;

    /// Monotonically increasing snapshot generation.
    fn generation(&self) -> u64;
}
