use std::collections::{HashMap, HashSet};

use super::prelude::*;
use crate::text::tokenize_unique;

// Composite score weights, applied to pre-normalized [0, 1] terms.
pub const WEIGHT_TEXT: f64 = 0.5;
pub const WEIGHT_RATING: f64 = 0.3;
pub const WEIGHT_RECENCY: f64 = 0.2;

/// Verification age at which the recency term reaches zero.
pub const RECENCY_WINDOW_DAYS: i64 = 180;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Which result kinds a search returns.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum KindFilter {
    #[default]
    All,
    PlacesOnly,
    ProductsOnly,
}

#[derive(Debug, Default, Clone)]
pub struct SearchRequest {
    pub text: Option<String>,
    pub constraints: FilterConstraints,
    pub kind: KindFilter,
}

#[derive(Debug, Clone)]
pub enum SearchItem {
    Place(Place),
    Product(Product),
}

#[derive(Debug, Clone)]
pub struct SearchHit {
    pub item: SearchItem,
    pub score: f64,
}

impl SearchHit {
    pub fn id(&self) -> &Id {
        match &self.item {
            SearchItem::Place(place) => &place.id,
            SearchItem::Product(product) => &product.id,
        }
    }

    fn is_place(&self) -> bool {
        matches!(self.item, SearchItem::Place(_))
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Count of all matches before the page cut.
    pub total: usize,
    pub hits: Vec<SearchHit>,
}

/// Parse raw transport filter pairs into structured constraints.
///
/// Unknown keys and malformed values are rejected; silently ignoring a
/// filter would return wrong results with no indication.
pub fn parse_filter_params<'a, I>(params: I) -> Result<(FilterConstraints, KindFilter)>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut constraints = FilterConstraints::default();
    let mut kind = KindFilter::default();
    let mut lat: Option<f64> = None;
    let mut lng: Option<f64> = None;
    let mut radius_km: Option<f64> = None;

    let parse_f64 = |key: &str, value: &str| -> Result<f64> {
        value
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::FilterValue(key.into()))
    };
    let parse_bool = |key: &str, value: &str| -> Result<bool> {
        match value.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(Error::FilterValue(key.into())),
        }
    };

    for (key, value) in params {
        match key {
            "city" => constraints.city = Some(value.trim().to_owned()),
            "region" => constraints.region = Some(value.trim().to_owned()),
            "postal" | "zip" => constraints.postal_code = Some(value.trim().to_owned()),
            "lat" => lat = Some(parse_f64(key, value)?),
            "lng" => lng = Some(parse_f64(key, value)?),
            "radius_km" => radius_km = Some(parse_f64(key, value)?),
            "place_type" => {
                for part in value.split(',') {
                    let place_type = part
                        .trim()
                        .parse::<PlaceType>()
                        .map_err(|_| Error::FilterValue(key.into()))?;
                    constraints.place_types.push(place_type);
                }
            }
            "delivery_only" => constraints.delivery_only = parse_bool(key, value)?,
            "payment" => {
                let mode = value
                    .trim()
                    .parse::<PaymentMode>()
                    .map_err(|_| Error::FilterValue(key.into()))?;
                constraints.payment = Some(mode);
            }
            "kind" => {
                kind = match value.trim() {
                    "all" => KindFilter::All,
                    "place" | "places" => KindFilter::PlacesOnly,
                    "product" | "products" => KindFilter::ProductsOnly,
                    _ => return Err(Error::FilterValue(key.into())),
                };
            }
            _ => return Err(Error::UnknownFilter(key.into())),
        }
    }

    match (lat, lng, radius_km) {
        (None, None, None) => {}
        (Some(lat), Some(lng), Some(radius_km)) => {
            let center = Coordinate { lat, lng };
            if !center.is_valid() || !radius_km.is_finite() || radius_km < 0.0 {
                return Err(Error::FilterValue("radius_km".into()));
            }
            constraints.within = Some((center, radius_km));
        }
        // A radius query is only meaningful with all three parts.
        _ => return Err(Error::FilterValue("radius_km".into())),
    }

    Ok((constraints, kind))
}

/// Normalized recency of an inventory verification: 1.0 for a link
/// verified today, linearly down to 0.0 at [`RECENCY_WINDOW_DAYS`].
/// Whole-day granularity keeps repeated queries deterministic.
pub fn recency_factor(last_verified_at: Timestamp, now: Timestamp) -> f64 {
    let age_days = now.seconds_since(last_verified_at) / SECONDS_PER_DAY;
    (1.0 - age_days as f64 / RECENCY_WINDOW_DAYS as f64).clamp(0.0, 1.0)
}

fn composite_score(text: f64, rating: f64, recency: f64) -> f64 {
    debug_assert!((0.0..=1.0).contains(&text));
    debug_assert!((0.0..=1.0).contains(&rating));
    debug_assert!((0.0..=1.0).contains(&recency));
    WEIGHT_TEXT * text + WEIGHT_RATING * rating + WEIGHT_RECENCY * recency
}

fn freshest_verification(links: &[InventoryLink]) -> Option<Timestamp> {
    links.iter().map(|link| link.last_verified_at).max()
}

/// Resolve a free-text query plus facet constraints into one ranked,
/// paginated list of mixed place/product results.
///
/// Places are constrained by text and facets; products match by text
/// only — the location-joined view is the availability call path.
/// Empty query text means "no text constraint". The whole query runs
/// against the index snapshots current at dispatch time and never
/// blocks on writers.
pub fn search<R>(
    repo: &R,
    place_terms: &dyn TermIndex,
    product_terms: &dyn TermIndex,
    facet_index: &dyn PlaceFilterIndex,
    request: &SearchRequest,
    pagination: &Pagination,
    now: Timestamp,
) -> Result<SearchResult>
where
    R: Db,
{
    let SearchRequest {
        text,
        constraints,
        kind,
    } = request;
    let tokens = tokenize_unique(text.as_deref().unwrap_or(""));

    let mut hits: Vec<SearchHit> = Vec::new();

    if *kind != KindFilter::ProductsOnly {
        let eligible: Vec<Id> = facet_index
            .filter_places(constraints)
            .map_err(RepoError::Other)?;
        let text_strength: Option<HashMap<Id, usize>> = if tokens.is_empty() {
            None
        } else {
            let term_hits = place_terms
                .query_tokens(&tokens)
                .map_err(RepoError::Other)?;
            Some(
                term_hits
                    .into_iter()
                    .map(|hit| (hit.id, hit.overlap))
                    .collect(),
            )
        };
        for place_id in eligible {
            let text_norm = match &text_strength {
                None => 0.0,
                Some(overlaps) => match overlaps.get(&place_id) {
                    // With a text query, non-matching places drop out.
                    None => continue,
                    Some(overlap) => *overlap as f64 / tokens.len() as f64,
                },
            };
            let place = match repo.get_place(place_id.as_str()) {
                Ok(place) => place,
                // Index briefly ahead of or behind the store: degrade
                // to best-effort results instead of failing the query.
                Err(RepoError::NotFound) => {
                    log::debug!("Search hit {place_id} not loadable; skipped");
                    continue;
                }
                Err(err) => return Err(err.into()),
            };
            if place.is_deleted() {
                continue;
            }
            let rating_norm =
                (f64::from(place.stats.rating) / f64::from(AvgRating::max())).clamp(0.0, 1.0);
            let recency_norm = freshest_verification(&repo.load_inventory_of_place(
                place_id.as_str(),
            )?)
            .map(|ts| recency_factor(ts, now))
            .unwrap_or(0.0);
            hits.push(SearchHit {
                score: composite_score(text_norm, rating_norm, recency_norm),
                item: SearchItem::Place(place),
            });
        }
    }

    if *kind != KindFilter::PlacesOnly && !tokens.is_empty() {
        let term_hits = product_terms
            .query_tokens(&tokens)
            .map_err(RepoError::Other)?;
        let mut seen: HashSet<Id> = HashSet::new();
        for hit in term_hits {
            if !seen.insert(hit.id.clone()) {
                continue;
            }
            let product = match repo.get_product(hit.id.as_str()) {
                Ok(product) => product,
                Err(RepoError::NotFound) => {
                    log::debug!("Search hit {} not loadable; skipped", hit.id);
                    continue;
                }
                Err(err) => return Err(err.into()),
            };
            if product.is_deleted() {
                continue;
            }
            let text_norm = hit.overlap as f64 / tokens.len() as f64;
            let recency_norm = freshest_verification(&repo.load_inventory_of_product(
                product.id.as_str(),
            )?)
            .map(|ts| recency_factor(ts, now))
            .unwrap_or(0.0);
            hits.push(SearchHit {
                score: composite_score(text_norm, 0.0, recency_norm),
                item: SearchItem::Product(product),
            });
        }
    }

    hits.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.id().cmp(b.id()))
            .then_with(|| b.is_place().cmp(&a.is_place()))
    });
    let total = hits.len();
    Ok(SearchResult {
        total,
        hits: pagination.cut(hits),
    })
}
