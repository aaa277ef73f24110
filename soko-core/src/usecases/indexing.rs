use anyhow::Result as Fallible;

use super::prelude::*;
use crate::text::{tokenize, tokenize_unique};

/// The token set a product is findable under: canonical name, locale
/// name variants, alternative names, category/cuisine tags and the
/// free-text keyword set.
pub fn product_tokens(product: &Product) -> Vec<String> {
    let mut text = product.all_names().collect::<Vec<_>>().join(" ");
    for keyword in &product.search_keywords {
        text.push(' ');
        text.push_str(keyword);
    }
    if let Some(category) = &product.category {
        text.push(' ');
        text.push_str(category);
    }
    if let Some(cuisine_region) = &product.cuisine_region {
        text.push(' ');
        text.push_str(cuisine_region);
    }
    tokenize_unique(&text)
}

/// The token set a place is findable under.
pub fn place_tokens(place: &Place) -> Vec<String> {
    let mut tokens = tokenize(&place.name);
    if let Some(specialization) = &place.specialization {
        tokens.extend(tokenize(specialization));
    }
    if let Some(description) = &place.description {
        tokens.extend(tokenize(description));
    }
    let mut seen = std::collections::HashSet::new();
    tokens.retain(|t| seen.insert(t.clone()));
    tokens
}

/// Bring the term and facet indices in line with the stored place.
/// A tombstoned place is dropped from both.
pub fn reindex_place(
    term_index: &dyn TermIndex,
    facet_index: &dyn PlaceFilterIndex,
    place: &Place,
) -> Fallible<()> {
    if place.is_deleted() {
        term_index.remove_entity(&place.id)?;
        facet_index.remove_place(&place.id)?;
        return Ok(());
    }
    term_index.index_entity(&place.id, &place_tokens(place))?;
    facet_index.upsert_place(&place.id, PlaceFacets::from(place))
}

/// Bring the product term index in line with the stored product.
pub fn reindex_product(term_index: &dyn TermIndex, product: &Product) -> Fallible<()> {
    if product.is_deleted() {
        return term_index.remove_entity(&product.id);
    }
    term_index.index_entity(&product.id, &product_tokens(product))
}
