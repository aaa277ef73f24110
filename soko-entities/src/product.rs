use std::collections::BTreeMap;

use crate::{id::*, time::*};

/// An abstract food item, independent of any place.
///
/// Identity is immutable; the descriptive fields (names, tags, keywords)
/// may change over time. Locale name variants and alternative names feed
/// the term index so that a query in any known name resolves to the
/// canonical product.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id                : Id,
    pub name              : String,
    pub description       : Option<String>,
    /// Locale tag ("en", "es", ...) to localized name.
    pub locale_names      : BTreeMap<String, String>,
    pub alternative_names : Vec<String>,
    pub category          : Option<String>,
    pub cuisine_region    : Option<String>,
    pub brand             : Option<String>,
    pub origin_country    : Option<String>,
    pub search_keywords   : Vec<String>,
    pub created_at        : Timestamp,
    pub updated_at        : Timestamp,
    pub deleted_at        : Option<Timestamp>,
}

impl Product {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// All names this product is known under, canonical name first.
    pub fn all_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
            .chain(self.locale_names.values().map(String::as_str))
            .chain(self.alternative_names.iter().map(String::as_str))
    }
}
