pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{
    inventory_builder::*, place_builder::*, product_builder::*, review_builder::*,
};

pub mod place_builder {

    use super::*;
    use crate::{geo::*, id::*, place::*, time::*};

    #[derive(Debug)]
    pub struct PlaceBuild {
        place: Place,
    }

    impl PlaceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.place.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.place.name = name.into();
            self
        }
        pub fn place_type(mut self, place_type: PlaceType) -> Self {
            self.place.place_type = place_type;
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.place.location.address.city = city.into();
            self
        }
        pub fn region(mut self, region: &str) -> Self {
            self.place.location.address.region = Some(region.into());
            self
        }
        pub fn postal_code(mut self, postal_code: &str) -> Self {
            self.place.location.address.postal_code = Some(postal_code.into());
            self
        }
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.place.location.pos = Some(Coordinate { lat, lng });
            self
        }
        pub fn delivery(mut self, delivery: bool) -> Self {
            self.place.delivery = delivery;
            self
        }
        pub fn owner_verified(mut self, owner_verified: bool) -> Self {
            self.place.owner_verified = owner_verified;
            self
        }
        pub fn specialization(mut self, specialization: &str) -> Self {
            self.place.specialization = Some(specialization.into());
            self
        }
        pub fn deleted_at(mut self, at: Option<Timestamp>) -> Self {
            self.place.deleted_at = at;
            self
        }
        pub fn finish(self) -> Place {
            self.place
        }
    }

    impl Builder for Place {
        type Build = PlaceBuild;
        fn build() -> Self::Build {
            Self::Build {
                place: Place {
                    id: Id::new(),
                    name: Default::default(),
                    description: None,
                    location: Default::default(),
                    place_type: PlaceType::Grocery,
                    specialization: None,
                    languages_spoken: vec![],
                    payment: Default::default(),
                    delivery: false,
                    delivery_notes: None,
                    hours: Default::default(),
                    owner_verified: false,
                    owner_name: None,
                    stats: Default::default(),
                    created_at: Timestamp::from_seconds(0),
                    updated_at: Timestamp::from_seconds(0),
                    deleted_at: None,
                },
            }
        }
    }
}

pub mod product_builder {

    use super::*;
    use crate::{id::*, product::*, time::*};

    #[derive(Debug)]
    pub struct ProductBuild {
        product: Product,
    }

    impl ProductBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.product.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.product.name = name.into();
            self
        }
        pub fn locale_name(mut self, locale: &str, name: &str) -> Self {
            self.product.locale_names.insert(locale.into(), name.into());
            self
        }
        pub fn alternative_names(mut self, names: Vec<impl Into<String>>) -> Self {
            self.product.alternative_names = names.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.product.category = Some(category.into());
            self
        }
        pub fn search_keywords(mut self, keywords: Vec<impl Into<String>>) -> Self {
            self.product.search_keywords = keywords.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn finish(self) -> Product {
            self.product
        }
    }

    impl Builder for Product {
        type Build = ProductBuild;
        fn build() -> Self::Build {
            Self::Build {
                product: Product {
                    id: Id::new(),
                    name: Default::default(),
                    description: None,
                    locale_names: Default::default(),
                    alternative_names: vec![],
                    category: None,
                    cuisine_region: None,
                    brand: None,
                    origin_country: None,
                    search_keywords: vec![],
                    created_at: Timestamp::from_seconds(0),
                    updated_at: Timestamp::from_seconds(0),
                    deleted_at: None,
                },
            }
        }
    }
}

pub mod review_builder {

    use super::*;
    use crate::{id::*, rating::*, review::*, time::*};

    #[derive(Debug)]
    pub struct ReviewBuild {
        review: Review,
    }

    impl ReviewBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.review.id = id.into();
            self
        }
        pub fn user(mut self, user_id: &str) -> Self {
            self.review.user_id = user_id.into();
            self
        }
        pub fn place(mut self, place_id: &str) -> Self {
            self.review.place_id = place_id.into();
            self
        }
        pub fn product(mut self, product_id: &str) -> Self {
            self.review.product_id = Some(product_id.into());
            self
        }
        pub fn value(mut self, value: i8) -> Self {
            self.review.value = RatingValue::try_from(value).expect("rating value");
            self
        }
        pub fn status(mut self, status: ModerationStatus) -> Self {
            self.review.status = status;
            self
        }
        pub fn created_at(mut self, at: Timestamp) -> Self {
            self.review.created_at = at;
            self
        }
        pub fn deleted_at(mut self, at: Option<Timestamp>) -> Self {
            self.review.deleted_at = at;
            self
        }
        pub fn finish(self) -> Review {
            self.review
        }
    }

    impl Builder for Review {
        type Build = ReviewBuild;
        fn build() -> Self::Build {
            Self::Build {
                review: Review {
                    id: Id::new(),
                    user_id: Id::new(),
                    place_id: Id::new(),
                    product_id: None,
                    value: RatingValue::try_from(3).expect("rating value"),
                    title: None,
                    text: "ok".into(),
                    context: ReviewContext::General,
                    status: ModerationStatus::default(),
                    helpful_count: 0,
                    unhelpful_count: 0,
                    owner_response: None,
                    created_at: Timestamp::from_seconds(0),
                    deleted_at: None,
                },
            }
        }
    }
}

pub mod inventory_builder {

    use super::*;
    use crate::{id::*, inventory::*, time::*};

    #[derive(Debug)]
    pub struct InventoryLinkBuild {
        link: InventoryLink,
    }

    impl InventoryLinkBuild {
        pub fn place(mut self, place_id: &str) -> Self {
            self.link.place_id = place_id.into();
            self
        }
        pub fn product(mut self, product_id: &str) -> Self {
            self.link.product_id = product_id.into();
            self
        }
        pub fn commonly_available(mut self, available: bool) -> Self {
            self.link.commonly_available = available;
            self
        }
        pub fn price(mut self, amount: f64, currency: &str) -> Self {
            self.link.typical_price = Some(Price {
                amount,
                currency: currency.into(),
            });
            self
        }
        pub fn last_verified_at(mut self, at: Timestamp) -> Self {
            self.link.last_verified_at = at;
            self
        }
        pub fn finish(self) -> InventoryLink {
            self.link
        }
    }

    impl Builder for InventoryLink {
        type Build = InventoryLinkBuild;
        fn build() -> Self::Build {
            Self::Build {
                link: InventoryLink {
                    id: Id::new(),
                    place_id: Id::new(),
                    product_id: Id::new(),
                    commonly_available: true,
                    typical_price: None,
                    note: None,
                    last_verified_at: Timestamp::from_seconds(0),
                },
            }
        }
    }
}
