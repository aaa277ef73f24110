use soko_index_mem::{InMemFacetIndex, InMemTermIndex};

use crate::{locks::AggregateLocks, *};

/// The assembled engine: one persistence collaborator, the in-memory
/// term/facet indices and the per-aggregate write serialization.
///
/// Ingestion errors surface to the caller; read queries never block on
/// writes and run against the index snapshots current at dispatch time.
#[derive(Debug)]
pub struct Engine<D> {
    pub(crate) db: D,
    pub(crate) place_terms: InMemTermIndex,
    pub(crate) product_terms: InMemTermIndex,
    pub(crate) place_facets: InMemFacetIndex,
    pub(crate) place_locks: AggregateLocks,
    pub(crate) question_locks: AggregateLocks,
    pub(crate) vote_locks: AggregateLocks,
}

impl<D: Db> Engine<D> {
    pub fn new(db: D) -> Self {
        Self {
            db,
            place_terms: InMemTermIndex::new(),
            product_terms: InMemTermIndex::new(),
            place_facets: InMemFacetIndex::new(),
            place_locks: Default::default(),
            question_locks: Default::default(),
            vote_locks: Default::default(),
        }
    }

    pub fn db(&self) -> &D {
        &self.db
    }

    // ----------------------------------------------------------------
    // Ingestion
    // ----------------------------------------------------------------

    pub fn upsert_place(&self, place: Place) -> Result<Place> {
        crate::prelude::upsert_place(
            &self.db,
            &self.place_terms,
            &self.place_facets,
            place,
            Timestamp::now(),
        )
    }

    pub fn delete_place(&self, place_id: &str) -> Result<()> {
        crate::prelude::delete_place(
            &self.db,
            &self.place_terms,
            &self.place_facets,
            place_id,
            Timestamp::now(),
        )
    }

    pub fn upsert_product(&self, product: Product) -> Result<Product> {
        crate::prelude::upsert_product(&self.db, &self.product_terms, product, Timestamp::now())
    }

    pub fn on_inventory_upserted(&self, new: usecases::NewInventoryLink) -> Result<InventoryLink> {
        Ok(usecases::store_inventory_link(&self.db, new, Timestamp::now())?)
    }

    pub fn on_review_submitted(&self, new: usecases::NewReview) -> Result<Review> {
        Ok(usecases::submit_review(&self.db, new, Timestamp::now())?)
    }

    pub fn on_review_moderated(
        &self,
        review_id: &str,
        new_status: ModerationStatus,
    ) -> Result<Review> {
        crate::prelude::moderate_review(
            &self.db,
            &self.place_locks,
            review_id,
            new_status,
            Timestamp::now(),
        )
    }

    pub fn edit_review(&self, review_id: &str, patch: usecases::ReviewPatch) -> Result<Review> {
        crate::prelude::edit_review(&self.db, &self.place_locks, review_id, patch)
    }

    pub fn respond_to_review(&self, review_id: &str, text: String) -> Result<Review> {
        Ok(usecases::respond_to_review(
            &self.db,
            review_id,
            text,
            Timestamp::now(),
        )?)
    }

    pub fn on_vote(
        &self,
        voter_id: Id,
        target: VoteTarget,
        direction: VoteDirection,
    ) -> Result<()> {
        crate::prelude::cast_vote(
            &self.db,
            &self.vote_locks,
            voter_id,
            target,
            direction,
            Timestamp::now(),
        )
    }

    pub fn on_answer_created(&self, new: usecases::NewAnswer) -> Result<Answer> {
        crate::prelude::create_answer(&self.db, &self.question_locks, new, Timestamp::now())
    }

    pub fn ask_question(&self, new: usecases::NewQuestion) -> Result<Question> {
        Ok(usecases::ask_question(&self.db, new, Timestamp::now())?)
    }

    pub fn add_favorite(&self, user_id: Id, target: FavoriteTarget) -> Result<()> {
        Ok(usecases::add_favorite(
            &self.db,
            user_id,
            target,
            Timestamp::now(),
        )?)
    }

    pub fn remove_favorite(&self, user_id: &str, target: &FavoriteTarget) -> Result<()> {
        Ok(usecases::remove_favorite(&self.db, user_id, target)?)
    }

    pub fn bump_place_view(&self, place_id: &str) -> Result<u64> {
        crate::prelude::bump_place_view(&self.db, &self.place_locks, place_id)
    }

    // ----------------------------------------------------------------
    // Queries
    // ----------------------------------------------------------------

    /// Combined free-text + faceted search over places and products.
    /// `filter_params` are raw key/value pairs; unknown keys are
    /// rejected with a validation error.
    pub fn search(
        &self,
        text: Option<&str>,
        filter_params: &[(&str, &str)],
        pagination: &Pagination,
    ) -> Result<usecases::SearchResult> {
        let (constraints, kind) = usecases::parse_filter_params(filter_params.iter().copied())?;
        let request = usecases::SearchRequest {
            text: text.map(str::to_owned),
            constraints,
            kind,
        };
        Ok(usecases::search(
            &self.db,
            &self.place_terms,
            &self.product_terms,
            &self.place_facets,
            &request,
            pagination,
            Timestamp::now(),
        )?)
    }

    pub fn places_for_product(
        &self,
        product_id: &str,
        include_unavailable: bool,
    ) -> Result<Vec<(Place, InventoryLink)>> {
        Ok(usecases::places_for_product(
            &self.db,
            product_id,
            include_unavailable,
        )?)
    }

    pub fn products_for_place(
        &self,
        place_id: &str,
        include_unavailable: bool,
    ) -> Result<Vec<(Product, InventoryLink)>> {
        Ok(usecases::products_for_place(
            &self.db,
            place_id,
            include_unavailable,
        )?)
    }

    pub fn reviews_of_place(
        &self,
        place_id: &str,
        pagination: &Pagination,
    ) -> Result<(Vec<Review>, usize)> {
        Ok(usecases::reviews_of_place(&self.db, place_id, pagination)?)
    }

    pub fn answers_for_question(&self, question_id: &str) -> Result<Vec<Answer>> {
        Ok(usecases::answers_for_question(&self.db, question_id)?)
    }

    pub fn favorites_of_user(&self, user_id: &str) -> Result<Vec<Favorite>> {
        Ok(usecases::favorites_of_user(&self.db, user_id)?)
    }
}
