// Low-level storage access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl Pagination {
    /// Cut one page out of an already ordered result list.
    pub fn cut<T>(&self, results: Vec<T>) -> Vec<T> {
        let offset = self.offset.unwrap_or(0) as usize;
        let mut iter = results.into_iter().skip(offset);
        match self.limit {
            Some(limit) => iter.by_ref().take(limit as usize).collect(),
            None => iter.collect(),
        }
    }
}

pub trait PlaceRepo {
    fn create_or_update_place(&self, place: Place) -> Result<()>;

    // Tombstoned places are still loadable; callers decide visibility.
    fn get_place(&self, id: &str) -> Result<Place>;
    fn get_places(&self, ids: &[&str]) -> Result<Vec<Place>>;

    fn all_places(&self) -> Result<Vec<Place>>;
    fn count_places(&self) -> Result<usize>;

    /// The only write path for the derived counters of a place.
    fn update_place_stats(&self, id: &str, stats: PlaceStats) -> Result<()>;

    fn mark_place_deleted(&self, id: &str, deleted_at: Timestamp) -> Result<()>;
}

pub trait ProductRepo {
    fn create_or_update_product(&self, product: Product) -> Result<()>;

    fn get_product(&self, id: &str) -> Result<Product>;
    fn get_products(&self, ids: &[&str]) -> Result<Vec<Product>>;

    fn all_products(&self) -> Result<Vec<Product>>;
    fn count_products(&self) -> Result<usize>;
}

pub trait InventoryRepo {
    /// Upsert keyed by the (place, product) pair. A re-submission keeps
    /// the identifier of the existing link. Returns the stored link.
    fn upsert_inventory_link(&self, link: InventoryLink) -> Result<InventoryLink>;

    fn load_inventory_of_place(&self, place_id: &str) -> Result<Vec<InventoryLink>>;
    fn load_inventory_of_product(&self, product_id: &str) -> Result<Vec<InventoryLink>>;
}

pub trait ReviewRepo {
    fn create_review(&self, review: Review) -> Result<()>;

    fn get_review(&self, id: &str) -> Result<Review>;
    fn update_review(&self, review: &Review) -> Result<()>;

    // All reviews of the place, including tombstoned ones; aggregation
    // applies its own counted-set filter.
    fn load_reviews_of_place(&self, place_id: &str) -> Result<Vec<Review>>;
}

pub trait QuestionRepo {
    fn create_question(&self, question: Question) -> Result<()>;
    fn get_question(&self, id: &str) -> Result<Question>;
    fn update_question(&self, question: &Question) -> Result<()>;

    fn create_answer(&self, answer: Answer) -> Result<()>;
    fn get_answer(&self, id: &str) -> Result<Answer>;
    fn update_answer(&self, answer: &Answer) -> Result<()>;
    fn load_answers_of_question(&self, question_id: &str) -> Result<Vec<Answer>>;

    fn load_questions_of_place(&self, place_id: &str) -> Result<Vec<Question>>;
    fn load_questions_of_product(&self, product_id: &str) -> Result<Vec<Question>>;
}

pub trait FavoriteRepo {
    /// Ok(true) if inserted, Ok(false) if the (user, target) pair
    /// already exists. Never duplicates.
    fn insert_favorite(&self, favorite: Favorite) -> Result<bool>;

    fn delete_favorite(&self, user_id: &str, target: &FavoriteTarget) -> Result<()>;
    fn favorites_of_user(&self, user_id: &str) -> Result<Vec<Favorite>>;
}

pub trait VoteRepo {
    /// Store the vote, replacing any previous vote of the same
    /// (user, target) pair. Returns the replaced vote.
    fn replace_vote(&self, vote: Vote) -> Result<Option<Vote>>;
}
