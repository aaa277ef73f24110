mod ask_question;
mod availability;
mod bump_place_view;
mod cast_vote;
mod create_answer;
mod edit_review;
mod error;
mod favorites;
mod indexing;
mod load_answers;
mod moderate_review;
mod respond_to_review;
mod reviews_of_place;
mod search;
mod store_inventory;
mod store_place;
mod store_product;
mod submit_review;

pub use self::{
    ask_question::*, availability::*, bump_place_view::*, cast_vote::*, create_answer::*,
    edit_review::*, error::{Error, ErrorKind}, favorites::*, indexing::*, load_answers::*,
    moderate_review::*, respond_to_review::*, reviews_of_place::*, search::*, store_inventory::*,
    store_place::*, store_product::*, submit_review::*,
};

#[cfg(test)]
pub mod tests;

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::*, entities::*, repositories::*, RepoError};
}
