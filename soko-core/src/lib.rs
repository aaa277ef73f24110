//! # soko-core
//!
//! Business rules of the discovery/ranking/trust engine: repository and
//! index contracts, the trust aggregation math and one usecase per
//! engine operation. Storage and index technologies are collaborators
//! behind the traits in [`repositories`] and [`db`].

pub mod db;
pub mod rating;
pub mod repositories;
pub mod text;
pub mod usecases;
pub mod util;

pub use self::repositories::Error as RepoError;

pub mod entities {
    pub use soko_entities::{
        favorite::*, geo::*, hours::*, id::*, inventory::*, place::*, product::*, question::*,
        rating::*, review::*, time::*, vote::*,
    };

    #[cfg(test)]
    pub use soko_entities::builders;
}
