//! # sokodb
//!
//! Discovery, ranking and trust engine for a food place/product
//! directory: free-text + faceted search, derived trust signals (place
//! ratings, review moderation, Q&A ranking) and product↔place
//! availability joins.
//!
//! This crate is the facade over the workspace members; embedders that
//! only need one layer can depend on the member crates directly.

pub use soko_application::{error::AppError, prelude as flows, Engine, Result};
pub use soko_core::{db, rating, repositories, text, usecases, util, RepoError};
pub use soko_db_mem::MemoryBackend;
pub use soko_index_mem::{InMemFacetIndex, InMemTermIndex};

pub mod entities {
    pub use soko_entities::{
        favorite::*, geo::*, hours::*, id::*, inventory::*, place::*, product::*, question::*,
        rating::*, review::*, time::*, vote::*,
    };
}
