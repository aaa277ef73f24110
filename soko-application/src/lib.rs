//! # soko-application
//!
//! Flows of the discovery/ranking/trust engine: each flow combines the
//! persistence collaborator, the in-memory indices and the
//! per-aggregate write serialization. [`Engine`] bundles all of it
//! behind the engine's public operations.

mod cast_vote;
mod create_answer;
mod engine;
mod locks;
mod moderate_review;
mod upsert_place;
mod upsert_product;

pub mod error;

pub mod prelude {
    pub use super::{
        cast_vote::*, create_answer::*, engine::Engine, locks::AggregateLocks,
        moderate_review::*, upsert_place::*, upsert_product::*,
    };
}

pub use self::engine::Engine;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use soko_core::{db::*, entities::*, repositories::*, usecases};

#[cfg(test)]
pub(crate) mod tests;
