//! # soko-db-mem
//!
//! Reference implementation of the engine's persistence contracts,
//! backed by process memory. Serves as the test backend and as the
//! storage for embedded deployments without an external database.
//!
//! All tables live behind one `RwLock`; every repository method is a
//! single atomic read or read-modify-write section, which is the
//! atomicity level the core requires from a persistence collaborator.

use std::collections::HashMap;

use parking_lot::RwLock;

use soko_core::entities::*;

mod repo_impl;

#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub places: HashMap<Id, Place>,
    pub products: HashMap<Id, Product>,
    pub inventory: HashMap<Id, InventoryLink>,
    /// (place, product) -> link id; backs the pair-uniqueness contract.
    pub inventory_by_pair: HashMap<(Id, Id), Id>,
    pub reviews: HashMap<Id, Review>,
    pub questions: HashMap<Id, Question>,
    pub answers: HashMap<Id, Answer>,
    pub favorites: HashMap<(Id, FavoriteTarget), Favorite>,
    pub votes: HashMap<(Id, VoteTarget), Vote>,
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    pub(crate) tables: RwLock<Tables>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Default::default()
    }
}
