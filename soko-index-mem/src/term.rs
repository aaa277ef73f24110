use std::{
    collections::{BTreeSet, HashMap, HashSet},
    sync::Arc,
};

use anyhow::Result as Fallible;
use parking_lot::{Mutex, RwLock};

use soko_core::{
    db::{TermHit, TermIndex},
    entities::Id,
};

#[derive(Debug, Default, Clone)]
struct Snapshot {
    /// token -> entity ids carrying that token
    postings: HashMap<String, BTreeSet<Id>>,
    /// The token set each entity is currently indexed under. Needed to
    /// drop every stale posting on re-index (full remove + reinsert, so
    /// retired aliases cannot leak into results).
    tokens_by_entity: HashMap<Id, Vec<String>>,
    generation: u64,
}

impl Snapshot {
    fn unlink(&mut self, id: &Id) {
        if let Some(tokens) = self.tokens_by_entity.remove(id) {
            for token in tokens {
                if let Some(ids) = self.postings.get_mut(&token) {
                    ids.remove(id);
                    if ids.is_empty() {
                        self.postings.remove(&token);
                    }
                }
            }
        }
    }
}

/// Inverted token index with copy-then-swap snapshot semantics.
#[derive(Debug, Default)]
pub struct InMemTermIndex {
    snapshot: RwLock<Arc<Snapshot>>,
    // Serializes writers; readers never take this.
    write_guard: Mutex<()>,
}

impl InMemTermIndex {
    pub fn new() -> Self {
        Default::default()
    }

    fn load(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot.read())
    }

    fn publish(&self, next: Snapshot) {
        *self.snapshot.write() = Arc::new(next);
    }
}

impl TermIndex for InMemTermIndex {
    fn index_entity(&self, id: &Id, tokens: &[String]) -> Fallible<()> {
        let _guard = self.write_guard.lock();
        let mut next = Snapshot::clone(&self.load());
        next.unlink(id);
        for token in tokens {
            next.postings
                .entry(token.clone())
                .or_default()
                .insert(id.clone());
        }
        next.tokens_by_entity.insert(id.clone(), tokens.to_vec());
        next.generation += 1;
        self.publish(next);
        Ok(())
    }

    fn remove_entity(&self, id: &Id) -> Fallible<()> {
        let _guard = self.write_guard.lock();
        let snapshot = self.load();
        if !snapshot.tokens_by_entity.contains_key(id) {
            return Ok(());
        }
        let mut next = Snapshot::clone(&snapshot);
        next.unlink(id);
        next.generation += 1;
        self.publish(next);
        Ok(())
    }

    fn query_tokens(&self, tokens: &[String]) -> Fallible<Vec<TermHit>> {
        let snapshot = self.load();
        let unique: HashSet<&String> = tokens.iter().collect();
        let mut overlaps: HashMap<&Id, usize> = HashMap::new();
        for token in unique {
            if let Some(ids) = snapshot.postings.get(token) {
                for id in ids {
                    *overlaps.entry(id).or_insert(0) += 1;
                }
            }
        }
        let mut hits: Vec<TermHit> = overlaps
            .into_iter()
            .map(|(id, overlap)| TermHit {
                id: id.clone(),
                overlap,
            })
            .collect();
        hits.sort_by(|a, b| b.overlap.cmp(&a.overlap).then_with(|| a.id.cmp(&b.id)));
        Ok(hits)
    }

    fn generation(&self) -> u64 {
        self.load().generation
    }
}
