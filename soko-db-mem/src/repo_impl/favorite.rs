use soko_core::entities::{Favorite, FavoriteTarget};

use super::*;

impl FavoriteRepo for MemoryBackend {
    fn insert_favorite(&self, favorite: Favorite) -> Result<bool> {
        let mut tables = self.tables.write();
        let key = (favorite.user_id.clone(), favorite.target.clone());
        if tables.favorites.contains_key(&key) {
            return Ok(false);
        }
        tables.favorites.insert(key, favorite);
        Ok(true)
    }

    fn delete_favorite(&self, user_id: &str, target: &FavoriteTarget) -> Result<()> {
        let mut tables = self.tables.write();
        let key = (user_id.into(), target.clone());
        tables
            .favorites
            .remove(&key)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }

    fn favorites_of_user(&self, user_id: &str) -> Result<Vec<Favorite>> {
        let mut favorites: Vec<_> = self
            .tables
            .read()
            .favorites
            .values()
            .filter(|favorite| favorite.user_id.as_str() == user_id)
            .cloned()
            .collect();
        favorites.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(favorites)
    }
}
