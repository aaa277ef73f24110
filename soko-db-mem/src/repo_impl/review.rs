use soko_core::entities::Review;

use super::*;

impl ReviewRepo for MemoryBackend {
    fn create_review(&self, review: Review) -> Result<()> {
        let mut tables = self.tables.write();
        if tables.reviews.contains_key(&review.id) {
            return Err(RepoError::AlreadyExists);
        }
        tables.reviews.insert(review.id.clone(), review);
        Ok(())
    }

    fn get_review(&self, id: &str) -> Result<Review> {
        self.tables
            .read()
            .reviews
            .get(id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn update_review(&self, review: &Review) -> Result<()> {
        let mut tables = self.tables.write();
        let existing = tables
            .reviews
            .get_mut(&review.id)
            .ok_or(RepoError::NotFound)?;
        *existing = review.clone();
        Ok(())
    }

    fn load_reviews_of_place(&self, place_id: &str) -> Result<Vec<Review>> {
        Ok(self
            .tables
            .read()
            .reviews
            .values()
            .filter(|review| review.place_id.as_str() == place_id)
            .cloned()
            .collect())
    }
}
