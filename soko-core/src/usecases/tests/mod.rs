// In-memory mock of the persistence collaborator for usecase tests.
// Intentionally simple (RefCell + Vec); the production-grade in-memory
// backend lives in its own crate.

use std::cell::RefCell;

use crate::{
    entities::{builders::*, *},
    repositories::*,
    usecases::NewReview,
};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Default)]
pub struct MockDb {
    pub places: RefCell<Vec<Place>>,
    pub products: RefCell<Vec<Product>>,
    pub inventory: RefCell<Vec<InventoryLink>>,
    pub reviews: RefCell<Vec<Review>>,
    pub questions: RefCell<Vec<Question>>,
    pub answers: RefCell<Vec<Answer>>,
    pub favorites: RefCell<Vec<Favorite>>,
    pub votes: RefCell<Vec<Vote>>,
}

pub fn place_fixture(id: &str) -> Place {
    Place::build().id(id).name("Mama Africa Market").finish()
}

pub fn place_fixture_deleted(id: &str) -> Place {
    Place::build()
        .id(id)
        .name("Closed Market")
        .deleted_at(Some(Timestamp::from_seconds(1)))
        .finish()
}

pub fn product_fixture(id: &str) -> Product {
    Product::build().id(id).name("Gari").finish()
}

pub fn new_review(place_id: &str, value: i8) -> NewReview {
    NewReview {
        user_id: "u1".into(),
        place_id: place_id.into(),
        product_id: None,
        value,
        title: None,
        text: "solid selection".into(),
        context: ReviewContext::General,
    }
}

impl PlaceRepo for MockDb {
    fn create_or_update_place(&self, place: Place) -> Result<()> {
        let mut places = self.places.borrow_mut();
        if let Some(existing) = places.iter_mut().find(|p| p.id == place.id) {
            *existing = place;
        } else {
            places.push(place);
        }
        Ok(())
    }

    fn get_place(&self, id: &str) -> Result<Place> {
        self.places
            .borrow()
            .iter()
            .find(|p| p.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn get_places(&self, ids: &[&str]) -> Result<Vec<Place>> {
        Ok(self
            .places
            .borrow()
            .iter()
            .filter(|p| ids.contains(&p.id.as_str()))
            .cloned()
            .collect())
    }

    fn all_places(&self) -> Result<Vec<Place>> {
        Ok(self.places.borrow().clone())
    }

    fn count_places(&self) -> Result<usize> {
        Ok(self.places.borrow().len())
    }

    fn update_place_stats(&self, id: &str, stats: PlaceStats) -> Result<()> {
        let mut places = self.places.borrow_mut();
        let place = places
            .iter_mut()
            .find(|p| p.id.as_str() == id)
            .ok_or(Error::NotFound)?;
        place.stats = stats;
        Ok(())
    }

    fn mark_place_deleted(&self, id: &str, deleted_at: Timestamp) -> Result<()> {
        let mut places = self.places.borrow_mut();
        let place = places
            .iter_mut()
            .find(|p| p.id.as_str() == id)
            .ok_or(Error::NotFound)?;
        place.deleted_at = Some(deleted_at);
        Ok(())
    }
}

impl ProductRepo for MockDb {
    fn create_or_update_product(&self, product: Product) -> Result<()> {
        let mut products = self.products.borrow_mut();
        if let Some(existing) = products.iter_mut().find(|p| p.id == product.id) {
            *existing = product;
        } else {
            products.push(product);
        }
        Ok(())
    }

    fn get_product(&self, id: &str) -> Result<Product> {
        self.products
            .borrow()
            .iter()
            .find(|p| p.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn get_products(&self, ids: &[&str]) -> Result<Vec<Product>> {
        Ok(self
            .products
            .borrow()
            .iter()
            .filter(|p| ids.contains(&p.id.as_str()))
            .cloned()
            .collect())
    }

    fn all_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.borrow().clone())
    }

    fn count_products(&self) -> Result<usize> {
        Ok(self.products.borrow().len())
    }
}

impl InventoryRepo for MockDb {
    fn upsert_inventory_link(&self, link: InventoryLink) -> Result<InventoryLink> {
        let mut inventory = self.inventory.borrow_mut();
        if let Some(existing) = inventory
            .iter_mut()
            .find(|l| l.place_id == link.place_id && l.product_id == link.product_id)
        {
            let InventoryLink {
                id: _,
                place_id: _,
                product_id: _,
                commonly_available,
                typical_price,
                note,
                last_verified_at,
            } = link;
            existing.commonly_available = commonly_available;
            existing.typical_price = typical_price;
            existing.note = note;
            existing.last_verified_at = last_verified_at;
            return Ok(existing.clone());
        }
        inventory.push(link.clone());
        Ok(link)
    }

    fn load_inventory_of_place(&self, place_id: &str) -> Result<Vec<InventoryLink>> {
        Ok(self
            .inventory
            .borrow()
            .iter()
            .filter(|l| l.place_id.as_str() == place_id)
            .cloned()
            .collect())
    }

    fn load_inventory_of_product(&self, product_id: &str) -> Result<Vec<InventoryLink>> {
        Ok(self
            .inventory
            .borrow()
            .iter()
            .filter(|l| l.product_id.as_str() == product_id)
            .cloned()
            .collect())
    }
}

impl ReviewRepo for MockDb {
    fn create_review(&self, review: Review) -> Result<()> {
        self.reviews.borrow_mut().push(review);
        Ok(())
    }

    fn get_review(&self, id: &str) -> Result<Review> {
        self.reviews
            .borrow()
            .iter()
            .find(|r| r.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn update_review(&self, review: &Review) -> Result<()> {
        let mut reviews = self.reviews.borrow_mut();
        let existing = reviews
            .iter_mut()
            .find(|r| r.id == review.id)
            .ok_or(Error::NotFound)?;
        *existing = review.clone();
        Ok(())
    }

    fn load_reviews_of_place(&self, place_id: &str) -> Result<Vec<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.place_id.as_str() == place_id)
            .cloned()
            .collect())
    }
}

impl QuestionRepo for MockDb {
    fn create_question(&self, question: Question) -> Result<()> {
        self.questions.borrow_mut().push(question);
        Ok(())
    }

    fn get_question(&self, id: &str) -> Result<Question> {
        self.questions
            .borrow()
            .iter()
            .find(|q| q.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn update_question(&self, question: &Question) -> Result<()> {
        let mut questions = self.questions.borrow_mut();
        let existing = questions
            .iter_mut()
            .find(|q| q.id == question.id)
            .ok_or(Error::NotFound)?;
        *existing = question.clone();
        Ok(())
    }

    fn create_answer(&self, answer: Answer) -> Result<()> {
        self.answers.borrow_mut().push(answer);
        Ok(())
    }

    fn get_answer(&self, id: &str) -> Result<Answer> {
        self.answers
            .borrow()
            .iter()
            .find(|a| a.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn update_answer(&self, answer: &Answer) -> Result<()> {
        let mut answers = self.answers.borrow_mut();
        let existing = answers
            .iter_mut()
            .find(|a| a.id == answer.id)
            .ok_or(Error::NotFound)?;
        *existing = answer.clone();
        Ok(())
    }

    fn load_answers_of_question(&self, question_id: &str) -> Result<Vec<Answer>> {
        Ok(self
            .answers
            .borrow()
            .iter()
            .filter(|a| a.question_id.as_str() == question_id)
            .cloned()
            .collect())
    }

    fn load_questions_of_place(&self, place_id: &str) -> Result<Vec<Question>> {
        Ok(self
            .questions
            .borrow()
            .iter()
            .filter(|q| q.place_id.as_ref().map(Id::as_str) == Some(place_id))
            .cloned()
            .collect())
    }

    fn load_questions_of_product(&self, product_id: &str) -> Result<Vec<Question>> {
        Ok(self
            .questions
            .borrow()
            .iter()
            .filter(|q| q.product_id.as_ref().map(Id::as_str) == Some(product_id))
            .cloned()
            .collect())
    }
}

impl FavoriteRepo for MockDb {
    fn insert_favorite(&self, favorite: Favorite) -> Result<bool> {
        let mut favorites = self.favorites.borrow_mut();
        if favorites
            .iter()
            .any(|f| f.user_id == favorite.user_id && f.target == favorite.target)
        {
            return Ok(false);
        }
        favorites.push(favorite);
        Ok(true)
    }

    fn delete_favorite(&self, user_id: &str, target: &FavoriteTarget) -> Result<()> {
        let mut favorites = self.favorites.borrow_mut();
        let before = favorites.len();
        favorites.retain(|f| !(f.user_id.as_str() == user_id && &f.target == target));
        if favorites.len() == before {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    fn favorites_of_user(&self, user_id: &str) -> Result<Vec<Favorite>> {
        Ok(self
            .favorites
            .borrow()
            .iter()
            .filter(|f| f.user_id.as_str() == user_id)
            .cloned()
            .collect())
    }
}

impl VoteRepo for MockDb {
    fn replace_vote(&self, vote: Vote) -> Result<Option<Vote>> {
        let mut votes = self.votes.borrow_mut();
        let previous = votes
            .iter()
            .position(|v| v.user_id == vote.user_id && v.target == vote.target)
            .map(|idx| votes.remove(idx));
        votes.push(vote);
        Ok(previous)
    }
}
