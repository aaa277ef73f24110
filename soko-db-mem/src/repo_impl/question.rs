use soko_core::entities::{Answer, Id, Question};

use super::*;

impl QuestionRepo for MemoryBackend {
    fn create_question(&self, question: Question) -> Result<()> {
        let mut tables = self.tables.write();
        if tables.questions.contains_key(&question.id) {
            return Err(RepoError::AlreadyExists);
        }
        tables.questions.insert(question.id.clone(), question);
        Ok(())
    }

    fn get_question(&self, id: &str) -> Result<Question> {
        self.tables
            .read()
            .questions
            .get(id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn update_question(&self, question: &Question) -> Result<()> {
        let mut tables = self.tables.write();
        let existing = tables
            .questions
            .get_mut(&question.id)
            .ok_or(RepoError::NotFound)?;
        *existing = question.clone();
        Ok(())
    }

    fn create_answer(&self, answer: Answer) -> Result<()> {
        let mut tables = self.tables.write();
        if !tables.questions.contains_key(&answer.question_id) {
            return Err(RepoError::NotFound);
        }
        tables.answers.insert(answer.id.clone(), answer);
        Ok(())
    }

    fn get_answer(&self, id: &str) -> Result<Answer> {
        self.tables
            .read()
            .answers
            .get(id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn update_answer(&self, answer: &Answer) -> Result<()> {
        let mut tables = self.tables.write();
        let existing = tables
            .answers
            .get_mut(&answer.id)
            .ok_or(RepoError::NotFound)?;
        *existing = answer.clone();
        Ok(())
    }

    fn load_answers_of_question(&self, question_id: &str) -> Result<Vec<Answer>> {
        Ok(self
            .tables
            .read()
            .answers
            .values()
            .filter(|answer| answer.question_id.as_str() == question_id)
            .cloned()
            .collect())
    }

    fn load_questions_of_place(&self, place_id: &str) -> Result<Vec<Question>> {
        Ok(self
            .tables
            .read()
            .questions
            .values()
            .filter(|question| question.place_id.as_ref().map(Id::as_str) == Some(place_id))
            .cloned()
            .collect())
    }

    fn load_questions_of_product(&self, product_id: &str) -> Result<Vec<Question>> {
        Ok(self
            .tables
            .read()
            .questions
            .values()
            .filter(|question| question.product_id.as_ref().map(Id::as_str) == Some(product_id))
            .cloned()
            .collect())
    }
}
