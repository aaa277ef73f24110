use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub user_id: Id,
    pub place_id: Option<Id>,
    pub product_id: Option<Id>,
    pub text: String,
    pub category: Option<String>,
}

pub fn ask_question<R>(repo: &R, new: NewQuestion, at: Timestamp) -> Result<Question>
where
    R: QuestionRepo + PlaceRepo + ProductRepo,
{
    let NewQuestion {
        user_id,
        place_id,
        product_id,
        text,
        category,
    } = new;

    if text.trim().is_empty() {
        return Err(Error::EmptyQuestionText);
    }
    if let Some(place_id) = &place_id {
        if repo.get_place(place_id.as_str())?.is_deleted() {
            return Err(Error::Repo(RepoError::NotFound));
        }
    }
    if let Some(product_id) = &product_id {
        if repo.get_product(product_id.as_str())?.is_deleted() {
            return Err(Error::Repo(RepoError::NotFound));
        }
    }

    let question = Question {
        id: Id::new(),
        user_id,
        place_id,
        product_id,
        text,
        category,
        answer_count: 0,
        answered: false,
        helpful_count: 0,
        created_at: at,
    };
    question.verify_target()?;
    repo.create_question(question.clone())?;
    Ok(question)
}
