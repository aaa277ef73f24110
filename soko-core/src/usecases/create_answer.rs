use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewAnswer {
    pub question_id: Id,
    pub user_id: Id,
    pub text: String,
    /// True when the identity collaborator confirmed the answering user
    /// as the verified owner of the place the question refers to.
    pub authoritative: bool,
}

/// Store an answer and keep the parent question's denormalized
/// `answer_count`/`answered` pair consistent.
///
/// Callers serialize invocations per question (see the application
/// layer).
pub fn create_answer<R>(repo: &R, new: NewAnswer, at: Timestamp) -> Result<Answer>
where
    R: QuestionRepo,
{
    let NewAnswer {
        question_id,
        user_id,
        text,
        authoritative,
    } = new;

    if text.trim().is_empty() {
        return Err(Error::EmptyAnswerText);
    }
    let mut question = repo.get_question(question_id.as_str())?;

    let answer = Answer {
        id: Id::new(),
        question_id,
        user_id,
        text,
        authoritative,
        helpful_count: 0,
        unhelpful_count: 0,
        created_at: at,
    };
    repo.create_answer(answer.clone())?;

    question.answer_count += 1;
    question.answered = true;
    repo.update_question(&question)?;
    Ok(answer)
}
