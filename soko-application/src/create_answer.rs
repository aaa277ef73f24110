use crate::{locks::AggregateLocks, *};

/// Store an answer under the parent question's aggregate guard, keeping
/// `answer_count`/`answered` consistent with the true answer set.
pub fn create_answer<D>(
    db: &D,
    question_locks: &AggregateLocks,
    new: usecases::NewAnswer,
    at: Timestamp,
) -> Result<Answer>
where
    D: Db,
{
    let question = question_locks.guard(&new.question_id);
    let _serialized = question.lock();
    Ok(usecases::create_answer(db, new, at)?)
}
