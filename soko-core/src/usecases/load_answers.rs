use super::prelude::*;
use crate::util::sort::rank_answers;

/// The answers of a question in display order: authoritative answers
/// first, then net helpfulness, then age.
pub fn answers_for_question<R>(repo: &R, question_id: &str) -> Result<Vec<Answer>>
where
    R: QuestionRepo,
{
    // Verify the reference before loading the (possibly empty) list.
    repo.get_question(question_id)?;
    let mut answers = repo.load_answers_of_question(question_id)?;
    rank_answers(&mut answers);
    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::{
        ask_question, cast_vote, create_answer, tests::*, NewAnswer, NewQuestion,
    };

    #[test]
    fn owner_answer_outranks_upvoted_answer() {
        let db = MockDb::default();
        db.create_or_update_place(place_fixture("p1")).unwrap();
        let q = ask_question(
            &db,
            NewQuestion {
                user_id: "u1".into(),
                place_id: Some("p1".into()),
                product_id: None,
                text: "Fresh goat meat on Fridays?".into(),
                category: None,
            },
            Timestamp::from_seconds(1),
        )
        .unwrap();

        let community = create_answer(
            &db,
            NewAnswer {
                question_id: q.id.clone(),
                user_id: "u2".into(),
                text: "Usually, yes".into(),
                authoritative: false,
            },
            Timestamp::from_seconds(2),
        )
        .unwrap();
        let owner = create_answer(
            &db,
            NewAnswer {
                question_id: q.id.clone(),
                user_id: "owner".into(),
                text: "Every Friday from 9am".into(),
                authoritative: true,
            },
            Timestamp::from_seconds(3),
        )
        .unwrap();

        for voter in ["a", "b", "c"] {
            cast_vote(
                &db,
                voter.into(),
                VoteTarget::Answer(community.id.clone()),
                VoteDirection::Helpful,
                Timestamp::from_seconds(4),
            )
            .unwrap();
        }

        let ranked = answers_for_question(&db, q.id.as_str()).unwrap();
        let ids: Vec<_> = ranked.iter().map(|a| &a.id).collect();
        assert_eq!(ids, vec![&owner.id, &community.id]);
    }

    #[test]
    fn unknown_question_fails() {
        let db = MockDb::default();
        let err = answers_for_question(&db, "ghost").unwrap_err();
        assert!(matches!(err, Error::Repo(RepoError::NotFound)));
    }
}
