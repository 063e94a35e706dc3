use models::vote::VoteableType;
use models::{answer, question};

use crate::errors::ServiceError;
use crate::lookup::{AnswerLookup, QuestionLookup};

/// Lookup service validating a vote target, one variant per [`VoteableType`].
#[derive(Clone, Copy)]
pub enum VoteableService<'a> {
    Questions(&'a dyn QuestionLookup),
    Answers(&'a dyn AnswerLookup),
}

/// Entity a vote points at.
#[derive(Debug, Clone, PartialEq)]
pub enum VoteableRef {
    Question(question::Model),
    Answer(answer::Model),
}

impl VoteableRef {
    pub fn id(&self) -> i32 {
        match self {
            VoteableRef::Question(q) => q.id,
            VoteableRef::Answer(a) => a.id,
        }
    }
}

impl<'a> VoteableService<'a> {
    pub fn kind(&self) -> VoteableType {
        match self {
            VoteableService::Questions(_) => VoteableType::Question,
            VoteableService::Answers(_) => VoteableType::Answer,
        }
    }

    pub async fn find_one(&self, id: i32) -> Result<Option<VoteableRef>, ServiceError> {
        match self {
            VoteableService::Questions(s) => Ok(s.find_question(id).await?.map(VoteableRef::Question)),
            VoteableService::Answers(s) => Ok(s.find_answer(id).await?.map(VoteableRef::Answer)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::mock::MockLookup;

    #[tokio::test]
    async fn dispatches_by_variant() {
        let lookup = MockLookup::default();
        lookup.add_question(1, 10);
        lookup.add_answer(2, 10, 1);

        let questions = VoteableService::Questions(&lookup);
        let answers = VoteableService::Answers(&lookup);
        assert_eq!(questions.kind(), VoteableType::Question);
        assert_eq!(answers.kind(), VoteableType::Answer);

        assert_eq!(questions.find_one(1).await.unwrap().map(|r| r.id()), Some(1));
        assert!(questions.find_one(2).await.unwrap().is_none());
        assert!(matches!(answers.find_one(2).await.unwrap(), Some(VoteableRef::Answer(_))));
        assert!(answers.find_one(1).await.unwrap().is_none());
    }
}
