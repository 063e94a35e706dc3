use serde::{Deserialize, Serialize};

use models::vote::VoteableType;

/// Persisted vote row.
pub type Vote = models::vote::Model;

/// Create input. `voteable_type` stays a raw tag so unknown kinds surface as a lookup failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVoteInput {
    pub user_id: i32,
    pub voteable_type: String,
    pub voteable_id: i32,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateVoteInput {
    #[serde(default)]
    pub user_id: Option<i32>,
    #[serde(default)]
    pub voteable_type: Option<VoteableType>,
    #[serde(default)]
    pub voteable_id: Option<i32>,
}

impl UpdateVoteInput {
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.voteable_type.is_none() && self.voteable_id.is_none()
    }
}

/// Validated insert handed to the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewVote {
    pub user_id: i32,
    pub voteable_type: VoteableType,
    pub voteable_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_input_deserializes_partially() {
        let patch: UpdateVoteInput = serde_json::from_str(r#"{"voteable_type":"ANSWER"}"#).unwrap();
        assert_eq!(patch.voteable_type, Some(VoteableType::Answer));
        assert!(patch.user_id.is_none());
        assert!(!patch.is_empty());
        assert!(UpdateVoteInput::default().is_empty());
    }

    #[test]
    fn create_input_keeps_raw_tag() {
        let input: CreateVoteInput =
            serde_json::from_str(r#"{"user_id":1,"voteable_type":"COMMENT","voteable_id":2}"#).unwrap();
        assert_eq!(input.voteable_type, "COMMENT");
    }
}
