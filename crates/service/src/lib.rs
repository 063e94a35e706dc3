//! Service layer for votes on questions and answers.
//! - `votes`: create/find/update/remove with existence checks and authorization.
//! - `lookup`: user/question/answer lookups the vote workflow depends on.
//! - `policy`: role and ownership based ability checks.

pub mod errors;
pub mod lookup;
pub mod policy;
pub mod votes;
#[cfg(test)]
pub mod test_support;

pub use votes::VoteService;
