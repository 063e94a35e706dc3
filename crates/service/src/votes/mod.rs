//! Votes module: three-layer architecture (domain, repository, service).
//!
//! The target of a vote is validated through [`voteable::VoteableService`],
//! picked from the vote's type tag.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;
pub mod voteable;

pub use service::VoteService;
