pub mod errors;
pub mod db;
pub mod user;
pub mod question;
pub mod answer;
pub mod vote;

#[cfg(test)]
mod tests;
