//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_user;
mod m20240301_000002_create_question;
mod m20240301_000003_create_answer;
mod m20240301_000004_create_vote;
mod m20240301_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_user::Migration),
            Box::new(m20240301_000002_create_question::Migration),
            Box::new(m20240301_000003_create_answer::Migration),
            Box::new(m20240301_000004_create_vote::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000005_add_indexes::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_registered_in_dependency_order() {
        let names: Vec<String> = Migrator::migrations().iter().map(|m| m.name().to_string()).collect();
        assert_eq!(
            names,
            vec![
                "m20240301_000001_create_user",
                "m20240301_000002_create_question",
                "m20240301_000003_create_answer",
                "m20240301_000004_create_vote",
                "m20240301_000005_add_indexes",
            ]
        );
    }
}
