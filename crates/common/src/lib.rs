//! Shared helpers for the vote service binaries and tests.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::ok();
        assert_eq!(h.status, "ok");
        assert!(h.is_ok());
    }

    #[test]
    fn health_from_failed_check() {
        let res: Result<(), &str> = Err("connection refused");
        let h = types::Health::from_check(&res);
        assert_eq!(h, types::Health::unavailable());
        assert!(!h.is_ok());
        assert_eq!(types::Health::from_check(&Ok::<_, ()>(())), types::Health::ok());
    }
}
