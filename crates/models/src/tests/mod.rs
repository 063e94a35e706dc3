
mod validation_tests {
    use crate::user::{self, UserRole};

    #[test]
    fn email_and_name_validation() {
        assert!(user::validate_email("ada@example.com").is_ok());
        assert!(user::validate_email("ada.example.com").is_err());
        assert!(user::validate_name("Ada").is_ok());
        assert!(user::validate_name("   ").is_err());
    }

    #[test]
    fn user_role_tags() {
        assert_eq!("ADMIN".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!(UserRole::User.to_string(), "USER");
        assert!("ROOT".parse::<UserRole>().is_err());
    }
}
