#[cfg(test)]
mod tests {
    use user_management_api::models::{CreateUserRequest, UpdateUserRequest, User};

    #[test]
    fn test_user_creation() {
        let user = User::new("Alice".to_string(), "alice@example.com".to_string(), 30);

        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.age, 30);
        assert_eq!(user.version, 1);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_create_request_validation_passes() {
        let request = CreateUserRequest {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            age: 30,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_non_positive_age() {
        let request = CreateUserRequest {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            age: 0,
        };
        assert_eq!(request.validate().unwrap_err(), "age must be positive");

        let request = CreateUserRequest {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            age: -4,
        };
        assert_eq!(request.validate().unwrap_err(), "age must be positive");
    }

    #[test]
    fn test_create_request_rejects_empty_name() {
        let request = CreateUserRequest {
            name: "   ".to_string(),
            email: "alice@example.com".to_string(),
            age: 30,
        };
        assert_eq!(request.validate().unwrap_err(), "name must not be empty");
    }

    #[test]
    fn test_create_request_rejects_invalid_email() {
        let request = CreateUserRequest {
            name: "Alice".to_string(),
            email: "not-an-email".to_string(),
            age: 30,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_request_validates_only_present_fields() {
        let request = UpdateUserRequest {
            name: None,
            email: None,
            age: None,
        };
        assert!(request.validate().is_ok());

        let request = UpdateUserRequest {
            age: Some(-1),
            ..Default::default()
        };
        assert_eq!(request.validate().unwrap_err(), "age must be positive");
    }

    #[test]
    fn test_apply_update_bumps_version() {
        let mut user = User::new("Alice".to_string(), "alice@example.com".to_string(), 30);
        let update = UpdateUserRequest {
            age: Some(31),
            ..Default::default()
        };

        user.apply_update(&update);

        assert_eq!(user.age, 31);
        assert_eq!(user.name, "Alice");
        assert_eq!(user.version, 2);
        assert!(user.updated_at >= user.created_at);
    }
}
