use serde::{Deserialize, Serialize};

/// Represents a user account.
///
/// The password is write-only: it travels in [`RegisterRequest`] and
/// [`LoginRequest`] but is never part of a user returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: i64,

    /// The user's display name.
    pub name: String,

    /// The user's email address.
    pub email: String,

    /// The user's age in years.
    pub age: u32,
}

/// Request to register a new account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// The user's display name.
    pub name: String,

    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,

    /// The user's age in years.
    pub age: u32,
}

/// Request to authenticate with email and password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

/// Request to update profile fields on an existing user.
///
/// Sent as a PATCH; the password cannot be changed through this payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateUserRequest {
    /// The user's display name.
    pub name: String,

    /// The user's email address.
    pub email: String,

    /// The user's age in years.
    pub age: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User {
            id: 1,
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            age: 34,
        };

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Ann");
        assert_eq!(user.email, "ann@example.com");
        assert_eq!(user.age, 34);
    }

    #[test]
    fn test_user_equality() {
        let user1 = User {
            id: 7,
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            age: 28,
        };
        let user2 = user1.clone();
        let user3 = User { id: 8, ..user1.clone() };

        assert_eq!(user1, user2, "Users with the same data should be equal");
        assert_ne!(user1, user3, "Users with different ids should not be equal");
    }

    #[test]
    fn test_user_serialization_roundtrip() {
        let user = User {
            id: 42,
            name: "Maria".to_string(),
            email: "maria@example.com".to_string(),
            age: 51,
        };

        let serialized = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, user);
    }

    #[test]
    fn test_user_has_no_password_field() {
        // A server response carrying a password must not leak it into the model.
        let json = r#"{"id":3,"name":"Bo","email":"bo@example.com","age":22,"password":"secret"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        let round = serde_json::to_string(&user).unwrap();

        assert!(!round.contains("password"));
        assert!(!round.contains("secret"));
    }

    #[test]
    fn test_register_request_serialization() {
        let request = RegisterRequest {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            password: "password123".to_string(),
            age: 34,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"name\":\"Ann\""));
        assert!(json.contains("\"email\":\"ann@example.com\""));
        assert!(json.contains("\"password\":\"password123\""));
        assert!(json.contains("\"age\":34"));
    }

    #[test]
    fn test_login_request_serialization() {
        let request = LoginRequest {
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"email\":\"a@b.com\""));
        assert!(json.contains("\"password\":\"secret\""));
    }

    #[test]
    fn test_update_user_request_has_no_password() {
        let request = UpdateUserRequest {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            age: 35,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("password"));
    }
}
