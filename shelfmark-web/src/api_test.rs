//! Tests for the API client functionality
//!
//! Validates endpoint construction and request payload shapes for the
//! Shelfmark REST API, plus decode behavior for list responses.

#[cfg(test)]
mod tests {
    use crate::api::ShelfmarkClient;
    use shared::models::{
        Book, CreateBookRequest, LoginRequest, RegisterRequest, UpdateBookRequest,
        UpdateUserRequest,
    };

    /// Tests API client creation
    #[test]
    fn test_api_client_creation() {
        let _client = ShelfmarkClient::new("http://localhost:8080");
        // Client should be created successfully
    }

    /// Tests base URL normalization drops trailing slashes
    #[test]
    fn test_base_url_trailing_slash() {
        let _client = ShelfmarkClient::new("http://localhost:8080/");
        // Equivalent to the un-slashed form; endpoint paths join with one '/'
    }

    /// Tests user endpoint URL shapes
    #[test]
    fn test_user_endpoints() {
        let register_url = "/users".to_string();
        assert_eq!(register_url, "/users");

        let login_url = "/users/login".to_string();
        assert_eq!(login_url, "/users/login");

        let user_url = format!("/users/{}", 7);
        assert_eq!(user_url, "/users/7");
    }

    /// Tests book endpoint URL shapes
    #[test]
    fn test_book_endpoints() {
        let list_url = format!("/books/user/{}", 7);
        assert_eq!(list_url, "/books/user/7");

        let book_url = format!("/books/{}", 12);
        assert_eq!(book_url, "/books/12");

        let toggle_url = format!("/books/toggle-status/{}", 12);
        assert_eq!(toggle_url, "/books/toggle-status/12");
    }

    /// Tests login payload shape
    #[test]
    fn test_login_request_payload() {
        let request = LoginRequest {
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"email":"a@b.com","password":"secret"}"#);
    }

    /// Tests register payload shape
    #[test]
    fn test_register_request_payload() {
        let request = RegisterRequest {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            password: "password123".to_string(),
            age: 34,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"name\":\"Ann\""));
        assert!(json.contains("\"age\":34"));
    }

    /// Tests book mutation payload shapes
    #[test]
    fn test_book_request_payloads() {
        let create = CreateBookRequest {
            title: "Dune".to_string(),
            user_id: 7,
        };
        let create_json = serde_json::to_string(&create).unwrap();
        assert_eq!(create_json, r#"{"title":"Dune","user_id":7}"#);

        let update = UpdateBookRequest {
            title: "Dune Messiah".to_string(),
        };
        let update_json = serde_json::to_string(&update).unwrap();
        assert_eq!(update_json, r#"{"title":"Dune Messiah"}"#);
    }

    /// Tests profile update payload shape
    #[test]
    fn test_update_user_payload() {
        let request = UpdateUserRequest {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            age: 35,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("id"));
    }

    /// Tests that the list endpoint body must be an array
    #[test]
    fn test_list_body_must_be_array() {
        let array_body = r#"[{"id":1,"title":"Emma","is_read":false,"user_id":7}]"#;
        let parsed: Result<Vec<Book>, _> = serde_json::from_str(array_body);
        assert_eq!(parsed.unwrap().len(), 1);

        // An error-shaped object is a decode failure, never an empty list
        let object_body = r#"{"error":"x"}"#;
        let parsed: Result<Vec<Book>, _> = serde_json::from_str(object_body);
        assert!(parsed.is_err());
    }

    /// Tests the empty toggle payload
    #[test]
    fn test_toggle_sends_empty_object() {
        let payload = serde_json::json!({});
        assert_eq!(payload.to_string(), "{}");
    }
}
