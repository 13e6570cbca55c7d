use serde::{Deserialize, Serialize};

/// Represents a book on a user's shelf.
///
/// Books belong to exactly one user through `user_id`. The server is the
/// source of truth; the client keeps a best-effort mirror of this record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Unique identifier for the book.
    pub id: i64,

    /// The book title.
    pub title: String,

    /// Whether the owner has marked the book as read.
    pub is_read: bool,

    /// Identifier of the owning user.
    pub user_id: i64,
}

/// Request to add a book to a user's shelf.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateBookRequest {
    /// The book title.
    pub title: String,

    /// Identifier of the owning user.
    pub user_id: i64,
}

/// Request to rename an existing book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateBookRequest {
    /// The new book title.
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_creation() {
        let book = Book {
            id: 1,
            title: "The Hobbit".to_string(),
            is_read: false,
            user_id: 9,
        };

        assert_eq!(book.id, 1);
        assert_eq!(book.title, "The Hobbit");
        assert!(!book.is_read);
        assert_eq!(book.user_id, 9);
    }

    #[test]
    fn test_book_serialization_roundtrip() {
        let book = Book {
            id: 12,
            title: "Dune".to_string(),
            is_read: true,
            user_id: 3,
        };

        let serialized = serde_json::to_string(&book).unwrap();
        let deserialized: Book = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, book);
    }

    #[test]
    fn test_book_deserializes_from_api_body() {
        let json = r#"{"id":5,"title":"Emma","is_read":false,"user_id":2}"#;
        let book: Book = serde_json::from_str(json).unwrap();

        assert_eq!(book.id, 5);
        assert_eq!(book.title, "Emma");
        assert!(!book.is_read);
        assert_eq!(book.user_id, 2);
    }

    #[test]
    fn test_book_list_rejects_object_body() {
        // The list endpoint must yield an array; an error-shaped object is a
        // decode failure, not an empty list.
        let json = r#"{"error":"x"}"#;
        let parsed: Result<Vec<Book>, _> = serde_json::from_str(json);

        assert!(parsed.is_err());
    }

    #[test]
    fn test_create_book_request_serialization() {
        let request = CreateBookRequest {
            title: "Persuasion".to_string(),
            user_id: 4,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"title\":\"Persuasion\""));
        assert!(json.contains("\"user_id\":4"));
    }

    #[test]
    fn test_update_book_request_carries_only_title() {
        let request = UpdateBookRequest {
            title: "Persuasion (annotated)".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"title":"Persuasion (annotated)"}"#);
    }
}
