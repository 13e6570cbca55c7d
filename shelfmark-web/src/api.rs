use crate::config::FrontendConfig;
use once_cell::unsync::OnceCell;
use reqwest::{Client, Error};
use shared::models::{
    Book, CreateBookRequest, LoginRequest, RegisterRequest, UpdateBookRequest, UpdateUserRequest,
    User,
};

thread_local! {
    static SHARED_CLIENT: OnceCell<ShelfmarkClient> = OnceCell::new();
}

/// Lightweight API client for the Shelfmark REST API.
///
/// Every call maps a non-2xx response to an error; network failures and
/// malformed bodies surface the same way. No call is retried.
#[derive(Clone, Debug)]
pub struct ShelfmarkClient {
    base_url: String,
    client: Client,
}

impl ShelfmarkClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Register a new account.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<User, Error> {
        let url = self.api_url("users");
        let response = self.client.post(url).json(payload).send().await?;
        response.error_for_status()?.json().await
    }

    /// Authenticate with email/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<User, Error> {
        let url = self.api_url("users/login");
        let response = self.client.post(url).json(payload).send().await?;
        response.error_for_status()?.json().await
    }

    /// Retrieve a user profile.
    pub async fn get_user(&self, user_id: i64) -> Result<User, Error> {
        let url = self.api_url(&format!("users/{}", user_id));
        let response = self.client.get(url).send().await?;
        response.error_for_status()?.json().await
    }

    /// Update profile fields on a user.
    pub async fn update_user(
        &self,
        user_id: i64,
        payload: &UpdateUserRequest,
    ) -> Result<User, Error> {
        let url = self.api_url(&format!("users/{}", user_id));
        let response = self.client.patch(url).json(payload).send().await?;
        response.error_for_status()?.json().await
    }

    /// List all books owned by a user.
    ///
    /// The endpoint must return an array; an object-shaped body (for
    /// example an error payload) fails the decode and is reported as an
    /// error, never as an empty list.
    pub async fn list_books(&self, user_id: i64) -> Result<Vec<Book>, Error> {
        let url = self.api_url(&format!("books/user/{}", user_id));
        let response = self.client.get(url).send().await?;
        response.error_for_status()?.json().await
    }

    /// Add a book to a user's shelf.
    pub async fn create_book(&self, payload: &CreateBookRequest) -> Result<Book, Error> {
        let url = self.api_url("books");
        let response = self.client.post(url).json(payload).send().await?;
        response.error_for_status()?.json().await
    }

    /// Rename an existing book.
    pub async fn update_book(
        &self,
        book_id: i64,
        payload: &UpdateBookRequest,
    ) -> Result<Book, Error> {
        let url = self.api_url(&format!("books/{}", book_id));
        let response = self.client.patch(url).json(payload).send().await?;
        response.error_for_status()?.json().await
    }

    /// Flip a book's read/unread status.
    ///
    /// The endpoint returns no required body, so success carries no data;
    /// the caller reconciles its local copy.
    pub async fn toggle_book_status(&self, book_id: i64) -> Result<(), Error> {
        let url = self.api_url(&format!("books/toggle-status/{}", book_id));
        let response = self
            .client
            .patch(url)
            .json(&serde_json::json!({}))
            .send()
            .await?;
        response.error_for_status()?;
        Ok(())
    }

    /// Remove a book from a user's shelf.
    pub async fn delete_book(&self, book_id: i64) -> Result<(), Error> {
        let url = self.api_url(&format!("books/{}", book_id));
        let response = self.client.delete(url).send().await?;
        response.error_for_status()?;
        Ok(())
    }
}
