//! Wire models shared between the Shelfmark client and server.

pub mod book;
pub mod errors;
pub mod user;

pub use book::{Book, CreateBookRequest, UpdateBookRequest};
pub use errors::ErrorResponse;
pub use user::{LoginRequest, RegisterRequest, UpdateUserRequest, User};
