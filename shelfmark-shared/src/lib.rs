#![cfg_attr(not(test), forbid(unsafe_code))]

//! Shared data models for the Shelfmark book tracker.
//!
//! These types describe the wire format spoken between the web client and
//! the Shelfmark REST API: users, books, and the request payloads for
//! registration, login, and book management.

pub mod models;
