//! Error codes for the Bookshelf backend API.

pub mod error_code;

pub use error_code::ErrorCode;
