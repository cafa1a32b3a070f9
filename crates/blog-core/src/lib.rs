//! # Blog Core
//!
//! The domain layer of MyBlog.
//! Records, repository ports and the view logic that turns stored posts into
//! page contexts. No infrastructure dependencies live here.

pub mod domain;
pub mod error;
pub mod ports;
pub mod views;

pub use error::{DomainError, RepoError};
