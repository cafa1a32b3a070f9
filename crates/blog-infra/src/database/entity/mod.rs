//! SeaORM entities for the blog tables.

pub mod author;
pub mod category;
pub mod post;
