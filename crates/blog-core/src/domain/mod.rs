//! Domain entities - the core blog records.

mod author;
mod category;
mod page;
mod post;

pub use author::{Author, NewAuthor};
pub use category::{Category, NewCategory};
pub use page::{PageRequest, Pagination};
pub use post::{NewPost, Post};
