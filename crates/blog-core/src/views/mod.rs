//! Page views - read-only queries that assemble rendering contexts.
//!
//! Each view returns a serializable context; the HTTP layer hands it to the
//! template renderer unchanged.

mod detail;
mod list;
mod post_view;
mod sidebar;

pub use detail::{PostDetailContext, post_detail};
pub use list::{PostListContext, post_list};
pub use post_view::{CategoryLabel, PostView};
pub use sidebar::{CategoryEntry, Sidebar};
