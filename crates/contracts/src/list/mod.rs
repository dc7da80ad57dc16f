//! Paginated list plumbing shared by every list page: the query-string
//! builder and the response envelope.

mod page;
mod query;

pub use page::Paged;
pub use query::{ListQuery, SortDirection};
