//! Menu tree: item lists holding items holding optional child lists.
//!
//! Each [`ItemList`] owns its items and each [`Item`] owns its children
//! list. There are no parent pointers; upward information (inherited
//! options, enclosing list names) comes from the
//! [`Scope`](crate::options::Scope) chain built while traversing.

mod item;
mod item_list;
mod query;

pub use item::Item;
pub use item_list::{ItemList, ItemOptions};
