//! Hierarchical menu builder with active-state aware HTML rendering.
//!
//! Menus are trees of [`ItemList`]s holding [`Item`]s; each item wraps a
//! link or raw markup and may own a nested list. Rendering walks the tree,
//! marks items matching the current [`Request`] with CSS classes, and
//! serializes everything to an HTML string.
//!
//! # Architecture
//!
//! - [`content`]: [`Link`] and [`Raw`] payloads, URL templates and prefixes
//! - [`tree`]: the list/item tree, its builder API and depth queries
//! - [`options`]: per-list overrides resolved through a [`Scope`] chain
//! - [`html`]: element serialization and entity decoding
//! - [`definition`]: serde-deserializable menu descriptions
//!
//! # Example
//!
//! ```
//! use menu::{Defaults, ItemList, RenderContext, StaticRequest};
//!
//! let mut users = ItemList::named("users");
//! users.add("/users/new", "New user")?;
//!
//! let mut main = ItemList::named("main");
//! main.add("/", "Home")?
//!     .add_with("/users", "Users", Default::default(),
//!         menu::ItemOptions::new().children(users))?;
//!
//! let request = StaticRequest::new("https://example.com/users/new");
//! let defaults = Defaults::default();
//! let html = main.to_html(&RenderContext::new(&request, &defaults));
//!
//! assert!(html.contains(r#"<li class="active-child"><a href="/users">Users</a>"#));
//! assert!(html.contains(r#"<li class="active"><a href="/users/new">New user</a></li>"#));
//! # Ok::<(), menu::MenuError>(())
//! ```

pub mod attributes;
pub mod content;
mod context;
pub mod definition;
mod error;
pub mod html;
pub mod options;
mod request;
pub mod tree;

pub use attributes::Attributes;
pub use content::{Content, ContentKind, Link, Raw};
pub use context::RenderContext;
pub use definition::{ItemDefinition, MenuDefinition};
pub use error::MenuError;
pub use html::{Element, decode_entities, render_element};
pub use options::{Defaults, OptionLayer, Scope};
pub use request::{Request, StaticRequest};
pub use tree::{Item, ItemList, ItemOptions};
