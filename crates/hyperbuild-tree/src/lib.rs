//! Element tree engine for hyperbuild.
//!
//! This crate provides the markup tree ([`Node`], [`Element`]) and its
//! serializer. Trees are built with chained calls and rendered to a string in
//! one pass.
//!
//! ## Example
//!
//! ```
//! use hyperbuild_tree::{Element, IntoNode, Node};
//!
//! let page = Element::new("div")
//!     .id("main")
//!     .class("container")
//!     .child(Element::new("h1").child("Hello, World!"))
//!     .child(Element::new("br"))
//!     .child(Node::raw("<!-- built by hand -->"))
//!     .into_node();
//!
//! assert_eq!(
//!     page.render_to_string(),
//!     r#"<div id="main" class="container"><h1>Hello, World!</h1><br /><!-- built by hand --></div>"#
//! );
//! ```
//!
//! ## Rendering rules
//!
//! - Attributes render in first-insertion order as ` name="value"`, with `&`,
//!   `<`, `>` and `"` escaped in the value.
//! - Elements listed in [`VOID_ELEMENTS`] close with ` />` and never render
//!   children.
//! - [`Node::Raw`] content is emitted verbatim; [`Node::Text`] is escaped.

mod element;
mod node;
mod util;
mod validate;

pub use element::{Attribute, Element};
pub use node::{IntoNode, Node};
pub use util::{VOID_ELEMENTS, escape_attribute, html_escape, is_void_element};
pub use validate::{TreeError, TreeResult};
