//! # hyperbuild
//!
//! A programmatic builder for HTML markup.
//!
//! Callers assemble a tree of tagged elements and attributes through chained
//! calls, then render the tree to a markup string in one pass. There are no
//! template directives and no diffing.
//!
//! ## Feature Flags
//!
//! - `page` (default) - Full-page document assembly ([`page::Document`])
//! - `full` - All features enabled
//!
//! The element tree engine ([`tree`]) is always available.
//!
//! ## Quick Example
//!
//! ```rust
//! use hyperbuild::prelude::*;
//!
//! let card = Element::new("div")
//!     .class("card")
//!     .child(Element::new("img").attr("src", "/cat.png").attr("alt", "A \"cat\""))
//!     .child(Element::new("p").child("Cats & dogs"));
//!
//! assert_eq!(
//!     card.render_to_string(),
//!     r#"<div class="card"><img src="/cat.png" alt="A &quot;cat&quot;" /><p>Cats &amp; dogs</p></div>"#
//! );
//!
//! let html = Document::new().title("Pets").child(card).render();
//! assert!(html.starts_with("<!DOCTYPE html><head>"));
//! ```

pub mod tree;

#[cfg(feature = "page")]
pub mod page;

pub use hyperbuild_tree::{Element, IntoNode, Node};

#[cfg(feature = "page")]
pub use hyperbuild_page::{Compatibility, Document, DocumentOptions};

/// Commonly used types.
pub mod prelude {
	pub use crate::{Element, IntoNode, Node};

	#[cfg(feature = "page")]
	pub use crate::{Compatibility, Document, DocumentOptions};
}
