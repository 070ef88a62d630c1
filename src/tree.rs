//! Element tree engine
//!
//! This module provides access to hyperbuild-tree: the markup node types,
//! attribute and class handling, escaping and the HTML serializer.
//!
//! ## Example
//!
//! ```rust
//! use hyperbuild::tree::{Element, IntoNode};
//!
//! let list = Element::new("ul")
//!     .children(["One", "Two"].map(|item| Element::new("li").child(item)))
//!     .into_node();
//!
//! assert_eq!(list.render_to_string(), "<ul><li>One</li><li>Two</li></ul>");
//! assert!(list.validate().is_ok());
//! ```

// Re-export all hyperbuild-tree functionality
pub use hyperbuild_tree::*;
