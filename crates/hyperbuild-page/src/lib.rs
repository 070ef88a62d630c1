//! Full-page document assembly for hyperbuild.
//!
//! A [`Document`] collects page metadata (title, favicon, keywords,
//! description) and ordered script/style resources, then assembles them onto a
//! `head`/`body` pair built with [`hyperbuild_tree`].
//!
//! ## Resource disambiguation
//!
//! - Inline styles and scripts are wrapped in `<style>`/`<script>` unless they
//!   already start with that opening tag, in which case they pass through as
//!   raw markup.
//! - Script and stylesheet URLs become `<script src>` and
//!   `<link rel="stylesheet">` elements. [`Compatibility::Legacy`] restores the
//!   legacy handling of relative URLs (see [`Compatibility`]).
//!
//! ## Example
//!
//! ```
//! use hyperbuild_page::{Document, DocumentOptions};
//!
//! let html = Document::with_options(DocumentOptions::new().legacy())
//!     .title("Docs")
//!     .description("Reference")
//!     .render();
//!
//! assert!(html.contains(r#"<meta name="keywords" content="Reference" />"#));
//! ```

mod document;
mod error;
mod options;
mod resources;

pub use document::{CHARSET, DOCTYPE, Document};
pub use error::ConfigError;
pub use options::{Compatibility, DocumentOptions};
pub use resources::{is_absolute_url, is_preformed};
