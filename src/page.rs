//! Full-page document assembly
//!
//! This module provides access to hyperbuild-page, which turns page metadata
//! and script/style resources into a complete `<!DOCTYPE html>` document.
//!
//! ## Example
//!
//! ```rust
//! use hyperbuild::page::{Document, DocumentOptions};
//!
//! let options = DocumentOptions::from_toml_str(r#"compatibility = "standard""#)?;
//! let html = Document::with_options(options)
//!     .title("Dashboard")
//!     .script_urls(["https://cdn.example.com/chart.js", "/static/app.js"])
//!     .render();
//!
//! assert!(html.contains(r#"<script src="/static/app.js"></script>"#));
//! # Ok::<(), hyperbuild::page::ConfigError>(())
//! ```

// Re-export all hyperbuild-page functionality
pub use hyperbuild_page::*;
