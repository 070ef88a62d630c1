//! Full-page document assembly.

use std::fmt;

use hyperbuild_tree::{Element, IntoNode, Node};

use crate::options::DocumentOptions;
use crate::resources::{
	external_script, favicon, inline_script, inline_style, is_absolute_url, is_preformed, meta,
	stylesheet,
};

/// The doctype every document starts with.
pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// The charset every document declares.
pub const CHARSET: &str = "utf-8";

/// A full HTML page: a `head`/`body` pair plus page metadata and resources.
///
/// Metadata and resource lists are turned into elements only when the page is
/// rendered. Rendering works on copies of `head` and `body`, so a document can
/// be rendered any number of times with the same result.
///
/// The mutators skip empty strings. The public fields are not filtered.
///
/// # Example
///
/// ```
/// use hyperbuild_page::Document;
/// use hyperbuild_tree::Element;
///
/// let html = Document::new()
///     .title("T")
///     .style_url("/a.css")
///     .script("alert(1)")
///     .child(Element::new("h1").child("Hello"))
///     .render();
///
/// assert_eq!(
///     html,
///     concat!(
///         "<!DOCTYPE html>",
///         "<head><meta charset=\"utf-8\" /><title>T</title>",
///         "<link rel=\"stylesheet\" href=\"/a.css\" /></head>",
///         "<body><h1>Hello</h1><script>alert(1)</script></body>",
///     )
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
	head: Element,
	body: Element,
	/// Page title; omitted when empty.
	pub title: String,
	/// Favicon URL; omitted when empty.
	pub favicon: String,
	/// Content of the keywords meta tag; omitted when empty.
	pub keywords: String,
	/// Content of the description meta tag; omitted when empty.
	pub description: String,
	/// External scripts, appended to the body.
	pub script_urls: Vec<String>,
	/// External stylesheets, appended to the head.
	pub style_urls: Vec<String>,
	/// Inline scripts, appended to the body after the external ones.
	pub scripts: Vec<String>,
	/// Inline styles, appended to the head after the external ones.
	pub styles: Vec<String>,
	options: DocumentOptions,
}

impl Default for Document {
	fn default() -> Self {
		Self::new()
	}
}

impl Document {
	/// Creates an empty document with default options.
	pub fn new() -> Self {
		Self::with_options(DocumentOptions::default())
	}

	/// Creates an empty document with custom options.
	pub fn with_options(options: DocumentOptions) -> Self {
		Self {
			head: Element::new("head"),
			body: Element::new("body"),
			title: String::new(),
			favicon: String::new(),
			keywords: String::new(),
			description: String::new(),
			script_urls: Vec::new(),
			style_urls: Vec::new(),
			scripts: Vec::new(),
			styles: Vec::new(),
			options,
		}
	}

	/// Sets the title.
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.set_title(title);
		self
	}

	/// Sets the favicon URL.
	pub fn favicon(mut self, favicon: impl Into<String>) -> Self {
		self.set_favicon(favicon);
		self
	}

	/// Sets the keywords meta content.
	pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
		self.set_keywords(keywords);
		self
	}

	/// Sets the description meta content.
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.set_description(description);
		self
	}

	/// Adds an inline script.
	pub fn script(mut self, script: impl Into<String>) -> Self {
		self.add_script(script);
		self
	}

	/// Adds inline scripts, skipping empty ones.
	pub fn scripts(mut self, scripts: impl IntoIterator<Item = impl Into<String>>) -> Self {
		for script in scripts {
			self.add_script(script);
		}
		self
	}

	/// Adds an external script URL.
	pub fn script_url(mut self, url: impl Into<String>) -> Self {
		self.add_script_url(url);
		self
	}

	/// Adds external script URLs, skipping empty ones.
	pub fn script_urls(mut self, urls: impl IntoIterator<Item = impl Into<String>>) -> Self {
		for url in urls {
			self.add_script_url(url);
		}
		self
	}

	/// Adds an inline style.
	pub fn style(mut self, style: impl Into<String>) -> Self {
		self.add_style(style);
		self
	}

	/// Adds inline styles, skipping empty ones.
	pub fn styles(mut self, styles: impl IntoIterator<Item = impl Into<String>>) -> Self {
		for style in styles {
			self.add_style(style);
		}
		self
	}

	/// Adds an external stylesheet URL.
	pub fn style_url(mut self, url: impl Into<String>) -> Self {
		self.add_style_url(url);
		self
	}

	/// Adds external stylesheet URLs, skipping empty ones.
	pub fn style_urls(mut self, urls: impl IntoIterator<Item = impl Into<String>>) -> Self {
		for url in urls {
			self.add_style_url(url);
		}
		self
	}

	/// Appends a node to the body.
	pub fn child(mut self, child: impl IntoNode) -> Self {
		self.add_child(child);
		self
	}

	/// Sets the title in place.
	pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
		self.title = title.into();
		self
	}

	/// Sets the favicon URL in place.
	pub fn set_favicon(&mut self, favicon: impl Into<String>) -> &mut Self {
		self.favicon = favicon.into();
		self
	}

	/// Sets the keywords meta content in place.
	pub fn set_keywords(&mut self, keywords: impl Into<String>) -> &mut Self {
		self.keywords = keywords.into();
		self
	}

	/// Sets the description meta content in place.
	pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
		self.description = description.into();
		self
	}

	/// Adds an inline script in place. Empty scripts are ignored.
	pub fn add_script(&mut self, script: impl Into<String>) -> &mut Self {
		push_non_empty(&mut self.scripts, script.into());
		self
	}

	/// Adds an external script URL in place. Empty URLs are ignored.
	pub fn add_script_url(&mut self, url: impl Into<String>) -> &mut Self {
		push_non_empty(&mut self.script_urls, url.into());
		self
	}

	/// Adds an inline style in place. Empty styles are ignored.
	pub fn add_style(&mut self, style: impl Into<String>) -> &mut Self {
		push_non_empty(&mut self.styles, style.into());
		self
	}

	/// Adds an external stylesheet URL in place. Empty URLs are ignored.
	pub fn add_style_url(&mut self, url: impl Into<String>) -> &mut Self {
		push_non_empty(&mut self.style_urls, url.into());
		self
	}

	/// Appends a node to the body in place.
	pub fn add_child(&mut self, child: impl IntoNode) -> &mut Self {
		self.body.add_child(child);
		self
	}

	/// Returns the charset, always [`CHARSET`].
	pub fn charset(&self) -> &'static str {
		CHARSET
	}

	/// Returns the caller-built head, without the generated metadata.
	pub fn head(&self) -> &Element {
		&self.head
	}

	/// Returns the caller-built head for in-place edits.
	pub fn head_mut(&mut self) -> &mut Element {
		&mut self.head
	}

	/// Returns the caller-built body, without the generated script tags.
	pub fn body(&self) -> &Element {
		&self.body
	}

	/// Returns the caller-built body for in-place edits.
	pub fn body_mut(&mut self) -> &mut Element {
		&mut self.body
	}

	/// Returns the rendering options.
	pub fn options(&self) -> &DocumentOptions {
		&self.options
	}

	/// Renders the page to an HTML string.
	pub fn render(&self) -> String {
		self.to_node().render_to_string()
	}

	/// Assembles the page tree: the doctype followed by head and body.
	///
	/// The head receives, in order: the charset meta, title, favicon link,
	/// keywords and description metas, stylesheet links, then inline styles.
	/// The body receives its own children, script tags for the script URLs,
	/// then inline scripts. There is no `<html>` wrapper.
	pub fn to_node(&self) -> Node {
		let compatibility = self.options.compatibility;
		let legacy = compatibility.is_legacy();
		let mut head = self.head.clone();
		let mut body = self.body.clone();

		head.add_child(meta().attr("charset", CHARSET));

		if !self.title.is_empty() {
			let title = if legacy {
				Node::raw(self.title.clone())
			} else {
				Node::text(self.title.clone())
			};
			head.add_child(Element::new("title").child(title));
		}

		if !self.favicon.is_empty() {
			head.add_child(favicon(self.favicon.clone()));
		}

		if !self.keywords.is_empty() {
			head.add_child(
				meta()
					.attr("name", "keywords")
					.attr("content", self.keywords.clone()),
			);
		}

		if !self.description.is_empty() {
			let name = if legacy { "keywords" } else { "description" };
			head.add_child(
				meta()
					.attr("name", name)
					.attr("content", self.description.clone()),
			);
		}

		for url in &self.style_urls {
			head.add_child(stylesheet(url.clone()));
			if legacy {
				if is_absolute_url(url) {
					tracing::debug!(%url, "legacy absolute stylesheet URL linked twice");
					head.add_child(stylesheet(url.clone()));
				} else {
					tracing::debug!(%url, "legacy relative stylesheet URL echoed as raw text");
					head.add_child(Node::raw(url.clone()));
				}
			}
		}

		for style in &self.styles {
			if is_preformed(style, "style") {
				head.add_child(Node::raw(style.clone()));
			} else {
				head.add_child(inline_style(style.clone()));
			}
		}

		for url in &self.script_urls {
			if legacy && !is_absolute_url(url) {
				tracing::debug!(%url, "legacy relative script URL inserted as raw text");
				body.add_child(Node::raw(url.clone()));
			} else {
				body.add_child(external_script(url.clone()));
			}
		}

		for script in &self.scripts {
			if is_preformed(script, "script") {
				body.add_child(Node::raw(script.clone()));
			} else {
				body.add_child(inline_script(script.clone()));
			}
		}

		tracing::trace!(
			?compatibility,
			head_nodes = head.child_nodes().len(),
			body_nodes = body.child_nodes().len(),
			"assembled document"
		);

		Node::fragment([Node::raw(DOCTYPE), head.into_node(), body.into_node()])
	}
}

impl fmt::Display for Document {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}

fn push_non_empty(list: &mut Vec<String>, value: String) {
	if !value.is_empty() {
		list.push(value);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_empty_document() {
		assert_eq!(
			Document::new().render(),
			"<!DOCTYPE html><head><meta charset=\"utf-8\" /></head><body></body>"
		);
	}

	#[rstest]
	fn test_render_does_not_mutate() {
		let doc = Document::new().title("T").script("a()").style_url("/a.css");
		let before = doc.clone();

		let first = doc.render();
		let second = doc.render();

		assert_eq!(first, second);
		assert_eq!(doc, before);
		assert!(doc.head().child_nodes().is_empty());
		assert!(doc.body().child_nodes().is_empty());
	}

	#[rstest]
	fn test_mutators_skip_empty_strings() {
		let doc = Document::new()
			.script("")
			.scripts(["a()", "", "b()"])
			.script_url("")
			.script_urls(["", "/x.js"])
			.style("")
			.styles(["", "p{}"])
			.style_url("")
			.style_urls(["/a.css", ""]);

		assert_eq!(doc.scripts, ["a()", "b()"]);
		assert_eq!(doc.script_urls, ["/x.js"]);
		assert_eq!(doc.styles, ["p{}"]);
		assert_eq!(doc.style_urls, ["/a.css"]);
	}

	#[rstest]
	fn test_child_goes_to_body() {
		let mut doc = Document::new();
		doc.add_child(Element::new("main").id("app"));
		assert_eq!(doc.body().child_nodes().len(), 1);
		assert!(doc.render().contains("<body><main id=\"app\"></main></body>"));
	}

	#[rstest]
	fn test_head_mut_children_precede_generated_tags() {
		let mut doc = Document::new().title("T");
		doc.head_mut()
			.add_child(meta().attr("name", "viewport").attr("content", "width=device-width"));
		let html = doc.render();
		assert!(html.contains(
			"<head><meta name=\"viewport\" content=\"width=device-width\" /><meta charset=\"utf-8\" />"
		));
	}

	#[rstest]
	fn test_charset_is_fixed() {
		assert_eq!(Document::new().charset(), "utf-8");
		assert_eq!(Document::new().charset(), CHARSET);
	}

	#[rstest]
	fn test_set_keywords_and_description_in_place() {
		let mut doc = Document::new();
		doc.set_keywords("rust, html").set_description("Pages");

		assert_eq!(doc, Document::new().keywords("rust, html").description("Pages"));
		let html = doc.render();
		assert!(html.contains(r#"<meta name="keywords" content="rust, html" />"#));
		assert!(html.contains(r#"<meta name="description" content="Pages" />"#));
	}

	#[rstest]
	fn test_display_matches_render() {
		let doc = Document::new().title("Hello");
		assert_eq!(doc.to_string(), doc.render());
	}

	#[rstest]
	fn test_to_node_is_fragment_without_html_wrapper() {
		let node = Document::new().to_node();
		let Node::Fragment(parts) = &node else {
			panic!("expected a fragment, got {node:?}");
		};
		assert_eq!(parts.len(), 3);
		assert_eq!(parts[0], Node::raw(DOCTYPE));
		assert_eq!(DOCTYPE, "<!DOCTYPE html>");
		assert_eq!(parts[1].as_element().map(Element::tag_name), Some("head"));
		assert_eq!(parts[2].as_element().map(Element::tag_name), Some("body"));
	}
}
