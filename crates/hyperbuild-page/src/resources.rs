//! Script and style resource handling.

use hyperbuild_tree::{Element, Node};

/// Returns `true` if `url` looks absolute or protocol-relative.
///
/// Only the `http` and `//` prefixes are recognized, so `https://` URLs match
/// and `/static/app.js` does not.
pub fn is_absolute_url(url: &str) -> bool {
	url.starts_with("http") || url.starts_with("//")
}

/// Returns `true` if `snippet` already opens with a `<tag` marker.
///
/// Such snippets are inserted as raw markup instead of being wrapped again.
pub fn is_preformed(snippet: &str, tag: &str) -> bool {
	snippet
		.strip_prefix('<')
		.is_some_and(|rest| rest.starts_with(tag))
}

pub(crate) fn meta() -> Element {
	Element::new("meta")
}

pub(crate) fn favicon(href: String) -> Element {
	Element::new("link")
		.attr("href", href)
		.attr("rel", "icon")
		.attr("type", "image/x-icon")
}

pub(crate) fn stylesheet(href: String) -> Element {
	Element::new("link")
		.attr("rel", "stylesheet")
		.attr("href", href)
}

pub(crate) fn inline_style(css: String) -> Element {
	Element::new("style").child(Node::raw(css))
}

pub(crate) fn external_script(src: String) -> Element {
	Element::new("script").attr("src", src)
}

pub(crate) fn inline_script(js: String) -> Element {
	Element::new("script").child(Node::raw(js))
}
