//! Escaping helpers and the void element table.
//!
//! Escaping happens only at render time. Stored attribute values and text
//! leaves keep exactly what the caller handed in.

use std::borrow::Cow;

/// Elements that have no closing tag and never render children.
///
/// The renderer consults this table for every element it emits.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

/// Returns `true` if `tag` names a void element.
///
/// The match is exact, so `"IMG"` is not void.
pub fn is_void_element(tag: &str) -> bool {
	VOID_ELEMENTS.contains(&tag)
}

/// Escapes HTML special characters in text content.
///
/// This function replaces the following characters:
/// - `&` → `&amp;`
/// - `<` → `&lt;`
/// - `>` → `&gt;`
/// - `"` → `&quot;`
/// - `'` → `&#x27;`
///
/// Returns a borrowed reference if no escaping is needed,
/// or an owned string if any characters were escaped.
pub fn html_escape(s: &str) -> Cow<'_, str> {
	escape_with(s, &['&', '<', '>', '"', '\''])
}

/// Escapes an attribute value for use inside double quotes.
///
/// Only `&`, `<`, `>` and `"` are replaced. Single quotes are left alone so
/// inline handlers such as `page('PAGE_ID')` keep their literal form.
pub fn escape_attribute(s: &str) -> Cow<'_, str> {
	escape_with(s, &['&', '<', '>', '"'])
}

fn escape_with<'a>(s: &'a str, special: &[char]) -> Cow<'a, str> {
	if !s.contains(special) {
		return Cow::Borrowed(s);
	}

	let mut escaped = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match c {
			c if !special.contains(&c) => escaped.push(c),
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}
