//! Tagged element nodes.

use std::borrow::Cow;
use std::fmt;

use crate::node::{IntoNode, Node};
use crate::util::{escape_attribute, is_void_element};

/// Attribute name/value pair as stored on an [`Element`].
pub type Attribute = (Cow<'static, str>, Cow<'static, str>);

/// Represents a tagged element in the markup tree.
///
/// Builder methods (`attr`, `class`, `child`, ...) consume and return the
/// element so calls can be chained. The `set_*`/`add_*` methods do the same
/// work in place and return `&mut Self`.
///
/// # Example
///
/// ```
/// use hyperbuild_tree::Element;
///
/// let img = Element::new("img")
///     .attr("src", "/logo.png")
///     .attr("class", "one")
///     .class("two");
///
/// assert_eq!(
///     img.render_to_string(),
///     r#"<img src="/logo.png" class="one two" />"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
	/// The tag name (e.g., "div", "img"). Never validated.
	tag: Cow<'static, str>,
	/// Attributes in first-insertion order, names unique.
	attrs: Vec<Attribute>,
	/// Child nodes in append order.
	children: Vec<Node>,
}

impl Element {
	/// Creates a new element with the given tag name.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		Self {
			tag: tag.into(),
			attrs: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Sets an attribute, replacing the value of an existing one.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.set_attribute(name, value);
		self
	}

	/// Sets every attribute yielded by `attrs`, in iteration order.
	pub fn attrs<I, K, V>(mut self, attrs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<Cow<'static, str>>,
		V: Into<Cow<'static, str>>,
	{
		self.set_attributes(attrs);
		self
	}

	/// Appends class tokens that are not already present.
	pub fn class(mut self, tokens: impl AsRef<str>) -> Self {
		self.add_class(tokens);
		self
	}

	/// Sets the `id` attribute.
	pub fn id(mut self, value: impl Into<Cow<'static, str>>) -> Self {
		self.set_id(value);
		self
	}

	/// Sets the `onclick` attribute.
	pub fn on_click(self, script: impl Into<Cow<'static, str>>) -> Self {
		self.attr("onclick", script)
	}

	/// Adds a child node.
	pub fn child(mut self, child: impl IntoNode) -> Self {
		self.add_child(child);
		self
	}

	/// Adds multiple child nodes.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoNode>) -> Self {
		self.children
			.extend(children.into_iter().map(IntoNode::into_node));
		self
	}

	/// Inserts or overwrites an attribute in place.
	///
	/// A new name is appended after the existing attributes. An existing name
	/// keeps its position and only its value changes. Values are stored as
	/// given and escaped at render time.
	pub fn set_attribute(
		&mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> &mut Self {
		let name = name.into();
		let value = value.into();
		match self.attrs.iter_mut().find(|(existing, _)| *existing == name) {
			Some((_, slot)) => *slot = value,
			None => self.attrs.push((name, value)),
		}
		self
	}

	/// Applies [`set_attribute`](Self::set_attribute) for each pair.
	pub fn set_attributes<I, K, V>(&mut self, attrs: I) -> &mut Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<Cow<'static, str>>,
		V: Into<Cow<'static, str>>,
	{
		for (name, value) in attrs {
			self.set_attribute(name, value);
		}
		self
	}

	/// Merges class tokens into the `class` attribute.
	///
	/// `tokens` is split on whitespace, and each piece is appended only if no
	/// existing token equals it exactly (case-sensitive). The result is written
	/// back joined by single spaces. A blank argument leaves the element
	/// untouched.
	pub fn add_class(&mut self, tokens: impl AsRef<str>) -> &mut Self {
		let added: Vec<&str> = tokens.as_ref().split_whitespace().collect();
		if added.is_empty() {
			return self;
		}
		let merged = {
			let mut merged: Vec<&str> = self
				.attr_value("class")
				.map(|existing| existing.split_whitespace().collect())
				.unwrap_or_default();
			for token in added {
				if !merged.contains(&token) {
					merged.push(token);
				}
			}
			merged.join(" ")
		};
		self.set_attribute("class", merged)
	}

	/// Returns `true` if `token` is one of the `class` tokens.
	pub fn has_class(&self, token: &str) -> bool {
		self.attr_value("class")
			.is_some_and(|classes| classes.split_whitespace().any(|t| t == token))
	}

	/// Sets the `id` attribute in place.
	pub fn set_id(&mut self, value: impl Into<Cow<'static, str>>) -> &mut Self {
		self.set_attribute("id", value)
	}

	/// Appends a child node in place.
	///
	/// Children are owned, so an element can never contain one of its own
	/// ancestors.
	pub fn add_child(&mut self, child: impl IntoNode) -> &mut Self {
		self.children.push(child.into_node());
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the value of the named attribute.
	pub fn attr_value(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(existing, _)| existing == name)
			.map(|(_, value)| value.as_ref())
	}

	/// Returns the attributes in render order.
	pub fn attributes(&self) -> &[Attribute] {
		&self.attrs
	}

	/// Returns the child nodes.
	pub fn child_nodes(&self) -> &[Node] {
		&self.children
	}

	/// Returns whether this is a void element (no closing tag, no children).
	pub fn is_void(&self) -> bool {
		is_void_element(&self.tag)
	}

	/// Consumes the element and returns the children.
	pub fn into_children(self) -> Vec<Node> {
		self.children
	}

	/// Renders the element to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}

	/// Appends the rendered element to `output`.
	pub fn render_into(&self, output: &mut String) {
		output.push('<');
		output.push_str(&self.tag);

		for (name, value) in &self.attrs {
			output.push(' ');
			output.push_str(name);
			output.push_str("=\"");
			output.push_str(&escape_attribute(value));
			output.push('"');
		}

		if self.is_void() {
			if !self.children.is_empty() {
				tracing::debug!(
					tag = %self.tag,
					dropped = self.children.len(),
					"void element children are not rendered"
				);
			}
			output.push_str(" />");
			return;
		}

		output.push('>');
		for child in &self.children {
			child.render_into(output);
		}
		output.push_str("</");
		output.push_str(&self.tag);
		output.push('>');
	}
}

impl fmt::Display for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render_to_string())
	}
}
