//! The markup tree and its serializer.

use std::borrow::Cow;
use std::fmt;

use crate::element::Element;
use crate::util::html_escape;

/// A node in the markup tree.
///
/// Raw leaves and tagged elements are separate variants, so a node can never
/// carry both verbatim content and a tag name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	/// A tagged element.
	Element(Element),
	/// Content emitted verbatim, never escaped.
	///
	/// Used for `<!DOCTYPE html>`, pre-built snippets and text that is already
	/// escaped.
	Raw(Cow<'static, str>),
	/// Text content, HTML-escaped at render time.
	Text(Cow<'static, str>),
	/// A sequence of nodes with no wrapper markup.
	Fragment(Vec<Node>),
}

impl Node {
	/// Creates an element.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> Element {
		Element::new(tag)
	}

	/// Creates a raw leaf whose content is emitted unchanged.
	pub fn raw(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Raw(content.into())
	}

	/// Creates an escaped text leaf.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoNode>) -> Self {
		Self::Fragment(children.into_iter().map(IntoNode::into_node).collect())
	}

	/// Returns the element if this node is one.
	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Node::Element(el) => Some(el),
			_ => None,
		}
	}

	/// Renders the node to an HTML string.
	///
	/// Rendering borrows the tree immutably, so rendering an unmodified tree
	/// twice yields identical output.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}

	/// Appends the rendered node to `output`.
	pub fn render_into(&self, output: &mut String) {
		match self {
			Node::Element(el) => el.render_into(output),
			Node::Raw(content) => output.push_str(content),
			Node::Text(text) => output.push_str(&html_escape(text)),
			Node::Fragment(children) => {
				for child in children {
					child.render_into(output);
				}
			}
		}
	}
}

impl fmt::Display for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render_to_string())
	}
}

impl From<Element> for Node {
	fn from(el: Element) -> Self {
		Node::Element(el)
	}
}

/// Trait for types that can be converted into a [`Node`].
///
/// Strings convert to escaped [`Node::Text`]. Use [`Node::raw`] for markup
/// that must pass through untouched.
pub trait IntoNode {
	/// Converts self into a Node.
	fn into_node(self) -> Node;
}

impl IntoNode for Node {
	fn into_node(self) -> Node {
		self
	}
}

impl IntoNode for Element {
	fn into_node(self) -> Node {
		Node::Element(self)
	}
}

impl IntoNode for String {
	fn into_node(self) -> Node {
		Node::Text(Cow::Owned(self))
	}
}

impl IntoNode for &String {
	fn into_node(self) -> Node {
		Node::Text(Cow::Owned(self.clone()))
	}
}

impl IntoNode for &'static str {
	fn into_node(self) -> Node {
		Node::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoNode> IntoNode for Option<T> {
	fn into_node(self) -> Node {
		match self {
			Some(v) => v.into_node(),
			None => Node::Fragment(Vec::new()),
		}
	}
}

impl<T: IntoNode> IntoNode for Vec<T> {
	fn into_node(self) -> Node {
		Node::Fragment(self.into_iter().map(IntoNode::into_node).collect())
	}
}
