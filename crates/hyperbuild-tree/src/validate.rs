//! Structural checks for markup trees.
//!
//! Rendering never fails: an empty tag name renders as `<></>` and children of
//! a void element are skipped. [`Element::validate`] and [`Node::validate`]
//! report those shapes up front for callers that would rather reject them.
//!
//! Paths are child indices from the validated root, e.g. `/1/0` is the first
//! child of the root's second child. The root itself is `/`.

use crate::element::Element;
use crate::node::Node;

/// Structural problems found by validation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
	#[error("element at {path} has an empty tag name")]
	EmptyTagName { path: String },

	#[error("void element <{tag}> at {path} has {count} child node(s) that will not be rendered")]
	VoidElementChildren {
		tag: String,
		path: String,
		count: usize,
	},
}

/// Result type for tree validation.
pub type TreeResult<T> = Result<T, TreeError>;

impl Element {
	/// Checks this element and all descendants.
	///
	/// Returns the first problem in document order.
	pub fn validate(&self) -> TreeResult<()> {
		validate_element(self, &mut Vec::new())
	}
}

impl Node {
	/// Checks this node and all descendants.
	pub fn validate(&self) -> TreeResult<()> {
		validate_node(self, &mut Vec::new())
	}
}

fn validate_node(node: &Node, path: &mut Vec<usize>) -> TreeResult<()> {
	match node {
		Node::Element(el) => validate_element(el, path),
		Node::Fragment(children) => validate_children(children, path),
		Node::Raw(_) | Node::Text(_) => Ok(()),
	}
}

fn validate_element(el: &Element, path: &mut Vec<usize>) -> TreeResult<()> {
	if el.tag_name().is_empty() {
		return Err(TreeError::EmptyTagName {
			path: format_path(path),
		});
	}

	let children = el.child_nodes();
	if el.is_void() && !children.is_empty() {
		return Err(TreeError::VoidElementChildren {
			tag: el.tag_name().to_string(),
			path: format_path(path),
			count: children.len(),
		});
	}

	validate_children(children, path)
}

fn validate_children(children: &[Node], path: &mut Vec<usize>) -> TreeResult<()> {
	for (index, child) in children.iter().enumerate() {
		path.push(index);
		validate_node(child, path)?;
		path.pop();
	}
	Ok(())
}

fn format_path(path: &[usize]) -> String {
	if path.is_empty() {
		return "/".to_string();
	}
	path.iter().map(|index| format!("/{index}")).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_valid_tree() {
		let el = Element::new("div")
			.child(Element::new("img").attr("src", "/a.png"))
			.child(Node::raw("<!-- note -->"));
		assert_eq!(el.validate(), Ok(()));
	}

	#[rstest]
	fn test_empty_tag_at_root() {
		assert_eq!(
			Element::new("").validate(),
			Err(TreeError::EmptyTagName {
				path: "/".to_string()
			})
		);
	}

	#[rstest]
	fn test_void_children_reports_nested_path() {
		let el = Element::new("div")
			.child("text")
			.child(Element::new("p").child(Element::new("br").child("x").child("y")));
		assert_eq!(
			el.validate(),
			Err(TreeError::VoidElementChildren {
				tag: "br".to_string(),
				path: "/1/0".to_string(),
				count: 2,
			})
		);
	}

	#[rstest]
	fn test_fragment_paths() {
		let node = Node::fragment([Node::raw("x"), Element::new("").into()]);
		let err = node.validate().unwrap_err();
		assert_eq!(err.to_string(), "element at /1 has an empty tag name");
	}

	#[rstest]
	fn test_validation_does_not_change_rendering() {
		let el = Element::new("br").child("dropped");
		assert!(el.validate().is_err());
		assert_eq!(el.render_to_string(), "<br />");
	}
}
