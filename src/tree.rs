use crate::create;
use wasm_bindgen::JsValue;
use web_sys::{Element, Node};

/// One child to splice into a parent: an existing node, or text that becomes
/// a fresh [***Text***](https://developer.mozilla.org/en-US/docs/Web/API/Text) node.
pub enum Child<'a> {
	Node(&'a Node),
	Text(&'a str),
}

impl<'a> From<&'a Node> for Child<'a> {
	fn from(node: &'a Node) -> Self {
		Self::Node(node)
	}
}

impl<'a> From<&'a Element> for Child<'a> {
	fn from(element: &'a Element) -> Self {
		Self::Node(element.as_ref())
	}
}

impl<'a> From<&'a str> for Child<'a> {
	fn from(text: &'a str) -> Self {
		Self::Text(text)
	}
}

/// Appends `children` to `parent` in order. Afterwards the last entry is
/// `parent`'s last child.
pub fn append(parent: &Node, children: &[Child<'_>]) -> Result<(), JsValue> {
	for child in children {
		match child {
			Child::Node(node) => {
				parent.append_child(node)?;
			}
			Child::Text(text) => {
				parent.append_child(create::document().create_text_node(text).as_ref())?;
			}
		}
	}
	Ok(())
}

/// Removes every child of `parent`, then appends `children`.
pub fn empty(parent: &Node, children: &[Child<'_>]) -> Result<(), JsValue> {
	while let Some(last) = parent.last_child() {
		parent.remove_child(&last)?;
	}
	append(parent, children)
}

/// Inserts `node` under `reference`'s parent, directly before `reference`.
pub fn insert(node: &Node, reference: &Node) -> Result<(), JsValue> {
	let parent = reference.parent_node().ok_or_else(detached("insert before"))?;
	parent.insert_before(node, Some(reference))?;
	Ok(())
}

/// Detaches `node` from its parent, returning it. Nodes without a parent are
/// left alone.
pub fn remove(node: &Node) -> Result<Option<Node>, JsValue> {
	match node.parent_node() {
		Some(parent) => parent.remove_child(node).map(Some),
		None => Ok(None),
	}
}

/// Swaps `node` for `replacement` under `node`'s parent.
pub fn replace(node: &Node, replacement: &Node) -> Result<(), JsValue> {
	let parent = node.parent_node().ok_or_else(detached("replace"))?;
	parent.replace_child(replacement, node)?;
	Ok(())
}

/// Inserts `wrapper` where `node` is, then moves `node` inside it.
pub fn wrap(node: &Node, wrapper: &Node) -> Result<(), JsValue> {
	let parent = node.parent_node().ok_or_else(detached("wrap"))?;
	parent.insert_before(wrapper, Some(node))?;
	wrapper.append_child(node)?;
	Ok(())
}

fn detached(operation: &str) -> impl '_ + Fn() -> JsValue {
	move || js_sys::Error::new(&format!("domlet: Cannot {} a node without a parent.", operation)).into()
}
