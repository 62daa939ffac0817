use crate::{
	events::{self, Handler},
	tree::{self, Child},
};
use core::borrow::Borrow;
use std::borrow::Cow;
use tracing::instrument;
use wasm_bindgen::{JsValue, UnwrapThrowExt};
use web_sys::{Document, Element};

/// One entry of an element update: an attribute or an event listener.
pub enum Prop<'a> {
	/// A plain or namespaced attribute. See [`update`] for the name syntax.
	Attr { name: &'a str, value: &'a str },
	/// An event listener, attached through [`events::listen`].
	Listener { event: &'a str, handler: Handler },
}

impl<'a> Prop<'a> {
	#[must_use]
	pub fn attr(name: &'a str, value: &'a str) -> Self {
		Self::Attr { name, value }
	}

	#[must_use]
	pub fn on(event: &'a str, handler: &Handler) -> Self {
		Self::Listener { event, handler: handler.clone() }
	}
}

/// Creates an element, applies `props` and appends `children`.
///
/// `spec` is a tag name, optionally followed by a single space and a
/// namespace URI for [***createElementNS***](https://developer.mozilla.org/en-US/docs/Web/API/Document/createElementNS):
///
/// - `"button"`
/// - `"svg http://www.w3.org/2000/svg"`
#[instrument(skip(props, children))]
pub fn create<'a>(spec: &str, props: impl IntoIterator<Item = Prop<'a>>, children: &[Child<'_>]) -> Result<Element, JsValue> {
	let document = document();
	let element = match split_namespaced(spec) {
		Some((name, namespace)) => document.create_element_ns(Some(namespace), name)?,
		None => document.create_element(spec)?,
	};
	update(&element, props)?;
	tree::append(element.as_ref(), children)?;
	Ok(element)
}

/// Applies `props` to an existing element.
///
/// Attribute name conventions:
///
/// - a name containing a space is split into local name and namespace URI
///   and set through [***setAttributeNS***](https://developer.mozilla.org/en-US/docs/Web/API/Element/setAttributeNS),
///   e.g. `"xlink:href http://www.w3.org/1999/xlink"`;
/// - `aria`/`data` shorthands gain their hyphen, `"arialabel"` →
///   `"aria-label"`, `"dataval"` → `"data-val"`.
pub fn update<'a>(element: &Element, props: impl IntoIterator<Item = Prop<'a>>) -> Result<(), JsValue> {
	for prop in props {
		match prop {
			Prop::Attr { name, value } => match split_namespaced(name) {
				Some((local, namespace)) => element.set_attribute_ns(Some(namespace), local, value)?,
				None => element.set_attribute(&expand_shorthand(name), value)?,
			},
			Prop::Listener { event, handler } => events::listen(element.as_ref(), event, &handler)?,
		}
	}
	Ok(())
}

/// Removes attributes from an element, accepting the same name syntax as
/// [`update`]. Listeners are removed through [`events::unlisten`] instead.
pub fn strip<N: Borrow<str>>(element: &Element, names: &[N]) -> Result<(), JsValue> {
	for name in names {
		match split_namespaced(name.borrow()) {
			Some((local, namespace)) => element.remove_attribute_ns(Some(namespace), local)?,
			None => element.remove_attribute(&expand_shorthand(name.borrow()))?,
		}
	}
	Ok(())
}

pub(crate) fn document() -> Document {
	web_sys::window().expect_throw("domlet: No `Window` in this context.").document().expect_throw("domlet: The window has no `Document`.")
}

fn split_namespaced(spec: &str) -> Option<(&str, &str)> {
	spec.split_once(' ')
}

fn expand_shorthand(name: &str) -> Cow<'_, str> {
	for prefix in &["aria", "data"] {
		if let Some(rest) = name.strip_prefix(prefix) {
			if !rest.is_empty() && !rest.starts_with('-') {
				return Cow::Owned(format!("{}-{}", prefix, rest));
			}
		}
	}
	Cow::Borrowed(name)
}
