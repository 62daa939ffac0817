#![doc(html_root_url = "https://docs.rs/domlet/0.1.0")]
#![warn(clippy::pedantic)]

//! Thin helpers over the browser's document and network objects: create and
//! update [***Element***](https://developer.mozilla.org/en-US/docs/Web/API/Element)s,
//! manage attributes and event listeners, splice
//! [***childNodes***](https://developer.mozilla.org/en-US/docs/Web/API/Node/childNodes),
//! match selectors and issue a plain GET.
//!
//! Every helper is a direct delegation to the matching platform call. Nodes
//! stay owned by their document; the only state this crate keeps are the
//! [`wasm_bindgen::closure::Closure`]s backing attached listeners and
//! in-flight requests, which are reference-counted and freed when the last
//! attachment (or the request) is done.
//!
//! Failures surface as the [`wasm_bindgen::JsValue`] the platform threw,
//! unchanged.

pub mod create;
pub mod events;
pub mod fetch;
pub mod query;
mod registry;
pub mod tree;

pub use create::{create, strip, update, Prop};
pub use events::{dispatch, listen, unlisten, Handler};
pub use fetch::get;
pub use query::{matches, query, query_all};
pub use tree::{append, empty, insert, remove, replace, wrap, Child};

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}
