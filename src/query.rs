use wasm_bindgen::{JsCast, JsValue, UnwrapThrowExt};
use web_sys::Element;

/// Tests whether `element` itself matches `selector`.
///
/// Invalid selectors propagate as the platform's `SyntaxError`.
pub fn matches(element: &Element, selector: &str) -> Result<bool, JsValue> {
	element.matches(selector)
}

/// Returns the first descendant of `scope` matching `selector`.
pub fn query(scope: &Element, selector: &str) -> Result<Option<Element>, JsValue> {
	scope.query_selector(selector)
}

/// Collects every descendant of `scope` matching `selector`, in document
/// order.
pub fn query_all(scope: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
	let list = scope.query_selector_all(selector)?;
	Ok((0..list.length())
		.filter_map(|index| list.get(index))
		.map(|node| node.dyn_into::<Element>().expect_throw("domlet: `querySelectorAll` returned a non-element node."))
		.collect())
}
