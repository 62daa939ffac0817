use domlet::{create, strip, update, Child, Prop};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn plain_element() {
	let element = create("div", [], &[]).unwrap();
	assert_eq!(element.tag_name(), "DIV");
}

#[wasm_bindgen_test]
fn namespaced_element() {
	let element = create("svg http://www.w3.org/2000/svg", [], &[]).unwrap();
	assert_eq!(element.namespace_uri().as_deref(), Some("http://www.w3.org/2000/svg"));
	assert_eq!(element.tag_name(), "svg");
}

#[wasm_bindgen_test]
fn shorthand_attributes() {
	let element = create(
		"div",
		[Prop::attr("arialabel", "close"), Prop::attr("dataval", "7"), Prop::attr("class", "chip")],
		&[],
	)
	.unwrap();
	assert_eq!(element.get_attribute("aria-label").as_deref(), Some("close"));
	assert_eq!(element.get_attribute("data-val").as_deref(), Some("7"));
	assert_eq!(element.get_attribute("class").as_deref(), Some("chip"));
}

#[wasm_bindgen_test]
fn namespaced_attribute() {
	let element = create(
		"svg http://www.w3.org/2000/svg",
		[Prop::attr("xlink:href http://www.w3.org/1999/xlink", "#icon")],
		&[],
	)
	.unwrap();
	assert_eq!(element.get_attribute_ns(Some("http://www.w3.org/1999/xlink"), "href").as_deref(), Some("#icon"));
}

#[wasm_bindgen_test]
fn children() {
	let child = create("span", [], &[]).unwrap();
	let element = create("p", [], &[Child::Node(child.as_ref()), Child::Text("trailing text")]).unwrap();
	assert_eq!(element.child_nodes().length(), 2);
	assert_eq!(element.last_child().unwrap().text_content().as_deref(), Some("trailing text"));
}

#[wasm_bindgen_test]
fn update_then_strip() {
	let element = create("div", [], &[]).unwrap();
	update(&element, [Prop::attr("id", "probe"), Prop::attr("arialabel", "probe")]).unwrap();
	assert!(element.has_attribute("id"));
	assert!(element.has_attribute("aria-label"));

	strip(&element, &["id", "arialabel"]).unwrap();
	assert!(!element.has_attribute("id"));
	assert!(!element.has_attribute("aria-label"));
}

#[wasm_bindgen_test]
fn strip_namespaced_attribute() {
	let element = create(
		"svg http://www.w3.org/2000/svg",
		[Prop::attr("xlink:href http://www.w3.org/1999/xlink", "#icon")],
		&[],
	)
	.unwrap();
	strip(&element, &["href http://www.w3.org/1999/xlink"]).unwrap();
	assert_eq!(element.get_attribute_ns(Some("http://www.w3.org/1999/xlink"), "href"), None);
}

#[wasm_bindgen_test]
fn invalid_tag_name_propagates() {
	assert!(create("<div>", [], &[]).is_err());
}
