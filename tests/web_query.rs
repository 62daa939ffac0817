use domlet::{create, matches, query, query_all, Child, Prop};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

fn menu() -> web_sys::Element {
	let first = create("li", [Prop::attr("class", "active")], &[Child::Text("First")]).unwrap();
	let second = create("li", [], &[Child::Text("Second")]).unwrap();
	let third = create("li", [], &[Child::Text("Third")]).unwrap();
	create(
		"ul",
		[Prop::attr("class", "menu")],
		&[Child::Node(first.as_ref()), Child::Node(second.as_ref()), Child::Node(third.as_ref())],
	)
	.unwrap()
}

#[wasm_bindgen_test]
fn matches_the_element_itself() {
	let list = menu();
	assert!(matches(&list, "ul.menu").unwrap());
	assert!(!matches(&list, "ol").unwrap());
}

#[wasm_bindgen_test]
fn query_returns_the_first_match() {
	let list = menu();
	let active = query(&list, "li.active").unwrap().unwrap();
	assert_eq!(active.text_content().as_deref(), Some("First"));
	assert!(query(&list, "li.missing").unwrap().is_none());
}

#[wasm_bindgen_test]
fn query_all_collects_in_document_order() {
	let list = menu();
	let items = query_all(&list, "li").unwrap();
	assert_eq!(items.len(), 3);
	assert_eq!(items[0].text_content().as_deref(), Some("First"));
	assert_eq!(items[2].text_content().as_deref(), Some("Third"));
	assert!(query_all(&list, "li.missing").unwrap().is_empty());
}

#[wasm_bindgen_test]
fn invalid_selectors_propagate() {
	let list = menu();
	assert!(matches(&list, "[").is_err());
	assert!(query(&list, "[").is_err());
	assert!(query_all(&list, "[").is_err());
}
