use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::XmlHttpRequest;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn issues_a_request() {
	let request = domlet::get("/", |_| ()).unwrap();
	assert!(request.ready_state() >= XmlHttpRequest::OPENED);
}

#[wasm_bindgen_test]
fn malformed_urls_propagate() {
	assert!(domlet::get("http://[malformed", |_| ()).is_err());
}
