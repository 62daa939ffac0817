use core::cell::{Cell, RefCell};
use hashbrown::HashMap;
use tracing::{instrument, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::XmlHttpRequest;

thread_local! {
	static IN_FLIGHT: RefCell<HashMap<u32, Closure<dyn FnMut()>>> = RefCell::new(HashMap::new());
	static NEXT_REQUEST: Cell<u32> = Cell::new(0);
}

/// Issues an asynchronous GET for `url` and hands the response text to
/// `callback` once the request completes with status 200.
///
/// Responses with any other status, and responses without readable text, are
/// dropped with a warning. There is no retry, timeout or cancellation here;
/// the returned [***XMLHttpRequest***](https://developer.mozilla.org/en-US/docs/Web/API/XMLHttpRequest)
/// can be inspected or aborted by the caller.
#[instrument(skip(callback))]
pub fn get(url: &str, callback: impl FnOnce(String) + 'static) -> Result<XmlHttpRequest, JsValue> {
	let request = XmlHttpRequest::new()?;
	let id = NEXT_REQUEST.with(|next| {
		let id = next.get();
		next.set(id.wrapping_add(1));
		id
	});

	let watched = request.clone();
	let mut callback = Some(callback);
	let on_ready_state_change = Closure::wrap(Box::new(move || {
		if watched.ready_state() != XmlHttpRequest::DONE {
			return;
		}
		let status = watched.status().unwrap_or(0);
		if status == 200 {
			match watched.response_text() {
				Ok(Some(text)) => {
					if let Some(callback) = callback.take() {
						callback(text);
					}
				}
				Ok(None) => warn!("Completed request carried no response text. Dropping."),
				Err(error) => warn!("Could not read the response text: {:?}", error),
			}
		} else {
			warn!("Dropping response with status {}.", status);
		}
		IN_FLIGHT.with(|pending| drop(pending.borrow_mut().remove(&id)));
	}) as Box<dyn FnMut()>);

	request.set_onreadystatechange(Some(on_ready_state_change.as_ref().unchecked_ref()));
	request.open("GET", url)?;
	request.send()?;
	IN_FLIGHT.with(|pending| pending.borrow_mut().insert(id, on_ready_state_change));
	Ok(request)
}
