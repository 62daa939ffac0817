use crate::registry;
use core::{
	cell::RefCell,
	fmt::{self, Debug},
};
use std::rc::Rc;
use tracing::{instrument, warn};
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit, EventTarget};

/// A cloneable handle around an event callback.
///
/// Clones share identity: a clone passed to [`unlisten`] detaches a listener
/// attached with any other clone of the same handler.
///
/// The callback runs with exclusive access to its captures. Re-entrant
/// dispatch to the same handler throws into JavaScript instead of aliasing.
#[derive(Clone)]
pub struct Handler(Rc<RefCell<dyn FnMut(web_sys::Event)>>);

impl Handler {
	#[must_use]
	pub fn new(callback: impl FnMut(web_sys::Event) + 'static) -> Self {
		Self(Rc::new(RefCell::new(callback)))
	}

	pub(crate) fn key(&self) -> usize {
		Rc::as_ptr(&self.0).cast::<()>() as usize
	}

	pub(crate) fn invoke(&self, event: web_sys::Event) {
		(self.0.borrow_mut())(event);
	}
}

impl Debug for Handler {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Handler").field(&self.key()).finish()
	}
}

/// Attaches `handler` to `target` for `event` via
/// [***addEventListener***](https://developer.mozilla.org/en-US/docs/Web/API/EventTarget/addEventListener).
///
/// The same handler may be attached to any number of targets and events; the
/// backing JS function is shared and reference-counted.
#[instrument(skip(target))]
pub fn listen(target: &EventTarget, event: &str, handler: &Handler) -> Result<(), JsValue> {
	let function = registry::acquire(handler);
	let added = target.add_event_listener_with_callback(event, &function);
	if added.is_err() {
		registry::release(handler);
	}
	added
}

/// Detaches a listener previously attached with [`listen`].
///
/// Handlers that were never attached (or have already been fully detached)
/// are ignored with a warning.
#[instrument(skip(target))]
pub fn unlisten(target: &EventTarget, event: &str, handler: &Handler) -> Result<(), JsValue> {
	match registry::peek(handler) {
		Some(function) => {
			target.remove_event_listener_with_callback(event, &function)?;
			registry::release(handler);
			Ok(())
		}
		None => {
			warn!("Tried to detach a listener that is not attached. Ignoring.");
			Ok(())
		}
	}
}

/// Dispatches a bubbling, cancelable
/// [***CustomEvent***](https://developer.mozilla.org/en-US/docs/Web/API/CustomEvent)
/// on `target`, carrying `detail` if one is given.
///
/// Returns `false` if a listener cancelled the event.
pub fn dispatch(target: &EventTarget, event: &str, detail: Option<&JsValue>) -> Result<bool, JsValue> {
	let mut init = CustomEventInit::new();
	init.bubbles(true).cancelable(true);
	if let Some(detail) = detail {
		init.detail(detail);
	}
	let event = CustomEvent::new_with_event_init_dict(event, &init)?;
	target.dispatch_event(event.as_ref())
}
