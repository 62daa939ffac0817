use crate::events::Handler;
use core::cell::RefCell;
use hashbrown::{hash_map::Entry, HashMap};
use js_sys::Function;
use tracing::trace;
use wasm_bindgen::{closure::Closure, JsCast, UnwrapThrowExt};

thread_local! {
	static LISTENERS: RefCell<ListenerMap> = RefCell::new(ListenerMap::new());
}

/// Reference-counted store of the [`Closure`]s backing attached listeners.
///
/// One JS function is minted per [`Handler`], so detaching hands the browser
/// the same function object that was attached. The closure is freed once the
/// last attachment referencing it is released.
struct ListenerMap(HashMap<usize, (u32, Closure<dyn FnMut(web_sys::Event)>)>);

impl ListenerMap {
	fn new() -> Self {
		Self(HashMap::new())
	}

	fn acquire(&mut self, handler: &Handler) -> Function {
		let (count, closure) = match self.0.entry(handler.key()) {
			Entry::Occupied(occupied) => occupied.into_mut(),
			Entry::Vacant(vacant) => {
				let shared = handler.clone();
				trace!("Minting a listener closure.");
				vacant.insert((0, Closure::wrap(Box::new(move |event| shared.invoke(event)) as Box<dyn FnMut(web_sys::Event)>)))
			}
		};
		*count = count.checked_add(1).expect_throw("domlet: Too many attachments of the same `Handler`.");
		closure.as_ref().unchecked_ref::<Function>().clone()
	}

	fn peek(&self, handler: &Handler) -> Option<Function> {
		self.0.get(&handler.key()).map(|(_, closure)| closure.as_ref().unchecked_ref::<Function>().clone())
	}

	fn release(&mut self, handler: &Handler) {
		if let Entry::Occupied(mut occupied) = self.0.entry(handler.key()) {
			let (count, _) = occupied.get_mut();
			*count = count.saturating_sub(1);
			if *count == 0 {
				occupied.remove();
				trace!("Freed a listener closure.");
			}
		}
	}
}

pub(crate) fn acquire(handler: &Handler) -> Function {
	LISTENERS.with(|listeners| listeners.borrow_mut().acquire(handler))
}

pub(crate) fn peek(handler: &Handler) -> Option<Function> {
	LISTENERS.with(|listeners| listeners.borrow().peek(handler))
}

pub(crate) fn release(handler: &Handler) {
	LISTENERS.with(|listeners| listeners.borrow_mut().release(handler));
}
