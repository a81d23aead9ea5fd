//! Reactive access to the scroll state.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use super::observer::{ScrollObserver, ScrollState, mount_scroll_observer};
use crate::config::ScrollConfig;
use crate::platform::BrowserViewport;

/// Tracks window scrolling for the lifetime of the calling component and
/// exposes the result as a signal.
pub fn use_scroll_state(config: ScrollConfig) -> ReadSignal<ScrollState> {
	let (state, set_state) = signal(ScrollState::default());
	let mounted: Rc<RefCell<Option<ScrollObserver>>> = Rc::new(RefCell::new(None));
	let cleanup_slot = StoredValue::new_local(mounted.clone());

	Effect::new(move |_| {
		if mounted.borrow().is_some() {
			return;
		}
		let Some(viewport) = BrowserViewport::current() else {
			return;
		};
		let observer =
			mount_scroll_observer(&viewport, &viewport, config, move |s| set_state.set(s));
		*mounted.borrow_mut() = Some(observer);
	});

	on_cleanup(move || {
		cleanup_slot.try_with_value(|slot| slot.borrow_mut().take());
	});

	state
}
