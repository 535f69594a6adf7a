// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
struct ScrollRequest {
	component_id: String,
	disable_scrolling: bool,
}

/// Outstanding requests from components (modals and the like) to lock page scrolling.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollRequests {
	requests: Vec<ScrollRequest>,
}

impl ScrollRequests {
	/// Sets the request for `component_id`, replacing any earlier one from the same component.
	pub fn manage(&mut self, component_id: &str, disable_scrolling: bool) {
		match self
			.requests
			.iter_mut()
			.find(|request| request.component_id == component_id)
		{
			Some(request) => request.disable_scrolling = disable_scrolling,
			None => self.requests.push(ScrollRequest {
				component_id: component_id.to_string(),
				disable_scrolling,
			}),
		}
	}

	pub fn is_scrolling_disabled(&self) -> bool {
		self.requests.iter().any(|request| request.disable_scrolling)
	}
}

/// Application-wide UI state, provided as context by the app root.
#[derive(Clone, Copy, Debug)]
pub struct UiState {
	scroll_requests: RwSignal<ScrollRequests>,
}

impl UiState {
	pub fn new() -> Self {
		Self {
			scroll_requests: RwSignal::new(ScrollRequests::default()),
		}
	}

	pub fn manage_disable_scrolling(&self, component_id: &str, disable_scrolling: bool) {
		self.scroll_requests
			.update(|requests| requests.manage(component_id, disable_scrolling));
	}

	pub fn is_scrolling_disabled(&self) -> bool {
		self.scroll_requests.with(ScrollRequests::is_scrolling_disabled)
	}

	pub fn scrolling_disabled(&self) -> Signal<bool> {
		let state = *self;
		Signal::derive(move || state.is_scrolling_disabled())
	}
}

impl Default for UiState {
	fn default() -> Self {
		Self::new()
	}
}

pub fn use_ui_state() -> UiState {
	use_context::<UiState>().unwrap_or_else(|| {
		tracing::warn!("UiState requested outside of the app root");
		UiState::new()
	})
}
