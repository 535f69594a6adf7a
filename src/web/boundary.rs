// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error boundary that swaps its subtree for a "not found" page when a code bundle fails to load.

use super::failure::{BOUNDARY_LOG_TAG, FailureInfo, FailureLog, FailureLogger, LoadFailure, default_failure_logger};
use super::pages::errors::loadable::{FallbackPageContent, LoadableComponentErrorBoundaryPage};
use super::pages::utils::apply_status_override;
use crate::i18n::Intl;
use leptos::error::{Error, ErrorId, Errors};
use leptos::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BoundaryState {
	#[default]
	Clear,
	Tripped(LoadFailure),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryOutcome {
	Children,
	Fallback,
}

impl BoundaryState {
	/// Records a failure from the subtree and logs it. A later failure replaces an earlier one.
	pub fn capture(&mut self, failure: LoadFailure, info: &FailureInfo, log: &dyn FailureLog) {
		log.error(&failure, BOUNDARY_LOG_TAG, info);
		*self = BoundaryState::Tripped(failure);
	}

	pub fn failure(&self) -> Option<&LoadFailure> {
		match self {
			BoundaryState::Clear => None,
			BoundaryState::Tripped(failure) => Some(failure),
		}
	}

	pub fn outcome(&self) -> BoundaryOutcome {
		match self.failure() {
			Some(failure) if failure.is_chunk_load() => BoundaryOutcome::Fallback,
			_ => BoundaryOutcome::Children,
		}
	}
}

/// Per-mount boundary storage. Kept out of the reactive graph so the error boundary's render effect never
/// subscribes to the writes made while handling an error.
#[derive(Clone, Copy)]
struct BoundaryHandle {
	state: StoredValue<BoundaryState>,
	seen: StoredValue<HashSet<ErrorId>>,
	logger: StoredValue<FailureLogger>,
}

impl BoundaryHandle {
	fn new(logger: FailureLogger) -> Self {
		Self {
			state: StoredValue::new(BoundaryState::Clear),
			seen: StoredValue::new(HashSet::new()),
			logger: StoredValue::new(logger),
		}
	}

	/// Captures every error the subtree threw that hasn't been captured yet.
	/// Chunk load failures go last so they decide the outcome when several arrive at once.
	fn capture_thrown(&self, errors: &Errors) {
		let mut failures = Vec::new();
		self.seen.update_value(|seen| {
			for (id, error) in errors.iter() {
				if seen.insert(id.clone()) {
					failures.push((failure_from_thrown(error), FailureInfo::with_error_id(id.to_string())));
				}
			}
		});
		failures.sort_by_key(|(failure, _)| failure.is_chunk_load());

		let logger = self.logger.get_value();
		for (failure, info) in failures {
			self.state
				.update_value(|state| state.capture(failure, &info, logger.as_ref()));
		}
	}

	fn outcome(&self) -> BoundaryOutcome {
		self.state.with_value(BoundaryState::outcome)
	}
}

fn failure_from_thrown(error: &Error) -> LoadFailure {
	match error.downcast_ref::<LoadFailure>() {
		Some(failure) => failure.clone(),
		None => LoadFailure::new("Error", error.to_string()),
	}
}

#[component]
pub fn LoadableComponentErrorBoundary(
	#[prop(into)] scrolling_disabled: Signal<bool>,
	intl: Intl,
	#[prop(optional)] logger: Option<FailureLogger>,
	children: ChildrenFn,
) -> impl IntoView {
	let handle = BoundaryHandle::new(logger.unwrap_or_else(default_failure_logger));
	let fallback_children = children.clone();

	let fallback = move |errors: ArcRwSignal<Errors>| {
		errors.with_untracked(|errors| handle.capture_thrown(errors));

		match handle.outcome() {
			BoundaryOutcome::Fallback => {
				let content = FallbackPageContent::new(scrolling_disabled.get_untracked(), &intl);
				apply_status_override(content.status_override());

				let intl = intl.clone();
				(move || {
					let content = FallbackPageContent::new(scrolling_disabled.get(), &intl);
					view! { <LoadableComponentErrorBoundaryPage content /> }
				})
				.into_any()
			}
			BoundaryOutcome::Children => fallback_children().into_any(),
		}
	};

	view! {
		<ErrorBoundary fallback>
			{children()}
		</ErrorBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::{Arc, Mutex};

	#[derive(Default)]
	struct RecordingLog {
		entries: Mutex<Vec<(LoadFailure, String, FailureInfo)>>,
	}

	impl FailureLog for RecordingLog {
		fn error(&self, failure: &LoadFailure, tag: &str, info: &FailureInfo) {
			self.entries
				.lock()
				.unwrap()
				.push((failure.clone(), tag.to_string(), info.clone()));
		}
	}

	#[test]
	fn clear_boundary_renders_children() {
		let state = BoundaryState::default();
		assert_eq!(state, BoundaryState::Clear);
		assert_eq!(state.outcome(), BoundaryOutcome::Children);
		assert!(state.failure().is_none());
	}

	#[test]
	fn chunk_load_failure_shows_fallback() {
		let log = RecordingLog::default();
		let mut state = BoundaryState::default();
		state.capture(LoadFailure::chunk_load("Loading chunk 12 failed."), &FailureInfo::default(), &log);
		assert_eq!(state.outcome(), BoundaryOutcome::Fallback);
	}

	#[test]
	fn other_failures_keep_children() {
		let log = RecordingLog::default();
		for name in ["TypeError", "Error", "SyntaxError", "chunkloaderror", ""] {
			let mut state = BoundaryState::default();
			state.capture(LoadFailure::new(name, "boom"), &FailureInfo::default(), &log);
			assert!(state.failure().is_some());
			assert_eq!(state.outcome(), BoundaryOutcome::Children, "{name}");
		}
	}

	#[test]
	fn logs_once_per_capture_with_failure_unmodified() {
		let log = RecordingLog::default();
		let mut state = BoundaryState::default();
		let failure = LoadFailure::chunk_load("Loading chunk 1 failed.");
		let info = FailureInfo::with_error_id("7");
		state.capture(failure.clone(), &info, &log);

		let entries = log.entries.lock().unwrap();
		assert_eq!(entries.len(), 1);
		assert_eq!(entries[0], (failure, BOUNDARY_LOG_TAG.to_string(), info));
	}

	#[test]
	fn later_failure_replaces_earlier_one() {
		let log = RecordingLog::default();
		let mut state = BoundaryState::default();
		state.capture(LoadFailure::new("TypeError", "first"), &FailureInfo::default(), &log);
		assert_eq!(state.outcome(), BoundaryOutcome::Children);

		state.capture(LoadFailure::chunk_load("second"), &FailureInfo::default(), &log);
		assert_eq!(state.outcome(), BoundaryOutcome::Fallback);
		assert_eq!(state.failure().map(|failure| failure.message.as_str()), Some("second"));
		assert_eq!(log.entries.lock().unwrap().len(), 2);
	}

	#[test]
	fn thrown_load_failures_keep_their_name() {
		let thrown = Error::from(LoadFailure::chunk_load("Loading chunk 4 failed."));
		assert_eq!(failure_from_thrown(&thrown), LoadFailure::chunk_load("Loading chunk 4 failed."));

		let thrown = Error::from(std::fmt::Error);
		let failure = failure_from_thrown(&thrown);
		assert_eq!(failure.name, "Error");
		assert!(!failure.is_chunk_load());
	}

	#[test]
	fn each_thrown_error_is_captured_once() {
		let log = Arc::new(RecordingLog::default());
		let handle = BoundaryHandle::new(log.clone());

		let mut errors = Errors::default();
		errors.insert(ErrorId::from(1), LoadFailure::new("TypeError", "x is undefined"));
		handle.capture_thrown(&errors);
		handle.capture_thrown(&errors);
		assert_eq!(log.entries.lock().unwrap().len(), 1);
		assert_eq!(handle.outcome(), BoundaryOutcome::Children);

		errors.insert(ErrorId::from(2), LoadFailure::chunk_load("Loading chunk 9 failed."));
		handle.capture_thrown(&errors);
		assert_eq!(log.entries.lock().unwrap().len(), 2);
		assert_eq!(handle.outcome(), BoundaryOutcome::Fallback);
	}

	#[test]
	fn chunk_failure_wins_when_thrown_together_with_others() {
		let log = Arc::new(RecordingLog::default());
		let handle = BoundaryHandle::new(log.clone());

		let mut errors = Errors::default();
		errors.insert(ErrorId::from(1), LoadFailure::chunk_load("Loading chunk 2 failed."));
		errors.insert(ErrorId::from(2), LoadFailure::new("TypeError", "a"));
		errors.insert(ErrorId::from(3), LoadFailure::new("RangeError", "b"));
		handle.capture_thrown(&errors);

		assert_eq!(log.entries.lock().unwrap().len(), 3);
		assert_eq!(handle.outcome(), BoundaryOutcome::Fallback);
	}
}
