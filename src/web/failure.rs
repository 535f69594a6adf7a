// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Name carried by failures to fetch or evaluate a lazily loaded code bundle.
pub const CHUNK_LOAD_ERROR: &str = "ChunkLoadError";

/// Tag attached to every failure logged by the loadable component boundary.
pub const BOUNDARY_LOG_TAG: &str = "error-catched-in-loadable-component-error-boundary";

/// A failure raised while rendering or loading part of the page.
///
/// Views return `Err(LoadFailure)` to hand the failure to the nearest error boundary. `name` plays the role of a
/// browser `Error`'s name and is what the boundary matches on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadFailure {
	pub name: String,
	pub message: String,
}

impl LoadFailure {
	pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			message: message.into(),
		}
	}

	pub fn chunk_load(message: impl Into<String>) -> Self {
		Self::new(CHUNK_LOAD_ERROR, message)
	}

	pub fn is_chunk_load(&self) -> bool {
		self.name == CHUNK_LOAD_ERROR
	}
}

impl fmt::Display for LoadFailure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.message.is_empty() {
			f.write_str(&self.name)
		} else {
			write!(f, "{}: {}", self.name, self.message)
		}
	}
}

impl Error for LoadFailure {}

/// Extra diagnostics about a caught failure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FailureInfo {
	/// Id the error boundary assigned to the thrown error.
	pub error_id: Option<String>,
}

impl FailureInfo {
	pub fn with_error_id(error_id: impl Into<String>) -> Self {
		Self {
			error_id: Some(error_id.into()),
		}
	}
}

pub trait FailureLog {
	fn error(&self, failure: &LoadFailure, tag: &str, info: &FailureInfo);
}

/// Reports failures as `tracing` error events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingFailureLog;

impl FailureLog for TracingFailureLog {
	fn error(&self, failure: &LoadFailure, tag: &str, info: &FailureInfo) {
		tracing::error!(source = ?failure, tag, error_id = ?info.error_id, "{}", failure);
	}
}

pub type FailureLogger = Arc<dyn FailureLog + Send + Sync>;

pub fn default_failure_logger() -> FailureLogger {
	Arc::new(TracingFailureLog)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn recognizes_chunk_load_failures_by_name() {
		assert!(LoadFailure::chunk_load("Loading chunk 7 failed.").is_chunk_load());
		assert!(!LoadFailure::new("TypeError", "x is undefined").is_chunk_load());
		assert!(!LoadFailure::new("chunkloaderror", "").is_chunk_load());
	}

	#[test]
	fn display_includes_name_and_message() {
		assert_eq!(LoadFailure::new("TypeError", "bad").to_string(), "TypeError: bad");
		assert_eq!(LoadFailure::new("TypeError", "").to_string(), "TypeError");
	}
}
