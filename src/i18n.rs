// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Message lookup for user-facing text.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub const LOADABLE_PAGE_TITLE: &str = "LoadableComponentErrorBoundaryPage.title";
pub const LOADABLE_PAGE_HEADING: &str = "LoadableComponentErrorBoundaryPage.heading";
pub const LOADABLE_PAGE_DESCRIPTION: &str = "LoadableComponentErrorBoundaryPage.description";

const DEFAULT_LOCALE: &str = "en";

const ENGLISH_MESSAGES: &[(&str, &str)] = &[
	(LOADABLE_PAGE_TITLE, "Page not found"),
	(LOADABLE_PAGE_HEADING, "Something went wrong loading this page"),
	(
		LOADABLE_PAGE_DESCRIPTION,
		"Part of the site couldn't be loaded. A new version may have been released in the meantime; reloading the page usually fixes this.",
	),
];

/// Resolves a message identifier to display text.
pub trait Translate {
	fn format_message(&self, id: &str) -> String;
}

/// A flat set of messages for a single locale.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageCatalog {
	locale: String,
	messages: HashMap<String, String>,
}

impl MessageCatalog {
	pub fn new(locale: impl Into<String>) -> Self {
		Self {
			locale: locale.into(),
			messages: HashMap::new(),
		}
	}

	/// The built-in English messages.
	pub fn english() -> Self {
		let mut catalog = Self::new(DEFAULT_LOCALE);
		for (id, text) in ENGLISH_MESSAGES {
			catalog.insert(*id, *text);
		}
		catalog
	}

	pub fn locale(&self) -> &str {
		&self.locale
	}

	pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
		self.messages.insert(id.into(), text.into());
	}

	/// Layers `other` on top of this catalog. Entries in `other` win, and its locale is taken.
	pub fn merge(&mut self, other: MessageCatalog) {
		self.locale = other.locale;
		self.messages.extend(other.messages);
	}

	pub fn get(&self, id: &str) -> Option<&str> {
		self.messages.get(id).map(String::as_str)
	}
}

impl Default for MessageCatalog {
	fn default() -> Self {
		Self::english()
	}
}

impl Translate for MessageCatalog {
	fn format_message(&self, id: &str) -> String {
		match self.get(id) {
			Some(text) => text.to_string(),
			None => {
				tracing::warn!(id, locale = %self.locale, "Missing translation");
				id.to_string()
			}
		}
	}
}

/// Shared translator handle passed to components and provided as context.
#[derive(Clone)]
pub struct Intl(Arc<dyn Translate + Send + Sync>);

impl Intl {
	pub fn new(translator: impl Translate + Send + Sync + 'static) -> Self {
		Self(Arc::new(translator))
	}
}

impl Default for Intl {
	fn default() -> Self {
		Self::new(MessageCatalog::english())
	}
}

impl Translate for Intl {
	fn format_message(&self, id: &str) -> String {
		self.0.format_message(id)
	}
}

impl fmt::Debug for Intl {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Intl")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn english_catalog_has_boundary_page_messages() {
		let catalog = MessageCatalog::english();
		for id in [LOADABLE_PAGE_TITLE, LOADABLE_PAGE_HEADING, LOADABLE_PAGE_DESCRIPTION] {
			assert!(catalog.get(id).is_some(), "missing {id}");
		}
		assert_eq!(catalog.locale(), "en");
	}

	#[test]
	fn unknown_id_resolves_to_itself() {
		let catalog = MessageCatalog::new("fi");
		assert_eq!(catalog.format_message("Nope.title"), "Nope.title");
	}

	#[test]
	fn merged_entries_override_builtins() {
		let mut catalog = MessageCatalog::english();
		let mut finnish = MessageCatalog::new("fi");
		finnish.insert(LOADABLE_PAGE_TITLE, "Sivua ei löytynyt");
		catalog.merge(finnish);

		assert_eq!(catalog.locale(), "fi");
		assert_eq!(catalog.format_message(LOADABLE_PAGE_TITLE), "Sivua ei löytynyt");
		assert_eq!(
			catalog.format_message(LOADABLE_PAGE_HEADING),
			"Something went wrong loading this page"
		);
	}

	#[test]
	fn intl_forwards_to_wrapped_translator() {
		let mut catalog = MessageCatalog::new("en");
		catalog.insert("a", "b");
		let intl = Intl::new(catalog);
		assert_eq!(intl.format_message("a"), "b");
	}
}
