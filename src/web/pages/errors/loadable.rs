// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::i18n::{LOADABLE_PAGE_DESCRIPTION, LOADABLE_PAGE_HEADING, LOADABLE_PAGE_TITLE, Translate};
use crate::web::pages::header::Topbar;
use crate::web::pages::layout::{
	Footer, LayoutSingleColumn, LayoutWrapperFooter, LayoutWrapperMain, LayoutWrapperTopbar, Page,
};
use leptos::prelude::*;

/// Status code a rendered page asks the server response to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusOverride {
	NotFound,
}

impl StatusOverride {
	pub fn code(self) -> u16 {
		match self {
			StatusOverride::NotFound => 404,
		}
	}
}

#[cfg(feature = "ssr")]
impl From<StatusOverride> for axum::http::StatusCode {
	fn from(status: StatusOverride) -> Self {
		match status {
			StatusOverride::NotFound => axum::http::StatusCode::NOT_FOUND,
		}
	}
}

/// Everything the chunk load error page shows, resolved up front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallbackPageContent {
	pub title: String,
	pub heading: String,
	pub description: String,
	pub scrolling_disabled: bool,
}

impl FallbackPageContent {
	pub fn new(scrolling_disabled: bool, intl: &dyn Translate) -> Self {
		Self {
			title: intl.format_message(LOADABLE_PAGE_TITLE),
			heading: intl.format_message(LOADABLE_PAGE_HEADING),
			description: intl.format_message(LOADABLE_PAGE_DESCRIPTION),
			scrolling_disabled,
		}
	}

	pub fn status_override(&self) -> Option<StatusOverride> {
		Some(StatusOverride::NotFound)
	}
}

#[component]
pub fn LoadableComponentErrorBoundaryPage(content: FallbackPageContent) -> impl IntoView {
	let FallbackPageContent {
		title,
		heading,
		description,
		scrolling_disabled,
	} = content;

	view! {
		<Page title scrolling_disabled>
			<LayoutSingleColumn>
				<LayoutWrapperTopbar>
					<Topbar />
				</LayoutWrapperTopbar>
				<LayoutWrapperMain>
					<div class="loadable_error_root">
						<div class="loadable_error_content">
							<div class="loadable_error_number">"404"</div>
							<h1 class="loadable_error_heading">{heading}</h1>
							<p class="loadable_error_description">{description}</p>
						</div>
					</div>
				</LayoutWrapperMain>
				<LayoutWrapperFooter>
					<Footer />
				</LayoutWrapperFooter>
			</LayoutSingleColumn>
		</Page>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::i18n::MessageCatalog;

	fn test_catalog() -> MessageCatalog {
		let mut catalog = MessageCatalog::new("en");
		catalog.insert(LOADABLE_PAGE_TITLE, "T");
		catalog.insert(LOADABLE_PAGE_HEADING, "H");
		catalog.insert(LOADABLE_PAGE_DESCRIPTION, "D");
		catalog
	}

	#[test]
	fn resolves_the_three_fixed_messages() {
		let content = FallbackPageContent::new(true, &test_catalog());
		assert_eq!(content.title, "T");
		assert_eq!(content.heading, "H");
		assert_eq!(content.description, "D");
		assert!(content.scrolling_disabled);
	}

	#[test]
	fn always_asks_for_not_found_status() {
		let content = FallbackPageContent::new(true, &test_catalog());
		assert_eq!(content.status_override(), Some(StatusOverride::NotFound));
		assert_eq!(StatusOverride::NotFound.code(), 404);
	}

	#[test]
	fn scroll_flag_changes_nothing_else() {
		let catalog = test_catalog();
		let locked = FallbackPageContent::new(true, &catalog);
		let unlocked = FallbackPageContent::new(false, &catalog);
		assert!(!unlocked.scrolling_disabled);
		assert_eq!(
			FallbackPageContent {
				scrolling_disabled: true,
				..unlocked
			},
			locked
		);
	}

	#[test]
	fn building_twice_gives_the_same_content() {
		let catalog = MessageCatalog::english();
		assert_eq!(FallbackPageContent::new(false, &catalog), FallbackPageContent::new(false, &catalog));
	}
}
