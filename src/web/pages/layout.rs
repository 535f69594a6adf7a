// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Page chrome shared by full-page views.

use leptos::prelude::*;
use leptos_meta::Title;

/// Root of a full page. Sets the document title and marks the page when scrolling should be suppressed.
#[component]
pub fn Page(title: String, #[prop(into)] scrolling_disabled: Signal<bool>, children: Children) -> impl IntoView {
	view! {
		<Title text=title />
		<div class="page" class:scrolling_disabled=move || scrolling_disabled.get()>
			{children()}
		</div>
	}
}

#[component]
pub fn LayoutSingleColumn(children: Children) -> impl IntoView {
	view! {
		<div class="layout_single_column">
			{children()}
		</div>
	}
}

#[component]
pub fn LayoutWrapperTopbar(children: Children) -> impl IntoView {
	view! {
		<div class="layout_wrapper_topbar">
			{children()}
		</div>
	}
}

#[component]
pub fn LayoutWrapperMain(children: Children) -> impl IntoView {
	view! {
		<main class="layout_wrapper_main">
			{children()}
		</main>
	}
}

#[component]
pub fn LayoutWrapperFooter(children: Children) -> impl IntoView {
	view! {
		<div class="layout_wrapper_footer">
			{children()}
		</div>
	}
}

#[component]
pub fn Footer() -> impl IntoView {
	view! {
		<footer id="footer">
			<a href="/">"Home"</a>
		</footer>
	}
}
