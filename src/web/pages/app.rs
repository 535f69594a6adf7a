// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::errors::not_found::NotFound;
use super::home::Home;
use crate::i18n::Intl;
use crate::web::boundary::LoadableComponentErrorBoundary;
use crate::web::ui_state::UiState;
use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let ui_state = UiState::new();
	provide_context(ui_state);

	// The server provides the configured catalog; the client falls back to the built-in one.
	let intl = use_context::<Intl>().unwrap_or_default();

	view! {
		<Stylesheet href="/pkg/loadable-boundary.css" />
		<Title text="Loadable Boundary" />

		<Router>
			<LoadableComponentErrorBoundary scrolling_disabled=ui_state.scrolling_disabled() intl>
				<Routes fallback=|| view! { <NotFound /> }>
					<Route path=path!("/") view=Home />
				</Routes>
			</LoadableComponentErrorBoundary>
		</Router>
	}
}
