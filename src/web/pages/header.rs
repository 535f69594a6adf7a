// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::ui_state::use_ui_state;
use leptos::prelude::*;

const MOBILE_MENU_ID: &str = "Topbar.mobileMenu";

#[component]
pub fn Topbar() -> impl IntoView {
	let ui_state = use_ui_state();
	let (menu_open, set_menu_open) = signal(false);

	// The open menu covers the page, so the page underneath must not scroll.
	let toggle_menu = move |_| {
		let open = !menu_open.get_untracked();
		set_menu_open.set(open);
		ui_state.manage_disable_scrolling(MOBILE_MENU_ID, open);
	};

	view! {
		<div id="topbar">
			<a id="header" href="/">
				<h1 id="header_site_name">"Loadable Boundary"</h1>
			</a>
			<button id="topbar_menu_button" on:click=toggle_menu>"Menu"</button>
			<Show when=move || menu_open.get()>
				<nav id="topbar_mobile_menu">
					<a href="/">"Home"</a>
				</nav>
			</Show>
		</div>
	}
}
