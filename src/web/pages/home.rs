// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::header::Topbar;
use super::layout::{Footer, LayoutSingleColumn, LayoutWrapperFooter, LayoutWrapperMain, LayoutWrapperTopbar, Page};
use crate::web::ui_state::use_ui_state;
use leptos::prelude::*;

#[component]
pub fn Home() -> impl IntoView {
	let ui_state = use_ui_state();

	view! {
		<Page title=String::from("Loadable Boundary") scrolling_disabled=ui_state.scrolling_disabled()>
			<LayoutSingleColumn>
				<LayoutWrapperTopbar>
					<Topbar />
				</LayoutWrapperTopbar>
				<LayoutWrapperMain>
					<div id="home_page">
						<p>"Pages that fail to load their code bundle are replaced with a not found page."</p>
					</div>
				</LayoutWrapperMain>
				<LayoutWrapperFooter>
					<Footer />
				</LayoutWrapperFooter>
			</LayoutSingleColumn>
		</Page>
	}
}
