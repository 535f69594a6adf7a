// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::errors::loadable::StatusOverride;

/// Hands a page's status code to the server response being rendered.
/// Does nothing when rendering in the browser.
#[cfg(feature = "ssr")]
pub fn apply_status_override(status: Option<StatusOverride>) {
	use leptos::prelude::use_context;
	use leptos_axum::ResponseOptions;

	let (Some(status), Some(response)) = (status, use_context::<ResponseOptions>()) else {
		return;
	};
	response.set_status(status.into());
}

#[cfg(not(feature = "ssr"))]
pub fn apply_status_override(_status: Option<StatusOverride>) {}
