// © 2024 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> miette::Result<()> {
	use loadable_boundary::config::{load_message_catalog, parse_config};
	use loadable_boundary::i18n::Intl;
	use loadable_boundary::web::server::run_server;
	use std::sync::Arc;

	let config = parse_config("config.kdl").await?;
	tracing_subscriber::fmt().with_max_level(config.log_level).init();

	let catalog = load_message_catalog(&config).await?;
	let locale = catalog.locale().to_string();
	tracing::info!(%locale, "Loaded message catalog");

	run_server(Arc::new(config), Intl::new(catalog), locale).await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
	// The client is started through `hydrate` in the library.
}
