// © 2024 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::i18n::MessageCatalog;
use kdl::{KdlDocument, KdlNode};
use miette::{IntoDiagnostic, Result, bail, miette};
use std::path::PathBuf;
use tokio::fs::read_to_string;
use tracing::Level;

#[derive(Debug)]
pub struct ConfigData {
	pub log_level: Level,
	pub web: WebConfig,
	pub translations: Option<PathBuf>,
}

#[derive(Debug)]
pub struct WebConfig {
	pub bind_addr: String,
}

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	parse_config_document(&config_file_contents)
}

pub fn parse_config_document(contents: &str) -> Result<ConfigData> {
	let document: KdlDocument = contents.parse()?;

	let log_level = match document.get_arg("log_level") {
		Some(value) => {
			let Some(level) = value.as_string() else {
				bail!("log_level must be a string");
			};
			level
				.parse::<Level>()
				.map_err(|_| miette!("log_level \"{}\" is not a valid log level", level))?
		}
		None => Level::INFO,
	};

	let Some(web) = document.get("web").and_then(KdlNode::children) else {
		bail!("Missing web configuration block");
	};
	let bind_addr = web
		.get_arg("bind_addr")
		.and_then(|value| value.as_string())
		.ok_or_else(|| miette!("web.bind_addr is required and must be a string"))?
		.to_string();

	let translations = match document.get_arg("translations") {
		Some(value) => match value.as_string() {
			Some(path) => Some(PathBuf::from(path)),
			None => bail!("translations must be a path string"),
		},
		None => None,
	};

	Ok(ConfigData {
		log_level,
		web: WebConfig { bind_addr },
		translations,
	})
}

/// Builds the message catalog: built-in English, overridden by the configured translations file if there is one.
pub async fn load_message_catalog(config: &ConfigData) -> Result<MessageCatalog> {
	let mut catalog = MessageCatalog::english();
	if let Some(path) = &config.translations {
		let contents = read_to_string(path).await.into_diagnostic()?;
		catalog.merge(parse_translations(&contents)?);
	}
	Ok(catalog)
}

pub fn parse_translations(contents: &str) -> Result<MessageCatalog> {
	let document: KdlDocument = contents.parse()?;

	let locale = document
		.get_arg("locale")
		.and_then(|value| value.as_string())
		.unwrap_or("en");
	let mut catalog = MessageCatalog::new(locale);

	for node in document.nodes() {
		match node.name().value() {
			"locale" => (),
			"message" => {
				let mut args = node
					.entries()
					.iter()
					.filter(|entry| entry.name().is_none())
					.map(|entry| entry.value().as_string());
				let (Some(Some(id)), Some(Some(text))) = (args.next(), args.next()) else {
					bail!("message nodes need a string id and a string text");
				};
				catalog.insert(id, text);
			}
			other => tracing::warn!(node = other, "Ignoring unknown node in translations file"),
		}
	}

	Ok(catalog)
}
