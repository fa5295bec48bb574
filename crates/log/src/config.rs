// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The hdfspp contributors

//! Serializable logging configuration

use serde::{Deserialize, Serialize};

use crate::{Component, ComponentMask, Gate, Severity, backend::console_builder::ConsoleBuilder};

/// Logging settings as they appear in a configuration file
///
/// Every field has a default, so an empty document yields a console backend
/// that shows everything.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
	pub level: Severity,
	/// Components to enable; `None` enables all of them
	pub components: Option<Vec<Component>>,
	pub console: ConsoleConfig,
}

impl LoggingConfig {
	pub fn gate(&self) -> Gate {
		let mask = match &self.components {
			Some(components) => components.iter().copied().collect(),
			None => ComponentMask::ALL,
		};
		Gate::new().with_threshold(self.level).with_mask(mask)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
	pub show_level: bool,
	pub show_component: bool,
	pub show_timestamp: bool,
	pub show_thread: bool,
	pub color: bool,
}

impl ConsoleConfig {
	pub fn builder(&self) -> ConsoleBuilder {
		ConsoleBuilder::new()
			.level(self.show_level)
			.component(self.show_component)
			.timestamp(self.show_timestamp)
			.thread(self.show_thread)
			.color(self.color)
	}
}

impl Default for ConsoleConfig {
	fn default() -> Self {
		Self {
			show_level: true,
			show_component: true,
			show_timestamp: true,
			show_thread: true,
			color: false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_document_is_default() {
		let config: LoggingConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config, LoggingConfig::default());
		assert_eq!(config.gate(), Gate::default());
	}

	#[test]
	fn test_deserialize() {
		let config: LoggingConfig = serde_json::from_str(
			r#"{
				"level": "warn",
				"components": ["rpc", "block_reader"],
				"console": { "show_timestamp": false, "color": true }
			}"#,
		)
		.unwrap();

		assert_eq!(config.level, Severity::Warning);
		assert_eq!(config.components, Some(vec![Component::Rpc, Component::BlockReader]));
		assert!(!config.console.show_timestamp);
		assert!(config.console.show_thread);
		assert!(config.console.color);

		let gate = config.gate();
		assert!(gate.allows(Severity::Warning, Component::BlockReader));
		assert!(!gate.allows(Severity::Info, Component::Rpc));
		assert!(!gate.allows(Severity::Error, Component::FileSystem));
	}

	#[test]
	fn test_empty_component_list_disables_everything() {
		let config: LoggingConfig = serde_json::from_str(r#"{ "components": [] }"#).unwrap();
		assert_eq!(config.gate().mask(), ComponentMask::NONE);
	}

	#[test]
	fn test_unknown_level_rejected() {
		assert!(serde_json::from_str::<LoggingConfig>(r#"{ "level": "loud" }"#).is_err());
	}

	#[test]
	fn test_serialize_round_trip() {
		let config = LoggingConfig {
			level: Severity::Debug,
			components: Some(vec![Component::FileHandle]),
			console: ConsoleConfig {
				color: true,
				..ConsoleConfig::default()
			},
		};
		let json = serde_json::to_string(&config).unwrap();
		assert_eq!(serde_json::from_str::<LoggingConfig>(&json).unwrap(), config);
	}
}
