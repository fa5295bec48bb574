// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The hdfspp contributors

//! Builder for configuring console logging backend

use super::console::ConsoleBackend;

/// Builder for configuring console logging backend with fluent API
#[derive(Debug, Clone)]
pub struct ConsoleBuilder {
	show_level: bool,
	show_component: bool,
	show_timestamp: bool,
	show_thread: bool,
	use_color: bool,
}

impl ConsoleBuilder {
	/// Create a new console builder with every header part shown and colors off
	pub fn new() -> Self {
		Self {
			show_level: true,
			show_component: true,
			show_timestamp: true,
			show_thread: true,
			use_color: false,
		}
	}

	/// Show or hide the severity label
	///
	/// # Example
	/// ```
	/// # use hdfspp_log::ConsoleBuilder;
	/// ConsoleBuilder::new().level(false);
	/// ```
	pub fn level(mut self, show: bool) -> Self {
		self.show_level = show;
		self
	}

	/// Show or hide the component label
	pub fn component(mut self, show: bool) -> Self {
		self.show_component = show;
		self
	}

	/// Show or hide the bracketed local timestamp
	pub fn timestamp(mut self, show: bool) -> Self {
		self.show_timestamp = show;
		self
	}

	/// Show or hide the id of the logging thread
	pub fn thread(mut self, show: bool) -> Self {
		self.show_thread = show;
		self
	}

	/// Enable or disable colored severity labels
	///
	/// # Example
	/// ```
	/// # use hdfspp_log::ConsoleBuilder;
	/// ConsoleBuilder::new().color(true);
	/// ```
	pub fn color(mut self, enabled: bool) -> Self {
		self.use_color = enabled;
		self
	}

	/// Build the console backend with the configured settings
	pub fn build(self) -> ConsoleBackend {
		ConsoleBackend::new()
			.with_level(self.show_level)
			.with_component(self.show_component)
			.with_timestamp(self.show_timestamp)
			.with_thread(self.show_thread)
			.with_color(self.use_color)
	}
}

impl Default for ConsoleBuilder {
	fn default() -> Self {
		Self::new()
	}
}
