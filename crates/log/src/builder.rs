// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The hdfspp contributors

//! Builder pattern for configuring a logging context

use std::env::{self, VarError};

use hdfspp_abi::LogCallbackFFI;
use tracing::debug;

use crate::{
	Component, ComponentMask, Error, Gate, LogContext, LoggingConfig, Result, Severity,
	backend::{
		LogBackend, console_builder::ConsoleBuilder, forward::ForwardingBackend, memory::MemoryBackend,
		memory::MemoryHandle, tracing::TracingBackend,
	},
};

pub const LEVEL_VAR: &str = "HDFSPP_LOG_LEVEL";
pub const COMPONENTS_VAR: &str = "HDFSPP_LOG_COMPONENTS";

/// Builder for configuring a logging context
///
/// Without any backend chosen a console backend with default settings is
/// used. The gate starts out letting everything through.
pub struct LoggingBuilder {
	backend: Option<Box<dyn LogBackend>>,
	gate: Gate,
}

impl LoggingBuilder {
	pub fn new() -> Self {
		Self {
			backend: None,
			gate: Gate::default(),
		}
	}

	/// Use a console backend configured through `configure`
	///
	/// # Example
	/// ```
	/// # use hdfspp_log::LoggingBuilder;
	/// let context = LoggingBuilder::new().with_console(|console| console.timestamp(false).color(true)).build();
	/// # assert_eq!(context.backend_name(), Some("console"));
	/// ```
	pub fn with_console<F>(self, configure: F) -> Self
	where
		F: FnOnce(ConsoleBuilder) -> ConsoleBuilder,
	{
		self.with_backend(Box::new(configure(ConsoleBuilder::new()).build()))
	}

	/// Forward every message to a C callback; `None` installs a silent hook
	pub fn with_forwarding(self, callback: Option<LogCallbackFFI>) -> Self {
		self.with_backend(Box::new(ForwardingBackend::with_callback(callback)))
	}

	pub fn with_tracing(self) -> Self {
		self.with_backend(Box::new(TracingBackend::new()))
	}

	/// Capture messages into `handle`
	pub fn with_memory(self, handle: MemoryHandle) -> Self {
		self.with_backend(Box::new(MemoryBackend::with_handle(handle)))
	}

	pub fn with_backend(mut self, backend: Box<dyn LogBackend>) -> Self {
		self.backend = Some(backend);
		self
	}

	pub fn level(mut self, threshold: Severity) -> Self {
		self.gate.set_threshold(threshold);
		self
	}

	pub fn enable(mut self, component: Component) -> Self {
		self.gate.enable(component);
		self
	}

	pub fn disable(mut self, component: Component) -> Self {
		self.gate.disable(component);
		self
	}

	/// Enable exactly the given components and disable every other one
	pub fn only<I>(mut self, components: I) -> Self
	where
		I: IntoIterator<Item = Component>,
	{
		self.gate.set_mask(components.into_iter().collect());
		self
	}

	/// Apply `HDFSPP_LOG_LEVEL` and `HDFSPP_LOG_COMPONENTS`
	pub fn from_env(self) -> Result<Self> {
		let level = read_var(LEVEL_VAR)?;
		let components = read_var(COMPONENTS_VAR)?;
		self.with_env_values(level.as_deref(), components.as_deref())
	}

	/// Apply raw environment values; `None` leaves the setting untouched
	///
	/// `level` is a severity name or code. `components` is a comma-separated
	/// list that replaces the mask, so an empty list disables every component.
	pub fn with_env_values(mut self, level: Option<&str>, components: Option<&str>) -> Result<Self> {
		if let Some(level) = level {
			let threshold = level.parse::<Severity>().map_err(|err| environment(LEVEL_VAR, err))?;
			self.gate.set_threshold(threshold);
		}

		if let Some(components) = components {
			let mask = components
				.split(',')
				.map(str::trim)
				.filter(|name| !name.is_empty())
				.map(|name| name.parse::<Component>())
				.collect::<Result<ComponentMask>>()
				.map_err(|err| environment(COMPONENTS_VAR, err))?;
			self.gate.set_mask(mask);
		}

		debug!(
			threshold = %self.gate.threshold(),
			mask = self.gate.mask().bits(),
			"logging configured from environment"
		);
		Ok(self)
	}

	/// Apply a deserialized configuration, selecting a console backend
	pub fn from_config(self, config: &LoggingConfig) -> Self {
		let mut builder = self.with_backend(Box::new(config.console.builder().build()));
		builder.gate = config.gate();
		builder
	}

	pub fn gate(&self) -> Gate {
		self.gate
	}

	/// Create a new context holding the configured backend
	pub fn build(self) -> LogContext {
		let (backend, gate) = self.finish();
		LogContext::with_gate(backend, gate)
	}

	/// Replace the backend and gate of an existing context
	pub fn install(self, context: &LogContext) {
		let (backend, gate) = self.finish();
		context.install_with_gate(backend, gate);
	}

	fn finish(self) -> (Box<dyn LogBackend>, Gate) {
		let backend = self.backend.unwrap_or_else(|| Box::new(ConsoleBuilder::new().build()));
		(backend, self.gate)
	}
}

impl Default for LoggingBuilder {
	fn default() -> Self {
		Self::new()
	}
}

fn read_var(name: &'static str) -> Result<Option<String>> {
	match env::var(name) {
		Ok(value) => Ok(Some(value)),
		Err(VarError::NotPresent) => Ok(None),
		Err(VarError::NotUnicode(_)) => Err(Error::Environment {
			name,
			reason: "value is not valid unicode".to_string(),
		}),
	}
}

fn environment(name: &'static str, err: Error) -> Error {
	Error::Environment {
		name,
		reason: err.to_string(),
	}
}
