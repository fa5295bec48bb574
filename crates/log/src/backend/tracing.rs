// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The hdfspp contributors

//! Backend bridging messages into the tracing ecosystem

use tracing::{debug, error, info, trace, warn};

use super::LogBackend;
use crate::{Message, Severity};

/// Emits every message as a `tracing` event with target `hdfspp`
///
/// The component is attached as a `component` field; whatever subscriber the
/// embedder installed decides how the event is rendered.
#[derive(Debug, Default)]
pub struct TracingBackend;

impl TracingBackend {
	pub fn new() -> Self {
		Self
	}
}

impl LogBackend for TracingBackend {
	fn name(&self) -> &'static str {
		"tracing"
	}

	fn write(&mut self, message: &Message<'_>) {
		if !message.is_worth_reporting() {
			return;
		}

		let component = message.component().as_str();
		let text = message.text();
		match message.severity() {
			Severity::Trace => trace!(target: "hdfspp", component, "{}", text),
			Severity::Debug => debug!(target: "hdfspp", component, "{}", text),
			Severity::Info => info!(target: "hdfspp", component, "{}", text),
			Severity::Warning => warn!(target: "hdfspp", component, "{}", text),
			Severity::Error => error!(target: "hdfspp", component, "{}", text),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::{io, sync::Arc};

	use parking_lot::Mutex;

	use super::*;
	use crate::{Component, LogContext};

	#[derive(Clone, Default)]
	struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

	impl io::Write for SharedBuffer {
		fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
			self.0.lock().extend_from_slice(buf);
			Ok(buf.len())
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	#[test]
	fn test_events_reach_subscriber() {
		let buffer = SharedBuffer::default();
		let writer = buffer.clone();
		let subscriber = tracing_subscriber::fmt()
			.with_writer(move || writer.clone())
			.with_ansi(false)
			.with_max_level(tracing::Level::TRACE)
			.finish();

		tracing::subscriber::with_default(subscriber, || {
			let context = LogContext::new(Box::new(TracingBackend::new()));
			context.message(Severity::Warning, Component::BlockReader).append("checksum mismatch");
			context.message(Severity::Trace, Component::Rpc).append("call id 12");
		});

		let output = String::from_utf8(buffer.0.lock().clone()).unwrap();
		let lines: Vec<&str> = output.lines().filter(|l| l.contains("hdfspp:")).collect();
		assert_eq!(lines.len(), 2);
		assert!(lines[0].contains("WARN"));
		assert!(lines[0].contains("checksum mismatch"));
		assert!(lines[0].contains("component=\"BlockReader\""));
		assert!(lines[1].contains("TRACE"));
		assert!(lines[1].contains("call id 12"));
	}
}
