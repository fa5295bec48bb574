// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The hdfspp contributors

//! Backend capturing messages in memory

use std::sync::Arc;

use parking_lot::Mutex;

use super::LogBackend;
use crate::{Component, Message, Severity};

/// Owned copy of a message written to a [`MemoryBackend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
	pub severity: Severity,
	pub component: Component,
	pub text: String,
}

/// Shared view of everything a [`MemoryBackend`] captured
///
/// The handle stays usable after the backend was installed into (and even
/// replaced in) a context.
#[derive(Debug, Clone, Default)]
pub struct MemoryHandle {
	records: Arc<Mutex<Vec<CapturedRecord>>>,
}

impl MemoryHandle {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn records(&self) -> Vec<CapturedRecord> {
		self.records.lock().clone()
	}

	/// Remove and return everything captured so far
	pub fn take(&self) -> Vec<CapturedRecord> {
		std::mem::take(&mut *self.records.lock())
	}

	pub fn len(&self) -> usize {
		self.records.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.lock().is_empty()
	}

	pub fn clear(&self) {
		self.records.lock().clear();
	}

	pub fn count_severity(&self, severity: Severity) -> usize {
		self.records.lock().iter().filter(|r| r.severity == severity).count()
	}

	pub fn count_component(&self, component: Component) -> usize {
		self.records.lock().iter().filter(|r| r.component == component).count()
	}
}

/// Records every message it receives into a [`MemoryHandle`]
#[derive(Debug, Default)]
pub struct MemoryBackend {
	handle: MemoryHandle,
}

impl MemoryBackend {
	pub fn new() -> Self {
		Self::default()
	}

	/// Capture into an existing handle
	pub fn with_handle(handle: MemoryHandle) -> Self {
		Self {
			handle,
		}
	}

	pub fn handle(&self) -> MemoryHandle {
		self.handle.clone()
	}
}

impl LogBackend for MemoryBackend {
	fn name(&self) -> &'static str {
		"memory"
	}

	fn write(&mut self, message: &Message<'_>) {
		if !message.is_worth_reporting() {
			return;
		}

		self.handle.records.lock().push(CapturedRecord {
			severity: message.severity(),
			component: message.component(),
			text: message.text().to_string(),
		});
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::LogContext;

	#[test]
	fn test_handle_survives_replacement() {
		let backend = MemoryBackend::new();
		let handle = backend.handle();
		let context = LogContext::new(Box::new(backend));

		context.message(Severity::Info, Component::Rpc).append("before");
		context.remove_backend();
		context.message(Severity::Info, Component::Rpc).append("after");

		assert_eq!(
			handle.records(),
			vec![CapturedRecord {
				severity: Severity::Info,
				component: Component::Rpc,
				text: "before".to_string(),
			}]
		);
	}

	#[test]
	fn test_counters_and_take() {
		let handle = MemoryHandle::new();
		let context = LogContext::new(Box::new(MemoryBackend::with_handle(handle.clone())));

		context.message(Severity::Warning, Component::FileSystem).append("a");
		context.message(Severity::Warning, Component::Rpc).append("b");
		context.message(Severity::Error, Component::Rpc).append("c");

		assert_eq!(handle.count_severity(Severity::Warning), 2);
		assert_eq!(handle.count_component(Component::Rpc), 2);
		assert_eq!(handle.take().len(), 3);
		assert!(handle.is_empty());
	}
}
