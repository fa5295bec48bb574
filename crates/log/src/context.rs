// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The hdfspp contributors

//! Logging context owning the installed backend

use std::{cell::RefCell, time::Duration};

use once_cell::sync::Lazy;
use parking_lot::{Mutex, MutexGuard};
use tracing::{debug, warn};

use crate::{Component, Gate, Message, Severity, backend::LogBackend, backend::console::ConsoleBackend};

/// Lock wait once this thread's reentrancy tracking is already torn down
const TEARDOWN_WAIT: Duration = Duration::from_millis(100);

static GLOBAL: Lazy<LogContext> = Lazy::new(|| LogContext::new(Box::new(ConsoleBackend::new())));

thread_local! {
	/// Contexts whose backend is currently running on this thread
	static WRITING: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

struct Installed {
	gate: Gate,
	backend: Box<dyn LogBackend>,
}

/// Owns at most one backend and serializes every access to it
///
/// Gating, writing, configuration and backend swaps all take the same lock
/// for their whole duration, so no two of them ever run concurrently on one
/// context. Components that log hold a reference to the context they were
/// given; [`LogContext::global`] is the process-wide default, created on first
/// use with a [`ConsoleBackend`] installed.
///
/// When a backend logs through its own context from inside `write` or
/// `flush`, the nested statement is dropped and nested configuration calls are
/// ignored instead of deadlocking.
pub struct LogContext {
	inner: Mutex<Option<Installed>>,
}

impl LogContext {
	/// Context with `backend` installed behind a default gate
	pub fn new(backend: Box<dyn LogBackend>) -> Self {
		Self::with_gate(backend, Gate::default())
	}

	pub fn with_gate(backend: Box<dyn LogBackend>, gate: Gate) -> Self {
		Self {
			inner: Mutex::new(Some(Installed {
				gate,
				backend,
			})),
		}
	}

	/// Context without a backend; everything logged through it is dropped
	pub fn empty() -> Self {
		Self {
			inner: Mutex::new(None),
		}
	}

	pub fn global() -> &'static LogContext {
		&GLOBAL
	}

	/// Start a log statement against this context
	pub fn message(&self, severity: Severity, component: Component) -> Message<'_> {
		Message::new(self, severity, component)
	}

	pub fn should_log(&self, severity: Severity, component: Component) -> bool {
		match self.lock() {
			Some(guard) => guard.as_ref().is_some_and(|installed| installed.gate.allows(severity, component)),
			None => false,
		}
	}

	/// Hand a finished message to the installed backend
	pub fn write(&self, message: &Message<'_>) {
		let Some(mut guard) = self.lock() else {
			return;
		};
		if let Some(installed) = guard.as_mut() {
			let _scope = WriteScope::enter(self.key());
			installed.backend.write(message);
		}
	}

	pub fn flush(&self) {
		let Some(mut guard) = self.lock() else {
			return;
		};
		if let Some(installed) = guard.as_mut() {
			let _scope = WriteScope::enter(self.key());
			installed.backend.flush();
		}
	}

	pub fn enable_component(&self, component: Component) {
		self.configure(|gate| gate.enable(component));
	}

	pub fn disable_component(&self, component: Component) {
		self.configure(|gate| gate.disable(component));
	}

	pub fn set_severity_threshold(&self, severity: Severity) {
		self.configure(|gate| gate.set_threshold(severity));
	}

	/// Replace the installed gate as a whole
	pub fn set_gate(&self, gate: Gate) {
		self.configure(|current| *current = gate);
	}

	/// Snapshot of the gate, `None` when no backend is installed
	pub fn gate(&self) -> Option<Gate> {
		self.lock().and_then(|guard| guard.as_ref().map(|installed| installed.gate))
	}

	/// Name of the installed backend
	pub fn backend_name(&self) -> Option<&'static str> {
		self.lock().and_then(|guard| guard.as_ref().map(|installed| installed.backend.name()))
	}

	/// Swap in `backend` behind a default gate; the previous backend is dropped
	pub fn install(&self, backend: Box<dyn LogBackend>) {
		self.install_with_gate(backend, Gate::default());
	}

	pub fn install_with_gate(&self, backend: Box<dyn LogBackend>, gate: Gate) {
		let name = backend.name();
		if self.replace(Some(Installed {
			gate,
			backend,
		})) {
			debug!(backend = name, "installed log backend");
		} else {
			warn!(backend = name, "ignored backend install from inside the running backend");
		}
	}

	/// Drop the installed backend; later statements are silently discarded
	pub fn remove_backend(&self) {
		if self.replace(None) {
			debug!("removed log backend");
		} else {
			warn!("ignored backend removal from inside the running backend");
		}
	}

	/// Returns whether `next` was installed
	fn replace(&self, next: Option<Installed>) -> bool {
		let (previous, swapped) = match self.lock() {
			Some(mut guard) => (std::mem::replace(&mut *guard, next), true),
			None => (next, false),
		};
		// dropped outside the lock so a backend may log from its destructor
		drop(previous);
		swapped
	}

	fn configure(&self, change: impl FnOnce(&mut Gate)) {
		if let Some(mut guard) = self.lock() {
			if let Some(installed) = guard.as_mut() {
				change(&mut installed.gate);
			}
		}
	}

	/// Take the lock unless this thread is already inside this context's backend
	fn lock(&self) -> Option<MutexGuard<'_, Option<Installed>>> {
		let key = self.key();
		match WRITING.try_with(|writing| writing.borrow().contains(&key)) {
			Ok(true) => None,
			Ok(false) => Some(self.inner.lock()),
			// thread exit: nesting can no longer be detected, so never block for good
			Err(_) => self.inner.try_lock_for(TEARDOWN_WAIT),
		}
	}

	fn key(&self) -> usize {
		self as *const Self as usize
	}
}

impl Default for LogContext {
	fn default() -> Self {
		Self::new(Box::new(ConsoleBackend::new()))
	}
}

struct WriteScope {
	entered: bool,
}

impl WriteScope {
	fn enter(key: usize) -> Self {
		let entered = WRITING.try_with(|writing| writing.borrow_mut().push(key)).is_ok();
		WriteScope {
			entered,
		}
	}
}

impl Drop for WriteScope {
	fn drop(&mut self) {
		if self.entered {
			let _ = WRITING.try_with(|writing| writing.borrow_mut().pop());
		}
	}
}
