// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The hdfspp contributors

//! Pluggable consumers of log messages

pub mod console;
pub mod console_builder;
pub mod forward;
pub mod memory;
pub mod tracing;

use crate::Message;

/// Consumer of log messages installed into a [`LogContext`](crate::LogContext)
///
/// Gating is not part of this trait: the context keeps the
/// [`Gate`](crate::Gate) next to the installed backend and evaluates it
/// without a dynamic call. `write` only sees messages that passed the gate
/// when they were created, and is always called with the context's lock held,
/// so implementations never run concurrently with each other or with a swap.
pub trait LogBackend: Send {
	/// Short name used in the facility's own diagnostics
	fn name(&self) -> &'static str;

	/// Consume one message
	fn write(&mut self, message: &Message<'_>);

	/// Flush any buffered output
	fn flush(&mut self) {}
}
