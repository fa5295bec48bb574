// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The hdfspp contributors

//! Leveled, component-tagged logging for the hdfspp client
//!
//! Every log statement carries a [`Severity`] and a [`Component`]. A
//! [`LogContext`] owns one [`LogBackend`] together with the [`Gate`] deciding
//! which statements reach it. Statements are built with [`Message`], which
//! checks the gate once and skips all formatting when nothing would be
//! written.
//!
//! ```
//! use hdfspp_log::{Component, LoggingBuilder, MemoryHandle, Severity};
//!
//! let handle = MemoryHandle::new();
//! let context = LoggingBuilder::new().with_memory(handle.clone()).level(Severity::Info).build();
//!
//! context.message(Severity::Debug, Component::Rpc).append("not shown");
//! context.message(Severity::Warning, Component::Rpc).append("retrying call ").append(3u32);
//!
//! assert_eq!(handle.records()[0].text, "retrying call 3");
//! assert_eq!(handle.len(), 1);
//! ```

pub mod backend;
mod builder;
mod component;
mod config;
mod context;
mod error;
pub mod ffi;
mod gate;
mod macros;
mod message;
mod severity;

pub use backend::{
	LogBackend,
	console::ConsoleBackend,
	console_builder::ConsoleBuilder,
	forward::ForwardingBackend,
	memory::{CapturedRecord, MemoryBackend, MemoryHandle},
	tracing::TracingBackend,
};
pub use builder::{COMPONENTS_VAR, LEVEL_VAR, LoggingBuilder};
pub use component::{Component, ComponentMask};
pub use config::{ConsoleConfig, LoggingConfig};
pub use context::LogContext;
pub use error::{Error, Result};
pub use gate::Gate;
pub use hdfspp_abi::{LogCallbackFFI, LogDataFFI};
pub use message::{Loggable, Message};
pub use severity::Severity;
