// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The hdfspp contributors

//! C entry points acting on the global logging context

use std::ffi::c_int;

use hdfspp_abi::{LogCallbackFFI, LogDataFFI};
use tracing::warn;

use crate::{Component, LogContext, Result, Severity, backend::forward::ForwardingBackend};

const SUCCESS: c_int = 0;
const FAILURE: c_int = 1;

/// Install a forwarding backend calling `hook`; null silences all output
#[unsafe(no_mangle)]
#[allow(non_snake_case)]
pub extern "C" fn hdfsSetLogFunction(hook: Option<LogCallbackFFI>) {
	LogContext::global().install(Box::new(ForwardingBackend::with_callback(hook)));
}

/// # Safety
/// `data` must be null or point to a valid record whose `msg` is null or a
/// NUL-terminated string.
#[unsafe(no_mangle)]
#[allow(non_snake_case)]
pub unsafe extern "C" fn hdfsCopyLogData(data: *const LogDataFFI) -> *mut LogDataFFI {
	// SAFETY: forwarded caller contract
	unsafe { ForwardingBackend::duplicate(data) }
}

/// # Safety
/// `data` must be null or a pointer returned by [`hdfsCopyLogData`] that has
/// not been freed yet.
#[unsafe(no_mangle)]
#[allow(non_snake_case)]
pub unsafe extern "C" fn hdfsFreeLogData(data: *mut LogDataFFI) {
	// SAFETY: forwarded caller contract
	unsafe { ForwardingBackend::release(data) }
}

#[unsafe(no_mangle)]
#[allow(non_snake_case)]
pub extern "C" fn hdfsEnableLoggingForComponent(component: c_int) -> c_int {
	status("hdfsEnableLoggingForComponent", Component::try_from(component).map(|component| {
		LogContext::global().enable_component(component);
	}))
}

#[unsafe(no_mangle)]
#[allow(non_snake_case)]
pub extern "C" fn hdfsDisableLoggingForComponent(component: c_int) -> c_int {
	status("hdfsDisableLoggingForComponent", Component::try_from(component).map(|component| {
		LogContext::global().disable_component(component);
	}))
}

#[unsafe(no_mangle)]
#[allow(non_snake_case)]
pub extern "C" fn hdfsSetLoggingLevel(level: c_int) -> c_int {
	status("hdfsSetLoggingLevel", Severity::try_from(level).map(|severity| {
		LogContext::global().set_severity_threshold(severity);
	}))
}

fn status(function: &'static str, result: Result<()>) -> c_int {
	match result {
		Ok(()) => SUCCESS,
		Err(err) => {
			warn!(function, error = %err, "rejected logging configuration call");
			FAILURE
		}
	}
}
